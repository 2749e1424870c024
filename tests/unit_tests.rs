//! Unit tests for calendar arithmetic, navigation, grid building and view coordination.

use chrono::{Datelike, NaiveDate};

use calview::calendar::{
    days_in_month, first_weekday, first_weekday_offset, is_leap_year, is_same_day,
};
use calview::grid::build_grid;
use calview::navigation::{HISTORY_LIMIT, Navigation, NavigationController};
use calview::types::{DayCell, ReferenceDate, ViewMode};
use calview::view::{Event, ViewCoordinator};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Reference date with a 0-indexed month.
fn date(year: i32, month: u32, day: u32) -> ReferenceDate {
    ReferenceDate::new(year, month, day)
}

fn today() -> ReferenceDate {
    date(2024, 3, 10)
}

// ===========================================================================
// Leap year
// ===========================================================================

mod leap_year {
    use super::*;

    #[test]
    fn divisible_by_400() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn divisible_by_4_not_100() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2028));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn century_not_leap() {
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2200));
    }
}

// ===========================================================================
// Days in month
// ===========================================================================

mod days_in_month {
    use super::*;

    #[test]
    fn february_leap_rules() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
    }

    #[test]
    fn months_with_31_days() {
        for month in [0, 2, 4, 6, 7, 9, 11] {
            assert_eq!(days_in_month(2024, month), 31, "month {month}");
        }
    }

    #[test]
    fn months_with_30_days() {
        for month in [3, 5, 8, 10] {
            assert_eq!(days_in_month(2024, month), 30, "month {month}");
        }
    }

    #[test]
    fn matches_chrono_for_two_centuries() {
        for year in 1900..=2100 {
            for month in 0..12 {
                let first = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
                let next = first.checked_add_months(chrono::Months::new(1)).unwrap();
                let expected = (next - first).num_days() as u32;
                assert_eq!(days_in_month(year, month), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "month index out of range")]
    fn month_out_of_range_is_a_contract_violation() {
        days_in_month(2024, 12);
    }
}

// ===========================================================================
// First weekday offset (Zeller's congruence, Sunday = 0)
// ===========================================================================

mod first_weekday_offset {
    use super::*;

    #[test]
    fn known_dates() {
        // 2024-01-01 was a Monday
        assert_eq!(first_weekday_offset(2024, 0), 1);
        // 2024-04-01 was a Monday
        assert_eq!(first_weekday_offset(2024, 3), 1);
        // 2023-10-01 was a Sunday
        assert_eq!(first_weekday_offset(2023, 9), 0);
        // 2022-10-01 was a Saturday
        assert_eq!(first_weekday_offset(2022, 9), 6);
        // 2000-03-01 was a Wednesday
        assert_eq!(first_weekday_offset(2000, 2), 3);
    }

    #[test]
    fn matches_chrono_and_stays_in_range() {
        for year in (-400..=-380).chain(1..=40).chain(1890..=2110) {
            for month in 0..12 {
                let offset = first_weekday_offset(year, month);
                assert!(offset <= 6);
                let expected = NaiveDate::from_ymd_opt(year, month + 1, 1)
                    .unwrap()
                    .weekday()
                    .num_days_from_sunday();
                assert_eq!(offset, expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn weekday_agrees_with_offset() {
        assert_eq!(first_weekday(2024, 0), chrono::Weekday::Mon);
        assert_eq!(first_weekday(2023, 9), chrono::Weekday::Sun);
        assert_eq!(first_weekday(2022, 9), chrono::Weekday::Sat);
    }

    #[test]
    #[should_panic(expected = "month index out of range")]
    fn month_out_of_range_is_a_contract_violation() {
        first_weekday_offset(2024, 12);
    }
}

// ===========================================================================
// Reference date
// ===========================================================================

mod reference_date {
    use super::*;

    #[test]
    fn new_clamps_day() {
        assert_eq!(date(2023, 1, 31).day(), 28);
        assert_eq!(date(2024, 1, 31).day(), 29);
        assert_eq!(date(2024, 0, 0).day(), 1);
    }

    #[test]
    fn converts_from_chrono_with_zero_based_month() {
        let reference = ReferenceDate::from(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert_eq!(reference, date(2024, 11, 25));
        assert_eq!(
            reference.to_naive_date(),
            NaiveDate::from_ymd_opt(2024, 12, 25)
        );
    }

    #[test]
    fn displays_as_iso_date() {
        assert_eq!(date(2024, 1, 9).to_string(), "2024-02-09");
    }

    #[test]
    fn same_day_compares_all_components() {
        assert!(is_same_day(date(2024, 3, 10), date(2024, 3, 10)));
        assert!(!is_same_day(date(2024, 3, 10), date(2024, 3, 11)));
        assert!(!is_same_day(date(2024, 3, 10), date(2024, 4, 10)));
        assert!(!is_same_day(date(2024, 3, 10), date(2023, 3, 10)));
    }
}

// ===========================================================================
// Navigation
// ===========================================================================

mod navigation {
    use super::*;

    #[test]
    fn month_steps_wrap_across_years() {
        assert_eq!(date(2024, 0, 15).previous_month(), date(2023, 11, 15));
        assert_eq!(date(2023, 11, 15).next_month(), date(2024, 0, 15));
        assert_eq!(date(2024, 5, 15).next_month(), date(2024, 6, 15));
    }

    #[test]
    fn month_steps_clamp_instead_of_rolling_over() {
        assert_eq!(date(2024, 0, 31).next_month(), date(2024, 1, 29));
        assert_eq!(date(2023, 0, 31).next_month(), date(2023, 1, 28));
        assert_eq!(date(2024, 2, 31).previous_month(), date(2024, 1, 29));
        assert_eq!(date(2024, 4, 31).next_month(), date(2024, 5, 30));
    }

    #[test]
    fn previous_then_next_round_trips_without_clamping() {
        for year in 2020..=2030 {
            for month in 0..12 {
                for day in 1..=28 {
                    let reference = date(year, month, day);
                    assert_eq!(reference.previous_month().next_month(), reference);
                }
            }
        }
    }

    #[test]
    fn round_trip_exception_after_clamp() {
        let reference = date(2024, 1, 29);
        let back = reference.previous_month();
        assert_eq!(back, date(2024, 0, 29));
        // February 2024 has 29 days, so this one survives the round trip
        assert_eq!(back.next_month(), date(2024, 1, 29));
        // A clamp on the way out is not undone on the way back
        assert_eq!(
            date(2024, 0, 31).next_month().previous_month(),
            date(2024, 0, 29)
        );
        assert_eq!(
            date(2024, 2, 31).previous_month().next_month(),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn year_steps_clamp_leap_day() {
        assert_eq!(date(2024, 1, 29).next_year(), date(2025, 1, 28));
        assert_eq!(date(2024, 1, 29).previous_year(), date(2023, 1, 28));
        assert_eq!(date(2024, 6, 4).next_year(), date(2025, 6, 4));
        assert_eq!(date(2000, 1, 29).previous_year().year(), 1999);
    }

    #[test]
    fn select_day_clamps_to_month_bounds() {
        assert_eq!(date(2024, 2, 5).select_day(40), date(2024, 2, 31));
        assert_eq!(date(2024, 2, 5).select_day(0), date(2024, 2, 1));
        assert_eq!(date(2024, 1, 5).select_day(30), date(2024, 1, 29));
        assert_eq!(date(2024, 2, 5).select_day(17), date(2024, 2, 17));
    }

    #[test]
    fn jump_to_today_ignores_prior_reference() {
        assert_eq!(NavigationController::jump_to_today(today()), today());

        let mut controller = NavigationController::new(date(1999, 11, 31));
        assert_eq!(controller.apply(Navigation::Today, today()), today());
    }

    #[test]
    fn controller_applies_transitions() {
        let mut controller = NavigationController::new(date(2024, 0, 31));
        controller.apply(Navigation::NextMonth, today());
        assert_eq!(controller.reference(), date(2024, 1, 29));
        controller.apply(Navigation::NextYear, today());
        assert_eq!(controller.reference(), date(2025, 1, 28));
        controller.apply(Navigation::SelectDay(3), today());
        assert_eq!(controller.reference(), date(2025, 1, 3));
        controller.apply(Navigation::PreviousYear, today());
        controller.apply(Navigation::PreviousMonth, today());
        assert_eq!(controller.reference(), date(2024, 0, 3));
    }

    #[test]
    fn undo_restores_previous_values() {
        let mut controller = NavigationController::new(date(2024, 0, 31));
        controller.apply(Navigation::NextMonth, today());
        controller.apply(Navigation::NextMonth, today());
        assert_eq!(controller.reference(), date(2024, 2, 29));
        assert_eq!(controller.history(), &[date(2024, 0, 31), date(2024, 1, 29)]);

        assert!(controller.undo());
        assert_eq!(controller.reference(), date(2024, 1, 29));
        assert!(controller.undo());
        assert_eq!(controller.reference(), date(2024, 0, 31));
        assert!(!controller.undo());
        assert_eq!(controller.reference(), date(2024, 0, 31));
    }

    #[test]
    fn repeated_selection_is_undone_in_one_step() {
        let mut controller = NavigationController::new(date(2024, 0, 5));
        controller.apply(Navigation::NextMonth, today());
        controller.apply(Navigation::SelectDay(5), today());
        controller.apply(Navigation::SelectDay(5), today());
        assert_eq!(controller.reference(), date(2024, 1, 5));
        assert_eq!(controller.history().len(), 1);

        assert!(controller.undo());
        assert_eq!(controller.reference(), date(2024, 0, 5));
        assert!(!controller.undo());
    }

    #[test]
    fn unchanged_transitions_are_not_recorded() {
        let mut controller = NavigationController::new(today());
        assert_eq!(controller.apply(Navigation::Today, today()), today());
        controller.apply(Navigation::SelectDay(10), today());
        assert!(controller.history().is_empty());
        assert!(!controller.undo());
    }

    #[test]
    fn history_is_bounded() {
        let start = date(2024, 0, 1);
        let mut controller = NavigationController::new(start);
        for _ in 0..HISTORY_LIMIT + 10 {
            controller.apply(Navigation::NextMonth, today());
        }
        assert_eq!(controller.history().len(), HISTORY_LIMIT);
        assert_eq!(controller.history()[0], start.shift_months(10));
        assert_eq!(
            controller.history().back(),
            Some(&start.shift_months(HISTORY_LIMIT as i32 + 9))
        );

        // Undo walks back from the newest entry after the oldest were dropped
        assert!(controller.undo());
        assert_eq!(
            controller.reference(),
            start.shift_months(HISTORY_LIMIT as i32 + 9)
        );
    }
}

// ===========================================================================
// Grid building
// ===========================================================================

mod grid {
    use super::*;

    #[test]
    fn length_is_offset_plus_days() {
        for year in 1990..=2030 {
            for month in 0..12 {
                let grid = build_grid(date(year, month, 1), today());
                let expected =
                    first_weekday_offset(year, month) + days_in_month(year, month);
                assert_eq!(grid.cells.len(), expected as usize, "{year}-{month}");
                assert_eq!(
                    grid.leading_offset(),
                    first_weekday_offset(year, month) as usize
                );
            }
        }
    }

    #[test]
    fn numbered_cells_increase_without_gaps() {
        let grid = build_grid(date(2024, 1, 1), today());
        let days: Vec<u32> = grid.numbered_days().collect();
        assert_eq!(days, (1..=29).collect::<Vec<_>>());
        assert!(
            grid.cells[grid.leading_offset()..]
                .iter()
                .all(|cell| cell.day().is_some())
        );
    }

    #[test]
    fn cells_fall_in_their_weekday_column() {
        let grid = build_grid(date(2026, 9, 17), today());
        for (idx, cell) in grid.cells.iter().enumerate() {
            if let Some(day) = cell.day() {
                let weekday = NaiveDate::from_ymd_opt(2026, 10, day).unwrap().weekday();
                assert_eq!(idx % 7, weekday.num_days_from_sunday() as usize);
            }
        }
    }

    #[test]
    fn april_2024_scenario() {
        let grid = build_grid(date(2024, 3, 15), date(2024, 3, 10));

        assert_eq!(grid.leading_offset(), 1);
        assert_eq!(grid.numbered_days().count(), 30);
        assert_eq!(grid.today(), Some(10));
        assert_eq!(grid.selected(), Some(15));
        assert_eq!(
            grid.cells[1 + 9],
            DayCell::Numbered {
                day: 10,
                is_today: true,
                is_selected: false
            }
        );
    }

    #[test]
    fn today_and_selected_flags_are_independent() {
        let grid = build_grid(date(2024, 3, 10), date(2024, 3, 10));
        assert_eq!(
            grid.cells[1 + 9],
            DayCell::Numbered {
                day: 10,
                is_today: true,
                is_selected: true
            }
        );
    }

    #[test]
    fn at_most_one_today_and_only_in_todays_month() {
        let today = date(2024, 3, 10);
        for month in 0..12 {
            let grid = build_grid(date(2024, month, 1), today);
            let count = grid
                .cells
                .iter()
                .filter(|cell| matches!(cell, DayCell::Numbered { is_today: true, .. }))
                .count();
            assert_eq!(count, usize::from(month == 3), "month {month}");
        }

        let other_year = build_grid(date(2023, 3, 10), today);
        assert_eq!(other_year.today(), None);
    }

    #[test]
    fn weeks_chunk_by_seven() {
        // March 2024: Friday start, 5 blanks + 31 days = 36 cells
        let grid = build_grid(date(2024, 2, 1), today());
        let weeks: Vec<_> = grid.weeks().collect();
        assert_eq!(weeks.len(), 6);
        assert!(weeks[..5].iter().all(|week| week.len() == 7));
        assert_eq!(weeks[5].len(), 1);
        assert_eq!(weeks[5][0].day(), Some(31));
    }

    #[test]
    fn sunday_start_has_no_blanks() {
        // September 2024 starts on a Sunday
        let grid = build_grid(date(2024, 8, 1), today());
        assert_eq!(grid.leading_offset(), 0);
        assert_eq!(grid.cells[0].day(), Some(1));
    }
}

// ===========================================================================
// View coordination
// ===========================================================================

mod view {
    use super::*;

    #[test]
    fn starts_in_requested_mode() {
        let view = ViewCoordinator::new(today(), ViewMode::default());
        assert_eq!(view.mode(), ViewMode::Month);
        assert_eq!(view.reference(), today());
    }

    #[test]
    fn any_mode_reachable_from_any_mode() {
        for from in ViewMode::ALL {
            for to in ViewMode::ALL {
                let mut view = ViewCoordinator::new(today(), from);
                view.handle(Event::SelectViewMode(to), today());
                assert_eq!(view.mode(), to);
                assert_eq!(view.reference(), today());
            }
        }
    }

    #[test]
    fn month_mode_builds_both_grids() {
        let view = ViewCoordinator::new(date(2024, 3, 15), ViewMode::Month);
        let frame = view.render(date(2024, 3, 10));

        let main = frame.main.expect("month mode builds the main grid");
        assert_eq!(main, frame.mini);
        assert_eq!(main.today(), Some(10));
        assert_eq!(frame.today, date(2024, 3, 10));
    }

    #[test]
    fn placeholder_modes_build_only_the_mini_calendar() {
        for mode in [ViewMode::Week, ViewMode::Day] {
            let view = ViewCoordinator::new(date(2024, 3, 15), mode);
            let frame = view.render(today());
            assert!(frame.main.is_none());
            assert_eq!(frame.mini.selected(), Some(15));
            assert!(mode.placeholder().is_some());
        }
        assert!(ViewMode::Month.placeholder().is_none());
    }

    #[test]
    fn mini_calendar_selection_drives_main_grid() {
        let mut view = ViewCoordinator::new(date(2024, 3, 15), ViewMode::Month);
        view.handle(Event::SelectDay(22), today());

        let frame = view.render(today());
        assert_eq!(frame.reference, date(2024, 3, 22));
        assert_eq!(frame.main.unwrap().selected(), Some(22));
        assert_eq!(frame.mini.selected(), Some(22));
    }

    #[test]
    fn selection_after_navigation_is_clamped() {
        let mut view = ViewCoordinator::new(date(2024, 0, 15), ViewMode::Month);
        view.handle(Event::NextMonth, today());
        view.handle(Event::SelectDay(31), today());
        assert_eq!(view.reference(), date(2024, 1, 29));
    }

    #[test]
    fn navigation_events_and_undo() {
        let mut view = ViewCoordinator::new(date(2024, 1, 29), ViewMode::Week);
        view.handle(Event::NextYear, today());
        assert_eq!(view.reference(), date(2025, 1, 28));
        view.handle(Event::Today, today());
        assert_eq!(view.reference(), today());
        view.handle(Event::Undo, today());
        view.handle(Event::Undo, today());
        assert_eq!(view.reference(), date(2024, 1, 29));
        assert_eq!(view.mode(), ViewMode::Week);
    }

    #[test]
    fn mode_changes_leave_history_alone() {
        let mut view = ViewCoordinator::new(today(), ViewMode::Month);
        view.handle(Event::SelectViewMode(ViewMode::Day), today());
        assert!(view.navigation().history().is_empty());
    }
}

// ===========================================================================
// Event parsing
// ===========================================================================

mod event_parsing {
    use super::*;

    #[test]
    fn long_names() {
        assert_eq!("prev-month".parse::<Event>().unwrap(), Event::PreviousMonth);
        assert_eq!("next-month".parse::<Event>().unwrap(), Event::NextMonth);
        assert_eq!("previous-year".parse::<Event>().unwrap(), Event::PreviousYear);
        assert_eq!("next-year".parse::<Event>().unwrap(), Event::NextYear);
        assert_eq!("Today".parse::<Event>().unwrap(), Event::Today);
        assert_eq!("undo".parse::<Event>().unwrap(), Event::Undo);
    }

    #[test]
    fn single_letter_case_selects_month_or_year() {
        assert_eq!("p".parse::<Event>().unwrap(), Event::PreviousMonth);
        assert_eq!("n".parse::<Event>().unwrap(), Event::NextMonth);
        assert_eq!("P".parse::<Event>().unwrap(), Event::PreviousYear);
        assert_eq!("N".parse::<Event>().unwrap(), Event::NextYear);
    }

    #[test]
    fn view_modes() {
        assert_eq!(
            "view=week".parse::<Event>().unwrap(),
            Event::SelectViewMode(ViewMode::Week)
        );
        assert_eq!(
            "d".parse::<Event>().unwrap(),
            Event::SelectViewMode(ViewMode::Day)
        );
        assert_eq!(
            "month".parse::<Event>().unwrap(),
            Event::SelectViewMode(ViewMode::Month)
        );
    }

    #[test]
    fn day_selection() {
        assert_eq!("12".parse::<Event>().unwrap(), Event::SelectDay(12));
        assert_eq!(" select=40 ".parse::<Event>().unwrap(), Event::SelectDay(40));
        assert_eq!("day=3".parse::<Event>().unwrap(), Event::SelectDay(3));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        for token in ["", "x", "view=year", "select=abc", "-3", "jump=1"] {
            let err = token.parse::<Event>().unwrap_err();
            assert!(err.to_string().starts_with("Unknown event"), "{token}");
        }
    }
}
