//! Month/year navigation over [`ReferenceDate`].
//!
//! Every transition is total and returns a new value. When the target month
//! is shorter than the current day, the day is clamped to the month's last
//! day (Jan 31 -> Feb 28/29, never Mar 2/3).

use std::collections::VecDeque;

use crate::types::ReferenceDate;

/// Maximum number of previous reference dates kept for undo.
pub const HISTORY_LIMIT: usize = 64;

impl ReferenceDate {
    /// Move by `delta` months, wrapping across years and clamping the day.
    pub fn shift_months(self, delta: i32) -> Self {
        let total = self.year() * 12 + self.month() as i32 + delta;
        ReferenceDate::new(
            total.div_euclid(12),
            total.rem_euclid(12) as u32,
            self.day(),
        )
    }

    pub fn previous_month(self) -> Self {
        self.shift_months(-1)
    }

    pub fn next_month(self) -> Self {
        self.shift_months(1)
    }

    pub fn previous_year(self) -> Self {
        self.shift_months(-12)
    }

    pub fn next_year(self) -> Self {
        self.shift_months(12)
    }

    /// Replace the day, clamping it into `[1, days_in_month]`.
    pub fn select_day(self, day: u32) -> Self {
        let resolved = ReferenceDate::new(self.year(), self.month(), day);
        if resolved.day() != day {
            log::debug!(
                "day {} out of range for {}-{:02}, clamped to {}",
                day,
                self.year(),
                self.month() + 1,
                resolved.day()
            );
        }
        resolved
    }
}

/// A navigation request understood by [`NavigationController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    Today,
    SelectDay(u32),
}

/// Owner of the authoritative reference date.
#[derive(Debug, Clone)]
pub struct NavigationController {
    reference: ReferenceDate,
    history: VecDeque<ReferenceDate>,
}

impl NavigationController {
    pub fn new(initial: ReferenceDate) -> Self {
        NavigationController {
            reference: initial,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    pub fn reference(&self) -> ReferenceDate {
        self.reference
    }

    /// Previous reference dates, oldest first.
    pub fn history(&self) -> &VecDeque<ReferenceDate> {
        &self.history
    }

    /// The real-world current date, ignoring the prior reference.
    pub fn jump_to_today(today: ReferenceDate) -> ReferenceDate {
        today
    }

    /// Apply one transition. `today` is only read by [`Navigation::Today`].
    ///
    /// Transitions that leave the date unchanged are not recorded for undo.
    pub fn apply(&mut self, nav: Navigation, today: ReferenceDate) -> ReferenceDate {
        let current = self.reference;
        let next = match nav {
            Navigation::PreviousMonth => current.previous_month(),
            Navigation::NextMonth => current.next_month(),
            Navigation::PreviousYear => current.previous_year(),
            Navigation::NextYear => current.next_year(),
            Navigation::Today => Self::jump_to_today(today),
            Navigation::SelectDay(day) => current.select_day(day),
        };
        if next == current {
            return current;
        }
        log::debug!("{:?}: {} -> {}", nav, current, next);

        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(current);
        self.reference = next;
        next
    }

    /// Restore the previous reference date. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                log::debug!("undo: {} -> {}", self.reference, previous);
                self.reference = previous;
                true
            }
            None => false,
        }
    }
}
