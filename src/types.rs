//! Type definitions and constants for the calendar widget.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use clap::ValueEnum;

/// Focused calendar date with a 0-indexed month (0 = January).
///
/// Values are never mutated in place: every navigation produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceDate {
    year: i32,
    month: u32,
    day: u32,
}

impl ReferenceDate {
    /// Build a reference date, clamping `day` into the month's valid range.
    ///
    /// # Panics
    /// If `month` is outside 0..=11. Callers normalize months by wraparound,
    /// so this only fires on a programming error.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let last = crate::calendar::days_in_month(year, month);
        ReferenceDate {
            year,
            month,
            day: day.clamp(1, last),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month index, 0 = January.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Convert to a chrono date. Fails only for years outside chrono's range.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }
}

impl From<NaiveDate> for ReferenceDate {
    fn from(date: NaiveDate) -> Self {
        ReferenceDate {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }
}

impl fmt::Display for ReferenceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

/// Which view the widget is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewMode {
    /// Month grid (the only fully rendered view).
    #[default]
    Month,
    /// Week view (placeholder).
    Week,
    /// Day view (placeholder).
    Day,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Month, ViewMode::Week, ViewMode::Day];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Month => "Month",
            ViewMode::Week => "Week",
            ViewMode::Day => "Day",
        }
    }

    /// Notice shown instead of a grid for views that are not built yet.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            ViewMode::Month => None,
            ViewMode::Week => Some("Week view is not yet available"),
            ViewMode::Day => Some("Day view is not yet available"),
        }
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the 1st of the month.
    Blank,
    Numbered {
        day: u32,
        is_today: bool,
        is_selected: bool,
    },
}

impl DayCell {
    pub fn day(&self) -> Option<u32> {
        match *self {
            DayCell::Blank => None,
            DayCell::Numbered { day, .. } => Some(day),
        }
    }
}

/// Leading blanks followed by the numbered days of one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
}

/// Cell density used when rendering a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    /// Main calendar: 3-column cells, 3-letter weekday names.
    Full,
    /// Mini-calendar: 2-column cells, 1-letter weekday names.
    Compact,
}

impl Density {
    pub fn cell_width(self) -> usize {
        match self {
            Density::Full => 3,
            Density::Compact => 2,
        }
    }

    /// Width of a rendered week row.
    pub fn row_width(self) -> usize {
        DAYS_PER_WEEK * self.cell_width() + (DAYS_PER_WEEK - 1)
    }
}

/// Column layout for the main calendar and the mini-calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnsMode {
    /// Fixed number of columns (1 = stacked, 2+ = side by side).
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Rendering options plus the source of "today".
#[derive(Clone, Debug)]
pub struct WidgetContext {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Column layout.
    pub columns: ColumnsMode,
    /// Width of gutter between the main grid and the mini-calendar.
    pub gutter_width: usize,
    /// Pinned date for "today"; `None` reads the local clock.
    pub fixed_today: Option<NaiveDate>,
}

// Constants for calendar layout
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEK_START: Weekday = Weekday::Sun;
pub const GUTTER_WIDTH_REGULAR: usize = 4;

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// Environment variable pinning today's date (YYYY-MM-DD)
pub const TEST_TIME_ENV: &str = "CALVIEW_TEST_TIME";

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_BOLD: &str = "\x1b[1m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
