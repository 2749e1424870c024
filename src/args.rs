//! Command-line argument parsing using clap.
//!
//! Arguments follow util-linux cal convention: `[[day] month] year`

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::error::{CalError, Result};
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, ColumnsMode, GUTTER_WIDTH_REGULAR, ReferenceDate, TEST_TIME_ENV,
    ViewMode, WidgetContext,
};

#[derive(Parser, Debug)]
#[command(name = "calview")]
#[command(about = "Calendar widget with month navigation and a mini-calendar", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Initial view mode.
    #[arg(
        short = 'v',
        long,
        default_value = "month",
        help_heading = "View options",
        value_name = "mode"
    )]
    pub view: ViewMode,

    /// Apply an event before rendering (repeatable).
    #[arg(
        short = 'e',
        long = "event",
        help_heading = "View options",
        value_name = "event"
    )]
    pub events: Vec<String>,

    /// Read events from standard input, one per line.
    #[arg(short = 'i', long, help_heading = "View options")]
    pub interactive: bool,

    /// Day (1-31) - optional, used with month and year.
    #[arg(index = 1, default_value = None, value_name = "day", value_hint = ValueHint::Other)]
    pub day_arg: Option<String>,

    /// Month (1-12 or name) - optional, used with year.
    #[arg(index = 2, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 3, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Columns for the main calendar and mini-calendar (1, 2 or "auto").
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,

    /// Write log messages to this file instead of stderr.
    #[arg(long, help_heading = "Output options", value_name = "path")]
    pub log_file: Option<PathBuf>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Events (for -e and interactive mode):
  p, prev-month      Previous month       n, next-month      Next month
  P, prev-year       Previous year        N, next-year       Next year
  t, today           Jump to today        u, undo            Undo last move
  m, w, d            Month/week/day view  view=<mode>        Select view
  <n>, select=<n>    Select day n (clamped to the month)
  q, quit            Leave interactive mode

Examples:
  calview                      Current month
  calview 2 2024               February 2024
  calview 31 1 2024 -e n       Jan 31 2024, then next month (Feb 29)
  calview -v week              Start in week view
  calview -i                   Interactive session";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl WidgetContext {
    pub fn new(args: &Args) -> Result<Self> {
        let color = !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s
                    .parse::<u32>()
                    .map_err(|_| CalError::InvalidColumns(s.to_string()))?;
                if n == 0 {
                    return Err(CalError::ZeroColumns);
                }
                ColumnsMode::Fixed(n)
            }
        };

        Ok(WidgetContext {
            color,
            columns,
            gutter_width: GUTTER_WIDTH_REGULAR,
            fixed_today: get_test_date(),
        })
    }

    /// Today's date, read once per call.
    pub fn today(&self) -> ReferenceDate {
        self.fixed_today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
            .into()
    }
}

/// Pinned date from the CALVIEW_TEST_TIME environment variable, if set and valid.
pub fn get_test_date() -> Option<chrono::NaiveDate> {
    let value = std::env::var(TEST_TIME_ENV).ok()?;
    match chrono::NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("ignoring {}={}: {}", TEST_TIME_ENV, value, e);
            None
        }
    }
}

fn parse_year(s: &str) -> Result<i32> {
    let year: i32 = s
        .parse()
        .map_err(|_| CalError::InvalidYear(s.to_string()))?;
    if !(1..=9999).contains(&year) {
        return Err(CalError::InvalidYear(s.to_string()));
    }
    Ok(year)
}

fn parse_month_arg(s: &str) -> Result<u32> {
    crate::formatter::parse_month(s).ok_or_else(|| CalError::InvalidMonth(s.to_string()))
}

/// Calculate the initial reference date from positional arguments.
///
/// Argument patterns:
/// - 1 arg: year (4 digits) or month (1-2 digits or name)
/// - 2 args: month year
/// - 3 args: day month year
///
/// When no day is given, today's day of month is kept (clamped to the month).
pub fn get_display_date(args: &Args, today: ReferenceDate) -> Result<ReferenceDate> {
    match (
        args.day_arg.as_deref(),
        args.month_arg.as_deref(),
        args.year_arg.as_deref(),
    ) {
        // One argument: could be year (4 digits) or month (1-2 digits)
        (Some(val), None, None) => {
            if let Ok(num) = val.parse::<i32>()
                && (1000..=9999).contains(&num)
            {
                return Ok(ReferenceDate::new(num, today.month(), today.day()));
            }
            let month = crate::formatter::parse_month(val)
                .ok_or_else(|| CalError::InvalidArgument(val.to_string()))?;
            Ok(ReferenceDate::new(today.year(), month, today.day()))
        }
        // Two arguments: month year (e.g., calview 2 2026)
        (Some(month), Some(year), None) => Ok(ReferenceDate::new(
            parse_year(year)?,
            parse_month_arg(month)?,
            today.day(),
        )),
        // Three arguments: day month year
        (Some(day), Some(month), Some(year)) => {
            let day_num = day
                .parse::<u32>()
                .map_err(|_| CalError::InvalidDay(day.to_string()))?;
            if !(1..=31).contains(&day_num) {
                return Err(CalError::InvalidDay(day.to_string()));
            }
            Ok(ReferenceDate::new(
                parse_year(year)?,
                parse_month_arg(month)?,
                day_num,
            ))
        }
        // No arguments: today
        (None, None, None) => Ok(today),
        // clap fills positionals in index order; only hand-built Args reach this
        _ => Err(CalError::InvalidCombination),
    }
}
