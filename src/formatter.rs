//! Terminal rendering of frames with localization and color support.

use std::io::Write;

use chrono::{Locale, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::types::{
    COLOR_BOLD, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, ColumnsMode, DayCell,
    Density, Grid, ReferenceDate, ViewMode, WEEK_START, WidgetContext,
};
use crate::view::Frame;

/// Rows above the main grid (tabs, navigation bar, today button, spacer).
const MAIN_HEADER_ROWS: usize = 4;

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Month name in nominative case for the current locale (month is 0-indexed).
pub fn get_month_name(month: u32) -> String {
    const RU_NOMINATIVE: [&str; 12] = [
        "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
        "Октябрь", "Ноябрь", "Декабрь",
    ];

    match get_system_locale() {
        // chrono's %B yields the genitive form for Russian
        Locale::ru_RU => RU_NOMINATIVE[month as usize].to_string(),
        locale => localized_month(month, "%B", locale),
    }
}

/// Abbreviated month name for the current locale (month is 0-indexed).
pub fn get_short_month_name(month: u32) -> String {
    localized_month(month, "%b", get_system_locale())
}

fn localized_month(month: u32, fmt: &str, locale: Locale) -> String {
    NaiveDate::from_ymd_opt(2000, month + 1, 1)
        .map(|date| date.format_localized(fmt, locale).to_string())
        .unwrap_or_default()
}

/// Header label for the main calendar, e.g. "October 2026".
pub fn month_label(reference: ReferenceDate) -> String {
    format!("{} {}", get_month_name(reference.month()), reference.year())
}

/// Header label for the mini-calendar, e.g. "Oct 2026".
pub fn short_month_label(reference: ReferenceDate) -> String {
    format!(
        "{} {}",
        get_short_month_name(reference.month()),
        reference.year()
    )
}

/// Parse month from string (numeric 1-12 or name in English/Russian).
///
/// Returns the 0-indexed month.
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n - 1);
    }

    const ENGLISH: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    const RUSSIAN: [&str; 12] = [
        "январь",
        "февраль",
        "март",
        "апрель",
        "май",
        "июнь",
        "июль",
        "август",
        "сентябрь",
        "октябрь",
        "ноябрь",
        "декабрь",
    ];

    let s_lower = s.to_lowercase();
    ENGLISH
        .iter()
        .position(|name| *name == s_lower || (s_lower.len() == 3 && name.starts_with(&s_lower)))
        .or_else(|| RUSSIAN.iter().position(|name| *name == s_lower))
        .map(|idx| idx as u32)
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = visible_width(text);
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Display width of a string with ANSI escape sequences removed.
pub fn visible_width(s: &str) -> usize {
    let mut plain = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => plain.push(c),
        }
    }
    plain.width()
}

fn pad_to(s: &str, width: usize) -> String {
    let w = visible_width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

fn paint(ctx: &WidgetContext, code: &str, text: &str) -> String {
    if ctx.color {
        format!("{}{}{}", code, text, COLOR_RESET)
    } else {
        text.to_string()
    }
}

/// Weekdays in display order, starting on Sunday.
pub fn get_weekday_order() -> [Weekday; 7] {
    let mut order = [WEEK_START; 7];
    for i in 1..order.len() {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Weekday abbreviation sized for the density (3 letters full, 1 compact).
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale, density: Density) -> String {
    // 2000-01-02 was a Sunday
    let sunday = NaiveDate::from_ymd_opt(2000, 1, 2).unwrap_or_default();
    let date = sunday + chrono::Duration::days(weekday.num_days_from_sunday() as i64);
    let letters = match density {
        Density::Full => 3,
        Density::Compact => 1,
    };
    date.format_localized("%a", locale)
        .to_string()
        .chars()
        .take(letters)
        .collect()
}

/// Format weekday header row for the given density.
pub fn format_weekday_headers(ctx: &WidgetContext, density: Density) -> String {
    let locale = get_system_locale();
    let width = density.cell_width();
    let names: Vec<String> = get_weekday_order()
        .iter()
        .map(|&weekday| {
            let name = get_weekday_short_name(weekday, locale, density);
            let pad = width.saturating_sub(name.width());
            format!("{}{}", " ".repeat(pad), name)
        })
        .collect();
    paint(ctx, COLOR_SAND_YELLOW, &names.join(" "))
}

/// Format a single cell padded to the density's cell width.
///
/// Color priority: today > selected > regular
fn format_day(ctx: &WidgetContext, cell: &DayCell, density: Density) -> String {
    let width = density.cell_width();
    match *cell {
        DayCell::Blank => " ".repeat(width),
        DayCell::Numbered {
            day,
            is_today,
            is_selected,
        } => {
            let day_str = format!("{:>width$}", day, width = width);
            if is_today {
                paint(ctx, COLOR_REVERSE, &day_str)
            } else if is_selected {
                paint(ctx, COLOR_TEAL, &day_str)
            } else {
                day_str
            }
        }
    }
}

/// Format a grid as a weekday header row followed by week rows.
///
/// Every row has the same visible width; the last week is padded with blanks.
pub fn format_grid(ctx: &WidgetContext, grid: &Grid, density: Density) -> Vec<String> {
    let mut lines = Vec::with_capacity(7);
    lines.push(format_weekday_headers(ctx, density));

    for week in grid.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| format_day(ctx, cell, density))
            .collect();
        lines.push(pad_to(&cells.join(" "), density.row_width()));
    }

    lines
}

/// View-mode selector, active mode bracketed.
pub fn format_mode_tabs(ctx: &WidgetContext, mode: ViewMode) -> String {
    ViewMode::ALL
        .iter()
        .map(|&m| {
            if m == mode {
                paint(ctx, COLOR_BOLD, &format!("[{}]", m.label()))
            } else {
                format!(" {} ", m.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Header with year (« ») and month (‹ ›) buttons around a centered label.
pub fn format_navigation_bar(ctx: &WidgetContext, label: &str, width: usize) -> String {
    let inner = width.saturating_sub(8);
    format!(
        "«  ‹{}›  »",
        paint(ctx, COLOR_TEAL, &center_text(label, inner))
    )
}

/// Mini-calendar header: the label alone, month steps live in the main bar.
pub fn format_mini_header(ctx: &WidgetContext, label: &str, width: usize) -> String {
    paint(ctx, COLOR_TEAL, &center_text(label, width))
}

fn main_block(ctx: &WidgetContext, frame: &Frame) -> Vec<String> {
    let width = Density::Full.row_width();
    let mut lines = vec![
        center_text(&format_mode_tabs(ctx, frame.mode), width),
        format_navigation_bar(ctx, &month_label(frame.reference), width),
        center_text("[ Today ]", width),
        String::new(),
    ];

    match (&frame.main, frame.mode.placeholder()) {
        (Some(grid), _) => lines.extend(format_grid(ctx, grid, Density::Full)),
        (None, Some(notice)) => lines.push(center_text(notice, width)),
        (None, None) => {}
    }
    lines
}

fn mini_block(ctx: &WidgetContext, frame: &Frame) -> Vec<String> {
    let width = Density::Compact.row_width();
    let mut lines = vec![format_mini_header(
        ctx,
        &short_month_label(frame.reference),
        width,
    )];
    lines.extend(format_grid(ctx, &frame.mini, Density::Compact));
    lines
}

/// Number of side-by-side columns for the current context.
pub fn columns(ctx: &WidgetContext) -> u32 {
    match ctx.columns {
        ColumnsMode::Fixed(n) => n,
        ColumnsMode::Auto => {
            let needed =
                Density::Full.row_width() + ctx.gutter_width + Density::Compact.row_width();
            match get_terminal_width() {
                Some(w) if (w as usize) < needed => 1,
                _ => 2,
            }
        }
    }
}

/// Lay out a frame: main calendar and mini-calendar side by side or stacked.
pub fn format_frame(ctx: &WidgetContext, frame: &Frame) -> Vec<String> {
    let main = main_block(ctx, frame);
    let mini = mini_block(ctx, frame);

    if columns(ctx) < 2 {
        let mut lines = main;
        lines.push(String::new());
        lines.extend(mini);
        return lines;
    }

    // Mini-calendar header lines up with the spacer row above the main grid
    let top = MAIN_HEADER_ROWS - 1;
    let rows = main.len().max(top + mini.len());
    let main_width = Density::Full.row_width();
    let gutter = " ".repeat(ctx.gutter_width);

    (0..rows)
        .map(|row| {
            let left = main.get(row).map(String::as_str).unwrap_or("");
            match row.checked_sub(top).and_then(|i| mini.get(i)) {
                Some(right) => format!("{}{}{}", pad_to(left, main_width), gutter, right),
                None => left.trim_end().to_string(),
            }
        })
        .collect()
}

/// Write a frame to `out`.
pub fn print_frame<W: Write>(
    ctx: &WidgetContext,
    frame: &Frame,
    out: &mut W,
) -> std::io::Result<()> {
    for line in format_frame(ctx, frame) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
