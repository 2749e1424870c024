//! Month grid construction.

use crate::calendar::{days_in_month, first_weekday_offset, is_same_day};
use crate::types::{DAYS_PER_WEEK, DayCell, Grid, ReferenceDate};

/// Build the grid for the month containing `reference`.
///
/// Emits one blank per weekday before the 1st (Sunday first), then every day
/// of the month. `today` must be sampled once by the caller so that a single
/// grid never mixes two different dates.
pub fn build_grid(reference: ReferenceDate, today: ReferenceDate) -> Grid {
    let (year, month) = (reference.year(), reference.month());
    let offset = first_weekday_offset(year, month) as usize;
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(offset + days as usize);
    cells.extend(std::iter::repeat_n(DayCell::Blank, offset));
    cells.extend((1..=days).map(|day| DayCell::Numbered {
        day,
        is_today: is_same_day(ReferenceDate::new(year, month, day), today),
        is_selected: day == reference.day(),
    }));

    Grid { year, month, cells }
}

impl Grid {
    /// Number of blank cells before day 1.
    pub fn leading_offset(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, DayCell::Blank))
            .count()
    }

    pub fn numbered_days(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().filter_map(DayCell::day)
    }

    /// Cells in rows of seven; the last row may be shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> + '_ {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The day flagged as today, if this grid shows today's month.
    pub fn today(&self) -> Option<u32> {
        self.cells.iter().find_map(|cell| match *cell {
            DayCell::Numbered {
                day,
                is_today: true,
                ..
            } => Some(day),
            _ => None,
        })
    }

    pub fn selected(&self) -> Option<u32> {
        self.cells.iter().find_map(|cell| match *cell {
            DayCell::Numbered {
                day,
                is_selected: true,
                ..
            } => Some(day),
            _ => None,
        })
    }
}
