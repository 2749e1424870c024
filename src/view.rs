//! View coordination: mode selection, event routing and per-render frames.

use std::str::FromStr;

use clap::ValueEnum;

use crate::error::CalError;
use crate::grid::build_grid;
use crate::navigation::{Navigation, NavigationController};
use crate::types::{Grid, ReferenceDate, ViewMode};

/// Input events sent by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    Today,
    SelectViewMode(ViewMode),
    /// Day picked on the mini-calendar.
    SelectDay(u32),
    Undo,
}

impl FromStr for Event {
    type Err = CalError;

    /// Parse long names (`next-month`, `view=week`, `select=12`) or
    /// one-letter aliases (`n`, `w`, `12`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        let invalid = || CalError::InvalidEvent(s.trim().to_string());

        if let Some((key, value)) = token.split_once('=') {
            return match key {
                "view" => ViewMode::from_str(value, true)
                    .map(Event::SelectViewMode)
                    .map_err(|_| invalid()),
                "select" | "day" => value
                    .parse()
                    .map(Event::SelectDay)
                    .map_err(|_| invalid()),
                _ => Err(invalid()),
            };
        }

        if let Ok(day) = token.parse::<u32>() {
            return Ok(Event::SelectDay(day));
        }

        // Single letters are case-sensitive: lowercase steps a month, uppercase a year
        match s.trim() {
            "p" => return Ok(Event::PreviousMonth),
            "n" => return Ok(Event::NextMonth),
            "P" => return Ok(Event::PreviousYear),
            "N" => return Ok(Event::NextYear),
            _ => {}
        }

        match token.as_str() {
            "prev-month" | "previous-month" => Ok(Event::PreviousMonth),
            "next-month" => Ok(Event::NextMonth),
            "prev-year" | "previous-year" => Ok(Event::PreviousYear),
            "next-year" => Ok(Event::NextYear),
            "t" | "today" => Ok(Event::Today),
            "m" | "month" => Ok(Event::SelectViewMode(ViewMode::Month)),
            "w" | "week" => Ok(Event::SelectViewMode(ViewMode::Week)),
            "d" | "day" => Ok(Event::SelectViewMode(ViewMode::Day)),
            "u" | "undo" => Ok(Event::Undo),
            _ => Err(invalid()),
        }
    }
}

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub reference: ReferenceDate,
    pub today: ReferenceDate,
    pub mode: ViewMode,
    /// Main calendar grid; only built in month mode.
    pub main: Option<Grid>,
    pub mini: Grid,
}

/// Keeps the view mode, the reference date and both grids consistent.
#[derive(Debug, Clone)]
pub struct ViewCoordinator {
    navigation: NavigationController,
    mode: ViewMode,
}

impl ViewCoordinator {
    pub fn new(initial: ReferenceDate, mode: ViewMode) -> Self {
        ViewCoordinator {
            navigation: NavigationController::new(initial),
            mode,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn reference(&self) -> ReferenceDate {
        self.navigation.reference()
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    /// Apply one event to completion.
    pub fn handle(&mut self, event: Event, today: ReferenceDate) {
        let nav = match event {
            Event::PreviousMonth => Navigation::PreviousMonth,
            Event::NextMonth => Navigation::NextMonth,
            Event::PreviousYear => Navigation::PreviousYear,
            Event::NextYear => Navigation::NextYear,
            Event::Today => Navigation::Today,
            Event::SelectDay(day) => Navigation::SelectDay(day),
            Event::SelectViewMode(mode) => {
                if mode != self.mode {
                    log::info!("view mode {:?} -> {:?}", self.mode, mode);
                }
                self.mode = mode;
                return;
            }
            Event::Undo => {
                if !self.navigation.undo() {
                    log::debug!("nothing to undo");
                }
                return;
            }
        };
        self.navigation.apply(nav, today);
    }

    /// Build the grids for the current state. Week and day modes produce no
    /// main grid; the mini-calendar is always built.
    pub fn render(&self, today: ReferenceDate) -> Frame {
        let reference = self.reference();
        let main = match self.mode {
            ViewMode::Month => Some(build_grid(reference, today)),
            ViewMode::Week | ViewMode::Day => None,
        };
        Frame {
            reference,
            today,
            mode: self.mode,
            main,
            mini: build_grid(reference, today),
        }
    }
}
