//! Calendar widget engine with a terminal front end.
//!
//! Features:
//! - Month grid computation (Sunday-first, Gregorian)
//! - Month/year navigation with day clamping and undo
//! - Mini-calendar day selection synchronized with the main grid
//! - Month/week/day view modes (week and day are placeholders)

pub mod app;
pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod grid;
pub mod navigation;
pub mod types;
pub mod view;
