//! Errors raised by the command-line surface. Calendar operations never fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid argument combination")]
    InvalidCombination,

    #[error("Invalid year: {0} (must be 1-9999)")]
    InvalidYear(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0} (must be 1-31)")]
    InvalidDay(String),

    #[error("Unknown event: {0}")]
    InvalidEvent(String),

    #[error("Invalid columns value: {0}")]
    InvalidColumns(String),

    #[error("Columns must be positive")]
    ZeroColumns,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Logger setup failed: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, CalError>;
