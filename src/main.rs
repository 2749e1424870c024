//! Calendar widget CLI application.
//!
//! # Usage
//! ```ignore
//! calview                  // Current month
//! calview 2 2026           // February 2026
//! calview 31 1 2024 -e n   // Jan 31 2024, then next month
//! calview -i               // Interactive session
//! ```

use calview::app::run;
use calview::args::Args;
use calview::error::Result;
use flexi_logger::{FileSpec, Logger, LoggerHandle};

const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() {
    let args = Args::parse();

    let result = init_logger(&args).and_then(|_logger| run(&args));
    if let Err(e) = result {
        eprintln!("calview: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(args: &Args) -> Result<LoggerHandle> {
    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file.clone())?)
            .print_message();
    }

    Ok(logger.start()?)
}
