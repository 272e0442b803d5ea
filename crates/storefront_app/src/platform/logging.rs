//! Platform logging initialization for the storefront binary.
//!
//! The terminal carries the rendered storefront, so logs default to
//! `./storefront.log` in the current working directory.

use std::path::PathBuf;

use log::LevelFilter;
use storefront_logging::LogDestination;

use super::config::LogTarget;

pub fn initialize(target: LogTarget, log_file: PathBuf, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let destination = match target {
        LogTarget::File => LogDestination::File(log_file),
        LogTarget::Terminal => LogDestination::Terminal,
        LogTarget::Both => LogDestination::Both(log_file),
    };

    storefront_logging::initialize(destination, level);
}
