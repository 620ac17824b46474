//! Logger setup

use crate::constants::logging::{DEFAULT_FILTER, VERBOSE_FILTER};
use env_logger::Env;

/// Initialize the global logger, writing to stderr
///
/// `RUST_LOG` overrides the default filter. Calling this more than once is a
/// no-op.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .try_init();
}
