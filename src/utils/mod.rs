//! Utility modules for common functionality

pub mod dates;
pub mod output;
pub mod validators;

// Re-export commonly used functions
pub use dates::{DEFAULT_DATETIME, datetime_to_utc, parse_from_date, str_to_datetime};
pub use output::render_event;
