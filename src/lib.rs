//! ghfeed - Fetch the recent public activity of a GitHub user

pub mod cli;
pub mod config;
pub mod constants;
pub mod github;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{Settings, SettingsBuilder};
pub use github::{ActivityClient, Event, EventFetcher};
