//! Central constants for the ghfeed application

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = ghfeed_github::DEFAULT_API_BASE;

    /// Events requested per page
    pub const DEFAULT_PER_PAGE: u32 = 30;

    /// Largest page size the events API accepts
    pub const MAX_PER_PAGE: u32 = 100;

    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
}

/// Default values for event fetching
pub mod events {
    /// Lower bound used when no `--from-date` is given
    pub const DEFAULT_FROM_DATE: &str = "1970-01-01";
}

/// Default values for logging
pub mod logging {
    /// Filter applied when `RUST_LOG` is unset
    pub const DEFAULT_FILTER: &str = "info";

    /// Filter applied with `--verbose`
    pub const VERBOSE_FILTER: &str = "debug";
}
