//! Resolved runtime settings

use crate::utils::validators;
use anyhow::Result;
use chrono::{DateTime, Utc};
use ghfeed_github::RateLimitPolicy;

/// Everything a run needs, after all configuration layers are merged
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub user: String,
    pub api_token: String,
    pub api_base: String,
    pub per_page: u32,
    pub from_date: DateTime<Utc>,
    pub sleep_for_rate: bool,
    pub min_rate_to_sleep: u32,
}

impl Settings {
    /// Validate the settings, reporting every problem at once
    pub fn validate(&self) -> Result<()> {
        validators::validate_settings(self).map_err(validators::validation_errors_to_anyhow)
    }

    pub fn rate_limit_policy(&self) -> RateLimitPolicy {
        RateLimitPolicy {
            sleep_for_rate: self.sleep_for_rate,
            min_rate_to_sleep: self.min_rate_to_sleep,
        }
    }
}
