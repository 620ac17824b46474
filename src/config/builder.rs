//! Settings builder
//!
//! Layers are applied highest precedence first: values set explicitly win,
//! [`SettingsBuilder::merge_file`] and [`SettingsBuilder::with_env_token`]
//! only fill gaps, and [`SettingsBuilder::build`] supplies defaults for
//! whatever is still missing.

use super::{ConfigFile, Settings};
use crate::constants::github::{API_BASE, DEFAULT_PER_PAGE, TOKEN_ENV_VAR};
use crate::utils::dates::parse_from_date;
use anyhow::Result;

/// Builder for run settings
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    user: Option<String>,
    api_token: Option<String>,
    api_base: Option<String>,
    per_page: Option<u32>,
    from_date: Option<String>,
    sleep_for_rate: Option<bool>,
    min_rate_to_sleep: Option<u32>,
}

impl SettingsBuilder {
    /// Create an empty settings builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the lower bound as written by the user; parsed in [`Self::build`]
    pub fn with_from_date(mut self, from_date: impl Into<String>) -> Self {
        self.from_date = Some(from_date.into());
        self
    }

    pub fn with_sleep_for_rate(mut self, sleep_for_rate: bool) -> Self {
        self.sleep_for_rate = Some(sleep_for_rate);
        self
    }

    pub fn with_min_rate_to_sleep(mut self, min_rate_to_sleep: u32) -> Self {
        self.min_rate_to_sleep = Some(min_rate_to_sleep);
        self
    }

    /// Fill unset values from a config file
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        self.user = self.user.or(file.user);
        self.api_token = self.api_token.or(file.api_token);
        self.api_base = self.api_base.or(file.api_base);
        self.per_page = self.per_page.or(file.per_page);
        self.from_date = self.from_date.or(file.from_date);
        self.sleep_for_rate = self.sleep_for_rate.or(file.sleep_for_rate);
        self.min_rate_to_sleep = self.min_rate_to_sleep.or(file.min_rate_to_sleep);
        self
    }

    /// Fill an unset token from the GITHUB_TOKEN environment variable
    pub fn with_env_token(mut self) -> Self {
        if self.api_token.is_none() {
            self.api_token = std::env::var(TOKEN_ENV_VAR).ok();
        }
        self
    }

    /// Apply defaults and validate
    pub fn build(self) -> Result<Settings> {
        let settings = Settings {
            user: self.user.unwrap_or_default(),
            api_token: self.api_token.unwrap_or_default(),
            api_base: self
                .api_base
                .unwrap_or_else(|| API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            per_page: self.per_page.unwrap_or(DEFAULT_PER_PAGE),
            from_date: parse_from_date(self.from_date.as_deref()),
            sleep_for_rate: self.sleep_for_rate.unwrap_or(true),
            min_rate_to_sleep: self.min_rate_to_sleep.unwrap_or(0),
        };

        settings.validate()?;
        Ok(settings)
    }
}
