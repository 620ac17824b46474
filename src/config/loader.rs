//! Configuration file loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Optional YAML config file
///
/// Every key may be omitted; command-line flags take precedence over
/// whatever is set here.
///
/// ```yaml
/// user: octocat
/// api_token: ghp_xxx
/// api_base: https://ghe.example.com/api/v3
/// per_page: 100
/// from_date: 2018-04-13
/// sleep_for_rate: true
/// min_rate_to_sleep: 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub user: Option<String>,
    pub api_token: Option<String>,
    pub api_base: Option<String>,
    pub per_page: Option<u32>,
    pub from_date: Option<String>,
    pub sleep_for_rate: Option<bool>,
    pub min_rate_to_sleep: Option<u32>,
}

impl ConfigFile {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file {}", path))
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(content)?)
    }
}
