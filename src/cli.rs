//! Command-line interface definition

use crate::config::{ConfigFile, Settings, SettingsBuilder};
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ghfeed")]
#[command(about = "Fetch the recent public activity of a GitHub user")]
#[command(version)]
pub struct Cli {
    /// GitHub user
    #[arg(short, long)]
    pub user: Option<String>,

    /// GitHub token (falls back to GITHUB_TOKEN)
    #[arg(short = 't', long)]
    pub api_token: Option<String>,

    /// Fetch events created since this date [default: 1970-01-01]
    #[arg(short = 'd', long)]
    pub from_date: Option<String>,

    /// YAML config file with defaults for the options above
    #[arg(short, long)]
    pub config: Option<String>,

    /// GitHub API base URL, e.g. for GitHub Enterprise
    #[arg(long)]
    pub api_base: Option<String>,

    /// Events requested per page (1-100)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Fail instead of waiting when the rate limit is exhausted
    #[arg(long)]
    pub no_sleep_for_rate: bool,

    /// Remaining requests at which the rate limit counts as exhausted
    #[arg(long)]
    pub min_rate_to_sleep: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve settings from flags, the config file and the environment
    pub fn settings(&self) -> Result<Settings> {
        let mut builder = SettingsBuilder::new();

        if let Some(user) = &self.user {
            builder = builder.with_user(user);
        }
        if let Some(token) = &self.api_token {
            builder = builder.with_api_token(token);
        }
        if let Some(from_date) = &self.from_date {
            builder = builder.with_from_date(from_date);
        }
        if let Some(api_base) = &self.api_base {
            builder = builder.with_api_base(api_base);
        }
        if let Some(per_page) = self.per_page {
            builder = builder.with_per_page(per_page);
        }
        if self.no_sleep_for_rate {
            builder = builder.with_sleep_for_rate(false);
        }
        if let Some(min_rate) = self.min_rate_to_sleep {
            builder = builder.with_min_rate_to_sleep(min_rate);
        }

        if let Some(path) = &self.config {
            builder = builder.merge_file(ConfigFile::load(path)?);
        }

        builder.with_env_token().build()
    }
}
