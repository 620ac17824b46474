//! Settings validation utilities
//!
//! This module provides centralized validation of the settings assembled from
//! the command line, the config file and the environment.

use crate::config::Settings;
use crate::constants::github::MAX_PER_PAGE;
use anyhow::anyhow;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// No GitHub user was given
    EmptyUser,
    /// No API token was given
    EmptyApiToken,
    /// Page size outside 1..=100
    PerPageOutOfRange(u32),
    /// API base is not an absolute http(s) URL
    InvalidApiBase(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyUser => {
                write!(f, "GitHub user is required. Use --user or set it in the config file")
            }
            ValidationError::EmptyApiToken => {
                write!(
                    f,
                    "GitHub token not provided. Use --api-token flag or set GITHUB_TOKEN environment variable"
                )
            }
            ValidationError::PerPageOutOfRange(per_page) => {
                write!(
                    f,
                    "Page size must be between 1 and {}: {}",
                    MAX_PER_PAGE, per_page
                )
            }
            ValidationError::InvalidApiBase(url) => {
                write!(f, "API base must be an http(s) URL: '{}'", url)
            }
        }
    }
}

/// Validates assembled settings
///
/// All problems are reported together rather than stopping at the first.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.user.trim().is_empty() {
        errors.push(ValidationError::EmptyUser);
    }

    if settings.api_token.trim().is_empty() {
        errors.push(ValidationError::EmptyApiToken);
    }

    if settings.per_page == 0 || settings.per_page > MAX_PER_PAGE {
        errors.push(ValidationError::PerPageOutOfRange(settings.per_page));
    }

    if !is_valid_api_base(&settings.api_base) {
        errors.push(ValidationError::InvalidApiBase(settings.api_base.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks for an `http://` or `https://` URL with a host part
pub fn is_valid_api_base(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(rest) => !rest.is_empty() && !rest.starts_with('/'),
        None => false,
    }
}

/// Convert validation errors to anyhow::Error for compatibility
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Invalid settings:\n  - {}", messages.join("\n  - "))
}
