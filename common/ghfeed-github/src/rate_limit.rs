//! Rate-limit state and policy

use reqwest::header::HeaderMap;
use std::time::Duration;

pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Remaining request quota as reported by the API
///
/// Both fields are `None` until a response carrying the rate-limit headers has
/// been seen. Servers without rate limiting (GitHub Enterprise with limits
/// disabled) never send them, so the state stays unknown and requests are
/// never held back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests left in the current window
    pub remaining: Option<u32>,
    /// Epoch second at which the window resets
    pub reset: Option<i64>,
}

impl RateLimit {
    pub fn new(remaining: u32, reset: i64) -> Self {
        Self {
            remaining: Some(remaining),
            reset: Some(reset),
        }
    }

    /// Read `X-RateLimit-Remaining` and `X-RateLimit-Reset`
    pub fn from_headers(headers: &HeaderMap) -> Self {
        fn header<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse().ok())
        }

        Self {
            remaining: header(headers, RATE_LIMIT_REMAINING_HEADER),
            reset: header(headers, RATE_LIMIT_RESET_HEADER),
        }
    }

    /// Overwrite the fields the newer observation knows about
    pub fn update(&mut self, newer: RateLimit) {
        if newer.remaining.is_some() {
            self.remaining = newer.remaining;
        }
        if newer.reset.is_some() {
            self.reset = newer.reset;
        }
    }

    /// Whether the quota is at or below `threshold`
    pub fn is_exhausted(&self, threshold: u32) -> bool {
        matches!(self.remaining, Some(remaining) if remaining <= threshold)
    }

    /// Time to wait from `now` (epoch seconds) until the window resets
    ///
    /// One extra second covers the sub-second part GitHub truncates from the
    /// reset timestamp. A reset time in the past still yields that second.
    pub fn time_to_reset(&self, now: i64) -> Duration {
        let secs = self
            .reset
            .map(|reset| reset.saturating_sub(now).max(0))
            .unwrap_or(0);
        Duration::from_secs(secs as u64 + 1)
    }
}

/// What the client does when the quota runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Wait for the reset instead of failing
    pub sleep_for_rate: bool,
    /// Remaining-request count at which the quota counts as exhausted
    pub min_rate_to_sleep: u32,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            sleep_for_rate: true,
            min_rate_to_sleep: 0,
        }
    }
}
