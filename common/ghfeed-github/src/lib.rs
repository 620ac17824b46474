//! GitHub API client library
//!
//! This library provides the HTTP plumbing ghfeed needs to talk to the GitHub
//! REST API: authenticated GET requests, rate-limit bookkeeping and
//! `Link`-header pagination.
//!
//! ## Modules
//!
//! - [`client`]: reqwest-backed client with rate-limit waiting
//! - [`fetch`]: the `HttpFetch` seam and the response type it returns
//! - [`links`]: `Link` header parsing
//! - [`pagination`]: lazy page-by-page iteration over paginated endpoints
//! - [`rate_limit`]: rate-limit state and policy
//! - [`util`]: URL helpers

mod client;
mod fetch;
mod links;
mod pagination;
mod rate_limit;
mod util;

// Re-export public API
pub use client::{DEFAULT_API_BASE, DEFAULT_USER_AGENT, GitHubClient};
pub use fetch::{ApiResponse, HttpFetch};
pub use links::{Links, page_number};
pub use pagination::Pages;
pub use rate_limit::{RateLimit, RateLimitPolicy};
pub use util::urijoin;
