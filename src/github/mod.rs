//! GitHub activity module
//!
//! - [`client`]: `ActivityClient`, the events and repository endpoints
//! - [`events`]: `EventFetcher`, filtering and enrichment of events
//! - [`repositories`]: repository metadata cache
//! - [`types`]: event and repository data structures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ghfeed::github::{ActivityClient, EventFetcher};
//! use ghfeed_github::{GitHubClient, RateLimitPolicy};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let http = GitHubClient::connect(
//!     Some("your_token".to_string()),
//!     "https://api.github.com",
//!     RateLimitPolicy::default(),
//! )
//! .await?;
//! let mut fetcher = EventFetcher::new(ActivityClient::new(http, "octocat"));
//!
//! let mut events = fetcher.fetch(None);
//! while let Some(event) = events.next_event().await? {
//!     println!("{} {}", event.kind, event.repo.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod events;
pub mod repositories;
pub mod types;

// Re-export commonly used items for convenience
pub use client::ActivityClient;
pub use events::{EventFetcher, Events, parse_events};
pub use repositories::RepositoryCache;
pub use types::{Actor, Event, EventKind, RepoRef, RepositoryMetadata};
