//! Event and repository types
//!
//! Events keep every field GitHub sends. The fields ghfeed works with are
//! typed; everything else rides along in `extra` maps so that printing an
//! event reproduces the API payload plus `repo_data`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Event type tag, e.g. `PushEvent`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    CommitComment,
    Create,
    Delete,
    Fork,
    Gollum,
    IssueComment,
    Issues,
    Member,
    Public,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    Push,
    Release,
    Watch,
    /// Any tag not listed above, kept verbatim
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::CommitComment => "CommitCommentEvent",
            EventKind::Create => "CreateEvent",
            EventKind::Delete => "DeleteEvent",
            EventKind::Fork => "ForkEvent",
            EventKind::Gollum => "GollumEvent",
            EventKind::IssueComment => "IssueCommentEvent",
            EventKind::Issues => "IssuesEvent",
            EventKind::Member => "MemberEvent",
            EventKind::Public => "PublicEvent",
            EventKind::PullRequest => "PullRequestEvent",
            EventKind::PullRequestReview => "PullRequestReviewEvent",
            EventKind::PullRequestReviewComment => "PullRequestReviewCommentEvent",
            EventKind::Push => "PushEvent",
            EventKind::Release => "ReleaseEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::Other(tag) => tag,
        }
    }
}

impl From<String> for EventKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "CommitCommentEvent" => EventKind::CommitComment,
            "CreateEvent" => EventKind::Create,
            "DeleteEvent" => EventKind::Delete,
            "ForkEvent" => EventKind::Fork,
            "GollumEvent" => EventKind::Gollum,
            "IssueCommentEvent" => EventKind::IssueComment,
            "IssuesEvent" => EventKind::Issues,
            "MemberEvent" => EventKind::Member,
            "PublicEvent" => EventKind::Public,
            "PullRequestEvent" => EventKind::PullRequest,
            "PullRequestReviewEvent" => EventKind::PullRequestReview,
            "PullRequestReviewCommentEvent" => EventKind::PullRequestReviewComment,
            "PushEvent" => EventKind::Push,
            "ReleaseEvent" => EventKind::Release,
            "WatchEvent" => EventKind::Watch,
            _ => EventKind::Other(tag),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User who triggered an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub id: u64,
    pub login: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Repository reference embedded in an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoRef {
    #[serde(default)]
    pub id: u64,
    /// `owner/name`
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Repository metadata as returned by `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryMetadata(pub Value);

impl RepositoryMetadata {
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn full_name(&self) -> Option<&str> {
        self.0.get("full_name").and_then(Value::as_str)
    }

    pub fn owner_login(&self) -> Option<&str> {
        self.0
            .get("owner")
            .and_then(|owner| owner.get("login"))
            .and_then(Value::as_str)
    }
}

/// One public activity event of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub actor: Actor,
    pub repo: RepoRef,
    pub created_at: DateTime<Utc>,
    /// Attached by enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_data: Option<RepositoryMetadata>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "7539472063",
            "type": "PushEvent",
            "actor": {"id": 6515067, "login": "octocat", "display_login": "octocat"},
            "repo": {"id": 42, "name": "octocat/hello-world", "url": "https://api.github.com/repos/octocat/hello-world"},
            "payload": {"size": 1},
            "public": true,
            "created_at": "2018-04-13T15:55:35Z"
        })
    }

    #[test]
    fn test_event_deserialize() {
        let event: Event = serde_json::from_value(sample()).unwrap();

        assert_eq!(event.id, "7539472063");
        assert_eq!(event.kind, EventKind::Push);
        assert_eq!(event.actor.login, "octocat");
        assert_eq!(event.repo.name, "octocat/hello-world");
        assert_eq!(event.created_at.to_rfc3339(), "2018-04-13T15:55:35+00:00");
        assert!(event.repo_data.is_none());
        assert_eq!(event.extra["public"], json!(true));
        assert_eq!(event.actor.extra["display_login"], json!("octocat"));
    }

    #[test]
    fn test_event_deserialize_without_ids() {
        let event: Event = serde_json::from_value(json!({
            "id": "1",
            "type": "WatchEvent",
            "actor": {"login": "octocat"},
            "repo": {"name": "octocat/hello-world"},
            "created_at": "2018-04-13T15:55:35Z"
        }))
        .unwrap();

        assert_eq!(event.actor.id, 0);
        assert_eq!(event.repo.id, 0);
        assert_eq!(event.repo.name, "octocat/hello-world");
    }

    #[test]
    fn test_event_serialize_preserves_payload() {
        let event: Event = serde_json::from_value(sample()).unwrap();
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value, sample());
    }

    #[test]
    fn test_event_serialize_includes_repo_data() {
        let mut event: Event = serde_json::from_value(sample()).unwrap();
        event.repo_data = Some(RepositoryMetadata(json!({"name": "hello-world"})));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["repo_data"]["name"], json!("hello-world"));
    }

    #[test]
    fn test_unknown_event_kind_round_trips() {
        let kind = EventKind::from("SponsorshipEvent".to_string());
        assert_eq!(kind, EventKind::Other("SponsorshipEvent".to_string()));
        assert_eq!(String::from(kind), "SponsorshipEvent");
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::PullRequest.to_string(), "PullRequestEvent");
        assert_eq!(EventKind::from("CreateEvent".to_string()), EventKind::Create);
    }

    #[test]
    fn test_repository_metadata_accessors() {
        let repo = RepositoryMetadata(json!({
            "name": "GrimoireELK",
            "full_name": "chaoss/grimoirelab-elk",
            "owner": {"login": "chaoss"}
        }));

        assert_eq!(repo.name(), Some("GrimoireELK"));
        assert_eq!(repo.full_name(), Some("chaoss/grimoirelab-elk"));
        assert_eq!(repo.owner_login(), Some("chaoss"));
        assert_eq!(RepositoryMetadata(json!([])).name(), None);
    }
}
