//! # Domain Types
//!
//! Data structures shared by the fetchers, the aggregator and the renderer.
//! The API records deserialize straight from the hosting API's JSON.

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const PUSH_EVENT: &str = "PushEvent";

/// Account profile of the user whose document is generated.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub public_repos: u64,
    pub created_at: DateTime<Utc>,
}

/// Repository metadata as returned by the repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub default_branch: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// An activity record from the user's public event feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: EventRepo,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: EventPayload,
}

impl Event {
    pub fn is_push(&self) -> bool {
        self.kind == PUSH_EVENT
    }

    /// Number of commits carried by a push.
    pub fn commit_count(&self) -> u64 {
        match &self.payload.commits {
            Some(commits) => commits.len() as u64,
            None => self.payload.size.unwrap_or(0),
        }
    }

    /// Repository name without the owner prefix.
    pub fn repo_short_name(&self) -> &str {
        self.repo
            .name
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.repo.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    File,
    Dir,
    #[serde(other)]
    Other,
}

/// One entry of a repository directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
}

/// Outcome of a one-item-per-page commit listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitPage {
    /// Items in the returned page
    pub items: u64,
    /// Whether the response carried a `Link` header at all
    pub has_link: bool,
    /// Page number of `rel="last"`, when present
    pub last_page: Option<u64>,
}

impl CommitPage {
    /// Approximate commit total implied by the listing.
    pub fn estimated_total(&self) -> u64 {
        if self.has_link {
            self.last_page.unwrap_or(0)
        } else {
            self.items
        }
    }
}

/// Error type for hosting API calls
#[derive(Debug, Clone)]
pub struct ApiError {
    pub endpoint: String,
    pub message: String,
}

impl ApiError {
    pub fn new(endpoint: &str, message: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.endpoint, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Placeholder name to rendered value, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    entries: Vec<(String, String)>,
}

impl ProfileData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`. Re-setting a key keeps its original position.
    pub fn set(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn set_list<S: AsRef<str>>(&mut self, key: &str, values: &[S]) {
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        self.set(key, joined);
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_json() {
        let json = r#"{
            "type": "PushEvent",
            "repo": {"name": "octocat/hello"},
            "created_at": "2024-03-05T10:00:00Z",
            "payload": {"commits": [{"sha": "a"}, {"sha": "b"}]}
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.is_push());
        assert_eq!(event.commit_count(), 2);
        assert_eq!(event.repo_short_name(), "hello");
    }

    #[test]
    fn test_commit_count_fallbacks() {
        let json = r#"{
            "type": "PushEvent",
            "repo": {"name": "octocat/hello"},
            "created_at": "2024-03-05T10:00:00Z",
            "payload": {"size": 4}
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.commit_count(), 4);

        let json = r#"{
            "type": "WatchEvent",
            "repo": {"name": "other/thing"},
            "created_at": "2024-03-05T10:00:00Z"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(!event.is_push());
        assert_eq!(event.commit_count(), 0);
    }

    #[test]
    fn test_content_entry_kind() {
        let json = r#"[
            {"name": "src", "path": "src", "type": "dir"},
            {"name": "Cargo.toml", "path": "Cargo.toml", "type": "file"},
            {"name": "vendor", "path": "vendor", "type": "submodule"}
        ]"#;
        let entries: Vec<ContentEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].kind, ContentKind::Dir);
        assert_eq!(entries[1].kind, ContentKind::File);
        assert_eq!(entries[2].kind, ContentKind::Other);
    }

    #[test]
    fn test_commit_page_estimate() {
        let paged = CommitPage { items: 1, has_link: true, last_page: Some(57) };
        assert_eq!(paged.estimated_total(), 57);

        let no_last = CommitPage { items: 1, has_link: true, last_page: None };
        assert_eq!(no_last.estimated_total(), 0);

        let single = CommitPage { items: 1, has_link: false, last_page: None };
        assert_eq!(single.estimated_total(), 1);
    }

    #[test]
    fn test_profile_data_order_and_replace() {
        let mut data = ProfileData::new();
        data.set("A", 1);
        data.set("B", "two");
        data.set("A", 3);
        data.set_list("C", &["Rust", "Go"]);

        let keys: Vec<_> = data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
        assert_eq!(data.get("A"), Some("3"));
        assert_eq!(data.get("C"), Some("Rust, Go"));
        assert_eq!(data.len(), 3);
        assert!(!data.is_empty());
        assert!(ProfileData::new().is_empty());
    }
}
