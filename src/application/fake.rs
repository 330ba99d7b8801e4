//! In-memory `HostingApi` for fetcher tests.
//!
//! Anything not registered answers with an `ApiError`, which is how tests
//! exercise the fallback paths.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::traits::HostingApi;
use crate::domain::types::{
    ApiError, CommitPage, ContentEntry, ContentKind, Event, EventPayload, EventRepo, Repository,
    UserProfile,
};

#[derive(Default)]
pub struct FakeHostingApi {
    pub user: Option<UserProfile>,
    pub repos: Option<Vec<Repository>>,
    pub events: Option<Vec<Event>>,
    pub commit_pages: HashMap<String, CommitPage>,
    /// Keyed by repository and requested branch
    pub latest_commits: HashMap<(String, Option<String>), DateTime<Utc>>,
    pub searches: HashMap<String, Option<u64>>,
    pub contents: HashMap<(String, String), Vec<ContentEntry>>,
    pub files: HashMap<(String, String), String>,
    pub languages: HashMap<String, Vec<(String, u64)>>,
}

impl FakeHostingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn with_repos(mut self, repos: Vec<Repository>) -> Self {
        self.repos = Some(repos);
        self
    }

    pub fn with_search(mut self, query: &str, total: Option<u64>) -> Self {
        self.searches.insert(query.to_string(), total);
        self
    }

    pub fn with_commit_page(mut self, repo: &str, page: CommitPage) -> Self {
        self.commit_pages.insert(repo.to_string(), page);
        self
    }

    pub fn with_latest_commit(mut self, repo: &str, branch: Option<&str>, date: DateTime<Utc>) -> Self {
        self.latest_commits
            .insert((repo.to_string(), branch.map(str::to_string)), date);
        self
    }

    pub fn with_contents(mut self, full_name: &str, path: &str, entries: Vec<ContentEntry>) -> Self {
        self.contents
            .insert((full_name.to_string(), path.to_string()), entries);
        self
    }

    pub fn with_file(mut self, full_name: &str, path: &str, text: &str) -> Self {
        self.files
            .insert((full_name.to_string(), path.to_string()), text.to_string());
        self
    }

    pub fn with_languages(mut self, full_name: &str, languages: &[(&str, u64)]) -> Self {
        self.languages.insert(
            full_name.to_string(),
            languages.iter().map(|(l, b)| (l.to_string(), *b)).collect(),
        );
        self
    }
}

fn missing(endpoint: &str) -> ApiError {
    ApiError::new(endpoint, "HTTP 404 Not Found: Not Found")
}

#[async_trait]
impl HostingApi for FakeHostingApi {
    async fn user(&self, username: &str) -> Result<UserProfile, ApiError> {
        self.user.clone().ok_or_else(|| missing(&format!("users/{}", username)))
    }

    async fn repositories(&self, username: &str) -> Result<Vec<Repository>, ApiError> {
        self.repos
            .clone()
            .ok_or_else(|| missing(&format!("users/{}/repos", username)))
    }

    async fn events(&self, username: &str) -> Result<Vec<Event>, ApiError> {
        self.events
            .clone()
            .ok_or_else(|| missing(&format!("users/{}/events", username)))
    }

    async fn authored_commits(
        &self,
        owner: &str,
        repo: &str,
        _author: &str,
    ) -> Result<CommitPage, ApiError> {
        self.commit_pages
            .get(repo)
            .cloned()
            .ok_or_else(|| missing(&format!("repos/{}/{}/commits", owner, repo)))
    }

    async fn latest_commit_date(
        &self,
        owner: &str,
        repo: &str,
        branch: Option<&str>,
    ) -> Result<Option<DateTime<Utc>>, ApiError> {
        self.latest_commits
            .get(&(repo.to_string(), branch.map(str::to_string)))
            .map(|d| Some(*d))
            .ok_or_else(|| missing(&format!("repos/{}/{}/commits", owner, repo)))
    }

    async fn search_issues_total(&self, query: &str) -> Result<Option<u64>, ApiError> {
        self.searches
            .get(query)
            .copied()
            .ok_or_else(|| missing("search/issues"))
    }

    async fn contents(&self, full_name: &str, path: &str) -> Result<Vec<ContentEntry>, ApiError> {
        self.contents
            .get(&(full_name.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| missing(&format!("repos/{}/contents/{}", full_name, path)))
    }

    async fn file_text(&self, full_name: &str, path: &str) -> Result<String, ApiError> {
        self.files
            .get(&(full_name.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| missing(&format!("repos/{}/contents/{}", full_name, path)))
    }

    async fn languages(&self, full_name: &str) -> Result<Vec<(String, u64)>, ApiError> {
        self.languages
            .get(full_name)
            .cloned()
            .ok_or_else(|| missing(&format!("repos/{}/languages", full_name)))
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub fn push_event(repo: &str, created_at: DateTime<Utc>, commits: usize) -> Event {
    Event {
        kind: "PushEvent".to_string(),
        repo: EventRepo { name: repo.to_string() },
        created_at,
        payload: EventPayload {
            commits: Some(vec![serde_json::json!({}); commits]),
            size: None,
        },
    }
}

pub fn other_event(kind: &str, repo: &str, created_at: DateTime<Utc>) -> Event {
    Event {
        kind: kind.to_string(),
        repo: EventRepo { name: repo.to_string() },
        created_at,
        payload: EventPayload::default(),
    }
}

pub fn repo(owner: &str, name: &str, fork: bool) -> Repository {
    Repository {
        name: name.to_string(),
        full_name: format!("{}/{}", owner, name),
        fork,
        language: None,
        stargazers_count: 0,
        created_at: at(2020, 1, 1, 0),
        default_branch: "main".to_string(),
    }
}

pub fn file(name: &str) -> ContentEntry {
    ContentEntry { name: name.to_string(), path: name.to_string(), kind: ContentKind::File }
}

pub fn dir(name: &str) -> ContentEntry {
    ContentEntry { name: name.to_string(), path: name.to_string(), kind: ContentKind::Dir }
}
