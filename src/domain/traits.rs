//! # Domain Traits
//!
//! Abstract interface for the hosting API.
//! Fetchers only see this trait, so they run the same against the real client and a fake.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::types::{
    ApiError, CommitPage, ContentEntry, Event, Repository, UserProfile,
};

/// Abstract interface for a source-control hosting API (e.g., GitHub)
#[async_trait]
pub trait HostingApi: Send + Sync {
    /// Fetch the account profile
    async fn user(&self, username: &str) -> Result<UserProfile, ApiError>;

    /// List every repository owned by the user
    async fn repositories(&self, username: &str) -> Result<Vec<Repository>, ApiError>;

    /// Recent public events of the user, newest first
    async fn events(&self, username: &str) -> Result<Vec<Event>, ApiError>;

    /// One-per-page listing of commits authored by `author` in `owner/repo`
    async fn authored_commits(
        &self,
        owner: &str,
        repo: &str,
        author: &str,
    ) -> Result<CommitPage, ApiError>;

    /// Author date of the newest commit on `branch` (default branch when `None`)
    async fn latest_commit_date(
        &self,
        owner: &str,
        repo: &str,
        branch: Option<&str>,
    ) -> Result<Option<DateTime<Utc>>, ApiError>;

    /// `total_count` of an issue search, `None` when the field is missing
    async fn search_issues_total(&self, query: &str) -> Result<Option<u64>, ApiError>;

    /// Directory listing at `path` ("" for the root)
    async fn contents(&self, full_name: &str, path: &str) -> Result<Vec<ContentEntry>, ApiError>;

    /// Decoded text of the file at `path`
    async fn file_text(&self, full_name: &str, path: &str) -> Result<String, ApiError>;

    /// Language name to byte count
    async fn languages(&self, full_name: &str) -> Result<Vec<(String, u64)>, ApiError>;
}
