//! # Account Statistics
//!
//! Counters for commits, pull requests, issues and outside contributions,
//! plus the simple account figures (age, stars, site commit date).
//! Every API failure degrades to the counter's default.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::application::SHORT_DATE;
use crate::domain::config::ForkPolicy;
use crate::domain::traits::HostingApi;
use crate::domain::types::{Event, Repository};
use crate::strings::{logs, messages};

/// Commits pushed in recent events plus per-repository totals from pagination.
pub async fn count_commits(
    api: &dyn HostingApi,
    username: &str,
    events: &[Event],
    repos: &[Repository],
    policy: ForkPolicy,
) -> u64 {
    let mut total: u64 = events
        .iter()
        .filter(|e| e.is_push())
        .map(Event::commit_count)
        .sum();

    for repo in repos.iter().filter(|r| policy.admits(r.fork)) {
        match api.authored_commits(username, &repo.name, username).await {
            Ok(page) => total += page.estimated_total(),
            Err(e) => {
                tracing::warn!("{}", logs::repo_skipped(&repo.name, "commit count", &e.to_string()))
            }
        }
    }

    total
}

#[derive(Debug, Clone, Copy)]
pub enum SearchKind {
    PullRequest,
    Issue,
}

impl SearchKind {
    fn qualifier(&self) -> &'static str {
        match self {
            SearchKind::PullRequest => "pr",
            SearchKind::Issue => "issue",
        }
    }
}

pub fn search_query(username: &str, kind: SearchKind) -> String {
    format!("author:{} type:{}", username, kind.qualifier())
}

/// Total reported by an authored-by search, 0 on failure or a missing count.
pub async fn count_authored(api: &dyn HostingApi, username: &str, kind: SearchKind) -> u64 {
    match api.search_issues_total(&search_query(username, kind)).await {
        Ok(total) => total.unwrap_or(0),
        Err(e) => {
            tracing::warn!("{}", logs::fetcher_fallback(kind.qualifier(), &e.to_string()));
            0
        }
    }
}

pub async fn count_pull_requests(api: &dyn HostingApi, username: &str) -> u64 {
    count_authored(api, username, SearchKind::PullRequest).await
}

pub async fn count_issues(api: &dyn HostingApi, username: &str) -> u64 {
    count_authored(api, username, SearchKind::Issue).await
}

/// Distinct repositories in the event feed that the user does not own.
pub fn count_contributions(events: &[Event], username: &str) -> usize {
    let prefix = format!("{}/", username.to_lowercase());
    events
        .iter()
        .map(|e| e.repo.name.as_str())
        .filter(|name| !name.to_lowercase().starts_with(&prefix))
        .collect::<HashSet<_>>()
        .len()
}

pub fn days_active(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created_at).num_days()
}

pub fn star_count(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| r.stargazers_count).sum()
}

/// Date of the newest commit on the site repository's default branch.
///
/// The branch comes from the loaded repository list; when the repository is not
/// listed the API's own default branch is used.
pub async fn site_commit(
    api: &dyn HostingApi,
    username: &str,
    site_repo: Option<&str>,
    repos: &[Repository],
) -> String {
    let Some(repo) = site_repo.filter(|r| !r.is_empty()) else {
        return messages::NOT_AVAILABLE.to_string();
    };
    let branch = repos
        .iter()
        .find(|r| r.name == repo)
        .map(|r| r.default_branch.as_str());

    match api.latest_commit_date(username, repo, branch).await {
        Ok(Some(date)) => date.format(SHORT_DATE).to_string(),
        Ok(None) => messages::NOT_AVAILABLE.to_string(),
        Err(e) => {
            tracing::warn!("{}", logs::fetcher_fallback("site commit", &e.to_string()));
            messages::NOT_AVAILABLE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fake::{FakeHostingApi, at, other_event, push_event, repo};
    use crate::domain::types::CommitPage;

    #[tokio::test]
    async fn test_count_commits() {
        let api = FakeHostingApi::new()
            .with_commit_page("big", CommitPage { items: 1, has_link: true, last_page: Some(120) })
            .with_commit_page("small", CommitPage { items: 1, has_link: false, last_page: None })
            .with_commit_page("forked", CommitPage { items: 1, has_link: true, last_page: Some(900) });
        let events = vec![
            push_event("me/big", at(2024, 3, 1, 0), 3),
            other_event("IssuesEvent", "me/big", at(2024, 3, 1, 0)),
        ];
        let repos = vec![
            repo("me", "big", false),
            repo("me", "small", false),
            repo("me", "forked", true),
            // no commit page registered: contributes nothing
            repo("me", "broken", false),
        ];

        assert_eq!(count_commits(&api, "me", &events, &repos, ForkPolicy::Exclude).await, 124);
        assert_eq!(count_commits(&api, "me", &events, &repos, ForkPolicy::Include).await, 1024);
    }

    #[tokio::test]
    async fn test_link_without_last_adds_nothing() {
        let api = FakeHostingApi::new()
            .with_commit_page("r", CommitPage { items: 1, has_link: true, last_page: None });
        let repos = vec![repo("me", "r", false)];
        assert_eq!(count_commits(&api, "me", &[], &repos, ForkPolicy::Exclude).await, 0);
    }

    #[tokio::test]
    async fn test_search_counters() {
        let api = FakeHostingApi::new()
            .with_search("author:me type:pr", Some(42))
            .with_search("author:me type:issue", None);

        assert_eq!(count_pull_requests(&api, "me").await, 42);
        // response without total_count
        assert_eq!(count_issues(&api, "me").await, 0);
        // failing query
        assert_eq!(count_pull_requests(&api, "someone-else").await, 0);
    }

    #[test]
    fn test_count_contributions() {
        let events = vec![
            push_event("Me/own", at(2024, 3, 1, 0), 1),
            push_event("rust-lang/rust", at(2024, 3, 1, 0), 1),
            other_event("PullRequestEvent", "rust-lang/rust", at(2024, 3, 2, 0)),
            other_event("IssuesEvent", "tokio-rs/tokio", at(2024, 3, 2, 0)),
            other_event("WatchEvent", "meh/other", at(2024, 3, 2, 0)),
        ];
        assert_eq!(count_contributions(&events, "me"), 3);
        assert_eq!(count_contributions(&[], "me"), 0);
    }

    #[test]
    fn test_account_figures() {
        assert_eq!(days_active(at(2024, 1, 1, 0), at(2024, 3, 1, 12)), 60);

        let mut a = repo("me", "a", false);
        a.stargazers_count = 10;
        let mut b = repo("me", "b", true);
        b.stargazers_count = 5;
        assert_eq!(star_count(&[a, b]), 15);
    }

    #[tokio::test]
    async fn test_site_commit() {
        let api = FakeHostingApi::new().with_latest_commit("me.github.io", None, at(2024, 2, 9, 8));

        assert_eq!(site_commit(&api, "me", Some("me.github.io"), &[]).await, "Feb 09");
        assert_eq!(site_commit(&api, "me", Some("missing"), &[]).await, "N/A");
        assert_eq!(site_commit(&api, "me", Some(""), &[]).await, "N/A");
        assert_eq!(site_commit(&api, "me", None, &[]).await, "N/A");
    }

    #[tokio::test]
    async fn test_site_commit_uses_default_branch() {
        let api = FakeHostingApi::new()
            .with_latest_commit("site", Some("gh-pages"), at(2024, 5, 1, 0))
            .with_latest_commit("site", None, at(2023, 1, 1, 0));
        let mut site = repo("me", "site", false);
        site.default_branch = "gh-pages".to_string();

        assert_eq!(site_commit(&api, "me", Some("site"), &[site]).await, "May 01");
        assert_eq!(site_commit(&api, "me", Some("site"), &[]).await, "Jan 01");
    }
}
