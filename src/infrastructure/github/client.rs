//! # GitHub Client
//!
//! Provides `GitHubClient`, the `reqwest` implementation of `HostingApi` against the GitHub REST v3 API.

use std::sync::OnceLock;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use regex::Regex;
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::config::GithubConfig;
use crate::domain::traits::HostingApi;
use crate::domain::types::{
    ApiError, CommitPage, ContentEntry, Event, Repository, UserProfile,
};

const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("profile-readme/", env!("CARGO_PKG_VERSION"));
const PER_PAGE: usize = 100;
const MAX_REPO_PAGES: u32 = 10;

/// Extract the page number of `rel="last"` from a `Link` header.
pub fn last_page_from_link(link: &str) -> Option<u64> {
    static LAST: OnceLock<Regex> = OnceLock::new();
    let re = LAST.get_or_init(|| {
        Regex::new(r#"[?&]page=(\d+)[^>]*>;\s*rel="last""#).expect("valid link regex")
    });
    re.captures(link)?.get(1)?.as_str().parse().ok()
}

/// Decode the base64 `content` field of a contents API response.
pub fn decode_content(encoded: &str) -> Result<String, String> {
    let cleaned: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(cleaned)
        .map_err(|e| format!("Invalid base64 content: {}", e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[derive(Debug, Deserialize)]
struct FileContent {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    total_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct CommitRecord {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    author: Option<CommitAuthor>,
}

#[derive(Debug, Deserialize)]
struct CommitAuthor {
    date: DateTime<Utc>,
}

/// GitHub REST client
pub struct GitHubClient {
    http: Client,
    token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    /// Create a new client from the `github` section of the configuration
    pub fn new(config: &GithubConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::new("client", format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            token: config.token.clone().filter(|t| !t.is_empty()),
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.http.get(url).header(ACCEPT, ACCEPT_V3);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }
        request
    }

    /// Send the request and turn transport failures and non-2xx statuses into `ApiError`
    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        tracing::debug!("GET {}", endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::new(endpoint, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        // GitHub reports failures as {"message": "..."}
        if let Ok(error_json) = serde_json::from_str::<serde_json::Value>(&error_text)
            && let Some(message) = error_json.get("message").and_then(|m| m.as_str())
        {
            return Err(ApiError::new(endpoint, format!("HTTP {}: {}", status, message)));
        }

        Err(ApiError::new(endpoint, format!("HTTP {}: {}", status, error_text)))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        self.send(endpoint, request)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::new(endpoint, format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl HostingApi for GitHubClient {
    async fn user(&self, username: &str) -> Result<UserProfile, ApiError> {
        let path = format!("users/{}", username);
        self.fetch(&path, self.get(&path)).await
    }

    async fn repositories(&self, username: &str) -> Result<Vec<Repository>, ApiError> {
        let path = format!("users/{}/repos", username);
        let mut repos = Vec::new();

        for page in 1..=MAX_REPO_PAGES {
            let request = self
                .get(&path)
                .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())]);
            let batch: Vec<Repository> = self.fetch(&path, request).await?;
            let done = batch.len() < PER_PAGE;
            repos.extend(batch);
            if done {
                break;
            }
        }

        Ok(repos)
    }

    async fn events(&self, username: &str) -> Result<Vec<Event>, ApiError> {
        let path = format!("users/{}/events", username);
        let request = self.get(&path).query(&[("per_page", PER_PAGE.to_string())]);
        self.fetch(&path, request).await
    }

    async fn authored_commits(
        &self,
        owner: &str,
        repo: &str,
        author: &str,
    ) -> Result<CommitPage, ApiError> {
        let path = format!("repos/{}/{}/commits", owner, repo);
        let request = self
            .get(&path)
            .query(&[("author", author), ("per_page", "1")]);
        let response = self.send(&path, request).await?;

        let link = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let items: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ApiError::new(&path, format!("Failed to parse response: {}", e)))?;

        Ok(CommitPage {
            items: items.len() as u64,
            has_link: link.is_some(),
            last_page: link.as_deref().and_then(last_page_from_link),
        })
    }

    async fn latest_commit_date(
        &self,
        owner: &str,
        repo: &str,
        branch: Option<&str>,
    ) -> Result<Option<DateTime<Utc>>, ApiError> {
        let path = format!("repos/{}/{}/commits", owner, repo);
        let mut request = self.get(&path).query(&[("per_page", "1")]);
        if let Some(branch) = branch.filter(|b| !b.is_empty()) {
            request = request.query(&[("sha", branch)]);
        }
        let commits: Vec<CommitRecord> = self.fetch(&path, request).await?;
        Ok(commits
            .into_iter()
            .next()
            .and_then(|c| c.commit.author)
            .map(|a| a.date))
    }

    async fn search_issues_total(&self, query: &str) -> Result<Option<u64>, ApiError> {
        let path = "search/issues";
        let request = self.get(path).query(&[("q", query)]);
        let result: SearchResult = self.fetch(path, request).await?;
        Ok(result.total_count)
    }

    async fn contents(&self, full_name: &str, path: &str) -> Result<Vec<ContentEntry>, ApiError> {
        let endpoint = format!("repos/{}/contents/{}", full_name, path);
        self.fetch(&endpoint, self.get(&endpoint)).await
    }

    async fn file_text(&self, full_name: &str, path: &str) -> Result<String, ApiError> {
        let endpoint = format!("repos/{}/contents/{}", full_name, path);
        let file: FileContent = self.fetch(&endpoint, self.get(&endpoint)).await?;
        decode_content(&file.content).map_err(|e| ApiError::new(&endpoint, e))
    }

    async fn languages(&self, full_name: &str) -> Result<Vec<(String, u64)>, ApiError> {
        let endpoint = format!("repos/{}/languages", full_name);
        let map: serde_json::Map<String, serde_json::Value> =
            self.fetch(&endpoint, self.get(&endpoint)).await?;
        Ok(map
            .into_iter()
            .filter_map(|(lang, bytes)| bytes.as_u64().map(|b| (lang, b)))
            .collect())
    }
}
