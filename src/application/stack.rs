//! # Stack Analysis
//!
//! Ranks the languages, frameworks and tools found across the user's repositories.
//! Languages come from repository metadata and byte breakdowns; frameworks and
//! tools come from `patterns` run over a snapshot of each repository root.

use crate::application::tally::Tally;
use crate::domain::config::ForkPolicy;
use crate::domain::traits::HostingApi;
use crate::domain::types::{ApiError, ContentKind, Repository};
use crate::patterns::{RepoSnapshot, SignalKind, SignatureRegistry, python};
use crate::strings::logs;

/// Top languages by primary-language count plus bytes of code.
pub async fn top_languages(
    api: &dyn HostingApi,
    repos: &[Repository],
    policy: ForkPolicy,
    limit: usize,
) -> Vec<String> {
    let mut tally = Tally::new();

    for repo in repos.iter().filter(|r| policy.admits(r.fork)) {
        if let Some(language) = &repo.language {
            tally.add(language, 1);
        }

        match api.languages(&repo.full_name).await {
            Ok(breakdown) => {
                for (language, bytes) in breakdown {
                    tally.add(&language, bytes);
                }
            }
            Err(e) => tracing::warn!("{}", logs::repo_skipped(&repo.name, "languages", &e.to_string())),
        }
    }

    tally.top_keys(limit)
}

async fn optional_file(api: &dyn HostingApi, repo: &Repository, path: &str) -> Option<String> {
    match api.file_text(&repo.full_name, path).await {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!("{}", logs::repo_skipped(&repo.name, path, &e.to_string()));
            None
        }
    }
}

/// Collect what the signature detectors need from a repository root.
pub async fn snapshot(api: &dyn HostingApi, repo: &Repository) -> Result<RepoSnapshot, ApiError> {
    let entries = api.contents(&repo.full_name, "").await?;

    let mut snapshot = RepoSnapshot {
        files: entries
            .iter()
            .filter(|e| e.kind == ContentKind::File)
            .map(|e| e.name.to_lowercase())
            .collect(),
        dirs: entries
            .iter()
            .filter(|e| e.kind == ContentKind::Dir)
            .map(|e| e.name.clone())
            .collect(),
        ..Default::default()
    };

    if let Some(entry) = entries.iter().find(|e| e.name == "package.json") {
        snapshot.package_json = optional_file(api, repo, &entry.path).await;
    }

    if let Some(entry) = entries
        .iter()
        .find(|e| python::MANIFESTS.contains(&e.name.as_str()))
    {
        snapshot.python_manifest = optional_file(api, repo, &entry.path).await;
    }

    if snapshot.has_dir(".github") {
        snapshot.has_workflows = api.contents(&repo.full_name, ".github/workflows").await.is_ok();
    }

    Ok(snapshot)
}

/// Ranked framework and tool names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackSummary {
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

pub async fn frameworks_and_tools(
    api: &dyn HostingApi,
    repos: &[Repository],
    policy: ForkPolicy,
    registry: &SignatureRegistry,
    top_frameworks: usize,
    top_tools: usize,
) -> StackSummary {
    let mut frameworks = Tally::new();
    let mut tools = Tally::new();

    for repo in repos.iter().filter(|r| policy.admits(r.fork)) {
        let snapshot = match snapshot(api, repo).await {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("{}", logs::repo_skipped(&repo.name, "stack analysis", &e.to_string()));
                continue;
            }
        };

        for signal in registry.detect_all(&snapshot) {
            match signal.kind {
                SignalKind::Framework => frameworks.add(signal.name, signal.weight),
                SignalKind::Tool => tools.add(signal.name, signal.weight),
            }
        }
    }

    StackSummary {
        frameworks: frameworks.top_keys(top_frameworks),
        tools: tools.top_keys(top_tools),
    }
}
