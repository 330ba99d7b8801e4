//! # Aggregator
//!
//! Runs every fetcher in a fixed order and records the results in `ProfileData`.
//! Events and repositories are loaded once and shared by the fetchers that need them.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::Rng;

use crate::application::{activity, cosmetic, learning, projects, stack, stats};
use crate::domain::config::AppConfig;
use crate::domain::traits::HostingApi;
use crate::domain::types::{Event, ProfileData, Repository};
use crate::patterns::SignatureRegistry;
use crate::strings::logs;

/// Placeholder names, in the order they are filled
pub mod keys {
    pub const CURRENT_DATE: &str = "CURRENT_DATE";
    pub const CURRENT_STATUS: &str = "CURRENT_STATUS";
    pub const DAYS_ACTIVE: &str = "DAYS_ACTIVE";
    pub const REPO_COUNT: &str = "REPO_COUNT";
    pub const STAR_COUNT: &str = "STAR_COUNT";
    pub const ACTIVITY_GRAPH: &str = "ACTIVITY_GRAPH";
    pub const COMMIT_COUNT: &str = "COMMIT_COUNT";
    pub const PR_COUNT: &str = "PR_COUNT";
    pub const ISSUE_COUNT: &str = "ISSUE_COUNT";
    pub const CONTRIB: &str = "CONTRIB";
    pub const SITE_COMMIT: &str = "SITE_COMMIT";
    pub const NEW_PROJECT: &str = "NEW_PROJECT";
    pub const NEW_COMMIT: &str = "NEW_COMMIT";
    pub const AI_COMMIT: &str = "AI_COMMIT";
    pub const REACT_COMMIT: &str = "REACT_COMMIT";
    pub const LANGUAGES: &str = "LANGUAGES";
    pub const FRAMEWORKS: &str = "FRAMEWORKS";
    pub const TOOLS: &str = "TOOLS";
    pub const CURRENT_LEARNING: &str = "CURRENT_LEARNING";
    pub const RANDOM_QUOTE: &str = "RANDOM_QUOTE";
    pub const ASCII_ART: &str = "ASCII_ART";
}

const CURRENT_DATE_FORMAT: &str = "%A, %B %d, %Y - %H:%M:%S UTC";

fn record(data: &mut ProfileData, key: &str, value: impl ToString) {
    let value = value.to_string();
    tracing::debug!("{}", logs::collected(key, &value));
    data.set(key, value);
}

async fn load_events(api: &dyn HostingApi, username: &str) -> Vec<Event> {
    api.events(username).await.unwrap_or_else(|e| {
        tracing::warn!("{}", logs::fetcher_fallback("events", &e.to_string()));
        Vec::new()
    })
}

async fn load_repositories(api: &dyn HostingApi, username: &str) -> Vec<Repository> {
    api.repositories(username).await.unwrap_or_else(|e| {
        tracing::warn!("{}", logs::fetcher_fallback("repositories", &e.to_string()));
        Vec::new()
    })
}

/// Collect every placeholder value for the configured user.
///
/// Only the profile lookup is fatal; every other fetcher falls back to its default.
pub async fn aggregate<R: Rng + ?Sized>(
    api: &dyn HostingApi,
    config: &AppConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<ProfileData> {
    let username = config.github.username.as_str();
    let profile = &config.profile;
    let policy = config.fork_policy();
    let mut data = ProfileData::new();

    let user = api
        .user(username)
        .await
        .with_context(|| format!("Failed to load profile for {}", username))?;
    tracing::info!("Collecting profile data for {}", user.login);

    record(&mut data, keys::CURRENT_DATE, now.format(CURRENT_DATE_FORMAT));
    record(&mut data, keys::CURRENT_STATUS, cosmetic::random_status(rng));
    record(&mut data, keys::DAYS_ACTIVE, stats::days_active(user.created_at, now));

    let repos = load_repositories(api, username).await;
    record(&mut data, keys::REPO_COUNT, user.public_repos);
    record(&mut data, keys::STAR_COUNT, stats::star_count(&repos));

    let events = load_events(api, username).await;
    record(
        &mut data,
        keys::ACTIVITY_GRAPH,
        activity::activity_graph(&events, now.date_naive(), profile.lookback_days),
    );
    record(
        &mut data,
        keys::COMMIT_COUNT,
        stats::count_commits(api, username, &events, &repos, policy).await,
    );
    record(&mut data, keys::PR_COUNT, stats::count_pull_requests(api, username).await);
    record(&mut data, keys::ISSUE_COUNT, stats::count_issues(api, username).await);
    record(&mut data, keys::CONTRIB, stats::count_contributions(&events, username));
    record(
        &mut data,
        keys::SITE_COMMIT,
        stats::site_commit(api, username, profile.site_repo.as_deref(), &repos).await,
    );

    let recent = projects::recent_projects(&events, profile.recent_projects);
    let highlights = projects::highlights(&recent);
    record(&mut data, keys::NEW_PROJECT, highlights.newest_project);
    record(&mut data, keys::NEW_COMMIT, highlights.newest_commit);
    record(&mut data, keys::AI_COMMIT, highlights.ai_commit);
    record(&mut data, keys::REACT_COMMIT, highlights.frontend_commit);

    let languages = stack::top_languages(api, &repos, policy, profile.top_languages).await;
    data.set_list(keys::LANGUAGES, &languages);

    let registry = SignatureRegistry::new();
    let summary = stack::frameworks_and_tools(
        api,
        &repos,
        policy,
        &registry,
        profile.top_frameworks,
        profile.top_tools,
    )
    .await;
    data.set_list(keys::FRAMEWORKS, &summary.frameworks);
    data.set_list(keys::TOOLS, &summary.tools);

    let focus = learning::learning_focus(
        api,
        &repos,
        &recent,
        policy,
        now,
        profile.learning_window_days,
        rng,
    )
    .await;
    record(&mut data, keys::CURRENT_LEARNING, focus);

    record(&mut data, keys::RANDOM_QUOTE, cosmetic::random_quote(rng));
    let font = profile.figlet_font.as_deref().map(Path::new);
    record(&mut data, keys::ASCII_ART, cosmetic::ascii_art(username, font));

    Ok(data)
}
