//! # Learning Focus
//!
//! Guesses what the user is currently learning by scoring topic areas against
//! recent project names, README text and recently created repositories.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::application::projects::RecentProject;
use crate::application::tally::Tally;
use crate::domain::config::ForkPolicy;
use crate::domain::traits::HostingApi;
use crate::domain::types::Repository;
use crate::strings::messages;

pub const LEARNING_AREAS: &[(&str, &[&str])] = &[
    ("DevOps", &["docker", "kubernetes", "jenkins", "cicd", "terraform", "ansible"]),
    ("Cloud Architecture", &["aws", "gcp", "azure", "cloud", "serverless", "lambda"]),
    ("System Design", &["architecture", "system-design", "distributed", "scalable"]),
    ("Microservices", &["microservice", "service-mesh", "api-gateway", "grpc"]),
    ("AI/ML", &["ai", "ml", "machine-learning", "deep-learning", "neural", "tensorflow", "pytorch"]),
    ("Blockchain", &["blockchain", "web3", "ethereum", "solidity", "crypto"]),
    ("Mobile Development", &["android", "ios", "flutter", "react-native", "mobile"]),
    ("Game Development", &["game", "unity", "unreal", "godot"]),
    ("UI/UX Design", &["ui", "ux", "design", "figma", "sketch", "adobe"]),
];

pub const LEARNING_INDICATORS: &[&str] = &["learning", "studying", "experimenting with", "exploring"];

pub const README_NAMES: &[&str] = &["README.md", "readme.md", "Readme.md", "README.txt"];

const PROJECT_NAME_WEIGHT: u64 = 3;
const PROXIMITY_BONUS: u64 = 2;
const MENTION_WEIGHT: u64 = 1;
const NEW_REPO_WEIGHT: u64 = 2;
/// Max distance, in characters, between a keyword and an indicator for the bonus
const PROXIMITY_CHARS: usize = 100;

fn name_matches(name: &str, keywords: &[&str]) -> bool {
    let name = name.to_lowercase();
    keywords.iter().any(|kw| name.contains(kw))
}

/// Character offset of the first occurrence of `needle`
fn char_position(text: &str, needle: &str) -> Option<usize> {
    text.find(needle).map(|byte| text[..byte].chars().count())
}

pub fn score_project_names(tally: &mut Tally, projects: &[RecentProject]) {
    for project in projects {
        for (area, keywords) in LEARNING_AREAS {
            if name_matches(&project.name, keywords) {
                tally.add(area, PROJECT_NAME_WEIGHT);
            }
        }
    }
}

/// Score one README. Each keyword mention counts once, plus a bonus per indicator
/// whose first occurrence is close to the keyword's first occurrence.
pub fn score_readme(tally: &mut Tally, readme: &str) {
    let text = readme.to_lowercase();
    let indicators: Vec<usize> = LEARNING_INDICATORS
        .iter()
        .filter_map(|indicator| char_position(&text, indicator))
        .collect();

    for (area, keywords) in LEARNING_AREAS {
        for keyword in keywords.iter() {
            let Some(position) = char_position(&text, keyword) else {
                continue;
            };
            for indicator in &indicators {
                if indicator.abs_diff(position) < PROXIMITY_CHARS {
                    tally.add(area, PROXIMITY_BONUS);
                }
            }
            tally.add(area, MENTION_WEIGHT);
        }
    }
}

pub fn score_new_repositories(
    tally: &mut Tally,
    repos: &[Repository],
    policy: ForkPolicy,
    now: DateTime<Utc>,
    window_days: i64,
) {
    let window = Duration::days(window_days);
    for repo in repos.iter().filter(|r| policy.admits(r.fork)) {
        if now - repo.created_at >= window {
            continue;
        }
        for (area, keywords) in LEARNING_AREAS {
            if name_matches(&repo.name, keywords) {
                tally.add(area, NEW_REPO_WEIGHT);
            }
        }
    }
}

/// Text of the first README variant the repository has.
pub async fn readme_text(api: &dyn HostingApi, repo: &Repository) -> Option<String> {
    for name in README_NAMES {
        if let Ok(text) = api.file_text(&repo.full_name, name).await {
            return Some(text);
        }
    }
    tracing::debug!("No README found for {}", repo.name);
    None
}

pub fn random_area<R: Rng + ?Sized>(rng: &mut R) -> String {
    LEARNING_AREAS
        .choose(rng)
        .map(|(area, _)| area.to_string())
        .unwrap_or_else(|| messages::NOT_AVAILABLE.to_string())
}

/// Pick the highest scoring learning area, or a random one when nothing matched.
pub async fn learning_focus<R: Rng + ?Sized>(
    api: &dyn HostingApi,
    repos: &[Repository],
    projects: &[RecentProject],
    policy: ForkPolicy,
    now: DateTime<Utc>,
    window_days: i64,
    rng: &mut R,
) -> String {
    let mut tally = Tally::new();

    score_project_names(&mut tally, projects);

    for repo in repos.iter().filter(|r| policy.admits(r.fork)) {
        if let Some(readme) = readme_text(api, repo).await {
            score_readme(&mut tally, &readme);
        }
    }

    score_new_repositories(&mut tally, repos, policy, now, window_days);

    match tally.most_common(1).into_iter().next() {
        Some((area, _)) => area,
        None => random_area(rng),
    }
}
