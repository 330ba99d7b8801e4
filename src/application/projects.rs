//! # Recent Projects
//!
//! Picks the repositories with the most recent pushes and classifies them
//! against keyword lists to fill the project-specific placeholders.

use chrono::{DateTime, Utc};

use crate::application::SHORT_DATE;
use crate::domain::types::Event;
use crate::strings::messages;

pub const AI_KEYWORDS: &[&str] = &["ai", "ml", "machine", "learning", "neural", "deep"];
pub const FRONTEND_KEYWORDS: &[&str] = &["react", "frontend", "web", "ui"];

/// A repository with its newest push
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentProject {
    pub name: String,
    pub last_push: DateTime<Utc>,
}

impl RecentProject {
    pub fn matches_any(&self, keywords: &[&str]) -> bool {
        let name = self.name.to_lowercase();
        keywords.iter().any(|kw| name.contains(kw))
    }
}

/// Top `count` repositories by newest push, newest first.
pub fn recent_projects(events: &[Event], count: usize) -> Vec<RecentProject> {
    let mut projects: Vec<RecentProject> = Vec::new();

    for event in events.iter().filter(|e| e.is_push()) {
        let name = event.repo_short_name();
        match projects.iter_mut().find(|p| p.name == name) {
            Some(existing) => {
                if event.created_at > existing.last_push {
                    existing.last_push = event.created_at;
                }
            }
            None => projects.push(RecentProject {
                name: name.to_string(),
                last_push: event.created_at,
            }),
        }
    }

    projects.sort_by(|a, b| b.last_push.cmp(&a.last_push));
    projects.truncate(count);
    projects
}

/// Values for `NEW_PROJECT`, `NEW_COMMIT`, `AI_COMMIT` and `REACT_COMMIT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHighlights {
    pub newest_project: String,
    pub newest_commit: String,
    pub ai_commit: String,
    pub frontend_commit: String,
}

impl Default for ProjectHighlights {
    fn default() -> Self {
        Self {
            newest_project: messages::NOT_AVAILABLE.to_string(),
            newest_commit: messages::NOT_AVAILABLE.to_string(),
            ai_commit: messages::NOT_AVAILABLE.to_string(),
            frontend_commit: messages::NOT_AVAILABLE.to_string(),
        }
    }
}

fn first_match_date(projects: &[RecentProject], keywords: &[&str]) -> String {
    projects
        .iter()
        .find(|p| p.matches_any(keywords))
        .map(|p| p.last_push.format(SHORT_DATE).to_string())
        .unwrap_or_else(|| messages::NOT_AVAILABLE.to_string())
}

pub fn highlights(projects: &[RecentProject]) -> ProjectHighlights {
    let Some(newest) = projects.first() else {
        return ProjectHighlights::default();
    };

    ProjectHighlights {
        newest_project: newest.name.clone(),
        newest_commit: newest.last_push.format(SHORT_DATE).to_string(),
        ai_commit: first_match_date(projects, AI_KEYWORDS),
        frontend_commit: first_match_date(projects, FRONTEND_KEYWORDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fake::{at, other_event, push_event};

    #[test]
    fn test_newest_first_with_dedup() {
        let events = vec![
            push_event("me/A", at(2024, 3, 10, 0), 1),
            push_event("me/B", at(2024, 3, 8, 0), 1),
            push_event("me/A", at(2024, 3, 1, 0), 1),
        ];

        let projects = recent_projects(&events, 3);
        assert_eq!(
            projects,
            vec![
                RecentProject { name: "A".into(), last_push: at(2024, 3, 10, 0) },
                RecentProject { name: "B".into(), last_push: at(2024, 3, 8, 0) },
            ]
        );
    }

    #[test]
    fn test_older_event_first_in_feed() {
        let events = vec![
            push_event("me/A", at(2024, 3, 1, 0), 1),
            push_event("me/B", at(2024, 3, 8, 0), 1),
            push_event("me/A", at(2024, 3, 10, 0), 1),
            other_event("WatchEvent", "me/C", at(2024, 3, 11, 0)),
        ];

        let names: Vec<_> = recent_projects(&events, 3).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_truncates_to_count() {
        let events: Vec<_> = (1..=5)
            .map(|d| push_event(&format!("me/p{}", d), at(2024, 3, d, 0), 1))
            .collect();

        let names: Vec<_> = recent_projects(&events, 3).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["p5", "p4", "p3"]);
    }

    #[test]
    fn test_highlights() {
        let events = vec![
            push_event("me/dotfiles", at(2024, 3, 10, 0), 1),
            push_event("me/webshop", at(2024, 3, 8, 0), 1),
            push_event("me/neural-style", at(2024, 3, 2, 0), 1),
        ];
        let h = highlights(&recent_projects(&events, 3));
        assert_eq!(h.newest_project, "dotfiles");
        assert_eq!(h.newest_commit, "Mar 10");
        assert_eq!(h.ai_commit, "Mar 02");
        assert_eq!(h.frontend_commit, "Mar 08");
    }

    #[test]
    fn test_highlights_without_projects() {
        assert_eq!(highlights(&[]), ProjectHighlights::default());
        assert_eq!(highlights(&[]).ai_commit, "N/A");
    }
}
