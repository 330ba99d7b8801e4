//! GitHub REST API access
//!
//! Wraps the handful of endpoints the profile pipeline needs: profile, repository
//! listings, commits, events, issue search, contents and language breakdowns.

mod client;

pub use client::GitHubClient;
