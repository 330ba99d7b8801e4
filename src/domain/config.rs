//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for API access and for the profile pipeline settings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::domain::paths;

/// Longest activity window accepted, in days
pub const MAX_LOOKBACK_DAYS: u32 = 3650;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Credentials and endpoint for the hosting API.
#[derive(Debug, Deserialize, Clone)]
pub struct GithubConfig {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            username: default_username(),
            api_url: default_api_url(),
            timeout: default_timeout(),
        }
    }
}

fn default_username() -> String {
    "centopw".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Settings for what gets collected and where the document lives.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileConfig {
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    #[serde(default = "default_recent_projects")]
    pub recent_projects: usize,
    #[serde(default = "default_top")]
    pub top_languages: usize,
    #[serde(default = "default_top")]
    pub top_frameworks: usize,
    #[serde(default = "default_top")]
    pub top_tools: usize,
    #[serde(default = "default_learning_window")]
    pub learning_window_days: i64,
    #[serde(default = "default_exclude_forks")]
    pub exclude_forks: bool,
    /// Repository (short name) whose latest commit fills `SITE_COMMIT`; empty disables it
    #[serde(default = "default_site_repo")]
    pub site_repo: Option<String>,
    /// FIGlet font file for the `ASCII_ART` banner (built-in standard font when unset)
    #[serde(default)]
    pub figlet_font: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            output: None,
            lookback_days: default_lookback_days(),
            recent_projects: default_recent_projects(),
            top_languages: default_top(),
            top_frameworks: default_top(),
            top_tools: default_top(),
            learning_window_days: default_learning_window(),
            exclude_forks: default_exclude_forks(),
            site_repo: default_site_repo(),
            figlet_font: None,
        }
    }
}

fn default_template() -> String {
    paths::DEFAULT_TEMPLATE.to_string()
}

fn default_site_repo() -> Option<String> {
    Some("tanhiep.dev".to_string())
}

fn default_lookback_days() -> u32 {
    30
}

fn default_recent_projects() -> usize {
    3
}

fn default_top() -> usize {
    5
}

fn default_learning_window() -> i64 {
    90
}

fn default_exclude_forks() -> bool {
    true
}

/// Whether forked repositories take part in per-repository statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkPolicy {
    Exclude,
    Include,
}

impl ForkPolicy {
    pub fn admits(&self, is_fork: bool) -> bool {
        match self {
            ForkPolicy::Exclude => !is_fork,
            ForkPolicy::Include => true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// When `explicit` is false a missing file yields the built-in defaults.
    pub fn load(path: &Path, explicit: bool) -> Result<Self> {
        if !path.exists() && !explicit {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.profile.lookback_days > MAX_LOOKBACK_DAYS {
            bail!(
                "profile.lookback_days is {}, the maximum is {}",
                self.profile.lookback_days,
                MAX_LOOKBACK_DAYS
            );
        }
        Ok(())
    }

    pub fn fork_policy(&self) -> ForkPolicy {
        if self.profile.exclude_forks {
            ForkPolicy::Exclude
        } else {
            ForkPolicy::Include
        }
    }

    /// Path the rendered document is written to. Defaults to the template itself.
    pub fn output_path(&self) -> &str {
        self.profile
            .output
            .as_deref()
            .unwrap_or(&self.profile.template)
    }
}
