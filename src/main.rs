//! # Main Entry Point
//!
//! Generates a profile README from live hosting API data:
//! - Domain: Configuration, Types and the `HostingApi` seam
//! - Infrastructure: GitHub REST client
//! - Application: Fetchers, Aggregator, Renderer
//! - Patterns: Framework/tool signature detectors
//!

mod application;
mod domain;
mod infrastructure;
mod patterns;
mod strings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::application::{aggregator, renderer};
use crate::domain::config::{AppConfig, MAX_LOOKBACK_DAYS};
use crate::domain::paths;
use crate::infrastructure::github::GitHubClient;
use crate::strings::logs;

/// Regenerate a profile README from GitHub activity
#[derive(Parser, Debug)]
#[command(name = "profile-readme", version, about)]
struct Cli {
    /// YAML configuration file (defaults to data/config.yaml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Access token for the hosting API
    #[arg(long, env = "GH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Account whose profile is generated
    #[arg(long, env = "GITHUB_USERNAME")]
    username: Option<String>,

    /// Template containing `{{ KEY }}` placeholders
    #[arg(long, value_name = "PATH")]
    template: Option<String>,

    /// Where to write the result (defaults to the template itself)
    #[arg(long, value_name = "PATH")]
    output: Option<String>,

    /// Lookback window of the activity graph, in days
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_LOOKBACK_DAYS)))]
    days: Option<u32>,

    /// Count forked repositories in per-repository statistics
    #[arg(long)]
    include_forks: bool,

    /// Print the rendered document instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Also write logs to this directory
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    /// Command-line and environment values override the config file.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(token) = &self.token {
            config.github.token = Some(token.clone());
        }
        if let Some(username) = &self.username {
            config.github.username = username.clone();
        }
        if let Some(template) = &self.template {
            config.profile.template = template.clone();
        }
        if let Some(output) = &self.output {
            config.profile.output = Some(output.clone());
        }
        if let Some(days) = self.days {
            config.profile.lookback_days = days;
        }
        if self.include_forks {
            config.profile.exclude_forks = false;
        }
    }
}

fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,reqwest=warn,hyper=warn"));

    // stdout is reserved for --dry-run output
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, paths::LOG_FILE);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_dir.as_deref())?;

    tracing::info!("{}", logs::STARTING);

    // 1. Configuration
    let (config_path, explicit) = match &cli.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(paths::DEFAULT_CONFIG), false),
    };
    let mut config = AppConfig::load(&config_path, explicit)?;
    cli.apply(&mut config);
    config.validate()?;
    tracing::info!("{}", logs::config_loaded(&config.github.username));
    if config.github.token.is_none() {
        tracing::warn!("{}", logs::NO_TOKEN);
    }

    // 2. Collect
    let client = GitHubClient::new(&config.github)?;
    let mut rng = StdRng::from_entropy();
    let data = aggregator::aggregate(&client, &config, &mut rng, chrono::Utc::now()).await?;

    // 3. Render
    let template = Path::new(&config.profile.template);
    if cli.dry_run {
        print!("{}", renderer::render_file(template, &data)?);
        return Ok(());
    }

    let output = Path::new(config.output_path());
    renderer::render_to(template, output, &data)?;
    tracing::info!("{}", logs::template_rendered(&output.display().to_string(), data.len()));
    tracing::info!("{}", logs::updated_successfully(&output.display().to_string()));

    Ok(())
}
