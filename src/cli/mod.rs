//! Command-line interface
//!
//! Every option can also be supplied the way GitHub Actions passes action
//! inputs: as an `INPUT_<NAME>` environment variable.

pub mod logging;
pub mod run;
pub mod style;

use clap::Parser;
use pr_stack::config::{Config, DEFAULT_PRIMARY_BRANCH};
use pr_stack::error::{Error, Result};
use pr_stack::stack::DEFAULT_MAX_DEPTH;
use std::path::PathBuf;

/// Fallback variable for the token when the action input is not set
const TOKEN_FALLBACK_ENV: &str = "GITHUB_TOKEN";

/// Annotate stacked pull requests with a navigable stack overview
#[derive(Parser)]
#[command(name = "pr-stack", version, about)]
pub struct Cli {
    /// Token used to read and update pull requests
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Root branch of the stack; both walks stop when they reach it
    #[arg(long, env = "INPUT_PRIMARY-BRANCH", default_value = DEFAULT_PRIMARY_BRANCH)]
    pub primary_branch: String,

    /// Maximum number of links followed in each direction
    #[arg(long, env = "INPUT_MAX-DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Path to the JSON payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// API base URL, for GitHub Enterprise
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Resolve the stack and print the overviews without updating any PR
    #[arg(long, env = "INPUT_DRY-RUN")]
    pub dry_run: bool,
}

impl Cli {
    /// Build a validated [`Config`] from the parsed arguments
    pub fn to_config(&self) -> Result<Config> {
        let github_token = self
            .github_token
            .clone()
            .or_else(|| std::env::var(TOKEN_FALLBACK_ENV).ok())
            .ok_or_else(|| {
                Error::Config(format!(
                    "github-token is required (or set {TOKEN_FALLBACK_ENV})"
                ))
            })?;

        let config = Config {
            github_token,
            primary_branch: self.primary_branch.clone(),
            max_depth: self.max_depth,
            api_url: self.api_url.clone(),
            dry_run: self.dry_run,
        };
        config.validate()?;
        Ok(config)
    }
}
