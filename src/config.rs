//! Run configuration
//!
//! Inputs arrive as action inputs (`INPUT_*` environment variables) or CLI
//! flags; the binary collects them into a [`Config`] and validates it once
//! before any API call is made.

use crate::error::{Error, Result};
use crate::run::RunOptions;
use crate::stack::{AssembleOptions, DEFAULT_MAX_DEPTH};
use url::Url;

/// Default primary branch when none is configured
pub const DEFAULT_PRIMARY_BRANCH: &str = "main";

/// Validated settings for one run
#[derive(Clone)]
pub struct Config {
    /// API credential
    pub github_token: String,
    /// Branch both walks terminate on
    pub primary_branch: String,
    /// Maximum links followed per walk
    pub max_depth: usize,
    /// Custom API base URL (GitHub Enterprise)
    pub api_url: Option<String>,
    /// Compute the stack without writing anything
    pub dry_run: bool,
}

impl Config {
    /// Config with defaults for everything but the token
    pub fn new(github_token: impl Into<String>) -> Self {
        Self {
            github_token: github_token.into(),
            primary_branch: DEFAULT_PRIMARY_BRANCH.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            api_url: None,
            dry_run: false,
        }
    }

    /// Check every setting, reporting the first problem found
    pub fn validate(&self) -> Result<()> {
        if self.github_token.trim().is_empty() {
            return Err(Error::Config("github-token must not be empty".to_string()));
        }
        if self.primary_branch.trim().is_empty() {
            return Err(Error::Config("primary-branch must not be empty".to_string()));
        }
        if self.max_depth == 0 {
            return Err(Error::Config("max-depth must be at least 1".to_string()));
        }
        if let Some(ref api_url) = self.api_url {
            let parsed = Url::parse(api_url)
                .map_err(|e| Error::Config(format!("api-url '{api_url}' is not a URL: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::Config(format!(
                    "api-url '{api_url}' must use http or https"
                )));
            }
        }
        Ok(())
    }

    /// Options for a run with these settings
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            assemble: AssembleOptions {
                primary_branch: self.primary_branch.clone(),
                max_depth: self.max_depth,
            },
            dry_run: self.dry_run,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &"<redacted>")
            .field("primary_branch", &self.primary_branch)
            .field("max_depth", &self.max_depth)
            .field("api_url", &self.api_url)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}
