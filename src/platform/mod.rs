//! Platform services
//!
//! Stack discovery only needs two capabilities from the hosting platform:
//! listing open PRs by branch and rewriting a PR description. Keeping the seam
//! this narrow lets the resolver and assembler run against an in-memory fake.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PrFilter, PullRequest, RepoConfig};
use async_trait::async_trait;

/// Platform service trait for the PR operations stack discovery needs
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List open PRs matching `filter`
    async fn list_open_prs(&self, filter: &PrFilter) -> Result<Vec<PullRequest>>;

    /// Replace the description of PR `number` with `body`
    async fn update_pr_body(&self, number: u64, body: &str) -> Result<()>;

    /// Get the repository configuration
    fn config(&self) -> &RepoConfig;
}
