//! Shared fixtures for integration and unit tests

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::MockPlatformService;

use pr_stack::types::{PullRequest, RepoConfig};

/// Repository config pointing at octo/repo on github.com
pub fn repo_config() -> RepoConfig {
    RepoConfig {
        owner: "octo".to_string(),
        repo: "repo".to_string(),
        api_url: None,
    }
}

/// URL of PR `number` in the test repository
pub fn pr_url(number: u64) -> String {
    format!("https://github.com/octo/repo/pull/{number}")
}

/// Build a PR with the given branches and a body naming it
pub fn make_pr(number: u64, base: &str, head: &str) -> PullRequest {
    PullRequest {
        number,
        html_url: pr_url(number),
        base_ref: base.to_string(),
        head_ref: head.to_string(),
        body: Some(format!("Body of #{number}")),
    }
}

/// Build a well-formed chain over `branches`.
///
/// `branches` lists every branch from the primary branch around to the
/// primary branch again, e.g. `["main", "feat-1", "feat-2", "main"]` makes
/// PRs 1 (main -> feat-1), 2 (feat-1 -> feat-2) and 3 (feat-2 -> main).
pub fn make_chain(branches: &[&str]) -> Vec<PullRequest> {
    branches
        .windows(2)
        .zip(1u64..)
        .map(|(pair, number)| make_pr(number, pair[0], pair[1]))
        .collect()
}

/// Mock preloaded with `prs`
pub fn mock_with(prs: Vec<PullRequest>) -> MockPlatformService {
    MockPlatformService::with_prs(repo_config(), prs)
}
