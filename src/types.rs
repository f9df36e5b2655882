//! Core types for pr-stack

/// An open pull request, as far as stack discovery cares about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR description, if any
    pub body: Option<String>,
}

/// Chain of PRs ordered from the primary branch outwards.
///
/// Index 0 is based on the primary branch. Each PR's head is the next PR's base.
pub type Stack = Vec<PullRequest>;

/// Direction of a walk along the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the root, following base branches
    Up,
    /// Toward the tip, following head branches
    Down,
}

impl Direction {
    /// Branch of `pr` that seeds the next lookup in this direction
    pub fn next_branch(self, pr: &PullRequest) -> &str {
        match self {
            Self::Up => &pr.base_ref,
            Self::Down => &pr.head_ref,
        }
    }

    /// List filter that finds the neighbour of `branch` in this direction
    pub fn filter(self, branch: &str) -> PrFilter {
        match self {
            Self::Up => PrFilter::Head(branch.to_string()),
            Self::Down => PrFilter::Base(branch.to_string()),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Filter for listing open PRs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrFilter {
    /// PRs whose head branch is this branch
    Head(String),
    /// PRs whose base branch is this branch
    Base(String),
}

impl PrFilter {
    /// Whether `pr` satisfies this filter
    pub fn matches(&self, pr: &PullRequest) -> bool {
        match self {
            Self::Head(branch) => pr.head_ref == *branch,
            Self::Base(branch) => pr.base_ref == *branch,
        }
    }
}

impl std::fmt::Display for PrFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Head(branch) => write!(f, "head={branch}"),
            Self::Base(branch) => write!(f, "base={branch}"),
        }
    }
}

/// Repository the platform service operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom API base URL (None for api.github.com)
    pub api_url: Option<String>,
}
