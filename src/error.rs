//! Error types for pr-stack

use crate::types::Direction;
use thiserror::Error;

/// Errors produced while discovering or annotating a stack
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No open PR links to the branch: the chain is broken
    #[error("no {direction} PR found for branch '{branch}'")]
    LinkNotFound {
        /// Direction of the lookup
        direction: Direction,
        /// Branch that was looked up
        branch: String,
    },

    /// More than one open PR claims the same link
    #[error("multiple {direction} PRs found for branch '{branch}': {}", format_numbers(.numbers))]
    AmbiguousLink {
        /// Direction of the lookup
        direction: Direction,
        /// Branch that was looked up
        branch: String,
        /// Numbers of every competing PR
        numbers: Vec<u64>,
    },

    /// A walk revisited a PR or ran past the depth bound
    #[error("cycle detected walking {direction} after {depth} step(s)")]
    CycleDetected {
        /// Direction of the walk
        direction: Direction,
        /// Steps taken before the walk was stopped
        depth: usize,
    },

    /// Writing a PR description failed
    #[error("failed to update PR #{number}: {message}")]
    UpdateFailed {
        /// PR number
        number: u64,
        /// Underlying failure
        message: String,
    },

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Generic platform error (used by non-GitHub implementations and fakes)
    #[error("platform error: {0}")]
    Platform(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Event payload could not be read or understood
    #[error("invalid event payload: {0}")]
    Event(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

fn format_numbers(numbers: &[u64]) -> String {
    numbers
        .iter()
        .map(|n| format!("#{n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
