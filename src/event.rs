//! Workflow trigger payload
//!
//! A stripped down view of the `pull_request` webhook event, keeping only the
//! fields stack discovery reads. Any other event type simply has no
//! `pull_request` object.

use crate::error::{Error, Result};
use crate::types::{PullRequest, RepoConfig};
use serde::Deserialize;
use std::path::Path;

/// Parsed event payload
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    /// The pull request the event is about, absent for non-PR events
    pub pull_request: Option<EventPullRequest>,
    /// The repository the event happened in
    pub repository: Option<EventRepository>,
}

/// Pull request as it appears in the event payload
#[derive(Debug, Clone, Deserialize)]
pub struct EventPullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// PR description
    #[serde(default)]
    pub body: Option<String>,
    /// Head branch
    pub head: EventRef,
    /// Base branch
    pub base: EventRef,
}

/// Branch reference inside a PR payload
#[derive(Debug, Clone, Deserialize)]
pub struct EventRef {
    /// Branch name
    #[serde(rename = "ref")]
    pub ref_field: String,
}

/// Repository as it appears in the event payload
#[derive(Debug, Clone, Deserialize)]
pub struct EventRepository {
    /// Repository name
    pub name: String,
    /// Repository owner
    pub owner: EventOwner,
}

/// Repository owner
#[derive(Debug, Clone, Deserialize)]
pub struct EventOwner {
    /// Owner login
    pub login: String,
}

impl From<EventPullRequest> for PullRequest {
    fn from(pr: EventPullRequest) -> Self {
        Self {
            number: pr.number,
            html_url: pr.html_url,
            base_ref: pr.base.ref_field,
            head_ref: pr.head.ref_field,
            body: pr.body,
        }
    }
}

impl EventPayload {
    /// Parse a payload from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Event(e.to_string()))
    }

    /// Read and parse the payload file GitHub Actions points `GITHUB_EVENT_PATH` at
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Event(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    /// The triggering PR, if this is a PR event
    pub fn trigger(&self) -> Option<PullRequest> {
        self.pull_request.clone().map(PullRequest::from)
    }

    /// Repository configuration for the platform service
    pub fn repo_config(&self, api_url: Option<String>) -> Result<RepoConfig> {
        let repo = self
            .repository
            .as_ref()
            .ok_or_else(|| Error::Event("payload has no repository".to_string()))?;
        Ok(RepoConfig {
            owner: repo.owner.login.clone(),
            repo: repo.name.clone(),
            api_url,
        })
    }
}
