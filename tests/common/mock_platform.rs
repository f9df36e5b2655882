//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_stack::error::{Error, Result};
use pr_stack::platform::PlatformService;
use pr_stack::types::{PrFilter, PullRequest, RepoConfig};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `update_pr_body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBodyCall {
    pub pr_number: u64,
    pub body: String,
}

/// In-memory platform holding a fixed set of open PRs
///
/// Features:
/// - `list_open_prs` filters the stored PRs like the real API would
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: RepoConfig,
    open_prs: Mutex<Vec<PullRequest>>,
    // Call tracking
    list_calls: Mutex<Vec<PrFilter>>,
    update_calls: Mutex<Vec<UpdateBodyCall>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
    error_on_update: Mutex<HashMap<u64, String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config and no PRs
    pub fn with_config(config: RepoConfig) -> Self {
        Self {
            config,
            open_prs: Mutex::new(Vec::new()),
            list_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            error_on_update: Mutex::new(HashMap::new()),
        }
    }

    /// Create a mock pre-loaded with `prs`
    pub fn with_prs(config: RepoConfig, prs: Vec<PullRequest>) -> Self {
        let mock = Self::with_config(config);
        *mock.open_prs.lock().unwrap() = prs;
        mock
    }

    /// Add an open PR
    pub fn add_pr(&self, pr: PullRequest) {
        self.open_prs.lock().unwrap().push(pr);
    }

    // === Error injection methods ===

    /// Make every `list_open_prs` call return an error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `update_pr_body` fail for one PR
    pub fn fail_update_for(&self, pr_number: u64, msg: &str) {
        self.error_on_update
            .lock()
            .unwrap()
            .insert(pr_number, msg.to_string());
    }

    // === Call verification methods ===

    /// Get all filters `list_open_prs` was called with
    pub fn get_list_calls(&self) -> Vec<PrFilter> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Get all `update_pr_body` calls (including failed ones)
    pub fn get_update_calls(&self) -> Vec<UpdateBodyCall> {
        self.update_calls.lock().unwrap().clone()
    }

    /// Body written to `pr_number`, if any
    pub fn body_written_to(&self, pr_number: u64) -> Option<String> {
        self.get_update_calls()
            .into_iter()
            .find(|c| c.pr_number == pr_number)
            .map(|c| c.body)
    }

    /// Count of `update_pr_body` calls
    pub fn update_call_count(&self) -> usize {
        self.update_calls.lock().unwrap().len()
    }

    /// Assert that no description was written
    pub fn assert_no_updates(&self) {
        let calls = self.get_update_calls();
        assert!(calls.is_empty(), "Expected no updates but got: {calls:?}");
    }

    /// Assert that `update_pr_body` was called for each PR
    pub fn assert_updated(&self, pr_numbers: &[u64]) {
        let calls = self.get_update_calls();
        for number in pr_numbers {
            assert!(
                calls.iter().any(|c| c.pr_number == *number),
                "Expected update_pr_body({number}) but got: {calls:?}"
            );
        }
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_open_prs(&self, filter: &PrFilter) -> Result<Vec<PullRequest>> {
        self.list_calls.lock().unwrap().push(filter.clone());

        // Check for injected error
        if let Some(msg) = self.error_on_list.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let prs = self.open_prs.lock().unwrap();
        Ok(prs.iter().filter(|pr| filter.matches(pr)).cloned().collect())
    }

    async fn update_pr_body(&self, pr_number: u64, body: &str) -> Result<()> {
        self.update_calls.lock().unwrap().push(UpdateBodyCall {
            pr_number,
            body: body.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_update.lock().unwrap().get(&pr_number) {
            return Err(Error::Platform(msg.clone()));
        }
        Ok(())
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
