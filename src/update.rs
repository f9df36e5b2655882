//! Description updates - write the overview to every PR in a stack
//!
//! Writes are independent of each other, so they are all issued at once and
//! every one runs to completion regardless of how its siblings fare.

use crate::error::Error;
use crate::overview::{compose_body, render_overview};
use crate::platform::PlatformService;
use crate::types::PullRequest;
use futures::future::join_all;
use tracing::{debug, warn};

/// A PR whose description could not be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFailure {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Why the write failed, always `Error::UpdateFailed`
    pub error: Error,
}

/// Outcome of updating every PR in a stack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// PRs updated successfully, in stack order
    pub updated: Vec<u64>,
    /// PRs that failed, in stack order
    pub failed: Vec<UpdateFailure>,
}

impl UpdateReport {
    /// Check if every write succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Check if some but not all writes succeeded
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        !self.failed.is_empty() && !self.updated.is_empty()
    }
}

/// The description each PR in `stack` should end up with, in stack order
pub fn planned_bodies(stack: &[PullRequest]) -> Vec<(u64, String)> {
    stack
        .iter()
        .enumerate()
        .map(|(i, pr)| {
            let overview = render_overview(stack, i);
            (pr.number, compose_body(pr.body.as_deref(), &overview))
        })
        .collect()
}

/// Append the stack overview to every PR in `stack`.
///
/// Failures are logged and collected; they never abort the remaining writes.
pub async fn update_stack_descriptions(
    platform: &dyn PlatformService,
    stack: &[PullRequest],
) -> UpdateReport {
    let writes = planned_bodies(stack)
        .into_iter()
        .map(|(number, body)| async move {
            let result = platform.update_pr_body(number, &body).await;
            (number, result)
        });

    let mut report = UpdateReport::default();
    for ((number, result), pr) in join_all(writes).await.into_iter().zip(stack) {
        match result {
            Ok(()) => {
                debug!(pr_number = number, "stack overview written");
                report.updated.push(number);
            }
            Err(e) => {
                let error = Error::UpdateFailed {
                    number,
                    message: e.to_string(),
                };
                warn!(pr_number = number, %error, "failed to update PR description");
                report.failed.push(UpdateFailure {
                    number,
                    html_url: pr.html_url.clone(),
                    error,
                });
            }
        }
    }
    report
}
