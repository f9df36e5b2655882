//! Run orchestration - one invocation of the stack overview
//!
//! Assembly is the single fatal path: if the stack cannot be resolved the run
//! fails before any description is touched. Once the stack is known, write
//! failures only degrade the outcome.

use crate::error::Result;
use crate::platform::PlatformService;
use crate::stack::{AssembleOptions, assemble_stack};
use crate::types::{PullRequest, Stack};
use crate::update::{UpdateReport, planned_bodies, update_stack_descriptions};
use tracing::info;

/// Options for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Stack assembly options
    pub assemble: AssembleOptions,
    /// Compute the stack and bodies but skip writes
    pub dry_run: bool,
}

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The trigger was not a pull request event; nothing to do
    NoPullRequestContext,
    /// Dry run: the stack and the bodies that would have been written
    DryRun {
        /// Assembled stack
        stack: Stack,
        /// `(pr_number, body)` pairs in stack order
        bodies: Vec<(u64, String)>,
    },
    /// Descriptions were written
    Updated {
        /// Assembled stack
        stack: Stack,
        /// Per-PR write results
        report: UpdateReport,
    },
}

impl RunOutcome {
    /// The assembled stack, if one was built
    pub fn stack(&self) -> Option<&Stack> {
        match self {
            Self::NoPullRequestContext => None,
            Self::DryRun { stack, .. } | Self::Updated { stack, .. } => Some(stack),
        }
    }
}

/// Assemble the stack around `trigger` and annotate every PR in it
pub async fn run_stack_overview(
    platform: &dyn PlatformService,
    trigger: &PullRequest,
    options: &RunOptions,
) -> Result<RunOutcome> {
    let repo = platform.config();
    info!(
        owner = %repo.owner,
        repo = %repo.repo,
        pr_number = trigger.number,
        dry_run = options.dry_run,
        "starting stack overview run"
    );

    let stack = assemble_stack(platform, trigger, &options.assemble).await?;

    if options.dry_run {
        info!(len = stack.len(), "dry run, skipping description updates");
        let bodies = planned_bodies(&stack);
        return Ok(RunOutcome::DryRun { stack, bodies });
    }

    let report = update_stack_descriptions(platform, &stack).await;
    info!(
        updated = report.updated.len(),
        failed = report.failed.len(),
        "stack descriptions updated"
    );
    Ok(RunOutcome::Updated { stack, report })
}
