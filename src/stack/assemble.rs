//! Stack assembly - walk both directions from the triggering PR

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::stack::resolve::resolve_link;
use crate::types::{Direction, PullRequest, Stack};
use std::collections::HashSet;
use std::iter;
use tracing::{debug, info};

/// Default bound on the number of links a single walk may follow
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Options for stack assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Branch both walks terminate on (e.g. "main")
    pub primary_branch: String,
    /// Maximum links followed per walk before giving up with `CycleDetected`
    pub max_depth: usize,
}

impl AssembleOptions {
    /// Options for `primary_branch` with the default depth bound
    pub fn new(primary_branch: impl Into<String>) -> Self {
        Self {
            primary_branch: primary_branch.into(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Walk links from `start` in `direction` until the primary branch is reached.
///
/// Results are returned in stack order: for `Up` the PR based on the primary
/// branch comes first, for `Down` the PR nearest `start` comes first. `start`
/// itself is never included.
///
/// Each step depends on the previous one, so a walk is strictly sequential.
/// Revisiting any PR (including `start`) means the chain loops, as does
/// following more than `max_depth` links; both fail with `CycleDetected`.
pub async fn walk(
    platform: &dyn PlatformService,
    start: &PullRequest,
    direction: Direction,
    options: &AssembleOptions,
) -> Result<Vec<PullRequest>> {
    let mut visited = HashSet::from([start.number]);
    let mut found: Vec<PullRequest> = Vec::new();
    let mut branch = direction.next_branch(start).to_string();

    while branch != options.primary_branch {
        if found.len() >= options.max_depth {
            return Err(Error::CycleDetected {
                direction,
                depth: found.len(),
            });
        }

        let pr = resolve_link(platform, &branch, direction).await?;
        if !visited.insert(pr.number) {
            debug!(%direction, pr_number = pr.number, "walk revisited PR");
            return Err(Error::CycleDetected {
                direction,
                depth: found.len() + 1,
            });
        }

        branch = direction.next_branch(&pr).to_string();
        found.push(pr);
    }

    match direction {
        Direction::Up => found.reverse(),
        Direction::Down => {}
    }

    debug!(%direction, count = found.len(), "walk complete");
    Ok(found)
}

/// Assemble the full stack containing `trigger`.
///
/// The upward and downward walks run concurrently. Any resolver or walk error
/// aborts assembly; no partial stack is ever returned.
pub async fn assemble_stack(
    platform: &dyn PlatformService,
    trigger: &PullRequest,
    options: &AssembleOptions,
) -> Result<Stack> {
    info!(
        pr_number = trigger.number,
        primary_branch = %options.primary_branch,
        "assembling stack"
    );

    let (above, below) = tokio::try_join!(
        walk(platform, trigger, Direction::Up, options),
        walk(platform, trigger, Direction::Down, options),
    )?;

    let stack: Stack = above
        .into_iter()
        .chain(iter::once(trigger.clone()))
        .chain(below)
        .collect();
    let stack = dedupe_stack(stack);

    info!(
        len = stack.len(),
        prs = ?stack.iter().map(|pr| pr.number).collect::<Vec<_>>(),
        "assembled stack"
    );
    Ok(stack)
}

/// Drop repeated PR numbers, keeping the first occurrence and the original order
pub fn dedupe_stack(stack: Stack) -> Stack {
    let mut seen = HashSet::new();
    stack
        .into_iter()
        .filter(|pr| seen.insert(pr.number))
        .collect()
}
