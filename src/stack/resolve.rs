//! Branch-link resolution

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{Direction, PullRequest};
use tracing::debug;

/// Find the one open PR linked to `branch` in `direction`.
///
/// - `Up` looks for the PR whose head is `branch` (its predecessor)
/// - `Down` looks for the PR whose base is `branch` (its successor)
///
/// The primary branch is not special-cased here; callers stop walking
/// before asking about it.
pub async fn resolve_link(
    platform: &dyn PlatformService,
    branch: &str,
    direction: Direction,
) -> Result<PullRequest> {
    let filter = direction.filter(branch);
    let mut prs = platform.list_open_prs(&filter).await?;

    match prs.len() {
        0 => Err(Error::LinkNotFound {
            direction,
            branch: branch.to_string(),
        }),
        1 => {
            let pr = prs.remove(0);
            debug!(branch, %direction, pr_number = pr.number, "resolved link");
            Ok(pr)
        }
        _ => Err(Error::AmbiguousLink {
            direction,
            branch: branch.to_string(),
            numbers: prs.iter().map(|pr| pr.number).collect(),
        }),
    }
}
