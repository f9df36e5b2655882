//! The single command: resolve the stack for the triggering PR and annotate it

use crate::cli::Cli;
use crate::cli::style;
use pr_stack::event::EventPayload;
use pr_stack::platform::GitHubService;
use pr_stack::run::{RunOutcome, run_stack_overview};
use tracing::debug;

/// Run the action
pub async fn run(args: Cli) -> anyhow::Result<()> {
    let event = EventPayload::from_path(&args.event_path)?;

    // Checked before the token so non-PR triggers never need credentials
    let Some(trigger) = event.trigger() else {
        style::print_outcome(&RunOutcome::NoPullRequestContext);
        return Ok(());
    };

    let config = args.to_config()?;
    debug!(?config, "loaded configuration");

    let repo = event.repo_config(config.api_url.clone())?;
    let platform = GitHubService::new(&config.github_token, repo)?;

    let outcome = run_stack_overview(&platform, &trigger, &config.run_options()).await?;
    style::print_outcome(&outcome);
    Ok(())
}
