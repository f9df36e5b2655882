//! Output for humans and for the workflow runner
//!
//! Annotations use GitHub's workflow command syntax (`::warning::...`) so
//! they surface on the run summary; everything else is plain styled text.

use anstream::println;
use owo_colors::OwoColorize;
use pr_stack::run::RunOutcome;
use pr_stack::types::PullRequest;
use pr_stack::update::UpdateReport;

/// Escape a message for use as workflow command data
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Emit a warning annotation
pub fn annotate_warning(message: &str) {
    println!("::warning::{}", escape_data(message));
}

/// Emit an error annotation
pub fn annotate_error(message: &str) {
    println!("::error::{}", escape_data(message));
}

fn stack_line(stack: &[PullRequest]) -> String {
    stack
        .iter()
        .map(|pr| format!("#{}", pr.number))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn print_report(report: &UpdateReport) {
    for failure in &report.failed {
        annotate_warning(&format!("{} ({})", failure.error, failure.html_url));
    }

    if report.is_success() {
        println!(
            "{} Updated {} PR description(s)",
            "✓".green(),
            report.updated.len()
        );
    } else {
        println!(
            "{} Updated {} of {} PR description(s)",
            "!".yellow(),
            report.updated.len(),
            report.updated.len() + report.failed.len()
        );
    }
}

/// Print the result of a run
pub fn print_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::NoPullRequestContext => {
            annotate_warning(
                "This action is only meant to be run on pull requests. No PR found in the payload.",
            );
        }
        RunOutcome::DryRun { stack, bodies } => {
            println!("{} {}", "Stack:".bold(), stack_line(stack));
            for (number, body) in bodies {
                println!();
                println!("{}", format!("--- PR #{number} (dry run) ---").dimmed());
                println!("{body}");
            }
        }
        RunOutcome::Updated { stack, report } => {
            println!("{} {}", "Stack:".bold(), stack_line(stack));
            print_report(report);
        }
    }
}
