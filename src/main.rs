//! pr-stack CLI entry point

mod cli;

use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    cli::logging::init();

    let args = cli::Cli::parse();
    match cli::run::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::style::annotate_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
