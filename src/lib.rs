//! pr-stack: stack overviews for chains of dependent pull requests
//!
//! Given the pull request that triggered a workflow run, `pr-stack` walks the
//! chain of open pull requests in both directions until it reaches the primary
//! branch, then appends a numbered overview of the whole chain to every pull
//! request description in it.

pub mod config;
pub mod error;
pub mod event;
pub mod overview;
pub mod platform;
pub mod run;
pub mod stack;
pub mod types;
pub mod update;

pub use error::{Error, Result};
