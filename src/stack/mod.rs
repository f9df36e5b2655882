//! Stack discovery
//!
//! Two layers:
//! 1. Resolve - find the single open PR linked to a branch in one direction
//! 2. Assemble - walk links outward from the triggering PR until both walks
//!    reach the primary branch, then stitch the results into one ordered stack

mod assemble;
mod resolve;

pub use assemble::{AssembleOptions, DEFAULT_MAX_DEPTH, assemble_stack, dedupe_stack, walk};
pub use resolve::resolve_link;
