//! Submission workflow
//!
//! Runs the export-then-send pipeline on a background thread.

mod workflow;

pub use workflow::{execute_submission, spawn_submission};
