//! Core application logic and state
//!
//! This module contains:
//! - Track records and the track list store backing the form
//! - Submission progress state shared with the worker thread
//! - Mail configuration and credential lookup

mod config;
mod state;
mod store;
mod track;

pub use config::MailConfig;
pub use state::{SubmitOutcome, SubmitStage, SubmitState};
pub use store::TrackStore;
pub use track::{TrackField, TrackId, TrackRecord};
