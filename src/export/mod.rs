//! Spreadsheet export
//!
//! Turns the track-record collection into the XLSX attachment sent with
//! each submission.

mod spreadsheet;

pub use spreadsheet::export_tracks;
