//! Submission workflow execution
//!
//! This module handles the execution of a submission in a background thread:
//! export the spreadsheet, then email it with the spreadsheet attached.
//! Progress and the terminal outcome are reported via [`SubmitState`].

use crate::core::{MailConfig, SubmitStage, SubmitState, TrackRecord};
use crate::export::export_tracks;
use crate::mail::SendGridClient;

/// Execute a full submission: export the spreadsheet, then email it
///
/// This is a blocking function that should be run in a background thread.
/// Failures are terminal for this attempt; the user resubmits after fixing
/// the reported problem.
pub fn execute_submission(state: SubmitState, config: MailConfig, records: Vec<TrackRecord>) {
    state.set_stage(SubmitStage::Exporting);

    let client = match SendGridClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Mail configuration error: {}", e);
            state.finish_failure(e, None);
            return;
        }
    };

    let file_path = match export_tracks(&records) {
        Ok(path) => path,
        Err(e) => {
            log::error!("Spreadsheet export failed: {}", e);
            state.finish_failure(format!("Failed to generate spreadsheet: {}", e), None);
            return;
        }
    };

    state.set_stage(SubmitStage::Sending);
    log::info!("Sending submission with {} track(s)", records.len());

    let body = format!(
        "{}\n\nSubmitted on {}.",
        config.body,
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );

    // The mail client is async; give this worker thread its own runtime.
    let result = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime.block_on(client.send_with_attachment(&config, &body, &file_path)),
        Err(e) => Err(format!("Failed to start mail runtime: {}", e)),
    };

    match result {
        Ok(status_code) => {
            log::info!("Submission complete (status {})", status_code);
            state.finish_success(
                format!("Submission complete (status {}).", status_code),
                status_code,
            );
        }
        Err(e) => {
            log::error!("Email send failed: {}", e);
            state.finish_failure(format!("Failed to send email: {}", e), None);
        }
    }

    // The spreadsheet is one-shot; discard it once the attempt is over.
    if let Err(e) = std::fs::remove_file(&file_path) {
        log::debug!("Could not remove {}: {}", file_path.display(), e);
    }
}

/// Spawn a submission on a background thread
///
/// Marks `state` as submitting before the thread starts so the UI reflects
/// the attempt immediately.
pub fn spawn_submission(state: SubmitState, config: MailConfig, records: Vec<TrackRecord>) {
    state.begin();
    std::thread::spawn(move || {
        execute_submission(state, config, records);
    });
}
