//! Submission state types
//!
//! Thread-safe progress state shared between the UI and the submission
//! worker thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Current stage of the submission process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStage {
    /// Writing the spreadsheet to a temp file
    Exporting,
    /// Sending the email with the spreadsheet attached
    Sending,
    /// Submission finished successfully
    Complete,
    /// Submission failed (configuration, export, or transport)
    Failed,
}

impl SubmitStage {
    pub fn display_text(&self) -> &'static str {
        match self {
            SubmitStage::Exporting => "Exporting...",
            SubmitStage::Sending => "Sending...",
            SubmitStage::Complete => "Complete!",
            SubmitStage::Failed => "Failed",
        }
    }
}

/// Terminal result of a submission attempt
///
/// Failures are terminal for the attempt; there are no retries. The user
/// fixes the problem and resubmits.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub success: bool,
    /// Human-readable message shown in the result dialog
    pub message: String,
    /// HTTP status code reported by the mail transport, when one was received
    pub status_code: Option<u16>,
}

/// Shared state for tracking submission progress across threads
#[derive(Clone)]
pub struct SubmitState {
    /// Whether a submission is currently running
    is_submitting: Arc<AtomicBool>,
    /// Current stage of the submission
    stage: Arc<Mutex<SubmitStage>>,
    /// Terminal outcome, set once when the attempt finishes
    outcome: Arc<Mutex<Option<SubmitOutcome>>>,
}

impl SubmitState {
    pub fn new() -> Self {
        Self {
            is_submitting: Arc::new(AtomicBool::new(false)),
            stage: Arc::new(Mutex::new(SubmitStage::Exporting)),
            outcome: Arc::new(Mutex::new(None)),
        }
    }

    /// Mark a new submission attempt as started
    pub fn begin(&self) {
        self.is_submitting.store(true, Ordering::SeqCst);
        *self.stage.lock().unwrap() = SubmitStage::Exporting;
        *self.outcome.lock().unwrap() = None;
    }

    pub fn set_stage(&self, stage: SubmitStage) {
        *self.stage.lock().unwrap() = stage;
    }

    pub fn get_stage(&self) -> SubmitStage {
        *self.stage.lock().unwrap()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting.load(Ordering::SeqCst)
    }

    /// Record a successful submission and stop
    pub fn finish_success(&self, message: String, status_code: u16) {
        *self.stage.lock().unwrap() = SubmitStage::Complete;
        *self.outcome.lock().unwrap() = Some(SubmitOutcome {
            success: true,
            message,
            status_code: Some(status_code),
        });
        self.is_submitting.store(false, Ordering::SeqCst);
    }

    /// Record a failed submission and stop
    pub fn finish_failure(&self, message: String, status_code: Option<u16>) {
        *self.stage.lock().unwrap() = SubmitStage::Failed;
        *self.outcome.lock().unwrap() = Some(SubmitOutcome {
            success: false,
            message,
            status_code,
        });
        self.is_submitting.store(false, Ordering::SeqCst);
    }

    /// Take the terminal outcome, if the attempt has finished
    pub fn take_outcome(&self) -> Option<SubmitOutcome> {
        self.outcome.lock().unwrap().take()
    }
}

impl Default for SubmitState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_stage_display_text() {
        assert_eq!(SubmitStage::Exporting.display_text(), "Exporting...");
        assert_eq!(SubmitStage::Sending.display_text(), "Sending...");
        assert_eq!(SubmitStage::Complete.display_text(), "Complete!");
        assert_eq!(SubmitStage::Failed.display_text(), "Failed");
    }

    #[test]
    fn test_submit_state_new() {
        let state = SubmitState::new();
        assert!(!state.is_submitting());
        assert_eq!(state.get_stage(), SubmitStage::Exporting);
        assert!(state.take_outcome().is_none());
    }

    #[test]
    fn test_begin_resets_state() {
        let state = SubmitState::new();
        state.finish_failure("boom".to_string(), None);

        state.begin();

        assert!(state.is_submitting());
        assert_eq!(state.get_stage(), SubmitStage::Exporting);
        assert!(state.take_outcome().is_none());
    }

    #[test]
    fn test_finish_success() {
        let state = SubmitState::new();
        state.begin();
        state.set_stage(SubmitStage::Sending);

        state.finish_success("Submission complete".to_string(), 202);

        assert!(!state.is_submitting());
        assert_eq!(state.get_stage(), SubmitStage::Complete);
        let outcome = state.take_outcome().unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.status_code, Some(202));
        assert_eq!(outcome.message, "Submission complete");
    }

    #[test]
    fn test_finish_failure() {
        let state = SubmitState::new();
        state.begin();

        state.finish_failure("SendGrid returned 401".to_string(), Some(401));

        assert!(!state.is_submitting());
        assert_eq!(state.get_stage(), SubmitStage::Failed);
        let outcome = state.take_outcome().unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.status_code, Some(401));
    }

    #[test]
    fn test_take_outcome_consumes() {
        let state = SubmitState::new();
        state.finish_success("ok".to_string(), 202);

        assert!(state.take_outcome().is_some());
        assert!(state.take_outcome().is_none());
    }

    #[test]
    fn test_clone_shares_state() {
        let state1 = SubmitState::new();
        state1.begin();
        state1.set_stage(SubmitStage::Sending);

        let state2 = state1.clone();
        assert!(state2.is_submitting());
        assert_eq!(state2.get_stage(), SubmitStage::Sending);

        // Changes through one handle are visible through the other (Arc)
        state1.finish_success("ok".to_string(), 202);
        assert!(!state2.is_submitting());
        assert_eq!(state2.get_stage(), SubmitStage::Complete);
    }
}
