//! Submission handling for TrackList
//!
//! Kicks off the background submission workflow and polls its shared state
//! until the outcome arrives.

use std::time::Duration;

use gpui::{AsyncApp, Context, Timer, WeakEntity};

use crate::core::MailConfig;
use crate::submit::spawn_submission;

use super::TrackList;

impl TrackList {
    /// Start submitting the form in the background
    ///
    /// Does nothing unless every track is complete and no submission is
    /// already running. A missing API key is reported immediately without
    /// starting the worker.
    pub(crate) fn start_submission(&mut self, cx: &mut Context<Self>) {
        if self.submit_state.is_submitting() || !self.store.is_complete() {
            return;
        }

        let config = MailConfig::load();
        if !config.has_api_key() {
            log::error!("Submission blocked: no SendGrid API key configured");
            self.pending_error_message = Some((
                "Submission Failed".to_string(),
                "SendGrid API key not found. Please check your mail configuration.".to_string(),
            ));
            cx.notify();
            return;
        }

        let records = self.store.records().to_vec();
        log::info!("Submitting {} track(s)", records.len());
        spawn_submission(self.submit_state.clone(), config, records);

        if !self.polling_started {
            self.polling_started = true;
            Self::start_submit_polling(cx);
        }
        cx.notify();
    }

    /// Check for a finished submission - returns true if an outcome arrived
    pub(crate) fn poll_submission(&mut self) -> bool {
        let Some(outcome) = self.submit_state.take_outcome() else {
            return false;
        };
        if outcome.success {
            self.pending_info_message = Some(("Submission Complete".to_string(), outcome.message));
        } else {
            self.pending_error_message = Some(("Submission Failed".to_string(), outcome.message));
        }
        true
    }

    /// Start a polling loop that watches the submission worker
    ///
    /// Polls the shared submit state so the stage text updates while the
    /// worker runs, and stops once the outcome has been delivered.
    pub(crate) fn start_submit_polling(cx: &mut Context<Self>) {
        cx.spawn(|this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut async_cx = cx.clone();
            async move {
                loop {
                    let cx_for_after_await = async_cx.clone();

                    // Stage changes don't need to be more responsive than this
                    Timer::after(Duration::from_millis(100)).await;

                    let should_continue = this
                        .update(&mut async_cx, |this, cx| {
                            let finished = this.poll_submission();
                            if finished {
                                this.polling_started = false;
                            }
                            // Refresh so the stage text and dialogs stay current
                            cx.notify();
                            !finished
                        })
                        .unwrap_or(false);

                    if !should_continue {
                        break;
                    }

                    let _ = cx_for_after_await.refresh();
                    async_cx = cx_for_after_await;
                }
            }
        })
        .detach();
    }
}
