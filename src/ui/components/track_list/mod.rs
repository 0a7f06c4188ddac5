//! TrackList component - The main application view with the track form
//!
//! This is the root view of the application, containing:
//! - Header
//! - Editable track rows
//! - Add Another Track button
//! - Status bar with the submit button

mod render;
mod submit;
#[cfg(test)]
mod tests;

use gpui::{Context, FocusHandle, KeyDownEvent, ScrollHandle};

use crate::core::{SubmitState, TrackField, TrackId, TrackStore};

/// Field order used when tab-cycling through a row
const FIELD_ORDER: [TrackField; 5] = [
    TrackField::Title,
    TrackField::Bpm,
    TrackField::Key,
    TrackField::Meter,
    TrackField::Instrumentation,
];

/// The main track form view
///
/// Handles:
/// - Displaying and editing the list of tracks
/// - Keyboard input routed to the focused field
/// - Submitting the form in the background
pub struct TrackList {
    /// The collection of track records being edited
    pub(crate) store: TrackStore,
    /// Which field currently receives keyboard input
    pub(crate) focused_field: Option<(TrackId, TrackField)>,
    /// Shared state for the background submission workflow
    pub(crate) submit_state: SubmitState,
    /// Whether we've subscribed to appearance changes
    pub(crate) appearance_subscription_set: bool,
    /// Handle for scroll state
    pub(crate) scroll_handle: ScrollHandle,
    /// Focus handle for receiving keyboard events (None in tests)
    pub(crate) focus_handle: Option<FocusHandle>,
    /// Whether we need to grab initial focus (for menu items to work)
    pub(crate) needs_initial_focus: bool,
    /// Whether the submission polling loop is running
    pub(crate) polling_started: bool,
    /// Pending error dialog (title, message), shown from the render loop
    pub(crate) pending_error_message: Option<(String, String)>,
    /// Pending info dialog (title, message), shown from the render loop
    pub(crate) pending_info_message: Option<(String, String)>,
}

impl TrackList {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            store: TrackStore::new(),
            focused_field: None,
            submit_state: SubmitState::new(),
            appearance_subscription_set: false,
            scroll_handle: ScrollHandle::new(),
            focus_handle: Some(cx.focus_handle()),
            needs_initial_focus: true,
            polling_started: false,
            pending_error_message: None,
            pending_info_message: None,
        }
    }

    /// Create a new TrackList for testing (without GPUI context)
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self {
            store: TrackStore::new(),
            focused_field: None,
            submit_state: SubmitState::new(),
            appearance_subscription_set: false,
            scroll_handle: ScrollHandle::new(),
            focus_handle: None,
            needs_initial_focus: false,
            polling_started: false,
            pending_error_message: None,
            pending_info_message: None,
        }
    }

    /// Append a new track and move focus to its title field
    pub(crate) fn add_track(&mut self) {
        let id = self.store.add_track();
        self.focused_field = Some((id, TrackField::Title));
    }

    /// Remove a track, clearing focus if it pointed at the removed row
    pub(crate) fn delete_track(&mut self, id: &TrackId) {
        if let Some((focused_id, _)) = &self.focused_field
            && focused_id == id
        {
            self.focused_field = None;
        }
        self.store.delete_track(id);
    }

    pub(crate) fn focus_field(&mut self, id: TrackId, field: TrackField) {
        self.focused_field = Some((id, field));
    }

    pub(crate) fn clear_focus(&mut self) {
        self.focused_field = None;
    }

    /// Move focus to the next field, wrapping across rows
    pub(crate) fn focus_next_field(&mut self) {
        let Some((id, field)) = self.focused_field.clone() else {
            return;
        };
        let records = self.store.records();
        let row = records.iter().position(|r| r.id == id);
        let Some(row) = row else {
            self.focused_field = None;
            return;
        };
        let col = FIELD_ORDER.iter().position(|f| *f == field).unwrap_or(0);

        let (next_row, next_col) = if col + 1 < FIELD_ORDER.len() {
            (row, col + 1)
        } else {
            ((row + 1) % records.len(), 0)
        };
        let next_id = records[next_row].id.clone();
        self.focused_field = Some((next_id, FIELD_ORDER[next_col]));
    }

    /// Append a typed character to the focused field
    pub(crate) fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let Some((id, field)) = self.focused_field.clone() else {
            return;
        };
        if let Some(record) = self.store.get(&id) {
            let mut value = record.field(field).to_string();
            value.push(c);
            self.store.update_field(&id, field, value);
        }
    }

    /// Remove the last character from the focused field
    pub(crate) fn backspace(&mut self) {
        let Some((id, field)) = self.focused_field.clone() else {
            return;
        };
        if let Some(record) = self.store.get(&id) {
            let mut value = record.field(field).to_string();
            value.pop();
            self.store.update_field(&id, field, value);
        }
    }

    /// Handle a key press - returns true if the event was handled
    pub(crate) fn handle_key(&mut self, event: &KeyDownEvent) -> bool {
        let keystroke = &event.keystroke;

        if self.focused_field.is_none() {
            return false;
        }

        if keystroke.key == "backspace" {
            self.backspace();
            return true;
        }

        if keystroke.key == "escape" {
            self.clear_focus();
            return true;
        }

        if keystroke.key == "tab" || keystroke.key == "enter" {
            self.focus_next_field();
            return true;
        }

        if let Some(ref key_char) = keystroke.key_char {
            for c in key_char.chars() {
                self.push_char(c);
            }
            return true;
        }

        false
    }

    /// Discard all entered data and start over with a single blank track
    pub(crate) fn new_form(&mut self) {
        self.store.reset();
        self.focused_field = None;
    }
}
