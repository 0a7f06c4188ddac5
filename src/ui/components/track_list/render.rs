//! Rendering implementation for TrackList
//!
//! Contains the Render trait implementation and rendering helper methods.

use gpui::{
    AnyElement, Context, IntoElement, KeyDownEvent, PromptLevel, Render, SharedString, Window, div,
    prelude::*,
};

use crate::actions::NewForm;
use crate::ui::Theme;
use crate::ui::components::header::Header;
use crate::ui::components::status_bar::{StatusBarProps, render_status_bar};
use crate::ui::components::track_row::{TrackRowProps, render_track_row};

use super::TrackList;

impl TrackList {
    /// Render the editable track rows
    fn render_track_rows(&mut self, theme: &Theme, cx: &mut Context<Self>) -> AnyElement {
        let mut list = div().w_full().flex().flex_col().gap_3();

        let records: Vec<_> = self.store.records().to_vec();
        for (index, record) in records.into_iter().enumerate() {
            let focused_field = self
                .focused_field
                .as_ref()
                .filter(|(id, _)| *id == record.id)
                .map(|(_, field)| *field);

            let delete_id = record.id.clone();
            let focus_id = record.id.clone();

            let props = TrackRowProps {
                index,
                record,
                focused_field,
                theme: *theme,
            };

            let item = render_track_row(
                props,
                cx,
                move |view: &mut Self| {
                    view.delete_track(&delete_id);
                },
                move |view: &mut Self, field| {
                    view.focus_field(focus_id.clone(), field);
                },
            );

            list = list.child(item);
        }

        list.into_any_element()
    }

    /// Render the Add Another Track button below the rows
    fn render_add_button(&self, theme: &Theme, cx: &mut Context<Self>) -> AnyElement {
        div()
            .id(SharedString::from("add-track-button"))
            .w_full()
            .py_2()
            .flex()
            .items_center()
            .justify_center()
            .bg(theme.bg_card)
            .border_1()
            .border_color(theme.border)
            .rounded_md()
            .text_sm()
            .text_color(theme.text)
            .cursor_pointer()
            .hover(|s| s.bg(theme.bg_card_hover))
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.add_track();
                cx.notify();
            }))
            .child("ADD ANOTHER TRACK")
            .into_any_element()
    }

    /// Show any pending error dialog
    ///
    /// Called from the render loop to display failures like a missing API
    /// key or a rejected submission.
    fn show_pending_error_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some((title, message)) = self.pending_error_message.take() {
            let _future = window.prompt(PromptLevel::Warning, &title, Some(&message), &["OK"], cx);
            // We don't need to wait for the response - just showing the dialog
        }
    }

    fn show_pending_info_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some((title, message)) = self.pending_info_message.take() {
            let _future = window.prompt(PromptLevel::Info, &title, Some(&message), &["OK"], cx);
        }
    }
}

impl Render for TrackList {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Subscribe to appearance changes (once)
        if !self.appearance_subscription_set {
            self.appearance_subscription_set = true;
            cx.observe_window_appearance(window, |_this, _window, cx| {
                cx.notify();
            })
            .detach();
        }

        // Grab initial focus so menu items and typing work immediately
        if self.needs_initial_focus {
            self.needs_initial_focus = false;
            if let Some(ref focus_handle) = self.focus_handle {
                focus_handle.focus(window);
            }
        }

        // Show any pending dialogs
        self.show_pending_error_dialog(window, cx);
        self.show_pending_info_dialog(window, cx);

        // Get theme based on OS appearance
        let theme = Theme::from_appearance(window.appearance());

        // Capture all listeners first (before borrowing for the status bar)
        let on_key_down = cx.listener(|this, event: &KeyDownEvent, _window, cx| {
            if this.handle_key(event) {
                cx.notify();
            }
        });

        let on_new_form = cx.listener(|this, _: &NewForm, _window, cx| {
            this.new_form();
            cx.notify();
        });

        let rows = self.render_track_rows(&theme, cx);
        let add_button = self.render_add_button(&theme, cx);

        let status_bar = render_status_bar(
            StatusBarProps {
                track_count: self.store.len(),
                is_complete: self.store.is_complete(),
                is_submitting: self.submit_state.is_submitting(),
                stage_text: self.submit_state.get_stage().display_text(),
            },
            &theme,
            cx,
            |view: &mut Self, _window, cx| {
                view.start_submission(cx);
            },
        );

        // Build the base container
        let mut container = div()
            .key_context("TrackList")
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.bg);

        // Track focus if we have a focus handle (not in tests)
        if let Some(ref focus_handle) = self.focus_handle {
            container = container.track_focus(focus_handle);
        }

        container
            .on_key_down(on_key_down)
            .on_action(on_new_form)
            .child(Header::render("Track Info"))
            // Main content area - track rows (scrollable)
            .child(
                div()
                    .id("track-list-scroll")
                    .flex_1()
                    .w_full()
                    .overflow_scroll()
                    .track_scroll(&self.scroll_handle)
                    .px_6()
                    .py_3()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(rows)
                    .child(add_button),
            )
            // Status bar at bottom
            .child(status_bar)
    }
}
