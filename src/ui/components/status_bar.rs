//! StatusBar component - Bottom status bar with track count and submit button

use gpui::{AnyElement, Context, SharedString, Window, div, prelude::*};

use crate::ui::Theme;

/// Properties for the status bar
pub struct StatusBarProps {
    pub track_count: usize,
    /// Every record has all four metadata fields filled in
    pub is_complete: bool,
    /// A submission is running in the background
    pub is_submitting: bool,
    /// Stage text to show while submitting
    pub stage_text: &'static str,
}

/// Render the status bar
///
/// Displays the track count on the left and the submit button on the right.
/// The button is disabled until the form is complete; while a submission is
/// running it is replaced by the current stage text.
pub fn render_status_bar<V: 'static>(
    props: StatusBarProps,
    theme: &Theme,
    cx: &mut Context<V>,
    on_submit: impl Fn(&mut V, &mut Window, &mut Context<V>) + 'static,
) -> AnyElement {
    let StatusBarProps {
        track_count,
        is_complete,
        is_submitting,
        stage_text,
    } = props;

    let count_text = if track_count == 1 {
        "1 track".to_string()
    } else {
        format!("{} tracks", track_count)
    };

    let button_enabled = is_complete && !is_submitting;

    let left_panel = div()
        .flex()
        .flex_col()
        .gap_1()
        .child(div().text_color(theme.text_muted).child(count_text))
        .when(!is_complete, |el| {
            el.child(
                div()
                    .text_xs()
                    .text_color(theme.warning)
                    .child("You must provide all track info to submit this form."),
            )
        });

    let action_panel = if is_submitting {
        div()
            .px_4()
            .py_2()
            .text_color(theme.text_muted)
            .child(stage_text)
            .into_any_element()
    } else {
        div()
            .id(SharedString::from("submit-button"))
            .px_4()
            .py_2()
            .bg(if button_enabled {
                theme.success
            } else {
                theme.text_muted
            })
            .text_color(gpui::white())
            .rounded_md()
            .when(button_enabled, |el| {
                el.cursor_pointer().hover(|s| s.bg(theme.success_hover))
            })
            .on_click(cx.listener(move |view, _event, window, cx| {
                if button_enabled {
                    on_submit(view, window, cx);
                }
            }))
            .child("SUBMIT")
            .into_any_element()
    };

    div()
        .py_3()
        .px_6()
        .flex()
        .items_center()
        .justify_between()
        .bg(theme.bg)
        .border_t_1()
        .border_color(theme.border)
        .text_sm()
        .child(left_panel)
        .child(action_panel)
        .into_any_element()
}
