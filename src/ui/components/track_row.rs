//! TrackRow component - A single editable track entry in the form

use gpui::{AnyElement, Context, SharedString, div, prelude::*, px};

use crate::core::{TrackField, TrackRecord};
use crate::ui::Theme;

/// Properties for rendering a TrackRow
pub struct TrackRowProps {
    pub index: usize,
    pub record: TrackRecord,
    /// Which field in this row currently has keyboard focus, if any
    pub focused_field: Option<TrackField>,
    pub theme: Theme,
}

/// Render one editable field within a track row
fn render_field<V: 'static>(
    record: &TrackRecord,
    field: TrackField,
    is_focused: bool,
    theme: &Theme,
    cx: &mut Context<V>,
    on_focus_field: impl Fn(&mut V, TrackField) + 'static,
) -> AnyElement {
    let value = record.field(field).to_string();
    let is_empty = value.is_empty();
    let display = if is_empty {
        field.placeholder().to_string()
    } else {
        value
    };

    div()
        .id(SharedString::from(format!(
            "field-{}-{:?}",
            record.id, field
        )))
        .flex_1()
        .h(px(32.))
        .px_3()
        .flex()
        .items_center()
        .bg(theme.bg)
        .border_1()
        .border_color(if is_focused {
            theme.accent
        } else {
            theme.border
        })
        .rounded_md()
        .cursor_text()
        .on_click(cx.listener(move |view, _event, _window, cx| {
            on_focus_field(view, field);
            cx.notify();
        }))
        .child(
            div()
                .text_sm()
                .text_color(if is_empty { theme.text_muted } else { theme.text })
                .when(is_empty, |el| el.italic())
                .overflow_hidden()
                .text_ellipsis()
                .child(display),
        )
        // Cursor
        .when(is_focused, |el| {
            el.child(div().w(px(2.)).h(px(18.)).bg(theme.accent).ml_px())
        })
        .into_any_element()
}

/// Renders a single track row in the form
///
/// This is a stateless render function rather than a component because
/// the row's state (record, focus) is owned by the parent TrackList.
pub fn render_track_row<V: 'static>(
    props: TrackRowProps,
    cx: &mut Context<V>,
    on_delete: impl Fn(&mut V) + 'static,
    on_focus_field: impl Fn(&mut V, TrackField) + 'static + Clone,
) -> AnyElement {
    let TrackRowProps {
        index,
        record,
        focused_field,
        theme,
    } = props;

    let missing = record.missing_fields();
    let status_line = if missing.is_empty() {
        div()
            .text_xs()
            .text_color(theme.success)
            .child("✓ All info provided")
    } else {
        div()
            .text_xs()
            .text_color(theme.warning)
            .child(format!("Missing: {}", missing.join(", ")))
    };

    let title_focused = focused_field == Some(TrackField::Title);
    let on_focus_title = on_focus_field.clone();

    div()
        .id(SharedString::from(format!("track-{}", record.id)))
        .w_full()
        .flex_shrink_0()
        .flex()
        .flex_col()
        .gap_2()
        .p_3()
        .bg(theme.bg_card)
        .border_1()
        .border_color(theme.border)
        .rounded_md()
        // Header row: track number, title input, delete button
        .child(
            div()
                .flex()
                .items_center()
                .gap_3()
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.text_muted)
                        .child(format!("{}", index + 1)),
                )
                .child(render_field(
                    &record,
                    TrackField::Title,
                    title_focused,
                    &theme,
                    cx,
                    on_focus_title,
                ))
                .child(
                    div()
                        .id(SharedString::from(format!("delete-{}", record.id)))
                        .px_2()
                        .py_1()
                        .text_color(theme.text_muted)
                        .cursor_pointer()
                        .hover(|s| s.text_color(theme.danger))
                        .on_click(cx.listener(move |view, _event, _window, cx| {
                            on_delete(view);
                            cx.notify();
                        }))
                        .child("✕"),
                ),
        )
        // Metadata fields
        .child(
            div()
                .flex()
                .gap_2()
                .children(TrackField::REQUIRED.into_iter().map(|field| {
                    let is_focused = focused_field == Some(field);
                    render_field(
                        &record,
                        field,
                        is_focused,
                        &theme,
                        cx,
                        on_focus_field.clone(),
                    )
                })),
        )
        .child(status_line)
        .into_any_element()
}
