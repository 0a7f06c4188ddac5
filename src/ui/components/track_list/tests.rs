//! Tests for TrackList component

use super::*;

fn first_id(list: &TrackList) -> TrackId {
    list.store.records()[0].id.clone()
}

#[test]
fn test_track_list_new() {
    let list = TrackList::new_for_test();
    assert_eq!(list.store.len(), 1);
    assert!(list.focused_field.is_none());
    assert!(!list.submit_state.is_submitting());
}

#[test]
fn test_add_track_focuses_new_title() {
    let mut list = TrackList::new_for_test();

    list.add_track();

    assert_eq!(list.store.len(), 2);
    let new_id = list.store.records()[1].id.clone();
    assert_eq!(list.focused_field, Some((new_id, TrackField::Title)));
}

#[test]
fn test_delete_track_clears_focus_on_that_row() {
    let mut list = TrackList::new_for_test();
    list.add_track();
    let second_id = list.store.records()[1].id.clone();
    list.focus_field(second_id.clone(), TrackField::Bpm);

    list.delete_track(&second_id);

    assert_eq!(list.store.len(), 1);
    assert!(list.focused_field.is_none());
}

#[test]
fn test_delete_track_keeps_focus_on_other_row() {
    let mut list = TrackList::new_for_test();
    let keep_id = first_id(&list);
    list.add_track();
    let second_id = list.store.records()[1].id.clone();
    list.focus_field(keep_id.clone(), TrackField::Key);

    list.delete_track(&second_id);

    assert_eq!(list.focused_field, Some((keep_id, TrackField::Key)));
}

#[test]
fn test_push_char_appends_to_focused_field() {
    let mut list = TrackList::new_for_test();
    let id = first_id(&list);
    list.focus_field(id.clone(), TrackField::Bpm);

    list.push_char('1');
    list.push_char('2');
    list.push_char('0');

    assert_eq!(list.store.get(&id).unwrap().bpm, "120");
}

#[test]
fn test_push_char_without_focus_is_noop() {
    let mut list = TrackList::new_for_test();
    let id = first_id(&list);

    list.push_char('x');

    assert_eq!(list.store.get(&id).unwrap().bpm, "");
}

#[test]
fn test_push_char_ignores_control_chars() {
    let mut list = TrackList::new_for_test();
    let id = first_id(&list);
    list.focus_field(id.clone(), TrackField::Key);

    list.push_char('\u{8}');
    list.push_char('C');

    assert_eq!(list.store.get(&id).unwrap().key, "C");
}

#[test]
fn test_backspace_removes_last_char() {
    let mut list = TrackList::new_for_test();
    let id = first_id(&list);
    list.focus_field(id.clone(), TrackField::Meter);
    list.push_char('4');
    list.push_char('/');
    list.push_char('4');

    list.backspace();

    assert_eq!(list.store.get(&id).unwrap().meter, "4/");
}

#[test]
fn test_backspace_on_empty_field_is_noop() {
    let mut list = TrackList::new_for_test();
    let id = first_id(&list);
    list.focus_field(id.clone(), TrackField::Bpm);

    list.backspace();

    assert_eq!(list.store.get(&id).unwrap().bpm, "");
}

#[test]
fn test_focus_next_field_advances_within_row() {
    let mut list = TrackList::new_for_test();
    let id = first_id(&list);
    list.focus_field(id.clone(), TrackField::Title);

    list.focus_next_field();
    assert_eq!(list.focused_field, Some((id.clone(), TrackField::Bpm)));

    list.focus_next_field();
    assert_eq!(list.focused_field, Some((id, TrackField::Key)));
}

#[test]
fn test_focus_next_field_wraps_to_next_row() {
    let mut list = TrackList::new_for_test();
    let first = first_id(&list);
    list.add_track();
    let second = list.store.records()[1].id.clone();
    list.focus_field(first, TrackField::Instrumentation);

    list.focus_next_field();

    assert_eq!(list.focused_field, Some((second, TrackField::Title)));
}

#[test]
fn test_focus_next_field_wraps_around_form() {
    let mut list = TrackList::new_for_test();
    let id = first_id(&list);
    list.focus_field(id.clone(), TrackField::Instrumentation);

    list.focus_next_field();

    assert_eq!(list.focused_field, Some((id, TrackField::Title)));
}

#[test]
fn test_new_form_resets_store_and_focus() {
    let mut list = TrackList::new_for_test();
    let id = first_id(&list);
    list.focus_field(id, TrackField::Bpm);
    list.push_char('9');
    list.add_track();

    list.new_form();

    assert_eq!(list.store.len(), 1);
    assert!(list.focused_field.is_none());
    assert_eq!(list.store.records()[0].bpm, "");
}

#[test]
fn test_poll_submission_no_outcome() {
    let mut list = TrackList::new_for_test();

    assert!(!list.poll_submission());
    assert!(list.pending_info_message.is_none());
    assert!(list.pending_error_message.is_none());
}

#[test]
fn test_poll_submission_success_queues_info_dialog() {
    let mut list = TrackList::new_for_test();
    list.submit_state
        .finish_success("Submission complete (status 202).".to_string(), 202);

    assert!(list.poll_submission());

    let (title, message) = list.pending_info_message.take().unwrap();
    assert_eq!(title, "Submission Complete");
    assert!(message.contains("202"));
    assert!(list.pending_error_message.is_none());
}

#[test]
fn test_poll_submission_failure_queues_error_dialog() {
    let mut list = TrackList::new_for_test();
    list.submit_state
        .finish_failure("SendGrid returned 401".to_string(), Some(401));

    assert!(list.poll_submission());

    let (title, message) = list.pending_error_message.take().unwrap();
    assert_eq!(title, "Submission Failed");
    assert!(message.contains("401"));
    assert!(list.pending_info_message.is_none());
}
