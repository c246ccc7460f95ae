use super::*;
use crate::player::{PlayerStatus, StatusSink, TransportState};
use std::sync::{Arc, Mutex};

fn app() -> App {
    App::new(Arc::new(Mutex::new(PlayerStatus::default())))
}

#[test]
fn selection_wraps_in_both_directions() {
    let mut app = app();
    app.select_prev(3);
    assert_eq!(app.selected, 2);
    app.select_next(3);
    assert_eq!(app.selected, 0);
    app.select_next(3);
    assert_eq!(app.selected, 1);
}

#[test]
fn selection_on_empty_queue_stays_at_zero() {
    let mut app = app();
    app.select_next(0);
    assert_eq!(app.selected, 0);
    app.select_prev(0);
    assert_eq!(app.selected, 0);
    app.select_last(0);
    assert_eq!(app.selected, 0);
}

#[test]
fn selection_follows_moved_track_only_when_it_moved() {
    let mut app = app();
    app.selected = 3;
    app.follow_move(Some(2));
    assert_eq!(app.selected, 2);
    app.follow_move(None);
    assert_eq!(app.selected, 2);
    app.follow_move(Some(0));
    assert_eq!(app.selected, 0);
}

#[test]
fn clamp_selection_pulls_back_into_range() {
    let mut app = app();
    app.selected = 9;
    app.clamp_selection(4);
    assert_eq!(app.selected, 3);
}

#[test]
fn status_snapshot_reads_what_the_transport_published() {
    let mut handle = Arc::new(Mutex::new(PlayerStatus::default()));
    let app = App::new(handle.clone());

    handle.publish(&PlayerStatus {
        title: Some("Song".into()),
        state: TransportState::Playing,
        volume: 0.5,
        ..PlayerStatus::default()
    });

    let s = app.status_snapshot();
    assert_eq!(s.title.as_deref(), Some("Song"));
    assert!(s.is_playing());
    assert_eq!(s.volume, 0.5);
}

#[test]
fn errors_are_kept_until_cleared() {
    let mut app = app();
    app.set_error("cannot play \"x\"".into());
    assert!(app.last_error.is_some());
    app.clear_error();
    assert!(app.last_error.is_none());
}
