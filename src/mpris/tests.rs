use super::*;
use std::sync::mpsc;
use std::time::Duration;

fn iface() -> (PlayerIface, MprisHandle, mpsc::Receiver<PlayerCmd>) {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, rx) = mpsc::channel::<PlayerCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };
    (iface, MprisHandle { state }, rx)
}

#[test]
fn playback_status_maps_transport_state_to_mpris_strings() {
    let (iface, mut handle, _rx) = iface();

    for (state, expected) in [
        (TransportState::Idle, "Stopped"),
        (TransportState::Playing, "Playing"),
        (TransportState::Paused, "Paused"),
    ] {
        handle.publish(&PlayerStatus {
            state,
            ..PlayerStatus::default()
        });
        assert_eq!(iface.playback_status(), expected);
    }
}

#[test]
fn published_status_fills_metadata_and_volume() {
    let (iface, mut handle, _rx) = iface();

    handle.publish(&PlayerStatus {
        title: Some("Song1".into()),
        state: TransportState::Playing,
        length: Duration::from_micros(1_234_567),
        volume: 0.5,
    });

    let map = iface.metadata();
    assert!(map.contains_key("xesam:title"));
    assert!(map.contains_key("mpris:length"));
    assert_eq!(iface.volume(), 0.5);
    assert_eq!(
        handle.state.lock().unwrap().length_micros,
        Some(1_234_567)
    );
}

#[test]
fn unknown_length_is_left_out_of_metadata() {
    let (iface, mut handle, _rx) = iface();
    handle.publish(&PlayerStatus {
        title: Some("Song1".into()),
        ..PlayerStatus::default()
    });

    let map = iface.metadata();
    assert!(map.contains_key("xesam:title"));
    assert!(!map.contains_key("mpris:length"));
}

#[test]
fn method_calls_are_forwarded_as_player_commands() {
    let (iface, _handle, rx) = iface();

    iface.play_pause();
    iface.next();
    iface.stop();
    iface.previous();

    let cmds: Vec<PlayerCmd> = rx.try_iter().collect();
    assert_eq!(
        cmds,
        vec![PlayerCmd::PlayPause, PlayerCmd::Next, PlayerCmd::Stop]
    );
}
