use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::audio::AudioDevice;
use crate::config;
use crate::player::{PlayerCmd, Transport};
use crate::runtime::keymap::{self, Action, KeyContext};
use crate::runtime::notify::Notifier;
use crate::ui;

/// Main terminal event loop. Commands from MPRIS and the audio device arrive
/// on `inbox`; key presses are read here. Returns `Ok(())` when shutdown is
/// requested.
pub fn run<D: AudioDevice>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    transport: &mut Transport<D, Notifier>,
    inbox: &mpsc::Receiver<PlayerCmd>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.ui.tick_rate_ms);

    loop {
        while let Ok(cmd) = inbox.try_recv() {
            if dispatch(cmd, app, transport) {
                return Ok(());
            }
        }

        app.set_position(transport.position());
        app.clamp_selection(transport.queue().len());

        terminal.draw(|f| {
            ui::draw(
                f,
                app,
                transport.queue(),
                &settings.ui,
                &settings.controls,
            )
        })?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, transport) {
                    return Ok(());
                }
            }
        }
    }
}

fn handle_key_event<D: AudioDevice>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    transport: &mut Transport<D, Notifier>,
) -> bool {
    let ctx = KeyContext {
        selected: app.selected,
        position: transport.position(),
        length: transport.length(),
        volume: transport.volume(),
        seek_seconds: settings.controls.seek_seconds,
        volume_step: settings.audio.volume_step,
    };
    let Some(action) = keymap::map_key(key, &ctx) else {
        return false;
    };

    let len = transport.queue().len();
    match action {
        Action::Quit => return dispatch(PlayerCmd::Quit, app, transport),
        Action::SelectNext => app.select_next(len),
        Action::SelectPrev => app.select_prev(len),
        Action::SelectFirst => app.select_first(),
        Action::SelectLast => app.select_last(len),
        Action::Player(cmd) => return dispatch(cmd, app, transport),
    }
    false
}

/// Apply one command to the transport. Returns true when the player should
/// shut down.
fn dispatch<D: AudioDevice>(
    cmd: PlayerCmd,
    app: &mut App,
    transport: &mut Transport<D, Notifier>,
) -> bool {
    debug!(?cmd, state = ?transport.state(), "dispatch");
    match cmd {
        PlayerCmd::Quit => {
            transport.stop();
            info!("quit requested");
            return true;
        }
        // Reorders go through the transport directly so the selection can
        // follow the moved track.
        PlayerCmd::MoveUp(i) => app.follow_move(transport.move_up(i)),
        PlayerCmd::MoveDown(i) => app.follow_move(transport.move_down(i)),
        PlayerCmd::MoveToFront(i) => app.follow_move(transport.move_to_front(i)),
        other => {
            let starts_playback = matches!(
                other,
                PlayerCmd::Play | PlayerCmd::PlayPause | PlayerCmd::Next | PlayerCmd::Completed(_)
            );
            match transport.handle(other) {
                Ok(()) if starts_playback => app.clear_error(),
                Ok(()) => {}
                Err(e) => {
                    warn!(error = %e, "transport command failed");
                    app.set_error(e.to_string());
                }
            }
        }
    }
    false
}
