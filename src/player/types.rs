//! Small types shared by the queue, the transport and their collaborators.
//!
//! This module defines the transport state, the command messages handled on
//! the control thread, the status snapshot published to the UI and the
//! notifier an audio device uses to report natural completion.

use std::fmt;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// The state of the transport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransportState {
    /// No playback session exists.
    #[default]
    Idle,
    Playing,
    Paused,
}

/// Identifies one playback session for the lifetime of a transport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Messages processed by the control thread.
///
/// Key presses, MPRIS calls and device completions all arrive as a
/// `PlayerCmd` so that queue and transport state are only touched in one
/// place.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCmd {
    /// Start the queue front, or resume a paused session.
    Play,
    /// Suspend the live session.
    Pause,
    /// Pause when playing, play otherwise.
    PlayPause,
    /// Release the live session.
    Stop,
    /// Skip to the queue front without waiting for completion.
    Next,
    /// Jump to an absolute position in the live session.
    SeekTo(Duration),
    /// Set the volume (clamped into `0.0..=1.0`).
    SetVolume(f32),
    /// Swap the queue entry at the index with the one above it.
    MoveUp(usize),
    /// Swap the queue entry at the index with the one below it.
    MoveDown(usize),
    /// Move the queue entry at the index to the front.
    MoveToFront(usize),
    /// The device finished playing the given session on its own.
    Completed(SessionId),
    /// Stop playback and shut the player down.
    Quit,
}

/// Snapshot of what the UI needs to render the transport.
///
/// Published on transitions only, so it carries no position; readers poll
/// `Transport::position` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatus {
    /// Title of the playing track, or of the queue front when idle.
    pub title: Option<String>,
    pub state: TransportState,
    pub length: Duration,
    pub volume: f32,
}

impl PlayerStatus {
    pub fn is_playing(&self) -> bool {
        self.state == TransportState::Playing
    }
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self {
            title: None,
            state: TransportState::Idle,
            length: Duration::ZERO,
            volume: 1.0,
        }
    }
}

/// Receives a status snapshot every time the transport changes state.
pub trait StatusSink {
    fn publish(&mut self, status: &PlayerStatus);
}

/// Shared status read by the UI on every redraw.
pub type StatusHandle = Arc<Mutex<PlayerStatus>>;

impl StatusSink for StatusHandle {
    fn publish(&mut self, status: &PlayerStatus) {
        if let Ok(mut s) = self.lock() {
            *s = status.clone();
        }
    }
}

/// Handed to the audio device when a session is opened; fired once when
/// that session reaches its end naturally.
#[derive(Debug, Clone)]
pub struct CompletionNotifier {
    session: SessionId,
    tx: Sender<PlayerCmd>,
}

impl CompletionNotifier {
    pub fn new(session: SessionId, tx: Sender<PlayerCmd>) -> Self {
        Self { session, tx }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Post the completion to the control thread.
    pub fn notify(&self) {
        // The control thread may already be gone during shutdown.
        let _ = self.tx.send(PlayerCmd::Completed(self.session));
    }
}
