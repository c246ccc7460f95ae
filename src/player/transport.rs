//! The transport controller.
//!
//! `Transport` owns the queue, the audio device and the single live playback
//! session. Every mutation happens through `&mut self` on the control
//! thread; the device reports natural completion by posting
//! `PlayerCmd::Completed` back to that thread.
//!
//! A session is identified by a `SessionId`. `stop` and `next` retire the
//! live id before tearing the session down, so a completion that was already
//! in flight for it is recognized as stale and dropped instead of advancing
//! the queue a second time.

use std::sync::mpsc::Sender;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::audio::{AudioDevice, PlaybackSession};
use crate::error::TransportError;
use crate::library::Track;

use super::queue::Queue;
use super::types::{
    CompletionNotifier, PlayerCmd, PlayerStatus, SessionId, StatusSink, TransportState,
};

struct Current<S> {
    id: SessionId,
    track: Track,
    session: S,
}

pub struct Transport<D: AudioDevice, N: StatusSink> {
    device: D,
    queue: Queue,
    current: Option<Current<D::Session>>,
    state: TransportState,
    volume: f32,
    next_session: u64,
    completions: Sender<PlayerCmd>,
    sink: N,
}

fn clamp_volume(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl<D: AudioDevice, N: StatusSink> Transport<D, N> {
    /// Create an idle transport. `completions` is the control thread's inbox;
    /// sessions post their natural completion there.
    pub fn new(
        device: D,
        queue: Queue,
        volume: f32,
        completions: Sender<PlayerCmd>,
        sink: N,
    ) -> Self {
        let mut transport = Self {
            device,
            queue,
            current: None,
            state: TransportState::Idle,
            volume: clamp_volume(volume),
            next_session: 0,
            completions,
            sink,
        };
        transport.publish();
        transport
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn now_playing(&self) -> Option<&Track> {
        self.current.as_ref().map(|c| &c.track)
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.current.as_ref().map(|c| c.id)
    }

    /// Current position of the live session; zero when idle.
    pub fn position(&self) -> Duration {
        self.current
            .as_ref()
            .map_or(Duration::ZERO, |c| c.session.position())
    }

    /// Length of the live session; zero when idle or unknown.
    pub fn length(&self) -> Duration {
        self.current
            .as_ref()
            .and_then(|c| c.session.length())
            .unwrap_or(Duration::ZERO)
    }

    pub fn status(&self) -> PlayerStatus {
        let title = self
            .now_playing()
            .or_else(|| self.queue.peek_front())
            .map(|t| t.display.clone());

        PlayerStatus {
            title,
            state: self.state,
            length: self.length(),
            volume: self.volume,
        }
    }

    /// Dispatch one command from the control thread's inbox.
    pub fn handle(&mut self, cmd: PlayerCmd) -> Result<(), TransportError> {
        match cmd {
            PlayerCmd::Play => self.play()?,
            PlayerCmd::Pause => self.pause(),
            PlayerCmd::PlayPause => self.toggle()?,
            PlayerCmd::Stop | PlayerCmd::Quit => self.stop(),
            PlayerCmd::Next => self.next()?,
            PlayerCmd::SeekTo(position) => self.seek_to(position),
            PlayerCmd::SetVolume(v) => self.set_volume(v),
            PlayerCmd::MoveUp(i) => {
                self.move_up(i);
            }
            PlayerCmd::MoveDown(i) => {
                self.move_down(i);
            }
            PlayerCmd::MoveToFront(i) => {
                self.move_to_front(i);
            }
            PlayerCmd::Completed(id) => self.on_completed(id)?,
        }
        Ok(())
    }

    /// Start the queue front when idle, resume when paused, and do nothing
    /// while already playing.
    pub fn play(&mut self) -> Result<(), TransportError> {
        match self.state {
            TransportState::Playing => Ok(()),
            TransportState::Paused => {
                if let Some(c) = self.current.as_mut() {
                    c.session.play();
                    debug!(session = %c.id, "resumed");
                }
                self.state = TransportState::Playing;
                self.publish();
                Ok(())
            }
            TransportState::Idle => self.start_front(),
        }
    }

    pub fn pause(&mut self) {
        if self.state != TransportState::Playing {
            return;
        }
        if let Some(c) = self.current.as_mut() {
            c.session.pause();
            debug!(session = %c.id, "paused");
        }
        self.state = TransportState::Paused;
        self.publish();
    }

    /// The play/pause button.
    pub fn toggle(&mut self) -> Result<(), TransportError> {
        if self.state == TransportState::Playing {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Release the live session and go idle.
    pub fn stop(&mut self) {
        let Some(mut c) = self.current.take() else {
            return;
        };
        c.session.stop();
        debug!(session = %c.id, track = %c.track.display, "stopped");
        drop(c);
        self.state = TransportState::Idle;
        self.publish();
    }

    /// Skip the current track without waiting for it to finish.
    pub fn next(&mut self) -> Result<(), TransportError> {
        self.stop();
        self.play()
    }

    /// The device finished `id` on its own.
    pub fn on_completed(&mut self, id: SessionId) -> Result<(), TransportError> {
        if self.session_id() != Some(id) {
            trace!(session = %id, "ignoring completion of a retired session");
            return Ok(());
        }
        debug!(session = %id, "completed naturally");
        self.next()
    }

    pub fn seek_to(&mut self, position: Duration) {
        let Some(c) = self.current.as_mut() else {
            debug!(?position, "seek without a session ignored");
            return;
        };
        let target = match c.session.length() {
            Some(len) => position.min(len),
            None => position,
        };
        if let Err(e) = c.session.set_position(target) {
            warn!(session = %c.id, error = %e, "seek failed");
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        if let Some(c) = self.current.as_mut() {
            c.session.set_volume(self.volume);
        }
        self.publish();
    }

    pub fn move_up(&mut self, index: usize) -> Option<usize> {
        let moved = self.queue.move_up(index);
        self.after_reorder(moved)
    }

    pub fn move_down(&mut self, index: usize) -> Option<usize> {
        let moved = self.queue.move_down(index);
        self.after_reorder(moved)
    }

    pub fn move_to_front(&mut self, index: usize) -> Option<usize> {
        let moved = self.queue.move_to_front(index);
        self.after_reorder(moved)
    }

    fn after_reorder(&mut self, moved: Option<usize>) -> Option<usize> {
        let Some(to) = moved else {
            return None;
        };
        if let Some(track) = self.queue.get(to) {
            trace!(to, track = %track.display, "reordered");
        }
        // The idle title follows the queue front.
        self.publish();
        moved
    }

    /// Open a session for the queue front and start it. The front is rotated
    /// to the back whether or not the device could open it, so a broken file
    /// never blocks the queue.
    fn start_front(&mut self) -> Result<(), TransportError> {
        let Some(track) = self.queue.peek_front().cloned() else {
            debug!("nothing queued");
            return Ok(());
        };

        let id = SessionId(self.next_session);
        self.next_session += 1;
        let notifier = CompletionNotifier::new(id, self.completions.clone());
        let opened = self.device.open(&track, notifier);
        self.queue.rotate_to_back();

        let mut session = match opened {
            Ok(s) => s,
            Err(source) => {
                warn!(session = %id, track = %track.display, error = %source, "device open failed");
                self.publish();
                return Err(TransportError::DeviceOpen {
                    track: track.display,
                    source,
                });
            }
        };

        session.set_volume(self.volume);
        session.play();
        debug!(session = %id, track = %track.display, "playing");

        self.current = Some(Current {
            id,
            track,
            session,
        });
        self.state = TransportState::Playing;
        self.publish();
        Ok(())
    }

    fn publish(&mut self) {
        let status = self.status();
        self.sink.publish(&status);
    }
}
