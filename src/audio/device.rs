//! The seam between the transport and whatever actually makes sound.

use std::time::Duration;

use crate::error::DeviceError;
use crate::library::Track;
use crate::player::CompletionNotifier;

/// Opens one playback session per track.
pub trait AudioDevice {
    type Session: PlaybackSession;

    /// Open a paused session for `track`. The device must call
    /// `on_complete.notify()` once if the session plays to its end.
    fn open(
        &mut self,
        track: &Track,
        on_complete: CompletionNotifier,
    ) -> Result<Self::Session, DeviceError>;
}

/// A live binding between one track and the output device.
///
/// Dropping a session releases it.
pub trait PlaybackSession {
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn position(&self) -> Duration;
    fn set_position(&mut self, position: Duration) -> Result<(), DeviceError>;
    /// Total length, when the decoder knows it.
    fn length(&self) -> Option<Duration>;
}
