//! `rodio` implementation of the audio device.
//!
//! One `OutputStream` lives for the whole run; every session is a fresh
//! `Sink` on its mixer holding the decoded file followed by an
//! `EmptyCallback`, which rodio reaches only when the file played out.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::source::EmptyCallback;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::debug;

use crate::error::DeviceError;
use crate::library::Track;
use crate::player::CompletionNotifier;

use super::device::{AudioDevice, PlaybackSession};

pub struct RodioDevice {
    stream: OutputStream,
}

impl RodioDevice {
    /// Open the system's default output stream.
    pub fn open_default() -> Result<Self, DeviceError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| DeviceError::Output(e.to_string()))?;
        // rodio logs to stderr when the stream is dropped, which would land
        // on top of the TUI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioDevice for RodioDevice {
    type Session = RodioSession;

    fn open(
        &mut self,
        track: &Track,
        on_complete: CompletionNotifier,
    ) -> Result<RodioSession, DeviceError> {
        let file = File::open(&track.path).map_err(|source| DeviceError::Open {
            path: track.path.clone(),
            source,
        })?;

        let source = Decoder::new(BufReader::new(file)).map_err(|e| DeviceError::Decode {
            path: track.path.clone(),
            reason: e.to_string(),
        })?;
        let length = source.total_duration().or(track.duration);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(source);
        let session = on_complete.session();
        sink.append(EmptyCallback::new(Box::new(move || on_complete.notify())));
        debug!(%session, path = ?track.path, ?length, "opened rodio sink");

        Ok(RodioSession { sink, length })
    }
}

pub struct RodioSession {
    sink: Sink,
    length: Option<Duration>,
}

impl PlaybackSession for RodioSession {
    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn stop(&mut self) {
        self.sink.stop();
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn set_position(&mut self, position: Duration) -> Result<(), DeviceError> {
        self.sink
            .try_seek(position)
            .map_err(|e| DeviceError::Seek(e.to_string()))
    }

    fn length(&self) -> Option<Duration> {
        self.length
    }
}
