//! Error types for the audio device, the transport controller and the
//! library scanner.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by an audio device implementation.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// No audio output stream could be opened.
    #[error("audio output unavailable: {0}")]
    Output(String),

    /// The track's file could not be opened.
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but could not be decoded.
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// The session rejected a position change.
    #[error("seek failed: {0}")]
    Seek(String),
}

/// Failures the transport surfaces to its caller.
///
/// An empty queue and a seek without a live session are not errors: the
/// transport treats both as no-ops.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("cannot play \"{track}\": {source}")]
    DeviceOpen {
        track: String,
        #[source]
        source: DeviceError,
    },
}

/// Failures while preparing the music directory.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to create music directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0:?} is not a directory")]
    NotADirectory(PathBuf),
}
