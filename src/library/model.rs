use std::path::PathBuf;
use std::time::Duration;

/// A playable file found by the scanner. `display` is the name shown in the
/// queue and used as the track's title everywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
    pub display: String,
}
