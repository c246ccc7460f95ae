//! Playback core: the play queue and the transport controller that drives
//! the audio device from it.

mod queue;
mod transport;
mod types;

pub use queue::Queue;
pub use transport::Transport;
pub use types::*;
