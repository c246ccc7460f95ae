//! Audio output: the device traits the transport drives and their `rodio`
//! implementation.

mod device;
mod sink;

pub use device::{AudioDevice, PlaybackSession};
pub use sink::RodioDevice;
