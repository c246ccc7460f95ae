//! Track enumeration: finds the audio files the queue starts with.

mod display;
mod model;
mod scan;

pub use model::Track;
pub use scan::scan;
