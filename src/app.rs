//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the queue selection and
//! the latest transport status.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
