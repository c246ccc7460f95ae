//! Configuration loader and schema types.
//!
//! Settings cover audio defaults, UI glyphs and tick rate, key step sizes,
//! library scanning and log output.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
