//! The externally visible render state.

mod projection;
mod types;

pub use types::*;
