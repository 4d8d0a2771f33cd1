//! Licksmith CLI library.
//!
//! Command implementations and the stderr logger behind the `licksmith`
//! binary. Everything here goes through the engine's public interface.

pub mod commands;
pub mod logger;
