//! Lexis CLI library: command handlers and logging setup for the `lexis`
//! binary.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
