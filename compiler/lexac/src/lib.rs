//! Lexa command-line driver.
//!
//! Library half of the `lexa` binary: loading sources, mapping lexical
//! problems to diagnostics, rendering scan results, and the command
//! handlers `main.rs` dispatches to.

pub mod commands;
pub mod problem;
pub mod render;
pub mod source;
pub mod tracing_setup;

pub use commands::Status;
pub use source::{load_source, SourceError};
