//! Diagnostic system for Lexa scan reports.
//!
//! - Error codes for searchability (`lexa explain E0002`)
//! - Clear messages (what went wrong)
//! - Source line (where it went wrong)
//! - Notes and suggestions (why, and how to fix)
//!
//! Diagnostics are plain values. Producing one never prints anything;
//! emitters in [`emitter`] decide how they are rendered.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
