//! Command handlers for the `lexa` CLI.
//!
//! Each submodule implements one command. Argument parsing for `lex` and
//! the exit [`Status`] shared by every command live here in the module root.

use std::path::PathBuf;

use lexa_diagnostic::emitter::ColorMode;
use lexa_lexer::ScanConfig;

use crate::render::OutputFormat;

mod explain;
mod lex;

pub use explain::explain_error;
pub use lex::{lex_file, lex_source, report_scan, CLEAN_SCAN_MESSAGE};

/// How a command ended, mapped to the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Completed, nothing to report.
    Clean,
    /// Completed, but lexical diagnostics were reported.
    Diagnostics,
    /// Usage error or unreadable source; nothing was scanned.
    Failure,
}

impl Status {
    pub fn code(self) -> i32 {
        match self {
            Status::Clean => 0,
            Status::Diagnostics => 1,
            Status::Failure => 2,
        }
    }
}

/// Options for `lexa lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Source file; `None` means ask for it on stdin.
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: ColorMode,
    /// `--no-tags`: leave automaton tags off the tokens.
    pub no_tags: bool,
    /// `--quiet-comments`: do not report block comments left open at EOF.
    pub quiet_comments: bool,
}

impl LexOptions {
    /// Scanner configuration these options ask for.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::new()
            .with_automaton_tags(!self.no_tags)
            .with_unterminated_comment_reports(!self.quiet_comments)
    }
}

/// A command line `lexa` cannot act on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("{0}")]
    InvalidValue(String),

    #[error("unexpected argument '{0}': only one file can be scanned at a time")]
    ExtraArgument(String),
}

/// Parse the arguments that follow `lex`.
///
/// Flags may appear before or after the path.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, UsageError> {
    let mut options = LexOptions::default();

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = format.parse().map_err(UsageError::InvalidValue)?;
        } else if let Some(color) = arg.strip_prefix("--color=") {
            options.color = color.parse().map_err(UsageError::InvalidValue)?;
        } else if arg == "--json" {
            options.format = OutputFormat::Json;
        } else if arg == "--no-tags" {
            options.no_tags = true;
        } else if arg == "--quiet-comments" {
            options.quiet_comments = true;
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else if options.path.is_none() {
            options.path = Some(PathBuf::from(arg));
        } else {
            return Err(UsageError::ExtraArgument(arg.clone()));
        }
    }

    Ok(options)
}
