//! Source acquisition.
//!
//! The file is read whole before scanning starts. On any failure nothing is
//! scanned and the caller reports the [`SourceError`].

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Failure to obtain source text.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound { path },
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied { path },
            io::ErrorKind::InvalidData => SourceError::InvalidUtf8 { path },
            _ => SourceError::Io { path, source: err },
        }
    }

    /// The path that could not be read.
    pub fn path(&self) -> &Path {
        match self {
            SourceError::NotFound { path }
            | SourceError::PermissionDenied { path }
            | SourceError::InvalidUtf8 { path }
            | SourceError::Io { path, .. } => path,
        }
    }
}

/// Read the whole file at `path` as UTF-8 text.
pub fn load_source(path: &Path) -> Result<String, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|err| SourceError::from_io(path, err))?;
    debug!(path = %path.display(), bytes = text.len(), "source loaded");
    Ok(text)
}

/// Ask for a source path on `output` and read one line from `input`.
///
/// Returns `None` when the answer is blank or input is already closed.
pub fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<PathBuf>> {
    write!(output, "Enter the path of the source file: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let answer = line.trim();
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(answer)))
    }
}
