//! The `explain` command: display documentation for diagnostic codes.

use std::io::{self, Write};

use lexa_diagnostic::{ErrorCode, ErrorDocs};

use super::Status;

/// Write the documentation for `code_str` to `out`, or an explanation of
/// why there is none to `err`.
pub fn explain_error<W: Write, E: Write>(
    code_str: &str,
    out: &mut W,
    err: &mut E,
) -> io::Result<Status> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        writeln!(err, "Unknown error code: {code_str}")?;
        writeln!(err)?;
        writeln!(err, "Codes have the format EXXXX where X is a digit.")?;
        let known: Vec<&str> = ErrorDocs::all_codes().map(|code| code.as_str()).collect();
        writeln!(err, "Known codes: {}", known.join(", "))?;
        return Ok(Status::Failure);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        writeln!(out, "{}", doc.trim_end())?;
        Ok(Status::Clean)
    } else {
        writeln!(err, "No documentation available for {code}")?;
        Ok(Status::Failure)
    }
}
