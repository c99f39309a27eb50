//! Scan result rendering.
//!
//! - [`table`]: aligned `KIND LEXEME LINE TAG` listing for humans
//! - [`json`]: one JSON document for tools

pub mod json;
pub mod table;

use std::fmt;
use std::str::FromStr;

pub use json::write_json;
pub use table::{escape_lexeme, write_table};

/// How `lexa lex` prints its result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("invalid format '{s}': expected table or json")),
        }
    }
}
