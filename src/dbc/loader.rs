//! Database loading utilities
//!
//! `DbcLoader` loads DBC source text from a file or a string and runs the
//! parsing engine on it. Parsing itself never fails — malformed records go
//! to the failure observer — so the only fallible step is reading the file.

use super::model::Dbc;
use super::observer::ParseFailureObserver;
use super::parsing;
use std::fs;
use std::path::Path;

/// Error that can occur when loading a database
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading file
    IoError(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

/// Loads DBC source text and parses it into a [`Dbc`].
///
/// ```rust,ignore
/// use dbc_parser::dbc::loader::DbcLoader;
/// use dbc_parser::dbc::observer::CountingFailureObserver;
///
/// let loader = DbcLoader::from_path("vehicle.dbc")?;
/// let dbc = loader.parse();
///
/// // Strict callers watch the observer instead:
/// let mut observer = CountingFailureObserver::new();
/// let dbc = loader.parse_with(&mut observer);
/// assert_eq!(observer.total(), 0);
/// ```
pub struct DbcLoader {
    source: String,
}

impl DbcLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DbcLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DbcLoader {
            source: source.into(),
        }
    }

    /// Parse the source, discarding diagnostics.
    pub fn parse(&self) -> Dbc {
        parsing::parse(&self.source)
    }

    /// Parse the source, reporting malformed records to `observer`.
    pub fn parse_with(&self, observer: &mut dyn ParseFailureObserver) -> Dbc {
        parsing::parse_with_observer(&self.source, observer)
    }

    /// Get a reference to the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }
}
