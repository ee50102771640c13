//! # Catalog Load Error Types
//!
//! Error types for catalog file loading.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / csv::Error                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogLoadError (this module) ← Adds file path / line context        │
//! │       ▲                                                                 │
//! │       │                                                                 │
//! │  pantry_core::CoreError ← Price parse failures, wrapped unchanged      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Catalog loading errors.
///
/// These wrap I/O and csv errors with enough context (path, line number)
/// to point at the offending row of the source file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog file cannot be opened or read.
    ///
    /// ## When This Occurs
    /// - File doesn't exist
    /// - Permission denied
    /// - Read failure mid-stream
    #[error("failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row is structurally malformed at the csv level.
    ///
    /// ## When This Occurs
    /// - Unbalanced quoting
    /// - Invalid UTF-8 in a field
    #[error("malformed catalog row at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: csv::Error,
    },

    /// A row has fewer than the two required columns (name, price).
    #[error("catalog row at line {line} is missing a price column")]
    MissingColumn { line: usize },

    /// The row shape was fine but the price text was rejected by the core
    /// (unparseable or negative).
    #[error(transparent)]
    Price(#[from] pantry_core::CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogLoadError::MissingColumn { line: 3 };
        assert_eq!(
            err.to_string(),
            "catalog row at line 3 is missing a price column"
        );

        let err = CatalogLoadError::Io {
            path: PathBuf::from("store.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read catalog file store.csv: no such file"
        );
    }
}
