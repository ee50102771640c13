//! # Catalog Loader
//!
//! Reads a comma-delimited, two-column, headerless catalog file
//! (`name,price` per row) into a [`Catalog`].
//!
//! ## File Format
//! ```text
//! tomatoes,3.2
//! rice,2.8
//! pepper,1.6
//! onions,1.25
//! chicken,4.5
//! ```
//!
//! No header row is assumed; fields are whitespace-trimmed. Row shape and
//! I/O problems are reported here with line context; price parsing is the
//! core's job and its errors pass through unchanged.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use pantry_core::Catalog;

use crate::error::CatalogLoadError;

/// Loads a catalog from a comma-delimited file at `path`.
///
/// ## Example
/// ```rust,no_run
/// use pantry_store::load_catalog;
///
/// let catalog = load_catalog("store.csv")?;
/// # Ok::<(), pantry_store::CatalogLoadError>(())
/// ```
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = read_catalog(file)?;
    debug!(
        path = %path.display(),
        entries = catalog.len(),
        "loaded ingredient catalog"
    );
    Ok(catalog)
}

/// Reads a catalog from any reader producing comma-delimited rows.
///
/// Split out from [`load_catalog`] so callers can feed in-memory buffers
/// or network streams without touching the filesystem.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog, CatalogLoadError> {
    let mut rows = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (index, record) in rows.records().enumerate() {
        let line = index + 1;
        let record = record.map_err(|source| CatalogLoadError::Malformed { line, source })?;

        let name = record
            .get(0)
            .ok_or(CatalogLoadError::MissingColumn { line })?;
        let price = record
            .get(1)
            .ok_or(CatalogLoadError::MissingColumn { line })?;

        entries.push((name.to_string(), price.to_string()));
    }

    Ok(Catalog::build(entries)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use pantry_core::{CoreError, Money};

    const STORE_CSV: &str = "tomatoes,3.2\nrice,2.8\npepper,1.6\nonions,1.25\nchicken,4.5\n";

    #[test]
    fn test_read_catalog_matches_list_construction() {
        let from_csv = read_catalog(STORE_CSV.as_bytes()).unwrap();
        let from_list = Catalog::build([
            ("tomatoes", "3.2"),
            ("rice", "2.8"),
            ("pepper", "1.6"),
            ("onions", "1.25"),
            ("chicken", "4.5"),
        ])
        .unwrap();

        assert_eq!(from_csv, from_list);
        assert_eq!(from_csv.price_of("pepper"), Money::from_cents(160));
    }

    #[test]
    fn test_read_catalog_trims_whitespace() {
        let catalog = read_catalog("pepper , 1.6\n".as_bytes()).unwrap();
        assert_eq!(catalog.price_of("pepper"), Money::from_cents(160));
    }

    #[test]
    fn test_missing_price_column() {
        let err = read_catalog("pepper,1.6\nonions\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::MissingColumn { line: 2 }));
    }

    #[test]
    fn test_bad_price_surfaces_core_error() {
        let err = read_catalog("pepper,cheap\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Price(CoreError::InvalidPrice { ref name, .. }) if name == "pepper"
        ));
    }

    #[test]
    fn test_negative_price_surfaces_core_error() {
        let err = read_catalog("pepper,-1.6\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Price(CoreError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(STORE_CSV.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.price_of("chicken"), Money::from_cents(450));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }

    #[test]
    fn test_empty_file_builds_empty_catalog() {
        let catalog = read_catalog("".as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }
}
