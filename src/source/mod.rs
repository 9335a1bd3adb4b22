//! # Source Module
//!
//! Reads raw song titles from the two supported input documents:
//!
//! - **Sheet**: a tabular csv file whose first row is a header and whose
//!   first column holds the titles ([`sheet`]).
//! - **Library**: a property-list style XML export of a music library, where
//!   a title is the `string` payload that immediately follows a `key`
//!   payload reading `Name` ([`library`]).
//!
//! Titles are returned exactly as found: blanks, whitespace and duplicates
//! are kept, and the original row/document order is preserved. Sorting (for
//! the extraction command) happens in the caller, never here.

mod library;
mod sheet;

pub use sheet::write_titles;

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// An input document that yields an ordered sequence of song titles.
///
/// The variant decides how the file is parsed; [`TitleSource::from_path`]
/// picks it from the file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleSource {
    Sheet(PathBuf),
    Library(PathBuf),
}

impl TitleSource {
    /// Selects the source variant from the file extension: `.xml` is read
    /// as a library export, everything else as a sheet.
    pub fn from_path(path: PathBuf) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("xml") => TitleSource::Library(path),
            _ => TitleSource::Sheet(path),
        }
    }

    /// Reads all titles from the document, in source order.
    pub fn read(&self) -> Result<Vec<String>, SourceError> {
        match self {
            TitleSource::Sheet(path) => sheet::read_titles(path),
            TitleSource::Library(path) => library::read_titles(path),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TitleSource::Sheet(path) => path,
            TitleSource::Library(path) => path,
        }
    }
}

#[derive(Debug)]
pub enum SourceError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    XmlError(roxmltree::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::IoError(e) => write!(f, "io error: {}", e),
            SourceError::CsvError(e) => write!(f, "csv error: {}", e),
            SourceError::XmlError(e) => write!(f, "xml error: {}", e),
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::IoError(err)
    }
}

impl From<csv::Error> for SourceError {
    fn from(err: csv::Error) -> Self {
        SourceError::CsvError(err)
    }
}

impl From<roxmltree::Error> for SourceError {
    fn from(err: roxmltree::Error) -> Self {
        SourceError::XmlError(err)
    }
}
