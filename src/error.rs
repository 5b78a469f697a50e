//! Error types for Matrix Market loading

use std::collections::TryReserveError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::matrix_market::header::{Field, Symmetry};

/// Result type alias using the loader's error
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors returned by the loader.
///
/// Every variant is terminal: no partial matrix is ever returned alongside
/// an error.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being loaded
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// Reading from a caller-supplied stream failed
    #[error("I/O error while reading Matrix Market stream: {0}")]
    Stream(#[source] io::Error),

    /// Row pointer arrays for the declared row count could not be allocated
    #[error("Cannot allocate row arrays for {rows} rows: {source}")]
    Allocation {
        /// Declared row count
        rows: usize,
        /// Allocator failure
        #[source]
        source: TryReserveError,
    },

    /// The input is not a well-formed Matrix Market coordinate file
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl LoadError {
    /// Attaches the file path to a stream-level I/O error.
    ///
    /// Format errors are returned untouched.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            LoadError::Stream(source) => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }

    /// Returns the format error, if this is one
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            LoadError::Format(err) => Some(err),
            _ => None,
        }
    }

    /// True for failures of the filesystem or stream layer
    pub fn is_io(&self) -> bool {
        matches!(self, LoadError::Io { .. } | LoadError::Stream(_))
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Stream(err)
    }
}

/// Structural problems found while parsing a Matrix Market file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// First line is missing, lacks the banner token, or has unrecognized fields
    #[error("Invalid Matrix Market banner")]
    InvalidBanner,

    /// Banner object is something other than `matrix`
    #[error("Unsupported Matrix Market object '{0}'")]
    UnsupportedObject(String),

    /// Banner format is something other than `coordinate`
    #[error("Unsupported Matrix Market format '{0}'")]
    UnsupportedFormat(String),

    /// The file's field cannot be represented by the requested value type
    #[error("Field '{field}' cannot be loaded as {requested}")]
    UnsupportedField {
        /// Field declared in the banner
        field: Field,
        /// Name of the value type asked for
        requested: &'static str,
    },

    /// End of input before the size line
    #[error("Missing dimensions line")]
    MissingDimensions,

    /// Size line does not hold three non-negative integers
    #[error("Malformed dimensions on line {line}")]
    MalformedDimensions {
        /// 1-based line number
        line: usize,
    },

    /// Symmetric, skew-symmetric and hermitian matrices must be square
    #[error("{symmetry} matrix must be square, got {rows}x{cols}")]
    NonSquareSymmetric {
        /// Declared symmetry
        symmetry: Symmetry,
        /// Declared rows
        rows: usize,
        /// Declared columns
        cols: usize,
    },

    /// Data line with the wrong token count or non-numeric tokens
    #[error("Malformed entry on line {line}")]
    MalformedEntry {
        /// 1-based line number
        line: usize,
    },

    /// 1-based index outside `1..=dimension`
    #[error("Entry ({row}, {col}) on line {line} is outside the declared dimensions")]
    IndexOutOfRange {
        /// 1-based line number
        line: usize,
        /// Row index as written in the file, saturated to the `i64` range
        row: i64,
        /// Column index as written in the file, saturated to the `i64` range
        col: i64,
    },

    /// Fewer data lines than the size line declared
    #[error("Premature end of file: expected {expected} entries, found {found}")]
    PrematureEof {
        /// Entries declared on the size line
        expected: usize,
        /// Entries actually read
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_path_wraps_stream_errors() {
        let err = LoadError::Stream(io::Error::new(io::ErrorKind::UnexpectedEof, "boom"));
        let err = err.with_path(Path::new("data/a.mtx"));

        assert!(err.is_io());
        match err {
            LoadError::Io { path, .. } => assert_eq!(path, PathBuf::from("data/a.mtx")),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_with_path_keeps_format_errors() {
        let err = LoadError::from(FormatError::InvalidBanner).with_path(Path::new("a.mtx"));
        assert_eq!(err.format_error(), Some(&FormatError::InvalidBanner));
        assert!(!err.is_io());
    }

    #[test]
    fn test_messages_carry_line_numbers() {
        let err = FormatError::MalformedEntry { line: 7 };
        assert_eq!(err.to_string(), "Malformed entry on line 7");

        let err = FormatError::PrematureEof { expected: 5, found: 3 };
        assert_eq!(
            err.to_string(),
            "Premature end of file: expected 5 entries, found 3"
        );
    }
}
