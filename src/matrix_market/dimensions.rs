//! Size line parsing

use std::io::BufRead;

use crate::constants::DIMENSION_TOKENS;
use crate::error::{FormatError, Result};
use crate::matrix_market::header::Header;
use crate::matrix_market::lines::LineReader;

/// Matrix shape and number of stored entries declared by the size line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
    /// Data lines to expect; symmetric files may expand to more entries
    pub nnz: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize, nnz: usize) -> Self {
        Self { rows, cols, nnz }
    }

    /// Parses `rows cols nnz`; `line_number` is only used for errors
    pub fn parse(line: &str, line_number: usize) -> std::result::Result<Self, FormatError> {
        let malformed = || FormatError::MalformedDimensions { line: line_number };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != DIMENSION_TOKENS {
            return Err(malformed());
        }

        let rows: usize = tokens[0].parse().map_err(|_| malformed())?;
        let cols: usize = tokens[1].parse().map_err(|_| malformed())?;
        let nnz: usize = tokens[2].parse().map_err(|_| malformed())?;

        // The row pointer array holds rows + 1 entries
        if rows == usize::MAX {
            return Err(malformed());
        }

        Ok(Self { rows, cols, nnz })
    }
}

/// Skips comments and blank lines, then reads the size line.
///
/// Matrices with a non-general symmetry must be square.
pub fn read_dimensions<R: BufRead>(
    lines: &mut LineReader<R>,
    header: &Header,
) -> Result<Dimensions> {
    let dims = match lines.next_data_line()? {
        Some((line_number, line)) => Dimensions::parse(line, line_number)?,
        None => return Err(FormatError::MissingDimensions.into()),
    };

    if !header.symmetry.is_general() && dims.rows != dims.cols {
        return Err(FormatError::NonSquareSymmetric {
            symmetry: header.symmetry,
            rows: dims.rows,
            cols: dims.cols,
        }
        .into());
    }

    log::debug!(
        "Matrix dimensions: {} x {} with {} stored entries",
        dims.rows,
        dims.cols,
        dims.nnz
    );
    Ok(dims)
}
