//! Data line parsing and symmetry expansion

use std::io::BufRead;
use std::num::IntErrorKind;

use crate::constants::INDEX_TOKENS;
use crate::error::{FormatError, Result};
use crate::matrix::{LoadOptions, MatrixValue, TripletBuffer};
use crate::matrix_market::dimensions::Dimensions;
use crate::matrix_market::header::{Field, Header};
use crate::matrix_market::lines::LineReader;

/// Largest number of value tokens on a data line (complex: re im)
const MAX_VALUE_TOKENS: usize = 2;

/// Reads exactly `dims.nnz` data lines into a staging buffer.
///
/// Blank and comment lines between entries are skipped. Indices are
/// converted to 0-based. For non-general symmetry each off-diagonal entry is
/// followed immediately by its mirror unless `options.expand_symmetry` is
/// off. Lines after the last declared entry are never read.
pub fn read_triplets<T: MatrixValue, R: BufRead>(
    lines: &mut LineReader<R>,
    header: &Header,
    dims: &Dimensions,
    options: &LoadOptions,
) -> Result<TripletBuffer<T>> {
    if !T::accepts(header.field) {
        return Err(FormatError::UnsupportedField {
            field: header.field,
            requested: T::TYPE_NAME,
        }
        .into());
    }

    let mirror = options.expand_symmetry && !header.symmetry.is_general();
    let mut triplets = TripletBuffer::for_entries(dims.nnz, mirror);

    for found in 0..dims.nnz {
        let (line_number, line) = match lines.next_data_line()? {
            Some(entry) => entry,
            None => {
                return Err(FormatError::PrematureEof {
                    expected: dims.nnz,
                    found,
                }
                .into())
            }
        };

        let (row, col, value) = parse_entry::<T>(line, line_number, header.field, dims)?;
        triplets.push(row, col, value);

        if mirror && row != col {
            let mirrored = value
                .mirrored(header.symmetry)
                .ok_or(FormatError::MalformedEntry { line: line_number })?;
            triplets.push(col, row, mirrored);
        }
    }

    log::trace!(
        "Read {} entries, {} after symmetry expansion",
        dims.nnz,
        triplets.len()
    );
    Ok(triplets)
}

/// Parses one data line into a 0-indexed `(row, col, value)`
pub fn parse_entry<T: MatrixValue>(
    line: &str,
    line_number: usize,
    field: Field,
    dims: &Dimensions,
) -> std::result::Result<(usize, usize, T), FormatError> {
    let malformed = || FormatError::MalformedEntry { line: line_number };

    let value_count = field.value_tokens();
    let mut tokens = [""; INDEX_TOKENS + MAX_VALUE_TOKENS];
    let mut count = 0;

    for token in line.split_whitespace() {
        if count == INDEX_TOKENS + value_count {
            return Err(malformed());
        }
        tokens[count] = token;
        count += 1;
    }
    if count != INDEX_TOKENS + value_count {
        return Err(malformed());
    }

    let row = parse_index(tokens[0]).ok_or_else(malformed)?;
    let col = parse_index(tokens[1]).ok_or_else(malformed)?;

    let value = match field {
        Field::Pattern => T::one(),
        _ => T::parse_tokens(field, &tokens[INDEX_TOKENS..count]).ok_or_else(malformed)?,
    };

    let out_of_range = || FormatError::IndexOutOfRange {
        line: line_number,
        row,
        col,
    };
    let row0 = to_zero_based(row, dims.rows).ok_or_else(out_of_range)?;
    let col0 = to_zero_based(col, dims.cols).ok_or_else(out_of_range)?;

    Ok((row0, col0, value))
}

/// Parses an index token; integers too wide for `i64` saturate so the
/// range check reports them
fn parse_index(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(index) => Some(index),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Maps a 1-based file index into `0..bound`
fn to_zero_based(index: i64, bound: usize) -> Option<usize> {
    let zero_based = usize::try_from(index.checked_sub(1)?).ok()?;
    (zero_based < bound).then_some(zero_based)
}
