//! Matrix Market writer

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{LoadError, Result};
use crate::matrix::{MatrixValue, SparseMatrixCSR};
use crate::matrix_market::header::{Field, Header};

/// Writes a matrix in Matrix Market coordinate format.
///
/// The banner always declares `general` symmetry; every stored entry is
/// written once, 1-indexed, in CSR order.
pub fn write_matrix_market<T, W>(writer: &mut W, matrix: &SparseMatrixCSR<T>) -> io::Result<()>
where
    T: MatrixValue,
    W: Write,
{
    write_coordinate(writer, matrix, T::FIELD)
}

/// Writes only the sparsity structure under a `pattern` banner
pub fn write_pattern_matrix_market<T, W>(
    writer: &mut W,
    matrix: &SparseMatrixCSR<T>,
) -> io::Result<()>
where
    T: MatrixValue,
    W: Write,
{
    write_coordinate(writer, matrix, Field::Pattern)
}

fn write_coordinate<T, W>(writer: &mut W, matrix: &SparseMatrixCSR<T>, field: Field) -> io::Result<()>
where
    T: MatrixValue,
    W: Write,
{
    writeln!(writer, "{}", Header::general(field))?;
    writeln!(writer, "{} {} {}", matrix.n_rows, matrix.n_cols, matrix.nnz())?;

    for (row, col, value) in matrix.triplet_iter() {
        write!(writer, "{} {}", row + 1, col + 1)?;
        if field != Field::Pattern {
            write!(writer, " ")?;
            value.write_tokens(writer)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Writes a matrix to `path`, replacing any existing file
pub fn write_matrix_market_file<T, P>(path: P, matrix: &SparseMatrixCSR<T>) -> Result<()>
where
    T: MatrixValue,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let wrap = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    write_matrix_market(&mut writer, matrix).map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    log::debug!("Wrote {} entries to {}", matrix.nnz(), path.display());
    Ok(())
}
