//! Matrix Market reader and writer
//!
//! Loading runs four sequential stages over one buffered stream:
//!
//! 1. [`read_header`] validates the banner and extracts field and symmetry
//! 2. [`read_dimensions`] skips comments and reads `rows cols nnz`
//! 3. [`read_triplets`] parses `nnz` data lines, mirroring symmetric entries
//! 4. [`triplets_to_csr`](crate::matrix::triplets_to_csr) builds the CSR arrays
//!
//! The field word is resolved once after the header; the remaining stages
//! run monomorphized over the matching value type.

pub mod dimensions;
pub mod entries;
pub mod header;
pub mod lines;
pub mod writer;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use num_complex::Complex64;

use crate::error::{LoadError, Result};
use crate::matrix::{triplets_to_csr, LoadOptions, MatrixValue, SparseMatrixCSR};

pub use dimensions::{read_dimensions, Dimensions};
pub use entries::{parse_entry, read_triplets};
pub use header::{read_header, Field, Format, Header, Object, Symmetry};
pub use lines::LineReader;
pub use writer::{write_matrix_market, write_matrix_market_file, write_pattern_matrix_market};

/// A loaded matrix whose value type follows the file's field
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixMarketData {
    Real(SparseMatrixCSR<f64>),
    Integer(SparseMatrixCSR<i64>),
    Complex(SparseMatrixCSR<Complex64>),
    /// Pattern file; every stored value is `1.0`
    Pattern(SparseMatrixCSR<f64>),
}

macro_rules! each_variant {
    ($data:expr, $m:ident => $body:expr) => {
        match $data {
            MatrixMarketData::Real($m) => $body,
            MatrixMarketData::Integer($m) => $body,
            MatrixMarketData::Complex($m) => $body,
            MatrixMarketData::Pattern($m) => $body,
        }
    };
}

impl MatrixMarketData {
    /// Field declared by the file this matrix came from
    pub fn field(&self) -> Field {
        match self {
            MatrixMarketData::Real(_) => Field::Real,
            MatrixMarketData::Integer(_) => Field::Integer,
            MatrixMarketData::Complex(_) => Field::Complex,
            MatrixMarketData::Pattern(_) => Field::Pattern,
        }
    }

    pub fn n_rows(&self) -> usize {
        each_variant!(self, m => m.n_rows)
    }

    pub fn n_cols(&self) -> usize {
        each_variant!(self, m => m.n_cols)
    }

    /// Number of stored entries after symmetry expansion
    pub fn nnz(&self) -> usize {
        each_variant!(self, m => m.nnz())
    }

    pub fn indptr(&self) -> &[usize] {
        each_variant!(self, m => m.indptr())
    }

    pub fn indices(&self) -> &[usize] {
        each_variant!(self, m => m.indices())
    }

    /// The matrix as `f64` values, for real and pattern files
    pub fn as_real(&self) -> Option<&SparseMatrixCSR<f64>> {
        match self {
            MatrixMarketData::Real(m) | MatrixMarketData::Pattern(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&SparseMatrixCSR<i64>> {
        match self {
            MatrixMarketData::Integer(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&SparseMatrixCSR<Complex64>> {
        match self {
            MatrixMarketData::Complex(m) => Some(m),
            _ => None,
        }
    }

    /// Converts any real-valued variant to `f64`; complex matrices are
    /// returned unchanged in `Err`
    pub fn into_real(self) -> std::result::Result<SparseMatrixCSR<f64>, Self> {
        match self {
            MatrixMarketData::Real(m) | MatrixMarketData::Pattern(m) => Ok(m),
            MatrixMarketData::Integer(m) => {
                let values = m.values.iter().map(|&v| v as f64).collect();
                Ok(SparseMatrixCSR {
                    n_rows: m.n_rows,
                    n_cols: m.n_cols,
                    row_ptr: m.row_ptr,
                    col_idx: m.col_idx,
                    values,
                })
            }
            complex @ MatrixMarketData::Complex(_) => Err(complex),
        }
    }

    /// Writes the matrix in Matrix Market coordinate form, keeping its field
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            MatrixMarketData::Pattern(m) => write_pattern_matrix_market(writer, m),
            MatrixMarketData::Real(m) => write_matrix_market(writer, m),
            MatrixMarketData::Integer(m) => write_matrix_market(writer, m),
            MatrixMarketData::Complex(m) => write_matrix_market(writer, m),
        }
    }
}

/// Reads a coordinate matrix of a fixed value type from a buffered reader
pub fn read_matrix_market_as<T, R>(reader: R, options: &LoadOptions) -> Result<SparseMatrixCSR<T>>
where
    T: MatrixValue,
    R: BufRead,
{
    let mut lines = LineReader::new(reader);
    let header = read_header(&mut lines)?;
    read_body(&mut lines, &header, options)
}

/// Reads a coordinate matrix from a buffered reader, choosing the value
/// type from the banner's field
pub fn read_matrix_market<R: BufRead>(reader: R, options: &LoadOptions) -> Result<MatrixMarketData> {
    let mut lines = LineReader::new(reader);
    let header = read_header(&mut lines)?;

    let data = match header.field {
        Field::Real => MatrixMarketData::Real(read_body(&mut lines, &header, options)?),
        Field::Integer => MatrixMarketData::Integer(read_body(&mut lines, &header, options)?),
        Field::Complex => MatrixMarketData::Complex(read_body(&mut lines, &header, options)?),
        Field::Pattern => MatrixMarketData::Pattern(read_body(&mut lines, &header, options)?),
    };
    Ok(data)
}

/// Dimension, entry and conversion stages shared by every loader
fn read_body<T, R>(
    lines: &mut LineReader<R>,
    header: &Header,
    options: &LoadOptions,
) -> Result<SparseMatrixCSR<T>>
where
    T: MatrixValue,
    R: BufRead,
{
    let dims = read_dimensions(lines, header)?;
    let triplets = read_triplets::<T, R>(lines, header, &dims, options)?;

    let mut matrix = triplets_to_csr(dims.rows, dims.cols, triplets.as_slice())?;
    if options.sort_indices {
        matrix.sort_indices();
    }
    Ok(matrix)
}

/// Loads a Matrix Market file into CSR arrays with default options.
///
/// # Examples
///
/// ```no_run
/// use rsmtxmkt::load_matrix_market;
///
/// let matrix = load_matrix_market("E-MTAB-8362.aggregated_filtered_counts.mtx")?;
/// println!("{} rows, {} entries", matrix.n_rows(), matrix.nnz());
/// # Ok::<(), rsmtxmkt::LoadError>(())
/// ```
pub fn load_matrix_market<P: AsRef<Path>>(path: P) -> Result<MatrixMarketData> {
    load_matrix_market_with(path, &LoadOptions::default())
}

/// Loads a Matrix Market file with explicit options
pub fn load_matrix_market_with<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> Result<MatrixMarketData> {
    let path = path.as_ref();
    let reader = open(path)?;
    let data = read_matrix_market(reader, options).map_err(|e| e.with_path(path))?;

    log::info!(
        "Loaded {}: {} x {} {} matrix with {} entries",
        path.display(),
        data.n_rows(),
        data.n_cols(),
        data.field(),
        data.nnz()
    );
    Ok(data)
}

/// Loads a Matrix Market file into a CSR matrix of a fixed value type.
///
/// Fails with `UnsupportedField` when the file's field cannot be held by `T`.
pub fn load_matrix_market_as<T, P>(path: P, options: &LoadOptions) -> Result<SparseMatrixCSR<T>>
where
    T: MatrixValue,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open(path)?;
    let matrix = read_matrix_market_as(reader, options).map_err(|e| e.with_path(path))?;

    log::info!(
        "Loaded {}: {} x {} matrix with {} entries",
        path.display(),
        matrix.n_rows,
        matrix.n_cols,
        matrix.nnz()
    );
    Ok(matrix)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const GENERAL: &str = "%%MatrixMarket matrix coordinate real general\n\
                           2 2 2\n\
                           1 1 1.5\n\
                           2 2 2.5\n";

    #[test]
    fn test_read_dispatches_on_field() {
        let data = read_matrix_market(Cursor::new(GENERAL), &LoadOptions::default()).unwrap();

        assert_eq!(data.field(), Field::Real);
        assert_eq!(data.indptr(), &[0, 1, 2]);
        assert_eq!(data.indices(), &[0, 1]);
        assert_eq!(data.as_real().unwrap().values, vec![1.5, 2.5]);
    }

    #[test]
    fn test_integer_into_real() {
        let input = "%%MatrixMarket matrix coordinate integer general\n1 2 1\n1 2 7\n";
        let data = read_matrix_market(Cursor::new(input), &LoadOptions::default()).unwrap();
        assert!(data.as_integer().is_some());

        let real = data.into_real().unwrap();
        assert_eq!(real.values, vec![7.0]);
        assert_eq!(real.col_idx, vec![1]);
    }

    #[test]
    fn test_complex_is_not_real() {
        let input = "%%MatrixMarket matrix coordinate complex general\n1 1 1\n1 1 1.0 -1.0\n";
        let data = read_matrix_market(Cursor::new(input), &LoadOptions::default()).unwrap();

        assert_eq!(
            data.as_complex().unwrap().values,
            vec![Complex64::new(1.0, -1.0)]
        );
        assert!(data.into_real().is_err());
    }

    #[test]
    fn test_typed_read_widens_integer_to_f64() {
        let input = "%%MatrixMarket matrix coordinate integer general\n2 1 1\n2 1 3\n";
        let matrix: SparseMatrixCSR<f64> =
            read_matrix_market_as(Cursor::new(input), &LoadOptions::default()).unwrap();

        assert_eq!(matrix.row_ptr, vec![0, 0, 1]);
        assert_eq!(matrix.values, vec![3.0]);
    }

    #[test]
    fn test_write_to_round_trips() {
        let data = read_matrix_market(Cursor::new(GENERAL), &LoadOptions::default()).unwrap();

        let mut out = Vec::new();
        data.write_to(&mut out).unwrap();
        let reloaded = read_matrix_market(Cursor::new(out), &LoadOptions::default()).unwrap();

        assert_eq!(reloaded, data);
    }

    #[test]
    fn test_write_to_keeps_pattern_field() {
        let input = "%%MatrixMarket matrix coordinate pattern symmetric\n3 3 2\n3 1\n2 2\n";
        let data = read_matrix_market(Cursor::new(input), &LoadOptions::default()).unwrap();

        let mut out = Vec::new();
        data.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("%%MatrixMarket matrix coordinate pattern general\n3 3 3\n"));

        let reloaded = read_matrix_market(Cursor::new(text), &LoadOptions::default()).unwrap();
        assert_eq!(reloaded.field(), Field::Pattern);
        assert_eq!(reloaded, data);
    }
}
