//! # rsmtxmkt: Matrix Market loading into CSR arrays
//!
//! Reads sparse matrices stored in the Matrix Market coordinate text format
//! and returns them in Compressed Sparse Row form: a row pointer array
//! (`indptr`), a column index array (`indices`) and a value array.
//!
//! ## Overview
//!
//! The loader is a single sequential pipeline over one buffered stream:
//!
//! 1. **Header**: validates the `%%MatrixMarket` banner and reads the object,
//!    format, field and symmetry words.
//!
//! 2. **Dimensions**: skips comment lines and reads `rows cols nnz`.
//!
//! 3. **Triplets**: parses the data lines into 0-indexed `(row, col, value)`
//!    entries and mirrors off-diagonal entries of symmetric,
//!    skew-symmetric and hermitian files.
//!
//! 4. **CSR conversion**: counts entries per row, prefix-sums the counts
//!    into `indptr` and places every entry at its row's next free slot.
//!
//! Entries keep file order within each row (a mirrored entry follows its
//! source) unless [`LoadOptions::sort_indices`] is set.
//!
//! ## Usage
//!
//! ```
//! use std::io::Cursor;
//! use rsmtxmkt::{read_matrix_market, LoadOptions};
//!
//! let text = "%%MatrixMarket matrix coordinate real general\n\
//!             2 2 2\n\
//!             1 1 1.5\n\
//!             2 2 2.5\n";
//!
//! let matrix = read_matrix_market(Cursor::new(text), &LoadOptions::default()).unwrap();
//! assert_eq!(matrix.indptr(), &[0, 1, 2]);
//! assert_eq!(matrix.indices(), &[0, 1]);
//! assert_eq!(matrix.as_real().unwrap().values, vec![1.5, 2.5]);
//! ```

pub mod constants;
pub mod error;
pub mod matrix;
pub mod matrix_market;
pub mod utils;

// Re-export primary components
pub use error::{FormatError, LoadError, Result};
pub use matrix::{triplets_to_csr, LoadOptions, MatrixValue, SparseMatrixCSR, Triplet, TripletBuffer};
pub use matrix_market::{
    load_matrix_market, load_matrix_market_as, load_matrix_market_with, read_matrix_market,
    read_matrix_market_as, write_matrix_market, write_matrix_market_file,
    write_pattern_matrix_market, Dimensions, Field, Header, MatrixMarketData, Symmetry,
};
pub use utils::{from_sprs_csr, to_dense, to_sprs_csr};

pub use num_complex::Complex64;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
