//! Coordinate (triplet) to CSR conversion

use crate::error::{LoadError, Result};
use crate::matrix::{SparseMatrixCSR, Triplet};
use crate::utils::exclusive_scan;
use num_traits::Num;

/// Builds a CSR matrix from 0-indexed triplets.
///
/// Counting pass per row, exclusive prefix sum into the row pointers, then a
/// placement pass with one cursor per row. Entries land in their row in the
/// order they appear in `triplets`; duplicates are kept as separate entries.
///
/// # Errors
///
/// `LoadError::Allocation` when the per-row arrays for `n_rows` cannot be
/// allocated.
///
/// # Panics
///
/// Panics if a triplet lies outside `n_rows × n_cols`. The parser has
/// already rejected such entries.
pub fn triplets_to_csr<T: Copy + Num>(
    n_rows: usize,
    n_cols: usize,
    triplets: &[Triplet<T>],
) -> Result<SparseMatrixCSR<T>> {
    let too_large = |source| LoadError::Allocation {
        rows: n_rows,
        source,
    };

    // Count entries per row
    let mut row_counts = Vec::new();
    row_counts.try_reserve_exact(n_rows).map_err(too_large)?;
    row_counts.resize(n_rows, 0);

    for t in triplets {
        row_counts[t.row] += 1;
    }

    // Compute row pointers via prefix sum
    let row_ptr = exclusive_scan(&row_counts).map_err(too_large)?;

    // Allocate arrays for CSR matrix
    let nnz = triplets.len();
    let mut col_idx = vec![0; nnz];
    let mut values = vec![T::zero(); nnz];

    // The count buffer becomes the per-row cursors
    let mut next_slot = row_counts;
    next_slot.copy_from_slice(&row_ptr[..n_rows]);

    for t in triplets {
        let pos = next_slot[t.row];

        col_idx[pos] = t.col;
        values[pos] = t.value;

        next_slot[t.row] += 1;
    }

    log::trace!("Converted {} triplets into {} CSR rows", nnz, n_rows);

    Ok(SparseMatrixCSR::new(n_rows, n_cols, row_ptr, col_idx, values))
}
