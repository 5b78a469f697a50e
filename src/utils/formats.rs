//! Utilities for converting loaded matrices to and from external libraries

use crate::matrix::SparseMatrixCSR;
use ndarray::Array2;
use num_traits::Num;
use sprs::{CsMat, TriMat};

/// Converts our CSR matrix to a sprs CsMat in CSR storage
///
/// sprs requires sorted, duplicate-free rows, so the entries are routed
/// through a triplet matrix: columns come out sorted and duplicate
/// coordinates are summed.
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    let mut rows = Vec::with_capacity(matrix.nnz());
    let mut cols = Vec::with_capacity(matrix.nnz());
    let mut values = Vec::with_capacity(matrix.nnz());

    for (row, col, &value) in matrix.triplet_iter() {
        rows.push(row);
        cols.push(col);
        values.push(value);
    }

    TriMat::from_triplets((matrix.n_rows, matrix.n_cols), rows, cols, values).to_csr()
}

/// Converts sprs CsMat to our SparseMatrixCSR format
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrixCSR<T>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(
        shape.0,
        shape.1,
        indptr,
        indices,
        data,
    )
}

/// Expands a CSR matrix into a dense ndarray, summing duplicate coordinates
pub fn to_dense<T>(matrix: &SparseMatrixCSR<T>) -> Array2<T>
where
    T: Copy + Num,
{
    let mut dense = Array2::zeros((matrix.n_rows, matrix.n_cols));

    for (row, col, &value) in matrix.triplet_iter() {
        dense[[row, col]] = dense[[row, col]] + value;
    }

    dense
}
