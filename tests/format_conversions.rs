//! Integration tests for format conversions with external libraries

use std::io::Cursor;

use rsmtxmkt::utils::{from_sprs_csr, to_dense, to_sprs_csr};
use rsmtxmkt::{read_matrix_market_as, LoadOptions, SparseMatrixCSR};

/// Loads a 5x5 matrix with a specific pattern:
/// [ 1.0  0.0  2.0  0.0  0.0 ]
/// [ 0.0  3.0  0.0  0.0  4.0 ]
/// [ 0.0  0.0  5.0  0.0  0.0 ]
/// [ 6.0  0.0  0.0  7.0  0.0 ]
/// [ 0.0  0.0  8.0  0.0  9.0 ]
fn load_test_matrix() -> SparseMatrixCSR<f64> {
    let text = "%%MatrixMarket matrix coordinate real general\n\
                5 5 9\n\
                4 4 7.0\n\
                1 3 2.0\n\
                1 1 1.0\n\
                2 5 4.0\n\
                2 2 3.0\n\
                3 3 5.0\n\
                4 1 6.0\n\
                5 5 9.0\n\
                5 3 8.0\n";

    read_matrix_market_as(Cursor::new(text), &LoadOptions::default()).unwrap()
}

#[test]
fn test_csr_to_sprs_conversion() {
    let matrix = load_test_matrix();

    // Convert to sprs format
    let sprs_mat = to_sprs_csr(&matrix);

    // Verify dimensions and nnz
    assert_eq!(sprs_mat.rows(), matrix.n_rows);
    assert_eq!(sprs_mat.cols(), matrix.n_cols);
    assert_eq!(sprs_mat.nnz(), matrix.nnz());

    // Verify it's in CSR format
    assert!(sprs_mat.is_csr());

    // Verify values by checking a few specific elements
    assert_eq!(sprs_mat.get(0, 0), Some(&1.0));
    assert_eq!(sprs_mat.get(0, 2), Some(&2.0));
    assert_eq!(sprs_mat.get(1, 1), Some(&3.0));
    assert_eq!(sprs_mat.get(3, 3), Some(&7.0));
    assert_eq!(sprs_mat.get(4, 2), Some(&8.0));

    // Check that zeros are really zeros
    assert_eq!(sprs_mat.get(0, 1), None);
    assert_eq!(sprs_mat.get(1, 0), None);
    assert_eq!(sprs_mat.get(2, 3), None);
}

#[test]
fn test_sprs_round_trip_sorts_rows() {
    let matrix = load_test_matrix();
    assert!(!matrix.has_sorted_indices());

    let roundtrip = from_sprs_csr(to_sprs_csr(&matrix));

    let mut sorted = matrix.clone();
    sorted.sort_indices();
    assert_eq!(roundtrip, sorted);
}

#[test]
fn test_sprs_to_csr_conversion() {
    // Create a sprs matrix directly
    let mut trip = sprs::TriMat::new((4, 4));
    trip.add_triplet(0, 0, 1.0);
    trip.add_triplet(0, 2, 2.0);
    trip.add_triplet(1, 1, 3.0);
    trip.add_triplet(2, 0, 4.0);
    trip.add_triplet(3, 3, 5.0);

    let sprs_mat = trip.to_csr();

    // Convert to our format
    let matrix = from_sprs_csr(sprs_mat);

    assert_eq!(matrix.n_rows, 4);
    assert_eq!(matrix.n_cols, 4);
    assert_eq!(matrix.nnz(), 5);
    assert_eq!(matrix.row_ptr, vec![0, 2, 3, 4, 5]);
    assert_eq!(matrix.col_idx, vec![0, 2, 1, 0, 3]);
}

#[test]
fn test_dense_view() {
    let matrix = load_test_matrix();
    let dense = to_dense(&matrix);

    let expected = ndarray::arr2(&[
        [1.0, 0.0, 2.0, 0.0, 0.0],
        [0.0, 3.0, 0.0, 0.0, 4.0],
        [0.0, 0.0, 5.0, 0.0, 0.0],
        [6.0, 0.0, 0.0, 7.0, 0.0],
        [0.0, 0.0, 8.0, 0.0, 9.0],
    ]);

    assert_eq!(dense, expected);
}
