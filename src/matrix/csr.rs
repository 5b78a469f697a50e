//! Compressed Sparse Row (CSR) matrix format implementation

use std::fmt;
use num_traits::Num;

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr (`indptr`): Array of size n_rows + 1 containing offsets into col_idx and values
/// - col_idx (`indices`): Array of size nnz containing column indices of stored entries
/// - values: Array of size nnz containing the stored values
///
/// Entries within a row keep the order in which they were read unless
/// [`sort_indices`](Self::sort_indices) is called. Duplicate coordinates are
/// kept as separate entries.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Stored values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows
    /// * `n_cols` - Number of columns
    /// * `row_ptr` - Row pointers
    /// * `col_idx` - Column indices
    /// * `values` - Stored values
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[n_rows] must equal col_idx.len()
    /// - row_ptr must be non-decreasing
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[n_rows], col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );
        assert!(
            row_ptr.windows(2).all(|w| w[0] <= w[1]),
            "row_ptr must be non-decreasing"
        );

        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Returns the number of stored entries in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Row pointer array
    pub fn indptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Column index array
    pub fn indices(&self) -> &[usize] {
        &self.col_idx
    }

    /// Splits the matrix into its owned `(indptr, indices, values)` arrays
    pub fn into_raw_parts(self) -> (Vec<usize>, Vec<usize>, Vec<T>) {
        (self.row_ptr, self.col_idx, self.values)
    }

    /// Returns an iterator over the stored entries in row i
    ///
    /// Each item is a tuple (col_idx, value)
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Iterates over all stored entries as (row, col, value) in storage order
    pub fn triplet_iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        (0..self.n_rows).flat_map(move |i| self.row_iter(i).map(move |(col, val)| (i, col, val)))
    }

    /// Number of stored entries in row i
    pub fn row_nnz(&self, i: usize) -> usize {
        self.row_ptr[i + 1] - self.row_ptr[i]
    }

    /// Sorts the entries of every row by column index.
    ///
    /// The sort is stable, so duplicates keep their relative order.
    pub fn sort_indices(&mut self) {
        let mut scratch: Vec<(usize, T)> = Vec::new();

        for i in 0..self.n_rows {
            let start = self.row_ptr[i];
            let end = self.row_ptr[i + 1];
            let cols = &mut self.col_idx[start..end];

            if cols.windows(2).all(|w| w[0] <= w[1]) {
                continue;
            }

            let vals = &mut self.values[start..end];
            scratch.clear();
            scratch.extend(cols.iter().copied().zip(vals.iter().copied()));
            scratch.sort_by_key(|&(col, _)| col);

            for (k, &(col, val)) in scratch.iter().enumerate() {
                cols[k] = col;
                vals[k] = val;
            }
        }
    }

    /// True when every row lists its columns in non-decreasing order
    pub fn has_sorted_indices(&self) -> bool {
        (0..self.n_rows).all(|i| {
            self.col_idx[self.row_ptr[i]..self.row_ptr[i + 1]]
                .windows(2)
                .all(|w| w[0] <= w[1])
        })
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.n_rows);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let start = self.row_ptr[i];
                let end = self.row_ptr[i + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for j in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.col_idx[j], self.values[j])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let matrix = SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );

        assert_eq!(matrix.n_rows, 3);
        assert_eq!(matrix.n_cols, 3);
        assert_eq!(matrix.nnz(), 5);
        assert_eq!(matrix.row_nnz(0), 2);
    }

    #[test]
    fn test_row_iter() {
        let matrix = SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );

        let row0: Vec<_> = matrix.row_iter(0).collect();
        assert_eq!(row0, vec![(0, &1), (1, &2)]);

        let row2: Vec<_> = matrix.row_iter(2).collect();
        assert_eq!(row2, vec![(0, &4), (2, &5)]);
    }

    #[test]
    fn test_triplet_iter_walks_rows_directly() {
        // Row 1 is empty, so indptr repeats a value
        let matrix = SparseMatrixCSR::new(
            3, 2,
            vec![0, 1, 1, 2],
            vec![1, 0],
            vec![7, 8],
        );

        let triplets: Vec<_> = matrix.triplet_iter().map(|(r, c, &v)| (r, c, v)).collect();
        assert_eq!(triplets, vec![(0, 1, 7), (2, 0, 8)]);
    }

    #[test]
    fn test_sort_indices() {
        let mut matrix = SparseMatrixCSR::new(
            2, 4,
            vec![0, 3, 5],
            vec![3, 0, 2, 1, 1],
            vec![30, 0, 20, 10, 11],
        );
        assert!(!matrix.has_sorted_indices());

        matrix.sort_indices();

        assert!(matrix.has_sorted_indices());
        assert_eq!(matrix.col_idx, vec![0, 2, 3, 1, 1]);
        assert_eq!(matrix.values, vec![0, 20, 30, 10, 11]);
        assert_eq!(matrix.row_ptr, vec![0, 3, 5]);
    }

    #[test]
    fn test_into_raw_parts() {
        let matrix = SparseMatrixCSR::new(2, 2, vec![0, 1, 2], vec![0, 1], vec![1.5, 2.5]);
        let (indptr, indices, values) = matrix.into_raw_parts();

        assert_eq!(indptr, vec![0, 1, 2]);
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(values, vec![1.5, 2.5]);
    }

    #[test]
    #[should_panic(expected = "row_ptr.len() must be n_rows + 1")]
    fn test_invalid_row_ptr() {
        SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3], // Missing last element
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );
    }

    #[test]
    #[should_panic(expected = "col_idx.len() must equal values.len()")]
    fn test_inconsistent_lengths() {
        SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4], // Missing last element
        );
    }
}
