//! Utility functions and helpers

pub mod formats;

use std::collections::TryReserveError;

pub use formats::{from_sprs_csr, to_dense, to_sprs_csr};

/// Computes an exclusive prefix sum (scan) for a vector
///
/// The result has one more element than the input; its last element is the total.
/// Fails only when the output buffer cannot be allocated.
pub fn exclusive_scan(input: &[usize]) -> Result<Vec<usize>, TryReserveError> {
    let mut result = Vec::new();
    result.try_reserve_exact(input.len() + 1)?;
    let mut sum = 0;

    result.push(0); // First element is always 0

    for &val in input {
        sum += val;
        result.push(sum);
    }

    Ok(result)
}
