//! Coordinate-format staging storage

use crate::constants::{MAX_PREALLOCATED_TRIPLETS, SYMMETRIC_EXPANSION_FACTOR};

/// One stored entry, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Triplet<T> {
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

/// Append-only list of triplets accumulated while parsing.
///
/// Capacity is reserved once from the declared entry count so the parse
/// loop never reallocates on well-formed input.
#[derive(Debug, Clone, Default)]
pub struct TripletBuffer<T> {
    triplets: Vec<Triplet<T>>,
}

impl<T: Copy> TripletBuffer<T> {
    /// Buffer sized for `nnz` stored entries, doubled when every
    /// off-diagonal entry will be mirrored
    pub fn for_entries(nnz: usize, mirrored: bool) -> Self {
        let wanted = if mirrored {
            nnz.saturating_mul(SYMMETRIC_EXPANSION_FACTOR)
        } else {
            nnz
        };

        Self {
            triplets: Vec::with_capacity(wanted.min(MAX_PREALLOCATED_TRIPLETS)),
        }
    }

    pub fn push(&mut self, row: usize, col: usize, value: T) {
        self.triplets.push(Triplet::new(row, col, value));
    }

    pub fn len(&self) -> usize {
        self.triplets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.triplets.capacity()
    }

    /// The entries in insertion order
    pub fn as_slice(&self) -> &[Triplet<T>] {
        &self.triplets
    }

    pub fn into_vec(self) -> Vec<Triplet<T>> {
        self.triplets
    }
}
