//! Centralized constants for the Matrix Market loader
//!
//! Format tokens and vocabulary used by the reader and the writer live here
//! rather than being scattered through the parsing code.

// ============================================================================
// FORMAT TOKENS
// ============================================================================

/// Token that must open the first line of every Matrix Market file
pub const BANNER: &str = "%%MatrixMarket";

/// Lines starting with this character are comments
pub const COMMENT_MARKER: char = '%';

/// Number of whitespace-separated fields following the banner token
pub const BANNER_FIELDS: usize = 4;

/// Number of tokens on the size line (`rows cols nnz`)
pub const DIMENSION_TOKENS: usize = 3;

/// Number of index tokens that open each data line (`row col`)
pub const INDEX_TOKENS: usize = 2;

// ============================================================================
// STAGING
// ============================================================================

/// Growth factor of the staging buffer when symmetry expansion is active.
/// Each stored off-diagonal entry contributes itself and its transpose.
pub const SYMMETRIC_EXPANSION_FACTOR: usize = 2;

/// Upper bound on the capacity reserved up front from the size line.
/// A corrupt `nnz` must not trigger a huge allocation before any entry is read.
pub const MAX_PREALLOCATED_TRIPLETS: usize = 1 << 20;
