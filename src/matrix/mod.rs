// Matrix data structures and coordinate-to-CSR conversion

pub mod config;
pub mod conversion;
pub mod csr;
pub mod triplet;
pub mod value;

pub use config::LoadOptions;
pub use conversion::triplets_to_csr;
pub use csr::SparseMatrixCSR;
pub use triplet::{Triplet, TripletBuffer};
pub use value::MatrixValue;
