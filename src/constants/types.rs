use super::params::{PARAM_DIGEST_SIZE, PARAM_MATRIX_SIZE};

/// Output of the hash primitive
pub type Hash = [u8; PARAM_DIGEST_SIZE];

/// A matrix in its row-major byte form, one byte per entry
pub type MatrixBytes = [u8; PARAM_MATRIX_SIZE];
