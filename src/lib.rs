//! # listhash
//!
//! Order sensitive, parallelisable digests of lists of byte buffers.
//!
//! Every element is mapped to an invertible 8×8 matrix over GF(256) and the digest of a list is the product of
//! its element matrices in list order. Matrix multiplication is associative, so a list can be digested in
//! contiguous chunks on several workers, and the partial digests combined in order.
//!
//! - [`arith`]: GF(256) arithmetic, vectors and matrices.
//! - [`subroutines`]: hashing, entry derivation and reduction.
//! - [`digest`]: end to end digests and the incremental [`ListDigest`](digest::ListDigest).

pub mod arith;
pub mod constants;
pub mod digest;
pub mod error;
pub mod subroutines;
pub mod utils;

pub use digest::{digest_list, digest_list_parallel, ListDigest};
pub use error::ListHashError;

#[cfg(test)]
mod tests {
    use crate::constants::params::{PARAM_DIGEST_SIZE, PARAM_MATRIX_SIZE};

    #[test]
    fn print_parameters() {
        println!(
            "Running tests with {} byte digests mapped to {} byte matrices",
            PARAM_DIGEST_SIZE, PARAM_MATRIX_SIZE
        );
    }
}
