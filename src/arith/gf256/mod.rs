//! # Galois Field 256
//!
//! The field GF(2^8) with the generator polynomial x^8 + x^4 + x^3 + x^2 + 1 (`0x11D`).
//!
//! - [`gf256_arith`]: the field element [`GF256`] and its [`FieldArith`](crate::arith::FieldArith) implementation.
//! - [`gf256_vector`]: row operations on slices of field elements.
//! - [`gf256_matrices`]: 8×8 [`Matrix`] multiplication, determinant and inversion.

pub mod gf256_arith;
pub mod gf256_matrices;
pub mod gf256_vector;

pub use gf256_arith::GF256;
pub use gf256_matrices::Matrix;
