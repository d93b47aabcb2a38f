//! # Subroutines
//!
//! The building blocks of a list digest.
//!
//! - [`hashing`]: The 512 bit hash primitive.
//! - [`entry`]: Derivation of an invertible matrix from a list element by rejection sampling.
//! - [`reduce`]: Ordered sequential and chunked reduction of matrices.

pub mod entry;
pub mod hashing;
pub mod reduce;
