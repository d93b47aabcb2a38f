//! # Constants
//!
//! The parameters of the list digest construction are exposed through the [`params`] module.
//!
//! The [`types`] module contains the byte-level types used throughout the crate like
//! [`crate::constants::types::Hash`] and [`crate::constants::types::MatrixBytes`].
//!

pub mod params;
pub mod types;
