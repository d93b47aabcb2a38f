//! # Utilities
//!
//! - [`iterator`]: Switches between parallel and sequential iteration with the `parallel` feature.
//! - [`marshalling`]: Contains the trait and test function for serializing and deserializing data.

pub(crate) mod iterator;
pub mod lines;
pub mod marshalling;
