//! # Hashing
//!
//! The 512 bit hash primitive behind [entry derivation](crate::subroutines::entry).
//!
//! By default the primitive is SHA3-512. With the `hash_blake3` feature it is BLAKE3 in extendable output mode,
//! read to 64 bytes. Switching primitive changes every digest.

#[cfg(not(feature = "hash_blake3"))]
use tiny_keccak::{Hasher as _, Sha3};

use crate::constants::{params::PARAM_DIGEST_SIZE, types::Hash};

/// Incremental hasher producing a [`Hash`]
#[derive(Clone)]
pub struct EntryHasher {
    #[cfg(not(feature = "hash_blake3"))]
    hasher: Sha3,
    #[cfg(feature = "hash_blake3")]
    hasher: blake3::Hasher,
}

impl EntryHasher {
    #[cfg(not(feature = "hash_blake3"))]
    pub fn new() -> Self {
        EntryHasher {
            hasher: Sha3::v512(),
        }
    }

    #[cfg(feature = "hash_blake3")]
    pub fn new() -> Self {
        EntryHasher {
            hasher: blake3::Hasher::new(),
        }
    }

    /// Hasher already absorbing `prefix`
    pub fn with_prefix(prefix: &[u8]) -> Self {
        let mut hasher = Self::new();
        hasher.update(prefix);
        hasher
    }

    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    #[cfg(not(feature = "hash_blake3"))]
    pub fn finalize(self) -> Hash {
        let mut result = [0u8; PARAM_DIGEST_SIZE];
        self.hasher.finalize(&mut result);
        result
    }

    #[cfg(feature = "hash_blake3")]
    pub fn finalize(self) -> Hash {
        let mut result = [0u8; PARAM_DIGEST_SIZE];
        self.hasher.finalize_xof().fill(&mut result);
        result
    }
}

impl Default for EntryHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash(data)
pub fn hash(data: &[u8]) -> Hash {
    let mut hasher = EntryHasher::new();
    hasher.update(data);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_prefix() {
        let data_1 = [2, 3, 4, 5];
        let data_2 = [1, 2, 3, 4, 5];
        let mut hasher = EntryHasher::with_prefix(&[1]);
        hasher.update(&data_1);
        let hash_1 = hasher.finalize();
        assert!(hash_1.len() == PARAM_DIGEST_SIZE);
        assert_eq!(hash_1, hash(&data_2));
        assert_ne!(hash_1, hash(&data_1));
    }

    #[test]
    fn test_incremental_update() {
        let mut hasher = EntryHasher::new();
        hasher.update(b"Hello ");
        hasher.update(b"world!");
        assert_eq!(hasher.finalize(), hash(b"Hello world!"));
    }

    #[cfg(not(feature = "hash_blake3"))]
    #[test]
    fn test_sha3_512_empty() {
        // SHA3-512("")
        assert_eq!(
            hex::encode(hash(&[])),
            "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
             15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
        );
    }
}
