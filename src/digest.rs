//! # List digests
//!
//! End to end digests of lists of byte buffers: every element is [derived](crate::subroutines::entry) into an
//! invertible matrix and the matrices are [reduced](crate::subroutines::reduce) in list order.
//!
//! The digest of a concatenation is the product of the digests, so a list can be digested in pieces, possibly on
//! different machines, and the pieces combined afterwards. [`ListDigest`] keeps a running digest that supports
//! this directly.

use std::fmt::Display;

use crate::{
    arith::gf256::Matrix,
    constants::types::MatrixBytes,
    error::{ListHashError, Result},
    subroutines::{
        entry::{derive_entry_traced, RejectionTrace},
        reduce::{map_chunks, reduce_sequential, repeat},
    },
    utils::marshalling::Marshalling,
};

/// Digest of `elements` in order
pub fn digest_list<T: AsRef<[u8]>>(elements: &[T]) -> Result<Matrix> {
    digest_list_traced(elements, &mut RejectionTrace::new())
}

/// Digest of `elements` in order, recording rejected candidates in `trace`
pub fn digest_list_traced<T: AsRef<[u8]>>(
    elements: &[T],
    trace: &mut RejectionTrace,
) -> Result<Matrix> {
    elements.iter().try_fold(Matrix::identity(), |acc, element| {
        Ok(acc.multiply(&derive_entry_traced(element.as_ref(), trace)?))
    })
}

/// Digest of `elements` computed in `worker_count` chunks.
///
/// Each chunk derives and reduces its own elements with a local [`RejectionTrace`]. The partial digests are
/// combined in chunk order and the traces are merged.
pub fn digest_list_parallel<T: AsRef<[u8]> + Sync>(
    elements: &[T],
    worker_count: usize,
) -> Result<(Matrix, RejectionTrace)> {
    let partials = map_chunks(
        elements,
        worker_count,
        Ok((Matrix::zero(), RejectionTrace::new())),
        |chunk| {
            let mut trace = RejectionTrace::new();
            let digest = digest_list_traced(chunk, &mut trace)?;
            Ok((digest, trace))
        },
    )?;

    let mut trace = RejectionTrace::new();
    let mut digests = Vec::with_capacity(partials.len());
    for partial in partials {
        let (digest, chunk_trace) = partial?;
        trace.merge(&chunk_trace);
        digests.push(digest);
    }

    Ok((reduce_sequential(&digests), trace))
}

/// Running digest of a list.
///
/// Starts as the digest of the empty list. Two digests are equal when their matrices are equal; the rejection
/// trace is diagnostic only.
#[derive(Clone, Debug)]
pub struct ListDigest {
    matrix: Matrix,
    trace: RejectionTrace,
}

impl ListDigest {
    pub fn new() -> Self {
        ListDigest {
            matrix: Matrix::identity(),
            trace: RejectionTrace::new(),
        }
    }

    /// Wrap an already computed digest. Digests are products of invertible matrices, so a singular matrix is rejected.
    pub fn from_matrix(matrix: Matrix) -> Result<Self> {
        if !matrix.is_invertible() {
            return Err(ListHashError::SingularMatrix);
        }
        Ok(ListDigest {
            matrix,
            trace: RejectionTrace::new(),
        })
    }

    /// Digest of a whole list
    pub fn of<T: AsRef<[u8]>>(elements: &[T]) -> Result<Self> {
        let mut digest = Self::new();
        digest.extend(elements)?;
        Ok(digest)
    }

    /// Append one element to the list
    pub fn push(&mut self, element: &[u8]) -> Result<()> {
        let entry = derive_entry_traced(element, &mut self.trace)?;
        self.matrix = self.matrix.multiply(&entry);
        Ok(())
    }

    pub fn extend<T: AsRef<[u8]>>(&mut self, elements: &[T]) -> Result<()> {
        let digest = digest_list_traced(elements, &mut self.trace)?;
        self.matrix = self.matrix.multiply(&digest);
        Ok(())
    }

    /// Append `element` `n` times
    pub fn push_repeated(&mut self, element: &[u8], n: u64) -> Result<()> {
        let entry = derive_entry_traced(element, &mut self.trace)?;
        self.matrix = self.matrix.multiply(&repeat(&entry, n));
        Ok(())
    }

    /// Digest of this list followed by the list of `other`
    pub fn concat(&self, other: &ListDigest) -> ListDigest {
        let mut trace = self.trace.clone();
        trace.merge(&other.trace);
        ListDigest {
            matrix: self.matrix.multiply(&other.matrix),
            trace,
        }
    }

    pub fn append(&mut self, other: &ListDigest) {
        self.matrix = self.matrix.multiply(&other.matrix);
        self.trace.merge(&other.trace);
    }

    /// Digest of this list without a leading part whose digest is `prefix`
    pub fn strip_prefix(&self, prefix: &ListDigest) -> Result<ListDigest> {
        Ok(ListDigest {
            matrix: prefix.matrix.inverse()?.multiply(&self.matrix),
            trace: self.trace.clone(),
        })
    }

    /// Digest of this list without a trailing part whose digest is `suffix`
    pub fn strip_suffix(&self, suffix: &ListDigest) -> Result<ListDigest> {
        Ok(ListDigest {
            matrix: self.matrix.multiply(&suffix.matrix.inverse()?),
            trace: self.trace.clone(),
        })
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn trace(&self) -> &RejectionTrace {
        &self.trace
    }

    pub fn to_bytes(&self) -> MatrixBytes {
        self.matrix.to_bytes()
    }
}

impl Default for ListDigest {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ListDigest {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}

impl Eq for ListDigest {}

impl Marshalling<MatrixBytes> for ListDigest {
    fn serialise(&self) -> MatrixBytes {
        self.to_bytes()
    }

    fn parse(serialised: &MatrixBytes) -> Result<Self> {
        Self::from_matrix(Matrix::from_bytes(serialised))
    }
}

impl Display for ListDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{subroutines::entry::derive_entry, utils::marshalling::test_marshalling};

    fn elements(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("element-{}", i)).collect()
    }

    #[cfg(not(feature = "hash_blake3"))]
    #[test]
    fn test_hello_world_list_vector() {
        let expected: MatrixBytes = [
            216, 3, 113, 185, 149, 230, 240, 91, 128, 57, 51, 2, 242, 50, 17, 52, 83, 216, 95, 124,
            243, 206, 159, 45, 7, 228, 209, 44, 179, 32, 232, 76, 220, 80, 236, 162, 245, 208, 197,
            121, 149, 35, 31, 205, 173, 140, 58, 110, 154, 9, 244, 93, 106, 179, 0, 100, 56, 156,
            150, 94, 214, 3, 18, 68,
        ];
        let digest = digest_list(&["Hello", "world"]).unwrap();
        assert_eq!(digest.to_bytes(), expected);
        assert_ne!(digest_list(&["world", "Hello"]).unwrap().to_bytes(), expected);
    }

    #[test]
    fn test_empty_and_singleton() {
        let empty: [&[u8]; 0] = [];
        assert_eq!(digest_list(&empty), Ok(Matrix::identity()));
        assert_eq!(digest_list(&["A"]), derive_entry(b"A"));
        assert_eq!(ListDigest::new().matrix(), &Matrix::identity());
    }

    #[test]
    fn test_parallel_equals_sequential() {
        let list = elements(23);
        let expected = digest_list(&list).unwrap();
        for workers in 1..=list.len() + 2 {
            let (digest, trace) = digest_list_parallel(&list, workers).unwrap();
            assert_eq!(digest, expected, "Failed for {} workers", workers);
            assert_eq!(trace.derivations(), list.len() as u64);
        }
        let (digest, trace) = digest_list_parallel(&list, usize::MAX).unwrap();
        assert_eq!(digest, expected);
        assert_eq!(trace.derivations(), list.len() as u64);
        assert_eq!(
            digest_list_parallel(&list, 0).map(|(digest, _)| digest),
            Err(ListHashError::InvalidWorkerCount)
        );
    }

    #[test]
    fn test_incremental_matches_list() {
        let list = elements(10);
        let mut digest = ListDigest::new();
        for element in list.iter() {
            digest.push(element.as_bytes()).unwrap();
        }
        assert_eq!(digest.matrix(), &digest_list(&list).unwrap());
        assert_eq!(digest, ListDigest::of(&list).unwrap());
        assert_eq!(digest.trace().derivations(), 10);
    }

    #[test]
    fn test_concat_and_strip() {
        let list = elements(12);
        let (head, tail) = list.split_at(5);
        let head_digest = ListDigest::of(head).unwrap();
        let tail_digest = ListDigest::of(tail).unwrap();
        let full = ListDigest::of(&list).unwrap();

        assert_eq!(head_digest.concat(&tail_digest), full);
        assert_ne!(tail_digest.concat(&head_digest), full);

        let mut appended = head_digest.clone();
        appended.append(&tail_digest);
        assert_eq!(appended, full);
        assert_eq!(appended.trace().derivations(), 12);

        assert_eq!(full.strip_prefix(&head_digest), Ok(tail_digest.clone()));
        assert_eq!(full.strip_suffix(&tail_digest), Ok(head_digest));
        assert_ne!(full.strip_prefix(&tail_digest), Ok(tail_digest));
    }

    #[test]
    fn test_push_repeated() {
        let mut repeated = ListDigest::new();
        repeated.push(b"start").unwrap();
        repeated.push_repeated(b"x", 300).unwrap();

        let mut expected = ListDigest::new();
        expected.push(b"start").unwrap();
        for _ in 0..300 {
            expected.push(b"x").unwrap();
        }
        assert_eq!(repeated, expected);

        let mut none = ListDigest::new();
        none.push_repeated(b"x", 0).unwrap();
        assert_eq!(none, ListDigest::new());
    }

    #[test]
    fn test_digest_marshalling() {
        test_marshalling(
            ListDigest::of(&["A", "B"]).unwrap(),
            ListDigest::of(&["B", "A"]).unwrap(),
        );
    }

    #[test]
    fn test_parse_singular() {
        assert_eq!(
            ListDigest::parse(&[0u8; 64]),
            Err(ListHashError::SingularMatrix)
        );
        assert_eq!(
            ListDigest::parse(&Matrix::identity().to_bytes()),
            Ok(ListDigest::new())
        );
    }

    #[test]
    fn test_display() {
        let digest = ListDigest::of(&["A"]).unwrap();
        assert_eq!(digest.to_string(), hex::encode(digest.to_bytes()));
        assert_eq!(digest.to_string().len(), 128);
    }
}
