//! # Reduction
//!
//! Combines an ordered sequence of [`Matrix`] into a single digest by multiplying left to right.
//!
//! Matrix multiplication is associative, so the sequence can be split into contiguous chunks that are reduced
//! independently and then combined. It is not commutative, so the partial results must be combined in the order
//! their chunks appear in the sequence.
//!
//! With the `parallel` feature the chunks are reduced on the rayon thread pool.

use std::ops::Range;

use tracing::trace;

#[cfg(feature = "parallel")]
use crate::utils::iterator::{IndexedParallelIterator as _, ParallelIterator as _};
use crate::{
    arith::gf256::Matrix,
    error::{ListHashError, Result},
    utils::iterator::get_mut_iterator,
};

/// Left fold of `matrices` with matrix multiplication. The empty sequence reduces to the identity.
pub fn reduce_sequential(matrices: &[Matrix]) -> Matrix {
    matrices
        .iter()
        .fold(Matrix::identity(), |acc, matrix| acc.multiply(matrix))
}

/// Split `0..len` into `worker_count` contiguous ranges in order.
///
/// Sizes differ by at most one and the remainder goes to the earliest ranges. Trailing ranges are empty when
/// `worker_count > len`.
pub fn chunk_ranges(len: usize, worker_count: usize) -> Result<Vec<Range<usize>>> {
    if worker_count == 0 {
        return Err(ListHashError::InvalidWorkerCount);
    }

    let base = len / worker_count;
    let remainder = len % worker_count;

    let mut start = 0;
    Ok((0..worker_count)
        .map(|i| {
            let size = base + usize::from(i < remainder);
            let range = start..start + size;
            start += size;
            range
        })
        .collect())
}

/// Apply `f` to each chunk of `items` split over `worker_count` workers.
///
/// Chunks past the end of `items` would only reduce to the identity, so at most `max(items.len(), 1)` chunks are
/// formed. Every chunk writes to its own slot, initialised with `init`. The slots are returned in chunk order once
/// every chunk is done.
pub(crate) fn map_chunks<T, R, F>(
    items: &[T],
    worker_count: usize,
    init: R,
    f: F,
) -> Result<Vec<R>>
where
    T: Sync,
    R: Clone + Send,
    F: Fn(&[T]) -> R + Send + Sync,
{
    if worker_count == 0 {
        return Err(ListHashError::InvalidWorkerCount);
    }
    let chunk_count = worker_count.min(items.len().max(1));
    let ranges = chunk_ranges(items.len(), chunk_count)?;
    let mut slots = vec![init; chunk_count];

    get_mut_iterator(&mut slots)
        .zip(ranges)
        .for_each(|(slot, range)| {
            trace!(start = range.start, end = range.end, "Reducing chunk");
            *slot = f(&items[range]);
        });

    Ok(slots)
}

/// Reduce `matrices` in `worker_count` chunks and combine the partial products in chunk order.
///
/// Equal to [`reduce_sequential`] for every `worker_count >= 1`.
pub fn reduce_parallel(matrices: &[Matrix], worker_count: usize) -> Result<Matrix> {
    let partials = map_chunks(matrices, worker_count, Matrix::zero(), reduce_sequential)?;
    Ok(reduce_sequential(&partials))
}

/// `m` multiplied with itself `n` times by repeated squaring
pub fn repeat(m: &Matrix, n: u64) -> Matrix {
    let mut result = Matrix::identity();
    let mut base = *m;
    let mut n = n;
    while n > 0 {
        if n & 1 == 1 {
            result = result.multiply(&base);
        }
        n >>= 1;
        if n > 0 {
            base = base.multiply(&base);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::{
        arith::gf256::gf256_matrices::tests::random_invertible_matrix,
        subroutines::entry::derive_entry,
    };

    fn derived_sequence(len: usize) -> Vec<Matrix> {
        (0..len)
            .map(|i| derive_entry(format!("element-{}", i).as_bytes()).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_and_singleton() {
        assert_eq!(reduce_sequential(&[]), Matrix::identity());
        assert_eq!(reduce_parallel(&[], 4), Ok(Matrix::identity()));

        let m = derive_entry(b"A").unwrap();
        assert_eq!(reduce_sequential(&[m]), m);
        assert_eq!(reduce_parallel(&[m], 1), Ok(m));
        assert_eq!(reduce_parallel(&[m], 3), Ok(m));
    }

    #[test]
    fn test_chunk_ranges() {
        assert_eq!(chunk_ranges(10, 3), Ok(vec![0..4, 4..7, 7..10]));
        assert_eq!(chunk_ranges(3, 5), Ok(vec![0..1, 1..2, 2..3, 3..3, 3..3]));
        assert_eq!(chunk_ranges(0, 2), Ok(vec![0..0, 0..0]));
        assert_eq!(chunk_ranges(5, 0), Err(ListHashError::InvalidWorkerCount));

        for len in 0..40 {
            for workers in 1..12 {
                let ranges = chunk_ranges(len, workers).unwrap();
                assert_eq!(ranges.len(), workers);
                // Contiguous and covering
                let mut next = 0;
                for range in ranges.iter() {
                    assert_eq!(range.start, next);
                    next = range.end;
                }
                assert_eq!(next, len);
                // Balanced with the larger chunks first
                let sizes: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
                assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
                assert!(sizes[0] - sizes[workers - 1] <= 1);
            }
        }
    }

    #[test]
    fn test_parallel_equals_sequential() {
        let sequence = derived_sequence(17);
        let expected = reduce_sequential(&sequence);
        for workers in 1..=sequence.len() + 3 {
            assert_eq!(
                reduce_parallel(&sequence, workers),
                Ok(expected),
                "Failed for {} workers",
                workers
            );
        }
        assert_eq!(
            reduce_parallel(&sequence, 0),
            Err(ListHashError::InvalidWorkerCount)
        );
    }

    #[test]
    fn test_parallel_equals_sequential_random() {
        let mut rng = StdRng::seed_from_u64(7);
        let sequence: Vec<Matrix> = (0..100).map(|_| random_invertible_matrix(&mut rng)).collect();
        let expected = reduce_sequential(&sequence);
        for workers in [1, 2, 3, 7, 16, 99, 100, 128] {
            assert_eq!(reduce_parallel(&sequence, workers), Ok(expected));
        }
    }

    #[test]
    fn test_more_workers_than_elements() {
        let m = derive_entry(b"A").unwrap();
        assert_eq!(reduce_parallel(&[m], usize::MAX), Ok(m));
        assert_eq!(reduce_parallel(&[], usize::MAX), Ok(Matrix::identity()));

        let sequence = derived_sequence(5);
        assert_eq!(
            reduce_parallel(&sequence, 1 << 40),
            Ok(reduce_sequential(&sequence))
        );

        let slots = map_chunks(&sequence, usize::MAX, Matrix::zero(), reduce_sequential).unwrap();
        assert_eq!(slots.len(), sequence.len());
        let empty: [Matrix; 0] = [];
        let slots = map_chunks(&empty, 8, Matrix::zero(), reduce_sequential).unwrap();
        assert_eq!(slots, vec![Matrix::identity()]);
    }

    #[test]
    fn test_chunk_order_matters() {
        let sequence = derived_sequence(8);
        let mut partials = map_chunks(&sequence, 2, Matrix::zero(), reduce_sequential).unwrap();
        assert_eq!(reduce_sequential(&partials), reduce_sequential(&sequence));
        partials.reverse();
        assert_ne!(reduce_sequential(&partials), reduce_sequential(&sequence));
    }

    #[test]
    fn test_order_sensitivity() {
        let sequence = derived_sequence(6);
        let expected = reduce_sequential(&sequence);
        for i in 0..sequence.len() - 1 {
            let mut swapped = sequence.clone();
            swapped.swap(i, i + 1);
            assert_ne!(reduce_sequential(&swapped), expected, "Swap at {} not detected", i);
        }
    }

    #[test]
    fn test_abc_scenario() {
        let a = derive_entry(b"A").unwrap();
        let b = derive_entry(b"B").unwrap();
        let c = derive_entry(b"C").unwrap();

        assert_eq!((a * b) * c, a * (b * c));
        assert_ne!(a * b, b * a);
        assert_eq!(reduce_sequential(&[a, b, c]), a * b * c);
    }

    #[test]
    fn test_repeat() {
        let a = derive_entry(b"A").unwrap();
        assert_eq!(repeat(&a, 0), Matrix::identity());
        assert_eq!(repeat(&a, 1), a);
        assert_eq!(repeat(&a, 2), a * a);
        assert_eq!(repeat(&a, 1024), reduce_sequential(&vec![a; 1024]));
        assert_eq!(repeat(&a, 1000), reduce_sequential(&vec![a; 1000]));
        assert_eq!(repeat(&a, 37) * repeat(&a, 63), repeat(&a, 100));
        assert_eq!(a.pow(5), repeat(&a, 5));
    }

    #[test]
    fn test_digest_is_invertible() {
        let sequence = derived_sequence(20);
        assert!(reduce_sequential(&sequence).is_invertible());
    }
}
