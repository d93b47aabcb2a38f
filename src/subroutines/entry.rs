//! # Entry derivation
//!
//! Maps a list element to an invertible [`Matrix`] by rejection sampling.
//!
//! The first candidate is `Hash(tag ∥ 0x00 ∥ element)` with the [`DOMAIN_SEPARATION_TAG`]. Its 64 bytes are read
//! row-major into a matrix. If the matrix is singular the next candidate is the hash of the previous candidate,
//! never of the element again, so no rejected candidate can be the entry of another element.
//!
//! A candidate is singular with probability close to 1/256. Derivation gives up after [`PARAM_MAX_ROUNDS`]
//! candidates with [`ListHashError::DerivationExhausted`].
//!
//! The number of rejected candidates per round is collected in a [`RejectionTrace`] owned by the caller.

use tracing::{debug, warn};

use crate::{
    arith::gf256::Matrix,
    constants::{
        params::{DOMAIN_SEPARATION_TAG, DOMAIN_SEPARATION_TERMINATOR, PARAM_MAX_ROUNDS},
        types::Hash,
    },
    error::{ListHashError, Result},
    subroutines::hashing::{hash, EntryHasher},
};

/// Per-round count of rejected candidates.
///
/// Round `i` counts the derivations whose `i`-th candidate was singular, i.e. the derivations that needed more than
/// `i` rounds. Traces from different workers are combined with [`RejectionTrace::merge`].
#[derive(Clone, PartialEq, Eq)]
pub struct RejectionTrace {
    derivations: u64,
    rejections: [u64; PARAM_MAX_ROUNDS],
}

impl RejectionTrace {
    pub fn new() -> Self {
        RejectionTrace {
            derivations: 0,
            rejections: [0; PARAM_MAX_ROUNDS],
        }
    }

    pub fn record_derivation(&mut self) {
        self.derivations += 1;
    }

    /// Count a rejected candidate in `round`, starting at 1. Rounds outside `1..=PARAM_MAX_ROUNDS` are ignored.
    pub fn record_rejection(&mut self, round: usize) {
        if let Some(count) = round
            .checked_sub(1)
            .and_then(|index| self.rejections.get_mut(index))
        {
            *count += 1;
        }
    }

    /// Number of derivations started
    pub fn derivations(&self) -> u64 {
        self.derivations
    }

    pub fn rejections_at(&self, round: usize) -> u64 {
        round
            .checked_sub(1)
            .and_then(|index| self.rejections.get(index))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_rejections(&self) -> u64 {
        self.rejections.iter().sum()
    }

    /// Fraction of derivations that needed more than `round` rounds
    pub fn rejection_rate(&self, round: usize) -> f64 {
        if self.derivations == 0 {
            return 0.0;
        }
        self.rejections_at(round) as f64 / self.derivations as f64
    }

    /// Rounds with at least one rejection as `(round, count)`
    pub fn rounds(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.rejections
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(index, count)| (index + 1, *count))
    }

    pub fn merge(&mut self, other: &RejectionTrace) {
        self.derivations += other.derivations;
        for (count, other_count) in self.rejections.iter_mut().zip(other.rejections.iter()) {
            *count += *other_count;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RejectionTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RejectionTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RejectionTrace")
            .field("derivations", &self.derivations)
            .field("rejections", &self.rounds().collect::<Vec<_>>())
            .finish()
    }
}

/// The first candidate `Hash(tag ∥ terminator ∥ data)`
pub(crate) fn initial_candidate(data: &[u8]) -> Hash {
    let mut hasher = EntryHasher::with_prefix(DOMAIN_SEPARATION_TAG);
    hasher.update(&[DOMAIN_SEPARATION_TERMINATOR]);
    hasher.update(data);
    hasher.finalize()
}

/// Walk the candidate chain from `candidate` until an invertible matrix is found, using `rehash` for the next
/// candidate.
pub(crate) fn rejection_sample<F>(
    mut candidate: Hash,
    rehash: F,
    trace: &mut RejectionTrace,
) -> Result<Matrix>
where
    F: Fn(&Hash) -> Hash,
{
    for round in 1..=PARAM_MAX_ROUNDS {
        let matrix = Matrix::from_bytes(&candidate);
        if matrix.is_invertible() {
            return Ok(matrix);
        }
        trace.record_rejection(round);
        debug!(round, "Rejected singular entry candidate");
        candidate = rehash(&candidate);
    }

    warn!(
        rounds = PARAM_MAX_ROUNDS,
        "No invertible entry candidate found"
    );
    Err(ListHashError::DerivationExhausted {
        rounds: PARAM_MAX_ROUNDS,
    })
}

/// Derive the entry matrix of `data`
pub fn derive_entry(data: &[u8]) -> Result<Matrix> {
    derive_entry_traced(data, &mut RejectionTrace::new())
}

/// Derive the entry matrix of `data` and record rejected candidates in `trace`
pub fn derive_entry_traced(data: &[u8], trace: &mut RejectionTrace) -> Result<Matrix> {
    trace.record_derivation();
    rejection_sample(initial_candidate(data), |candidate| hash(candidate), trace)
}

/// Derive the entries of all `elements` in order
pub fn derive_entries<T: AsRef<[u8]>>(
    elements: &[T],
    trace: &mut RejectionTrace,
) -> Result<Vec<Matrix>> {
    elements
        .iter()
        .map(|element| derive_entry_traced(element.as_ref(), trace))
        .collect()
}
