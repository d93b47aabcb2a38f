//! Run time for profiling the digest functionality
//! Digests a list of random elements a number of times
//!
//! Run it with samply
//!
//! ```sh
//! cargo build --bin profiling_digest
//! samply record target/debug/profiling_digest [iterations]
//! ```
//!

use listhash::digest::{digest_list, digest_list_parallel};
use rand::RngCore as _;
use std::env;

const LIST_LEN: usize = 1000;
const ELEMENT_SIZE: usize = 100;

fn main() {
    // Fetch iterations
    let iterations: usize = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100);

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    let mut rng = rand::thread_rng();
    let mut list = vec![vec![0u8; ELEMENT_SIZE]; LIST_LEN];

    eprintln!(
        "Profiling - digesting {} elements {} times on {} workers...",
        LIST_LEN, iterations, workers
    );

    (0..iterations).for_each(|_| {
        list.iter_mut().for_each(|element| rng.fill_bytes(element));
        let sequential = digest_list(&list);
        let parallel = digest_list_parallel(&list, workers).map(|(digest, _)| digest);
        assert_eq!(sequential, parallel);
    });
}
