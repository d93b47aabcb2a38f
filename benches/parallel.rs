#![allow(dead_code)]
use criterion::{measurement::Measurement, BenchmarkId, Criterion};
use listhash::{
    arith::gf256::Matrix,
    digest::{digest_list, digest_list_parallel},
    subroutines::{
        entry::{derive_entries, RejectionTrace},
        reduce::{reduce_parallel, reduce_sequential},
    },
};
use nist_pqc_seeded_rng::{NistPqcAes256CtrRng, Seed};
use rand::{RngCore as _, SeedableRng as _};

const LIST_LEN: usize = 10_000;

/// Sequential against chunked reduction and digests for a growing number of workers
pub(crate) fn parallel_benchmark<M: Measurement>(c: &mut Criterion<M>) {
    let mut group = c.benchmark_group("parallel");
    let mut rng = NistPqcAes256CtrRng::from_seed(Seed::default());

    let list: Vec<[u8; 32]> = (0..LIST_LEN)
        .map(|_| {
            let mut element = [0u8; 32];
            rng.fill_bytes(&mut element);
            element
        })
        .collect();
    let matrices: Vec<Matrix> =
        derive_entries(&list, &mut RejectionTrace::new()).unwrap();

    group.bench_function("reduce_sequential", |b| {
        b.iter(|| reduce_sequential(&matrices))
    });
    group.bench_function("digest_list", |b| b.iter(|| digest_list(&list)));

    for workers in [2, 4, 8, 16] {
        group.bench_with_input(
            BenchmarkId::new("reduce_parallel", workers),
            &workers,
            |b, &workers| b.iter(|| reduce_parallel(&matrices, workers)),
        );
        group.bench_with_input(
            BenchmarkId::new("digest_list_parallel", workers),
            &workers,
            |b, &workers| b.iter(|| digest_list_parallel(&list, workers)),
        );
    }
    group.finish();
}
