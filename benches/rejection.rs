#![allow(dead_code)]
use std::{
    env,
    io::{stderr, Write},
};

use colored::Colorize as _;
use criterion::{measurement::Measurement, Criterion};
use listhash::{
    constants::params::PARAM_FIELD_SIZE,
    subroutines::entry::{derive_entry_traced, RejectionTrace},
};
use nist_pqc_seeded_rng::{NistPqcAes256CtrRng, Seed};
use rand::{RngCore as _, SeedableRng as _};
use stats_ci::{Confidence, StatisticsOps};

const ITER: usize = 250;
const BATCH: usize = 1000;

pub(crate) fn rejection_rate_benchmark<M: Measurement>(_c: &mut Criterion<M>) {
    // Only run this benchmark if the "rejection" id is passed as an argument
    let mut args = env::args_os();
    if !args.any(|arg| arg == "rejection") {
        return;
    }

    let mut rng = NistPqcAes256CtrRng::from_seed(Seed::default());
    let mut input = [0u8; 32];

    let mut stats = stats_ci::mean::Arithmetic::<f64>::new();

    eprint!(
        "Measuring rejection rate for {} batches of {} derivations",
        ITER, BATCH
    );
    stderr().flush().unwrap();

    let mut trace = RejectionTrace::new();
    (0..ITER).for_each(|_| {
        trace.reset();
        for _ in 0..BATCH {
            rng.fill_bytes(&mut input);
            derive_entry_traced(&input, &mut trace).unwrap();
        }
        stats
            .append(trace.rejection_rate(1))
            .expect("Could not append to stats");
    });
    eprint!("\r{}", "\x1B[2K"); // Clear the line

    let conf = Confidence::new(0.95);
    let ci = stats.ci_mean(conf).unwrap();

    println!(
        "{}{}rate:   [{} {} {}] {} {}",
        "rejection/round_1".green(),
        " ".repeat(10),
        format!("{:.5}", ci.low().unwrap()).bright_black(),
        format!("{:.5}", stats.sample_mean()).bold(),
        format!("{:.5}", ci.high().unwrap()).bright_black(),
        format!("ci: {:.0}%", conf.percent()).bright_black(),
        format!("expected: {:.5}", 1.0 / PARAM_FIELD_SIZE as f64).bright_black(),
    );
}
