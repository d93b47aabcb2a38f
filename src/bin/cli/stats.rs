//! Rejection statistics

use clap::{Error, Parser};
use colored::Colorize as _;
use rand::{rngs::StdRng, RngCore as _, SeedableRng as _};

use listhash::{
    constants::params::PARAM_FIELD_SIZE,
    subroutines::entry::{derive_entry_traced, RejectionTrace},
};

use crate::utilities::{clap_err_result, print_title, print_trace};

/// Size of the random inputs in bytes
const SAMPLE_SIZE: usize = 32;

#[derive(Parser)]
#[command(version, about("Measure the rejection rate of entry derivation"), long_about = None)]
pub struct Stats {
    /// Number of random inputs to derive
    #[arg(short, long, default_value_t = 100_000)]
    samples: u64,

    /// Seed of the input generator. Random if not given.
    #[arg(short('S'), long)]
    seed: Option<u64>,
}

impl Stats {
    pub fn measure_rejections(&self) -> Result<(), Error> {
        print_title(&format!("Deriving {} random inputs.", self.samples));

        let seed = match self.seed {
            Some(seed) => seed,
            None => {
                let seed = StdRng::from_entropy().next_u64();
                eprintln!("{}: {}", "Seed".blue(), seed);
                seed
            }
        };
        let mut rng = StdRng::seed_from_u64(seed);

        let mut trace = RejectionTrace::new();
        let mut input = [0u8; SAMPLE_SIZE];
        for _ in 0..self.samples {
            rng.fill_bytes(&mut input);
            clap_err_result!(derive_entry_traced(&input, &mut trace))?;
        }

        print_trace(&trace);

        let expected = 1.0 / PARAM_FIELD_SIZE as f64;
        println!(
            "{}\t{:.6}\t(expected ≈ {:.6})",
            "round 1".bold(),
            trace.rejection_rate(1),
            expected
        );
        println!(
            "{}\t{:.8}\t(expected ≈ {:.8})",
            "round 2".bold(),
            trace.rejection_rate(2),
            expected * expected
        );

        Ok(())
    }
}
