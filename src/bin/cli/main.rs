//! # listhash Command Line Interface
//!
//! ```
//! Usage: listhash [OPTIONS] [COMMAND]
//!
//! Commands:
//!   entry       Derive the entry matrix of one element
//!   digest      Digest a list of elements
//!   repeat      Digest one element repeated N times
//!   combine     Combine digests of consecutive lists
//!   stats       Measure the rejection rate of entry derivation
//!   parameters  Print the parameters of the construction
//!   help        Print this message or the help of the given subcommand(s)
//!
//! Options:
//!   -v, --verbose...  Log library events to stderr
//!   -h, --help        Print help
//!   -V, --version     Print version
//! ```
//!
//! ## Build the CLI
//!
//! ```
//! $ cargo build --release --bin listhash
//! ```
//!
//! ## Digest
//!
//! ```
//! $ listhash digest Hello world
//! Digesting 2 elements.
//! Workers: 8
//! Derivations: 2
//! Rejected candidates: 0
//! d80371b995e6f05b80393302f2321134...
//! ```
//!
//! Digests of consecutive parts of a list combine into the digest of the whole list:
//!
//! ```
//! $ listhash combine $(listhash digest Hello) $(listhash digest world)
//! d80371b995e6f05b80393302f2321134...
//! ```

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use colored::Colorize as _;
use combine::Combine;
use digest::Digest;
use entry::Entry;
use parameters::Parameters;
use repeat::Repeat;
use stats::Stats;
use tracing_subscriber::EnvFilter;

mod combine;
mod digest;
mod entry;
mod parameters;
mod repeat;
mod stats;
mod utilities;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(all(feature = "mimalloc", not(feature = "jemalloc")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(version, about("Order sensitive list digests over GF(256)"))]
#[cfg_attr(
    feature = "hash_blake3",
    command(about("Order sensitive list digests over GF(256)\nBLAKE3 variant"))
)]
pub struct Cli {
    /// Log library events to stderr. Repeat for more detail. RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Entry(Entry),
    Digest(Digest),
    Repeat(Repeat),
    Combine(Combine),
    Stats(Stats),
    Parameters(Parameters),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("listhash={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let res = match &cli.command {
        Some(Commands::Entry(entry)) => entry.derive(),
        Some(Commands::Digest(digest)) => digest.digest_elements(),
        Some(Commands::Repeat(repeat)) => repeat.digest_repeated(),
        Some(Commands::Combine(combine)) => combine.combine_digests(),
        Some(Commands::Stats(stats)) => stats.measure_rejections(),
        Some(Commands::Parameters(parameters)) => parameters.print_info(),
        // Print help
        None => {
            let _ = Cli::command().print_help();
            Ok(())
        }
    };

    if let Err(err) = res {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }

    std::process::exit(0);
}
