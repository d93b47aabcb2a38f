//! List digest

use std::path::PathBuf;

use clap::{Error, Parser};
use colored::Colorize as _;

use listhash::{
    constants::params::ENV_WORKERS,
    digest::{digest_list_parallel, digest_list_traced},
    subroutines::entry::RejectionTrace,
};

use crate::utilities::{
    clap_err_result, print_bytes, print_title, print_trace, read_elements, resolve_workers,
};

#[derive(Parser)]
#[command(version, about("Digest a list of elements"), long_about = None)]
pub struct Digest {
    /// The list elements, in order
    elements: Vec<String>,

    /// Read the elements from FILE, one per line. Lines are split on `\n` only and taken as raw bytes, so a
    /// `\r` before the newline belongs to the element. A final newline does not add an empty element.
    #[arg(short, long, value_name = "FILE", conflicts_with("elements"))]
    file: Option<PathBuf>,

    /// Number of chunks digested in parallel (default: available parallelism)
    #[arg(short, long, env = ENV_WORKERS)]
    workers: Option<usize>,

    /// Print the digest base64 encoded instead of hex
    #[arg(long)]
    base64: bool,
}

impl Digest {
    pub fn digest_elements(&self) -> Result<(), Error> {
        let elements = read_elements(&self.elements, self.file.as_ref())?;
        print_title(&format!("Digesting {} elements.", elements.len()));

        let workers = resolve_workers(self.workers)?;
        eprintln!("{}: {}", "Workers".blue(), workers);

        let (digest, trace) = if workers > 1 {
            clap_err_result!(digest_list_parallel(&elements, workers))?
        } else {
            let mut trace = RejectionTrace::new();
            let digest = clap_err_result!(digest_list_traced(&elements, &mut trace))?;
            (digest, trace)
        };

        print_trace(&trace);
        print_bytes(&digest.to_bytes(), self.base64);

        Ok(())
    }
}
