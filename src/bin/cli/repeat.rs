//! Digest of a repeated element

use clap::{Error, Parser};

use listhash::digest::ListDigest;

use crate::utilities::{clap_err_result, print_bytes, print_title};

#[derive(Parser)]
#[command(version, about("Digest one element repeated N times"), long_about = None)]
pub struct Repeat {
    /// The list element
    input: String,

    /// Number of repetitions
    n: u64,

    /// Print the digest base64 encoded instead of hex
    #[arg(long)]
    base64: bool,
}

impl Repeat {
    pub fn digest_repeated(&self) -> Result<(), Error> {
        print_title(&format!("Digesting element repeated {} times.", self.n));

        let mut digest = ListDigest::new();
        clap_err_result!(digest.push_repeated(self.input.as_bytes(), self.n))?;

        print_bytes(&digest.to_bytes(), self.base64);
        Ok(())
    }
}
