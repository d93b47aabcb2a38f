//! Entry derivation

use clap::{Error, Parser};
use colored::Colorize as _;

use listhash::subroutines::entry::{derive_entry_traced, RejectionTrace};

use crate::utilities::{clap_err_result, print_bytes, print_title};

#[derive(Parser)]
#[command(version, about("Derive the entry matrix of one element"), long_about = None)]
pub struct Entry {
    /// The list element
    input: String,

    /// Print the 64 matrix bytes base64 encoded instead of the matrix
    #[arg(long)]
    base64: bool,
}

impl Entry {
    pub fn derive(&self) -> Result<(), Error> {
        print_title("Deriving entry matrix.");
        let mut trace = RejectionTrace::new();
        let matrix = clap_err_result!(derive_entry_traced(self.input.as_bytes(), &mut trace))?;

        eprintln!("{}: {}", "Rounds".blue(), trace.total_rejections() + 1);

        if self.base64 {
            print_bytes(&matrix.to_bytes(), true);
        } else {
            println!("{}", matrix);
        }

        Ok(())
    }
}
