//! Combination of digests

use clap::{Error, Parser};

use listhash::digest::ListDigest;

use crate::utilities::{
    clap_err_result_msg, get_digest_from_file_or_string, print_bytes, print_title,
};

#[derive(Parser)]
#[command(version, about("Combine digests of consecutive lists"), long_about = None)]
pub struct Combine {
    /// Digests in list order, hex or base64 encoded, or files containing them
    #[arg(required = true)]
    digests: Vec<String>,

    /// Print the digest base64 encoded instead of hex
    #[arg(long)]
    base64: bool,
}

impl Combine {
    pub fn combine_digests(&self) -> Result<(), Error> {
        print_title(&format!("Combining {} digests.", self.digests.len()));

        let mut combined = ListDigest::new();
        for (i, encoded) in self.digests.iter().enumerate() {
            let matrix = get_digest_from_file_or_string(encoded)?;
            let digest = clap_err_result_msg!(
                ListDigest::from_matrix(matrix),
                format!("Digest {} is not valid", i + 1)
            )?;
            combined.append(&digest);
        }

        print_bytes(&combined.to_bytes(), self.base64);
        Ok(())
    }
}
