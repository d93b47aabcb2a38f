use clap::{Error, Parser};
use colored::Colorize as _;

use listhash::constants::params::{self};

#[derive(Parser)]
#[command(version, about("Print the parameters of the construction"), long_about = None)]
pub struct Parameters {}

impl Parameters {
    pub fn print_info(&self) -> Result<(), Error> {
        println!("listhash parameters");

        if cfg!(feature = "hash_blake3") {
            println!("Hash primitive: BLAKE3 (64 byte output)");
        } else {
            println!("Hash primitive: SHA3-512");
        }

        println!();

        println!("{}", "Field Parameters:".blue().bold());
        println!(
            "{}\t(q) The Galois field size GF(q) = GF(2^8) = GF(256)",
            params::PARAM_FIELD_SIZE.to_string().bold()
        );
        println!(
            "{}\tThe generator polynomial x^8 + x^4 + x^3 + x^2 + 1",
            format!("{:#x}", params::PARAM_FIELD_POLYNOMIAL).bold()
        );

        println!("{}", "\nMatrix Parameters:".blue().bold());
        println!(
            "{}\tRows and columns of an entry matrix",
            params::PARAM_MATRIX_DIM.to_string().bold()
        );
        println!(
            "{}\tDigest size in bytes",
            params::PARAM_MATRIX_SIZE.to_string().bold()
        );

        println!("{}", "\nDerivation Parameters:".blue().bold());
        println!(
            "{}\tHash output size in bytes",
            params::PARAM_DIGEST_SIZE.to_string().bold()
        );
        println!(
            "{}\tMaximum number of candidates per entry",
            params::PARAM_MAX_ROUNDS.to_string().bold()
        );
        println!(
            "{}\tDomain separation tag",
            String::from_utf8_lossy(params::DOMAIN_SEPARATION_TAG).bold()
        );

        Ok(())
    }
}
