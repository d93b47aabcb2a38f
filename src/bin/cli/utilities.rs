//! Utility functions

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};

use clap::Error;
use colored::Colorize as _;

use listhash::{
    arith::gf256::Matrix, constants::params::PARAM_MATRIX_SIZE, subroutines::entry::RejectionTrace,
    utils::lines::split_lines,
};

macro_rules! clap_err_result {
    ($e:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, e)),
        }
    };

    ($e:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw(clap::error::ErrorKind::InvalidValue, e)),
        }
    };
}
pub(super) use clap_err_result;

macro_rules! clap_err_result_msg {
    ($e:expr, $m:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, format!("{}: {}\n", $m, e))),
        }
    };

    ($e:expr, $m:expr) => {
        clap_err_result_msg!($e, $m, clap::error::ErrorKind::InvalidValue)
    };
}
pub(super) use clap_err_result_msg;

pub(super) fn print_title(title: &str) {
    eprintln!("{}", title.green().bold());
}

/// Print `bytes` to stdout as hex, or base64 when `base64` is set
pub(super) fn print_bytes(bytes: &[u8], base64: bool) {
    if base64 {
        println!("{}", STANDARD.encode(bytes));
    } else {
        println!("{}", hex::encode(bytes));
    }
}

/// Print the rejection statistics of `trace` to stderr
pub(super) fn print_trace(trace: &RejectionTrace) {
    eprintln!("{}: {}", "Derivations".blue(), trace.derivations());
    eprintln!(
        "{}: {}",
        "Rejected candidates".blue(),
        trace.total_rejections()
    );
    for (round, count) in trace.rounds() {
        eprintln!("  {} {}: {}", "round".bright_black(), round, count);
    }
}

/// The worker count given on the command line or in the environment, otherwise the available parallelism
pub(super) fn resolve_workers(workers: Option<usize>) -> Result<usize, Error> {
    match workers {
        Some(0) => Err(Error::raw(
            clap::error::ErrorKind::InvalidValue,
            "Worker count must be at least 1\n",
        )),
        Some(workers) => Ok(workers),
        None => Ok(std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)),
    }
}

/// Elements from the command line, or the lines of `file` when given
pub(super) fn read_elements(
    elements: &[String],
    file: Option<&PathBuf>,
) -> Result<Vec<Vec<u8>>, Error> {
    match file {
        Some(path) => {
            eprintln!("{}: {}", "Reading elements from file".blue(), path.display());
            let content = std::fs::read(path)?;
            Ok(split_lines(&content)
                .into_iter()
                .map(|line| line.to_vec())
                .collect())
        }
        None => Ok(elements
            .iter()
            .map(|element| element.as_bytes().to_vec())
            .collect()),
    }
}

/// Checks if the input is a file or a string and decodes a serialised digest from it, as hex or base64.
pub(super) fn get_digest_from_file_or_string(file_or_string: &str) -> Result<Matrix, Error> {
    let path = Path::new(file_or_string);

    let encoded = if path.exists() {
        eprintln!("{}: {}", "Reading digest from file".blue(), path.display());
        std::fs::read_to_string(path)?.trim().to_string()
    } else {
        file_or_string.trim().to_string()
    };

    let bytes = if encoded.len() == 2 * PARAM_MATRIX_SIZE {
        clap_err_result_msg!(hex::decode(&encoded), "Could not decode digest from hex")?
    } else {
        clap_err_result_msg!(
            STANDARD.decode(&encoded),
            "Could not decode digest from base64"
        )?
    };

    clap_err_result_msg!(Matrix::try_from_slice(&bytes), "Could not read digest")
}
