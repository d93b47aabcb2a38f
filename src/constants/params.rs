// Field Parameters
/// Also called q. The Galois field size GF(q) = GF(2^8) = GF(256)
pub const PARAM_FIELD_SIZE: usize = 256;
/// The irreducible generator polynomial x^8 + x^4 + x^3 + x^2 + 1 of the field
pub const PARAM_FIELD_POLYNOMIAL: u16 = 0x11D;

// Matrix Parameters
/// Number of rows and columns of an entry matrix
pub const PARAM_MATRIX_DIM: usize = 8;
/// Number of field elements in an entry matrix
pub const PARAM_MATRIX_SIZE: usize = PARAM_MATRIX_DIM * PARAM_MATRIX_DIM;

// Hash Parameters
/// Output size of the hash primitive in bytes. One byte per matrix entry.
pub const PARAM_DIGEST_SIZE: usize = 512 / 8;
/// Upper bound on the number of candidates tried when deriving an entry.
///
/// A candidate is rejected with probability close to 1/256, so reaching this bound means the hash primitive is broken.
pub const PARAM_MAX_ROUNDS: usize = 64;

/// Tag hashed in front of every list element before the first candidate is produced.
///
/// Later candidates are hashes of the previous candidate alone, so no rejected candidate can be reached
/// by hashing a tagged element.
pub const DOMAIN_SEPARATION_TAG: &[u8] = b"list-hash/entry/v1";
/// Byte terminating the [`DOMAIN_SEPARATION_TAG`]
pub const DOMAIN_SEPARATION_TERMINATOR: u8 = 0x00;

const _: () = assert!(PARAM_DIGEST_SIZE == PARAM_MATRIX_SIZE);

// Runtime Parameters
/// Environment variable overriding the default number of workers of the command line interface
pub const ENV_WORKERS: &str = "LISTHASH_WORKERS";
