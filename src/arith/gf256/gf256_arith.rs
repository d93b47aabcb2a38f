// Galois field 256 F_256 operations

use std::{
    fmt::{Debug, Display},
    num::Wrapping,
    ops::{Add, Mul, Neg, Sub},
};

use rand::{distributions::Standard, prelude::Distribution, Rng};

use crate::{
    arith::FieldArith,
    constants::params::PARAM_FIELD_POLYNOMIAL,
    error::{ListHashError, Result},
};

/// The low byte of the generator polynomial x^8 + x^4 + x^3 + x^2 + 1, used for reduction after a shift
pub(crate) const MODULUS: u8 = (PARAM_FIELD_POLYNOMIAL & 0xFF) as u8;
const _GENERATOR: u8 = 0x02; // The generator x ({02}) of the multiplicative group of GF(2^8)
const ORDER: u16 = 0xff; // The order of the multiplicative group of GF(2^8)

// Precomputed tables for fast multiplication and inversion in GF(2^8) using the generator x ({02})

/// Table lookup for g^i where g = 0x02. Double the size to avoid modulo operation.
///
/// Found using python galois package (https://pypi.org/project/galois/)
/// GF256 = galois.GF(2**8)
/// GF256._EXP
const POWER_TABLE_0X02: [u8; 512] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211, 187,
    107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34, 68, 136,
    13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197,
    151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209, 191, 99, 198,
    145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150, 49, 98, 196, 149,
    55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167,
    83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18, 36, 72,
    144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44, 88, 176, 125, 250, 233, 207,
    131, 27, 54, 108, 216, 173, 71, 142, 1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135,
    19, 38, 76, 152, 45, 90, 180, 117, 234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156,
    37, 74, 148, 53, 106, 212, 181, 119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93,
    186, 105, 210, 185, 111, 222, 161, 95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30,
    60, 120, 240, 253, 231, 211, 187, 107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226,
    217, 175, 67, 134, 17, 34, 68, 136, 13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248,
    237, 199, 147, 59, 118, 236, 197, 151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79,
    158, 33, 66, 132, 21, 42, 84, 168, 77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213,
    183, 115, 230, 209, 191, 99, 198, 145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227,
    219, 171, 75, 150, 49, 98, 196, 149, 55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200,
    141, 7, 14, 28, 56, 112, 224, 221, 167, 83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195,
    155, 43, 86, 172, 69, 138, 9, 18, 36, 72, 144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139,
    11, 22, 44, 88, 176, 125, 250, 233, 207, 131, 27, 54, 108, 216, 173, 71, 142, 1, 0,
];

fn power_lookup(a: u16) -> u8 {
    POWER_TABLE_0X02[a as usize]
}

/// Table lookup for log_g(a) where g = 0x02. Note that log_g(0) is undefined.
/// Found using python galois package (https://pypi.org/project/galois/)
/// GF256 = galois.GF(2**8)
/// GF256._LOG
const LOG_TABLE_0X02: [u16; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141, 239,
    129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218,
    240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166, 6,
    191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208, 148, 206, 143,
    150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72, 126, 110, 107, 58,
    40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243,
    167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24, 227, 165,
    153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63, 209, 91, 149, 188, 207,
    205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57,
    83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156,
    169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116,
    214, 244, 234, 168, 80, 88, 175,
];
fn log_lookup(a: u8) -> u16 {
    LOG_TABLE_0X02[a as usize]
}

pub(crate) fn gf256_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtraction is addition in characteristic 2
pub(crate) fn gf256_sub(a: u8, b: u8) -> u8 {
    gf256_add(a, b)
}

pub(crate) fn gf256_mul(a: u8, b: u8) -> u8 {
    #[cfg(feature = "mul_shift_and_add")]
    return _mul_shift_and_add(a, b);

    #[cfg(not(feature = "mul_shift_and_add"))]
    _mul_lookup(a, b)
}

/// Branch free shift and add multiplication, reducing by [`MODULUS`] after every shift
pub fn _mul_shift_and_add(a: u8, b: u8) -> u8 {
    let a = Wrapping(a);
    let b = Wrapping(b);
    let one = Wrapping(1_u8);
    let modulus = Wrapping(MODULUS);
    let mut r: Wrapping<u8> = -(b >> 7) & a;
    r = (-(b >> 6 & one) & a) ^ (-(r >> 7) & modulus) ^ (r + r);
    r = (-(b >> 5 & one) & a) ^ (-(r >> 7) & modulus) ^ (r + r);
    r = (-(b >> 4 & one) & a) ^ (-(r >> 7) & modulus) ^ (r + r);
    r = (-(b >> 3 & one) & a) ^ (-(r >> 7) & modulus) ^ (r + r);
    r = (-(b >> 2 & one) & a) ^ (-(r >> 7) & modulus) ^ (r + r);
    r = (-(b >> 1 & one) & a) ^ (-(r >> 7) & modulus) ^ (r + r);
    r = (-(b & one) & a) ^ (-(r >> 7) & modulus) ^ (r + r);
    r.0
}

/// Multiplication using log table lookup a * b = g^(log_g(a) + log_g(b))
pub fn _mul_lookup(a: u8, b: u8) -> u8 {
    if (a == 0) || (b == 0) {
        return 0;
    }
    let log_a = log_lookup(a);
    let log_b = log_lookup(b);
    power_lookup(log_a + log_b)
}

/// Inverse using log table lookup a^-1 = g^(|g| - log_g(a))
pub(crate) fn gf256_mul_inverse(a: u8) -> Result<u8> {
    if a == 0 {
        return Err(ListHashError::DivisionByZero);
    }
    let log_a = log_lookup(a);
    Ok(power_lookup(ORDER - log_a))
}

/// An element of GF(256).
///
/// The byte encoding is the bit vector of the polynomial coefficients, so [`GF256::from_byte`] and
/// [`GF256::to_byte`] are inverse bijections between `u8` and the field.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GF256(u8);

impl GF256 {
    pub const ZERO: GF256 = GF256(0);
    pub const ONE: GF256 = GF256(1);

    pub const fn from_byte(byte: u8) -> Self {
        GF256(byte)
    }

    pub const fn to_byte(self) -> u8 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for GF256 {
    fn from(byte: u8) -> Self {
        GF256::from_byte(byte)
    }
}

impl From<GF256> for u8 {
    fn from(element: GF256) -> Self {
        element.to_byte()
    }
}

impl FieldArith for GF256 {
    fn field_one() -> Self {
        GF256::ONE
    }

    fn field_zero() -> Self {
        GF256::ZERO
    }

    fn field_add(&self, rhs: Self) -> Self {
        GF256(gf256_add(self.0, rhs.0))
    }

    fn field_sub(&self, rhs: Self) -> Self {
        GF256(gf256_sub(self.0, rhs.0))
    }

    fn field_neg(&self) -> Self {
        *self
    }

    fn field_mul(&self, rhs: Self) -> Self {
        GF256(gf256_mul(self.0, rhs.0))
    }

    fn field_mul_inverse(&self) -> Result<Self> {
        gf256_mul_inverse(self.0).map(GF256)
    }
}

impl Add for GF256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.field_add(rhs)
    }
}

impl Sub for GF256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.field_sub(rhs)
    }
}

impl Mul for GF256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.field_mul(rhs)
    }
}

impl Neg for GF256 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.field_neg()
    }
}

impl Distribution<GF256> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GF256 {
        GF256(rng.gen())
    }
}

impl Debug for GF256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:02x} ({}, {:08b})", self.0, self.0, self.0)
    }
}

impl Display for GF256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

// Macro to create a GF256 element
#[cfg(test)]
macro_rules! gf256 {
    ($val:expr) => {
        GF256::from_byte($val)
    };
}
