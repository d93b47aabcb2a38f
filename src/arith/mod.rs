//! # Arithmetic
//!
//! Arithmetic over the finite field [GF(256)](gf256::GF256) and the 8×8 [matrices](gf256::Matrix) built on it.
//!
//! Field operations are shared through the [`FieldArith`] trait.

pub mod gf256;

use crate::error::Result;

/// Arithmetic of a finite field element.
///
/// Every operation is total except inversion and division, which fail on the zero element.
pub trait FieldArith
where
    Self: Sized + Clone + Copy + PartialEq,
{
    fn field_one() -> Self;
    fn field_zero() -> Self {
        Self::field_sub(&Self::field_one(), Self::field_one())
    }
    fn field_add(&self, rhs: Self) -> Self;
    fn field_sub(&self, rhs: Self) -> Self;
    fn field_neg(&self) -> Self;
    fn field_mul(&self, rhs: Self) -> Self;
    /// The unique `b` with `self * b = 1`. Fails with [`DivisionByZero`](crate::error::ListHashError::DivisionByZero) for zero.
    fn field_mul_inverse(&self) -> Result<Self>;
    fn field_div(&self, rhs: Self) -> Result<Self> {
        Ok(self.field_mul(rhs.field_mul_inverse()?))
    }

    /// Square and multiply
    fn field_pow(&self, exp: u32) -> Self {
        let mut acc = Self::field_one();
        let mut base = *self;
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.field_mul(base);
            }
            base = base.field_mul(base);
            exp >>= 1;
        }
        acc
    }

    fn field_add_mut(&mut self, rhs: Self) {
        *self = self.field_add(rhs);
    }

    fn field_sub_mut(&mut self, rhs: Self) {
        *self = self.field_sub(rhs);
    }

    fn field_mul_mut(&mut self, rhs: Self) {
        *self = self.field_mul(rhs);
    }
}

/// A thorough test for the field axioms on three elements
#[cfg(test)]
pub(crate) fn test_field_definitions<T>(a: T, b: T, c: T)
where
    T: FieldArith + std::fmt::Debug,
{
    // Commutativity of addition and multiplication:
    assert_eq!(a.field_add(b), b.field_add(a));
    assert_eq!(a.field_mul(b), b.field_mul(a));

    // Associativity of addition and multiplication:
    assert_eq!(a.field_add(b.field_add(c)), a.field_add(b).field_add(c));
    assert_eq!(a.field_mul(b.field_mul(c)), a.field_mul(b).field_mul(c));

    // Identity of addition and multiplication:
    assert_eq!(a.field_add(T::field_zero()), a);
    assert_eq!(a.field_mul(T::field_one()), a);

    // Inverse of addition and multiplication:
    assert_eq!(a.field_sub(a), T::field_zero());
    if b != T::field_zero() {
        assert_eq!(a.field_mul(b).field_div(b), Ok(a));
    }

    // Distributivity of multiplication over addition:
    assert_eq!(
        a.field_mul(b.field_add(c)),
        a.field_mul(b).field_add(a.field_mul(c))
    );

    // Negation
    assert_eq!(b.field_add(a.field_neg()), b.field_sub(a));
}
