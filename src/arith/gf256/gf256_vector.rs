// ----------------------- Vector operations -----------------------

use crate::arith::FieldArith as _;

use super::GF256;

/// vx'[] = vx[] * scalar
pub fn gf256_mul_vector_by_scalar(vx: &mut [GF256], scalar: GF256) {
    for x in vx.iter_mut() {
        x.field_mul_mut(scalar);
    }
}

/// vz'[] = vz[] + vx[] * scalar
pub fn gf256_mul_scalar_add_vector(vz: &mut [GF256], vx: &[GF256], scalar: GF256) {
    assert!(
        vz.len() == vx.len(),
        "Length of the two vectors must be the same"
    );
    if scalar.is_zero() {
        return;
    }
    for (z, x) in vz.iter_mut().zip(vx.iter()) {
        z.field_add_mut(x.field_mul(scalar));
    }
}
