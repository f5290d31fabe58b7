//! Combined sine/cosine evaluation.
//!
//! `sincos` produces both results from one evaluation path: the argument
//! is reduced modulo π/2 once, then two short minimax polynomials are
//! evaluated on the shared reduced argument and swapped/negated according
//! to the quadrant. This is the point of the combined form — callers that
//! need both values pay for one range reduction instead of two.
//!
//! # Precision
//!
//! Range reduction uses a three-part representation of π/2 to avoid
//! catastrophic cancellation: π/2 = `PI_A + PI_B + PI_C`, each term an
//! `f32`, subtracted in sequence with fused multiply-adds. The sine
//! polynomial keeps the result within ~1 ulp on the primary domain;
//! `sin² + cos²` holds to 1e-6 relative for |x| up to well beyond 1000.
//! Past |x| ≈ 2³¹·π/2 the quadrant index saturates and accuracy degrades;
//! this is documented, not defended.
//!
//! Non-finite input produces NaN in both outputs.

use crate::types::{F32x2, F32x3, F32x4};

// π/2 split into three f32 terms for high-precision argument reduction.
const PI_A: f32 = 1.5707964;
const PI_B: f32 = -4.371139e-8;
const PI_C: f32 = -2.7118834e-17;

// Minimax coefficients for sin(x) ≈ x + x³·P(x²) on [-π/4, π/4].
const S1: f32 = -1.6666667e-1;
const S2: f32 = 8.333331e-3;
const S3: f32 = -1.9840874e-4;
const S4: f32 = 2.7525562e-6;
const S5: f32 = -2.502943e-8;

// Minimax coefficients for cos(x) ≈ 1 - x²/2 + x⁴·Q(x²) on [-π/4, π/4].
const C1: f32 = 2.44331571e-5;
const C2: f32 = -1.38873163e-3;
const C3: f32 = 4.16666457e-2;

/// Computes sine and cosine of `x` (radians) together, returned as
/// `(sin, cos)`.
#[inline(always)]
pub fn sincos(x: f32) -> (f32, f32) {
    if !x.is_finite() {
        return (f32::NAN, f32::NAN);
    }

    // Quadrant index j = round(x / (π/2)), then the reduced argument
    // r = x - j·π/2 accumulated against the three-part constant.
    let j = (x * std::f32::consts::FRAC_2_PI).round();
    let q = j as i32;

    let mut r = j.mul_add(-PI_A, x);
    r = j.mul_add(-PI_B, r);
    r = j.mul_add(-PI_C, r);
    let r2 = r * r;

    // sin(r) = r + r³·P(r²), Horner form.
    let mut p = S5;
    p = p.mul_add(r2, S4);
    p = p.mul_add(r2, S3);
    p = p.mul_add(r2, S2);
    p = p.mul_add(r2, S1);
    let sin_r = (r * r2).mul_add(p, r);

    // cos(r) = 1 - r²/2 + r⁴·Q(r²), Horner form.
    let mut c = C1;
    c = c.mul_add(r2, C2);
    c = c.mul_add(r2, C3);
    let cos_r = (r2 * r2).mul_add(c, r2.mul_add(-0.5, 1.0));

    // Quadrant fix-up: rotating by π/2 swaps sine and cosine and flips a
    // sign. Bitwise and with 3 handles negative q in two's complement.
    match q & 3 {
        0 => (sin_r, cos_r),
        1 => (cos_r, -sin_r),
        2 => (-sin_r, -cos_r),
        _ => (-cos_r, sin_r),
    }
}

macro_rules! sincos_lanes {
    ($(#[$meta:meta])* $fn_name:ident, $vec:ident, { $($lane:ident),+ }) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $fn_name(v: $vec) -> ($vec, $vec) {
            $(let $lane = sincos(v.$lane);)+
            (
                $vec { $($lane: $lane.0),+ },
                $vec { $($lane: $lane.1),+ },
            )
        }
    };
}

sincos_lanes!(
    /// Componentwise [`sincos`] over two lanes.
    sincos2, F32x2, { x, y }
);
sincos_lanes!(
    /// Componentwise [`sincos`] over three lanes.
    sincos3, F32x3, { x, y, z }
);
sincos_lanes!(
    /// Componentwise [`sincos`] over four lanes.
    sincos4, F32x4, { x, y, z, w }
);
