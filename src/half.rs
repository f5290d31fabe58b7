//! Conversion between 32-bit floats and the 16-bit half format.
//!
//! # Rounding
//!
//! Narrowing uses IEEE 754 round-to-nearest-even, implemented with the
//! classic round-bit/sticky-bit test on the discarded mantissa bits.
//! Values whose magnitude exceeds the largest finite half (65504) saturate
//! to signed infinity; magnitudes below half of the smallest subnormal
//! (2⁻²⁵) round to signed zero; NaN narrows to a quiet NaN carrying the
//! top payload bits. Widening is exact: every 16-bit half value has an
//! exact `f32` representation, so that direction only re-biases the
//! exponent and places the sign.
//!
//! Vector forms are componentwise, each lane converted independently.

use crate::types::{F16, F16x2, F16x3, F16x4, F32x2, F32x3, F32x4};

// f32 layout: 1 sign, 8 exponent (bias 127), 23 mantissa bits.
// f16 layout: 1 sign, 5 exponent (bias 15), 10 mantissa bits.
// Narrowing drops 13 mantissa bits; bit 12 of the f32 mantissa is the
// round bit.
const F32_SIGN_MASK: u32 = 0x8000_0000;
const F32_EXP_MASK: u32 = 0x7F80_0000;
const F32_MAN_MASK: u32 = 0x007F_FFFF;
const F32_IMPLICIT_BIT: u32 = 0x0080_0000;
const ROUND_BIT: u32 = 0x0000_1000;

// 2^-24 as an f32 bit pattern, the value of one half-subnormal ulp.
const HALF_SUBNORMAL_ULP: u32 = 0x3380_0000;

fn f32_to_f16_bits(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits & F32_SIGN_MASK) >> 16) as u16;
    let abs = bits & !F32_SIGN_MASK;

    if abs >= F32_EXP_MASK {
        // Infinity stays infinity; NaN becomes quiet and keeps the top
        // ten payload bits (the quiet bit guarantees a non-zero mantissa).
        return if abs > F32_EXP_MASK {
            sign | 0x7E00 | ((abs >> 13) & 0x03FF) as u16
        } else {
            sign | 0x7C00
        };
    }

    let exp = (abs >> 23) as i32 - 127;
    let man = abs & F32_MAN_MASK;

    if exp > 15 {
        // Above half's exponent range before rounding even starts.
        return sign | 0x7C00;
    }

    if exp >= -14 {
        // Normal half. A mantissa carry out of the ten kept bits bumps the
        // exponent, which saturates to infinity exactly at the boundary.
        let half_exp = ((exp + 15) as u32) << 10;
        let mut out = u32::from(sign) | half_exp | (man >> 13);
        if man & ROUND_BIT != 0 && man & (3 * ROUND_BIT - 1) != 0 {
            out += 1;
        }
        return out as u16;
    }

    if exp < -25 {
        // Below half of the smallest subnormal: signed zero.
        return sign;
    }

    // Subnormal half: shift the mantissa (implicit bit restored) into
    // position and round ties to even with the shifted round bit.
    let man = man | F32_IMPLICIT_BIT;
    let shift = (-14 - exp) as u32; // 1..=11
    let round_bit = ROUND_BIT << shift;
    let mut out = u32::from(sign) | (man >> (shift + 13));
    if man & round_bit != 0 && man & (3 * round_bit - 1) != 0 {
        out += 1;
    }
    out as u16
}

fn f16_bits_to_f32(bits: u16) -> f32 {
    let sign = u32::from(bits & 0x8000) << 16;
    let exp = (bits >> 10) & 0x1F;
    let man = u32::from(bits & 0x03FF);

    if exp == 0x1F {
        // Infinity or NaN; the payload widens into the top mantissa bits.
        return f32::from_bits(sign | F32_EXP_MASK | (man << 13));
    }
    if exp == 0 {
        // Zero or subnormal. man * 2^-24 is exact in f32, and the negation
        // of 0.0 preserves the zero sign.
        let magnitude = man as f32 * f32::from_bits(HALF_SUBNORMAL_ULP);
        return if sign != 0 { -magnitude } else { magnitude };
    }
    // Normal value: re-bias the exponent from 15 to 127.
    f32::from_bits(sign | ((u32::from(exp) + 112) << 23) | (man << 13))
}

impl F16 {
    /// Narrows an `f32` to half precision, rounding to nearest even.
    #[inline(always)]
    pub fn from_f32(value: f32) -> Self {
        Self::from_bits(f32_to_f16_bits(value))
    }

    /// Widens to `f32`. This direction is exact.
    #[inline(always)]
    pub fn to_f32(self) -> f32 {
        f16_bits_to_f32(self.to_bits())
    }
}

impl F16x2 {
    /// Narrows both lanes to half precision.
    #[inline(always)]
    pub fn from_f32x2(v: F32x2) -> Self {
        Self::new(F16::from_f32(v.x), F16::from_f32(v.y))
    }

    /// Widens both lanes to `f32`, exactly.
    #[inline(always)]
    pub fn to_f32x2(self) -> F32x2 {
        F32x2::new(self.x.to_f32(), self.y.to_f32())
    }
}

impl F16x3 {
    /// Narrows all three lanes to half precision.
    #[inline(always)]
    pub fn from_f32x3(v: F32x3) -> Self {
        Self::new(F16::from_f32(v.x), F16::from_f32(v.y), F16::from_f32(v.z))
    }

    /// Widens all three lanes to `f32`, exactly.
    #[inline(always)]
    pub fn to_f32x3(self) -> F32x3 {
        F32x3::new(self.x.to_f32(), self.y.to_f32(), self.z.to_f32())
    }
}

impl F16x4 {
    /// Narrows all four lanes to half precision.
    #[inline(always)]
    pub fn from_f32x4(v: F32x4) -> Self {
        Self::new(
            F16::from_f32(v.x),
            F16::from_f32(v.y),
            F16::from_f32(v.z),
            F16::from_f32(v.w),
        )
    }

    /// Widens all four lanes to `f32`, exactly.
    #[inline(always)]
    pub fn to_f32x4(self) -> F32x4 {
        F32x4::new(
            self.x.to_f32(),
            self.y.to_f32(),
            self.z.to_f32(),
            self.w.to_f32(),
        )
    }
}
