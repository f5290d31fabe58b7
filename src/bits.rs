//! Bit reinterpretation between equal-width scalar and vector types.
//!
//! These are type-punning casts, not numeric conversions: `asuint(1.0f32)`
//! is `0x3F80_0000`, never `1`. Every lane is reinterpreted independently
//! and no bit pattern is modified, so round-trips are exact for all inputs
//! including NaN payloads and signed zero. The half-float codec and the
//! hash kernel are both built on this layer.
//!
//! Built on `f32::to_bits`/`from_bits`, the explicit same-width
//! reinterpret. A numeric `as` cast in their place would silently round or
//! saturate; keep the distinction.

use crate::types::{F32x2, F32x3, F32x4, I32x2, I32x3, I32x4, U32x2, U32x3, U32x4};

/// Reinterpretation into the same-width unsigned integer shape.
pub trait AsUint {
    type Output;

    fn as_uint(self) -> Self::Output;
}

/// Reinterpretation into the same-width signed integer shape.
pub trait AsInt {
    type Output;

    fn as_int(self) -> Self::Output;
}

/// Reinterpretation into the same-width float shape.
pub trait AsFloat {
    type Output;

    fn as_float(self) -> Self::Output;
}

/// Reinterprets the bit pattern of `v` as unsigned integers, lane by lane.
#[inline(always)]
pub fn asuint<T: AsUint>(v: T) -> T::Output {
    v.as_uint()
}

/// Reinterprets the bit pattern of `v` as signed integers, lane by lane.
#[inline(always)]
pub fn asint<T: AsInt>(v: T) -> T::Output {
    v.as_int()
}

/// Reinterprets the bit pattern of `v` as floats, lane by lane.
#[inline(always)]
pub fn asfloat<T: AsFloat>(v: T) -> T::Output {
    v.as_float()
}

impl AsUint for f32 {
    type Output = u32;

    #[inline(always)]
    fn as_uint(self) -> u32 {
        self.to_bits()
    }
}

impl AsUint for i32 {
    type Output = u32;

    #[inline(always)]
    fn as_uint(self) -> u32 {
        self as u32
    }
}

impl AsInt for f32 {
    type Output = i32;

    #[inline(always)]
    fn as_int(self) -> i32 {
        self.to_bits() as i32
    }
}

impl AsInt for u32 {
    type Output = i32;

    #[inline(always)]
    fn as_int(self) -> i32 {
        self as i32
    }
}

impl AsFloat for u32 {
    type Output = f32;

    #[inline(always)]
    fn as_float(self) -> f32 {
        f32::from_bits(self)
    }
}

impl AsFloat for i32 {
    type Output = f32;

    #[inline(always)]
    fn as_float(self) -> f32 {
        f32::from_bits(self as u32)
    }
}

macro_rules! lane_reinterpret {
    ($float:ident, $int:ident, $uint:ident, { $($lane:ident),+ }) => {
        impl AsUint for $float {
            type Output = $uint;

            #[inline(always)]
            fn as_uint(self) -> $uint {
                $uint { $($lane: self.$lane.to_bits()),+ }
            }
        }

        impl AsUint for $int {
            type Output = $uint;

            #[inline(always)]
            fn as_uint(self) -> $uint {
                $uint { $($lane: self.$lane as u32),+ }
            }
        }

        impl AsInt for $float {
            type Output = $int;

            #[inline(always)]
            fn as_int(self) -> $int {
                $int { $($lane: self.$lane.to_bits() as i32),+ }
            }
        }

        impl AsInt for $uint {
            type Output = $int;

            #[inline(always)]
            fn as_int(self) -> $int {
                $int { $($lane: self.$lane as i32),+ }
            }
        }

        impl AsFloat for $uint {
            type Output = $float;

            #[inline(always)]
            fn as_float(self) -> $float {
                $float { $($lane: f32::from_bits(self.$lane)),+ }
            }
        }

        impl AsFloat for $int {
            type Output = $float;

            #[inline(always)]
            fn as_float(self) -> $float {
                $float { $($lane: f32::from_bits(self.$lane as u32)),+ }
            }
        }
    };
}

lane_reinterpret!(F32x2, I32x2, U32x2, { x, y });
lane_reinterpret!(F32x3, I32x3, U32x3, { x, y, z });
lane_reinterpret!(F32x4, I32x4, U32x4, { x, y, z, w });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_reinterpret_is_not_a_numeric_cast() {
        assert_eq!(asuint(1.0f32), 0x3F80_0000);
        assert_eq!(asfloat(0x3F80_0000u32), 1.0);
        assert_eq!(asint(-1.0f32), 0xBF80_0000u32 as i32);
    }

    #[test]
    fn signed_zero_and_nan_survive_round_trips() {
        let neg_zero = -0.0f32;
        assert_eq!(asuint(neg_zero), 0x8000_0000);
        assert_eq!(asfloat(asuint(neg_zero)).to_bits(), neg_zero.to_bits());

        // NaN with a non-canonical payload.
        let nan_bits = 0x7FC0_1234u32;
        assert_eq!(asuint(asfloat(nan_bits)), nan_bits);
    }

    #[test]
    fn lanes_are_reinterpreted_independently() {
        let v = F32x4::new(1.0, -2.0, f32::INFINITY, -0.0);
        let u = asuint(v);
        assert_eq!(u.x, 1.0f32.to_bits());
        assert_eq!(u.y, (-2.0f32).to_bits());
        assert_eq!(u.z, f32::INFINITY.to_bits());
        assert_eq!(u.w, 0x8000_0000);
        assert_eq!(asuint(asfloat(u)), u);
    }
}
