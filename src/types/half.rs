//! 16-bit float storage types.
//!
//! `F16` is a raw 1-sign/5-exponent/10-mantissa bit pattern. It carries no
//! arithmetic; values are transient, produced and consumed by the codec in
//! [`crate::half`]. Equality and hashing are over the bit pattern, so
//! `+0.0` and `-0.0` compare unequal and NaN compares equal to itself.

/// 16-bit float bit pattern (1 sign, 5 exponent, 10 mantissa bits).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct F16(u16);

impl F16 {
    /// Positive zero.
    pub const ZERO: Self = Self(0x0000);
    /// Negative zero.
    pub const NEG_ZERO: Self = Self(0x8000);
    /// One.
    pub const ONE: Self = Self(0x3C00);
    /// Positive infinity.
    pub const INFINITY: Self = Self(0x7C00);
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self(0xFC00);
    /// Canonical quiet NaN.
    pub const NAN: Self = Self(0x7E00);

    /// Largest finite value, 65504.
    pub const MAX: Self = Self(0x7BFF);
    /// Smallest positive subnormal, 2⁻²⁴.
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);

    /// Wraps a raw bit pattern.
    #[inline(always)]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw bit pattern.
    #[inline(always)]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// True when the exponent is all ones and the mantissa is non-zero.
    #[inline(always)]
    pub const fn is_nan(self) -> bool {
        self.0 & 0x7FFF > 0x7C00
    }

    /// True for positive or negative infinity.
    #[inline(always)]
    pub const fn is_infinite(self) -> bool {
        self.0 & 0x7FFF == 0x7C00
    }

    /// True for the sign bit being set, including `-0.0` and NaNs with the
    /// sign bit.
    #[inline(always)]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & 0x8000 != 0
    }
}

/// Two 16-bit float lanes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct F16x2 {
    pub x: F16,
    pub y: F16,
}

impl F16x2 {
    /// Constructs a vector from individual lane values.
    #[inline(always)]
    pub const fn new(x: F16, y: F16) -> Self {
        Self { x, y }
    }
}

/// Three 16-bit float lanes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct F16x3 {
    pub x: F16,
    pub y: F16,
    pub z: F16,
}

impl F16x3 {
    /// Constructs a vector from individual lane values.
    #[inline(always)]
    pub const fn new(x: F16, y: F16, z: F16) -> Self {
        Self { x, y, z }
    }
}

/// Four 16-bit float lanes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct F16x4 {
    pub x: F16,
    pub y: F16,
    pub z: F16,
    pub w: F16,
}

impl F16x4 {
    /// Constructs a vector from individual lane values.
    #[inline(always)]
    pub const fn new(x: F16, y: F16, z: F16, w: F16) -> Self {
        Self { x, y, z, w }
    }
}
