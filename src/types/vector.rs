//! Fixed-width lane vectors over `f32`, `i32` and `u32`.
//!
//! Every type here is a plain value aggregate with named lanes (`x`, `y`,
//! `z`, `w` as applicable), two to four lanes wide. Lane order is fixed and
//! significant: the bit-reinterpretation and hash kernels both rely on lane
//! `x` coming first.
//!
//! Only the operations the kernels consume are implemented: componentwise
//! construction, `splat`, lane indexing, and a small componentwise operator
//! set. Integer arithmetic wraps; the hash kernel depends on that.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

macro_rules! lane_struct {
    ($(#[$meta:meta])* $name:ident, $scalar:ty, { $($lane:ident : $idx:tt),+ }) => {
        $(#[$meta])*
        #[repr(C)]
        pub struct $name {
            $(pub $lane: $scalar,)+
        }

        impl $name {
            /// Constructs a vector from individual lane values.
            #[inline(always)]
            pub const fn new($($lane: $scalar),+) -> Self {
                Self { $($lane),+ }
            }

            /// Constructs a vector with every lane set to `v`.
            #[inline(always)]
            pub const fn splat(v: $scalar) -> Self {
                Self { $($lane: v),+ }
            }
        }

        impl Index<usize> for $name {
            type Output = $scalar;

            #[inline(always)]
            fn index(&self, lane: usize) -> &$scalar {
                match lane {
                    $($idx => &self.$lane,)+
                    _ => panic!("lane index out of range: {lane}"),
                }
            }
        }

        impl IndexMut<usize> for $name {
            #[inline(always)]
            fn index_mut(&mut self, lane: usize) -> &mut $scalar {
                match lane {
                    $($idx => &mut self.$lane,)+
                    _ => panic!("lane index out of range: {lane}"),
                }
            }
        }
    };
}

lane_struct!(
    /// Two 32-bit float lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq)]
    F32x2, f32, { x: 0, y: 1 }
);
lane_struct!(
    /// Three 32-bit float lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq)]
    F32x3, f32, { x: 0, y: 1, z: 2 }
);
lane_struct!(
    /// Four 32-bit float lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq)]
    F32x4, f32, { x: 0, y: 1, z: 2, w: 3 }
);

lane_struct!(
    /// Two signed 32-bit integer lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    I32x2, i32, { x: 0, y: 1 }
);
lane_struct!(
    /// Three signed 32-bit integer lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    I32x3, i32, { x: 0, y: 1, z: 2 }
);
lane_struct!(
    /// Four signed 32-bit integer lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    I32x4, i32, { x: 0, y: 1, z: 2, w: 3 }
);

lane_struct!(
    /// Two unsigned 32-bit integer lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    U32x2, u32, { x: 0, y: 1 }
);
lane_struct!(
    /// Three unsigned 32-bit integer lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    U32x3, u32, { x: 0, y: 1, z: 2 }
);
lane_struct!(
    /// Four unsigned 32-bit integer lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    U32x4, u32, { x: 0, y: 1, z: 2, w: 3 }
);

macro_rules! float_ops {
    ($name:ident, { $($lane:ident),+ }) => {
        impl Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self { $($lane: self.$lane + rhs.$lane),+ }
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self { $($lane: self.$lane - rhs.$lane),+ }
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self { $($lane: self.$lane * rhs.$lane),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: f32) -> Self {
                Self { $($lane: self.$lane * rhs),+ }
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self { $($lane: -self.$lane),+ }
            }
        }
    };
}

float_ops!(F32x2, { x, y });
float_ops!(F32x3, { x, y, z });
float_ops!(F32x4, { x, y, z, w });

macro_rules! uint_ops {
    ($name:ident, { $($lane:ident),+ }) => {
        impl Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self { $($lane: self.$lane.wrapping_add(rhs.$lane)),+ }
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self { $($lane: self.$lane.wrapping_mul(rhs.$lane)),+ }
            }
        }

        impl $name {
            /// Wrapping horizontal sum of all lanes.
            #[inline(always)]
            pub const fn csum(self) -> u32 {
                0u32 $(.wrapping_add(self.$lane))+
            }
        }
    };
}

uint_ops!(U32x2, { x, y });
uint_ops!(U32x3, { x, y, z });
uint_ops!(U32x4, { x, y, z, w });
