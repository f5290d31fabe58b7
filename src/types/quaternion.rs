//! Quaternion and rigid-transform value types.
//!
//! `Quat` represents a rotation and is assumed (not enforced) to be unit
//! length; the conversions in [`crate::rotation`] are only meaningful for
//! unit input. `RigidTransform` pairs a rotation with a translation, no
//! scale component.

use crate::types::vector::{F32x3, F32x4};

/// Unit rotation quaternion with lanes `x`, `y`, `z`, `w` (`w` scalar part).
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Constructs a quaternion from individual components.
    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Constructs a quaternion from a 4-lane vector (`w` lane is the scalar
    /// part).
    #[inline(always)]
    pub const fn from_vector(v: F32x4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Returns the component vector (`x`, `y`, `z`, `w`).
    #[inline(always)]
    pub const fn to_vector(self) -> F32x4 {
        F32x4::new(self.x, self.y, self.z, self.w)
    }
}

impl Default for Quat {
    #[inline(always)]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation plus translation. Pure aggregation: constructing one never
/// renormalizes the quaternion or touches the translation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RigidTransform {
    pub rot: Quat,
    pub pos: F32x3,
}

impl RigidTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rot: Quat::IDENTITY,
        pos: F32x3::new(0.0, 0.0, 0.0),
    };

    /// Combines a rotation and a translation into one transform.
    #[inline(always)]
    pub const fn new(rot: Quat, pos: F32x3) -> Self {
        Self { rot, pos }
    }
}
