//! Conversions between rotation representations.
//!
//! Quaternion → matrix is the standard closed form; the result is
//! orthonormal to floating tolerance when the input is unit length.
//! Matrix → quaternion branches on the largest diagonal element so the
//! extraction stays stable near 180° rotations, and normalizes the sign
//! so the returned scalar part is non-negative. Round-tripping a unit
//! quaternion therefore yields `q` or `-q`; both name the same rotation.
//!
//! Non-orthonormal matrix input is not rejected — it degrades accuracy of
//! the extracted quaternion rather than raising an error.

use crate::types::{F32x3, F32x4, Mat3x3, Mat4x4, Quat, RigidTransform};

impl From<Quat> for Mat3x3 {
    /// Builds the rotation matrix of a unit quaternion.
    #[inline(always)]
    fn from(q: Quat) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;

        let xx = q.x * x2;
        let yy = q.y * y2;
        let zz = q.z * z2;
        let xy = q.x * y2;
        let xz = q.x * z2;
        let yz = q.y * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        Self::from_columns(
            F32x3::new(1.0 - (yy + zz), xy + wz, xz - wy),
            F32x3::new(xy - wz, 1.0 - (xx + zz), yz + wx),
            F32x3::new(xz + wy, yz - wx, 1.0 - (xx + yy)),
        )
    }
}

impl From<Quat> for Mat4x4 {
    /// Embeds the rotation in the upper-left 3×3 block; the last row and
    /// column are 0, 0, 0, 1 (pure rotation, no translation).
    #[inline(always)]
    fn from(q: Quat) -> Self {
        let r = Mat3x3::from(q);
        Self::from_columns(
            F32x4::new(r.c0.x, r.c0.y, r.c0.z, 0.0),
            F32x4::new(r.c1.x, r.c1.y, r.c1.z, 0.0),
            F32x4::new(r.c2.x, r.c2.y, r.c2.z, 0.0),
            F32x4::new(0.0, 0.0, 0.0, 1.0),
        )
    }
}

impl From<RigidTransform> for Mat4x4 {
    /// Rotation in the upper-left block, translation in the last column.
    #[inline(always)]
    fn from(t: RigidTransform) -> Self {
        let mut m = Self::from(t.rot);
        m.c3 = F32x4::new(t.pos.x, t.pos.y, t.pos.z, 1.0);
        m
    }
}

impl From<Mat3x3> for Quat {
    /// Extracts the quaternion of a rotation matrix.
    ///
    /// Branches on the trace and the largest diagonal element so the
    /// square root argument stays well away from zero in every case.
    fn from(m: Mat3x3) -> Self {
        // Element (row r, column c) of a column-major matrix is m.c{c}.{r}.
        let m00 = m.c0.x;
        let m11 = m.c1.y;
        let m22 = m.c2.z;
        let trace = m00 + m11 + m22;

        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0; // 4w
            Quat::new(
                (m.c1.z - m.c2.y) / s,
                (m.c2.x - m.c0.z) / s,
                (m.c0.y - m.c1.x) / s,
                0.25 * s,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0; // 4x
            Quat::new(
                0.25 * s,
                (m.c1.x + m.c0.y) / s,
                (m.c2.x + m.c0.z) / s,
                (m.c1.z - m.c2.y) / s,
            )
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0; // 4y
            Quat::new(
                (m.c1.x + m.c0.y) / s,
                0.25 * s,
                (m.c2.y + m.c1.z) / s,
                (m.c2.x - m.c0.z) / s,
            )
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0; // 4z
            Quat::new(
                (m.c2.x + m.c0.z) / s,
                (m.c2.y + m.c1.z) / s,
                0.25 * s,
                (m.c0.y - m.c1.x) / s,
            )
        };

        // Convention: non-negative scalar part. q and -q are the same
        // rotation, so this is a canonicalization, not a change of value.
        if q.w < 0.0 {
            Quat::new(-q.x, -q.y, -q.z, -q.w)
        } else {
            q
        }
    }
}

impl From<Mat4x4> for Quat {
    /// Extracts the quaternion of the upper-left 3×3 rotation block.
    #[inline(always)]
    fn from(m: Mat4x4) -> Self {
        Quat::from(Mat3x3::from_columns(
            F32x3::new(m.c0.x, m.c0.y, m.c0.z),
            F32x3::new(m.c1.x, m.c1.y, m.c1.z),
            F32x3::new(m.c2.x, m.c2.y, m.c2.z),
        ))
    }
}
