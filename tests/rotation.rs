//! Rotation representation round-trip tests.
//!
//! A unit quaternion converted to a matrix and back must come out as `q`
//! or `-q` — the global sign is not observable as a rotation. The matrix
//! produced from a unit quaternion must be orthonormal to floating
//! tolerance, and the extraction must stay stable near 180° rotations,
//! where the trace-based branch degenerates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanemath::{F32x3, F32x4, Mat3x3, Mat4x4, Quat, RigidTransform};

fn random_unit_quat(rng: &mut StdRng) -> Quat {
    loop {
        let x: f32 = rng.random_range(-1.0..=1.0);
        let y: f32 = rng.random_range(-1.0..=1.0);
        let z: f32 = rng.random_range(-1.0..=1.0);
        let w: f32 = rng.random_range(-1.0..=1.0);
        let len_sq = x * x + y * y + z * z + w * w;
        // Rejection-sample the 4-ball to keep the normalized distribution
        // uniform and the normalization well conditioned.
        if len_sq > 0.01 && len_sq <= 1.0 {
            let inv = len_sq.sqrt().recip();
            return Quat::new(x * inv, y * inv, z * inv, w * inv);
        }
    }
}

fn assert_same_rotation(a: Quat, b: Quat, tol: f32) {
    let direct = (a.x - b.x)
        .abs()
        .max((a.y - b.y).abs())
        .max((a.z - b.z).abs())
        .max((a.w - b.w).abs());
    let flipped = (a.x + b.x)
        .abs()
        .max((a.y + b.y).abs())
        .max((a.z + b.z).abs())
        .max((a.w + b.w).abs());
    assert!(
        direct < tol || flipped < tol,
        "quaternions differ beyond sign: {a:?} vs {b:?} (direct {direct:.2e}, flipped {flipped:.2e})"
    );
}

fn dot3(a: F32x3, b: F32x3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Round trip through 3×3 for 1000 random unit quaternions.
#[test]
fn test_mat3_round_trip() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..1000 {
        let q = random_unit_quat(&mut rng);
        let back = Quat::from(Mat3x3::from(q));
        assert_same_rotation(q, back, 1e-5);
        assert!(back.w >= 0.0, "w convention violated: {back:?}");
    }
}

/// Round trip through 4×4 behaves identically to 3×3.
#[test]
fn test_mat4_round_trip() {
    let mut rng = StdRng::seed_from_u64(2025);
    for _ in 0..1000 {
        let q = random_unit_quat(&mut rng);
        let back = Quat::from(Mat4x4::from(q));
        assert_same_rotation(q, back, 1e-5);
    }
}

/// The matrix of a unit quaternion is orthonormal within tolerance.
#[test]
fn test_matrix_is_orthonormal() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..200 {
        let q = random_unit_quat(&mut rng);
        let m = Mat3x3::from(q);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                let d = dot3(m[i], m[j]);
                assert!(
                    (d - expected).abs() < 1e-5,
                    "columns {i},{j}: dot {d} (expected {expected})"
                );
            }
        }
    }
}

/// Near-180° rotations exercise every extraction branch without blowing up.
#[test]
fn test_extraction_near_half_turns() {
    // Half turns about each axis, plus slight perturbations off them.
    let half_turns = [
        Quat::new(1.0, 0.0, 0.0, 0.0),
        Quat::new(0.0, 1.0, 0.0, 0.0),
        Quat::new(0.0, 0.0, 1.0, 0.0),
        Quat::new(0.999_95, 0.01, 0.0, 0.001),
        Quat::new(0.01, 0.999_95, 0.0, 0.001),
        Quat::new(0.0, 0.01, 0.999_95, 0.001),
    ];
    for q in half_turns {
        let back = Quat::from(Mat3x3::from(q));
        assert_same_rotation(q, back, 1e-4);
        assert!(back.w >= 0.0);
    }
}

/// The 4×4 form of a pure rotation has the canonical last row and column.
#[test]
fn test_mat4_embedding() {
    let mut rng = StdRng::seed_from_u64(8);
    let q = random_unit_quat(&mut rng);
    let m = Mat4x4::from(q);
    assert_eq!(m.c0.w, 0.0);
    assert_eq!(m.c1.w, 0.0);
    assert_eq!(m.c2.w, 0.0);
    assert_eq!(m.c3, F32x4::new(0.0, 0.0, 0.0, 1.0));
}

/// RigidTransform construction is aggregation only; its matrix form pairs
/// the rotation block with the translation column.
#[test]
fn test_rigid_transform() {
    let mut rng = StdRng::seed_from_u64(64);
    let q = random_unit_quat(&mut rng);
    let pos = F32x3::new(10.0, -20.0, 30.0);

    let rt = RigidTransform::new(q, pos);
    assert_eq!(rt.rot, q);
    assert_eq!(rt.pos, pos);

    let m = Mat4x4::from(rt);
    let rot_only = Mat4x4::from(q);
    assert_eq!(m.c0, rot_only.c0);
    assert_eq!(m.c1, rot_only.c1);
    assert_eq!(m.c2, rot_only.c2);
    assert_eq!(m.c3, F32x4::new(10.0, -20.0, 30.0, 1.0));
}
