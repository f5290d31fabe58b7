//! Half-float codec conformance tests.
//!
//! The widening direction is exact, so every non-NaN 16-bit pattern must
//! survive a half → float → half round trip unchanged. The narrowing
//! direction is checked for round-to-nearest-even behaviour and the
//! saturation/underflow special cases.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanemath::{F16, F16x4, F32x4};

/// Exhaustive widen-then-narrow round trip over all 65536 bit patterns.
#[test]
fn test_widen_round_trip_is_exact_for_all_non_nan_patterns() {
    for bits in 0..=u16::MAX {
        let h = F16::from_bits(bits);
        if h.is_nan() {
            // NaN payloads are implementation-defined; classification must
            // survive instead.
            assert!(h.to_f32().is_nan(), "pattern {bits:#06X} lost NaN-ness");
            assert!(F16::from_f32(h.to_f32()).is_nan());
            continue;
        }
        let back = F16::from_f32(h.to_f32());
        assert_eq!(back, h, "pattern {bits:#06X} changed in round trip");
    }
}

/// Widening agrees with the reference conversion the platform provides.
#[test]
fn test_widen_matches_reference_on_normals() {
    // Spot values with known exact f32 representations.
    let cases: &[(u16, f32)] = &[
        (0x3C00, 1.0),
        (0xBC00, -1.0),
        (0x4000, 2.0),
        (0x3800, 0.5),
        (0x7BFF, 65504.0),
        (0x0400, 6.103_515_6e-5),  // smallest normal
        (0x0001, 5.960_464_5e-8),  // smallest subnormal
        (0x03FF, 6.097_555_2e-5),  // largest subnormal
    ];
    for &(bits, expected) in cases {
        let widened = F16::from_bits(bits).to_f32();
        assert_eq!(widened, expected, "pattern {bits:#06X}");
    }
}

/// Narrowing saturates far-out-of-range magnitudes to signed infinity and
/// flushes sub-subnormal magnitudes to signed zero.
#[test]
fn test_narrowing_saturation_and_underflow() {
    assert_eq!(F16::from_f32(1.0e30), F16::INFINITY);
    assert_eq!(F16::from_f32(-1.0e30), F16::NEG_INFINITY);
    assert_eq!(F16::from_f32(f32::MAX), F16::INFINITY);

    let below_min = 1.0e-10f32;
    assert_eq!(F16::from_f32(below_min), F16::ZERO);
    assert_eq!(F16::from_f32(-below_min), F16::NEG_ZERO);
    assert_eq!(F16::from_f32(f32::MIN_POSITIVE), F16::ZERO);
}

/// Narrowing a value that is already exactly representable is lossless.
#[test]
fn test_narrowing_exact_values_random_sweep() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut checked = 0u32;

    while checked < 10_000 {
        let bits: u16 = rng.random();
        let h = F16::from_bits(bits);
        if h.is_nan() {
            continue;
        }
        assert_eq!(F16::from_f32(h.to_f32()), h, "pattern {bits:#06X}");
        checked += 1;
    }
}

/// Round-to-nearest-even at the 10-bit mantissa boundary.
#[test]
fn test_round_to_nearest_even() {
    // Between 1.0 (0x3C00) and the next half (1.0009765625 = 0x3C01): the
    // midpoint ties to the even mantissa, 1.0.
    let midpoint = 1.000_488_28f32; // 1 + 2^-11
    assert_eq!(F16::from_f32(midpoint), F16::ONE);
    // Just above the midpoint rounds up.
    let above = f32::from_bits(midpoint.to_bits() + 1);
    assert_eq!(F16::from_f32(above), F16::from_bits(0x3C01));
    // The next midpoint (between 0x3C01 and 0x3C02) ties up to even 0x3C02.
    let midpoint2 = 1.001_464_8f32; // 1 + 3·2^-11
    assert_eq!(F16::from_f32(midpoint2), F16::from_bits(0x3C02));
}

/// Componentwise behaviour of the four-lane form, mixed specials.
#[test]
fn test_four_lane_codec_componentwise() {
    let v = F32x4::new(3.5, -65520.0, f32::NAN, -5.0e-10);
    let h = F16x4::from_f32x4(v);

    assert_eq!(h.x.to_f32(), 3.5);
    assert_eq!(h.y, F16::NEG_INFINITY);
    assert!(h.z.is_nan());
    assert_eq!(h.w, F16::NEG_ZERO);

    let w = h.to_f32x4();
    assert_eq!(w.x, 3.5);
    assert_eq!(w.y, f32::NEG_INFINITY);
    assert!(w.z.is_nan());
    assert_eq!(w.w.to_bits(), (-0.0f32).to_bits());
}
