//! Deterministic pseudo-random number generation.
//!
//! [`Random`] is a single 32-bit xorshift state. Every draw applies the
//! invertible update (shift triple 13, 17, 5) and derives its value from
//! the *new* state, so the state and the last output stay synchronized and
//! reseeding reproduces the exact sequence. Wide draws consume the state
//! once per lane in x, y, z, w order; `next_uint4()` is bit-for-bit four
//! scalar draws packed into a vector.
//!
//! This is fast, statistically reasonable mixing — not cryptographic.
//! The generator owns no synchronization; one instance belongs to one
//! draw sequence, and concurrent callers need their own instance or an
//! external lock.
//!
//! Zero is a fixed point of the xorshift update, so a zero seed would
//! produce a generator stuck on zero forever. [`Random::try_new`] rejects
//! it; [`Random::new`] substitutes [`Random::REPLACEMENT_SEED`]. All draw
//! calls on a constructed generator are total — they never fail.

use crate::error::LanemathError;
use crate::types::{F32x2, F32x3, F32x4, U32x2, U32x3, U32x4};

/// Seedable xorshift generator with scalar and wide draw variants.
///
/// ```
/// use lanemath::random::Random;
///
/// let mut rng = Random::new(1);
/// assert_eq!(rng.next_uint(), 270_369);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Random {
    state: u32,
}

impl Random {
    /// Seed substituted for zero by [`Random::new`].
    pub const REPLACEMENT_SEED: u32 = 0x9E37_79B9;

    /// Creates a generator, silently replacing a zero seed with
    /// [`Random::REPLACEMENT_SEED`].
    #[inline(always)]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 {
                Self::REPLACEMENT_SEED
            } else {
                seed
            },
        }
    }

    /// Creates a generator, rejecting the degenerate zero seed.
    ///
    /// # Errors
    ///
    /// Returns [`LanemathError::InvalidSeed`] when `seed` is zero.
    #[inline(always)]
    pub const fn try_new(seed: u32) -> Result<Self, LanemathError> {
        if seed == 0 {
            Err(LanemathError::InvalidSeed { seed })
        } else {
            Ok(Self { state: seed })
        }
    }

    /// Returns the current state word. Two generators with equal state
    /// produce equal future sequences.
    #[inline(always)]
    pub const fn state(&self) -> u32 {
        self.state
    }

    // One xorshift step; the output is the post-update state.
    #[inline(always)]
    fn next_state(&mut self) -> u32 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.state = s;
        s
    }

    /// Draws one uniformly distributed `u32`.
    #[inline(always)]
    pub fn next_uint(&mut self) -> u32 {
        self.next_state()
    }

    /// Draws two `u32` lanes, x first.
    #[inline(always)]
    pub fn next_uint2(&mut self) -> U32x2 {
        let x = self.next_state();
        let y = self.next_state();
        U32x2::new(x, y)
    }

    /// Draws three `u32` lanes, in x, y, z order.
    #[inline(always)]
    pub fn next_uint3(&mut self) -> U32x3 {
        let x = self.next_state();
        let y = self.next_state();
        let z = self.next_state();
        U32x3::new(x, y, z)
    }

    /// Draws four `u32` lanes, in x, y, z, w order.
    #[inline(always)]
    pub fn next_uint4(&mut self) -> U32x4 {
        let x = self.next_state();
        let y = self.next_state();
        let z = self.next_state();
        let w = self.next_state();
        U32x4::new(x, y, z, w)
    }

    // Maps a draw onto [1, 2) by filling the mantissa, then shifts to
    // [0, 1). Uses 23 of the 32 state bits.
    #[inline(always)]
    fn unit_float(bits: u32) -> f32 {
        f32::from_bits(0x3F80_0000 | (bits >> 9)) - 1.0
    }

    /// Draws a uniformly distributed float in [0, 1).
    #[inline(always)]
    pub fn next_float(&mut self) -> f32 {
        Self::unit_float(self.next_state())
    }

    /// Draws two floats in [0, 1), x first.
    #[inline(always)]
    pub fn next_float2(&mut self) -> F32x2 {
        let x = self.next_float();
        let y = self.next_float();
        F32x2::new(x, y)
    }

    /// Draws three floats in [0, 1), in x, y, z order.
    #[inline(always)]
    pub fn next_float3(&mut self) -> F32x3 {
        let x = self.next_float();
        let y = self.next_float();
        let z = self.next_float();
        F32x3::new(x, y, z)
    }

    /// Draws four floats in [0, 1), in x, y, z, w order.
    #[inline(always)]
    pub fn next_float4(&mut self) -> F32x4 {
        let x = self.next_float();
        let y = self.next_float();
        let z = self.next_float();
        let w = self.next_float();
        F32x4::new(x, y, z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_first_draw_for_seed_one() {
        // Regression pin for the xorshift (13, 17, 5) update: state 1
        // becomes 0x42021 after one step.
        let mut rng = Random::new(1);
        assert_eq!(rng.next_uint(), 270_369);
    }

    #[test]
    fn zero_seed_is_rejected_or_replaced() {
        assert_eq!(
            Random::try_new(0),
            Err(LanemathError::InvalidSeed { seed: 0 })
        );
        let mut rng = Random::new(0);
        assert_eq!(rng.state(), Random::REPLACEMENT_SEED);
        assert_ne!(rng.next_uint(), 0);
    }

    #[test]
    fn wide_draws_consume_state_in_lane_order() {
        let mut a = Random::new(123);
        let mut b = Random::new(123);
        let v = a.next_uint4();
        assert_eq!(v.x, b.next_uint());
        assert_eq!(v.y, b.next_uint());
        assert_eq!(v.z, b.next_uint());
        assert_eq!(v.w, b.next_uint());
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn state_and_last_output_stay_synchronized() {
        let mut rng = Random::new(77);
        let drawn = rng.next_uint();
        assert_eq!(drawn, rng.state());
    }

    #[test]
    fn unit_floats_stay_in_half_open_range() {
        let mut rng = Random::new(9);
        for _ in 0..10_000 {
            let f = rng.next_float();
            assert!((0.0..1.0).contains(&f), "{f} out of [0, 1)");
        }
    }
}
