//! Bulk application of the kernels over slices.
//!
//! The kernels themselves are O(1), allocation-free calls; this module is
//! the convenience layer for applying them across many values at once,
//! with a sequential and a rayon-parallel variant of each operation. The
//! parallel forms pay thread-pool overhead, so they only win on large
//! inputs — as a rule of thumb, tens of thousands of elements and up.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::hash::{hash, VectorHash};
use crate::trig::sincos;

/// Combined sine/cosine over every element of a slice.
pub trait SinCosSlice {
    type Output;

    /// Sequential evaluation.
    fn scalar_sin_cos(self) -> Self::Output;

    /// Parallel evaluation on the rayon thread pool.
    fn par_sin_cos(self) -> Self::Output;
}

impl SinCosSlice for &[f32] {
    type Output = (Vec<f32>, Vec<f32>);

    #[inline(always)]
    fn scalar_sin_cos(self) -> Self::Output {
        assert!(!self.is_empty(), "Size can't be empty (size zero)");

        self.iter().map(|&x| sincos(x)).unzip()
    }

    #[inline(always)]
    fn par_sin_cos(self) -> Self::Output {
        assert!(!self.is_empty(), "Size can't be empty (size zero)");

        self.par_iter().map(|&x| sincos(x)).unzip()
    }
}

/// Per-element hashing over a slice of hashable values.
pub trait HashSlice {
    /// Sequential evaluation.
    fn scalar_hash(self) -> Vec<u32>;

    /// Parallel evaluation on the rayon thread pool.
    fn par_hash(self) -> Vec<u32>;
}

impl<T> HashSlice for &[T]
where
    T: VectorHash + Copy + Sync,
{
    #[inline(always)]
    fn scalar_hash(self) -> Vec<u32> {
        assert!(!self.is_empty(), "Size can't be empty (size zero)");

        self.iter().map(|&v| hash(v)).collect()
    }

    #[inline(always)]
    fn par_hash(self) -> Vec<u32> {
        assert!(!self.is_empty(), "Size can't be empty (size zero)");

        self.par_iter().map(|&v| hash(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::U32x3;

    #[test]
    fn parallel_sin_cos_matches_sequential() {
        let data: Vec<f32> = (0..257).map(|i| i as f32 * 0.1).collect();
        let (s1, c1) = data.as_slice().scalar_sin_cos();
        let (s2, c2) = data.as_slice().par_sin_cos();
        assert_eq!(s1, s2);
        assert_eq!(c1, c2);
    }

    #[test]
    fn parallel_hash_matches_sequential() {
        let data: Vec<U32x3> = (0..100).map(|i| U32x3::new(i, i + 1, i + 2)).collect();
        assert_eq!(data.as_slice().scalar_hash(), data.as_slice().par_hash());
    }

    #[test]
    #[should_panic(expected = "Size can't be empty")]
    fn empty_input_panics() {
        let empty: &[f32] = &[];
        let _ = empty.scalar_sin_cos();
    }
}
