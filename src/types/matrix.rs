//! Column-major 3×3 and 4×4 float matrices.
//!
//! A matrix is stored as column vectors: `m[i]` indexes the i-th column and
//! each column is a lane vector. Element (row `r`, column `c`) is therefore
//! `m[c][r]`. Only the capabilities the rotation and hash kernels need are
//! provided.

use std::ops::{Index, IndexMut};

use crate::types::vector::{F32x3, F32x4};

/// 3×3 float matrix, three `F32x3` columns.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Mat3x3 {
    pub c0: F32x3,
    pub c1: F32x3,
    pub c2: F32x3,
}

impl Mat3x3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        c0: F32x3::new(1.0, 0.0, 0.0),
        c1: F32x3::new(0.0, 1.0, 0.0),
        c2: F32x3::new(0.0, 0.0, 1.0),
    };

    /// Constructs a matrix from three column vectors.
    #[inline(always)]
    pub const fn from_columns(c0: F32x3, c1: F32x3, c2: F32x3) -> Self {
        Self { c0, c1, c2 }
    }
}

impl Index<usize> for Mat3x3 {
    type Output = F32x3;

    #[inline(always)]
    fn index(&self, column: usize) -> &F32x3 {
        match column {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            _ => panic!("column index out of range: {column}"),
        }
    }
}

impl IndexMut<usize> for Mat3x3 {
    #[inline(always)]
    fn index_mut(&mut self, column: usize) -> &mut F32x3 {
        match column {
            0 => &mut self.c0,
            1 => &mut self.c1,
            2 => &mut self.c2,
            _ => panic!("column index out of range: {column}"),
        }
    }
}

/// 4×4 float matrix, four `F32x4` columns.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Mat4x4 {
    pub c0: F32x4,
    pub c1: F32x4,
    pub c2: F32x4,
    pub c3: F32x4,
}

impl Mat4x4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        c0: F32x4::new(1.0, 0.0, 0.0, 0.0),
        c1: F32x4::new(0.0, 1.0, 0.0, 0.0),
        c2: F32x4::new(0.0, 0.0, 1.0, 0.0),
        c3: F32x4::new(0.0, 0.0, 0.0, 1.0),
    };

    /// Constructs a matrix from four column vectors.
    #[inline(always)]
    pub const fn from_columns(c0: F32x4, c1: F32x4, c2: F32x4, c3: F32x4) -> Self {
        Self { c0, c1, c2, c3 }
    }
}

impl Index<usize> for Mat4x4 {
    type Output = F32x4;

    #[inline(always)]
    fn index(&self, column: usize) -> &F32x4 {
        match column {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            3 => &self.c3,
            _ => panic!("column index out of range: {column}"),
        }
    }
}

impl IndexMut<usize> for Mat4x4 {
    #[inline(always)]
    fn index_mut(&mut self, column: usize) -> &mut F32x4 {
        match column {
            0 => &mut self.c0,
            1 => &mut self.c1,
            2 => &mut self.c2,
            3 => &mut self.c3,
            _ => panic!("column index out of range: {column}"),
        }
    }
}
