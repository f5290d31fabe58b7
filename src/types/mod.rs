//! Plain value aggregates consumed and produced by the kernels: lane
//! vectors, column-major matrices, quaternions, rigid transforms and 16-bit
//! float storage.

pub mod half;
pub mod matrix;
pub mod quaternion;
pub mod vector;

pub use half::{F16, F16x2, F16x3, F16x4};
pub use matrix::{Mat3x3, Mat4x4};
pub use quaternion::{Quat, RigidTransform};
pub use vector::{F32x2, F32x3, F32x4, I32x2, I32x3, I32x4, U32x2, U32x3, U32x4};
