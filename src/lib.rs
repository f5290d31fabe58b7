//! Fixed-width vector/matrix math kernel for real-time graphics and
//! simulation code.
//!
//! The crate centres on the conversion and hashing/PRNG routines that need
//! bit-exact reasoning: reinterpreting values between equal-width
//! representations ([`bits`]), the 32↔16-bit float codec ([`half`]),
//! combined sine/cosine evaluation ([`trig`]), quaternion ↔ rotation-matrix
//! conversion ([`rotation`]), deterministic vector hashing ([`hash`]) and a
//! seedable xorshift generator with wide-output draws ([`random`]).
//!
//! All routines are pure and stateless except the generator, whose single
//! state word is an explicit owned value — no hidden process-wide state.
//! Nothing here performs I/O, blocks, or allocates on the per-call path;
//! [`batch`] adds allocating slice-level convenience on top.

pub mod batch;
pub mod bits;
pub mod error;
pub mod half;
pub mod hash;
pub mod random;
pub mod rotation;
pub mod trig;
pub mod types;

pub use bits::{asfloat, asint, asuint};
pub use error::LanemathError;
pub use hash::{hash, hashwide};
pub use random::Random;
pub use trig::{sincos, sincos2, sincos3, sincos4};
pub use types::{
    F16, F16x2, F16x3, F16x4, F32x2, F32x3, F32x4, I32x2, I32x3, I32x4, Mat3x3, Mat4x4, Quat,
    RigidTransform, U32x2, U32x3, U32x4,
};
