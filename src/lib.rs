//! Quaternions for representing, composing and converting 3D rotations.
//!
//! A [`Quaternion`] converts to and from axis-angle pairs and row-major
//! [`Mat3x3`] rotation matrices. Angles are always radians.

mod vector;
mod matrix;
mod quaternion;
#[cfg(test)]
mod random;
pub mod config;
pub mod error;

pub use crate::error::{QuatError, QuatResult};
pub use crate::matrix::Mat3x3;
pub use crate::quaternion::Quaternion;
pub use crate::vector::Vec3;
