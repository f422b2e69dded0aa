//! Quaternion algebra for composing and applying 3D rotations.
//!
//! Every operation takes its operands by value and returns a new quaternion.
//! Rotations compose right to left: "apply `q1`, then `q2`" is `q2 * q1`.

use std::ops::{Neg, Add, Sub, Mul, Div};
use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use log::{debug, warn};

use crate::error::{QuatError, QuatResult};
use crate::matrix::Mat3x3;
use crate::vector::Vec3;

/// Largest norm deviation `to_rotation_matrix` accepts without a warning.
const UNIT_NORM_TOLERANCE: f64 = 1e-6;

/// Below this `sqrt(1 - w²)` the rotation axis is undefined.
const AXIS_EPSILON: f64 = 1e-12;

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug, Pod, Zeroable)]
pub struct Quaternion {
    pub w: f64,
    pub v: Vec3,
}
impl Quaternion {
    pub fn new(w: f64, xi: f64, yj: f64, zk: f64) -> Self {
        Self {
            w,
            v: Vec3::new(xi, yj, zk),
        }
    }

    pub fn from_sv(w: f64, v: Vec3) -> Self {
        Self { w, v }
    }

    /// The rotation that leaves every vector in place.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Embeds a vector as the pure quaternion `(0, v)`.
    pub fn pure(v: Vec3) -> Self {
        Self::from_sv(0.0, v)
    }

    pub fn x(&self) -> f64 { self.v.x }
    pub fn y(&self) -> f64 { self.v.y }
    pub fn z(&self) -> f64 { self.v.z }

    /// Components in `(w, x, y, z)` order.
    pub fn to_array(self) -> [f64; 4] {
        bytemuck::cast(self)
    }

    pub fn norm_sq(&self) -> f64 {
        self.w*self.w + self.v.len_sq()
    }

    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Scales the quaternion to unit norm.
    ///
    /// Fails with [`QuatError::DivisionByZero`] for the zero quaternion.
    pub fn normalized(self) -> QuatResult<Self> {
        let n = self.norm();
        if n == 0.0 {
            return Err(QuatError::DivisionByZero("normalize"));
        }
        Ok(self / n)
    }

    pub fn conjugate(self) -> Self {
        Self::from_sv(self.w, -self.v)
    }

    /// Multiplicative inverse, `conjugate / |q|²`. Equal to the conjugate
    /// for unit quaternions.
    pub fn inverse(self) -> QuatResult<Self> {
        let n2 = self.norm_sq();
        if n2 == 0.0 {
            return Err(QuatError::DivisionByZero("inverse"));
        }
        Ok(self.conjugate() / n2)
    }

    /// Hamilton product `self * other`. Not commutative.
    pub fn multiply(self, other: Self) -> Self {
        let (w1, x1, y1, z1) = (self.w, self.v.x, self.v.y, self.v.z);
        let (w2, x2, y2, z2) = (other.w, other.v.x, other.v.y, other.v.z);

        Self::new(
            w1*w2 - x1*x2 - y1*y2 - z1*z2,
            w1*x2 + x1*w2 + y1*z2 - z1*y2,
            w1*y2 - x1*z2 + y1*w2 + z1*x2,
            w1*z2 + x1*y2 - y1*x2 + z1*w2,
        )
    }

    /// Rotates `v` by conjugation, `q * (0, v) * q⁻¹`.
    ///
    /// Uses the true inverse, so any nonzero quaternion works; its scale
    /// cancels out. Fails with [`QuatError::DivisionByZero`] if `self` is zero.
    pub fn rotate_vector<V: Into<Vec3>>(self, v: V) -> QuatResult<Vec3> {
        let inv = self.inverse()?;
        let res = self * Self::pure(v.into()) * inv;
        Ok(res.v)
    }

    /// Right-handed rotation of `angle` radians about `axis`. The axis need
    /// not be normalized, but must be nonzero.
    pub fn from_axis_angle<V: Into<Vec3>>(axis: V, angle: f64) -> QuatResult<Self> {
        let axis = axis.into();
        let len = axis.len();
        if len == 0.0 {
            return Err(QuatError::InvalidArgument(
                String::from("rotation axis must be non-zero")
            ));
        }
        let (s, c) = (angle / 2.0).sin_cos();
        Ok(Self::from_sv(c, (axis / len) * s))
    }

    /// Axis and angle (radians) of a unit quaternion.
    ///
    /// The identity rotation has no defined axis; it is reported as
    /// `(1, 0, 0)` with angle 0.
    pub fn to_axis_angle(self) -> (Vec3, f64) {
        let w = self.w.clamp(-1.0, 1.0);
        let angle = 2.0 * w.acos();
        let s = (1.0 - w*w).sqrt();
        if s < AXIS_EPSILON {
            return (Vec3::unit_x(), 0.0);
        }
        (self.v / s, angle)
    }

    /// Expands the quaternion into a row-major rotation matrix.
    ///
    /// `self` must be unit norm. This is not enforced: a non-unit quaternion
    /// yields a matrix that is not orthonormal.
    pub fn to_rotation_matrix(self) -> Mat3x3 {
        let n = self.norm();
        if (n - 1.0).abs() > UNIT_NORM_TOLERANCE {
            warn!("to_rotation_matrix: quaternion {} has norm {}, matrix will not be orthonormal", self, n);
        }

        let (w, x, y, z) = (self.w, self.v.x, self.v.y, self.v.z);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;

        let xy = x * y;
        let xz = x * z;
        let yz = y * z;

        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat3x3::new(
            1.0 - 2.0*(yy + zz), 2.0*(xy - wz),       2.0*(xz + wy),
            2.0*(xy + wz),       1.0 - 2.0*(xx + zz), 2.0*(yz - wx),
            2.0*(xz - wy),       2.0*(yz + wx),       1.0 - 2.0*(xx + yy),
        )
    }

    /// Recovers a unit quaternion from a rotation matrix (Shepperd's method).
    ///
    /// The branch is picked by the trace, or else by the largest diagonal
    /// entry, so the divisor `s` never approaches zero. Input that is not a
    /// rotation matrix gives an unspecified result.
    pub fn from_rotation_matrix<M: Into<Mat3x3>>(m: M) -> Self {
        let m: Mat3x3 = m.into();
        let (m00, m01, m02) = (m.r0.x, m.r0.y, m.r0.z);
        let (m10, m11, m12) = (m.r1.x, m.r1.y, m.r1.z);
        let (m20, m21, m22) = (m.r2.x, m.r2.y, m.r2.z);

        let trace = m.trace();
        let q = if trace > 0.0 {
            debug!("from_rotation_matrix: trace branch (trace = {trace})");
            // s = 4w
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (m21 - m12) / s,
                (m02 - m20) / s,
                (m10 - m01) / s,
            )
        }
        else if m00 > m11 && m00 > m22 {
            debug!("from_rotation_matrix: m00 branch (trace = {trace})");
            // s = 4x
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(
                (m21 - m12) / s,
                0.25 * s,
                (m01 + m10) / s,
                (m02 + m20) / s,
            )
        }
        else if m11 > m22 {
            debug!("from_rotation_matrix: m11 branch (trace = {trace})");
            // s = 4y
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new(
                (m02 - m20) / s,
                (m01 + m10) / s,
                0.25 * s,
                (m12 + m21) / s,
            )
        }
        else {
            debug!("from_rotation_matrix: m22 branch (trace = {trace})");
            // s = 4z
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new(
                (m10 - m01) / s,
                (m02 + m20) / s,
                (m12 + m21) / s,
                0.25 * s,
            )
        };

        // The selected component is 0.25 * s > 0, so the norm is nonzero.
        q / q.norm()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_sv(-self.w, -self.v)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::from_sv(self.w + other.w, self.v + other.v)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::from_sv(self.w - other.w, self.v - other.v)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.multiply(other)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::from_sv(self.w * other, self.v * other)
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::from_sv(self.w / other, self.v / other)
    }
}

impl From<[f64; 4]> for Quaternion {
    /// Components in `(w, x, y, z)` order.
    fn from(arr: [f64; 4]) -> Quaternion {
        bytemuck::cast(arr)
    }
}

impl From<cgmath::Quaternion<f64>> for Quaternion {
    fn from(quat: cgmath::Quaternion<f64>) -> Quaternion {
        Quaternion::from_sv(quat.s, quat.v.into())
    }
}

impl From<Quaternion> for cgmath::Quaternion<f64> {
    fn from(quat: Quaternion) -> cgmath::Quaternion<f64> {
        cgmath::Quaternion::from_sv(quat.w, quat.v.into())
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.w, &other.w, epsilon)
            && self.v.abs_diff_eq(&other.v, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.w, &other.w, epsilon, max_relative)
            && self.v.relative_eq(&other.v, epsilon, max_relative)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quaternion({}, {}, {}, {})", self.w, self.v.x, self.v.y, self.v.z)
    }
}
