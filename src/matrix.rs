use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

use crate::vector::Vec3;

/// Row-major 3 x 3 matrix.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug, Pod, Zeroable)]
pub struct Mat3x3 {
    pub r0: Vec3,
    pub r1: Vec3,
    pub r2: Vec3,
}
impl Mat3x3 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        r0c0: f64, r0c1: f64, r0c2: f64,
        r1c0: f64, r1c1: f64, r1c2: f64,
        r2c0: f64, r2c1: f64, r2c2: f64,
    ) -> Self {
        Self::from_rows(
            Vec3::new(r0c0, r0c1, r0c2),
            Vec3::new(r1c0, r1c1, r1c2),
            Vec3::new(r2c0, r2c1, r2c2),
        )
    }

    pub fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self { r0, r1, r2 }
    }

    pub fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    pub fn transpose(&self) -> Self {
        Self::new(
            self.r0.x, self.r1.x, self.r2.x,
            self.r0.y, self.r1.y, self.r2.y,
            self.r0.z, self.r1.z, self.r2.z,
        )
    }

    pub fn trace(&self) -> f64 {
        self.r0.x + self.r1.y + self.r2.z
    }

    pub fn determinant(&self) -> f64 {
        self.r0.dot(self.r1.cross(self.r2))
    }
}

impl From<[[f64; 3]; 3]> for Mat3x3 {
    fn from(mat: [[f64; 3]; 3]) -> Mat3x3 {
        bytemuck::cast(mat)
    }
}

impl From<Mat3x3> for [[f64; 3]; 3] {
    fn from(mat: Mat3x3) -> [[f64; 3]; 3] {
        bytemuck::cast(mat)
    }
}

impl From<cgmath::Matrix3<f64>> for Mat3x3 {
    /// cgmath stores columns, so its columns become our rows' transpose.
    fn from(mat: cgmath::Matrix3<f64>) -> Mat3x3 {
        Mat3x3::from_rows(mat.x.into(), mat.y.into(), mat.z.into()).transpose()
    }
}

impl From<Mat3x3> for cgmath::Matrix3<f64> {
    fn from(mat: Mat3x3) -> cgmath::Matrix3<f64> {
        let t = mat.transpose();
        cgmath::Matrix3::from_cols(t.r0.into(), t.r1.into(), t.r2.into())
    }
}

impl Mul<Vec3> for Mat3x3 {
    type Output = Vec3;

    fn mul(self, other: Vec3) -> Self::Output {
        Vec3::new(self.r0.dot(other), self.r1.dot(other), self.r2.dot(other))
    }
}

impl Mul for Mat3x3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        let cols = other.transpose();
        Mat3x3::from_rows(
            cols * self.r0,
            cols * self.r1,
            cols * self.r2,
        )
    }
}

impl AbsDiffEq for Mat3x3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.r0.abs_diff_eq(&other.r0, epsilon)
            && self.r1.abs_diff_eq(&other.r1, epsilon)
            && self.r2.abs_diff_eq(&other.r2, epsilon)
    }
}

impl RelativeEq for Mat3x3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.r0.relative_eq(&other.r0, epsilon, max_relative)
            && self.r1.relative_eq(&other.r1, epsilon, max_relative)
            && self.r2.relative_eq(&other.r2, epsilon, max_relative)
    }
}

#[test]
fn mat_multiply() {
    let mat1 = Mat3x3::new(
        1.0, 2.0, 3.0,
        4.0, 5.0, 6.0,
        7.0, 8.0, 9.0,
    );
    let mat2 = Mat3x3::new(
        9.0, 8.0, 7.0,
        6.0, 5.0, 4.0,
        3.0, 2.0, 1.0,
    );
    let res = mat1 * mat2;

    assert!(res == Mat3x3::new(
        30.0,  24.0,  18.0,
        84.0,  69.0,  54.0,
        138.0, 114.0, 90.0,
    ));
}

#[test]
fn multiply_mat_by_vec() {
    let mat = Mat3x3::new(
        1.0, 2.0, 3.0,
        4.0, 5.0, 6.0,
        7.0, 8.0, 9.0,
    );
    let res = mat * Vec3::new(1.0, 0.0, -1.0);
    assert!(res == Vec3::new(-2.0, -2.0, -2.0));
}

#[test]
fn arrays_are_row_major() {
    let mat = Mat3x3::from([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);
    assert!(mat.r0 == Vec3::new(1.0, 2.0, 3.0));
    assert!(mat.r2.z == 9.0);
    assert!(mat.trace() == 15.0);

    let arr: [[f64; 3]; 3] = mat.transpose().into();
    assert!(arr[0] == [1.0, 4.0, 7.0]);
}

#[test]
fn cgmath_conversion_keeps_entries() {
    use cgmath::Matrix;

    let mat = Mat3x3::new(
        1.0, 2.0, 3.0,
        4.0, 5.0, 6.0,
        7.0, 8.0, 10.0,
    );
    let cg: cgmath::Matrix3<f64> = mat.into();
    // Column 0, row 1.
    assert!(cg.x.y == 4.0);
    assert!(cg.row(0) == cgmath::Vector3::new(1.0, 2.0, 3.0));
    assert!(Mat3x3::from(cg) == mat);
}

#[test]
fn determinant_of_identity_and_singular() {
    assert!(Mat3x3::identity().determinant() == 1.0);
    let singular = Mat3x3::new(
        1.0, 2.0, 3.0,
        2.0, 4.0, 6.0,
        0.0, 1.0, 1.0,
    );
    assert!(singular.determinant() == 0.0);
}
