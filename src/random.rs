use std::ops::Range;

use crate::quaternion::Quaternion;
use crate::vector::Vec3;

/// Constant for converting u64 numbers to f64s in [0,1).
/// It is the maximum value of mantissa plus one.
pub const F64_MANTISSA: f64 = (1u64 << f64::MANTISSA_DIGITS) as f64; // is 2^53


/// Seeded xorshift generator, so sampled test inputs are reproducible.
pub struct Randf64 {
    state: u64,
}
impl Randf64 {
    pub fn seed(seed: u64) -> Self {
        Self {
            state: seed,
        }
    }
    pub fn next(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        (self.state >> 11) as f64 / F64_MANTISSA
    }
    pub fn next_in(&mut self, range: Range<f64>) -> f64 {
        (range.end - range.start) * self.next() + range.start
    }
    pub fn vec3_in(&mut self, range: Range<f64>) -> Vec3 {
        Vec3::new(
            self.next_in(range.clone()),
            self.next_in(range.clone()),
            self.next_in(range),
        )
    }
    /// Arbitrary quaternion whose norm is kept away from zero.
    pub fn nonzero_quat(&mut self) -> Quaternion {
        loop {
            let q = Quaternion::new(
                self.next_in(-3.0..3.0),
                self.next_in(-3.0..3.0),
                self.next_in(-3.0..3.0),
                self.next_in(-3.0..3.0),
            );
            if q.norm() > 0.1 {
                return q;
            }
        }
    }
    pub fn unit_quat(&mut self) -> Quaternion {
        let q = self.nonzero_quat();
        q / q.norm()
    }
}

#[test]
fn same_seed_same_sequence() {
    let mut a = Randf64::seed(42);
    let mut b = Randf64::seed(42);
    for _ in 0..16 {
        let x = a.next();
        assert!(x == b.next());
        assert!((0.0..1.0).contains(&x));
    }
}
