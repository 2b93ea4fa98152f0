//! Small vector helpers shared across the crate.

use crate::scalar::Scalar;
use crate::Vector;

/// Angle between two vectors, in radians, in `[0, π]`.
///
/// Not finite if either vector has zero length.
#[inline]
pub fn vector_angle<S: Scalar>(a: Vector<S>, b: Vector<S>) -> S {
    let dot = a.normalize().dot(b.normalize());
    dot.max(-S::ONE).min(S::ONE).acos()
}

/// Reflection of `v` across `axis` (expected to be unit length).
#[inline]
pub fn reflect<S: Scalar>(v: Vector<S>, axis: Vector<S>) -> Vector<S> {
    axis * (S::TWO * v.dot(axis)) - v
}

#[cfg(test)]
use crate::vector;

#[test]
fn angle_between_vectors() {
    let a: f32 = vector_angle(vector(1.0, 0.0, 0.0), vector(0.0, 0.0, 1.0));
    assert!((a - core::f32::consts::FRAC_PI_2).abs() < 1e-6);

    let b: f32 = vector_angle(vector(2.0, 0.0, 0.0), vector(5.0, 0.0, 0.0));
    assert!(b.abs() < 1e-6);
}

#[test]
fn reflect_across_axis() {
    let r = reflect(vector(1.0f32, 1.0, 0.0), vector(1.0, 0.0, 0.0));
    assert!((r - vector(1.0, -1.0, 0.0)).length() < 1e-6);
}
