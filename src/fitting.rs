//! Fitting cubic curves to endpoint/tangent boundary conditions.
//!
//! The interior control points are placed by a Hermite-to-bézier conversion:
//! each control point sits a third of the chord distance from its endpoint,
//! along the endpoint's tangent. The resulting curve is C1-continuous with
//! its boundary directions and has a strictly increasing arc-length
//! parameterization for well-separated, non-antiparallel inputs.

use crate::scalar::Scalar;
use crate::utils::reflect;
use crate::{CubicBezierSegment, Point, Vector};

/// Fit a cubic to two endpoint/tangent pairs.
///
/// `end_dir` points backward into the curve ("the direction leaving the
/// end"), matching the `end_direction` convention of the resulting curve.
/// When `normalize` is false the input directions are trusted to be unit
/// length.
pub fn fit_cubic<S: Scalar>(
    start_pos: Point<S>,
    start_dir: Vector<S>,
    end_pos: Point<S>,
    end_dir: Vector<S>,
    normalize: bool,
) -> CubicBezierSegment<S> {
    let (start_dir, end_dir) = if normalize {
        (start_dir.normalize(), end_dir.normalize())
    } else {
        (start_dir, end_dir)
    };

    let offset = (end_pos - start_pos).length() / S::THREE;

    CubicBezierSegment {
        from: start_pos,
        ctrl1: start_pos + start_dir * offset,
        ctrl2: end_pos + end_dir * offset,
        to: end_pos,
    }
}

/// Fit a cubic from one endpoint/tangent pair toward a target point.
///
/// The end direction is derived by reflecting the start direction across the
/// chord, so the curve bends symmetrically toward the target. When the start
/// direction points away from the target the chord itself is used as the
/// tangent pair, avoiding an S-shaped overshoot.
pub fn fit_cubic_toward<S: Scalar>(
    start_pos: Point<S>,
    start_dir: Vector<S>,
    end_pos: Point<S>,
) -> CubicBezierSegment<S> {
    let chord = end_pos - start_pos;

    if start_dir.dot(chord) < S::ZERO {
        return fit_cubic(start_pos, chord, end_pos, -chord, true);
    }

    let end_dir = -reflect(start_dir.normalize(), chord.normalize());
    fit_cubic(start_pos, start_dir, end_pos, end_dir, true)
}

#[cfg(test)]
use crate::{point, vector};

#[test]
fn fit_is_tangent_continuous() {
    let start_dir = vector(0.0f32, 0.0, 1.0);
    let end_dir = vector(-1.0f32, 0.0, 0.0);
    let c = fit_cubic(
        point(0.0, 0.0, 0.0),
        start_dir,
        point(10.0, 0.0, 10.0),
        end_dir,
        true,
    );

    // The derivative at t = 0 is parallel to the start direction and the
    // derivative at t = 1 runs against the (backward-pointing) end direction.
    let start_tangent = c.derivative(0.0);
    assert!(start_tangent.cross(start_dir).length() < 1e-4);
    assert!(start_tangent.dot(start_dir) > 0.0);

    let end_tangent = c.derivative(1.0);
    assert!(end_tangent.cross(end_dir).length() < 1e-4);
    assert!(end_tangent.dot(end_dir) < 0.0);
}

#[test]
fn fit_scales_but_does_not_normalize_when_asked() {
    let c = fit_cubic(
        point(0.0f32, 0.0, 0.0),
        vector(2.0, 0.0, 0.0),
        point(3.0, 0.0, 0.0),
        vector(-2.0, 0.0, 0.0),
        false,
    );

    // Non-normalized tangents shift the interior control points.
    assert_eq!(c.ctrl1, point(2.0, 0.0, 0.0));
    assert_eq!(c.ctrl2, point(1.0, 0.0, 0.0));
}

#[test]
fn toward_reaches_the_target() {
    let c = fit_cubic_toward(
        point(0.0f32, 0.0, 0.0),
        vector(1.0, 0.0, 0.0),
        point(10.0, 0.0, 10.0),
    );

    assert_eq!(c.from, point(0.0, 0.0, 0.0));
    assert_eq!(c.to, point(10.0, 0.0, 10.0));
    assert!(c.derivative(0.0).cross(vector(1.0, 0.0, 0.0)).length() < 1e-4);
}

#[test]
fn toward_bends_symmetrically() {
    // Start direction deviates 45° from the chord; the leaving direction
    // must deviate by the mirrored 45° on the other side.
    let c = fit_cubic_toward(
        point(0.0f32, 0.0, 0.0),
        vector(1.0, 0.0, 0.0),
        point(10.0, 0.0, 10.0),
    );

    let chord = vector(1.0f32, 0.0, 1.0).normalize();
    let entering = c.derivative(0.0).normalize();
    let leaving = c.derivative(1.0).normalize();

    let in_dev = entering.dot(chord);
    let out_dev = leaving.dot(chord);
    assert!((in_dev - out_dev).abs() < 1e-4);
}

#[test]
fn toward_falls_back_to_the_chord_behind_the_start() {
    // The target sits behind the start direction; the fit degenerates to the
    // chord instead of overshooting into an S shape.
    let c = fit_cubic_toward(
        point(0.0f32, 0.0, 0.0),
        vector(-1.0, 0.0, 0.0),
        point(10.0, 0.0, 0.0),
    );

    assert!((c.sample(0.5) - point(5.0, 0.0, 0.0)).length() < 1e-4);
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let p = c.sample(t);
        assert!(p.y.abs() < 1e-4 && p.z.abs() < 1e-4);
    }
}
