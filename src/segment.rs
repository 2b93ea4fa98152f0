use crate::cubic_bezier::CubicBezierSegment;
use crate::scalar::Scalar;
use crate::{Point, Vector};

use core::ops::Range;

/// Common API to trajectory types.
///
/// Every operation maps the parametric domain `[0..1]` onto the curve; `t`
/// values outside the domain extrapolate. There is no separate copy
/// operation: all implementors are value types and `Clone` produces an
/// independent structural copy.
pub trait Segment: Clone + Sized {
    type Scalar: Scalar;

    /// Start of the curve.
    fn from(&self) -> Point<Self::Scalar>;

    /// End of the curve.
    fn to(&self) -> Point<Self::Scalar>;

    /// Arc length along the curve.
    fn length(&self) -> Self::Scalar;

    /// Straight-line chord distance from the start point to the end point.
    fn magnitude(&self) -> Self::Scalar;

    /// Total turning angle between the entering and leaving tangents, in
    /// radians.
    fn delta_angle(&self) -> Self::Scalar;

    /// Unit vector from the start point toward the end point.
    fn direction(&self) -> Vector<Self::Scalar>;

    /// Unit tangent direction entering the curve at `t = 0`.
    fn start_direction(&self) -> Vector<Self::Scalar>;

    /// Unit direction leaving the curve at `t = 1`, pointing backward into
    /// the curve.
    fn end_direction(&self) -> Vector<Self::Scalar>;

    /// Sample the curve at t.
    fn sample(&self, t: Self::Scalar) -> Point<Self::Scalar>;

    /// Tangent at t: the constant direction for a straight segment, the
    /// non-normalized derivative for a cubic.
    fn tangent(&self, t: Self::Scalar) -> Vector<Self::Scalar>;

    /// Split this curve into two sub-curves at `t`, each re-based to its own
    /// `[0..1]` domain.
    fn split(&self, t: Self::Scalar) -> (Self, Self);

    /// Return the curve whose `[0..1]` domain maps onto `t_range` of this
    /// one.
    ///
    /// A reversed range (`start > end`) produces a curve running in the
    /// opposite direction, consistent with `flip`.
    fn split_range(&self, t_range: Range<Self::Scalar>) -> Self;

    /// Split the curve at its parametric midpoint.
    fn divide(&self) -> (Self, Self) {
        self.split(Self::Scalar::HALF)
    }

    /// Swap the direction of the curve.
    fn flip(&self) -> Self;

    /// Parameter reached after traveling `distance` of arc length forward
    /// from `t = 0`.
    ///
    /// Monotonically non-decreasing in `distance` for non-negative
    /// `distance`. On a zero-length curve the result is not finite; callers
    /// must guard the degenerate case.
    fn travel(&self, distance: Self::Scalar) -> Self::Scalar;

    /// Parameter reached after traveling `distance` of arc length forward
    /// from `start`.
    fn travel_from(&self, start: Self::Scalar, distance: Self::Scalar) -> Self::Scalar;

    /// Arc length of the sub-curve between two parameters.
    fn distance(&self, from: Self::Scalar, to: Self::Scalar) -> Self::Scalar;
}

/// Receives curve primitives on behalf of an external renderer.
///
/// Straight segments are handed over as exact cubics, so a sink only ever
/// sees one primitive kind.
pub trait RenderSink<S: Scalar> {
    fn draw_cubic(&mut self, curve: &CubicBezierSegment<S>);
}

macro_rules! impl_segment {
    ($S:ty) => {
        type Scalar = $S;
        fn from(&self) -> Point<$S> {
            self.from()
        }
        fn to(&self) -> Point<$S> {
            self.to()
        }
        fn length(&self) -> $S {
            self.length()
        }
        fn magnitude(&self) -> $S {
            self.magnitude()
        }
        fn delta_angle(&self) -> $S {
            self.delta_angle()
        }
        fn direction(&self) -> Vector<$S> {
            self.direction()
        }
        fn start_direction(&self) -> Vector<$S> {
            self.start_direction()
        }
        fn end_direction(&self) -> Vector<$S> {
            self.end_direction()
        }
        fn sample(&self, t: $S) -> Point<$S> {
            self.sample(t)
        }
        fn tangent(&self, t: $S) -> Vector<$S> {
            self.tangent(t)
        }
        fn split(&self, t: $S) -> (Self, Self) {
            self.split(t)
        }
        fn split_range(&self, t_range: Range<$S>) -> Self {
            self.split_range(t_range)
        }
        fn flip(&self) -> Self {
            self.flip()
        }
        fn travel(&self, distance: $S) -> $S {
            self.travel(distance)
        }
        fn travel_from(&self, start: $S, distance: $S) -> $S {
            self.travel_from(start, distance)
        }
        fn distance(&self, from: $S, to: $S) -> $S {
            self.distance(from, to)
        }
    };
}
