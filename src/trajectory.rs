use crate::cubic_bezier::CubicTrajectory;
use crate::line::StraightTrajectory;
use crate::scalar::Scalar;
use crate::segment::{RenderSink, Segment};
use crate::{Point, Vector};

use core::fmt;
use core::ops::Range;

/// A parametric trajectory over the domain `[0..1]`: either a straight
/// segment or a cubic bézier curve.
///
/// The enum is the type tag; matching on it avoids dynamic dispatch where
/// shape-specific handling matters, while [`Segment`] provides the uniform
/// contract.
pub enum Trajectory<S> {
    Straight(StraightTrajectory<S>),
    Cubic(CubicTrajectory<S>),
}

// Manual impls: the cubic variant's lazy cache needs the `Copy` that
// `Scalar` implies, which derives would not require of `S`.
impl<S: Scalar> Clone for Trajectory<S> {
    fn clone(&self) -> Self {
        match self {
            Trajectory::Straight(s) => Trajectory::Straight(*s),
            Trajectory::Cubic(c) => Trajectory::Cubic(c.clone()),
        }
    }
}

impl<S: Scalar> fmt::Debug for Trajectory<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Trajectory::Straight(s) => f.debug_tuple("Straight").field(s).finish(),
            Trajectory::Cubic(c) => f.debug_tuple("Cubic").field(c).finish(),
        }
    }
}

impl<S: Scalar> Trajectory<S> {
    #[inline]
    pub fn is_straight(&self) -> bool {
        matches!(self, Trajectory::Straight(..))
    }

    #[inline]
    pub fn is_cubic(&self) -> bool {
        matches!(self, Trajectory::Cubic(..))
    }

    #[inline]
    pub fn as_straight(&self) -> Option<&StraightTrajectory<S>> {
        match self {
            Trajectory::Straight(segment) => Some(segment),
            Trajectory::Cubic(..) => None,
        }
    }

    #[inline]
    pub fn as_cubic(&self) -> Option<&CubicTrajectory<S>> {
        match self {
            Trajectory::Straight(..) => None,
            Trajectory::Cubic(trajectory) => Some(trajectory),
        }
    }

    pub fn from(&self) -> Point<S> {
        match self {
            Trajectory::Straight(s) => s.from(),
            Trajectory::Cubic(c) => c.from(),
        }
    }

    pub fn to(&self) -> Point<S> {
        match self {
            Trajectory::Straight(s) => s.to(),
            Trajectory::Cubic(c) => c.to(),
        }
    }

    pub fn length(&self) -> S {
        match self {
            Trajectory::Straight(s) => s.length(),
            Trajectory::Cubic(c) => c.length(),
        }
    }

    pub fn magnitude(&self) -> S {
        match self {
            Trajectory::Straight(s) => s.magnitude(),
            Trajectory::Cubic(c) => c.magnitude(),
        }
    }

    pub fn delta_angle(&self) -> S {
        match self {
            Trajectory::Straight(s) => s.delta_angle(),
            Trajectory::Cubic(c) => c.delta_angle(),
        }
    }

    pub fn direction(&self) -> Vector<S> {
        match self {
            Trajectory::Straight(s) => s.direction(),
            Trajectory::Cubic(c) => c.direction(),
        }
    }

    pub fn start_direction(&self) -> Vector<S> {
        match self {
            Trajectory::Straight(s) => s.start_direction(),
            Trajectory::Cubic(c) => c.start_direction(),
        }
    }

    pub fn end_direction(&self) -> Vector<S> {
        match self {
            Trajectory::Straight(s) => s.end_direction(),
            Trajectory::Cubic(c) => c.end_direction(),
        }
    }

    pub fn sample(&self, t: S) -> Point<S> {
        match self {
            Trajectory::Straight(s) => s.sample(t),
            Trajectory::Cubic(c) => c.sample(t),
        }
    }

    pub fn tangent(&self, t: S) -> Vector<S> {
        match self {
            Trajectory::Straight(s) => s.tangent(t),
            Trajectory::Cubic(c) => c.tangent(t),
        }
    }

    pub fn split(&self, t: S) -> (Self, Self) {
        match self {
            Trajectory::Straight(s) => {
                let (first, second) = s.split(t);
                (first.into(), second.into())
            }
            Trajectory::Cubic(c) => {
                let (first, second) = c.split(t);
                (first.into(), second.into())
            }
        }
    }

    pub fn split_range(&self, t_range: Range<S>) -> Self {
        match self {
            Trajectory::Straight(s) => s.split_range(t_range).into(),
            Trajectory::Cubic(c) => c.split_range(t_range).into(),
        }
    }

    /// Split the trajectory at its parametric midpoint.
    pub fn divide(&self) -> (Self, Self) {
        self.split(S::HALF)
    }

    pub fn flip(&self) -> Self {
        match self {
            Trajectory::Straight(s) => s.flip().into(),
            Trajectory::Cubic(c) => c.flip().into(),
        }
    }

    pub fn travel(&self, distance: S) -> S {
        match self {
            Trajectory::Straight(s) => s.travel(distance),
            Trajectory::Cubic(c) => c.travel(distance),
        }
    }

    pub fn travel_from(&self, start: S, distance: S) -> S {
        match self {
            Trajectory::Straight(s) => s.travel_from(start, distance),
            Trajectory::Cubic(c) => c.travel_from(start, distance),
        }
    }

    pub fn distance(&self, from: S, to: S) -> S {
        match self {
            Trajectory::Straight(s) => s.distance(from, to),
            Trajectory::Cubic(c) => c.distance(from, to),
        }
    }

    /// Hand the trajectory to a render sink as a cubic primitive.
    pub fn render<R: RenderSink<S>>(&self, sink: &mut R) {
        match self {
            Trajectory::Straight(s) => s.render(sink),
            Trajectory::Cubic(c) => c.render(sink),
        }
    }
}

impl<S: Scalar> PartialEq for Trajectory<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Trajectory::Straight(a), Trajectory::Straight(b)) => a == b,
            (Trajectory::Cubic(a), Trajectory::Cubic(b)) => a == b,
            _ => false,
        }
    }
}

impl<S> From<StraightTrajectory<S>> for Trajectory<S> {
    fn from(segment: StraightTrajectory<S>) -> Self {
        Trajectory::Straight(segment)
    }
}

impl<S> From<CubicTrajectory<S>> for Trajectory<S> {
    fn from(trajectory: CubicTrajectory<S>) -> Self {
        Trajectory::Cubic(trajectory)
    }
}

impl<S: Scalar> Segment for Trajectory<S> {
    impl_segment!(S);
}

#[cfg(test)]
use crate::{point, CubicBezierSegment};

#[test]
fn dispatch_matches_variants() {
    let straight: Trajectory<f32> =
        StraightTrajectory::new(point(0.0, 0.0, 0.0), point(10.0, 0.0, 0.0)).into();
    let cubic: Trajectory<f32> = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    })
    .into();

    assert!(straight.is_straight() && !straight.is_cubic());
    assert!(cubic.is_cubic() && straight.as_cubic().is_none());

    assert_eq!(straight.length(), 10.0);
    assert_eq!(straight.travel(3.0), 0.3);
    assert!(cubic.length() > cubic.magnitude());
}

#[test]
fn divide_rewraps_the_variant() {
    let straight: Trajectory<f32> =
        StraightTrajectory::new(point(0.0, 0.0, 0.0), point(10.0, 0.0, 0.0)).into();
    let (first, second) = straight.divide();

    assert!(first.is_straight() && second.is_straight());
    assert_eq!(first.to(), point(5.0, 0.0, 0.0));
    assert_eq!(second.from(), point(5.0, 0.0, 0.0));
}

#[test]
fn flip_round_trips_through_the_enum() {
    let cubic: Trajectory<f32> = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    })
    .into();

    assert_eq!(cubic.flip().flip(), cubic);
}
