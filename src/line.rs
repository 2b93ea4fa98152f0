use crate::cubic_bezier::CubicBezierSegment;
use crate::scalar::Scalar;
use crate::segment::{RenderSink, Segment};
use crate::{Point, Vector};

use core::ops::Range;

/// A straight trajectory between two points.
///
/// `is_section` distinguishes a bounded segment from an unbounded directional
/// line used only for geometric tests. The flag does not change any curve
/// operation and is ignored by equality.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct StraightTrajectory<S> {
    pub from: Point<S>,
    pub to: Point<S>,
    pub is_section: bool,
}

impl<S: Scalar> StraightTrajectory<S> {
    /// A bounded straight segment.
    #[inline]
    pub fn new(from: Point<S>, to: Point<S>) -> Self {
        StraightTrajectory {
            from,
            to,
            is_section: true,
        }
    }

    /// An unbounded directional line through two points.
    #[inline]
    pub fn line(from: Point<S>, to: Point<S>) -> Self {
        StraightTrajectory {
            from,
            to,
            is_section: false,
        }
    }

    /// The chord of another curve: the straight segment between its
    /// endpoints.
    #[inline]
    pub fn chord_of<T: Segment<Scalar = S>>(segment: &T) -> Self {
        StraightTrajectory::new(segment.from(), segment.to())
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }

    /// Arc length, equal to the chord distance for a straight segment.
    #[inline]
    pub fn length(&self) -> S {
        (self.to - self.from).length()
    }

    #[inline]
    pub fn magnitude(&self) -> S {
        self.length()
    }

    /// A straight segment never turns.
    #[inline]
    pub fn delta_angle(&self) -> S {
        S::ZERO
    }

    #[inline]
    pub fn direction(&self) -> Vector<S> {
        (self.to - self.from).normalize()
    }

    #[inline]
    pub fn start_direction(&self) -> Vector<S> {
        self.direction()
    }

    #[inline]
    pub fn end_direction(&self) -> Vector<S> {
        -self.direction()
    }

    /// Sample the segment at t. Values outside `[0..1]` extrapolate
    /// linearly.
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    /// The tangent of a straight segment is its direction at every t.
    #[inline]
    pub fn tangent(&self, _t: S) -> Vector<S> {
        self.direction()
    }

    /// Split this segment into two halves at `t`.
    ///
    /// Both halves are bounded sections regardless of `is_section`.
    #[inline]
    pub fn split(&self, t: S) -> (Self, Self) {
        let split_point = self.sample(t);

        (
            StraightTrajectory::new(self.from, split_point),
            StraightTrajectory::new(split_point, self.to),
        )
    }

    /// Return the bounded sub-segment inside a given range of t.
    pub fn split_range(&self, t_range: Range<S>) -> Self {
        self.split_range_with_section(t_range, true)
    }

    /// Return the sub-segment inside a given range of t with an explicit
    /// `is_section` flag.
    pub fn split_range_with_section(&self, t_range: Range<S>, is_section: bool) -> Self {
        StraightTrajectory {
            from: self.sample(t_range.start),
            to: self.sample(t_range.end),
            is_section,
        }
    }

    /// Swap the direction of the segment, keeping `is_section`.
    #[inline]
    pub fn flip(&self) -> Self {
        StraightTrajectory {
            from: self.to,
            to: self.from,
            is_section: self.is_section,
        }
    }

    /// Parameter reached after traveling `distance` of arc length from
    /// `t = 0`; exact for straight segments.
    ///
    /// Not finite on a zero-length segment.
    #[inline]
    pub fn travel(&self, distance: S) -> S {
        distance / self.length()
    }

    /// Parameter reached after traveling `distance` of arc length from
    /// `start`.
    #[inline]
    pub fn travel_from(&self, start: S, distance: S) -> S {
        start + self.travel(distance)
    }

    /// Arc length of the sub-segment between two parameters.
    #[inline]
    pub fn distance(&self, from: S, to: S) -> S {
        self.length() * (to - from)
    }

    /// The exact cubic representation of this segment, with interior control
    /// points at one and two thirds of the chord.
    pub fn to_cubic(&self) -> CubicBezierSegment<S> {
        let third = S::ONE / S::THREE;
        CubicBezierSegment {
            from: self.from,
            ctrl1: self.from.lerp(self.to, third),
            ctrl2: self.from.lerp(self.to, S::TWO * third),
            to: self.to,
        }
    }

    /// Hand this segment to a render sink as an exact cubic.
    pub fn render<R: RenderSink<S>>(&self, sink: &mut R) {
        sink.draw_cubic(&self.to_cubic());
    }
}

impl<S: Scalar> PartialEq for StraightTrajectory<S> {
    /// Structural equality over the defining endpoints; `is_section` is not
    /// part of the geometry and is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl<S: Scalar> Segment for StraightTrajectory<S> {
    impl_segment!(S);
}

#[cfg(test)]
use crate::{point, CubicTrajectory};

#[test]
fn straight_basic_measurements() {
    let s = StraightTrajectory::new(point(0.0f32, 0.0, 0.0), point(10.0, 0.0, 0.0));

    assert_eq!(s.length(), 10.0);
    assert_eq!(s.magnitude(), 10.0);
    assert_eq!(s.delta_angle(), 0.0);
    assert_eq!(s.sample(0.0), s.from);
    assert_eq!(s.sample(1.0), s.to);
    assert_eq!(s.sample(0.5), point(5.0, 0.0, 0.0));
    assert_eq!(s.travel(3.0), 0.3);
    assert_eq!(s.travel_from(0.2, 3.0), 0.5);
    assert_eq!(s.direction(), crate::vector(1.0, 0.0, 0.0));
    assert_eq!(s.end_direction(), crate::vector(-1.0, 0.0, 0.0));
}

#[test]
fn straight_split_range() {
    let s = StraightTrajectory::new(point(0.0f32, 0.0, 0.0), point(10.0, 0.0, 0.0));
    let cut = s.split_range(0.25..0.75);

    assert_eq!(cut.from, point(2.5, 0.0, 0.0));
    assert_eq!(cut.to, point(7.5, 0.0, 0.0));
    assert_eq!(cut.length(), 5.0);

    // A reversed range runs the opposite way.
    let reversed = s.split_range(0.75..0.25);
    assert_eq!(reversed.from, point(7.5, 0.0, 0.0));
    assert_eq!(reversed.to, point(2.5, 0.0, 0.0));
}

#[test]
fn straight_divide() {
    let s = StraightTrajectory::new(point(0.0f32, 2.0, 0.0), point(4.0, 2.0, 8.0));
    let (first, second) = s.divide();

    assert_eq!(first.to, second.from);
    assert_eq!(first.to, s.sample(0.5));
    assert_eq!(first.length() + second.length(), s.length());
}

#[test]
fn straight_flip_is_involutive() {
    let s = StraightTrajectory::line(point(1.0f32, 2.0, 3.0), point(4.0, 5.0, 6.0));
    let back = s.flip().flip();

    assert_eq!(back, s);
    assert!(!back.is_section);
}

#[test]
fn straight_equality_ignores_section_flag() {
    let a = StraightTrajectory::new(point(0.0f32, 0.0, 0.0), point(1.0, 0.0, 0.0));
    let b = StraightTrajectory::line(point(0.0f32, 0.0, 0.0), point(1.0, 0.0, 0.0));

    assert_eq!(a, b);
}

#[test]
fn straight_extrapolates_outside_domain() {
    let s = StraightTrajectory::new(point(0.0f32, 0.0, 0.0), point(10.0, 0.0, 0.0));

    assert_eq!(s.sample(1.5), point(15.0, 0.0, 0.0));
    assert_eq!(s.sample(-0.5), point(-5.0, 0.0, 0.0));
}

#[test]
fn zero_length_travel_is_not_finite() {
    let p = point(1.0f32, 2.0, 3.0);
    let s = StraightTrajectory::new(p, p);

    assert_eq!(s.length(), 0.0);
    assert_eq!(s.magnitude(), 0.0);
    // Callers must guard the degenerate case before normalizing by length.
    assert!(!s.travel(1.0).is_finite());
    assert!(!s.travel_from(0.0, 1.0).is_finite());
}

#[test]
fn chord_of_a_cubic_joins_its_endpoints() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    });
    let chord = StraightTrajectory::chord_of(&c);

    assert_eq!(chord.from, c.from());
    assert_eq!(chord.to, c.to());
    assert!(chord.is_section);
    assert_eq!(chord.length(), c.magnitude());
}

#[test]
fn straight_as_cubic_matches_samples() {
    let s = StraightTrajectory::new(point(0.0f32, 0.0, 0.0), point(9.0, 3.0, 0.0));
    let cubic = s.to_cubic();

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert!((cubic.sample(t) - s.sample(t)).length() < 1e-4);
    }
}
