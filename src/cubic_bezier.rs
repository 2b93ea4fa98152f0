use crate::fitting;
use crate::scalar::Scalar;
use crate::segment::{RenderSink, Segment};
use crate::utils::vector_angle;
use crate::{Point, Vector};

use core::cell::Cell;
use core::fmt;
use core::ops::Range;

/// Maximum recursion depth of the adaptive flattening used for arc length
/// and arc-length travel.
const MAX_FLATTEN_DEPTH: u32 = 16;

/// A 3d curve segment defined by four points: the beginning of the segment,
/// two control points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t. Values outside `[0..1]` extrapolate along the
    /// cubic polynomial.
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;
        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    #[inline]
    fn derivative_coefficients(&self, t: S) -> (S, S, S, S) {
        let t2 = t * t;
        (
            -S::THREE * t2 + S::SIX * t - S::THREE,
            S::NINE * t2 - S::value(12.0) * t + S::THREE,
            -S::NINE * t2 + S::SIX * t,
            S::THREE * t2,
        )
    }

    /// Sample the curve's derivative at t.
    pub fn derivative(&self, t: S) -> Vector<S> {
        let (c0, c1, c2, c3) = self.derivative_coefficients(t);
        self.from.to_vector() * c0
            + self.ctrl1.to_vector() * c1
            + self.ctrl2.to_vector() * c2
            + self.to.to_vector() * c3
    }

    /// Split this curve into two sub-curves at `t` using the de Casteljau
    /// construction. Both halves are geometrically exact.
    pub fn split(&self, t: S) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        let ctrl1a = self.from + (self.ctrl1 - self.from) * t;
        let ctrl2a = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl1aa = ctrl1a + (ctrl2a - ctrl1a) * t;
        let ctrl3a = self.ctrl2 + (self.to - self.ctrl2) * t;
        let ctrl2aa = ctrl2a + (ctrl3a - ctrl2a) * t;
        let ctrl1aaa = ctrl1aa + (ctrl2aa - ctrl1aa) * t;

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: ctrl1aaa,
            },
            CubicBezierSegment {
                from: ctrl1aaa,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }

    /// Return the sub-curve inside a given range of t.
    ///
    /// This is equivalent to splitting at the range's end points. A reversed
    /// range produces the sub-curve running in the opposite direction.
    pub fn split_range(&self, t_range: Range<S>) -> Self {
        let (t0, t1) = (t_range.start, t_range.end);
        let from = self.sample(t0);
        let to = self.sample(t1);

        // Hull of the derivative curve, scaled down by the degree.
        let d0 = self.ctrl1 - self.from;
        let d1 = self.ctrl2 - self.ctrl1;
        let d2 = self.to - self.ctrl2;

        let dt = t1 - t0;
        let ctrl1 = from + quadratic_sample(d0, d1, d2, t0) * dt;
        let ctrl2 = to - quadratic_sample(d0, d1, d2, t1) * dt;

        CubicBezierSegment {
            from,
            ctrl1,
            ctrl2,
            to,
        }
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        CubicBezierSegment {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }

    /// Whether the control polygon exceeds the chord by at most `tolerance`.
    ///
    /// The arc length is bounded below by the chord and above by the control
    /// polygon, so a flat piece's chord approximates its arc length within
    /// `tolerance`.
    fn is_flat(&self, tolerance: S) -> bool {
        let chord = (self.to - self.from).length();
        let polygon = (self.ctrl1 - self.from).length()
            + (self.ctrl2 - self.ctrl1).length()
            + (self.to - self.ctrl2).length();

        polygon - chord <= tolerance
    }

    /// Approximates the curve with a sequence of line segments, invoking the
    /// callback with the end point and `t` of each piece, starting after the
    /// curve's start point. The final callback is at exactly `t = 1`.
    pub fn for_each_flattened_with_t<F: FnMut(Point<S>, S)>(
        &self,
        tolerance: S,
        callback: &mut F,
    ) {
        debug_assert!(tolerance > S::ZERO);
        flatten_recursive(self, S::ZERO, S::ONE, tolerance, MAX_FLATTEN_DEPTH, callback);
    }

    /// Compute the arc length of the segment using a flattened
    /// approximation.
    pub fn approximate_length(&self, tolerance: S) -> S {
        let mut length = S::ZERO;
        let mut previous = self.from;

        self.for_each_flattened_with_t(tolerance, &mut |position, _| {
            length += (position - previous).length();
            previous = position;
        });

        length
    }

    /// Parameter reached after traveling `distance` of arc length forward
    /// from `t = 0`, within the precision of the flattened approximation.
    ///
    /// Monotonically non-decreasing in `distance`. Distances beyond the end
    /// of the curve extrapolate the parameter past `t = 1` proportionally to
    /// the total arc length.
    pub fn t_at_distance(&self, distance: S, tolerance: S) -> S {
        if distance <= S::ZERO {
            return S::ZERO;
        }

        let mut traveled = S::ZERO;
        let mut previous = self.from;
        let mut previous_t = S::ZERO;
        let mut found = None;

        self.for_each_flattened_with_t(tolerance, &mut |position, t| {
            if found.is_none() {
                let piece = (position - previous).length();
                if piece > S::ZERO && traveled + piece >= distance {
                    found = Some(previous_t + (t - previous_t) * (distance - traveled) / piece);
                }
                traveled += piece;
                previous = position;
                previous_t = t;
            }
        });

        match found {
            Some(t) => t,
            None if traveled > S::ZERO => S::ONE + (distance - traveled) / traveled,
            None => S::ZERO,
        }
    }
}

#[inline]
fn quadratic_sample<S: Scalar>(v0: Vector<S>, v1: Vector<S>, v2: Vector<S>, t: S) -> Vector<S> {
    let a = v0.lerp(v1, t);
    let b = v1.lerp(v2, t);
    a.lerp(b, t)
}

fn flatten_recursive<S: Scalar, F: FnMut(Point<S>, S)>(
    curve: &CubicBezierSegment<S>,
    t0: S,
    t1: S,
    tolerance: S,
    depth: u32,
    callback: &mut F,
) {
    if depth == 0 || curve.is_flat(tolerance) {
        callback(curve.to, t1);
        return;
    }

    let (first, second) = curve.split(S::HALF);
    let t_mid = (t0 + t1) * S::HALF;
    flatten_recursive(&first, t0, t_mid, tolerance, depth - 1, callback);
    flatten_recursive(&second, t_mid, t1, tolerance, depth - 1, callback);
}

/// A cubic trajectory: a [`CubicBezierSegment`] together with its derived
/// measurements.
///
/// The chord magnitude, turning angle and boundary directions are computed
/// once at construction. The arc length is computed lazily on first access
/// and cached; the control points are immutable so the cache never needs
/// invalidation. The cache is a plain overwrite cell, which makes the type
/// `Send` but not `Sync`; a racing recomputation would store the identical
/// value.
pub struct CubicTrajectory<S> {
    curve: CubicBezierSegment<S>,
    magnitude: S,
    delta_angle: S,
    direction: Vector<S>,
    start_direction: Vector<S>,
    end_direction: Vector<S>,
    length: Cell<Option<S>>,
}

impl<S: Scalar> CubicTrajectory<S> {
    pub fn new(curve: CubicBezierSegment<S>) -> Self {
        let chord = curve.to - curve.from;
        let start_direction = (curve.ctrl1 - curve.from).normalize();
        let end_direction = (curve.ctrl2 - curve.to).normalize();

        CubicTrajectory {
            curve,
            magnitude: chord.length(),
            delta_angle: vector_angle(start_direction, -end_direction),
            direction: chord.normalize(),
            start_direction,
            end_direction,
            length: Cell::new(None),
        }
    }

    /// Fit a cubic trajectory to two endpoint/tangent pairs. See
    /// [`fitting::fit_cubic`].
    pub fn from_tangents(
        start_pos: Point<S>,
        start_dir: Vector<S>,
        end_pos: Point<S>,
        end_dir: Vector<S>,
        normalize: bool,
    ) -> Self {
        CubicTrajectory::new(fitting::fit_cubic(
            start_pos, start_dir, end_pos, end_dir, normalize,
        ))
    }

    /// Fit a cubic trajectory from one endpoint/tangent pair toward a target
    /// point. See [`fitting::fit_cubic_toward`].
    pub fn toward(start_pos: Point<S>, start_dir: Vector<S>, end_pos: Point<S>) -> Self {
        CubicTrajectory::new(fitting::fit_cubic_toward(start_pos, start_dir, end_pos))
    }

    /// Fit a cubic trajectory through another curve's endpoints and boundary
    /// directions.
    pub fn from_segment<T: Segment<Scalar = S>>(segment: &T) -> Self {
        CubicTrajectory::from_tangents(
            segment.from(),
            segment.start_direction(),
            segment.to(),
            segment.end_direction(),
            true,
        )
    }

    /// The underlying control-point representation.
    #[inline]
    pub fn curve(&self) -> &CubicBezierSegment<S> {
        &self.curve
    }

    fn arc_tolerance() -> S {
        S::value(1e-3)
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.curve.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.curve.to
    }

    /// Arc length along the curve, computed on first access and cached.
    pub fn length(&self) -> S {
        match self.length.get() {
            Some(length) => length,
            None => {
                let length = self.curve.approximate_length(Self::arc_tolerance());
                self.length.set(Some(length));
                length
            }
        }
    }

    /// Straight-line chord distance from the start point to the end point.
    #[inline]
    pub fn magnitude(&self) -> S {
        self.magnitude
    }

    /// Total turning angle between the entering and leaving tangents, in
    /// radians.
    #[inline]
    pub fn delta_angle(&self) -> S {
        self.delta_angle
    }

    /// Unit vector from the start point toward the end point.
    #[inline]
    pub fn direction(&self) -> Vector<S> {
        self.direction
    }

    /// Unit tangent direction entering the curve, `normalize(ctrl1 - from)`.
    #[inline]
    pub fn start_direction(&self) -> Vector<S> {
        self.start_direction
    }

    /// Unit direction leaving the curve at its end, `normalize(ctrl2 - to)`,
    /// pointing backward into the curve.
    #[inline]
    pub fn end_direction(&self) -> Vector<S> {
        self.end_direction
    }

    /// Sample the curve at t. Values outside `[0..1]` extrapolate along the
    /// cubic polynomial.
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.curve.sample(t)
    }

    /// The non-normalized derivative at t.
    #[inline]
    pub fn tangent(&self, t: S) -> Vector<S> {
        self.curve.derivative(t)
    }

    /// Split this trajectory into two geometrically exact halves at `t`.
    pub fn split(&self, t: S) -> (Self, Self) {
        let (first, second) = self.curve.split(t);
        (CubicTrajectory::new(first), CubicTrajectory::new(second))
    }

    /// Return the trajectory whose `[0..1]` domain maps onto `t_range` of
    /// this one.
    pub fn split_range(&self, t_range: Range<S>) -> Self {
        CubicTrajectory::new(self.curve.split_range(t_range))
    }

    /// Swap the direction of the trajectory.
    pub fn flip(&self) -> Self {
        CubicTrajectory::new(self.curve.flip())
    }

    /// Parameter reached after traveling `distance` of arc length forward
    /// from `t = 0`.
    pub fn travel(&self, distance: S) -> S {
        self.curve.t_at_distance(distance, Self::arc_tolerance())
    }

    /// Parameter reached after traveling `distance` of arc length forward
    /// from `start`, by traveling along the remaining sub-curve and mapping
    /// the result back to this curve's domain.
    pub fn travel_from(&self, start: S, distance: S) -> S {
        start + self.split_range(start..S::ONE).travel(distance) * (S::ONE - start)
    }

    /// Arc length of the sub-curve between two parameters, measured by
    /// cutting and taking the cut curve's length.
    pub fn distance(&self, from: S, to: S) -> S {
        self.split_range(from..to).length()
    }

    /// Hand the underlying cubic to a render sink.
    pub fn render<R: RenderSink<S>>(&self, sink: &mut R) {
        sink.draw_cubic(&self.curve);
    }
}

// The derives would bound on `S: Clone`/`S: Debug`, which is not enough for
// the `Cell` cache; `Scalar` carries the `Copy` the cell needs.
impl<S: Scalar> Clone for CubicTrajectory<S> {
    fn clone(&self) -> Self {
        CubicTrajectory {
            curve: self.curve,
            magnitude: self.magnitude,
            delta_angle: self.delta_angle,
            direction: self.direction,
            start_direction: self.start_direction,
            end_direction: self.end_direction,
            length: self.length.clone(),
        }
    }
}

impl<S: Scalar> fmt::Debug for CubicTrajectory<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CubicTrajectory")
            .field("curve", &self.curve)
            .field("magnitude", &self.magnitude)
            .field("delta_angle", &self.delta_angle)
            .field("direction", &self.direction)
            .field("start_direction", &self.start_direction)
            .field("end_direction", &self.end_direction)
            .field("length", &self.length.get())
            .finish()
    }
}

impl<S: Scalar> PartialEq for CubicTrajectory<S> {
    /// Structural equality over the defining control points; the derived
    /// measurements are functions of them.
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve
    }
}

impl<S: Scalar> Segment for CubicTrajectory<S> {
    impl_segment!(S);
}

#[cfg(test)]
use crate::{point, vector};

#[test]
fn collinear_cubic_degenerates_to_its_chord() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(1.0, 0.0, 0.0),
        ctrl2: point(2.0, 0.0, 0.0),
        to: point(3.0, 0.0, 0.0),
    });

    assert_eq!(c.length(), 3.0);
    assert_eq!(c.magnitude(), 3.0);
    assert_eq!(c.sample(0.5), point(1.5, 0.0, 0.0));
    assert!(c.delta_angle().abs() < 1e-6);
}

#[test]
fn sample_hits_endpoints() {
    let c = CubicBezierSegment {
        from: point(1.0f32, 2.0, 3.0),
        ctrl1: point(4.0, 0.0, -2.0),
        ctrl2: point(-1.0, 5.0, 1.0),
        to: point(6.0, 6.0, 6.0),
    };

    assert_eq!(c.sample(0.0), c.from);
    assert_eq!(c.sample(1.0), c.to);
}

#[test]
fn sample_extrapolates_outside_domain() {
    // Uniform collinear control points parameterize the line linearly.
    let c = CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(1.0, 0.0, 0.0),
        ctrl2: point(2.0, 0.0, 0.0),
        to: point(3.0, 0.0, 0.0),
    };

    assert!((c.sample(1.5) - point(4.5, 0.0, 0.0)).length() < 1e-5);
    assert!((c.sample(-0.5) - point(-1.5, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn split_range_identity() {
    let c = CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(2.0, 4.0, 0.0),
        ctrl2: point(6.0, 4.0, 2.0),
        to: point(8.0, 0.0, 2.0),
    };
    let cut = c.split_range(0.0..1.0);

    assert!((cut.from - c.from).length() < 1e-5);
    assert!((cut.ctrl1 - c.ctrl1).length() < 1e-5);
    assert!((cut.ctrl2 - c.ctrl2).length() < 1e-5);
    assert!((cut.to - c.to).length() < 1e-5);
}

#[test]
fn split_range_matches_samples() {
    let c = CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(2.0, 4.0, 0.0),
        ctrl2: point(6.0, 4.0, 2.0),
        to: point(8.0, 0.0, 2.0),
    };
    let cut = c.split_range(0.2..0.7);

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let expected = c.sample(0.2 + t * 0.5);
        assert!((cut.sample(t) - expected).length() < 1e-4);
    }
}

#[test]
fn reversed_split_range_flips() {
    let c = CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(2.0, 4.0, 0.0),
        ctrl2: point(6.0, 4.0, 2.0),
        to: point(8.0, 0.0, 2.0),
    };
    let reversed = c.split_range(1.0..0.0);
    let flipped = c.flip();

    assert!((reversed.from - flipped.from).length() < 1e-4);
    assert!((reversed.ctrl1 - flipped.ctrl1).length() < 1e-4);
    assert!((reversed.ctrl2 - flipped.ctrl2).length() < 1e-4);
    assert!((reversed.to - flipped.to).length() < 1e-4);
}

#[test]
fn divide_halves_meet_at_the_midpoint() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    });
    let (first, second) = c.divide();

    assert!((first.to() - second.from()).length() < 1e-5);
    assert!((first.to() - c.sample(0.5)).length() < 1e-5);

    let total = first.length() + second.length();
    assert!((total - c.length()).abs() < 1e-2 * c.length());
}

#[test]
fn flip_is_involutive() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 1.0, 0.0),
        ctrl1: point(2.0, 4.0, 0.0),
        ctrl2: point(6.0, 4.0, 2.0),
        to: point(8.0, 0.0, 2.0),
    });

    assert_eq!(c.flip().flip(), c);
}

#[test]
fn trajectory_clones_and_formats() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(2.0, 4.0, 0.0),
        ctrl2: point(6.0, 4.0, 2.0),
        to: point(8.0, 0.0, 2.0),
    });

    let copy = c.clone();
    assert_eq!(copy, c);
    assert_eq!(copy.magnitude(), c.magnitude());

    let text = format!("{:?}", c);
    assert!(text.contains("CubicTrajectory"));
}

#[test]
fn zero_length_cubic_travel_stays_at_the_start() {
    let p = point(3.0f32, 1.0, 2.0);
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: p,
        ctrl1: p,
        ctrl2: p,
        to: p,
    });

    assert_eq!(c.length(), 0.0);
    assert_eq!(c.magnitude(), 0.0);
    // Distance never accumulates, so the parameter never advances.
    assert_eq!(c.travel(1.0), 0.0);
    assert_eq!(c.travel_from(0.0, 1.0), 0.0);
}

#[test]
fn length_is_cached_after_first_access() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(2.0, 4.0, 0.0),
        ctrl2: point(6.0, 4.0, 2.0),
        to: point(8.0, 0.0, 2.0),
    });

    assert!(c.length.get().is_none());
    let first = c.length();
    assert!(c.length.get().is_some());
    assert_eq!(c.length(), first);
}

#[test]
fn length_between_chord_and_polygon() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    });

    let polygon = 12.0;
    assert!(c.length() >= c.magnitude());
    assert!(c.length() <= polygon);
}

#[test]
fn travel_is_monotonic() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    });

    let mut last = 0.0;
    for i in 0..=30 {
        let distance = c.length() * 1.2 * i as f32 / 30.0;
        let t = c.travel(distance);
        assert!(t >= last, "travel({}) went backward", distance);
        last = t;
    }
    // Distances past the end extrapolate past t = 1.
    assert!(last > 1.0);
}

#[test]
fn travel_round_trips_with_distance() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    });
    let length = c.length();

    for i in 1..10 {
        let expected = length * i as f32 / 10.0;
        let measured = c.distance(0.0, c.travel(expected));
        assert!(
            (measured - expected).abs() < 1e-2 * length,
            "distance(0, travel({})) == {}",
            expected,
            measured
        );
    }
}

#[test]
fn travel_from_composes() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    });
    let length = c.length();

    // Traveling in two legs lands close to traveling in one.
    let one_leg = c.travel(length * 0.6);
    let first_leg = c.travel(length * 0.3);
    let two_legs = c.travel_from(first_leg, c.distance(first_leg, one_leg));
    assert!((two_legs - one_leg).abs() < 1e-2);
}

#[test]
fn from_segment_keeps_boundary_data() {
    let source = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    });
    let refit = CubicTrajectory::from_segment(&source);

    assert!((refit.from() - source.from()).length() < 1e-5);
    assert!((refit.to() - source.to()).length() < 1e-5);
    assert!((refit.start_direction() - source.start_direction()).length() < 1e-5);
    assert!((refit.end_direction() - source.end_direction()).length() < 1e-5);
}

#[test]
fn tangent_matches_derivative_direction() {
    let c = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0f32, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    });

    let start = c.tangent(0.0);
    assert!(start.cross(vector(0.0, 0.0, 1.0)).length() < 1e-5);
    assert!(start.dot(vector(0.0, 0.0, 1.0)) > 0.0);
}
