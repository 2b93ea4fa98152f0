//! Axis-aligned bounding-box chains approximating a trajectory's swept
//! volume, for fast intersection pruning.

use crate::scalar::Scalar;
use crate::segment::RenderSink;
use crate::trajectory::Trajectory;
use crate::{Point, Vector};

use core::fmt;
use core::mem::swap;

/// An axis-aligned box stored as a center and half extents.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Aabb<S> {
    pub center: Point<S>,
    pub half_extent: Vector<S>,
}

impl<S: Scalar> Aabb<S> {
    #[inline]
    pub fn new(center: Point<S>, half_extent: Vector<S>) -> Self {
        Aabb {
            center,
            half_extent,
        }
    }

    /// A cube box with the given edge length.
    #[inline]
    pub fn cube(center: Point<S>, edge: S) -> Self {
        let half = edge * S::HALF;
        Aabb {
            center,
            half_extent: Vector::new(half, half, half),
        }
    }

    #[inline]
    pub fn min(&self) -> Point<S> {
        self.center - self.half_extent
    }

    #[inline]
    pub fn max(&self) -> Point<S> {
        self.center + self.half_extent
    }

    /// Whether this box and `other` overlap (boundary contact counts).
    pub fn intersects(&self, other: &Aabb<S>) -> bool {
        let delta = self.center - other.center;
        let reach = self.half_extent + other.half_extent;

        delta.x.abs() <= reach.x && delta.y.abs() <= reach.y && delta.z.abs() <= reach.z
    }

    /// Whether the ray hits this box, using the slab test on each axis.
    pub fn intersect_ray(&self, ray: &Ray<S>) -> bool {
        let min = self.min();
        let max = self.max();

        let origin = [ray.origin.x, ray.origin.y, ray.origin.z];
        let direction = [ray.direction.x, ray.direction.y, ray.direction.z];
        let lower = [min.x, min.y, min.z];
        let upper = [max.x, max.y, max.z];

        let mut t_enter = S::ZERO;
        let mut t_exit = S::infinity();

        for axis in 0..3 {
            if direction[axis] == S::ZERO {
                if origin[axis] < lower[axis] || origin[axis] > upper[axis] {
                    return false;
                }
                continue;
            }

            let inverse = direction[axis].recip();
            let mut t0 = (lower[axis] - origin[axis]) * inverse;
            let mut t1 = (upper[axis] - origin[axis]) * inverse;
            if t0 > t1 {
                swap(&mut t0, &mut t1);
            }

            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return false;
            }
        }

        true
    }

    /// Whether the box contains the point (boundary included).
    pub fn contains(&self, point: Point<S>) -> bool {
        let delta = point - self.center;

        delta.x.abs() <= self.half_extent.x
            && delta.y.abs() <= self.half_extent.y
            && delta.z.abs() <= self.half_extent.z
    }
}

/// A ray defined by an origin and a direction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Ray<S> {
    pub origin: Point<S>,
    pub direction: Vector<S>,
}

impl<S> Ray<S> {
    #[inline]
    pub fn new(origin: Point<S>, direction: Vector<S>) -> Self {
        Ray { origin, direction }
    }
}

/// An ordered chain of cube boxes covering a trajectory, computed once at
/// construction.
///
/// Boxes of edge `size` are dropped every `size·sin 45°` of arc length, plus
/// one unstepped box at each endpoint so coverage does not depend on step
/// rounding. Consecutive boxes spaced that closely overlap over a locally
/// straight path for curves of moderate curvature, making the chain a
/// conservative over-approximation of the swept volume. It is only valid for
/// intersection pruning, not for exact geometry.
pub struct BoundingChain<S> {
    trajectory: Option<Trajectory<S>>,
    size: S,
    boxes: Vec<Aabb<S>>,
}

// Manual impls: the trajectory's lazy length cache needs the `Copy` that
// `Scalar` implies, which derives would not require of `S`.
impl<S: Scalar> Clone for BoundingChain<S> {
    fn clone(&self) -> Self {
        BoundingChain {
            trajectory: self.trajectory.clone(),
            size: self.size,
            boxes: self.boxes.clone(),
        }
    }
}

impl<S: Scalar> fmt::Debug for BoundingChain<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BoundingChain")
            .field("trajectory", &self.trajectory)
            .field("size", &self.size)
            .field("boxes", &self.boxes)
            .finish()
    }
}

impl<S: Scalar> BoundingChain<S> {
    pub fn new(trajectory: Trajectory<S>, size: S) -> Self {
        let mut chain = BoundingChain {
            trajectory: Some(trajectory),
            size,
            boxes: Vec::new(),
        };
        chain.compute_boxes();
        chain
    }

    /// A chain with no trajectory and no boxes; both intersection queries
    /// return false.
    pub fn empty() -> Self {
        BoundingChain {
            trajectory: None,
            size: S::ZERO,
            boxes: Vec::new(),
        }
    }

    fn compute_boxes(&mut self) {
        let trajectory = match &self.trajectory {
            Some(trajectory) => trajectory,
            None => return,
        };

        let step = self.size * S::FRAC_1_SQRT_2();
        let mut t = S::ZERO;
        while t < S::ONE {
            let next = trajectory.travel_from(t, step);
            // Zero-length curves report a non-finite or non-advancing
            // parameter; only the endpoint boxes remain.
            if !next.is_finite() || next <= t {
                break;
            }
            t = next;
            self.boxes.push(Aabb::cube(trajectory.sample(t), self.size));
        }

        self.boxes
            .push(Aabb::cube(trajectory.sample(S::ZERO), self.size));
        self.boxes
            .push(Aabb::cube(trajectory.sample(S::ONE), self.size));
    }

    #[inline]
    pub fn trajectory(&self) -> Option<&Trajectory<S>> {
        self.trajectory.as_ref()
    }

    #[inline]
    pub fn size(&self) -> S {
        self.size
    }

    #[inline]
    pub fn boxes(&self) -> &[Aabb<S>] {
        &self.boxes
    }

    /// True if any box in the chain intersects the ray.
    pub fn intersect_ray(&self, ray: &Ray<S>) -> bool {
        self.boxes.iter().any(|bounds| bounds.intersect_ray(ray))
    }

    /// True if any box in the chain intersects the given box.
    pub fn intersects(&self, bounds: &Aabb<S>) -> bool {
        self.boxes.iter().any(|own| own.intersects(bounds))
    }

    /// Delegate rendering to the underlying trajectory, if any.
    pub fn render<R: RenderSink<S>>(&self, sink: &mut R) {
        if let Some(trajectory) = &self.trajectory {
            trajectory.render(sink);
        }
    }
}

#[cfg(test)]
use crate::{point, vector, CubicBezierSegment, CubicTrajectory, StraightTrajectory};

#[test]
fn aabb_overlap() {
    let a = Aabb::cube(point(0.0f32, 0.0, 0.0), 2.0);
    let b = Aabb::cube(point(1.5, 0.0, 0.0), 2.0);
    let c = Aabb::cube(point(4.0, 0.0, 0.0), 2.0);

    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
}

#[test]
fn aabb_ray_hits_and_misses() {
    let bounds = Aabb::cube(point(5.0f32, 0.0, 0.0), 2.0);

    let toward = Ray::new(point(5.0, 10.0, 0.0), vector(0.0, -1.0, 0.0));
    assert!(bounds.intersect_ray(&toward));

    let away = Ray::new(point(5.0, 10.0, 0.0), vector(0.0, 1.0, 0.0));
    assert!(!bounds.intersect_ray(&away));

    let parallel_miss = Ray::new(point(5.0, 10.0, 5.0), vector(1.0, 0.0, 0.0));
    assert!(!bounds.intersect_ray(&parallel_miss));

    let from_inside = Ray::new(point(5.0, 0.0, 0.0), vector(1.0, 1.0, 1.0));
    assert!(bounds.intersect_ray(&from_inside));
}

#[test]
fn chain_over_a_straight_segment() {
    let trajectory: Trajectory<f32> =
        StraightTrajectory::new(point(0.0, 0.0, 0.0), point(10.0, 0.0, 0.0)).into();
    let chain = BoundingChain::new(trajectory, 2.0);

    // Steps of 2·sin 45° ≈ 1.414 over length 10, plus the two endpoint
    // boxes.
    let count = chain.boxes().len();
    assert!((9..=11).contains(&count), "unexpected box count {}", count);

    assert!(chain.intersects(&Aabb::cube(point(5.0, 0.0, 0.0), 2.0)));
    assert!(!chain.intersects(&Aabb::cube(point(5.0, 10.0, 0.0), 2.0)));

    let ray = Ray::new(point(5.0, 10.0, 0.0), vector(0.0, -1.0, 0.0));
    assert!(chain.intersect_ray(&ray));
}

#[test]
fn chain_covers_every_sample_of_the_curve() {
    let trajectory: Trajectory<f32> = CubicTrajectory::new(CubicBezierSegment {
        from: point(0.0, 0.0, 0.0),
        ctrl1: point(0.0, 0.0, 4.0),
        ctrl2: point(4.0, 0.0, 4.0),
        to: point(4.0, 0.0, 0.0),
    })
    .into();
    let chain = BoundingChain::new(trajectory.clone(), 2.0);

    for i in 0..=1000 {
        let t = i as f32 / 1000.0;
        let position = trajectory.sample(t);
        assert!(
            chain.boxes().iter().any(|bounds| bounds.contains(position)),
            "position at t = {} not covered",
            t
        );
    }
}

#[test]
fn chain_over_zero_length_curves_terminates_with_endpoint_boxes() {
    let p = point(3.0f32, 1.0, 2.0);

    // Coincident control points: travel never advances the parameter, so
    // the walk stops and only the two endpoint boxes remain.
    let collapsed: Trajectory<f32> = CubicTrajectory::new(CubicBezierSegment {
        from: p,
        ctrl1: p,
        ctrl2: p,
        to: p,
    })
    .into();
    let chain = BoundingChain::new(collapsed, 2.0);
    assert_eq!(chain.boxes().len(), 2);
    assert!(chain.intersects(&Aabb::cube(p, 1.0)));

    // A zero-length straight segment reports a non-finite travel instead.
    let degenerate: Trajectory<f32> = StraightTrajectory::new(p, p).into();
    let chain = BoundingChain::new(degenerate, 2.0);
    assert_eq!(chain.boxes().len(), 2);
    assert!(chain.boxes().iter().all(|bounds| bounds.contains(p)));
}

#[test]
fn empty_chain_intersects_nothing() {
    let chain: BoundingChain<f32> = BoundingChain::empty();

    assert!(chain.boxes().is_empty());
    assert!(chain.trajectory().is_none());
    assert!(!chain.intersects(&Aabb::cube(point(0.0, 0.0, 0.0), 100.0)));
    assert!(!chain.intersect_ray(&Ray::new(point(0.0, 0.0, 0.0), vector(1.0, 0.0, 0.0))));
}
