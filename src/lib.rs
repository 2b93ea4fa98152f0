#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! 3D line segment and cubic bézier trajectory math on top of euclid.
//!
//! This crate implements the curve math needed to represent, measure and
//! subdivide road-network-like paths:
//!
//! - straight segments and cubic bézier curves over the parametric domain
//!   `[0..1]`, with splitting, inversion, arc length and arc-length travel,
//! - fitting a cubic to endpoint/tangent boundary conditions,
//! - an axis-aligned bounding-box chain approximating a curve's swept volume
//!   for fast intersection pruning,
//! - a discretized sampled-point index over chains of curves supporting
//!   binary-search "advance by at least this distance" queries.
//!
//! All types are immutable value objects: every transform returns a new
//! value. The only mutable state is two lazily computed caches (a cubic
//! trajectory's arc length and the sampled positions of an index), both pure
//! functions of immutable inputs.
//!
//! Operations are total over finite inputs and never return errors. A curve
//! built from coincident endpoints is valid but has zero length and an
//! undefined direction; callers must guard the degenerate case before using
//! distance-normalizing operations such as `travel`.

// Reexport dependencies.
pub use euclid;

#[macro_use]
mod segment;
pub mod bounding_chain;
pub mod cubic_bezier;
pub mod fitting;
mod line;
pub mod sampled_points;
mod trajectory;
pub mod utils;

#[doc(inline)]
pub use crate::bounding_chain::{Aabb, BoundingChain, Ray};
#[doc(inline)]
pub use crate::cubic_bezier::{CubicBezierSegment, CubicTrajectory};
#[doc(inline)]
pub use crate::line::StraightTrajectory;
#[doc(inline)]
pub use crate::sampled_points::SampledPoints;
#[doc(inline)]
pub use crate::segment::{RenderSink, Segment};
#[doc(inline)]
pub use crate::trajectory::Trajectory;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const SIX: Self;
        const NINE: Self;

        const EPSILON: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const SIX: Self = 6.0;
        const NINE: Self = 9.0;

        const EPSILON: Self = 1e-4;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const SIX: Self = 6.0;
        const NINE: Self = 9.0;

        const EPSILON: Self = 1e-8;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point3D`.
pub use euclid::default::Point3D as Point;

/// Alias for `euclid::default::Vector3D`.
pub use euclid::default::Vector3D as Vector;

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D;

/// Shorthand for `Vector::new(x, y, z)`.
#[inline]
pub fn vector<S>(x: S, y: S, z: S) -> Vector<S> {
    Vector::new(x, y, z)
}

/// Shorthand for `Point::new(x, y, z)`.
#[inline]
pub fn point<S>(x: S, y: S, z: S) -> Point<S> {
    Point::new(x, y, z)
}
