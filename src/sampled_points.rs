//! Discretized arc-length sampling over chains of trajectories.

use crate::scalar::Scalar;
use crate::trajectory::Trajectory;
use crate::Point2D;

use core::cell::Cell;

/// Samples per unit of curve length.
const SAMPLES_PER_UNIT: f32 = 20.0;

/// Curve length beyond which the sample count stops growing, bounding the
/// memory spent on pathological inputs.
const MAX_SAMPLED_LENGTH: f32 = 200.0;

/// A dense ordered sequence of positions sampled along concatenated
/// trajectories, supporting binary-search "advance by at least this chord
/// distance" queries.
///
/// Trajectory `i` owns the global parameter range `[i, i + 1)`; its sample
/// count is `max(2, ⌊min(length, 200) · 20⌋)`. Sampled positions are
/// ground-plane `(x, z)` projections of the 3D evaluation (y is elevation),
/// computed lazily on first access and memoized. The cache is a plain
/// overwrite cell per sample, which makes the type `Send` but not `Sync`; a
/// racing recomputation would store the identical value.
pub struct SampledPoints<S> {
    trajectories: Vec<Trajectory<S>>,
    counts: Vec<usize>,
    end_indices: Vec<usize>,
    points: Vec<Cell<Option<Point2D<S>>>>,
}

impl<S: Scalar> SampledPoints<S> {
    pub fn new(trajectories: Vec<Trajectory<S>>) -> Self {
        let mut counts = Vec::with_capacity(trajectories.len());
        let mut end_indices = Vec::with_capacity(trajectories.len());
        let mut total = 0;

        for trajectory in &trajectories {
            let length = trajectory
                .length()
                .max(S::ZERO)
                .min(S::value(MAX_SAMPLED_LENGTH));
            let count = (length * S::value(SAMPLES_PER_UNIT))
                .to_usize()
                .unwrap_or(0)
                .max(2);
            total += count;
            counts.push(count);
            end_indices.push(total);
        }

        SampledPoints {
            trajectories,
            counts,
            end_indices,
            points: vec![Cell::new(None); total],
        }
    }

    /// Number of samples across all trajectories.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Global parameter (trajectory ordinal plus local t) of a sample index.
    ///
    /// A boundary index maps to `t = 1` on the trajectory it closes rather
    /// than `t = 0` on the next one; both evaluate to the same position for
    /// end-to-start concatenated trajectories.
    fn global_t(&self, index: usize) -> S {
        let mut i = 0;
        while index > self.end_indices[i] {
            i += 1;
        }

        let count = self.counts[i];
        let start = self.end_indices[i] - count;
        let local = S::from(index - start).unwrap() / S::from(count).unwrap();

        local + S::from(i).unwrap()
    }

    /// The sampled position at a global index, computed and memoized on
    /// first access.
    pub fn position(&self, index: usize) -> Point2D<S> {
        if let Some(cached) = self.points[index].get() {
            return cached;
        }

        let t = self.global_t(index);
        let ordinal = t.to_usize().unwrap_or(0).min(self.trajectories.len() - 1);
        let local = t - S::from(ordinal).unwrap();
        let sampled = self.trajectories[ordinal].sample(local);
        let projected = Point2D::new(sampled.x, sampled.z);

        self.points[index].set(Some(projected));
        projected
    }

    /// Binary-search for the first sample at or beyond the chord distance
    /// `distance` from the sample at `start_index`.
    ///
    /// Returns the global parameter and global index of that sample. If no
    /// sample is far enough, the returned index is one past the last sample
    /// and the parameter is the end of the last trajectory.
    ///
    /// Correct only while the squared chord distance from the start sample
    /// is monotonically non-decreasing over the searched window; this holds
    /// for trajectories without sharp U-turns inside the window. The
    /// precondition is not validated: violating it yields a structurally
    /// valid but wrong answer, never a crash.
    pub fn find(&self, start_index: usize, distance: S) -> (S, usize) {
        if self.points.is_empty() {
            return (S::ZERO, start_index);
        }

        let squared = distance * distance;
        let origin = self.position(start_index);

        let mut find_index = start_index as isize;
        let mut end_index = self.points.len() as isize - 1;

        while find_index <= end_index {
            let current = find_index + ((end_index - find_index) >> 1);
            let delta = (self.position(current as usize) - origin).square_length() - squared;

            if delta < S::ZERO {
                find_index = current + 1;
            } else {
                end_index = current - 1;
            }
        }

        let find_index = find_index as usize;
        (self.global_t(find_index), find_index)
    }
}

#[cfg(test)]
use crate::{point, StraightTrajectory};

#[cfg(test)]
fn straight(from: crate::Point<f32>, to: crate::Point<f32>) -> Trajectory<f32> {
    StraightTrajectory::new(from, to).into()
}

#[test]
fn sample_counts() {
    let ten = SampledPoints::new(vec![straight(
        point(0.0, 0.0, 0.0),
        point(10.0, 0.0, 0.0),
    )]);
    assert_eq!(ten.len(), 200);

    let tiny = SampledPoints::new(vec![straight(
        point(0.0, 0.0, 0.0),
        point(0.01, 0.0, 0.0),
    )]);
    assert_eq!(tiny.len(), 2);

    let huge = SampledPoints::new(vec![straight(
        point(0.0, 0.0, 0.0),
        point(300.0, 0.0, 0.0),
    )]);
    assert_eq!(huge.len(), 4000);
}

#[test]
fn positions_project_to_the_ground_plane() {
    // Length 10, so 200 samples; y is elevation and drops out.
    let points = SampledPoints::new(vec![straight(
        point(0.0, 5.0, 0.0),
        point(6.0, 5.0, 8.0),
    )]);
    assert_eq!(points.len(), 200);

    let start = points.position(0);
    assert_eq!(start, Point2D::new(0.0, 0.0));

    let mid = points.position(100);
    assert!((mid - Point2D::new(3.0, 4.0)).length() < 1e-4);
}

#[test]
fn positions_are_memoized() {
    let points = SampledPoints::new(vec![straight(
        point(0.0, 0.0, 0.0),
        point(10.0, 0.0, 0.0),
    )]);

    assert!(points.points[17].get().is_none());
    let first = points.position(17);
    assert!(points.points[17].get().is_some());
    assert_eq!(points.position(17), first);
}

#[test]
fn global_index_spans_concatenated_trajectories() {
    let points = SampledPoints::new(vec![
        straight(point(0.0, 0.0, 0.0), point(10.0, 0.0, 0.0)),
        straight(point(10.0, 0.0, 0.0), point(10.0, 0.0, 20.0)),
    ]);
    assert_eq!(points.len(), 600);

    // Halfway along the second trajectory.
    let mid_second = points.position(400);
    assert!((mid_second - Point2D::new(10.0, 10.0)).length() < 1e-4);

    // A boundary index closes the first trajectory at t = 1.
    let boundary = points.position(200);
    assert!((boundary - Point2D::new(10.0, 0.0)).length() < 1e-4);
}

#[test]
fn find_advances_by_chord_distance() {
    let points = SampledPoints::new(vec![straight(
        point(0.0, 0.0, 0.0),
        point(10.0, 0.0, 0.0),
    )]);

    let (t, index) = points.find(0, 5.0);
    assert_eq!(index, 100);
    assert!((t - 0.5).abs() < 1e-5);

    // Starting mid-sequence advances relative to that sample.
    let (t, index) = points.find(100, 2.0);
    assert_eq!(index, 140);
    assert!((t - 0.7).abs() < 1e-5);
}

#[test]
fn find_past_the_end_reports_one_past_the_last_sample() {
    let points = SampledPoints::new(vec![straight(
        point(0.0, 0.0, 0.0),
        point(10.0, 0.0, 0.0),
    )]);

    let (t, index) = points.find(0, 1000.0);
    assert_eq!(index, points.len());
    assert!((t - 1.0).abs() < 1e-5);
}

#[test]
fn find_crosses_trajectory_boundaries() {
    let points = SampledPoints::new(vec![
        straight(point(0.0, 0.0, 0.0), point(10.0, 0.0, 0.0)),
        straight(point(10.0, 0.0, 0.0), point(10.0, 0.0, 20.0)),
    ]);

    // 10 along x then 10 along z: the first sample at or beyond chord
    // distance √(10² + 10²) sits halfway down the second trajectory.
    let (t, index) = points.find(0, (200.0f32).sqrt());
    assert_eq!(index, 400);
    assert!((t - 1.5).abs() < 1e-4);
}
