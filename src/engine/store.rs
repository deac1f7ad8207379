//! Append-only sample storage.
//!
//! Points are kept as a flat `Vec<[f64; 3]>` next to a parallel `Vec<bool>`
//! of sphere-membership flags, so the full history is two contiguous arrays
//! rather than one heap object per point.

use serde::Serialize;

/// Sphere membership predicate: `x² + y² + z² ≤ 1`.
///
/// The boundary counts as inside.
#[inline]
#[must_use]
pub fn in_unit_sphere(p: &[f64; 3]) -> bool {
    p[0] * p[0] + p[1] * p[1] + p[2] * p[2] <= 1.0
}

/// Accumulated points, flags and counts for one simulation session.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    points: Vec<[f64; 3]>,
    inside_mask: Vec<bool>,
    inside: u64,
}

impl SampleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored points.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.points.len() as u64
    }

    /// Number of stored points inside the sphere.
    #[must_use]
    pub fn inside(&self) -> u64 {
        self.inside
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drop every point and reset counts to zero.
    pub fn clear(&mut self) {
        self.points.clear();
        self.inside_mask.clear();
        self.inside = 0;
    }

    /// Append `n` points produced by `draw`, classifying each one.
    ///
    /// Capacity for the whole batch is reserved before the first point is
    /// written, so the append cannot stop part way through. Returns the
    /// index of the first appended point.
    pub fn extend_with<F>(&mut self, n: usize, mut draw: F) -> usize
    where
        F: FnMut() -> [f64; 3],
    {
        let start = self.points.len();
        self.points.reserve(n);
        self.inside_mask.reserve(n);

        let mut batch_inside = 0u64;
        for _ in 0..n {
            let p = draw();
            let flag = in_unit_sphere(&p);
            batch_inside += u64::from(flag);
            self.points.push(p);
            self.inside_mask.push(flag);
        }
        self.inside += batch_inside;
        start
    }

    /// View of the points stored from index `start` onwards.
    #[must_use]
    pub fn tail(&self, start: usize) -> PointsView<'_> {
        let start = start.min(self.points.len());
        PointsView {
            points: &self.points[start..],
            inside_mask: &self.inside_mask[start..],
        }
    }

    /// View of the whole history.
    #[must_use]
    pub fn all(&self) -> PointsView<'_> {
        self.tail(0)
    }
}

/// One point with its membership flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Whether the point lies in the unit sphere.
    pub in_sphere: bool,
}

/// Borrowed, read-only run of points and their flags.
///
/// Returned both for a freshly generated batch and for the full history.
#[derive(Debug, Clone, Copy)]
pub struct PointsView<'a> {
    points: &'a [[f64; 3]],
    inside_mask: &'a [bool],
}

impl<'a> PointsView<'a> {
    /// Coordinates as `[x, y, z]` triples.
    #[must_use]
    pub const fn points(&self) -> &'a [[f64; 3]] {
        self.points
    }

    /// Sphere-membership flag per point.
    #[must_use]
    pub const fn inside_mask(&self) -> &'a [bool] {
        self.inside_mask
    }

    /// Number of points in the view.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the view is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of flagged-inside points in the view.
    #[must_use]
    pub fn inside_count(&self) -> u64 {
        self.inside_mask.iter().filter(|&&f| f).count() as u64
    }

    /// Iterate over points paired with their flags.
    pub fn iter(&self) -> impl Iterator<Item = SamplePoint> + 'a {
        self.points
            .iter()
            .zip(self.inside_mask.iter())
            .map(|(p, &in_sphere)| SamplePoint {
                x: p[0],
                y: p[1],
                z: p[2],
                in_sphere,
            })
    }
}
