//! An owned, normalized polyline.

use crate::math::Point;
use crate::{InputError, PointSource};

use alloc::vec::Vec;

/// Whether the first and last points are at the exact same position.
///
/// Same rule as [`Polyline::is_closed`], for point slices.
pub fn is_closed(points: &[Point]) -> bool {
    let n = points.len();
    n >= 2 && points[0] == points[n - 1]
}

/// An ordered sequence of 3D points.
///
/// ## Example
///
/// ```
/// use meshline_path::{Polyline, PointSource};
/// use meshline_path::math::point;
///
/// let points = [
///     point(0.0, 0.0, 0.0),
///     point(1.0, 0.0, 0.0),
///     point(0.0, 0.0, 0.0),
/// ];
/// let polyline = Polyline::from_source(PointSource::Points(&points)).unwrap();
///
/// assert!(polyline.is_closed());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    pub fn new() -> Self {
        Polyline { points: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Polyline {
            points: Vec::with_capacity(cap),
        }
    }

    pub fn from_source(source: PointSource) -> Result<Self, InputError> {
        let mut polyline = Polyline::new();
        source.to_points(&mut polyline.points)?;

        Ok(polyline)
    }

    /// Replaces the points with the ones of `source`.
    ///
    /// On error the polyline keeps its previous points.
    pub fn set(&mut self, source: PointSource) -> Result<(), InputError> {
        source.validate()?;
        self.points.clear();
        self.points.extend(source.iter());

        Ok(())
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().cloned()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().cloned()
    }

    /// Whether the first and last points are at the exact same position.
    ///
    /// The comparison is component-wise on the stored values, not within a
    /// tolerance. Polylines with less than two points are never closed.
    pub fn is_closed(&self) -> bool {
        is_closed(&self.points)
    }

    /// Drops the first point and appends `p`, keeping the number of points.
    ///
    /// Does not allocate. Has no effect on an empty polyline.
    pub fn shift(&mut self, p: Point) {
        if self.points.is_empty() {
            return;
        }
        self.points.rotate_left(1);
        if let Some(last) = self.points.last_mut() {
            *last = p;
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl core::ops::Index<usize> for Polyline {
    type Output = Point;
    fn index(&self, idx: usize) -> &Point {
        &self.points[idx]
    }
}
