use crate::scalar::Scalar;
use crate::{Point, Vector};

/// A linear segment in 3D space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    /// Computes the squared length of this segment.
    #[inline]
    pub fn square_length(&self) -> S {
        self.to_vector().square_length()
    }

    #[inline]
    pub fn mid_point(&self) -> Point<S> {
        self.sample(S::HALF)
    }

    /// Whether both endpoints are at the exact same position.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }

    /// Computes the distance between this segment and a point.
    #[inline]
    pub fn distance_to_point(&self, p: Point<S>) -> S {
        self.square_distance_to_point(p).sqrt()
    }

    /// Computes the squared distance between this segment and a point.
    ///
    /// Can be useful to save a square root and a division when comparing against
    /// a distance that can be squared.
    #[inline]
    pub fn square_distance_to_point(&self, p: Point<S>) -> S {
        (self.closest_point(p) - p).square_length()
    }

    /// Computes the closest point on this segment to `p`.
    #[inline]
    pub fn closest_point(&self, p: Point<S>) -> Point<S> {
        let v1 = self.to - self.from;
        let len = v1.dot(v1);
        if len == S::ZERO {
            return self.from;
        }
        let v2 = p - self.from;
        let t = S::min(S::max(v2.dot(v1) / len, S::ZERO), S::ONE);

        self.from + v1 * t
    }
}

#[cfg(test)]
fn fuzzy_eq_point(a: Point<f32>, b: Point<f32>, epsilon: f32) -> bool {
    (a - b).square_length() <= epsilon * epsilon
}

#[test]
fn closest_point_is_clamped_to_the_segment() {
    use crate::point;

    let segment = LineSegment {
        from: point(0.0f32, 0.0, 0.0),
        to: point(2.0, 0.0, 0.0),
    };

    assert!(fuzzy_eq_point(segment.closest_point(point(1.0, 3.0, 0.0)), point(1.0, 0.0, 0.0), 1e-6));
    assert!(fuzzy_eq_point(segment.closest_point(point(-5.0, 1.0, 1.0)), point(0.0, 0.0, 0.0), 1e-6));
    assert!(fuzzy_eq_point(segment.closest_point(point(7.0, 0.0, -1.0)), point(2.0, 0.0, 0.0), 1e-6));
    assert!((segment.square_distance_to_point(point(1.0, 0.0, 2.0)) - 4.0).abs() < 1e-6);
    assert_eq!(segment.length(), 2.0);
    assert_eq!(segment.square_length(), 4.0);
}

#[test]
fn degenerate_segment_distance() {
    use crate::point;

    let segment = LineSegment {
        from: point(1.0f32, 1.0, 1.0),
        to: point(1.0, 1.0, 1.0),
    };

    assert!(segment.is_degenerate());
    assert_eq!(segment.closest_point(point(4.0, 5.0, 1.0)), point(1.0, 1.0, 1.0));
    assert!((segment.distance_to_point(point(4.0, 5.0, 1.0)) - 5.0).abs() < 1e-6);
}
