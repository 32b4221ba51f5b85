use crate::bounding::BoundingSphere;
use crate::line::LineSegment;
use crate::scalar::Scalar;
use crate::traits::Transformation;
use crate::{Point, Vector};

/// A half-line starting at `origin` and going towards `direction`.
///
/// Most of the methods below expect `direction` to be normalized.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Ray<S> {
    pub origin: Point<S>,
    pub direction: Vector<S>,
}

/// Result of `Ray::square_distance_to_segment`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RaySegmentDistance<S> {
    pub square_distance: S,
    /// Closest point on the ray.
    pub on_ray: Point<S>,
    /// Closest point on the segment.
    pub on_segment: Point<S>,
}

impl<S: Scalar> Ray<S> {
    /// Creates a ray, normalizing the direction.
    pub fn new(origin: Point<S>, direction: Vector<S>) -> Self {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    #[inline]
    pub fn at(&self, t: S) -> Point<S> {
        self.origin + self.direction * t
    }

    /// Closest point of the ray to `p`. Points behind the origin map to the origin.
    pub fn closest_point_to_point(&self, p: Point<S>) -> Point<S> {
        let t = (p - self.origin).dot(self.direction);
        if t < S::ZERO {
            return self.origin;
        }

        self.at(t)
    }

    pub fn square_distance_to_point(&self, p: Point<S>) -> S {
        (self.closest_point_to_point(p) - p).square_length()
    }

    pub fn intersects_sphere(&self, sphere: &BoundingSphere<S>) -> bool {
        self.square_distance_to_point(sphere.center) <= sphere.radius * sphere.radius
    }

    /// Computes the closest approach between the ray and a segment.
    ///
    /// The segment is parametrized around its center with an extent of half its
    /// length, and the pair of parameters (s0 on the ray, s1 on the segment) is
    /// classified into one of the regions of the (s0 >= 0, |s1| <= extent) domain.
    /// Degenerate segments are handled as points.
    pub fn square_distance_to_segment(&self, segment: &LineSegment<S>) -> RaySegmentDistance<S> {
        let seg_center = segment.mid_point();
        let seg_vector = segment.to_vector();
        let seg_length = seg_vector.length();
        let seg_dir = if seg_length > S::ZERO {
            seg_vector / seg_length
        } else {
            Vector::zero()
        };
        let diff = self.origin - seg_center;
        let seg_extent = seg_length * S::HALF;
        let a01 = -self.direction.dot(seg_dir);
        let b0 = diff.dot(self.direction);
        let b1 = -diff.dot(seg_dir);
        let c = diff.square_length();
        let det = (S::ONE - a01 * a01).abs();

        let s0;
        let s1;
        let square_distance;

        if det > S::ZERO {
            let mut t0 = a01 * b1 - b0;
            let mut t1 = a01 * b0 - b1;
            let ext_det = seg_extent * det;

            if t0 >= S::ZERO {
                if t1 >= -ext_det {
                    if t1 <= ext_det {
                        // Both closest points are interior.
                        let inv_det = S::ONE / det;
                        t0 *= inv_det;
                        t1 *= inv_det;
                        s0 = t0;
                        s1 = t1;
                        square_distance = s0 * (s0 + a01 * s1 + S::TWO * b0)
                            + s1 * (a01 * s0 + s1 + S::TWO * b1)
                            + c;
                    } else {
                        s1 = seg_extent;
                        s0 = S::max(S::ZERO, -(a01 * s1 + b0));
                        square_distance = -s0 * s0 + s1 * (s1 + S::TWO * b1) + c;
                    }
                } else {
                    s1 = -seg_extent;
                    s0 = S::max(S::ZERO, -(a01 * s1 + b0));
                    square_distance = -s0 * s0 + s1 * (s1 + S::TWO * b1) + c;
                }
            } else if t1 <= -ext_det {
                s0 = S::max(S::ZERO, -(-a01 * seg_extent + b0));
                s1 = if s0 > S::ZERO {
                    -seg_extent
                } else {
                    S::min(S::max(-seg_extent, -b1), seg_extent)
                };
                square_distance = -s0 * s0 + s1 * (s1 + S::TWO * b1) + c;
            } else if t1 <= ext_det {
                s0 = S::ZERO;
                s1 = S::min(S::max(-seg_extent, -b1), seg_extent);
                square_distance = s1 * (s1 + S::TWO * b1) + c;
            } else {
                s0 = S::max(S::ZERO, -(a01 * seg_extent + b0));
                s1 = if s0 > S::ZERO {
                    seg_extent
                } else {
                    S::min(S::max(-seg_extent, -b1), seg_extent)
                };
                square_distance = -s0 * s0 + s1 * (s1 + S::TWO * b1) + c;
            }
        } else {
            // Parallel.
            s1 = if a01 > S::ZERO { -seg_extent } else { seg_extent };
            s0 = S::max(S::ZERO, -(a01 * s1 + b0));
            square_distance = -s0 * s0 + s1 * (s1 + S::TWO * b1) + c;
        }

        RaySegmentDistance {
            // Rounding can push the closed form slightly below zero.
            square_distance: S::max(square_distance, S::ZERO),
            on_ray: self.at(s0),
            on_segment: seg_center + seg_dir * s1,
        }
    }

    /// Moves the ray to another space.
    ///
    /// The direction is re-normalized after the transformation. Returns `None` if
    /// the origin can't be transformed.
    pub fn transformed<T: Transformation<S>>(&self, transform: &T) -> Option<Self> {
        let origin = transform.transform_point(self.origin)?;
        let direction = transform.transform_vector(self.direction);
        if direction.square_length() == S::ZERO {
            return None;
        }

        Some(Ray {
            origin,
            direction: direction.normalize(),
        })
    }
}

#[cfg(test)]
fn assert_almost_eq(a: f32, b: f32) {
    if (a - b).abs() > 1e-5 {
        panic!("assert almost equal: {} != {}", a, b);
    }
}

#[test]
fn ray_crossing_segment() {
    use crate::{point, vector};

    let ray = Ray::new(point(0.5f32, 1.0, -5.0), vector(0.0, 0.0, 1.0));
    let segment = LineSegment {
        from: point(0.0, 0.0, 0.0),
        to: point(2.0, 0.0, 0.0),
    };

    let d = ray.square_distance_to_segment(&segment);
    assert_almost_eq(d.square_distance, 1.0);
    assert_almost_eq(d.on_ray.z, 0.0);
    assert_almost_eq(d.on_segment.x, 0.5);
}

#[test]
fn ray_past_segment_end() {
    use crate::{point, vector};

    let ray = Ray::new(point(3.0f32, 0.0, -1.0), vector(0.0, 0.0, 1.0));
    let segment = LineSegment {
        from: point(0.0, 0.0, 0.0),
        to: point(2.0, 0.0, 0.0),
    };

    let d = ray.square_distance_to_segment(&segment);
    assert_almost_eq(d.square_distance, 1.0);
    assert_almost_eq(d.on_segment.x, 2.0);
}

#[test]
fn segment_behind_the_ray() {
    use crate::{point, vector};

    let ray = Ray::new(point(0.0f32, 0.0, 2.0), vector(0.0, 0.0, 1.0));
    let segment = LineSegment {
        from: point(-1.0, 0.0, 0.0),
        to: point(1.0, 0.0, 0.0),
    };

    let d = ray.square_distance_to_segment(&segment);
    assert_almost_eq(d.square_distance, 4.0);
    assert_eq!(d.on_ray, ray.origin);
}

#[test]
fn parallel_ray_and_segment() {
    use crate::{point, vector};

    let ray = Ray::new(point(-3.0f32, 1.0, 0.0), vector(1.0, 0.0, 0.0));
    let segment = LineSegment {
        from: point(0.0, 0.0, 0.0),
        to: point(2.0, 0.0, 0.0),
    };

    let d = ray.square_distance_to_segment(&segment);
    assert_almost_eq(d.square_distance, 1.0);
}

#[test]
fn degenerate_segment_is_a_point() {
    use crate::{point, vector};

    let ray = Ray::new(point(0.0f32, 0.0, 0.0), vector(1.0, 0.0, 0.0));
    let p = point(4.0, 3.0, 0.0);
    let segment = LineSegment { from: p, to: p };

    let d = ray.square_distance_to_segment(&segment);
    assert_almost_eq(d.square_distance, 9.0);
    assert_eq!(d.on_segment, p);
    assert_almost_eq(d.on_ray.x, 4.0);
}

#[test]
fn ray_and_sphere() {
    use crate::{point, vector};

    let sphere = BoundingSphere {
        center: point(0.0f32, 0.0, 10.0),
        radius: 1.0,
    };

    assert!(Ray::new(point(0.0, 0.5, 0.0), vector(0.0, 0.0, 1.0)).intersects_sphere(&sphere));
    assert!(!Ray::new(point(0.0, 2.0, 0.0), vector(0.0, 0.0, 1.0)).intersects_sphere(&sphere));
    assert!(!Ray::new(point(0.0, 0.0, 0.0), vector(0.0, 0.0, -1.0)).intersects_sphere(&sphere));
}

#[test]
fn transformed_ray() {
    use crate::{point, vector, Transform};

    let ray = Ray::new(point(1.0f32, 0.0, 0.0), vector(0.0, 2.0, 0.0));
    let t: Transform<f32> = Transform::scale(2.0, 2.0, 2.0).then_translate(vector(0.0, 0.0, 1.0));
    let moved = ray.transformed(&t).unwrap();

    assert_eq!(moved.origin, point(2.0, 0.0, 1.0));
    assert_almost_eq(moved.direction.length(), 1.0);
    assert_almost_eq(moved.direction.y, 1.0);
}
