//! Bounding volumes for point sets.

use crate::scalar::Scalar;
use crate::{max_scale_on_axis, Box3D, Point, Transform};

/// Computes the smallest axis-aligned box that contains all of the points.
///
/// Returns `None` if there is no point.
pub fn bounding_box<S, Iter>(points: Iter) -> Option<Box3D<S>>
where
    S: Scalar,
    Iter: IntoIterator<Item = Point<S>>,
{
    let mut points = points.into_iter();
    let first = points.next()?;
    let mut min = first;
    let mut max = first;
    for p in points {
        min = min.min(p);
        max = max.max(p);
    }

    Some(Box3D { min, max })
}

/// A sphere that contains a set of points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct BoundingSphere<S> {
    pub center: Point<S>,
    pub radius: S,
}

impl<S: Scalar> BoundingSphere<S> {
    /// Builds the sphere centered on the bounding box of the points, with the
    /// smallest radius that contains all of them.
    ///
    /// This is not the minimal enclosing sphere but it is cheap and good enough for
    /// culling and as an early out when picking.
    pub fn from_points<Iter>(points: Iter) -> Option<Self>
    where
        Iter: IntoIterator<Item = Point<S>> + Clone,
    {
        let aabb = bounding_box(points.clone())?;

        Some(Self::from_points_and_box(points, &aabb))
    }

    /// Same as `from_points` with an already computed bounding box.
    pub fn from_points_and_box<Iter>(points: Iter, aabb: &Box3D<S>) -> Self
    where
        Iter: IntoIterator<Item = Point<S>>,
    {
        let center = aabb.min.lerp(aabb.max, S::HALF);
        let mut max_sq = S::ZERO;
        for p in points {
            max_sq = S::max(max_sq, (p - center).square_length());
        }

        BoundingSphere {
            center,
            radius: max_sq.sqrt(),
        }
    }

    pub fn contains_point(&self, p: Point<S>) -> bool {
        (p - self.center).square_length() <= self.radius * self.radius
    }

    /// Moves the sphere to another space.
    ///
    /// The radius is scaled by the largest axis scale of the transform so the
    /// result stays conservative under non-uniform scaling.
    /// Returns `None` if the center can't be transformed.
    pub fn transformed(&self, transform: &Transform<S>) -> Option<Self> {
        Some(BoundingSphere {
            center: transform.transform_point3d(self.center)?,
            radius: self.radius * max_scale_on_axis(transform),
        })
    }
}

#[test]
fn empty_point_set_has_no_bounds() {
    let points: [Point<f32>; 0] = [];
    assert!(bounding_box(points.iter().cloned()).is_none());
    assert!(BoundingSphere::from_points(points.iter().cloned()).is_none());
}

#[test]
fn sphere_around_segment() {
    use crate::point;

    let points = [point(0.0f32, 0.0, 0.0), point(2.0, 0.0, 0.0), point(1.0, 1.0, 0.0)];

    let aabb = bounding_box(points.iter().cloned()).unwrap();
    assert_eq!(aabb.min, point(0.0, 0.0, 0.0));
    assert_eq!(aabb.max, point(2.0, 1.0, 0.0));

    let sphere = BoundingSphere::from_points(points.iter().cloned()).unwrap();
    assert_eq!(sphere.center, point(1.0, 0.5, 0.0));
    assert!((sphere.radius - 1.25f32.sqrt()).abs() < 1e-6);
    for p in &points {
        assert!(sphere.contains_point(*p));
    }
}

#[test]
fn transformed_sphere() {
    use crate::point;

    let sphere = BoundingSphere {
        center: point(1.0f32, 0.0, 0.0),
        radius: 2.0,
    };

    let moved = sphere
        .transformed(&Transform::scale(3.0, 1.0, 1.0).then_translate(crate::vector(0.0, 5.0, 0.0)))
        .unwrap();
    assert!((moved.center - point(3.0, 5.0, 0.0)).square_length() < 1e-10);
    assert!((moved.radius - 6.0).abs() < 1e-6);
}
