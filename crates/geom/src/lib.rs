#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 3D geometric primitives on top of euclid.
//!
//! This crate is reexported in [meshline](https://docs.rs/meshline/).
//!
//! # Overview.
//!
//! This crate implements the little bit of 3D math that thick line meshes need:
//!
//! - line segments,
//! - rays (half-lines) and their closest approach to points and segments,
//! - axis-aligned bounding boxes and bounding spheres.
//!
//! Points, vectors, boxes and transforms are plain euclid types. The aliases
//! in this crate are generic over the scalar type, most users will want the
//! `f32` aliases of the `math` module in `meshline_path`.

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod bounding;
mod line;
mod ray;

#[doc(inline)]
pub use crate::bounding::{bounding_box, BoundingSphere};
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::ray::{Ray, RaySegmentDistance};

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float + NumCast + Sized + Display + Debug + AddAssign + SubAssign + MulAssign + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;

        const MIN: Self;
        const MAX: Self;

        const EPSILON: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        const MIN: Self = f32::MIN;
        const MAX: Self = f32::MAX;

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

        const MIN: Self = f64::MIN;
        const MAX: Self = f64::MAX;

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

/// Alias for `euclid::default::Box3D`
pub use euclid::default::Box3D;

/// Alias for `euclid::default::Transform3D`
pub type Transform<S> = euclid::default::Transform3D<S>;

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

pub mod traits {
    use crate::{Point, Scalar, Transform, Vector};

    pub trait Transformation<S> {
        /// Returns `None` if the point can't be represented in the destination
        /// space (homogeneous `w` not positive).
        fn transform_point(&self, p: Point<S>) -> Option<Point<S>>;
        fn transform_vector(&self, v: Vector<S>) -> Vector<S>;
    }

    impl<S: Scalar> Transformation<S> for Transform<S> {
        fn transform_point(&self, p: Point<S>) -> Option<Point<S>> {
            self.transform_point3d(p)
        }

        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            self.transform_vector3d(v)
        }
    }

    // Automatically implement Transformation for all &Transformation.
    impl<'l, S: Scalar, T: Transformation<S>> Transformation<S> for &'l T {
        #[inline]
        fn transform_point(&self, p: Point<S>) -> Option<Point<S>> {
            (*self).transform_point(p)
        }

        #[inline]
        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            (*self).transform_vector(v)
        }
    }
}

/// Largest scale factor the transform applies along any of its axes.
///
/// Used to scale the radius of a bounding sphere when moving it to another space.
pub fn max_scale_on_axis<S: Scalar>(transform: &Transform<S>) -> S {
    let sx = transform.m11 * transform.m11 + transform.m12 * transform.m12 + transform.m13 * transform.m13;
    let sy = transform.m21 * transform.m21 + transform.m22 * transform.m22 + transform.m23 * transform.m23;
    let sz = transform.m31 * transform.m31 + transform.m32 * transform.m32 + transform.m33 * transform.m33;

    S::max(sx, S::max(sy, sz)).sqrt()
}

#[test]
fn max_scale_of_non_uniform_scale() {
    let t: Transform<f32> = Transform::scale(2.0, 5.0, 3.0);
    assert!((max_scale_on_axis(&t) - 5.0).abs() < 1e-6);

    let t: Transform<f32> = Transform::translation(10.0, -4.0, 2.0);
    assert!((max_scale_on_axis(&t) - 1.0).abs() < 1e-6);
}
