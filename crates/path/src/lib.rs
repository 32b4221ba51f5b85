#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![no_std]

//! Data structures describing the polylines that meshline turns into thick
//! line meshes.
//!
//! This crate is reexported in [meshline](https://docs.rs/meshline/).
//!
//! # Overview
//!
//! Polylines reach the mesh builder in one of a few shapes: a flat sequence of
//! `x, y, z` coordinates, a sequence of points, or the vertex data of some other
//! geometry. Instead of inspecting the input at every step, the shape is decided
//! once at the boundary with the tagged [`PointSource`] and [`GeometrySource`]
//! types, and everything downstream only deals with a normalized `&[Point]`.
//!
//! ```
//! use meshline_path::{PointSource, math::point};
//!
//! let flat = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
//! let mut points = Vec::new();
//! PointSource::Flat(&flat).to_points(&mut points).unwrap();
//!
//! assert_eq!(points, vec![point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0)]);
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use meshline_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod error;
pub mod polyline;
pub mod source;

#[doc(inline)]
pub use crate::error::InputError;
#[doc(inline)]
pub use crate::polyline::Polyline;
#[doc(inline)]
pub use crate::source::{GeometrySource, PointSource, PositionAttribute};

pub mod math {
    //! f32 version of the meshline_geom types used everywhere. Most other meshline
    //! crates reexport them.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point3D<f32>```.
    pub type Point = euclid::default::Point3D<f32>;

    /// Alias for ```euclid::default::Vector3D<f32>```.
    pub type Vector = euclid::default::Vector3D<f32>;

    /// Alias for ```euclid::default::Box3D<f32>```
    pub type Box3D = euclid::default::Box3D<f32>;

    /// Alias for ```euclid::default::Transform3D<f32>```
    pub type Transform = euclid::default::Transform3D<f32>;

    /// Alias for ```meshline_geom::BoundingSphere<f32>```
    pub type BoundingSphere = crate::geom::BoundingSphere<f32>;

    /// Alias for ```meshline_geom::Ray<f32>```
    pub type Ray = crate::geom::Ray<f32>;

    /// Shorthand for `Vector::new(x, y, z)`.
    #[inline]
    pub fn vector(x: f32, y: f32, z: f32) -> Vector {
        Vector::new(x, y, z)
    }

    /// Shorthand for `Point::new(x, y, z)`.
    #[inline]
    pub fn point(x: f32, y: f32, z: f32) -> Point {
        Point::new(x, y, z)
    }
}
