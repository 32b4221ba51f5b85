#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![no_std]

//! Generation of thick line meshes from 3D polylines.
//!
//! This crate is reexported in [meshline](https://docs.rs/meshline/).
//!
//! ## Overview
//!
//! Graphics APIs draw lines at a fixed width of one pixel. To draw wide lines,
//! a polyline is turned into a ribbon of triangles whose vertices are pushed apart
//! in the vertex shader, perpendicular to the direction of the line on screen.
//!
//! For that purpose each point of the polyline produces two vertices sharing the
//! same position, and each vertex carries the positions of the previous and next
//! points so that the shader can compute the local direction of the line:
//!
//! | attribute  | components | content                                                |
//! |------------|------------|--------------------------------------------------------|
//! | `position` | 3          | position of the point                                  |
//! | `previous` | 3          | position of the previous point                         |
//! | `next`     | 3          | position of the next point                             |
//! | `side`     | 1          | `1` for the first vertex of a pair, `-1` for the other |
//! | `width`    | 1          | width multiplier, from the optional width profile      |
//! | `uv`       | 2          | `(i / (n - 1), 0)` and `(i / (n - 1), 1)`              |
//! | `counters` | 1          | `i / n`, used for dashes and visibility                |
//!
//! The index buffer is a list of 16 bit indices, two triangles per segment.
//!
//! At the ends of the line, the missing neighbor is the point itself, unless the
//! line is closed (its first and last points are equal) in which case the
//! neighbors wrap around.
//!
//! The main types of this crate are:
//!
//! * [`MeshLine`](struct.MeshLine.html) owns the points of a line and builds its
//!   buffers.
//! * [`LineBuffers`](struct.LineBuffers.html) holds the generated attributes and
//!   keeps track of which ones need to be uploaded again.
//! * [`AttributeSink`](attributes/trait.AttributeSink.html) is the interface to
//!   hand the attributes over to a rendering API.
//!
//! ## Streaming lines
//!
//! Trails of moving objects keep a fixed number of points and move forward
//! every frame. [`MeshLine::advance`](struct.MeshLine.html#method.advance) drops
//! the oldest point and appends a new one by shifting the positions in place,
//! without rebuilding the topology or allocating.
//!
//! ## Example
//!
//! ```
//! use meshline_tessellation::{MeshLine, AttributeName};
//! use meshline_tessellation::path::PointSource;
//! use meshline_tessellation::math::point;
//!
//! let points = [point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(2.0, 0.0, 0.0)];
//!
//! // A line that gets thinner towards its end.
//! let mut line = MeshLine::with_points(
//!     PointSource::Points(&points),
//!     Some(Box::new(|t: f32| 1.0 - t)),
//! ).unwrap();
//!
//! assert_eq!(line.buffers().attribute(AttributeName::Width), &[1.0, 1.0, 0.5, 0.5, 0.0, 0.0]);
//!
//! line.advance(point(3.0, 0.0, 0.0));
//! assert_eq!(line.points()[2], point(3.0, 0.0, 0.0));
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use meshline_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod advance;
pub mod attributes;
mod buffers;
mod builder;
mod error;

#[cfg(test)]
mod line_tests;

pub use crate::path::geom;
pub use crate::path::math;

#[doc(inline)]
pub use crate::attributes::{AttributeName, AttributeSet, AttributeSink};
#[doc(inline)]
pub use crate::buffers::{Bounds, LineBuffers, LineVertex, MAX_POINTS};
#[doc(inline)]
pub use crate::builder::{build_line_buffers, MeshLine, WidthProfile};
#[doc(inline)]
pub use crate::error::{MeshLineError, MeshLineResult};

/// The type of the index buffer.
pub type Index = u16;
