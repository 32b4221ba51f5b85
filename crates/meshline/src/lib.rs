#![deny(bare_trait_objects)]
#![no_std]

//! Thick, screen-space lines for 3D renderers.
//!
//! Most graphics APIs draw lines one pixel wide. meshline turns 3D polylines into
//! triangle ribbons whose width is computed in the vertex shader, which gives
//! lines of any width, in pixels or in world units, with dashes, textures and
//! a visibility cutoff along their length.
//!
//! This crate reexports the others:
//!
//! * [meshline_tessellation](https://docs.rs/meshline_tessellation/) builds and
//!   updates the vertex and index buffers of a line, including the streaming
//!   `advance` operation for trails.
//! * [meshline_algorithms](https://docs.rs/meshline_algorithms/) picks lines
//!   with a ray.
//! * [meshline_material](https://docs.rs/meshline_material/) holds the shaders
//!   and their uniforms.
//! * [meshline_path](https://docs.rs/meshline_path/) and
//!   [meshline_geom](https://docs.rs/meshline_geom/) provide the input types and
//!   the math.
//!
//! # Example
//!
//! ```
//! use meshline::math::{point, vector, Ray, Transform};
//! use meshline::path::PointSource;
//! use meshline::algorithms::raycast::{raycast_line, Raycaster, Topology};
//! use meshline::material::LineMaterial;
//! use meshline::tessellation::{MeshLine, AttributeName};
//!
//! let points = [point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(2.0, 1.0, 0.0)];
//! let mut line = MeshLine::with_points(PointSource::Points(&points), None).unwrap();
//! let material = LineMaterial::new().with_line_width(0.1);
//!
//! // Upload the attributes...
//! for name in line.take_updates().iter() {
//!     let _floats = line.buffers().attribute(name);
//! }
//!
//! // ... and pick the line.
//! let raycaster = Raycaster::new(Ray::new(point(0.5, 0.01, 10.0), vector(0.0, 0.0, -1.0)));
//! let hit = raycast_line(
//!     &raycaster,
//!     line.buffers(),
//!     material.line_width,
//!     &Transform::identity(),
//!     Topology::Strip,
//! );
//! assert!(hit.is_some());
//! ```

pub use meshline_algorithms as algorithms;
pub use meshline_material as material;
pub use meshline_tessellation as tessellation;

pub use tessellation::geom;
pub use tessellation::path;

pub use path::math;
