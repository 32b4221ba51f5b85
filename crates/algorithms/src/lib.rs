#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]
#![no_std]

//! Queries on the buffers of thick line meshes.
//!
//! This crate is reexported in [meshline](https://docs.rs/meshline/).

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use meshline_tessellation as tessellation;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod raycast;

pub use crate::tessellation::geom;
pub use crate::tessellation::math;
pub use crate::tessellation::path;
