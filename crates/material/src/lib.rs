#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]
#![no_std]

//! The shading side of meshline's thick lines.
//!
//! This crate is reexported in [meshline](https://docs.rs/meshline/).
//!
//! # Overview
//!
//! Line meshes are expanded into ribbons on the GPU: the vertex shader offsets
//! the two vertices of each point of the line along the screen space normal, and
//! the fragment shader takes care of dashes and of the visibility cutoff. This
//! crate provides:
//!
//! * the GLSL sources of both stages ([`VERTEX_SHADER`], [`FRAGMENT_SHADER`]),
//! * the material parameters and the names of the uniforms they are bound to
//!   ([`LineMaterial`], [`Uniform`]),
//! * a plain data block of the uniforms that can be copied into a uniform
//!   buffer ([`LineUniforms`]),
//! * CPU versions of the fragment formulas in the [`fragment`] module.
//!
//! Compiling the shaders and binding textures is left to the rendering backend,
//! textures are only referred to by [`TextureId`].
//!
//! ```
//! use meshline_material::{LineMaterial, Uniform, UniformValue};
//!
//! let material = LineMaterial::new()
//!     .with_line_width(8.0)
//!     .with_size_attenuation(false)
//!     .with_dash_array(0.1);
//!
//! assert_eq!(material.value(Uniform::UseDash), UniformValue::Float(1.0));
//! for uniform in &Uniform::ALL {
//!     let _value = material.value(*uniform);
//!     // bind to uniform.name() ...
//! }
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod fragment;
mod material;
mod shaders;

#[doc(inline)]
pub use crate::material::{color_from_hex, LineMaterial, LineUniforms, TextureId, Uniform, UniformValue};
#[doc(inline)]
pub use crate::shaders::{ShaderStage, FRAGMENT_SHADER, VERTEX_SHADER};
