//! CPU versions of the fragment stage formulas.
//!
//! These mirror the fragment shader operation by operation, including the GLSL
//! definitions of `mod` and `step`, so that the outcome of a material setup can be
//! checked without a GPU.

use crate::material::LineMaterial;
use num_traits::Float;

/// GLSL's `mod`: `x - y * floor(x / y)`. The result has the sign of `y`.
#[inline]
pub fn glsl_mod(x: f32, y: f32) -> f32 {
    x - y * Float::floor(x / y)
}

/// GLSL's `step`: `0.0` if `x < edge`, `1.0` otherwise.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Alpha multiplier of the dash pattern at a position along the line.
///
/// `1.0` in the visible part of a dash period, `0.0` in the gap (other values
/// can appear for dash ratios outside of `[0, 1]`).
#[inline]
pub fn dash_alpha(counter: f32, dash_array: f32, dash_offset: f32, dash_ratio: f32) -> f32 {
    Float::ceil(glsl_mod(counter + dash_offset, dash_array) - dash_array * dash_ratio)
}

/// Alpha multiplier of the visibility cutoff: the line is drawn up to
/// `visibility`, included.
#[inline]
pub fn visibility_alpha(counter: f32, visibility: f32) -> f32 {
    step(counter, visibility)
}

/// Texture samples for a fragment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Texels {
    /// Sample of `map`, used if `use_map` is set.
    pub map: [f32; 4],
    /// Sample of `alpha_map`, only its alpha is used if `use_alpha_map` is set.
    pub alpha_map: [f32; 4],
}

impl Texels {
    pub const WHITE: Self = Texels {
        map: [1.0; 4],
        alpha_map: [1.0; 4],
    };
}

impl Default for Texels {
    fn default() -> Self {
        Texels::WHITE
    }
}

/// Texture coordinates the textures are sampled at.
pub fn texture_coordinates(material: &LineMaterial, uv: [f32; 2]) -> [f32; 2] {
    [uv[0] * material.repeat[0], uv[1] * material.repeat[1]]
}

/// Computes the color of a fragment at the position `counter` along the line.
///
/// Returns `None` when the fragment is discarded by the alpha test. As in the
/// shader, the alpha test happens before dashes and the visibility cutoff are
/// applied, so those produce transparent fragments instead.
pub fn shade_fragment(material: &LineMaterial, counter: f32, texels: &Texels) -> Option<[f32; 4]> {
    let [r, g, b] = material.color;
    let mut c = [r, g, b, material.opacity];

    if material.use_map {
        for (c, t) in c.iter_mut().zip(texels.map.iter()) {
            *c *= *t;
        }
    }

    if material.use_alpha_map {
        c[3] *= texels.alpha_map[3];
    }

    if c[3] < material.alpha_test {
        return None;
    }

    if material.use_dash {
        c[3] *= dash_alpha(
            counter,
            material.dash_array,
            material.dash_offset,
            material.dash_ratio,
        );
    }

    c[3] *= visibility_alpha(counter, material.visibility);

    Some(c)
}

#[test]
fn glsl_mod_of_negative_values() {
    assert_eq!(glsl_mod(0.25, 0.1), 0.25 - 0.1 * 2.0);
    assert_eq!(glsl_mod(-0.25, 1.0), 0.75);
    assert_eq!(glsl_mod(1.0, 0.5), 0.0);
}

#[test]
fn dashes() {
    // Dash period of 0.2 with the second half hidden.
    assert_eq!(dash_alpha(0.15, 0.2, 0.0, 0.5), 1.0);
    assert_eq!(dash_alpha(0.05, 0.2, 0.0, 0.5), 0.0);
    assert_eq!(dash_alpha(0.0, 0.2, 0.0, 0.5), -0.0);

    // The offset moves the pattern along the line.
    assert_eq!(dash_alpha(0.05, 0.2, 0.1, 0.5), 1.0);
}

#[test]
fn visibility_cutoff() {
    assert_eq!(visibility_alpha(0.2, 0.5), 1.0);
    assert_eq!(visibility_alpha(0.5, 0.5), 1.0);
    assert_eq!(visibility_alpha(0.75, 0.5), 0.0);
}

#[test]
fn default_material_is_opaque_white() {
    let m = LineMaterial::default();
    assert_eq!(shade_fragment(&m, 0.3, &Texels::WHITE), Some([1.0, 1.0, 1.0, 1.0]));
    assert_eq!(shade_fragment(&m, 1.0, &Texels::WHITE), Some([1.0, 1.0, 1.0, 1.0]));
}

#[test]
fn alpha_test_discards_before_dashing() {
    let m = LineMaterial::new()
        .with_opacity(0.4)
        .with_alpha_test(0.5)
        .with_dash_array(0.2);
    assert_eq!(shade_fragment(&m, 0.15, &Texels::WHITE), None);

    // Dashes and visibility produce transparent fragments, not discarded ones.
    let m = LineMaterial::new().with_alpha_test(0.5).with_dash_array(0.2).with_visibility(0.5);
    assert_eq!(shade_fragment(&m, 0.05, &Texels::WHITE).map(|c| c[3]), Some(0.0));
    assert_eq!(shade_fragment(&m, 0.75, &Texels::WHITE).map(|c| c[3]), Some(0.0));
    assert_eq!(shade_fragment(&m, 0.15, &Texels::WHITE).map(|c| c[3]), Some(1.0));
}

#[test]
fn textures() {
    let texels = Texels {
        map: [0.5, 0.25, 1.0, 0.5],
        alpha_map: [0.0, 0.0, 0.0, 0.5],
    };

    let m = LineMaterial::new().with_map(crate::TextureId(0));
    assert_eq!(shade_fragment(&m, 0.0, &texels), Some([0.5, 0.25, 1.0, 0.5]));

    let m = LineMaterial::new().with_alpha_map(crate::TextureId(1)).with_color([1.0, 0.0, 0.0]);
    assert_eq!(shade_fragment(&m, 0.0, &texels), Some([1.0, 0.0, 0.0, 0.5]));

    // Setting a texture without enabling it has no effect.
    let mut m = LineMaterial::new();
    m.set_map(Some(crate::TextureId(0)));
    assert_eq!(shade_fragment(&m, 0.0, &texels), Some([1.0, 1.0, 1.0, 1.0]));

    let m = LineMaterial::new().with_repeat(2.0, 3.0);
    assert_eq!(texture_coordinates(&m, [0.5, 1.0]), [1.0, 3.0]);
}
