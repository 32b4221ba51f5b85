//! GLSL sources of the line material.
//!
//! The vertex stage reads the attributes produced by `meshline_tessellation`
//! and pushes each vertex away from the line along the screen space normal, by
//! half of `lineWidth * width`. The fragment stage applies the color, the optional
//! textures, the alpha test, the dashes and the visibility cutoff.
//!
//! Both stages target GLSL 300 es. The model, view and projection matrices are
//! expected under the usual `modelMatrix`, `modelViewMatrix` and `projectionMatrix`
//! names.

pub const VERTEX_SHADER: &str = r#"#version 300 es
#define attribute in
#define varying out
precision mediump float;
precision mediump int;
#define SHADER_NAME MeshLineMaterial
uniform mat4 modelMatrix;
uniform mat4 modelViewMatrix;
uniform mat4 projectionMatrix;
uniform mat4 viewMatrix;
uniform vec3 cameraPosition;

attribute vec3 position;
attribute vec2 uv;
attribute vec3 previous;
attribute vec3 next;
attribute float side;
attribute float width;
attribute float counters;

uniform vec2 resolution;
uniform float lineWidth;
uniform vec3 color;
uniform float opacity;
uniform float sizeAttenuation;

varying vec2 vUV;
varying vec4 vColor;
varying float vCounters;

vec2 fix(vec4 i, float aspect) {
    vec2 res = i.xy / i.w;
    res.x *= aspect;
    vCounters = counters;
    return res;
}

void main() {
    float aspect = resolution.x / resolution.y;

    vColor = vec4(color, opacity);
    vUV = uv;

    mat4 m = projectionMatrix * modelViewMatrix;
    vec4 finalPosition = m * vec4(position, 1.0);
    vec4 prevPos = m * vec4(previous, 1.0);
    vec4 nextPos = m * vec4(next, 1.0);

    vec2 currentP = fix(finalPosition, aspect);
    vec2 prevP = fix(prevPos, aspect);
    vec2 nextP = fix(nextPos, aspect);

    float w = lineWidth * width;

    vec2 dir;
    if (nextP == currentP) dir = normalize(currentP - prevP);
    else if (prevP == currentP) dir = normalize(nextP - currentP);
    else {
        vec2 dir1 = normalize(currentP - prevP);
        vec2 dir2 = normalize(nextP - currentP);
        dir = normalize(dir1 + dir2);
    }

    vec4 normal = vec4(-dir.y, dir.x, 0.0, 1.0);
    normal.xy *= 0.5 * w;
    normal *= projectionMatrix;
    if (sizeAttenuation == 0.0) {
        normal.xy *= finalPosition.w;
        normal.xy /= (vec4(resolution, 0.0, 1.0) * projectionMatrix).xy;
    }

    finalPosition.xy += normal.xy * side;

    gl_Position = finalPosition;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 300 es
#define varying in
out mediump vec4 pc_fragColor;
precision mediump float;
precision mediump int;
#define SHADER_NAME MeshLineMaterial

uniform sampler2D map;
uniform sampler2D alphaMap;
uniform float useMap;
uniform float useAlphaMap;
uniform float useDash;
uniform float dashArray;
uniform float dashOffset;
uniform float dashRatio;
uniform float visibility;
uniform float alphaTest;
uniform vec2 repeat;

varying vec2 vUV;
varying vec4 vColor;
varying float vCounters;

void main() {
    vec4 c = vColor;
    if (useMap == 1.0) c *= texture(map, vUV * repeat);
    if (useAlphaMap == 1.0) c.a *= texture(alphaMap, vUV * repeat).a;
    if (c.a < alphaTest) discard;
    if (useDash == 1.0) {
        c.a *= ceil(mod(vCounters + dashOffset, dashArray) - (dashArray * dashRatio));
    }
    pc_fragColor = c;
    pc_fragColor.a *= step(vCounters, visibility);
}
"#;

/// The programmable stages of the line material.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    pub fn source(self) -> &'static str {
        match self {
            ShaderStage::Vertex => VERTEX_SHADER,
            ShaderStage::Fragment => FRAGMENT_SHADER,
        }
    }
}

#[test]
fn vertex_shader_declares_the_line_attributes() {
    let source = ShaderStage::Vertex.source();
    for attribute in &["position", "previous", "next", "side", "width", "uv", "counters"] {
        let ty = match *attribute {
            "position" | "previous" | "next" => "vec3",
            "uv" => "vec2",
            _ => "float",
        };
        let declaration = std::format!("attribute {} {};", ty, attribute);
        assert!(source.contains(&declaration), "missing {}", declaration);
    }
}

#[test]
fn shaders_declare_every_uniform() {
    use crate::Uniform;

    for uniform in &Uniform::ALL {
        let declared = ShaderStage::ALL
            .iter()
            .any(|stage| stage.source().contains(&std::format!(" {};", uniform.name())));
        assert!(declared, "{} is not declared", uniform.name());
    }
}

#[test]
fn shaders_start_with_the_version() {
    for stage in &ShaderStage::ALL {
        assert!(stage.source().starts_with("#version 300 es\n"));
    }
}
