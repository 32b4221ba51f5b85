//! Uniforms of the line material.

/// Opaque handle to a texture owned by the rendering backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct TextureId(pub u32);

/// The uniforms of the line shaders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Uniform {
    LineWidth,
    Map,
    UseMap,
    AlphaMap,
    UseAlphaMap,
    Color,
    Opacity,
    Resolution,
    SizeAttenuation,
    DashArray,
    DashOffset,
    DashRatio,
    UseDash,
    Visibility,
    AlphaTest,
    Repeat,
}

impl Uniform {
    pub const ALL: [Uniform; 16] = [
        Uniform::LineWidth,
        Uniform::Map,
        Uniform::UseMap,
        Uniform::AlphaMap,
        Uniform::UseAlphaMap,
        Uniform::Color,
        Uniform::Opacity,
        Uniform::Resolution,
        Uniform::SizeAttenuation,
        Uniform::DashArray,
        Uniform::DashOffset,
        Uniform::DashRatio,
        Uniform::UseDash,
        Uniform::Visibility,
        Uniform::AlphaTest,
        Uniform::Repeat,
    ];

    /// Name of the uniform in the shaders.
    pub fn name(self) -> &'static str {
        match self {
            Uniform::LineWidth => "lineWidth",
            Uniform::Map => "map",
            Uniform::UseMap => "useMap",
            Uniform::AlphaMap => "alphaMap",
            Uniform::UseAlphaMap => "useAlphaMap",
            Uniform::Color => "color",
            Uniform::Opacity => "opacity",
            Uniform::Resolution => "resolution",
            Uniform::SizeAttenuation => "sizeAttenuation",
            Uniform::DashArray => "dashArray",
            Uniform::DashOffset => "dashOffset",
            Uniform::DashRatio => "dashRatio",
            Uniform::UseDash => "useDash",
            Uniform::Visibility => "visibility",
            Uniform::AlphaTest => "alphaTest",
            Uniform::Repeat => "repeat",
        }
    }
}

/// Value of a uniform, as bound to the shaders.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Texture(Option<TextureId>),
}

#[inline]
fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Parameters of the line material.
///
/// Flags (`use_map`, `use_dash`, ...) are stored as booleans and bound as `0.0`
/// or `1.0` floats, which is what the shaders compare against.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct LineMaterial {
    /// Width of the line, multiplied by the per-vertex `width` attribute.
    ///
    /// In world units when `size_attenuation` is set, in pixels otherwise.
    /// Default value: `LineMaterial::DEFAULT_LINE_WIDTH`.
    pub line_width: f32,

    pub map: Option<TextureId>,
    pub use_map: bool,
    pub alpha_map: Option<TextureId>,
    pub use_alpha_map: bool,

    /// Linear RGB.
    ///
    /// Default value: white.
    pub color: [f32; 3],
    pub opacity: f32,

    /// Size of the viewport in pixels.
    pub resolution: [f32; 2],

    /// Whether the width of the line shrinks with the distance to the camera.
    ///
    /// Default value: `true`.
    pub size_attenuation: bool,

    /// Length of a dash period, as a fraction of the line length. Zero disables
    /// dashes.
    pub dash_array: f32,
    pub dash_offset: f32,

    /// Portion of each dash period that is hidden.
    ///
    /// Default value: `LineMaterial::DEFAULT_DASH_RATIO`.
    pub dash_ratio: f32,
    pub use_dash: bool,

    /// Portion of the line that is drawn, from its start.
    pub visibility: f32,

    /// Fragments with an alpha below this value are discarded.
    pub alpha_test: f32,

    /// Texture coordinate scale.
    pub repeat: [f32; 2],
}

impl LineMaterial {
    pub const DEFAULT_LINE_WIDTH: f32 = 1.0;
    pub const DEFAULT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
    pub const DEFAULT_DASH_RATIO: f32 = 0.5;

    pub const DEFAULT: Self = LineMaterial {
        line_width: Self::DEFAULT_LINE_WIDTH,
        map: None,
        use_map: false,
        alpha_map: None,
        use_alpha_map: false,
        color: Self::DEFAULT_COLOR,
        opacity: 1.0,
        resolution: [1.0, 1.0],
        size_attenuation: true,
        dash_array: 0.0,
        dash_offset: 0.0,
        dash_ratio: Self::DEFAULT_DASH_RATIO,
        use_dash: false,
        visibility: 1.0,
        alpha_test: 0.0,
        repeat: [1.0, 1.0],
    };

    #[inline]
    pub fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub const fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Sets the color texture and enables it.
    #[inline]
    pub const fn with_map(mut self, map: TextureId) -> Self {
        self.map = Some(map);
        self.use_map = true;
        self
    }

    /// Sets the alpha texture and enables it.
    #[inline]
    pub const fn with_alpha_map(mut self, map: TextureId) -> Self {
        self.alpha_map = Some(map);
        self.use_alpha_map = true;
        self
    }

    #[inline]
    pub const fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Sets the color from a `0xRRGGBB` value.
    #[inline]
    pub fn with_color_hex(self, hex: u32) -> Self {
        self.with_color(color_from_hex(hex))
    }

    #[inline]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    #[inline]
    pub const fn with_resolution(mut self, width: f32, height: f32) -> Self {
        self.resolution = [width, height];
        self
    }

    #[inline]
    pub const fn with_size_attenuation(mut self, attenuation: bool) -> Self {
        self.size_attenuation = attenuation;
        self
    }

    /// Sets the dash period and enables dashes if it isn't zero.
    #[inline]
    pub fn with_dash_array(mut self, dash_array: f32) -> Self {
        self.set_dash_array(dash_array);
        self
    }

    #[inline]
    pub const fn with_dash_offset(mut self, offset: f32) -> Self {
        self.dash_offset = offset;
        self
    }

    #[inline]
    pub const fn with_dash_ratio(mut self, ratio: f32) -> Self {
        self.dash_ratio = ratio;
        self
    }

    #[inline]
    pub const fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = visibility;
        self
    }

    #[inline]
    pub const fn with_alpha_test(mut self, alpha_test: f32) -> Self {
        self.alpha_test = alpha_test;
        self
    }

    #[inline]
    pub const fn with_repeat(mut self, u: f32, v: f32) -> Self {
        self.repeat = [u, v];
        self
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    /// Sets the color texture without changing `use_map`.
    pub fn set_map(&mut self, map: Option<TextureId>) {
        self.map = map;
    }

    pub fn set_use_map(&mut self, use_map: bool) {
        self.use_map = use_map;
    }

    /// Sets the alpha texture without changing `use_alpha_map`.
    pub fn set_alpha_map(&mut self, map: Option<TextureId>) {
        self.alpha_map = map;
    }

    pub fn set_use_alpha_map(&mut self, use_alpha_map: bool) {
        self.use_alpha_map = use_alpha_map;
    }

    pub fn set_color(&mut self, color: [f32; 3]) {
        self.color = color;
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    pub fn set_resolution(&mut self, width: f32, height: f32) {
        self.resolution = [width, height];
    }

    pub fn set_size_attenuation(&mut self, attenuation: bool) {
        self.size_attenuation = attenuation;
    }

    /// Sets the dash period. Dashes are enabled if it is not zero and disabled
    /// otherwise.
    pub fn set_dash_array(&mut self, dash_array: f32) {
        self.dash_array = dash_array;
        self.use_dash = dash_array != 0.0;
    }

    pub fn set_dash_offset(&mut self, offset: f32) {
        self.dash_offset = offset;
    }

    pub fn set_dash_ratio(&mut self, ratio: f32) {
        self.dash_ratio = ratio;
    }

    pub fn set_use_dash(&mut self, use_dash: bool) {
        self.use_dash = use_dash;
    }

    pub fn set_visibility(&mut self, visibility: f32) {
        self.visibility = visibility;
    }

    pub fn set_alpha_test(&mut self, alpha_test: f32) {
        self.alpha_test = alpha_test;
    }

    pub fn set_repeat(&mut self, u: f32, v: f32) {
        self.repeat = [u, v];
    }

    /// The value to bind to a uniform.
    pub fn value(&self, uniform: Uniform) -> UniformValue {
        match uniform {
            Uniform::LineWidth => UniformValue::Float(self.line_width),
            Uniform::Map => UniformValue::Texture(self.map),
            Uniform::UseMap => UniformValue::Float(flag(self.use_map)),
            Uniform::AlphaMap => UniformValue::Texture(self.alpha_map),
            Uniform::UseAlphaMap => UniformValue::Float(flag(self.use_alpha_map)),
            Uniform::Color => UniformValue::Vec3(self.color),
            Uniform::Opacity => UniformValue::Float(self.opacity),
            Uniform::Resolution => UniformValue::Vec2(self.resolution),
            Uniform::SizeAttenuation => UniformValue::Float(flag(self.size_attenuation)),
            Uniform::DashArray => UniformValue::Float(self.dash_array),
            Uniform::DashOffset => UniformValue::Float(self.dash_offset),
            Uniform::DashRatio => UniformValue::Float(self.dash_ratio),
            Uniform::UseDash => UniformValue::Float(flag(self.use_dash)),
            Uniform::Visibility => UniformValue::Float(self.visibility),
            Uniform::AlphaTest => UniformValue::Float(self.alpha_test),
            Uniform::Repeat => UniformValue::Vec2(self.repeat),
        }
    }

    /// Packs the non-texture uniforms into a block that can be copied into a
    /// uniform buffer.
    pub fn uniforms(&self) -> LineUniforms {
        LineUniforms {
            color: self.color,
            opacity: self.opacity,
            resolution: self.resolution,
            repeat: self.repeat,
            line_width: self.line_width,
            size_attenuation: flag(self.size_attenuation),
            dash_array: self.dash_array,
            dash_offset: self.dash_offset,
            dash_ratio: self.dash_ratio,
            use_dash: flag(self.use_dash),
            visibility: self.visibility,
            alpha_test: self.alpha_test,
            use_map: flag(self.use_map),
            use_alpha_map: flag(self.use_alpha_map),
            _pad: [0.0; 2],
        }
    }
}

impl Default for LineMaterial {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Converts a `0xRRGGBB` value into linear RGB components in `[0, 1]`.
pub fn color_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// The scalar and vector uniforms of the line material, laid out in rows of 16
/// bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineUniforms {
    pub color: [f32; 3],
    pub opacity: f32,
    pub resolution: [f32; 2],
    pub repeat: [f32; 2],
    pub line_width: f32,
    pub size_attenuation: f32,
    pub dash_array: f32,
    pub dash_offset: f32,
    pub dash_ratio: f32,
    pub use_dash: f32,
    pub visibility: f32,
    pub alpha_test: f32,
    pub use_map: f32,
    pub use_alpha_map: f32,
    pub _pad: [f32; 2],
}

#[test]
fn defaults() {
    let m = LineMaterial::default();

    assert_eq!(m.value(Uniform::LineWidth), UniformValue::Float(1.0));
    assert_eq!(m.value(Uniform::Map), UniformValue::Texture(None));
    assert_eq!(m.value(Uniform::UseMap), UniformValue::Float(0.0));
    assert_eq!(m.value(Uniform::Color), UniformValue::Vec3([1.0, 1.0, 1.0]));
    assert_eq!(m.value(Uniform::Opacity), UniformValue::Float(1.0));
    assert_eq!(m.value(Uniform::Resolution), UniformValue::Vec2([1.0, 1.0]));
    assert_eq!(m.value(Uniform::SizeAttenuation), UniformValue::Float(1.0));
    assert_eq!(m.value(Uniform::DashArray), UniformValue::Float(0.0));
    assert_eq!(m.value(Uniform::DashOffset), UniformValue::Float(0.0));
    assert_eq!(m.value(Uniform::DashRatio), UniformValue::Float(0.5));
    assert_eq!(m.value(Uniform::UseDash), UniformValue::Float(0.0));
    assert_eq!(m.value(Uniform::Visibility), UniformValue::Float(1.0));
    assert_eq!(m.value(Uniform::AlphaTest), UniformValue::Float(0.0));
    assert_eq!(m.value(Uniform::Repeat), UniformValue::Vec2([1.0, 1.0]));
}

#[test]
fn dash_array_toggles_dashes() {
    let mut m = LineMaterial::new();
    m.set_dash_array(0.1);
    assert!(m.use_dash);
    assert_eq!(m.value(Uniform::UseDash), UniformValue::Float(1.0));

    m.set_dash_array(0.0);
    assert!(!m.use_dash);

    let m = LineMaterial::new().with_dash_array(0.25);
    assert!(m.use_dash);
    assert_eq!(m.dash_array, 0.25);
}

#[test]
fn textures_are_not_enabled_by_the_setters() {
    let mut m = LineMaterial::new();
    m.set_map(Some(TextureId(3)));
    assert_eq!(m.value(Uniform::Map), UniformValue::Texture(Some(TextureId(3))));
    assert_eq!(m.value(Uniform::UseMap), UniformValue::Float(0.0));

    let m = LineMaterial::new().with_alpha_map(TextureId(4));
    assert_eq!(m.value(Uniform::UseAlphaMap), UniformValue::Float(1.0));
}

#[test]
fn uniform_block() {
    assert_eq!(core::mem::size_of::<LineUniforms>(), 80);
    assert_eq!(core::mem::size_of::<LineUniforms>() % 16, 0);

    let m = LineMaterial::new()
        .with_color_hex(0xFF8000)
        .with_line_width(4.0)
        .with_dash_array(0.2);
    let block = m.uniforms();
    let floats: &[f32] = bytemuck::cast_slice(core::slice::from_ref(&block));

    assert_eq!(&floats[0..4], &[1.0, 128.0 / 255.0, 0.0, 1.0]);
    assert_eq!(floats[8], 4.0);
    assert_eq!(floats[10], 0.2);
    assert_eq!(floats[13], 1.0);
}

#[test]
fn uniform_names() {
    assert_eq!(Uniform::ALL.len(), 16);
    assert_eq!(Uniform::SizeAttenuation.name(), "sizeAttenuation");
    assert_eq!(Uniform::AlphaTest.name(), "alphaTest");
}
