//! Find the first segment of a line mesh that a ray passes close to.
//!
//! Lines are drawn with a width computed on the GPU, so picking them can't use
//! the triangles of the mesh. Instead, the segments between consecutive positions
//! of the index buffer are tested against the ray with a tolerance of half the
//! line width, plus a user provided threshold.

use crate::geom::LineSegment;
use crate::math::{Point, Ray, Transform};
use crate::tessellation::LineBuffers;

/// Parameters of a picking query, in world space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Raycaster {
    /// Direction is expected to be normalized.
    pub ray: Ray,

    /// Hits closer than this distance to the ray origin are ignored.
    ///
    /// Default value: `Raycaster::DEFAULT_NEAR`.
    pub near: f32,

    /// Hits further than this distance to the ray origin are ignored.
    ///
    /// Default value: `Raycaster::DEFAULT_FAR`.
    pub far: f32,

    /// Extra distance around the line within which the ray is considered to
    /// touch it.
    ///
    /// Default value: `Raycaster::DEFAULT_LINE_THRESHOLD`.
    pub line_threshold: f32,
}

impl Raycaster {
    pub const DEFAULT_NEAR: f32 = 0.0;
    pub const DEFAULT_FAR: f32 = f32::INFINITY;
    pub const DEFAULT_LINE_THRESHOLD: f32 = 1.0;

    /// A ray from the origin towards negative z.
    pub const DEFAULT: Self = Raycaster {
        ray: Ray {
            origin: Point::new(0.0, 0.0, 0.0),
            direction: crate::math::Vector::new(0.0, 0.0, -1.0),
        },
        near: Self::DEFAULT_NEAR,
        far: Self::DEFAULT_FAR,
        line_threshold: Self::DEFAULT_LINE_THRESHOLD,
    };

    #[inline]
    pub fn new(ray: Ray) -> Self {
        Self::DEFAULT.with_ray(ray)
    }

    #[inline]
    pub const fn with_ray(mut self, ray: Ray) -> Self {
        self.ray = ray;
        self
    }

    #[inline]
    pub const fn with_near(mut self, near: f32) -> Self {
        self.near = near;
        self
    }

    #[inline]
    pub const fn with_far(mut self, far: f32) -> Self {
        self.far = far;
        self
    }

    #[inline]
    pub const fn with_line_threshold(mut self, threshold: f32) -> Self {
        self.line_threshold = threshold;
        self
    }
}

impl Default for Raycaster {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How the index buffer is walked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Topology {
    /// Each pair of consecutive indices is a segment.
    Strip,
    /// Indices are read two at a time, as disconnected segments.
    Segments,
}

impl Topology {
    #[inline]
    pub fn step(self) -> usize {
        match self {
            Topology::Strip => 1,
            Topology::Segments => 2,
        }
    }
}

impl Default for Topology {
    fn default() -> Self {
        Topology::Strip
    }
}

/// A picked segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineHit {
    /// World space distance between the ray origin and the closest point of the
    /// ray to the segment.
    pub distance: f32,
    /// Closest point of the segment to the ray, in world space.
    pub point: Point,
    /// Position in the index buffer of the first index of the segment.
    pub index: usize,
}

/// Finds the first segment of the line that the ray passes close enough to.
///
/// `line_width` is the width uniform of the line material and `world` moves the
/// line from its local space to world space.
///
/// The segments are visited in index buffer order and the first one within
/// `line_threshold + line_width * width / 2` of the ray (and between the near and
/// far distances) is returned, which is not necessarily the closest one.
pub fn raycast_line(
    raycaster: &Raycaster,
    buffers: &LineBuffers,
    line_width: f32,
    world: &Transform,
    topology: Topology,
) -> Option<LineHit> {
    let indices = buffers.indices();
    if indices.is_empty() {
        log::warn!("picking a line without index buffer");
        return None;
    }

    let bounds = buffers.bounds()?;
    let sphere = bounds.sphere.transformed(world)?;
    if !raycaster.ray.intersects_sphere(&sphere) {
        return None;
    }

    let inverse = world.inverse()?;
    let local_ray = raycaster.ray.transformed(&inverse)?;

    let widths = buffers.widths();
    let step = topology.step();

    let mut i = 0;
    while i + 1 < indices.len() {
        let segment = LineSegment {
            from: buffers.position(indices[i] as usize),
            to: buffers.position(indices[i + 1] as usize),
        };

        let width = widths.get(i / 3).cloned().unwrap_or(1.0);
        let precision = raycaster.line_threshold + line_width * width / 2.0;

        let closest = local_ray.square_distance_to_segment(&segment);
        if closest.square_distance <= precision * precision {
            if let Some(hit) = to_world_hit(raycaster, world, closest.on_ray, closest.on_segment, i) {
                return Some(hit);
            }
        }

        i += step;
    }

    None
}

fn to_world_hit(
    raycaster: &Raycaster,
    world: &Transform,
    on_ray: Point,
    on_segment: Point,
    index: usize,
) -> Option<LineHit> {
    let on_ray = world.transform_point3d(on_ray)?;
    let distance = (on_ray - raycaster.ray.origin).length();
    if distance < raycaster.near || distance > raycaster.far {
        return None;
    }

    Some(LineHit {
        distance,
        point: world.transform_point3d(on_segment)?,
        index,
    })
}
