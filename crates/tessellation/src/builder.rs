use crate::attributes::AttributeSet;
use crate::buffers::{LineBuffers, MAX_POINTS};
use crate::error::{MeshLineError, MeshLineResult};
use crate::math::Point;
use crate::path::polyline::{self, Polyline};
use crate::path::{GeometrySource, PointSource};
use crate::Index;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Width multiplier along the line, evaluated once per point with the normalized
/// position `t` in `[0, 1]`.
///
/// The returned values are used as is: negative or very large widths invert or
/// exaggerate the ribbon.
pub type WidthProfile = Box<dyn Fn(f32) -> f32>;

/// Generates the buffers of a line from a slice of points, replacing the content of
/// `output`.
///
/// This is the stateless version of [`MeshLine::set_points`]; `points` are expected
/// to be validated already.
pub fn build_line_buffers(
    points: &[Point],
    width: Option<&dyn Fn(f32) -> f32>,
    output: &mut LineBuffers,
) -> MeshLineResult<()> {
    let n = points.len();
    if n > MAX_POINTS {
        return Err(MeshLineError::TooManyVertices { vertices: n * 2 });
    }

    output.clear();
    if n == 0 {
        return Ok(());
    }

    let vertices = n * 2;
    output.position.reserve(vertices * 3);
    output.previous.reserve(vertices * 3);
    output.next.reserve(vertices * 3);
    output.side.reserve(vertices);
    output.width.reserve(vertices);
    output.uv.reserve(vertices * 2);
    output.counters.reserve(vertices);
    output.indices.reserve((n - 1) * 6);

    let last = n - 1;
    let closed = polyline::is_closed(points);

    for (i, p) in points.iter().enumerate() {
        let counter = i as f32 / n as f32;
        let t = if n > 1 { i as f32 / last as f32 } else { 0.0 };
        let w = match width {
            Some(profile) => profile(t),
            None => 1.0,
        };

        let prev = if i > 0 {
            points[i - 1]
        } else if closed {
            points[n - 2]
        } else {
            *p
        };

        let next = if i < last {
            points[i + 1]
        } else if closed {
            points[1]
        } else {
            *p
        };

        for side in &[1.0, -1.0] {
            push_point(&mut output.position, *p);
            push_point(&mut output.previous, prev);
            push_point(&mut output.next, next);
            output.side.push(*side);
            output.width.push(w);
            output.counters.push(counter);
        }

        output.uv.extend_from_slice(&[t, 0.0, t, 1.0]);

        if i < last {
            let v = (i * 2) as Index;
            output
                .indices
                .extend_from_slice(&[v, v + 1, v + 2, v + 2, v + 1, v + 3]);
        }
    }

    output.compute_bounds();

    log::debug!(
        "built line buffers: {} points, {} vertices, {}",
        n,
        vertices,
        if closed { "closed" } else { "open" }
    );

    Ok(())
}

#[inline]
fn push_point(array: &mut Vec<f32>, p: Point) {
    array.extend_from_slice(&[p.x, p.y, p.z]);
}

/// Builds and owns the buffers of a thick line.
///
/// ## Example
///
/// ```
/// use meshline_tessellation::{MeshLine, AttributeName};
/// use meshline_tessellation::path::PointSource;
///
/// let mut line = MeshLine::new();
/// let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0];
/// let buffers = line.set_points(PointSource::Flat(&coords), None).unwrap();
///
/// assert_eq!(buffers.vertex_count(), 6);
/// assert_eq!(buffers.indices(), &[0, 1, 2, 2, 1, 3, 2, 3, 4, 4, 3, 5]);
/// assert!(buffers.needs_update(AttributeName::Position));
/// ```
#[derive(Default)]
pub struct MeshLine {
    points: Polyline,
    width: Option<WidthProfile>,
    buffers: LineBuffers,
}

impl MeshLine {
    pub fn new() -> Self {
        MeshLine::default()
    }

    pub fn with_points(source: PointSource, width: Option<WidthProfile>) -> MeshLineResult<Self> {
        let mut line = MeshLine::new();
        line.set_points(source, width)?;

        Ok(line)
    }

    /// Replaces the points and width profile, and regenerates all of the buffers.
    ///
    /// On error, the line is left untouched: the previous points, width profile
    /// and buffers remain valid.
    pub fn set_points(
        &mut self,
        source: PointSource,
        width: Option<WidthProfile>,
    ) -> MeshLineResult<&LineBuffers> {
        if let Err(e) = source.validate() {
            log::warn!("rejected line points: {}", e);
            return Err(e.into());
        }

        let n = source.len();
        if n > MAX_POINTS {
            log::warn!("rejected line points: {} points is above the limit", n);
            return Err(MeshLineError::TooManyVertices { vertices: n * 2 });
        }

        self.points.set(source)?;
        self.width = width;
        self.rebuild()?;

        Ok(&self.buffers)
    }

    /// Extracts the points from another geometry representation and builds them.
    pub fn set_geometry(
        &mut self,
        geometry: GeometrySource,
        width: Option<WidthProfile>,
    ) -> MeshLineResult<&LineBuffers> {
        let source = geometry.to_point_source().map_err(|e| {
            log::warn!("rejected line geometry: {}", e);
            MeshLineError::from(e)
        })?;

        self.set_points(source, width)
    }

    /// Regenerates the buffers from the stored points and width profile.
    pub fn rebuild(&mut self) -> MeshLineResult<&LineBuffers> {
        build_line_buffers(self.points.points(), self.width.as_deref(), &mut self.buffers)?;

        Ok(&self.buffers)
    }

    /// Appends a point and drops the oldest one, keeping the number of points.
    ///
    /// Only the `position`, `previous` and `next` attributes are rewritten and
    /// nothing is allocated. The bounds are not updated, see `refresh_bounds`.
    ///
    /// The line must have been built with at least one point.
    pub fn advance(&mut self, p: Point) -> &LineBuffers {
        self.buffers.advance(p);
        self.points.shift(p);

        &self.buffers
    }

    /// Recomputes the bounding volumes from the current positions.
    pub fn refresh_bounds(&mut self) {
        self.buffers.compute_bounds();
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        self.points.points()
    }

    #[inline]
    pub fn buffers(&self) -> &LineBuffers {
        &self.buffers
    }

    /// Mutable access to the buffers, typically to `flush` them.
    ///
    /// Advancing the buffers directly doesn't shift the stored points, see
    /// `advance`.
    #[inline]
    pub fn buffers_mut(&mut self) -> &mut LineBuffers {
        &mut self.buffers
    }

    #[inline]
    pub fn bounds(&self) -> Option<&crate::Bounds> {
        self.buffers.bounds()
    }

    #[inline]
    pub fn has_width_profile(&self) -> bool {
        self.width.is_some()
    }

    /// Returns the attributes rewritten since the last call.
    pub fn take_updates(&mut self) -> AttributeSet {
        self.buffers.take_updates()
    }
}

impl fmt::Debug for MeshLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MeshLine")
            .field("points", &self.points.points())
            .field("width", &self.width.as_ref().map(|_| "<profile>"))
            .field("buffers", &self.buffers)
            .finish()
    }
}

