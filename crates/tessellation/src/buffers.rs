use crate::attributes::{AttributeName, AttributeSet, AttributeSink};
use crate::math::{point, BoundingSphere, Box3D, Point};
use crate::Index;

use alloc::vec::Vec;

/// Maximum number of points a line can have: two vertices per point must be
/// addressable with 16 bit indices.
pub const MAX_POINTS: usize = (Index::MAX as usize + 1) / 2;

/// Bounding volumes of the `position` attribute.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub aabb: Box3D,
    pub sphere: BoundingSphere,
}

/// One vertex of the line with all of its attributes, for hosts that prefer a
/// single interleaved vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub previous: [f32; 3],
    pub next: [f32; 3],
    pub side: f32,
    pub width: f32,
    pub uv: [f32; 2],
    pub counter: f32,
}

/// The de-interleaved vertex attributes and the index buffer of a line mesh.
///
/// Each point of the line produces a pair of vertices sharing the same position,
/// so the per-vertex arrays hold `2 * point_count` items and the triangle list
/// holds `6 * (point_count - 1)` indices.
///
/// The buffers are produced by [`MeshLine`](struct.MeshLine.html) and updated in
/// place by [`advance`](#method.advance). Each rewrite marks the touched attributes
/// so that they can be handed over to the GPU with [`flush`](#method.flush).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineBuffers {
    pub(crate) position: Vec<f32>,
    pub(crate) previous: Vec<f32>,
    pub(crate) next: Vec<f32>,
    pub(crate) side: Vec<f32>,
    pub(crate) width: Vec<f32>,
    pub(crate) uv: Vec<f32>,
    pub(crate) counters: Vec<f32>,
    pub(crate) indices: Vec<Index>,
    pub(crate) bounds: Option<Bounds>,
    pub(crate) dirty: AttributeSet,
}

impl LineBuffers {
    pub fn new() -> Self {
        LineBuffers::default()
    }

    pub fn with_point_capacity(points: usize) -> Self {
        let vertices = points * 2;
        LineBuffers {
            position: Vec::with_capacity(vertices * 3),
            previous: Vec::with_capacity(vertices * 3),
            next: Vec::with_capacity(vertices * 3),
            side: Vec::with_capacity(vertices),
            width: Vec::with_capacity(vertices),
            uv: Vec::with_capacity(vertices * 2),
            counters: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(points.saturating_sub(1) * 6),
            bounds: None,
            dirty: AttributeSet::EMPTY,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.side.len()
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.side.len() / 2
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.side.is_empty()
    }

    /// The floats of a per-vertex attribute.
    ///
    /// The index buffer is not a float array, `AttributeName::Index` returns an
    /// empty slice; use [`indices`](#method.indices) instead.
    pub fn attribute(&self, name: AttributeName) -> &[f32] {
        match name {
            AttributeName::Position => &self.position,
            AttributeName::Previous => &self.previous,
            AttributeName::Next => &self.next,
            AttributeName::Side => &self.side,
            AttributeName::Width => &self.width,
            AttributeName::Uv => &self.uv,
            AttributeName::Counters => &self.counters,
            AttributeName::Index => &[],
        }
    }

    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.position
    }

    #[inline]
    pub fn previous(&self) -> &[f32] {
        &self.previous
    }

    #[inline]
    pub fn next(&self) -> &[f32] {
        &self.next
    }

    #[inline]
    pub fn sides(&self) -> &[f32] {
        &self.side
    }

    #[inline]
    pub fn widths(&self) -> &[f32] {
        &self.width
    }

    #[inline]
    pub fn uvs(&self) -> &[f32] {
        &self.uv
    }

    #[inline]
    pub fn counters(&self) -> &[f32] {
        &self.counters
    }

    #[inline]
    pub fn indices(&self) -> &[Index] {
        &self.indices
    }

    /// Bounding box and sphere of the positions at the last build, `None` for an
    /// empty line.
    #[inline]
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Position of the vertex at index `vertex`.
    pub fn position(&self, vertex: usize) -> Point {
        read_point(&self.position, vertex)
    }

    /// All attributes of the vertex at index `vertex`.
    ///
    /// Panics if `vertex` is out of bounds.
    pub fn vertex(&self, vertex: usize) -> LineVertex {
        let i = vertex * 3;
        LineVertex {
            position: [self.position[i], self.position[i + 1], self.position[i + 2]],
            previous: [self.previous[i], self.previous[i + 1], self.previous[i + 2]],
            next: [self.next[i], self.next[i + 1], self.next[i + 2]],
            side: self.side[vertex],
            width: self.width[vertex],
            uv: [self.uv[vertex * 2], self.uv[vertex * 2 + 1]],
            counter: self.counters[vertex],
        }
    }

    /// Interleaves the per-vertex attributes.
    pub fn interleaved(&self) -> Vec<LineVertex> {
        (0..self.vertex_count()).map(|v| self.vertex(v)).collect()
    }

    /// Whether the attribute was rewritten since the last call to `take_updates`.
    #[inline]
    pub fn needs_update(&self, name: AttributeName) -> bool {
        self.dirty.contains(name)
    }

    /// Returns the attributes rewritten since the last call and clears the set.
    pub fn take_updates(&mut self) -> AttributeSet {
        core::mem::replace(&mut self.dirty, AttributeSet::EMPTY)
    }

    /// Hands the rewritten attributes over to `sink` and clears the dirty set.
    ///
    /// Returns the set of attributes that were uploaded.
    pub fn flush(&mut self, sink: &mut dyn AttributeSink) -> AttributeSet {
        let updates = self.take_updates();
        for name in updates.iter() {
            match name {
                AttributeName::Index => sink.upload_indices(&self.indices),
                _ => sink.upload_attribute(name, name.item_size(), self.attribute(name)),
            }
        }

        if updates.contains(AttributeName::Index) {
            sink.set_bounds(self.bounds.as_ref().map(|b| &b.aabb));
        }

        updates
    }

    pub fn clear(&mut self) {
        self.position.clear();
        self.previous.clear();
        self.next.clear();
        self.side.clear();
        self.width.clear();
        self.uv.clear();
        self.counters.clear();
        self.indices.clear();
        self.bounds = None;
        self.dirty = AttributeSet::ALL;
    }

    pub(crate) fn compute_bounds(&mut self) {
        let positions = self.position.chunks_exact(3).map(|c| point(c[0], c[1], c[2]));
        self.bounds = crate::geom::bounding_box(positions.clone()).map(|aabb| Bounds {
            aabb,
            sphere: BoundingSphere::from_points_and_box(positions, &aabb),
        });
    }
}

#[inline]
pub(crate) fn read_point(array: &[f32], vertex: usize) -> Point {
    let i = vertex * 3;
    point(array[i], array[i + 1], array[i + 2])
}

#[inline]
pub(crate) fn write_point(array: &mut [f32], vertex: usize, p: Point) {
    let i = vertex * 3;
    array[i] = p.x;
    array[i + 1] = p.y;
    array[i + 2] = p.z;
}

#[test]
fn max_points_fill_the_index_range() {
    assert_eq!(MAX_POINTS, 32768);
    assert_eq!(MAX_POINTS * 2 - 1, Index::MAX as usize);
}

#[test]
fn line_vertex_layout() {
    assert_eq!(core::mem::size_of::<LineVertex>(), 14 * 4);

    let v = LineVertex {
        position: [1.0, 2.0, 3.0],
        previous: [0.0; 3],
        next: [0.0; 3],
        side: -1.0,
        width: 1.0,
        uv: [0.5, 1.0],
        counter: 0.25,
    };
    let floats: &[f32] = bytemuck::cast_slice(core::slice::from_ref(&v));
    assert_eq!(floats[0], 1.0);
    assert_eq!(floats[9], -1.0);
    assert_eq!(floats[13], 0.25);
}
