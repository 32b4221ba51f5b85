//! Streaming update of line buffers.
//!
//! A trailing line keeps a fixed number of points: each frame the oldest point is
//! dropped and a new one is appended. Since the vertex count doesn't change, the
//! topology (`side`, `width`, `uv`, `counters` and the indices) stays valid and only
//! the positions and their neighbors have to be shifted.

use crate::attributes::AttributeName;
use crate::buffers::{write_point, LineBuffers};
use crate::math::Point;

// Floats per point: two vertices of three components.
const STRIDE: usize = 6;

impl LineBuffers {
    /// Shifts the line by one point towards its start and appends `p` at the end.
    ///
    /// - `previous` receives a copy of the positions before the shift,
    /// - `position` moves by one point and its last pair is set to `p`,
    /// - `next` is the shifted `position` moved by one more point, with `p` in its
    ///   last pair.
    ///
    /// This runs in linear time and does not allocate. The bounds are not updated.
    ///
    /// The buffers must contain at least one point. This is checked in debug builds,
    /// release builds leave empty buffers untouched.
    ///
    /// Only the buffers move: when they belong to a [`MeshLine`](struct.MeshLine.html),
    /// use [`MeshLine::advance`](struct.MeshLine.html#method.advance) instead, otherwise
    /// the stored points fall behind and the next `rebuild` goes back to them.
    pub fn advance(&mut self, p: Point) {
        debug_assert!(!self.is_empty(), "advancing an empty line");
        let len = self.position.len();
        if len < STRIDE {
            return;
        }

        let last = self.vertex_count() - 2;

        self.previous.copy_from_slice(&self.position);

        self.position.copy_within(STRIDE.., 0);
        write_point(&mut self.position, last, p);
        write_point(&mut self.position, last + 1, p);

        self.next[..len - STRIDE].copy_from_slice(&self.position[STRIDE..]);
        write_point(&mut self.next, last, p);
        write_point(&mut self.next, last + 1, p);

        self.dirty.insert(AttributeName::Position);
        self.dirty.insert(AttributeName::Previous);
        self.dirty.insert(AttributeName::Next);

        log::trace!("advanced line of {} points to {:?}", self.point_count(), p);
    }
}
