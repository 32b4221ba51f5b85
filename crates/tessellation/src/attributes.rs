//! Names and layout of the generated vertex attributes, and the interface to hand
//! them over to a GPU buffer layer.

use crate::math::Box3D;
use crate::Index;

/// The attributes of a line mesh, as named in the vertex shader.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum AttributeName {
    Position,
    Previous,
    Next,
    Side,
    Width,
    Uv,
    Counters,
    Index,
}

impl AttributeName {
    pub const ALL: [AttributeName; 8] = [
        AttributeName::Position,
        AttributeName::Previous,
        AttributeName::Next,
        AttributeName::Side,
        AttributeName::Width,
        AttributeName::Uv,
        AttributeName::Counters,
        AttributeName::Index,
    ];

    /// The per-vertex attributes, in the order they are declared in the shader.
    pub const VERTEX: [AttributeName; 7] = [
        AttributeName::Position,
        AttributeName::Previous,
        AttributeName::Next,
        AttributeName::Side,
        AttributeName::Width,
        AttributeName::Uv,
        AttributeName::Counters,
    ];

    /// Name of the attribute in the shader.
    pub fn name(self) -> &'static str {
        match self {
            AttributeName::Position => "position",
            AttributeName::Previous => "previous",
            AttributeName::Next => "next",
            AttributeName::Side => "side",
            AttributeName::Width => "width",
            AttributeName::Uv => "uv",
            AttributeName::Counters => "counters",
            AttributeName::Index => "index",
        }
    }

    /// Number of components per vertex (per index for `Index`).
    pub fn item_size(self) -> usize {
        match self {
            AttributeName::Position | AttributeName::Previous | AttributeName::Next => 3,
            AttributeName::Uv => 2,
            AttributeName::Side
            | AttributeName::Width
            | AttributeName::Counters
            | AttributeName::Index => 1,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of attributes that were rewritten and need to be uploaded again.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct AttributeSet(u8);

impl AttributeSet {
    pub const EMPTY: Self = AttributeSet(0);
    pub const ALL: Self = AttributeSet(0xFF);

    #[inline]
    pub fn contains(self, attribute: AttributeName) -> bool {
        self.0 & attribute.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, attribute: AttributeName) {
        self.0 |= attribute.bit();
    }

    #[inline]
    pub fn remove(&mut self, attribute: AttributeName) {
        self.0 &= !attribute.bit();
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = AttributeName> {
        let all: &'static [AttributeName] = &AttributeName::ALL;
        all.iter()
            .cloned()
            .filter(move |a| self.contains(*a))
    }
}

/// The receiving end of the line buffers: typically a thin wrapper around the
/// vertex and index buffers of a rendering API.
///
/// See [`LineBuffers::flush`](../struct.LineBuffers.html#method.flush).
pub trait AttributeSink {
    /// Called for each rewritten per-vertex attribute. `data` holds
    /// `item_size * vertex_count` floats.
    fn upload_attribute(&mut self, attribute: AttributeName, item_size: usize, data: &[f32]);

    /// Called when the index buffer was rewritten.
    fn upload_indices(&mut self, indices: &[Index]);

    /// Called after a full rebuild, with the new bounding box, if any.
    fn set_bounds(&mut self, _aabb: Option<&Box3D>) {}
}

#[test]
fn attribute_set() {
    let mut set = AttributeSet::EMPTY;
    assert!(set.is_empty());

    set.insert(AttributeName::Next);
    set.insert(AttributeName::Position);
    assert!(set.contains(AttributeName::Next));
    assert!(!set.contains(AttributeName::Uv));

    let mut names = set.iter();
    assert_eq!(names.next(), Some(AttributeName::Position));
    assert_eq!(names.next(), Some(AttributeName::Next));
    assert_eq!(names.next(), None);

    set.remove(AttributeName::Next);
    set.remove(AttributeName::Position);
    assert!(set.is_empty());
    assert_eq!(AttributeSet::ALL.iter().count(), 8);
}

#[test]
fn attribute_layout() {
    let floats_per_vertex: usize = AttributeName::VERTEX.iter().map(|a| a.item_size()).sum();
    assert_eq!(floats_per_vertex, 14);
    assert_eq!(AttributeName::Counters.name(), "counters");
}
