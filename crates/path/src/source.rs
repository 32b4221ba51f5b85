//! Tagged input shapes for polylines.

use crate::math::{point, Point};
use crate::InputError;

use alloc::vec::Vec;

/// The points of a polyline, either as a flat `[x0, y0, z0, x1, y1, z1, ...]`
/// coordinate sequence or as a sequence of points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointSource<'l> {
    Flat(&'l [f32]),
    Points(&'l [Point]),
}

impl<'l> PointSource<'l> {
    /// Number of points, rounding down for flat sequences of invalid length.
    pub fn len(&self) -> usize {
        match self {
            PointSource::Flat(coords) => coords.len() / 3,
            PointSource::Points(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that the source describes a valid sequence of points.
    pub fn validate(&self) -> Result<(), InputError> {
        if let PointSource::Flat(coords) = self {
            if coords.len() % 3 != 0 {
                return Err(InputError::FlatLengthNotMultipleOfThree { len: coords.len() });
            }
        }

        for (index, p) in self.iter().enumerate() {
            if p.x.is_nan() || p.y.is_nan() || p.z.is_nan() {
                return Err(InputError::PositionIsNaN { index });
            }
        }

        Ok(())
    }

    /// Iterates over the points of the source.
    ///
    /// Trailing coordinates of a flat sequence that don't form a whole point are
    /// ignored, use `validate` to reject them.
    pub fn iter(&self) -> Points<'l> {
        match *self {
            PointSource::Flat(coords) => Points::Flat(coords.chunks_exact(3)),
            PointSource::Points(points) => Points::Points(points.iter()),
        }
    }

    /// Validates the source and appends its points to `output`.
    ///
    /// `output` is left untouched if the source is invalid.
    pub fn to_points(&self, output: &mut Vec<Point>) -> Result<(), InputError> {
        self.validate()?;
        output.reserve(self.len());
        output.extend(self.iter());

        Ok(())
    }
}

/// Iterator over the points of a `PointSource`.
#[derive(Clone)]
pub enum Points<'l> {
    Flat(core::slice::ChunksExact<'l, f32>),
    Points(core::slice::Iter<'l, Point>),
}

impl<'l> Iterator for Points<'l> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self {
            Points::Flat(chunks) => chunks.next().map(|c| point(c[0], c[1], c[2])),
            Points::Points(points) => points.next().cloned(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Points::Flat(chunks) => chunks.size_hint(),
            Points::Points(points) => points.size_hint(),
        }
    }
}

impl<'l> ExactSizeIterator for Points<'l> {}

impl<'l> From<&'l [f32]> for PointSource<'l> {
    fn from(coords: &'l [f32]) -> Self {
        PointSource::Flat(coords)
    }
}

impl<'l> From<&'l [Point]> for PointSource<'l> {
    fn from(points: &'l [Point]) -> Self {
        PointSource::Points(points)
    }
}

impl<'l> From<&'l Vec<f32>> for PointSource<'l> {
    fn from(coords: &'l Vec<f32>) -> Self {
        PointSource::Flat(coords)
    }
}

impl<'l> From<&'l Vec<Point>> for PointSource<'l> {
    fn from(points: &'l Vec<Point>) -> Self {
        PointSource::Points(points)
    }
}

/// The position attribute of an indexed-attribute geometry: a flat array read
/// `item_size` components at a time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionAttribute<'l> {
    pub array: &'l [f32],
    pub item_size: usize,
}

impl<'l> PositionAttribute<'l> {
    pub fn new(array: &'l [f32], item_size: usize) -> Self {
        PositionAttribute { array, item_size }
    }

    /// Number of complete items in the attribute.
    pub fn count(&self) -> usize {
        if self.item_size == 0 {
            return 0;
        }

        self.array.len() / self.item_size
    }
}

/// Adapter over the geometry representations a polyline can be extracted from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GeometrySource<'l> {
    /// A vertex-list geometry, every vertex is a point of the polyline.
    Vertices(&'l [Point]),
    /// An attribute-based geometry, the points are read from its position attribute.
    Attribute(PositionAttribute<'l>),
    /// Points given directly.
    Points(PointSource<'l>),
}

impl<'l> GeometrySource<'l> {
    /// Extracts the point sequence of the geometry.
    pub fn to_point_source(&self) -> Result<PointSource<'l>, InputError> {
        match *self {
            GeometrySource::Vertices(vertices) => Ok(PointSource::Points(vertices)),
            GeometrySource::Attribute(attribute) => {
                if attribute.item_size != 3 {
                    return Err(InputError::UnsupportedItemSize {
                        item_size: attribute.item_size,
                    });
                }

                Ok(PointSource::Flat(attribute.array))
            }
            GeometrySource::Points(source) => Ok(source),
        }
    }
}

impl<'l> From<PointSource<'l>> for GeometrySource<'l> {
    fn from(source: PointSource<'l>) -> Self {
        GeometrySource::Points(source)
    }
}

impl<'l> From<PositionAttribute<'l>> for GeometrySource<'l> {
    fn from(attribute: PositionAttribute<'l>) -> Self {
        GeometrySource::Attribute(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn flat_and_point_sources_agree() {
        let flat = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let points = [point(0.0, 1.0, 2.0), point(3.0, 4.0, 5.0)];

        let mut a = Vec::new();
        let mut b = Vec::new();
        PointSource::Flat(&flat).to_points(&mut a).unwrap();
        PointSource::Points(&points).to_points(&mut b).unwrap();

        assert_eq!(a, b);
        assert_eq!(PointSource::Flat(&flat).len(), 2);
        assert_eq!(PointSource::from(&points[..]).len(), 2);
    }

    #[test]
    fn flat_source_of_invalid_length() {
        let flat = [0.0, 1.0, 2.0, 3.0];
        let mut output = vec![point(9.0, 9.0, 9.0)];

        assert_eq!(
            PointSource::Flat(&flat).to_points(&mut output),
            Err(InputError::FlatLengthNotMultipleOfThree { len: 4 })
        );
        assert_eq!(output, vec![point(9.0, 9.0, 9.0)]);
    }

    #[test]
    fn nan_coordinates_are_rejected() {
        let flat = [0.0, 0.0, 0.0, 1.0, f32::NAN, 0.0];

        assert_eq!(
            PointSource::Flat(&flat).validate(),
            Err(InputError::PositionIsNaN { index: 1 })
        );
    }

    #[test]
    fn empty_source_is_valid() {
        let mut output = Vec::new();
        PointSource::Flat(&[]).to_points(&mut output).unwrap();
        assert!(output.is_empty());
        assert!(PointSource::Points(&[]).is_empty());
    }

    #[test]
    fn geometry_adapter() {
        let vertices = [point(1.0, 2.0, 3.0)];
        assert_eq!(
            GeometrySource::Vertices(&vertices).to_point_source(),
            Ok(PointSource::Points(&vertices))
        );

        let array = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let source = GeometrySource::from(PositionAttribute::new(&array, 3));
        assert_eq!(source.to_point_source(), Ok(PointSource::Flat(&array)));

        let source = GeometrySource::from(PositionAttribute::new(&array, 2));
        assert_eq!(
            source.to_point_source(),
            Err(InputError::UnsupportedItemSize { item_size: 2 })
        );
        assert_eq!(PositionAttribute::new(&array, 2).count(), 3);
    }
}
