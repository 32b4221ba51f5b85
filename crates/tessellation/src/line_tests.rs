use crate::math::{point, Point};
use crate::path::{GeometrySource, InputError, PointSource, PositionAttribute};
use crate::{AttributeName, LineBuffers, MeshLine, MeshLineError, MAX_POINTS};

use alloc::boxed::Box;
use alloc::vec::Vec;

fn line(points: &[Point]) -> MeshLine {
    MeshLine::with_points(PointSource::Points(points), None).unwrap()
}

fn triple(array: &[f32], vertex: usize) -> Point {
    point(array[vertex * 3], array[vertex * 3 + 1], array[vertex * 3 + 2])
}

fn wavy(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f32 * 0.3;
            point(t, t * t * 0.5, 1.0 - t)
        })
        .collect()
}

fn assert_same_buffers(a: &LineBuffers, b: &LineBuffers) {
    for name in &AttributeName::VERTEX {
        let a = a.attribute(*name);
        let b = b.attribute(*name);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.to_bits(), y.to_bits(), "{:?}", name);
        }
    }
    assert_eq!(a.indices(), b.indices());
}

#[test]
fn straight_line_of_three_points() {
    let points = [point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(2.0, 0.0, 0.0)];
    let line = line(&points);
    let b = line.buffers();

    assert_eq!(
        b.positions(),
        &[
            0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 1.0, 0.0, 0.0,
            2.0, 0.0, 0.0, 2.0, 0.0, 0.0,
        ][..]
    );
    assert_eq!(b.indices(), &[0, 1, 2, 2, 1, 3, 2, 3, 4, 4, 3, 5]);
    assert_eq!(b.sides(), &[1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
    assert_eq!(b.uvs(), &[0.0, 0.0, 0.0, 1.0, 0.5, 0.0, 0.5, 1.0, 1.0, 0.0, 1.0, 1.0]);

    let third = 1.0f32 / 3.0;
    assert_eq!(b.counters(), &[0.0, 0.0, third, third, 2.0 * third, 2.0 * third]);

    // Open line: the ends are their own neighbors.
    assert_eq!(triple(b.previous(), 0), points[0]);
    assert_eq!(triple(b.previous(), 2), points[0]);
    assert_eq!(triple(b.previous(), 4), points[1]);
    assert_eq!(triple(b.next(), 0), points[1]);
    assert_eq!(triple(b.next(), 5), points[2]);
}

#[test]
fn counters_are_exact_fractions() {
    for n in 1..200 {
        let line = line(&wavy(n));
        let counters = line.buffers().counters();

        for i in 0..n {
            let expected = (i as f64 / n as f64) as f32;
            assert_eq!(counters[i * 2].to_bits(), expected.to_bits(), "{} / {}", i, n);
            assert_eq!(counters[i * 2 + 1].to_bits(), expected.to_bits(), "{} / {}", i, n);
        }
    }
}

#[test]
fn two_points() {
    let points = [point(0.0, 0.0, 0.0), point(0.0, 1.0, 0.0)];
    let b = line(&points).buffers().clone();

    assert_eq!(b.vertex_count(), 4);
    assert_eq!(b.indices(), &[0, 1, 2, 2, 1, 3]);
    assert_eq!(b.triangle_count(), 2);
}

#[test]
fn closed_loop_neighbors() {
    let points = [point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(0.0, 0.0, 0.0)];
    let line = line(&points);
    let b = line.buffers();

    assert_eq!(triple(b.previous(), 0), point(1.0, 0.0, 0.0));
    assert_eq!(triple(b.previous(), 1), point(1.0, 0.0, 0.0));
    assert_eq!(triple(b.next(), 4), point(1.0, 0.0, 0.0));
    assert_eq!(triple(b.next(), 5), point(1.0, 0.0, 0.0));
}

#[test]
fn closed_loop_wraps_around() {
    let points = [
        point(0.0, 0.0, 0.0),
        point(1.0, 0.0, 0.0),
        point(1.0, 1.0, 0.0),
        point(0.0, 1.0, 0.0),
        point(0.0, 0.0, 0.0),
    ];
    let line = line(&points);
    let b = line.buffers();
    let last = b.vertex_count() - 1;

    assert_eq!(triple(b.previous(), 0), points[3]);
    assert_eq!(triple(b.next(), last), points[1]);
    assert_eq!(triple(b.next(), last - 1), points[1]);
}

#[test]
fn open_line_neighbors() {
    let points = wavy(7);
    let line = line(&points);
    let b = line.buffers();
    let last = b.vertex_count() - 1;

    assert_eq!(triple(b.previous(), 0), points[0]);
    assert_eq!(triple(b.previous(), 1), points[0]);
    assert_eq!(triple(b.next(), last), points[6]);
    assert_eq!(triple(b.next(), last - 1), points[6]);
}

#[test]
fn nearly_closed_line_is_open() {
    let points = [point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(0.0, 0.0, 1e-6)];
    let line = line(&points);

    assert_eq!(triple(line.buffers().previous(), 0), points[0]);
}

#[test]
fn buffer_sizes() {
    for n in 0..12 {
        let points = wavy(n);
        let line = line(&points);
        let b = line.buffers();

        assert_eq!(b.positions().len(), 6 * n);
        assert_eq!(b.previous().len(), 6 * n);
        assert_eq!(b.next().len(), 6 * n);
        assert_eq!(b.sides().len(), 2 * n);
        assert_eq!(b.widths().len(), 2 * n);
        assert_eq!(b.counters().len(), 2 * n);
        assert_eq!(b.uvs().len(), 4 * n);
        assert_eq!(b.indices().len(), 6 * n.saturating_sub(1));
        assert_eq!(b.point_count(), n);

        for name in &AttributeName::VERTEX {
            assert_eq!(b.attribute(*name).len(), 2 * n * name.item_size());
        }
    }
}

#[test]
fn rebuild_is_bit_identical() {
    let points = wavy(20);
    let profile = |t: f32| t * t * 3.0 + 0.5;

    let a = MeshLine::with_points(PointSource::Points(&points), Some(Box::new(profile))).unwrap();
    let mut b = MeshLine::with_points(PointSource::Points(&points), Some(Box::new(profile))).unwrap();
    assert_same_buffers(a.buffers(), b.buffers());

    b.rebuild().unwrap();
    assert_same_buffers(a.buffers(), b.buffers());
}

#[test]
fn advance_matches_rebuild() {
    let points = [point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(2.0, 0.0, 0.0)];
    let mut streamed = line(&points);
    let before = streamed.buffers().clone();

    streamed.advance(point(3.0, 0.0, 0.0));

    let rebuilt = line(&[point(1.0, 0.0, 0.0), point(2.0, 0.0, 0.0), point(3.0, 0.0, 0.0)]);
    let b = streamed.buffers();

    assert_eq!(b.positions(), rebuilt.buffers().positions());
    assert_eq!(b.previous(), before.positions());
    assert_eq!(
        b.next(),
        &[
            2.0, 0.0, 0.0, 2.0, 0.0, 0.0,
            3.0, 0.0, 0.0, 3.0, 0.0, 0.0,
            3.0, 0.0, 0.0, 3.0, 0.0, 0.0,
        ][..]
    );

    // Topology is untouched.
    assert_eq!(b.sides(), before.sides());
    assert_eq!(b.widths(), before.widths());
    assert_eq!(b.uvs(), before.uvs());
    assert_eq!(b.counters(), before.counters());
    assert_eq!(b.indices(), before.indices());

    assert_eq!(streamed.points(), rebuilt.points());
}

#[test]
fn rebuild_after_advance_keeps_the_trail() {
    let mut streamed = line(&wavy(8));
    for i in 0..5 {
        streamed.advance(point(i as f32, 10.0, 0.0));
    }
    let positions = streamed.buffers().positions().to_vec();

    streamed.rebuild().unwrap();
    assert_eq!(streamed.buffers().positions(), &positions[..]);

    // Advancing the buffers alone leaves the stored points behind.
    let mut buffers_only = line(&wavy(8));
    buffers_only.buffers_mut().advance(point(0.0, 10.0, 0.0));
    buffers_only.rebuild().unwrap();
    assert_eq!(buffers_only.buffers().positions(), line(&wavy(8)).buffers().positions());
}

#[test]
fn advance_many_times() {
    let points = wavy(16);
    let mut streamed = line(&points);

    let mut window = points.clone();
    for i in 0..40 {
        let p = point(i as f32, -(i as f32), 2.0);
        streamed.advance(p);
        window.remove(0);
        window.push(p);

        let rebuilt = line(&window);
        assert_eq!(streamed.buffers().positions(), rebuilt.buffers().positions());
    }
}

#[test]
fn default_width() {
    let points = wavy(9);
    let line = line(&points);

    assert!(!line.has_width_profile());
    assert!(line.buffers().widths().iter().all(|w| *w == 1.0));
}

#[test]
fn width_profile_sampling() {
    let points = wavy(5);
    let line = MeshLine::with_points(PointSource::Points(&points), Some(Box::new(|t: f32| t))).unwrap();
    let widths = line.buffers().widths();

    assert!(line.has_width_profile());
    for i in 0..5 {
        let expected = i as f32 / 4.0;
        assert_eq!(widths[i * 2], expected);
        assert_eq!(widths[i * 2 + 1], expected);
    }
}

#[test]
fn width_profile_is_not_clamped() {
    let points = wavy(3);
    let line = MeshLine::with_points(PointSource::Points(&points), Some(Box::new(|_: f32| -2.0f32))).unwrap();

    assert_eq!(line.buffers().widths(), &[-2.0; 6]);
}

#[test]
fn empty_line() {
    let line = line(&[]);
    let b = line.buffers();

    assert!(b.is_empty());
    assert!(b.indices().is_empty());
    assert!(line.bounds().is_none());
}

#[test]
fn single_point() {
    let p = point(1.0, 2.0, 3.0);
    let line = MeshLine::with_points(PointSource::Points(&[p]), Some(Box::new(|t: f32| t + 2.0))).unwrap();
    let b = line.buffers();

    assert_eq!(b.vertex_count(), 2);
    assert_eq!(b.triangle_count(), 0);
    assert_eq!(b.uvs(), &[0.0, 0.0, 0.0, 1.0]);
    assert_eq!(b.widths(), &[2.0, 2.0]);
    assert_eq!(b.counters(), &[0.0, 0.0]);
    assert_eq!(triple(b.previous(), 0), p);
    assert_eq!(triple(b.next(), 1), p);
}

#[test]
fn flat_coordinates() {
    let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0];
    let flat = MeshLine::with_points(PointSource::Flat(&coords), None).unwrap();
    let points = line(&[point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(2.0, 0.0, 0.0)]);

    assert_same_buffers(flat.buffers(), points.buffers());
}

#[test]
fn geometry_adapter() {
    let array = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let mut line = MeshLine::new();
    line.set_geometry(GeometrySource::Attribute(PositionAttribute::new(&array, 3)), None)
        .unwrap();
    assert_eq!(line.points(), &[point(0.0, 0.0, 0.0), point(0.0, 1.0, 0.0)]);

    let vertices = [point(5.0, 0.0, 0.0)];
    line.set_geometry(GeometrySource::Vertices(&vertices), None).unwrap();
    assert_eq!(line.buffers().point_count(), 1);

    assert_eq!(
        line.set_geometry(GeometrySource::Attribute(PositionAttribute::new(&array, 2)), None)
            .err(),
        Some(MeshLineError::Input(InputError::UnsupportedItemSize { item_size: 2 }))
    );
    assert_eq!(line.points(), &vertices);
}

#[test]
fn invalid_input_keeps_previous_state() {
    let points = wavy(4);
    let mut line = MeshLine::with_points(PointSource::Points(&points), Some(Box::new(|t: f32| t))).unwrap();
    line.take_updates();
    let before = line.buffers().clone();

    let result = line.set_points(PointSource::Flat(&[0.0, 1.0]), None);
    assert_eq!(
        result.err(),
        Some(MeshLineError::Input(InputError::FlatLengthNotMultipleOfThree { len: 2 }))
    );

    let result = line.set_points(PointSource::Flat(&[0.0, f32::NAN, 0.0]), None);
    assert_eq!(
        result.err(),
        Some(MeshLineError::Input(InputError::PositionIsNaN { index: 0 }))
    );

    assert_eq!(line.buffers(), &before);
    assert_eq!(line.points(), &points[..]);
    assert!(line.has_width_profile());
    assert!(line.take_updates().is_empty());
}

#[test]
fn too_many_points() {
    let points: Vec<Point> = (0..MAX_POINTS + 1).map(|i| point(i as f32, 0.0, 0.0)).collect();
    let mut line = line(&points[..3]);

    assert_eq!(
        line.set_points(PointSource::Points(&points), None).err(),
        Some(MeshLineError::TooManyVertices { vertices: (MAX_POINTS + 1) * 2 })
    );
    assert_eq!(line.points().len(), 3);

    let b = line.set_points(PointSource::Points(&points[..MAX_POINTS]), None).unwrap();
    assert_eq!(b.indices().iter().max(), Some(&u16::MAX));
}

#[test]
fn bounds() {
    let points = [point(-1.0, 0.0, 0.0), point(1.0, 2.0, 0.0), point(3.0, 0.0, -4.0)];
    let mut line = line(&points);
    let bounds = *line.bounds().unwrap();

    assert_eq!(bounds.aabb.min, point(-1.0, 0.0, -4.0));
    assert_eq!(bounds.aabb.max, point(3.0, 2.0, 0.0));
    assert_eq!(bounds.sphere.center, point(1.0, 1.0, -2.0));
    for p in &points {
        assert!(bounds.sphere.contains_point(*p));
    }

    // Advancing doesn't touch the bounds until they are refreshed.
    line.advance(point(10.0, 0.0, 0.0));
    assert_eq!(line.bounds(), Some(&bounds));
    line.refresh_bounds();
    assert_eq!(line.bounds().unwrap().aabb.max, point(10.0, 2.0, 0.0));
}

#[test]
fn dirty_tracking() {
    let mut line = MeshLine::new();
    line.set_points(PointSource::Points(&wavy(3)), None).unwrap();

    let updates = line.take_updates();
    for name in &AttributeName::ALL {
        assert!(updates.contains(*name));
    }
    assert!(!line.buffers().needs_update(AttributeName::Position));
    assert!(line.take_updates().is_empty());
}

#[test]
fn interleaved_vertices() {
    let points = [point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0)];
    let line = line(&points);
    let vertices = line.buffers().interleaved();

    assert_eq!(vertices.len(), 4);
    assert_eq!(vertices[1].position, [0.0, 0.0, 0.0]);
    assert_eq!(vertices[1].next, [1.0, 0.0, 0.0]);
    assert_eq!(vertices[1].side, -1.0);
    assert_eq!(vertices[1].uv, [0.0, 1.0]);
    assert_eq!(vertices[3].counter, 0.5);
}

#[test]
fn flush_to_sink() {
    use crate::{AttributeSink, Index};

    #[derive(Default)]
    struct Uploads {
        attributes: Vec<(&'static str, usize, usize)>,
        indices: usize,
        bounds: bool,
    }

    impl AttributeSink for Uploads {
        fn upload_attribute(&mut self, attribute: AttributeName, item_size: usize, data: &[f32]) {
            self.attributes.push((attribute.name(), item_size, data.len()));
        }

        fn upload_indices(&mut self, indices: &[Index]) {
            self.indices = indices.len();
        }

        fn set_bounds(&mut self, aabb: Option<&crate::math::Box3D>) {
            self.bounds = aabb.is_some();
        }
    }

    let mut line = line(&wavy(3));
    let mut sink = Uploads::default();
    line.buffers_mut().flush(&mut sink);

    assert_eq!(sink.attributes.len(), 7);
    assert_eq!(sink.attributes[0], ("position", 3, 18));
    assert_eq!(sink.attributes[5], ("uv", 2, 12));
    assert_eq!(sink.indices, 12);
    assert!(sink.bounds);

    let mut sink = Uploads::default();
    line.advance(point(0.0, 0.0, 0.0));
    line.buffers_mut().flush(&mut sink);

    let names: Vec<_> = sink.attributes.iter().map(|a| a.0).collect();
    assert_eq!(names, ["position", "previous", "next"]);
    assert_eq!(sink.indices, 0);
}
