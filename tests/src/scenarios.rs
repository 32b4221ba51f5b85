use crate::{closed_polygon, flatten, helix};
use meshline::algorithms::raycast::{raycast_line, Raycaster, Topology};
use meshline::material::fragment::visibility_alpha;
use meshline::material::{LineMaterial, Uniform, UniformValue};
use meshline::math::{point, vector, Point, Ray, Transform};
use meshline::path::PointSource;
use meshline::tessellation::{AttributeName, AttributeSet, LineBuffers, MeshLine, MeshLineError};

fn build(points: &[Point]) -> MeshLine {
    MeshLine::with_points(PointSource::Points(points), None).unwrap()
}

fn assert_same_buffers(a: &LineBuffers, b: &LineBuffers) {
    for name in &AttributeName::VERTEX {
        assert_eq!(a.attribute(*name), b.attribute(*name), "{:?}", name);
    }
    assert_eq!(a.indices(), b.indices());
}

#[test]
fn helix_buffer_sizes() {
    for &n in &[2, 3, 10, 257] {
        let line = build(&helix(n));
        let buffers = line.buffers();
        assert_eq!(buffers.positions().len(), 6 * n);
        assert_eq!(buffers.previous().len(), 6 * n);
        assert_eq!(buffers.next().len(), 6 * n);
        assert_eq!(buffers.sides().len(), 2 * n);
        assert_eq!(buffers.widths().len(), 2 * n);
        assert_eq!(buffers.uvs().len(), 4 * n);
        assert_eq!(buffers.counters().len(), 2 * n);
        assert_eq!(buffers.indices().len(), 6 * (n - 1));
        assert_eq!(buffers.triangle_count(), 2 * (n - 1));
    }
}

#[test]
fn flat_and_point_sources_agree() {
    let points = helix(50);
    let coords = flatten(&points);

    let a = build(&points);
    let b = MeshLine::with_points(PointSource::Flat(&coords), None).unwrap();

    assert_same_buffers(a.buffers(), b.buffers());
}

#[test]
fn closed_polygon_wraps_around() {
    let points = closed_polygon(8);
    let line = build(&points);
    let buffers = line.buffers();
    let last = buffers.vertex_count() - 1;

    // The first pair looks back at the point before the repeated one, the last
    // pair looks forward to the second point.
    for v in 0..2 {
        assert_eq!(&buffers.previous()[v * 3..v * 3 + 3], &[points[7].x, points[7].y, points[7].z]);
    }
    for v in last - 1..=last {
        assert_eq!(&buffers.next()[v * 3..v * 3 + 3], &[points[1].x, points[1].y, points[1].z]);
    }
}

#[test]
fn trail_matches_rebuild() {
    let mut points = helix(100);
    let mut trail = build(&points);

    for i in 0..250 {
        let p = point(i as f32, -(i as f32), 2.0);
        trail.advance(p);

        points.remove(0);
        points.push(p);
    }

    // After 250 steps of a 100 point trail, the last point shifted out is the
    // 150th appended one.
    let dropped = point(149.0, -149.0, 2.0);

    let rebuilt = build(&points);
    let (a, b) = (trail.buffers(), rebuilt.buffers());
    for name in &AttributeName::VERTEX {
        if *name != AttributeName::Previous {
            assert_eq!(a.attribute(*name), b.attribute(*name), "{:?}", name);
        }
    }
    assert_eq!(a.indices(), b.indices());

    // The first pair still looks back at the point that was shifted out.
    assert_eq!(&a.previous()[6..], &b.previous()[6..]);
    assert_eq!(
        &a.previous()[..6],
        &[dropped.x, dropped.y, dropped.z, dropped.x, dropped.y, dropped.z]
    );

    assert_eq!(trail.points(), &points[..]);
}

#[test]
fn trail_marks_moving_attributes() {
    let mut trail = build(&helix(10));
    assert_eq!(trail.take_updates(), AttributeSet::ALL);

    trail.advance(point(1.0, 2.0, 3.0));
    let updates = trail.take_updates();
    assert!(updates.contains(AttributeName::Position));
    assert!(updates.contains(AttributeName::Previous));
    assert!(updates.contains(AttributeName::Next));
    assert!(!updates.contains(AttributeName::Index));
    assert!(!updates.contains(AttributeName::Uv));
    assert!(trail.take_updates().is_empty());
}

#[test]
fn tapered_line() {
    let points = helix(5);
    let line = MeshLine::with_points(
        PointSource::Points(&points),
        Some(Box::new(|t: f32| 1.0 - t)),
    )
    .unwrap();

    assert_eq!(
        line.buffers().widths(),
        &[1.0, 1.0, 0.75, 0.75, 0.5, 0.5, 0.25, 0.25, 0.0, 0.0]
    );
}

#[test]
fn rejected_input_keeps_the_line() {
    let points = helix(10);
    let mut line = build(&points);
    line.take_updates();

    let err = line
        .set_points(PointSource::Flat(&[0.0, 1.0, 2.0, 3.0]), None)
        .unwrap_err();
    assert!(matches!(err, MeshLineError::Input(_)));

    assert_eq!(line.points(), &points[..]);
    assert_same_buffers(line.buffers(), build(&points).buffers());
    assert!(line.take_updates().is_empty());
}

#[test]
fn pick_a_built_line() {
    let points = [
        point(0.0, 0.0, 0.0),
        point(1.0, 0.0, 0.0),
        point(1.0, 1.0, 0.0),
    ];
    let line = build(&points);
    let material = LineMaterial::new().with_line_width(0.2);

    let pick = |origin: Point| {
        let raycaster = Raycaster::new(Ray::new(origin, vector(0.0, 0.0, -1.0)))
            .with_line_threshold(0.05);
        raycast_line(
            &raycaster,
            line.buffers(),
            material.line_width,
            &Transform::identity(),
            Topology::Strip,
        )
    };

    let hit = pick(point(0.5, 0.1, 3.0)).unwrap();
    assert_eq!(hit.index, 1);
    assert!((hit.distance - 3.0).abs() < 1e-5);
    assert!((hit.point - point(0.5, 0.0, 0.0)).length() < 1e-5);

    // Close to the second segment only.
    let hit = pick(point(0.95, 0.5, 3.0)).unwrap();
    assert!((hit.point - point(1.0, 0.5, 0.0)).length() < 1e-5);

    assert!(pick(point(0.5, 0.5, 3.0)).is_none());
}

#[test]
fn material_uniforms() {
    let material = LineMaterial::new()
        .with_line_width(4.0)
        .with_dash_array(0.1);

    assert_eq!(material.value(Uniform::LineWidth), UniformValue::Float(4.0));
    assert_eq!(material.value(Uniform::UseDash), UniformValue::Float(1.0));

    let uniforms = material.uniforms();
    assert_eq!(uniforms.line_width, 4.0);
    assert_eq!(uniforms.dash_array, 0.1);
    assert_eq!(uniforms.use_dash, 1.0);
}

#[test]
fn visibility_cutoff_includes_the_boundary_point() {
    let line = build(&helix(6));
    let counters = line.buffers().counters();
    let material = LineMaterial::new().with_visibility(5.0 / 6.0);

    // The last pair sits exactly on the cutoff and stays visible.
    assert_eq!(visibility_alpha(counters[10], material.visibility), 1.0);
    assert_eq!(visibility_alpha(counters[11], material.visibility), 1.0);

    let material = LineMaterial::new().with_visibility(4.0 / 6.0);
    assert_eq!(visibility_alpha(counters[10], material.visibility), 0.0);
    assert_eq!(visibility_alpha(counters[8], material.visibility), 1.0);
}

#[test]
fn serialize_buffers() {
    let line = build(&helix(4));
    let json = serde_json::to_string(line.buffers()).unwrap();
    let buffers: LineBuffers = serde_json::from_str(&json).unwrap();

    assert_same_buffers(&buffers, line.buffers());
}
