//! Shared inputs for the integration tests and benchmarks.

pub extern crate meshline;

use meshline::math::{point, Point};

#[cfg(test)]
mod scenarios;

/// A helix around the z axis, `n` points long.
pub fn helix(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = i as f32 * 0.1;
            point(a.cos(), a.sin(), a * 0.05)
        })
        .collect()
}

/// A closed polygon with `n` distinct points: the first point is repeated at
/// the end.
pub fn closed_polygon(n: usize) -> Vec<Point> {
    let mut points: Vec<Point> = (0..n)
        .map(|i| {
            let a = i as f32 * std::f32::consts::PI * 2.0 / n as f32;
            point(a.cos(), a.sin(), 0.0)
        })
        .collect();
    points.push(points[0]);

    points
}

/// Same points as `points`, as a flat coordinate sequence.
pub fn flatten(points: &[Point]) -> Vec<f32> {
    points.iter().flat_map(|p| vec![p.x, p.y, p.z]).collect()
}
