//! Collision primitives shared by the demos.
//!
//! All routines are total over finite inputs: degenerate geometry
//! (coincident points, collapsed triangles, zero-length edges) is reported
//! as "no collision" instead of dividing by a near-zero quantity.

use glam::Vec2;
use std::f32::consts::PI;

/// Distances below this are treated as coincident
pub const DISTANCE_EPSILON: f32 = 1e-6;

/// Barycentric denominators below this mark a degenerate triangle
pub const TRIANGLE_EPSILON: f32 = 1e-4;

/// Two circles overlap when their centers are closer than the sum of radii
pub fn circle_overlap(p1: Vec2, r1: f32, p2: Vec2, r2: f32) -> bool {
    p1.distance_squared(p2) < (r1 + r2) * (r1 + r2)
}

/// Unit vector from `from` to `to`, or `None` when the points coincide
pub fn contact_normal(from: Vec2, to: Vec2) -> Option<(Vec2, f32)> {
    let delta = to - from;
    let dist = delta.length();
    if dist < DISTANCE_EPSILON {
        return None;
    }
    Some((delta / dist, dist))
}

/// Barycentric point-in-triangle test.
///
/// The point counts as inside when every weight is at least `-tolerance`,
/// so a positive tolerance grows the triangle slightly past its edges.
pub fn point_in_triangle(p: Vec2, v1: Vec2, v2: Vec2, v3: Vec2, tolerance: f32) -> bool {
    let denom = (v2.y - v3.y) * (v1.x - v3.x) + (v3.x - v2.x) * (v1.y - v3.y);
    if denom.abs() < TRIANGLE_EPSILON {
        return false;
    }

    let w1 = ((v2.y - v3.y) * (p.x - v3.x) + (v3.x - v2.x) * (p.y - v3.y)) / denom;
    let w2 = ((v3.y - v1.y) * (p.x - v3.x) + (v1.x - v3.x) * (p.y - v3.y)) / denom;
    let w3 = 1.0 - w1 - w2;

    w1 >= -tolerance && w2 >= -tolerance && w3 >= -tolerance
}

/// Minimum perpendicular distance from `p` to the triangle's edges.
///
/// An edge only counts when the projection of `p` onto it falls within
/// `[-margin, length + margin]`. Returns `f32::INFINITY` when no edge
/// qualifies.
pub fn distance_to_triangle_edges(p: Vec2, v1: Vec2, v2: Vec2, v3: Vec2, margin: f32) -> f32 {
    [(v1, v2), (v2, v3), (v3, v1)]
        .iter()
        .filter_map(|&(a, b)| distance_to_edge(p, a, b, margin))
        .fold(f32::INFINITY, f32::min)
}

fn distance_to_edge(p: Vec2, a: Vec2, b: Vec2, margin: f32) -> Option<f32> {
    let edge = b - a;
    let length = edge.length();
    if length < DISTANCE_EPSILON {
        return None;
    }

    let dir = edge / length;
    let along = (p - a).dot(dir);
    if along < -margin || along > length + margin {
        return None;
    }

    Some((p - a).perp_dot(dir).abs())
}

/// Vertices of an equilateral triangle inscribed in a circle of
/// `circumradius`, apex pointing into the oncoming (left-to-right) flow
pub fn triangle_vertices(center: Vec2, circumradius: f32) -> [Vec2; 3] {
    let vertex = |angle: f32| center + Vec2::new(angle.cos(), angle.sin()) * circumradius;
    [vertex(PI), vertex(PI / 3.0), vertex(-PI / 3.0)]
}

/// Triangle obstacle test for a particle of the given radius
pub fn check_triangle_collision(p: Vec2, radius: f32, vertices: &[Vec2; 3], tolerance: f32) -> bool {
    let [v1, v2, v3] = *vertices;
    point_in_triangle(p, v1, v2, v3, tolerance)
        || distance_to_triangle_edges(p, v1, v2, v3, radius) <= radius
}

/// NACA 00xx half thickness at chord fraction `xc`.
///
/// `max_thickness` is the thickness as a fraction of the chord (0.12 for a
/// NACA 0012). The result is in world units.
pub fn airfoil_half_thickness(xc: f32, chord: f32, max_thickness: f32) -> f32 {
    let x = xc.clamp(0.0, 1.0);
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    5.0 * max_thickness
        * chord
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x2 + 0.2843 * x3 - 0.1015 * x4)
}

/// Airfoil obstacle test: the chord lies on the x axis through `center`,
/// leading edge upstream.
pub fn check_airfoil_collision(
    p: Vec2,
    radius: f32,
    center: Vec2,
    chord: f32,
    max_thickness: f32,
) -> bool {
    if chord <= 0.0 {
        return false;
    }

    let leading_edge = center.x - chord * 0.5;
    let xc = (p.x - leading_edge) / chord;
    if !(0.0..=1.0).contains(&xc) {
        return false;
    }

    (p.y - center.y).abs() <= airfoil_half_thickness(xc, chord, max_thickness) + radius
}
