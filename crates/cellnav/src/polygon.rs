//! Polygon helpers over closed wall loops.
//!
//! Vertex `i` of a loop is `walls[i].start`. Loops are expected to wind counter-clockwise
//! (positive signed area); the builder normalises its input to that convention.

use crate::{Vec2, Wall};

pub fn vertex(walls: &[Wall], i: usize) -> Vec2 {
    walls[i % walls.len()].start
}

pub fn prev_index(n: usize, i: usize) -> usize {
    (i + n - 1) % n
}

pub fn next_index(n: usize, i: usize) -> usize {
    (i + 1) % n
}

/// Shoelace area; positive for counter-clockwise loops.
pub fn signed_area(walls: &[Wall]) -> f32 {
    walls
        .iter()
        .map(|w| w.start.cross(w.end))
        .sum::<f32>()
        * 0.5
}

pub fn area(walls: &[Wall]) -> f32 {
    signed_area(walls).abs()
}

/// Average of the loop's vertices.
pub fn vertex_center(walls: &[Wall]) -> Vec2 {
    if walls.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for w in walls {
        sum += w.start;
    }
    sum / walls.len() as f32
}

fn orient(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).cross(c - a)
}

/// Turn at vertex `b` coming from `a` and leaving towards `c`; negative means a right turn.
fn turn(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).cross(c - b)
}

/// Whether vertex `i` turns right by more than `tolerance`, measured as the sine of the turn.
///
/// Vertices that are collinear up to rounding count as convex.
pub fn is_reflex(walls: &[Wall], i: usize, tolerance: f32) -> bool {
    let n = walls.len();
    let a = vertex(walls, prev_index(n, i));
    let b = vertex(walls, i);
    let c = vertex(walls, next_index(n, i));
    let scale = a.distance(b) * b.distance(c);
    if scale <= f32::EPSILON {
        return false;
    }
    turn(a, b, c) / scale < -tolerance
}

/// Index of the first reflex vertex in vertex order, if any.
pub fn first_reflex_vertex(walls: &[Wall], tolerance: f32) -> Option<usize> {
    (0..walls.len()).find(|&i| is_reflex(walls, i, tolerance))
}

pub fn is_convex(walls: &[Wall], tolerance: f32) -> bool {
    first_reflex_vertex(walls, tolerance).is_none()
}

/// Proper crossing of segments `ab` and `cd`. Touching at a shared endpoint is not a crossing.
pub(crate) fn segments_cross(a: Vec2, b: Vec2, c: Vec2, d: Vec2, tolerance: f32) -> bool {
    if a.approx_eq(c, tolerance)
        || a.approx_eq(d, tolerance)
        || b.approx_eq(c, tolerance)
        || b.approx_eq(d, tolerance)
    {
        return false;
    }

    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Whether `p` lies on the open segment `ab` (endpoints excluded).
pub(crate) fn point_on_open_segment(p: Vec2, a: Vec2, b: Vec2, tolerance: f32) -> bool {
    if p.approx_eq(a, tolerance) || p.approx_eq(b, tolerance) {
        return false;
    }
    let ab = b - a;
    let len = ab.length();
    if len <= f32::EPSILON {
        return false;
    }
    if (ab.cross(p - a) / len).abs() > tolerance {
        return false;
    }
    let t = (p - a).dot(ab) / (len * len);
    t > 0.0 && t < 1.0
}

/// Whether the direction from vertex `i` towards `target` points into the loop's interior.
pub(crate) fn in_cone(walls: &[Wall], i: usize, target: Vec2) -> bool {
    let n = walls.len();
    let prev = vertex(walls, prev_index(n, i));
    let here = vertex(walls, i);
    let next = vertex(walls, next_index(n, i));

    if orient(here, next, prev) >= 0.0 {
        // Convex corner: target strictly between the two edges.
        orient(here, target, prev) > 0.0 && orient(target, here, next) > 0.0
    } else {
        // Reflex corner: anything not inside the exterior wedge.
        !(orient(here, target, next) >= 0.0 && orient(target, here, prev) >= 0.0)
    }
}
