use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One directed edge of a polygon boundary.
///
/// A polygon is an ordered list of walls where each wall's `end` is the next wall's `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
}

impl Wall {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Whether both walls connect the same two points, in either direction.
    pub fn same(&self, other: &Wall, tolerance: f32) -> bool {
        let forward =
            self.start.approx_eq(other.start, tolerance) && self.end.approx_eq(other.end, tolerance);
        forward
            || (self.start.approx_eq(other.end, tolerance)
                && self.end.approx_eq(other.start, tolerance))
    }
}

/// Close a vertex ring into walls: `points[i] -> points[i + 1]`, last back to first.
pub fn walls_from_points(points: &[Vec2]) -> Vec<Wall> {
    let n = points.len();
    (0..n)
        .map(|i| Wall::new(points[i], points[(i + 1) % n]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_ignores_direction() {
        let a = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        assert!(a.same(&a.reversed(), 1e-4));
        assert!(a.same(&Wall::new(Vec2::new(0.0, 0.00001), Vec2::new(1.0, 1.0)), 1e-4));
        assert!(!a.same(&Wall::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0)), 1e-4));
    }

    #[test]
    fn points_close_into_a_loop() {
        let walls = walls_from_points(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ]);
        assert_eq!(walls.len(), 3);
        assert_eq!(walls[2].end, walls[0].start);
        assert_eq!(walls[0].midpoint(), Vec2::new(0.5, 0.0));
    }
}
