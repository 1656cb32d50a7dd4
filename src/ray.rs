use nalgebra::Vector2;

use crate::grid::{sign, snap_to_grid, Cell};

/// One traced segment, from `origin` towards `target`. The ray itself
/// extends past `target` indefinitely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector2<f64>,
    pub target: Vector2<f64>,
}

impl Ray {
    pub fn new(origin: Vector2<f64>, target: Vector2<f64>) -> Self {
        Self { origin, target }
    }

    pub fn direction(&self) -> Vector2<f64> {
        self.target - self.origin
    }

    pub fn at(&self, t: f64) -> Vector2<f64> {
        self.origin + t * self.direction()
    }

    /// Next grid-line crossing beyond `target`.
    pub fn crossing(&self, epsilon: f64) -> Vector2<f64> {
        collide_with_grid(self.origin, self.target, epsilon)
    }

    pub fn cell(&self, epsilon: f64) -> Cell {
        hit_cell(self.origin, self.target, epsilon)
    }

    /// The segment that follows this one: starts where this one ended.
    pub fn advance(&self, next: Vector2<f64>) -> Self {
        Self::new(self.target, next)
    }
}

/// First grid line crossed by the ray from `begin` through `end`, looking
/// only beyond `end`.
///
/// Both the next vertical and the next horizontal line are candidates; the
/// one closer to `end` is the edge of the current cell the ray leaves through.
pub fn collide_with_grid(begin: Vector2<f64>, end: Vector2<f64>, epsilon: f64) -> Vector2<f64> {
    let d = end - begin;

    if d.x == 0.0 {
        return Vector2::new(end.x, snap_to_grid(end.y, d.y, epsilon));
    }

    let m = d.y / d.x;
    let c = begin.y - m * begin.x;

    let x = snap_to_grid(end.x, d.x, epsilon);
    let mut hit = Vector2::new(x, m * x + c);

    // Horizontal rays never meet a horizontal line.
    if m != 0.0 {
        let y = snap_to_grid(end.y, d.y, epsilon);
        let other = Vector2::new((y - c) / m, y);
        if other.metric_distance(&end) < hit.metric_distance(&end) {
            hit = other;
        }
    }

    hit
}

/// Cell containing `p2`, nudged by `epsilon` along the direction of travel
/// from `p1`.
pub fn hit_cell(p1: Vector2<f64>, p2: Vector2<f64>, epsilon: f64) -> Cell {
    let d = p2 - p1;
    Cell::new(
        (p2.x + sign(d.x) * epsilon).floor() as i64,
        (p2.y + sign(d.y) * epsilon).floor() as i64,
    )
}
