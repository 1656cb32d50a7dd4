use crate::{
    grid::{Cell, Grid},
    ray::Ray,
};

/// One segment of the traced path along with the cell its target lies in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounce {
    pub ray: Ray,
    pub cell: Cell,
    /// The cell is outside the grid; this is the last bounce.
    pub exited: bool,
    /// The segment could not advance (zero-length ray); this is the last bounce.
    pub stalled: bool,
}

/// Follows a ray from cell edge to cell edge until it leaves the grid.
///
/// Every segment is yielded, including the one that leaves the grid, so a
/// caller drawing the bounces also draws the ray's exit.
#[derive(Clone, Debug)]
pub struct Trace {
    grid: Grid,
    epsilon: f64,
    next: Option<Ray>,
}

impl Trace {
    pub fn new(grid: Grid, ray: Ray, epsilon: f64) -> Self {
        Self {
            grid,
            epsilon,
            next: Some(ray),
        }
    }
}

impl Iterator for Trace {
    type Item = Bounce;

    fn next(&mut self) -> Option<Self::Item> {
        let ray = self.next.take()?;
        let cell = ray.cell(self.epsilon);

        if !self.grid.contains(cell) {
            log::trace!("ray left the grid through cell {}, {}", cell.x, cell.y);
            return Some(Bounce {
                ray,
                cell,
                exited: true,
                stalled: false,
            });
        }

        let crossing = ray.crossing(self.epsilon);
        // NaN never compares equal, so a non-finite crossing also counts.
        let stalled = crossing == ray.target || !crossing.iter().all(|v| v.is_finite());
        if stalled {
            log::debug!(
                "ray from {}, {} makes no progress, stopping",
                ray.origin.x,
                ray.origin.y
            );
        } else {
            log::trace!("crossing at {:.4}, {:.4}", crossing.x, crossing.y);
            self.next = Some(ray.advance(crossing));
        }

        Some(Bounce {
            ray,
            cell,
            exited: false,
            stalled,
        })
    }
}
