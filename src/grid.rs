use nalgebra::Vector2;

/// Nudge applied before rounding so points sitting on a line are not
/// classified as behind it.
pub const EPSILON: f64 = 1e-3;

pub type Cell = Vector2<i64>;

/// Lattice of unit cells with lines at every integer from 0 to `width`
/// (resp. `height`) inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(16, 16)
    }
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> Vector2<f64> {
        Vector2::new(self.width as f64, self.height as f64)
    }

    pub fn center(&self) -> Vector2<f64> {
        self.layout() * 0.5
    }

    /// Bounds test used by the bounce loop. The upper bound is inclusive, so
    /// the cell just past the last line still counts as inside.
    pub fn contains(&self, cell: Cell) -> bool {
        (0..=self.width as i64).contains(&cell.x) && (0..=self.height as i64).contains(&cell.y)
    }

    /// Vertical lines as (begin, end) pairs, left to right.
    pub fn vertical_lines(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> {
        let height = self.height as f64;
        (0..=self.width).map(move |x| {
            let x = x as f64;
            (Vector2::new(x, 0.0), Vector2::new(x, height))
        })
    }

    /// Horizontal lines as (begin, end) pairs, top to bottom.
    pub fn horizontal_lines(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> {
        let width = self.width as f64;
        (0..=self.height).map(move |y| {
            let y = y as f64;
            (Vector2::new(0.0, y), Vector2::new(width, y))
        })
    }
}

/// Nearest grid line strictly ahead of `coordinate` when travelling with the
/// sign of `delta`. A zero `delta` never crosses a line, so the coordinate
/// comes back unchanged.
pub fn snap_to_grid(coordinate: f64, delta: f64, epsilon: f64) -> f64 {
    if delta > 0.0 {
        (coordinate + epsilon).ceil()
    } else if delta < 0.0 {
        (coordinate - epsilon).floor()
    } else {
        coordinate
    }
}

/// Like `signum`, but zero stays zero.
pub(crate) fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
