use nalgebra::Vector2;
use sdl2::pixels::Color;

use crate::{frame::FrameBuffer, grid::Grid, ray::Ray, trace::Trace, viewport::Viewport};

pub const BACKGROUND: Color = Color::RGB(0x30, 0x30, 0x30);
pub const GRID_LINE: Color = Color::RGB(0x80, 0x80, 0x80);
pub const ORIGIN: Color = Color::RGB(0xff, 0x00, 0xff);
pub const RAY: Color = Color::RGB(0xff, 0x00, 0x00);

/// Sizes in grid units.
const MARKER_RADIUS: f64 = 0.1;
const LINE_WIDTH: f64 = 0.02;

/// A grid plus the fixed point every ray starts from.
#[derive(Clone, Copy, Debug)]
pub struct Scene {
    pub grid: Grid,
    pub origin: Vector2<f64>,
    pub epsilon: f64,
}

impl Scene {
    pub fn new(grid: Grid, origin: Vector2<f64>, epsilon: f64) -> Self {
        Self {
            grid,
            origin,
            epsilon,
        }
    }

    /// The ray from the origin through `target`, traced across the grid.
    pub fn trace(&self, target: Vector2<f64>) -> Trace {
        Trace::new(self.grid, Ray::new(self.origin, target), self.epsilon)
    }

    /// Redraws the whole frame. Without a cursor only the grid and the origin
    /// are drawn. Returns how many bounces were drawn.
    pub fn render(
        &self,
        frame: &mut FrameBuffer,
        viewport: &Viewport,
        cursor: Option<Vector2<f64>>,
    ) -> usize {
        frame.clear(BACKGROUND);
        self.draw_grid(frame, viewport);
        fill_circle(frame, viewport, self.origin, ORIGIN);

        let Some(cursor) = cursor else {
            return 0;
        };

        let mut bounces = 0;
        for bounce in self.trace(cursor) {
            fill_circle(frame, viewport, bounce.ray.target, RAY);
            stroke_line(frame, viewport, bounce.ray.origin, bounce.ray.target, RAY);
            bounces += 1;
        }
        log::debug!("traced {bounces} bounces towards {:.3}, {:.3}", cursor.x, cursor.y);
        bounces
    }

    fn draw_grid(&self, frame: &mut FrameBuffer, viewport: &Viewport) {
        for (begin, end) in self
            .grid
            .vertical_lines()
            .chain(self.grid.horizontal_lines())
        {
            stroke_line(frame, viewport, begin, end, GRID_LINE);
        }
    }
}

fn fill_circle(frame: &mut FrameBuffer, viewport: &Viewport, center: Vector2<f64>, color: Color) {
    frame.fill_ellipse(
        viewport.to_pixels(center),
        viewport.scale() * MARKER_RADIUS,
        color,
    );
}

fn stroke_line(
    frame: &mut FrameBuffer,
    viewport: &Viewport,
    begin: Vector2<f64>,
    end: Vector2<f64>,
    color: Color,
) {
    frame.stroke_line(
        viewport.to_pixels(begin),
        viewport.to_pixels(end),
        viewport.length_to_pixels(LINE_WIDTH),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::EPSILON;

    fn setup() -> (Scene, Viewport, FrameBuffer) {
        let grid = Grid::default();
        let scene = Scene::new(grid, grid.center(), EPSILON);
        (scene, Viewport::new(grid, 800, 800), FrameBuffer::new(800, 800))
    }

    #[test]
    fn empty_scene() {
        let (scene, viewport, mut frame) = setup();
        assert_eq!(scene.render(&mut frame, &viewport, None), 0);

        // Cell interior, a grid line, and the origin marker.
        assert_eq!(frame.get_pixel::<Color>(25, 25), BACKGROUND);
        assert_eq!(frame.get_pixel::<Color>(50, 25), GRID_LINE);
        assert_eq!(frame.get_pixel::<Color>(402, 402), ORIGIN);
    }

    #[test]
    fn outer_grid_lines_are_drawn() {
        let (scene, viewport, mut frame) = setup();
        scene.render(&mut frame, &viewport, None);

        for (x, y) in [(0, 25), (25, 0), (799, 25), (25, 799), (0, 0), (799, 799)] {
            assert_eq!(frame.get_pixel::<Color>(x, y), GRID_LINE, "pixel {x}, {y}");
        }
    }

    #[test]
    fn cursor_draws_ray() {
        let (scene, viewport, mut frame) = setup();
        let cursor = viewport.to_grid(Vector2::new(475.0, 425.0));
        let bounces = scene.render(&mut frame, &viewport, Some(cursor));

        assert_eq!(bounces, scene.trace(cursor).count());
        assert!(bounces > 1);
        assert_eq!(frame.get_pixel::<Color>(475, 425), RAY);
        // Further along the same ray, past the cursor.
        assert_eq!(frame.get_pixel::<Color>(625, 475), RAY);
    }
}
