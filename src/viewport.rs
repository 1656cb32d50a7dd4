use nalgebra::Vector2;

use crate::grid::Grid;

/// Maps grid space onto a drawing surface of `surface` pixels. The whole grid
/// stretches to fill the surface, so the scale may differ per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    layout: Vector2<f64>,
    surface: Vector2<f64>,
    pixels_per_unit: Vector2<f64>,
}

impl Viewport {
    pub fn new(grid: Grid, surface_width: u32, surface_height: u32) -> Self {
        let layout = grid.layout();
        let surface = Vector2::new(surface_width as f64, surface_height as f64);
        Self {
            layout,
            surface,
            pixels_per_unit: surface.component_div(&layout),
        }
    }

    pub fn scale(&self) -> Vector2<f64> {
        self.pixels_per_unit
    }

    /// Pointer position in pixels to grid space.
    pub fn to_grid(&self, pixel: Vector2<f64>) -> Vector2<f64> {
        pixel.component_mul(&self.layout).component_div(&self.surface)
    }

    pub fn to_pixels(&self, point: Vector2<f64>) -> Vector2<f64> {
        point.component_mul(&self.pixels_per_unit)
    }

    /// A length in grid units as pixels. Uses the mean of both axis scales.
    pub fn length_to_pixels(&self, length: f64) -> f64 {
        length * 0.5 * (self.pixels_per_unit.x + self.pixels_per_unit.y)
    }
}
