use nalgebra::Vector2;
use rayon::prelude::*;

pub trait Rgba32 {
    fn to_rgba32(&self) -> (u8, u8, u8, u8);
    fn from_rgba32(rgba: (u8, u8, u8, u8)) -> Self;
}

impl Rgba32 for sdl2::pixels::Color {
    fn to_rgba32(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    fn from_rgba32((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::RGBA(r, g, b, a)
    }
}

impl Rgba32 for [u8; 4] {
    fn to_rgba32(&self) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = *self;
        (r, g, b, a)
    }

    fn from_rgba32((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        [r, g, b, a]
    }
}

/// RGBA32 pixels, row-major, ready to be copied into a streaming texture.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Box<[u8]>,
}

/// Half-open pixel range `[x0, x1) x [y0, y1)` already clipped to the buffer.
#[derive(Clone, Copy, Debug)]
struct Span {
    x0: usize,
    x1: usize,
    y0: usize,
    y1: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixel_data: vec![0; width * height * 4].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.width * 4
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn set_pixel<T: Rgba32>(&mut self, x: usize, y: usize, color: T) {
        let start = (x + y * self.width) * 4;
        let stop = start + 4;
        let (r, g, b, a) = color.to_rgba32();
        let bytes = [r, g, b, a];
        self.pixel_data[start..stop].copy_from_slice(bytes.as_slice());
    }

    pub fn get_pixel<T: Rgba32>(&self, x: usize, y: usize) -> T {
        let start = (x + y * self.width) * 4;
        let p = &self.pixel_data[start..start + 4];
        T::from_rgba32((p[0], p[1], p[2], p[3]))
    }

    pub fn clear<T: Rgba32>(&mut self, color: T) {
        let size = Vector2::new(self.width as f64, self.height as f64);
        self.fill_rect(Vector2::zeros(), size, color);
    }

    /// Fills every pixel whose centre lies inside `[min, max)`.
    pub fn fill_rect<T: Rgba32>(&mut self, min: Vector2<f64>, max: Vector2<f64>, color: T) {
        let Some(span) = self.clip(min, max) else {
            return;
        };
        self.shade(span, &color, |p| p.x < max.x && p.y < max.y);
    }

    /// Axis-aligned ellipse; a circle in grid space becomes one of these
    /// whenever the viewport scale differs per axis.
    pub fn fill_ellipse<T: Rgba32>(
        &mut self,
        center: Vector2<f64>,
        radii: Vector2<f64>,
        color: T,
    ) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }
        let Some(span) = self.clip(center - radii, center + radii) else {
            return;
        };
        self.shade(span, &color, |p| (p - center).component_div(&radii).norm_squared() <= 1.0);
    }

    /// Segment from `begin` to `end`. Lines thinner than a pixel are drawn
    /// one pixel wide.
    pub fn stroke_line<T: Rgba32>(
        &mut self,
        begin: Vector2<f64>,
        end: Vector2<f64>,
        width: f64,
        color: T,
    ) {
        let half = (width * 0.5).max(0.5);
        let pad = Vector2::repeat(half);
        let min = begin.inf(&end) - pad;
        let max = begin.sup(&end) + pad;
        let Some(span) = self.clip(min, max) else {
            return;
        };
        self.shade(span, &color, |p| distance_to_segment(p, begin, end) <= half);
    }

    fn clip(&self, min: Vector2<f64>, max: Vector2<f64>) -> Option<Span> {
        let clamp = |v: f64, limit: usize| {
            if v.is_nan() || v <= 0.0 {
                0
            } else {
                (v as usize).min(limit)
            }
        };
        // Pixel `i` is kept when its centre `i + 0.5` lies in `[min, max]`;
        // callers trim the upper edge themselves if they need it open.
        let span = Span {
            x0: clamp((min.x - 0.5).ceil(), self.width),
            x1: clamp((max.x - 0.5).floor() + 1.0, self.width),
            y0: clamp((min.y - 0.5).ceil(), self.height),
            y1: clamp((max.y - 0.5).floor() + 1.0, self.height),
        };
        (span.x0 < span.x1 && span.y0 < span.y1).then_some(span)
    }

    /// Writes `color` to every pixel of `span` whose centre passes `inside`.
    /// Rows are independent, so they are shaded in parallel.
    fn shade<T, F>(&mut self, span: Span, color: &T, inside: F)
    where
        T: Rgba32,
        F: Fn(Vector2<f64>) -> bool + Sync,
    {
        let (r, g, b, a) = color.to_rgba32();
        let bytes = [r, g, b, a];
        let pitch = self.pitch();
        self.pixel_data[span.y0 * pitch..span.y1 * pitch]
            .par_chunks_mut(pitch)
            .enumerate()
            .for_each(|(row_index, row)| {
                let y = (span.y0 + row_index) as f64 + 0.5;
                for x in span.x0..span.x1 {
                    if inside(Vector2::new(x as f64 + 0.5, y)) {
                        row[x * 4..x * 4 + 4].copy_from_slice(&bytes);
                    }
                }
            });
    }
}

fn distance_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let length_squared = ab.norm_squared();
    if length_squared == 0.0 {
        return p.metric_distance(&a);
    }
    let t = ((p - a).dot(&ab) / length_squared).clamp(0.0, 1.0);
    p.metric_distance(&(a + t * ab))
}
