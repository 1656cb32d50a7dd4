use clap::{Parser, ValueEnum};
use log::LevelFilter;
use nalgebra::Vector2;

use crate::{grid::Grid, Error, EPSILON};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gridcast")]
#[command(about = "Trace a ray across a 2D grid, one cell edge at a time")]
pub struct Args {
    /// Number of grid columns
    #[arg(long, default_value_t = 16)]
    pub grid_width: u32,

    /// Number of grid rows
    #[arg(long, default_value_t = 16)]
    pub grid_height: u32,

    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Ray origin x in grid units (defaults to the grid centre)
    #[arg(long)]
    pub origin_x: Option<f64>,

    /// Ray origin y in grid units (defaults to the grid centre)
    #[arg(long)]
    pub origin_y: Option<f64>,

    /// Nudge applied before snapping to a grid line
    #[arg(long, default_value_t = EPSILON)]
    pub epsilon: f64,

    /// Print the bounces towards grid point X Y and exit without a window
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub trace: Option<Vec<f64>>,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn validate(&self) -> Result<(), Error> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(Error::InvalidLayout(format!(
                "grid must have at least one cell, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidLayout(format!(
                "window must have at least one pixel, got {}x{}",
                self.width, self.height
            )));
        }
        let origin = self.origin();
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(Error::InvalidLayout(format!(
                "origin must be finite, got {}, {}",
                origin.x, origin.y
            )));
        }
        if let Some(target) = self.trace_target() {
            if !(target.x.is_finite() && target.y.is_finite()) {
                return Err(Error::InvalidLayout(format!(
                    "trace target must be finite, got {}, {}",
                    target.x, target.y
                )));
            }
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(Error::InvalidLayout(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn origin(&self) -> Vector2<f64> {
        let center = self.grid().center();
        Vector2::new(
            self.origin_x.unwrap_or(center.x),
            self.origin_y.unwrap_or(center.y),
        )
    }

    pub fn trace_target(&self) -> Option<Vector2<f64>> {
        match self.trace.as_deref() {
            Some(&[x, y]) => Some(Vector2::new(x, y)),
            _ => None,
        }
    }
}
