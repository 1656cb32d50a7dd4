pub mod cli;
pub mod error;
pub mod frame;
pub mod grid;
pub mod logger;
pub mod ray;
pub mod scene;
pub mod trace;
pub mod viewport;

pub use error::Error;
pub use frame::FrameBuffer;
pub use grid::{snap_to_grid, Cell, Grid, EPSILON};
pub use ray::{collide_with_grid, hit_cell, Ray};
pub use scene::Scene;
pub use trace::{Bounce, Trace};
pub use viewport::Viewport;
