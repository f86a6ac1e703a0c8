mod camera;
mod grid;
mod mapgen;

pub use camera::{Lens, Pose};
pub use mapgen::MapGen;
pub use grid::{Grid, GridError};
