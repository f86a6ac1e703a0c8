//! Wolfenstein-style grid raycaster.
//!
//! The interesting part is small: a DDA ray walk over an immutable cell
//! grid ([`engine::cast_ray`]) plus per-column projection math
//! ([`engine::Projection`]) that turns hit distances into screen-space
//! wall slices.  Everything else – windowing, input, actual pixels – is
//! a caller of those two.
//!
//! ```
//! use glam::vec2;
//! use raywolf_rs::{
//!     engine::{Column, Projection},
//!     world::{Grid, Lens, Pose},
//! };
//!
//! let grid = Grid::parse("11111\n1   1\n1   1\n1   1\n11111\n").unwrap();
//! let pose = Pose::new(vec2(2.5, 2.5), 0.0);
//! let lens = Lens::new(std::f32::consts::FRAC_PI_2);
//!
//! let mut columns = vec![Column::EMPTY; 320];
//! Projection::default()
//!     .cast_columns(&pose, &lens, &grid, &mut columns)
//!     .unwrap();
//! assert!(columns.iter().all(|c| c.label == 1));
//! ```

pub mod engine;
pub mod renderer;
pub mod world;
