pub mod caster;
pub mod projection;

pub use caster::{CastError, RayHit, Side, cast_ray};
pub use projection::{Column, Projection, forward_probe};
