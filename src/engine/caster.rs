//! Ray ↔ grid intersection (DDA traversal).
//!
//! One call walks a single ray, cell by cell, from a continuous origin
//! until it either enters an opaque cell or leaves the map.  Two distance
//! accumulators – one per axis – always hold "how far along the ray until
//! the next grid line on that axis"; each iteration advances whichever is
//! smaller.  The whole frame is W of these calls, one per screen column.

use glam::Vec2;
use thiserror::Error;

use crate::world::Grid;

/// Stand-in traversal distance for an axis the ray never crosses
/// (direction component exactly zero).
const AXIS_NEVER: f32 = 9999.0;

/// Errors raised by [`cast_ray`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CastError {
    /// The direction was the zero vector – a precondition violation.
    #[error("ray direction must not be the zero vector")]
    InvalidDirection,
}

/// Which grid-line axis was crossed last before the hit.
///
/// Determines the texture-coordinate formula and lets renderers shade the
/// two wall orientations differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// A vertical grid line (constant x) was crossed last.
    X,
    /// A horizontal grid line (constant y) was crossed last.
    Y,
}

/// Outcome of one cast.  Recomputed every column, every frame – the
/// camera moves, so nothing is worth caching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RayHit {
    Hit {
        /// Distance travelled along the ray to the struck face.
        distance: f32,
        /// Label of the wall cell that was entered.
        label: u8,
        side: Side,
        /// Offset along the struck face, **not** yet reduced mod 1 –
        /// downstream texture sampling wraps, so callers normalize.
        tex_u: f32,
    },
    /// The ray left the map without touching a wall.
    Miss,
}

/// Walk `dir` from `origin` through `grid` and report the first opaque
/// cell entered.
///
/// `dir` should be unit length; the reported distance is in multiples of
/// its length.  A ray that *starts* inside a wall does not report that
/// cell – traversal only tests newly entered cells, so such a ray sails
/// through its containing wall.  Long-standing quirk, kept as-is.
///
/// Terminates without a range cutoff: every iteration moves exactly one
/// cell monotonically along one axis, so the loop runs at most
/// `width + height + 2` times before leaving the map.
pub fn cast_ray(grid: &Grid, origin: Vec2, dir: Vec2) -> Result<RayHit, CastError> {
    if dir.x == 0.0 && dir.y == 0.0 {
        return Err(CastError::InvalidDirection);
    }

    let mut cell_x = origin.x.floor() as i32;
    let mut cell_y = origin.y.floor() as i32;

    // per-axis distance along the ray between two grid lines
    let step_x = if dir.x == 0.0 {
        AXIS_NEVER
    } else {
        (1.0 / dir.x).abs()
    };
    let step_y = if dir.y == 0.0 {
        AXIS_NEVER
    } else {
        (1.0 / dir.y).abs()
    };

    // distance to the *first* grid line on each axis, and which way the
    // cell index moves when that axis advances
    let (sign_x, mut accum_x) = if dir.x < 0.0 {
        (-1, (origin.x - cell_x as f32) * step_x)
    } else {
        (1, (cell_x as f32 + 1.0 - origin.x) * step_x)
    };
    let (sign_y, mut accum_y) = if dir.y < 0.0 {
        (-1, (origin.y - cell_y as f32) * step_y)
    } else {
        (1, (cell_y as f32 + 1.0 - origin.y) * step_y)
    };

    loop {
        let side = if accum_x < accum_y {
            accum_x += step_x;
            cell_x += sign_x;
            Side::X
        } else {
            accum_y += step_y;
            cell_y += sign_y;
            Side::Y
        };

        let Some(label) = grid.get(cell_x, cell_y) else {
            return Ok(RayHit::Miss); // left the map
        };
        if !Grid::is_opaque(label) {
            continue;
        }

        // the accumulator has already advanced past the face we struck
        let distance = match side {
            Side::X => accum_x - step_x,
            Side::Y => accum_y - step_y,
        };

        // exact strike point via the perpendicular-distance form, then
        // take the non-advancing coordinate as the texture offset
        let tex_u = match side {
            Side::X => {
                let perp = (cell_x as f32 - origin.x + (1 - sign_x) as f32 * 0.5) / dir.x;
                origin.y + perp * dir.y
            }
            Side::Y => {
                let perp = (cell_y as f32 - origin.y + (1 - sign_y) as f32 * 0.5) / dir.y;
                origin.x + perp * dir.x
            }
        };

        return Ok(RayHit::Hit {
            distance,
            label,
            side,
            tex_u,
        });
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
