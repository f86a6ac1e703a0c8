//! Per-column projection: fan one ray per screen column, cast it, and
//! turn the hit distance into a screen-space wall slice.
//!
//! The output is a flat buffer of [`Column`]s, one per screen column,
//! overwritten in place every frame and handed read-only to whatever
//! renderer draws it.  Nothing is cached between frames – the camera
//! moves, so every cached hit would be stale.

use crate::{
    engine::caster::{CastError, RayHit, Side, cast_ray},
    world::{Grid, Lens, Pose},
};

/// Render attributes for one screen column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    /// Fisheye-corrected distance (ray length projected onto forward).
    pub dist: f32,
    /// Projected wall half-height, in half-screen units
    /// (1.0 = wall slice spans the full frame height).
    pub half_height: f32,
    /// Wall label of the struck cell, 0 on a miss.
    pub label: u8,
    /// Crossed-axis flag of the hit; misses report [`Side::X`].
    pub side: Side,
    /// Texture offset along the struck face, normalized to `[0, 1)`.
    pub tex_u: f32,
}

impl Column {
    /// Placeholder value for pre-sizing a column buffer.
    pub const EMPTY: Column = Column {
        dist: 0.0,
        half_height: 0.0,
        label: 0,
        side: Side::X,
        tex_u: 0.0,
    };
}

/// Projection policy: slab height and the explicit miss fallback.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    /// Wall slab height relative to distance-1.0 (the classic reciprocal
    /// form: `half_height = wall_height / corrected_dist`).
    pub wall_height: f32,
    /// Distance substituted when a ray leaves the map.  Miss columns get
    /// this distance, zero height and label 0 instead of garbage.
    pub far_clip: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            wall_height: 0.8,
            far_clip: 100.0,
        }
    }
}

impl Projection {
    /// Cast one ray per column of `out` and overwrite it with the
    /// resulting slices.
    ///
    /// Column `i` maps to `camera_x = 2i/n − 1 ∈ [-1, 1)`; its ray is
    /// `normalize(forward + plane · camera_x)`.  Exactly one cast per
    /// column per frame.
    pub fn cast_columns(
        &self,
        pose: &Pose,
        lens: &Lens,
        grid: &Grid,
        out: &mut [Column],
    ) -> Result<(), CastError> {
        let forward = pose.forward();
        let plane = lens.plane(forward);
        let n = out.len();

        for (i, col) in out.iter_mut().enumerate() {
            let camera_x = 2.0 * i as f32 / n as f32 - 1.0;
            let ray = (forward + plane * camera_x).normalize();

            *col = match cast_ray(grid, pose.pos, ray)? {
                RayHit::Hit {
                    distance,
                    label,
                    side,
                    tex_u,
                } => {
                    // project the ray length onto the forward axis so
                    // equal wall distances give equal heights across the
                    // whole screen
                    let corrected = ray.dot(forward) * distance;
                    Column {
                        dist: corrected,
                        half_height: self.wall_height / corrected.max(f32::EPSILON),
                        label,
                        side,
                        tex_u: tex_u.rem_euclid(1.0),
                    }
                }
                RayHit::Miss => Column {
                    dist: self.far_clip,
                    half_height: 0.0,
                    label: 0,
                    side: Side::X,
                    tex_u: 0.0,
                },
            };
        }
        Ok(())
    }
}

/// Straight-ahead probe: the centre-screen ray with no plane offset.
/// Same caster, no projection – handy for hitscan-style queries.
pub fn forward_probe(pose: &Pose, grid: &Grid) -> Result<RayHit, CastError> {
    cast_ray(grid, pose.pos, pose.forward())
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
