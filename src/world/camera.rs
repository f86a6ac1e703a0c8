use glam::Vec2;

/// Player view-point in grid space.
///
/// * Position is continuous; one grid unit = one map cell.
/// * Only **yaw** (heading) exists – the view never tilts up/down.
#[derive(Clone, Copy, Debug)]
pub struct Pose {
    pub pos: Vec2, // grid units
    pub yaw: f32,  // radians (0 = +X, counter-clockwise)
}

impl Pose {
    pub fn new(pos: Vec2, yaw: f32) -> Self {
        Self { pos, yaw }
    }

    /// Unit vector pointing where the player looks.
    #[inline(always)]
    pub fn forward(&self) -> Vec2 {
        let (s, c) = self.yaw.sin_cos();
        Vec2::new(c, s)
    }

    /// Unit vector pointing to the player's right.
    #[inline(always)]
    pub fn right(&self) -> Vec2 {
        // (x, y) -> (y, -x)
        -self.forward().perp()
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Move by `forward` units and `side` (strafe).
    pub fn step(&mut self, forward: f32, side: f32) {
        let f = self.forward();
        let r = self.right();
        self.pos += f * forward + r * side;
    }

    /// Rotate around the vertical axis (positive = turn left).
    pub fn turn(&mut self, delta_yaw: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(std::f32::consts::TAU);
    }
}

/// Horizontal projection parameters, kept apart from [`Pose`] so the
/// caster and projector only see the data they need.
#[derive(Clone, Copy, Debug)]
pub struct Lens {
    pub hfov: f32, // horizontal FoV, radians
}

impl Lens {
    pub fn new(hfov: f32) -> Self {
        Self { hfov }
    }

    /// Camera-plane vector: perpendicular to `forward`, scaled by
    /// `tan(hfov / 2)`.  Column rays fan out as
    /// `forward + plane * camera_x` with `camera_x` in `[-1, 1)`.
    #[inline]
    pub fn plane(&self, forward: Vec2) -> Vec2 {
        forward.perp() * (self.hfov * 0.5).tan()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn forward_and_right_are_orthonormal() {
        let pose = Pose::new(Vec2::ZERO, 0.3);
        let f = pose.forward();
        let r = pose.right();
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
    }

    #[test]
    fn plane_length_matches_fov() {
        let pose = Pose::new(Vec2::ZERO, 0.0);
        let lens = Lens::new(FRAC_PI_2);
        let p = lens.plane(pose.forward());
        // tan(45°) = 1
        assert!((p.length() - 1.0).abs() < 1e-5);
        assert!(p.dot(pose.forward()).abs() < 1e-5);
    }

    #[test]
    fn step_moves_along_heading() {
        let mut pose = Pose::new(vec2(1.0, 1.0), 0.0);
        pose.step(2.0, 0.0);
        assert!((pose.pos - vec2(3.0, 1.0)).length() < 1e-5);
        pose.step(0.0, 1.0);
        assert!((pose.pos - vec2(3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn turn_wraps_yaw() {
        let mut pose = Pose::new(Vec2::ZERO, 0.1);
        pose.turn(std::f32::consts::TAU);
        assert!((pose.yaw - 0.1).abs() < 1e-5);
    }
}
