//! Torus surface math: rotation, perspective projection and luminance.
//!
//! Everything in this module is pure; the rasterizer decides what to do
//! with the projected samples.

// Torus geometry constants
const TUBE_RADIUS: f32 = 1.0;
const RING_RADIUS: f32 = 2.0;
const CAMERA_DISTANCE: f32 = 5.0;
const THETA_STEP: f32 = 0.014;
const PHI_STEP: f32 = 0.004;
const MIN_Z_DIVISOR: f32 = 0.01;

/// Everything a frame render needs besides the rotation angles.
///
/// Built once at startup from the terminal size; invariants: the tube
/// radius stays below the ring radius and the camera distance exceeds
/// their sum, which keeps depth bounded away from zero.
#[derive(Clone, Copy)]
pub struct RenderContext {
    pub tube_radius: f32,
    pub ring_radius: f32,
    pub camera_distance: f32,
    pub width: usize,
    pub height: usize,
    pub theta_step: f32,
    pub phi_step: f32,
}

impl RenderContext {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tube_radius: TUBE_RADIUS,
            ring_radius: RING_RADIUS,
            camera_distance: CAMERA_DISTANCE,
            width,
            height,
            theta_step: THETA_STEP,
            phi_step: PHI_STEP,
        }
    }

    /// Projection scale: sized so the torus spans about 3/4 of the screen
    /// width at the camera distance.
    pub fn scale_factor(&self) -> f32 {
        self.width as f32 * self.camera_distance * 3.0
            / (8.0 * (self.tube_radius + self.ring_radius))
    }
}

/// Precomputed trig for the two rotation angles, shared by every sample
/// in a frame.
#[derive(Clone, Copy)]
pub struct Rotation {
    sin_a: f32,
    cos_a: f32,
    sin_b: f32,
    cos_b: f32,
}

impl Rotation {
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            sin_a: a.sin(),
            cos_a: a.cos(),
            sin_b: b.sin(),
            cos_b: b.cos(),
        }
    }
}

/// One sampled, rotated and projected point of the torus surface.
///
/// `col` and `row` may land outside the screen; callers cull against the
/// frame buffer bounds. `luminance` is the surface normal dotted with the
/// light direction (0, 1, -1), so it ranges over roughly [-sqrt(2),
/// sqrt(2)]; values <= 0 face away from the light.
pub struct SurfacePoint {
    pub col: i32,
    pub row: i32,
    pub inv_depth: f32,
    pub luminance: f32,
}

/// Sample the torus at (theta, phi), rotate by the angles captured in
/// `rot`, and project into screen space.
///
/// theta runs around the tube cross-section, phi around the central axis
/// with phi = 0 facing the viewer, so (0, 0) is the point on the outer
/// equator nearest the camera.
pub fn surface_point(ctx: &RenderContext, rot: &Rotation, theta: f32, phi: f32) -> SurfacePoint {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    // Cross-section circle at angle theta, swept around the central axis
    let circle_x = ctx.ring_radius + ctx.tube_radius * cos_theta;
    let circle_y = ctx.tube_radius * sin_theta;

    let (x, y, z) = rotate(rot, circle_x * sin_phi, circle_y, -circle_x * cos_phi);

    // The unrotated normal is already unit length
    let (_, ny, nz) = rotate(rot, cos_theta * sin_phi, sin_theta, -cos_theta * cos_phi);

    let depth = ctx.camera_distance + z;
    let inv_depth = 1.0 / depth.max(MIN_Z_DIVISOR);

    // Row axis is inverted: increasing row indexes move down the screen
    let k1 = ctx.scale_factor();
    let col = (ctx.width as f32 / 2.0 + k1 * inv_depth * x) as i32;
    let row = (ctx.height as f32 / 2.0 - k1 * inv_depth * y) as i32;

    SurfacePoint {
        col,
        row,
        inv_depth,
        luminance: ny - nz,
    }
}

/// Rotate about the x axis by A, then about the z axis by B.
fn rotate(rot: &Rotation, x: f32, y: f32, z: f32) -> (f32, f32, f32) {
    let y1 = y * rot.cos_a - z * rot.sin_a;
    let z1 = y * rot.sin_a + z * rot.cos_a;
    (
        x * rot.cos_b - y1 * rot.sin_b,
        x * rot.sin_b + y1 * rot.cos_b,
        z1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const EPS: f32 = 1e-4;

    fn ctx() -> RenderContext {
        RenderContext::new(120, 40)
    }

    #[test]
    fn scale_factor_matches_closed_form() {
        // 120 * 5 * 3 / (8 * (1 + 2))
        assert!((ctx().scale_factor() - 75.0).abs() < EPS);
    }

    #[test]
    fn nearest_equator_point_projects_to_screen_center() {
        let c = ctx();
        let rot = Rotation::new(0.0, 0.0);
        let p = surface_point(&c, &rot, 0.0, 0.0);
        assert_eq!(p.col, 60);
        assert_eq!(p.row, 20);
        // depth = camera_distance - (ring + tube) = 2
        assert!((p.inv_depth - 0.5).abs() < EPS);
        assert!(p.luminance > 0.0);
    }

    #[test]
    fn no_sample_is_nearer_than_the_outer_equator() {
        let c = ctx();
        let rot = Rotation::new(0.0, 0.0);
        let steps = 64;
        let mut max_inv_depth = 0.0f32;
        for i in 0..steps {
            for j in 0..steps {
                let theta = i as f32 / steps as f32 * TAU;
                let phi = j as f32 / steps as f32 * TAU;
                let p = surface_point(&c, &rot, theta, phi);
                max_inv_depth = max_inv_depth.max(p.inv_depth);
            }
        }
        assert!((max_inv_depth - 0.5).abs() < EPS);
    }

    #[test]
    fn rotation_wraps_at_full_turns() {
        let c = ctx();
        let a = 1.3;
        let before = Rotation::new(a, a);
        let after = Rotation::new(a + TAU, a + TAU);
        let steps = 16;
        for i in 0..steps {
            for j in 0..steps {
                let theta = i as f32 / steps as f32 * TAU;
                let phi = j as f32 / steps as f32 * TAU;
                let p = surface_point(&c, &before, theta, phi);
                let q = surface_point(&c, &after, theta, phi);
                assert!((p.inv_depth - q.inv_depth).abs() < EPS);
                assert!((p.luminance - q.luminance).abs() < EPS);
                // projected cells may only differ where truncation sits on
                // an integer boundary
                assert!((p.col - q.col).abs() <= 1);
                assert!((p.row - q.row).abs() <= 1);
            }
        }
    }

    #[test]
    fn zero_tube_radius_stays_finite() {
        let mut c = ctx();
        c.tube_radius = 0.0;
        let rot = Rotation::new(0.7, 2.1);
        let steps = 32;
        for i in 0..steps {
            for j in 0..steps {
                let theta = i as f32 / steps as f32 * TAU;
                let phi = j as f32 / steps as f32 * TAU;
                let p = surface_point(&c, &rot, theta, phi);
                assert!(p.inv_depth.is_finite());
                assert!(p.inv_depth > 0.0);
                assert!(p.luminance.is_finite());
            }
        }
    }
}
