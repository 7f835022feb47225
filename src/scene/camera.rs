use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

const FOV_Y_DEGREES: f32 = 75.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;
const MIN_DISTANCE: f32 = 10.0;
const MAX_DISTANCE: f32 = 100.0;
const INITIAL_DISTANCE: f32 = 50.0;
const DAMPING_FACTOR: f32 = 0.05;
const POLAR_EPSILON: f32 = 1e-4;
const ROTATE_SPEED: f32 = 2.0 * PI;

/// Perspective camera orbiting a target point.
///
/// Orientation is kept in spherical coordinates around `target` with +Y up.
/// Pointer input accumulates into deltas that are bled off by a damping
/// factor on every `update`, so motion eases out over a few frames.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    target: Vec3,
    distance: f32,
    polar: f32,
    azimuth: f32,
    aspect: f32,
    viewport: Vec2,
    polar_delta: f32,
    azimuth_delta: f32,
    zoom_scale: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: INITIAL_DISTANCE,
            polar: PI / 2.0,
            azimuth: 0.0,
            aspect: 1.0,
            viewport: Vec2::ONE,
            polar_delta: 0.0,
            azimuth_delta: 0.0,
            zoom_scale: 1.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eye(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + Vec3::new(
                sin_polar * self.azimuth.sin(),
                self.polar.cos(),
                sin_polar * self.azimuth.cos(),
            ) * self.distance
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), self.aspect, NEAR, FAR)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Recomputes the aspect ratio for a new viewport size.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport = Vec2::new(width, height);
        self.aspect = width / height;
    }

    /// Queues a rotation from a pointer drag measured in pixels.
    pub fn rotate_by_pixels(&mut self, delta: Vec2) {
        let height = self.viewport.y.max(1.0);
        self.azimuth_delta -= ROTATE_SPEED * delta.x / height;
        self.polar_delta -= ROTATE_SPEED * delta.y / height;
    }

    /// Queues a dolly; `factor > 1` moves away from the target.
    pub fn zoom_by(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom_scale *= factor;
        }
    }

    /// Applies pending input and damping. Returns true while still moving.
    pub fn update(&mut self) -> bool {
        self.azimuth += self.azimuth_delta * DAMPING_FACTOR;
        self.polar = (self.polar + self.polar_delta * DAMPING_FACTOR)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.distance = (self.distance * self.zoom_scale).clamp(MIN_DISTANCE, MAX_DISTANCE);

        self.azimuth_delta *= 1.0 - DAMPING_FACTOR;
        self.polar_delta *= 1.0 - DAMPING_FACTOR;
        self.zoom_scale = 1.0;

        self.azimuth_delta.abs() > 1e-4 || self.polar_delta.abs() > 1e-4
    }

    /// Projects a world point into viewport pixels, y down. Returns the
    /// pixel position and clip-space depth, or `None` behind the camera.
    pub fn project(&self, view_projection: &Mat4, world: Vec3) -> Option<(Vec2, f32)> {
        let clip = *view_projection * world.extend(1.0);
        if clip.w <= NEAR {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        let pixel = Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        );
        Some((pixel, clip.w))
    }

    /// Pixel radius of a sphere of `radius` at clip depth `w`.
    pub fn projected_radius(&self, radius: f32, w: f32) -> f32 {
        let half_fov = (FOV_Y_DEGREES.to_radians() * 0.5).tan();
        radius / (w * half_fov) * self.viewport.y * 0.5
    }
}
