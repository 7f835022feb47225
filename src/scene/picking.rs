use glam::{Vec2, Vec3};

use crate::social::EntityId;

use super::camera::OrbitCamera;
use super::entity::Marker;
use super::registry::SceneRegistry;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Ray from the camera eye through a point in normalized device
    /// coordinates (`[-1, 1]` on both axes, y up).
    pub fn from_ndc(camera: &OrbitCamera, ndc: Vec2) -> Self {
        let inverse = camera.view_projection().inverse();
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let origin = camera.eye();

        Self {
            origin,
            direction: (far - origin).normalize_or_zero(),
        }
    }

    /// Smallest non-negative ray parameter at which the ray meets `marker`.
    pub fn intersect_marker(&self, marker: &Marker) -> Option<f32> {
        let offset = self.origin - marker.center;
        let b = offset.dot(self.direction);
        let c = offset.length_squared() - marker.radius * marker.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }

        let far = -b + root;
        (far >= 0.0).then_some(far)
    }
}

/// Converts a pointer position inside a viewport into normalized device
/// coordinates. `None` for an empty viewport.
pub fn pointer_to_ndc(pointer: Vec2, viewport_origin: Vec2, viewport_size: Vec2) -> Option<Vec2> {
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return None;
    }

    let local = (pointer - viewport_origin) / viewport_size;
    Some(Vec2::new(local.x * 2.0 - 1.0, -(local.y * 2.0) + 1.0))
}

/// Entity whose marker is hit first by the ray through `ndc`.
pub fn pick(ndc: Vec2, camera: &OrbitCamera, registry: &SceneRegistry) -> Option<EntityId> {
    let ray = Ray::from_ndc(camera, ndc);

    registry
        .entities()
        .filter_map(|entity| {
            ray.intersect_marker(entity.marker())
                .map(|distance| (entity.id(), distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _distance)| id)
}
