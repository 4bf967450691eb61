//! View volume of a camera: mapping normalized screen points to world rays
//! and intersecting them with planes.

use glam::{Vec2, Vec3};

use super::core::{Camera, Projection, ViewportMapping};

/// A plane in 3D space, where the plane equation is `n · p + d = 0`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Plane through `point` with the given normal.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalize_or_zero();
        Self {
            normal: n,
            distance: -n.dot(point),
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Point where the infinite line through `ray` crosses the plane, or
    /// `None` if the line is parallel to it.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() <= f32::EPSILON {
            return None;
        }
        let t = -self.distance_to_point(ray.origin) / denom;
        Some(ray.origin + ray.direction * t)
    }
}

/// A half-line with unit direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// The camera's view volume for a given viewport aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct ViewVolume {
    eye: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    /// Orthographic: full width/height. Perspective: width/height of the
    /// slice at unit distance.
    width: f32,
    height: f32,
    orthographic: bool,
}

impl ViewVolume {
    /// View volume of `camera` drawn into a viewport of `aspect`
    /// (width / height).
    pub fn new(camera: &Camera, aspect: f32) -> Self {
        let (mut height, orthographic) = match camera.projection {
            Projection::Orthographic { height } => (height, true),
            Projection::Perspective { height_angle } => {
                (2.0 * (height_angle / 2.0).tan(), false)
            }
        };
        let aspect = if aspect > 0.0 { aspect } else { camera.aspect_ratio };
        // Tall viewports widen the volume vertically so the full camera
        // width stays visible.
        if camera.viewport_mapping == ViewportMapping::AdjustCamera
            && aspect < 1.0
        {
            height /= aspect;
        }
        Self {
            eye: camera.position,
            forward: camera.view_direction(),
            right: camera.orientation * Vec3::X,
            up: camera.up_direction(),
            width: height * aspect,
            height,
            orthographic,
        }
    }

    /// Ray through the normalized screen point `p` (`[0,1]²`, origin at the
    /// lower-left corner).
    pub fn project_point_to_ray(&self, p: Vec2) -> Ray {
        let offset = self.right * ((p.x - 0.5) * self.width)
            + self.up * ((p.y - 0.5) * self.height);
        if self.orthographic {
            Ray {
                origin: self.eye + offset,
                direction: self.forward,
            }
        } else {
            Ray {
                origin: self.eye,
                direction: (self.forward + offset).normalize(),
            }
        }
    }

    /// Plane perpendicular to the view direction at `distance` from the
    /// eye, facing the camera.
    pub fn plane_at(&self, distance: f32) -> Plane {
        Plane::from_point_normal(self.eye + self.forward * distance, -self.forward)
    }
}
