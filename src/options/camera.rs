use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::{Camera, Projection, ProjectionKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera projection and placement parameters.
pub struct CameraOptions {
    /// Projection of the camera created at startup.
    #[schemars(title = "Projection")]
    pub projection: ProjectionKind,
    /// Vertical field of view in degrees (perspective).
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// View-volume height in world units (orthographic).
    #[schemars(title = "Orthographic Height", range(min = 0.01))]
    pub height: f32,
    /// Initial near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Initial far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial focal distance.
    #[schemars(skip)]
    pub focal_distance: f32,
    /// Initial viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            projection: ProjectionKind::Perspective,
            fovy: 45.0,
            height: 2.0,
            znear: 1.0,
            zfar: 10.0,
            focal_distance: 5.0,
            aspect: 1.0,
        }
    }
}

impl CameraOptions {
    /// Build the startup camera described by these options.
    #[must_use]
    pub fn build_camera(&self) -> Camera {
        let projection = match self.projection {
            ProjectionKind::Orthographic => Projection::Orthographic {
                height: self.height,
            },
            ProjectionKind::Perspective => Projection::Perspective {
                height_angle: self.fovy.to_radians(),
            },
        };
        Camera {
            focal_distance: self.focal_distance,
            aspect_ratio: self.aspect,
            near_distance: self.znear,
            far_distance: self.zfar,
            ..Camera::new(projection)
        }
    }
}
