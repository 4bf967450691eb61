use std::f32::consts::FRAC_PI_4;

use glam::{Mat4, Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Projection-specific camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Parallel projection with a fixed view-volume height in world units.
    Orthographic {
        /// Height of the view volume.
        height: f32,
    },
    /// Perspective projection with a vertical field of view.
    Perspective {
        /// Vertical field of view in radians.
        height_angle: f32,
    },
}

impl Projection {
    /// Default orthographic projection (height 2, matching the
    /// scene-graph library default).
    pub const ORTHOGRAPHIC: Self = Self::Orthographic { height: 2.0 };
    /// Default perspective projection (45° vertical field of view).
    pub const PERSPECTIVE: Self = Self::Perspective {
        height_angle: FRAC_PI_4,
    };

    /// Which of the two projection kinds this is.
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Self::Orthographic { .. } => ProjectionKind::Orthographic,
            Self::Perspective { .. } => ProjectionKind::Perspective,
        }
    }
}

/// Discriminant of [`Projection`], used for configuration and requests to
/// switch camera type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Parallel projection.
    Orthographic,
    /// Perspective projection.
    Perspective,
}

impl ProjectionKind {
    /// The other projection kind.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Orthographic => Self::Perspective,
            Self::Perspective => Self::Orthographic,
        }
    }
}

/// How the view volume is fitted to a viewport whose aspect ratio differs
/// from the camera's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMapping {
    /// Crop the viewport to the camera aspect ratio.
    CropViewportFillFrame,
    /// Crop the viewport, drawing a frame around the unused area.
    CropViewportLineFrame,
    /// Crop the viewport without marking the unused area.
    CropViewportNoFrame,
    /// Adjust the camera so the view volume fills the viewport.
    #[default]
    AdjustCamera,
    /// Leave the camera alone and let the image be distorted.
    LeaveAlone,
}

/// Marker distinguishing camera classes that need special treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMarker {
    /// Ordinary camera.
    #[default]
    Standard,
    /// Camera whose near plane defines its frustum; automatic clipping may
    /// only move the far plane.
    Frustum,
}

/// A scene camera: shared placement fields plus a projection.
///
/// The camera looks down its local −Z axis, with local +Y as up.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Projection kind and its parameter.
    pub projection: Projection,
    /// Eye position in the camera's parent coordinate system.
    pub position: Vec3,
    /// Rotation from camera-local axes to the parent coordinate system.
    pub orientation: Quat,
    /// Distance along the view direction to the point of focus.
    pub focal_distance: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane distance.
    pub near_distance: f32,
    /// Far clipping plane distance.
    pub far_distance: f32,
    /// Viewport fitting policy.
    pub viewport_mapping: ViewportMapping,
    /// Camera class marker.
    pub marker: CameraMarker,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Projection::PERSPECTIVE)
    }
}

impl Camera {
    /// Create a camera at `(0, 0, 1)` looking down −Z with the scene-graph
    /// library's default field values.
    #[must_use]
    pub fn new(projection: Projection) -> Self {
        Self {
            projection,
            position: Vec3::Z,
            orientation: Quat::IDENTITY,
            focal_distance: 5.0,
            aspect_ratio: 1.0,
            near_distance: 1.0,
            far_distance: 10.0,
            viewport_mapping: ViewportMapping::default(),
            marker: CameraMarker::Standard,
        }
    }

    /// Which projection kind this camera uses.
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        self.projection.kind()
    }

    /// `true` for orthographic cameras.
    #[must_use]
    pub fn is_orthographic(&self) -> bool {
        matches!(self.projection, Projection::Orthographic { .. })
    }

    /// Unit view direction in the parent coordinate system.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Unit up direction in the parent coordinate system.
    #[must_use]
    pub fn up_direction(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Point at the focal distance in front of the camera.
    #[must_use]
    pub fn focal_point(&self) -> Vec3 {
        self.position + self.view_direction() * self.focal_distance
    }

    /// Height of the view volume at `distance` in front of the camera.
    #[must_use]
    pub fn view_height_at(&self, distance: f32) -> f32 {
        match self.projection {
            Projection::Orthographic { height } => height,
            Projection::Perspective { height_angle } => {
                2.0 * distance * (height_angle / 2.0).tan()
            }
        }
    }

    /// World-to-camera transform: undo the position, then the orientation.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation.inverse())
            * Mat4::from_translation(-self.position)
    }

    /// Projection matrix for the current near/far planes.
    ///
    /// Right-handed, `[0,1]` depth range (wgpu/Vulkan convention).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        match self.projection {
            Projection::Orthographic { height } => {
                let half_h = height / 2.0;
                let half_w = half_h * self.aspect_ratio;
                Mat4::orthographic_rh(
                    -half_w,
                    half_w,
                    -half_h,
                    half_h,
                    self.near_distance,
                    self.far_distance,
                )
            }
            Projection::Perspective { height_angle } => Mat4::perspective_rh(
                height_angle,
                self.aspect_ratio,
                self.near_distance,
                self.far_distance,
            ),
        }
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = Camera::default();
        assert!((cam.view_direction() - Vec3::NEG_Z).length() < 1e-6);
        assert!((cam.focal_point() - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-6);
        assert_eq!(cam.kind(), ProjectionKind::Perspective);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let cam = Camera {
            position: Vec3::new(3.0, -2.0, 7.0),
            orientation: Quat::from_rotation_y(0.7),
            ..Camera::default()
        };
        let eye = cam.view_matrix().transform_point3(cam.position);
        assert!(eye.length() < 1e-5);

        let ahead = cam.view_matrix().transform_point3(cam.focal_point());
        assert!((ahead - Vec3::new(0.0, 0.0, -cam.focal_distance)).length() < 1e-4);
    }

    #[test]
    fn perspective_view_height_grows_with_distance() {
        let cam = Camera::new(Projection::PERSPECTIVE);
        let expected = 2.0 * 10.0 * (FRAC_PI_4 / 2.0).tan();
        assert!((cam.view_height_at(10.0) - expected).abs() < 1e-5);

        let ortho = Camera::new(Projection::Orthographic { height: 4.0 });
        assert_eq!(ortho.view_height_at(10.0), 4.0);
        assert_eq!(ortho.view_height_at(100.0), 4.0);
    }

    #[test]
    fn orthographic_projection_maps_volume_to_ndc() {
        let cam = Camera {
            aspect_ratio: 2.0,
            ..Camera::new(Projection::Orthographic { height: 4.0 })
        };
        let proj = cam.build_projection();

        let near = proj.project_point3(Vec3::new(0.0, 0.0, -cam.near_distance));
        assert!(near.z.abs() < 1e-6);
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -cam.far_distance));
        assert!((far.z - 1.0).abs() < 1e-6);

        // Half width = half height (2) * aspect (2).
        let edge = proj.project_point3(Vec3::new(4.0, 2.0, -5.0));
        assert!((edge.x - 1.0).abs() < 1e-6);
        assert!((edge.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn perspective_projection_maps_frustum_edge_to_ndc() {
        let cam = Camera::new(Projection::PERSPECTIVE);
        let proj = cam.build_projection();

        let d = 5.0;
        let top = proj.project_point3(Vec3::new(0.0, (FRAC_PI_4 / 2.0).tan() * d, -d));
        assert!((top.y - 1.0).abs() < 1e-5);
        assert!(top.x.abs() < 1e-6);

        let near = proj.project_point3(Vec3::new(0.0, 0.0, -cam.near_distance));
        assert!(near.z.abs() < 1e-5);
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -cam.far_distance));
        assert!((far.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn build_matrix_is_projection_after_view() {
        for projection in [Projection::ORTHOGRAPHIC, Projection::PERSPECTIVE] {
            let cam = Camera {
                position: Vec3::new(1.0, 2.0, 3.0),
                orientation: Quat::from_rotation_x(0.3) * Quat::from_rotation_y(-1.1),
                aspect_ratio: 1.5,
                ..Camera::new(projection)
            };
            let expected = cam.build_projection() * cam.view_matrix();
            assert!(cam.build_matrix().abs_diff_eq(expected, 1e-6));

            // The focal point lands on the screen center.
            let center = cam.build_matrix().project_point3(cam.focal_point());
            assert!(center.x.abs() < 1e-4 && center.y.abs() < 1e-4);
        }
    }

    #[test]
    fn toggled_kind_flips() {
        assert_eq!(
            ProjectionKind::Orthographic.toggled(),
            ProjectionKind::Perspective
        );
        assert_eq!(
            ProjectionKind::Perspective.toggled(),
            ProjectionKind::Orthographic
        );
    }
}
