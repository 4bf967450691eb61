//! Capabilities the surrounding application provides to the camera
//! controller.
//!
//! The controller never walks a scene graph itself. Ray picking, bounding
//! boxes, transform accumulation and camera-node replacement are all
//! answered by the host through [`SceneHost`].

use glam::{Mat4, Vec2, Vec3};

use crate::camera::bounds::Aabb;
use crate::camera::core::Camera;

/// Depth-buffer resolution assumed when the host does not report one.
pub const DEFAULT_DEPTH_BITS: u32 = 24;

/// Opaque handle to a camera node inside the host's scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraSlot(pub usize);

/// Scene queries the camera controller depends on.
pub trait SceneHost {
    /// Nearest scene point under the screen position `screen` (pixels,
    /// origin at the lower-left corner), searching within `radius` pixels.
    fn pick_point(&self, screen: Vec2, radius: f32) -> Option<Vec3>;

    /// Bounding box of the whole scene in world space, or `None` for an
    /// empty scene.
    fn bounding_box(&self) -> Option<Aabb>;

    /// Accumulated transform of the camera's parent as `(matrix, inverse)`:
    /// `matrix` is the camera's model matrix (parent space to world) and
    /// `inverse` maps world points into the parent space. Identity when
    /// nothing sits between the scene root and the camera.
    fn camera_coordinate_system(&self, _camera: &Camera) -> (Mat4, Mat4) {
        (Mat4::IDENTITY, Mat4::IDENTITY)
    }

    /// Bits of depth-buffer precision of the render target.
    fn depth_bits(&self) -> u32 {
        DEFAULT_DEPTH_BITS
    }

    /// First camera node found in the scene, if any.
    fn find_first_camera(&self) -> Option<CameraSlot> {
        None
    }

    /// Replace the camera node at `slot` with `camera`.
    fn replace_camera(&mut self, _slot: CameraSlot, _camera: &Camera) {}
}
