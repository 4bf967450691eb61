//! Conversion between orthographic and perspective cameras.
//!
//! Orthographic → perspective always produces a 45° field of view and backs
//! the camera off so the focal-plane slice keeps its size. Perspective →
//! orthographic takes the frustum height at the focal plane. The two are
//! not inverses of each other unless the perspective angle is 45°.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_8};

use glam::Vec3;

use super::core::{Camera, Projection, ProjectionKind};

/// Copy the fields shared by both projections from `src` into `dst`.
fn copy_shared(src: &Camera, dst: &mut Camera) {
    dst.aspect_ratio = src.aspect_ratio;
    dst.focal_distance = src.focal_distance;
    dst.orientation = src.orientation;
    dst.position = src.position;
    dst.viewport_mapping = src.viewport_mapping;
}

/// Write the perspective equivalent of an orthographic camera into `dst`.
///
/// Returns `false` (leaving `dst` untouched) when `src` is not
/// orthographic.
pub fn ortho_to_perspective(src: &Camera, dst: &mut Camera) -> bool {
    let Projection::Orthographic { height } = src.projection else {
        log::warn!("ortho_to_perspective: source camera is not orthographic");
        return false;
    };
    copy_shared(src, dst);

    let focal = height / (2.0 * FRAC_PI_8.tan());
    let offset = src.orientation
        * Vec3::new(0.0, 0.0, focal - src.focal_distance);
    dst.position = src.position + offset;
    dst.focal_distance = focal;
    dst.projection = Projection::Perspective {
        height_angle: FRAC_PI_4,
    };
    true
}

/// Write the orthographic equivalent of a perspective camera into `dst`.
///
/// Returns `false` (leaving `dst` untouched) when `src` is not
/// perspective.
pub fn perspective_to_ortho(src: &Camera, dst: &mut Camera) -> bool {
    let Projection::Perspective { height_angle } = src.projection else {
        log::warn!("perspective_to_ortho: source camera is not perspective");
        return false;
    };
    copy_shared(src, dst);
    dst.projection = Projection::Orthographic {
        height: 2.0 * src.focal_distance * (height_angle / 2.0).tan(),
    };
    true
}

/// Build a new camera of kind `kind` from `src`.
///
/// Same kind yields a plain copy. Clipping distances and the marker of the
/// new camera start from library defaults, as a freshly created camera
/// would.
#[must_use]
pub fn converted(src: &Camera, kind: ProjectionKind) -> Camera {
    if src.kind() == kind {
        return src.clone();
    }
    let mut out = match kind {
        ProjectionKind::Orthographic => Camera::new(Projection::ORTHOGRAPHIC),
        ProjectionKind::Perspective => Camera::new(Projection::PERSPECTIVE),
    };
    let _ = convert_into(src, &mut out);
    out
}

/// Transfer `src` into `dst`, keeping `dst`'s projection kind.
///
/// Same kind copies every field; differing kinds go through the matching
/// conversion. Always succeeds for the two known projections.
pub fn convert_into(src: &Camera, dst: &mut Camera) -> bool {
    match (src.kind(), dst.kind()) {
        (a, b) if a == b => {
            dst.clone_from(src);
            true
        }
        (ProjectionKind::Orthographic, _) => ortho_to_perspective(src, dst),
        (ProjectionKind::Perspective, _) => perspective_to_ortho(src, dst),
    }
}
