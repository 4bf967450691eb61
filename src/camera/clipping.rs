//! Automatic near/far clipping-plane placement.
//!
//! The planes are fitted just outside the scene's bounding box so the
//! depth buffer resolution is spent on the scene's actual depth extent.
//! Perspective cameras get a floor on the near plane, since depth precision
//! collapses as `far / near` grows.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use super::core::{Camera, CameraMarker, Projection};

/// Proportional slack applied outward to both planes.
pub const SLACK: f32 = 0.001;

/// Fallback `far / near` ratio when the computed near floor is not below
/// the far plane.
pub const FALLBACK_DEPTH_RATIO: f32 = 5000.0;

/// Minimum separation given to a frustum camera whose far plane would not
/// lie beyond its fixed near plane.
pub const FRUSTUM_MIN_DEPTH: f32 = 10.0;

/// Near-plane floor strategy for perspective cameras.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClippingStrategy {
    /// Near plane never closer than a fixed distance.
    ConstantNearPlane,
    /// Near plane floor derived from the far plane and the depth-buffer
    /// resolution. Larger values sacrifice more depth bits.
    VariableNearPlane,
}

/// User hook mapping the computed `(near, far)` pair to the pair actually
/// applied.
pub type ClippingAdjustFn = Box<dyn Fn(f32, f32) -> (f32, f32)>;

/// Clipping strategy plus its parameter and optional adjustment hook.
pub struct ClippingPolicy {
    strategy: ClippingStrategy,
    value: f32,
    adjust: Option<ClippingAdjustFn>,
}

impl fmt::Debug for ClippingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClippingPolicy")
            .field("strategy", &self.strategy)
            .field("value", &self.value)
            .field("adjust", &self.adjust.is_some())
            .finish()
    }
}

impl Default for ClippingPolicy {
    fn default() -> Self {
        Self::new(ClippingStrategy::VariableNearPlane, 0.6, None)
    }
}

impl ClippingPolicy {
    /// Build a policy. For [`ClippingStrategy::VariableNearPlane`] the value
    /// is clamped to `[0, 1]` and mapped into `[0.1, 0.9]`.
    #[must_use]
    pub fn new(
        strategy: ClippingStrategy,
        value: f32,
        adjust: Option<ClippingAdjustFn>,
    ) -> Self {
        let mut policy = Self {
            strategy,
            value,
            adjust,
        };
        policy.reconfigure(strategy, value);
        policy
    }

    /// Change strategy and value, keeping the adjustment hook.
    pub fn reconfigure(&mut self, strategy: ClippingStrategy, value: f32) {
        self.strategy = strategy;
        // Keep the near plane neither too close to nor too far from the
        // projection point.
        self.value = match strategy {
            ClippingStrategy::ConstantNearPlane => value,
            ClippingStrategy::VariableNearPlane => {
                value.clamp(0.0, 1.0) * 0.8 + 0.1
            }
        };
    }

    /// Install or remove the adjustment hook.
    pub fn set_adjust(&mut self, adjust: Option<ClippingAdjustFn>) {
        self.adjust = adjust;
    }

    /// Configured strategy.
    #[must_use]
    pub fn strategy(&self) -> ClippingStrategy {
        self.strategy
    }

    /// Strategy parameter after normalization.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// `true` when an adjustment hook is installed.
    #[must_use]
    pub fn has_adjust(&self) -> bool {
        self.adjust.is_some()
    }

    /// Smallest near distance allowed for a perspective camera whose far
    /// plane is at `far`.
    #[must_use]
    pub fn near_floor(&self, far: f32, depth_bits: u32) -> f32 {
        let floor = match self.strategy {
            ClippingStrategy::ConstantNearPlane => self.value,
            ClippingStrategy::VariableNearPlane => {
                let use_bits = (depth_bits as f32 * (1.0 - self.value)) as i32;
                far / 2.0_f32.powi(use_bits)
            }
        };
        if floor >= far {
            far / FALLBACK_DEPTH_RATIO
        } else {
            floor
        }
    }
}

/// Compute the clipping planes for `camera` given the scene bounds already
/// transformed into camera-local space.
///
/// `None` bounds (empty scene) start from the camera's current planes.
/// Returns `None` when the whole scene lies behind a non-orthographic
/// camera, in which case the planes must be left alone.
#[must_use]
pub fn compute_clipping_planes(
    camera: &Camera,
    camera_space_bounds: Option<&Aabb>,
    policy: &ClippingPolicy,
    depth_bits: u32,
) -> Option<(f32, f32)> {
    let (mut near, mut far) = camera_space_bounds
        .filter(|b| !b.is_empty())
        .map_or((camera.near_distance, camera.far_distance), Aabb::depth_range);

    if far <= 0.0 && !camera.is_orthographic() {
        return None;
    }

    if matches!(camera.projection, Projection::Perspective { .. }) {
        let floor = policy.near_floor(far, depth_bits);
        if near < floor {
            near = floor;
        }
    }

    if camera.marker == CameraMarker::Frustum {
        near = camera.near_distance;
        far *= 1.0 + SLACK;
        if far <= near {
            far = near + FRUSTUM_MIN_DEPTH;
        }
    } else {
        // Orthographic planes may legitimately be negative.
        near *= 1.0 - near.signum_nonzero() * SLACK;
        far *= 1.0 + far.signum_nonzero() * SLACK;
    }

    Some(match &policy.adjust {
        Some(adjust) => adjust(near, far),
        None => (near, far),
    })
}

/// `1.0` for strictly positive values, `-1.0` otherwise (zero included).
trait SignumNonZero {
    fn signum_nonzero(self) -> Self;
}

impl SignumNonZero for f32 {
    fn signum_nonzero(self) -> Self {
        if self > 0.0 {
            1.0
        } else {
            -1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn box_z(min_z: f32, max_z: f32) -> Aabb {
        Aabb::new(Vec3::new(-1.0, -1.0, min_z), Vec3::new(1.0, 1.0, max_z))
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= b.abs() * 2.0 * SLACK + 1e-6
    }

    #[test]
    fn planes_hug_the_scene_depth() {
        let cam = Camera::default();
        let policy =
            ClippingPolicy::new(ClippingStrategy::ConstantNearPlane, 0.01, None);
        let (near, far) =
            compute_clipping_planes(&cam, Some(&box_z(-10.0, -2.0)), &policy, 24)
                .unwrap();
        assert!(close(near, 2.0), "near = {near}");
        assert!(close(far, 10.0), "far = {far}");
        // Slack pushes both planes outward.
        assert!(near < 2.0);
        assert!(far > 10.0);
    }

    #[test]
    fn variable_value_is_normalized() {
        let half =
            ClippingPolicy::new(ClippingStrategy::VariableNearPlane, 0.5, None);
        assert!((half.value() - 0.5).abs() < 1e-6);
        let high =
            ClippingPolicy::new(ClippingStrategy::VariableNearPlane, 3.0, None);
        assert!((high.value() - 0.9).abs() < 1e-6);
        let low =
            ClippingPolicy::new(ClippingStrategy::VariableNearPlane, -1.0, None);
        assert!((low.value() - 0.1).abs() < 1e-6);
        let constant =
            ClippingPolicy::new(ClippingStrategy::ConstantNearPlane, 3.0, None);
        assert_eq!(constant.value(), 3.0);
    }

    #[test]
    fn variable_floor_clamps_near() {
        let policy =
            ClippingPolicy::new(ClippingStrategy::VariableNearPlane, 0.5, None);
        let far = 10_000.0;
        let floor = policy.near_floor(far, 24);
        assert!((floor - far / 2.0_f32.powi(12)).abs() < 1e-4);

        let cam = Camera::default();
        let (near, _) = compute_clipping_planes(
            &cam,
            Some(&box_z(-far, 0.5)),
            &policy,
            24,
        )
        .unwrap();
        // Near is clamped up to the floor, then slackened.
        assert!((near - floor * (1.0 - SLACK)).abs() < 1e-4, "near = {near}");
    }

    #[test]
    fn floor_beyond_far_falls_back() {
        let policy =
            ClippingPolicy::new(ClippingStrategy::ConstantNearPlane, 50.0, None);
        assert!((policy.near_floor(20.0, 24) - 20.0 / 5000.0).abs() < 1e-7);
    }

    #[test]
    fn scene_behind_camera_is_ignored() {
        let cam = Camera::default();
        let policy = ClippingPolicy::default();
        assert!(compute_clipping_planes(
            &cam,
            Some(&box_z(2.0, 8.0)),
            &policy,
            24
        )
        .is_none());
    }

    #[test]
    fn orthographic_accepts_scene_behind() {
        let cam = Camera::new(Projection::ORTHOGRAPHIC);
        let policy = ClippingPolicy::default();
        let (near, far) =
            compute_clipping_planes(&cam, Some(&box_z(2.0, 8.0)), &policy, 24)
                .unwrap();
        assert!(close(near, -8.0));
        assert!(close(far, -2.0));
        // Negative planes still get outward slack.
        assert!(near < -8.0);
        assert!(far > -2.0);
    }

    #[test]
    fn empty_scene_keeps_current_planes() {
        let cam = Camera::default();
        let policy =
            ClippingPolicy::new(ClippingStrategy::ConstantNearPlane, 0.1, None);
        let (near, far) =
            compute_clipping_planes(&cam, None, &policy, 24).unwrap();
        assert!(close(near, cam.near_distance));
        assert!(close(far, cam.far_distance));
    }

    #[test]
    fn frustum_camera_keeps_near_plane() {
        let cam = Camera {
            near_distance: 4.0,
            marker: CameraMarker::Frustum,
            ..Camera::default()
        };
        let policy =
            ClippingPolicy::new(ClippingStrategy::ConstantNearPlane, 0.1, None);
        let (near, far) =
            compute_clipping_planes(&cam, Some(&box_z(-10.0, -2.0)), &policy, 24)
                .unwrap();
        assert_eq!(near, 4.0);
        assert!((far - 10.0 * (1.0 + SLACK)).abs() < 1e-5);

        let (near, far) =
            compute_clipping_planes(&cam, Some(&box_z(-3.0, -1.0)), &policy, 24)
                .unwrap();
        assert_eq!(near, 4.0);
        assert_eq!(far, 14.0);
    }

    #[test]
    fn adjust_hook_has_final_say() {
        let policy = ClippingPolicy::new(
            ClippingStrategy::ConstantNearPlane,
            0.1,
            Some(Box::new(|near, far| (near * 0.5, far * 2.0))),
        );
        assert!(policy.has_adjust());
        let cam = Camera::default();
        let (near, far) =
            compute_clipping_planes(&cam, Some(&box_z(-10.0, -2.0)), &policy, 24)
                .unwrap();
        assert!(close(near, 1.0));
        assert!(close(far, 20.0));
    }
}
