//! Seek animation: a timed camera fly-to toward a point of interest.

use glam::{Quat, Vec3};

use super::core::Camera;
use crate::util::easing::EasingFunction;

/// Camera pose produced by one animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekSample {
    /// Interpolated eye position.
    pub position: Vec3,
    /// Interpolated orientation.
    pub orientation: Quat,
    /// Linear time fraction in `[0, 1]` before easing.
    pub fraction: f32,
    /// `true` on the step that lands exactly on the end pose.
    pub finished: bool,
}

/// In-flight camera fly-to between two poses.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekAnimation {
    /// Eye position when the seek started.
    pub start_position: Vec3,
    /// Orientation when the seek started.
    pub start_orientation: Quat,
    /// Eye position to land on.
    pub end_position: Vec3,
    /// Orientation to land on.
    pub end_orientation: Quat,
    /// Total duration in seconds.
    pub duration: f32,
    /// Temporal remap applied to the time fraction.
    pub easing: EasingFunction,
}

impl SeekAnimation {
    /// Plan a seek that turns `camera` toward `target` (in the camera's
    /// parent coordinate system) and stops `focal_distance` short of it.
    ///
    /// The rotation is the shortest arc from the current view direction to
    /// the direction of the target.
    #[must_use]
    pub fn toward(
        camera: &Camera,
        target: Vec3,
        focal_distance: f32,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        let old_dir = camera.view_direction();
        let dir = (target - camera.position)
            .try_normalize()
            .unwrap_or(old_dir);
        let turn = Quat::from_rotation_arc(old_dir, dir);
        Self {
            start_position: camera.position,
            start_orientation: camera.orientation,
            end_position: target - dir * focal_distance,
            end_orientation: (turn * camera.orientation).normalize(),
            duration,
            easing,
        }
    }

    /// Advance to `elapsed` seconds since the seek started.
    ///
    /// `tick_interval` is the timer interval in seconds. It is added to the
    /// time fraction unscaled: once `t + tick_interval` passes 1 this step
    /// lands on the end pose.
    pub fn sample(&self, elapsed: f32, tick_interval: f32) -> SeekSample {
        let mut t = if self.duration > 0.0 {
            elapsed / self.duration
        } else {
            1.0
        };
        if t > 1.0 || t + tick_interval > 1.0 {
            t = 1.0;
        }
        let t = t.max(0.0);

        let eased = self.easing.evaluate(t);
        SeekSample {
            position: self.start_position.lerp(self.end_position, eased),
            orientation: self
                .start_orientation
                .slerp(self.end_orientation, eased),
            fraction: t,
            finished: t == 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn quat_close(a: Quat, b: Quat) -> bool {
        // q and −q are the same rotation.
        a.dot(b).abs() > 1.0 - 1e-5
    }

    #[test]
    fn straight_ahead_target_keeps_orientation() {
        let cam = Camera::default();
        let anim = SeekAnimation::toward(
            &cam,
            Vec3::new(0.0, 0.0, -9.0),
            2.0,
            2.0,
            EasingFunction::CosineInOut,
        );
        assert!((anim.end_position - Vec3::new(0.0, 0.0, -7.0)).length() < 1e-5);
        assert!(quat_close(anim.end_orientation, cam.orientation));
    }

    #[test]
    fn end_orientation_looks_at_target() {
        let cam = Camera::default();
        let target = Vec3::new(10.0, 0.0, 1.0);
        let anim = SeekAnimation::toward(
            &cam,
            target,
            5.0,
            1.0,
            EasingFunction::CosineInOut,
        );
        let dir = anim.end_orientation * Vec3::NEG_Z;
        assert!((dir - Vec3::X).length() < 1e-5);
        assert!((anim.end_position - Vec3::new(5.0, 0.0, 1.0)).length() < 1e-4);
    }

    #[test]
    fn slerp_endpoints_are_exact() {
        let cam = Camera::default();
        let anim = SeekAnimation::toward(
            &cam,
            Vec3::new(0.0, 10.0, 1.0),
            1.0,
            2.0,
            EasingFunction::CosineInOut,
        );
        let first = anim.sample(0.0, 0.0);
        assert!(quat_close(first.orientation, anim.start_orientation));
        assert_eq!(first.position, anim.start_position);
        assert!(!first.finished);

        let last = anim.sample(2.0, 0.0);
        assert!(last.finished);
        assert!(quat_close(last.orientation, anim.end_orientation));
        assert!((last.position - anim.end_position).length() < 1e-5);
    }

    #[test]
    fn lands_early_instead_of_overshooting() {
        let cam = Camera::default();
        let anim = SeekAnimation::toward(
            &cam,
            Vec3::new(0.0, 0.0, -20.0),
            1.0,
            2.0,
            EasingFunction::Linear,
        );
        // 0.97 + 0.05 passes the end; the interval is not scaled by the
        // 2 s duration.
        let s = anim.sample(1.94, 0.05);
        assert!(s.finished);
        assert_eq!(s.fraction, 1.0);
        assert!((s.position - anim.end_position).length() < 1e-5);

        let s = anim.sample(1.8, 0.05);
        assert!(!s.finished);
        assert!((s.fraction - 0.9).abs() < 1e-6);

        let s = anim.sample(1.0, 0.05);
        assert!(!s.finished);
        assert!((s.fraction - 0.5).abs() < 1e-6);
    }

    #[test]
    fn midpoint_is_half_way_with_cosine() {
        let cam = Camera::default();
        let anim = SeekAnimation::toward(
            &cam,
            Vec3::new(-10.0, 0.0, 1.0),
            0.0,
            2.0,
            EasingFunction::CosineInOut,
        );
        let mid = anim.sample(1.0, 0.0);
        let expected = cam.position.lerp(anim.end_position, 0.5);
        assert!((mid.position - expected).length() < 1e-4);
        let angle = anim.start_orientation.angle_between(mid.orientation);
        assert!((angle - FRAC_PI_2 / 2.0).abs() < 1e-3);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let cam = Camera::default();
        let anim = SeekAnimation::toward(
            &cam,
            Vec3::new(3.0, 0.0, 1.0),
            1.0,
            0.0,
            EasingFunction::CosineInOut,
        );
        assert!(anim.sample(0.0, 0.03).finished);
    }
}
