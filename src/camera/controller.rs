use glam::{Vec2, Vec3};
use web_time::{Duration, Instant};

use super::bounds::Aabb;
use super::clipping::{
    compute_clipping_planes, ClippingAdjustFn, ClippingPolicy, ClippingStrategy,
};
use super::convert::{convert_into, converted};
use super::core::{Camera, ProjectionKind};
use super::interaction::{InteractionCounter, InteractionEdge};
use super::seek::SeekAnimation;
use super::view_volume::ViewVolume;
use crate::events::{EventBus, SubscriptionId, ViewerEvent};
use crate::input::{Key, KeyEvent};
use crate::options::{SeekOptions, ViewerOptions};
use crate::scene::SceneHost;
use crate::timer::TimerTask;
use crate::util::frame_timing::{FrameRate, FrameTimer};

/// Screen fraction moved per arrow-key press.
const KEY_PAN_STEP: f32 = 0.1;

/// Owns the active camera and drives projection switching, seek animation,
/// automatic clipping planes and frame statistics.
///
/// The host calls [`CameraController::tick`] from its timer or event loop,
/// [`CameraController::pre_render`] before drawing and
/// [`CameraController::post_render`] after.
#[derive(Debug)]
pub struct CameraController {
    camera: Option<Camera>,
    home: Option<Camera>,

    seek_options: SeekOptions,
    seek: Option<SeekAnimation>,
    seek_timer: TimerTask,
    in_seek_mode: bool,
    interaction: InteractionCounter,

    clipping: ClippingPolicy,
    auto_clipping: bool,

    frame_timer: FrameTimer,
    events: EventBus,
}

impl CameraController {
    /// Create a controller with the startup camera and settings from
    /// `options`.
    #[must_use]
    pub fn new(options: &ViewerOptions, now: Instant) -> Self {
        Self {
            camera: Some(options.camera.build_camera()),
            home: None,
            seek_options: options.seek.clone(),
            seek: None,
            seek_timer: TimerTask::new(Duration::from_millis(
                options.seek.tick_interval_ms,
            )),
            in_seek_mode: false,
            interaction: InteractionCounter::default(),
            clipping: ClippingPolicy::new(
                options.clipping.strategy,
                options.clipping.value,
                None,
            ),
            auto_clipping: options.clipping.auto,
            frame_timer: FrameTimer::new(now),
            events: EventBus::default(),
        }
    }

    /// Apply seek and clipping settings from `options` (e.g. a loaded
    /// preset). The camera itself is left alone and any clipping hook is
    /// kept.
    pub fn apply_options(&mut self, options: &ViewerOptions) {
        self.seek_options = options.seek.clone();
        self.seek_timer
            .set_interval(Duration::from_millis(options.seek.tick_interval_ms));
        self.clipping
            .reconfigure(options.clipping.strategy, options.clipping.value);
        self.auto_clipping = options.clipping.auto;
    }

    // -- Camera ownership ------------------------------------------------

    /// The active camera.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Mutable access to the active camera.
    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    /// Replace the active camera. Everything rendering or routing input
    /// through this controller sees the new camera immediately.
    pub fn set_camera(&mut self, camera: Option<Camera>) {
        let kind = camera.as_ref().map(Camera::kind);
        self.camera = camera;
        if let Some(kind) = kind {
            self.events.emit(ViewerEvent::CameraReplaced(kind));
        }
    }

    /// Switch the active camera to `kind`, converting its parameters, and
    /// swap the first camera node in the host scene for the new one.
    ///
    /// Returns `false` if there is no camera or it already has that kind.
    pub fn set_camera_type(
        &mut self,
        kind: ProjectionKind,
        host: &mut dyn SceneHost,
    ) -> bool {
        let Some(current) = &self.camera else {
            log::warn!("set_camera_type: no active camera");
            return false;
        };
        if current.kind() == kind {
            return false;
        }

        let camera = converted(current, kind);
        if let Some(slot) = host.find_first_camera() {
            host.replace_camera(slot, &camera);
        }
        log::debug!("camera type changed to {kind:?}");
        self.set_camera(Some(camera));
        true
    }

    /// Flip between orthographic and perspective.
    pub fn toggle_camera_type(&mut self, host: &mut dyn SceneHost) -> bool {
        let Some(kind) = self.camera.as_ref().map(Camera::kind) else {
            return false;
        };
        self.set_camera_type(kind.toggled(), host)
    }

    /// Remember the current camera as the home position.
    pub fn save_home_position(&mut self) {
        if let Some(camera) = &self.camera {
            self.home = Some(camera.clone());
        }
    }

    /// Restore the home position into the active camera, converting
    /// between projections if the camera type changed since it was saved.
    pub fn reset_to_home_position(&mut self) -> bool {
        match (&self.home, &mut self.camera) {
            (Some(home), Some(camera)) => convert_into(home, camera),
            _ => false,
        }
    }

    // -- Interaction nesting ----------------------------------------------

    /// Enter an interactive camera operation.
    pub fn begin_interaction(&mut self) {
        if self.interaction.begin() == Some(InteractionEdge::Started) {
            self.events.emit(ViewerEvent::InteractionStarted);
        }
    }

    /// Leave an interactive camera operation.
    pub fn end_interaction(&mut self) {
        if self.interaction.end() == Some(InteractionEdge::Ended) {
            self.events.emit(ViewerEvent::InteractionEnded);
        }
    }

    /// Current interaction nesting depth.
    #[must_use]
    pub fn interaction_nesting(&self) -> u32 {
        self.interaction.nesting()
    }

    /// `true` while any interactive operation is in progress.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.interaction.is_active()
    }

    // -- Seek ---------------------------------------------------------------

    /// Enter or leave seek mode. Leaving cancels a running seek animation
    /// and ends its interaction exactly once.
    pub fn set_seek_mode(&mut self, enable: bool) {
        if !enable && self.seek_timer.is_scheduled() {
            self.seek_timer.unschedule();
            self.seek = None;
            self.end_interaction();
        }
        self.in_seek_mode = enable;
    }

    /// Stop a running seek animation, leaving the camera where it is.
    pub fn cancel_seek(&mut self) {
        self.set_seek_mode(false);
    }

    /// `true` while seek mode is on.
    #[must_use]
    pub fn is_seek_mode(&self) -> bool {
        self.in_seek_mode
    }

    /// `true` while a seek animation is scheduled.
    #[must_use]
    pub fn is_seeking(&self) -> bool {
        self.seek_timer.is_scheduled()
    }

    /// The running seek animation, if any.
    #[must_use]
    pub fn seek_animation(&self) -> Option<&SeekAnimation> {
        self.seek.as_ref()
    }

    /// Seek toward the scene point under `screen` (pixels, lower-left
    /// origin).
    ///
    /// Returns `false` and leaves the camera untouched when nothing is hit.
    pub fn seek_to_screen_point(
        &mut self,
        host: &dyn SceneHost,
        screen: Vec2,
        now: Instant,
    ) -> bool {
        if self.camera.is_none() {
            return false;
        }
        let Some(hit) = host.pick_point(screen, self.seek_options.pick_radius)
        else {
            log::debug!("seek: nothing under {screen}");
            self.begin_interaction();
            self.end_interaction();
            self.set_seek_mode(false);
            return false;
        };
        self.seek_to_point(host, hit, now);
        true
    }

    /// Start a seek animation toward `point` (world space).
    pub fn seek_to_point(
        &mut self,
        host: &dyn SceneHost,
        point: Vec3,
        now: Instant,
    ) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };

        // Move the point into the camera's parent space, accounting for
        // transforms above the camera in the scene.
        let (_, inverse) = host.camera_coordinate_system(camera);
        let target = inverse.transform_point3(point);

        let mut focal = self.seek_options.distance;
        if self.seek_options.distance_as_percentage {
            focal *= (target - camera.position).length() / 100.0;
        }
        camera.focal_distance = focal;

        let animation = SeekAnimation::toward(
            camera,
            target,
            focal,
            self.seek_options.duration,
            self.seek_options.easing,
        );
        log::debug!(
            "seek: {} -> {} over {:.2}s",
            animation.start_position,
            animation.end_position,
            animation.duration
        );
        self.seek = Some(animation);

        if self.seek_timer.is_scheduled() {
            self.seek_timer.unschedule();
            self.end_interaction();
        }
        self.seek_timer.schedule(now);
        self.begin_interaction();
    }

    /// Seek animation duration in seconds.
    pub fn set_seek_time(&mut self, seconds: f32) {
        self.seek_options.duration = seconds;
    }

    /// Distance to stop short of the seek target.
    pub fn set_seek_distance(&mut self, distance: f32) {
        self.seek_options.distance = distance;
    }

    /// Interpret the seek distance as a percentage of the distance to the
    /// target (`true`) or as an absolute distance (`false`).
    pub fn set_seek_value_as_percentage(&mut self, on: bool) {
        self.seek_options.distance_as_percentage = on;
    }

    /// Pick radius in pixels used by [`CameraController::seek_to_screen_point`].
    pub fn set_pick_radius(&mut self, radius: f32) {
        self.seek_options.pick_radius = radius;
    }

    /// Current seek settings.
    #[must_use]
    pub fn seek_options(&self) -> &SeekOptions {
        &self.seek_options
    }

    /// Advance time-driven work. Returns `true` if the camera moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.seek_timer.poll(now) {
            return false;
        }
        self.advance_seek(now)
    }

    fn advance_seek(&mut self, now: Instant) -> bool {
        let Some(animation) = self.seek.as_ref() else {
            return false;
        };
        let elapsed = self
            .seek_timer
            .elapsed(now)
            .unwrap_or_default()
            .as_secs_f32();
        let sample =
            animation.sample(elapsed, self.seek_timer.interval().as_secs_f32());

        if let Some(camera) = self.camera.as_mut() {
            camera.position = sample.position;
            camera.orientation = sample.orientation;
        }
        if sample.finished {
            log::debug!("seek finished at {}", sample.position);
            self.set_seek_mode(false);
        }
        true
    }

    // -- Clipping planes ----------------------------------------------------

    /// Reconfigure automatic clipping. See [`ClippingPolicy::new`] for how
    /// `value` is interpreted.
    pub fn set_auto_clipping_strategy(
        &mut self,
        strategy: ClippingStrategy,
        value: f32,
        adjust: Option<ClippingAdjustFn>,
    ) {
        self.clipping.reconfigure(strategy, value);
        self.clipping.set_adjust(adjust);
    }

    /// Enable or disable per-frame clipping-plane fitting.
    pub fn set_auto_clipping(&mut self, enabled: bool) {
        self.auto_clipping = enabled;
    }

    /// `true` when clipping planes are fitted every frame.
    #[must_use]
    pub fn is_auto_clipping(&self) -> bool {
        self.auto_clipping
    }

    /// Active clipping policy.
    #[must_use]
    pub fn clipping_policy(&self) -> &ClippingPolicy {
        &self.clipping
    }

    /// Fit the near and far planes of the active camera around the scene.
    pub fn set_clipping_planes(&mut self, host: &dyn SceneHost) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };

        let bounds = host
            .bounding_box()
            .filter(|b| !b.is_empty())
            .map(|b| {
                let (_, inverse) = host.camera_coordinate_system(camera);
                b.transformed(&(camera.view_matrix() * inverse))
            });

        let Some((near, far)) = compute_clipping_planes(
            camera,
            bounds.as_ref(),
            &self.clipping,
            host.depth_bits(),
        ) else {
            return;
        };

        if near != camera.near_distance {
            camera.near_distance = near;
        }
        if far != camera.far_distance {
            camera.far_distance = far;
        }
    }

    /// Scene bounds in the active camera's local space, for diagnostics.
    #[must_use]
    pub fn camera_space_bounds(&self, host: &dyn SceneHost) -> Option<Aabb> {
        let camera = self.camera.as_ref()?;
        let bounds = host.bounding_box()?;
        let (_, inverse) = host.camera_coordinate_system(camera);
        Some(bounds.transformed(&(camera.view_matrix() * inverse)))
    }

    // -- Per-frame hooks ------------------------------------------------------

    /// Call once before each frame is rendered.
    pub fn pre_render(&mut self, host: &dyn SceneHost) {
        if self.auto_clipping {
            self.set_clipping_planes(host);
        }
    }

    /// Call once after each frame is rendered, with the time rendering
    /// started.
    pub fn post_render(&mut self, frame_start: Instant, now: Instant) -> FrameRate {
        self.frame_timer.end_frame(frame_start, now)
    }

    /// Smoothed draw time and frames per second.
    #[must_use]
    pub fn frames_per_second(&self) -> FrameRate {
        self.frame_timer.rate()
    }

    /// Restart frame statistics.
    pub fn reset_frame_counter(&mut self, now: Instant) {
        self.frame_timer.reset(now);
    }

    // -- Navigation -----------------------------------------------------------

    /// Move the camera in its focal plane by `delta` normalized screen
    /// units, for a viewport of the given aspect ratio.
    pub fn move_camera_screen(&mut self, delta: Vec2, aspect: f32) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        let volume = ViewVolume::new(camera, aspect);
        let pan_plane = volume.plane_at(camera.focal_distance);

        let center = Vec2::splat(0.5);
        let current = pan_plane.intersect(&volume.project_point_to_ray(delta + center));
        let old = pan_plane.intersect(&volume.project_point_to_ray(center));
        if let (Some(current), Some(old)) = (current, old) {
            camera.position -= current - old;
        }
    }

    /// Handle arrow-key navigation. Returns `true` if the event was
    /// consumed.
    pub fn process_key(&mut self, event: KeyEvent, aspect: f32) -> bool {
        if !event.pressed {
            return false;
        }
        let delta = match event.key {
            Key::Left => Vec2::new(-KEY_PAN_STEP, 0.0),
            Key::Up => Vec2::new(0.0, KEY_PAN_STEP),
            Key::Right => Vec2::new(KEY_PAN_STEP, 0.0),
            Key::Down => Vec2::new(0.0, -KEY_PAN_STEP),
            Key::Other => return false,
        };
        self.move_camera_screen(delta, aspect);
        true
    }

    // -- Notifications --------------------------------------------------------

    /// Register a handler for [`ViewerEvent`]s.
    pub fn subscribe(
        &mut self,
        handler: impl FnMut(&ViewerEvent) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(handler)
    }

    /// Remove a handler registered with [`CameraController::subscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Forward a show/hide of the hosting view to subscribers.
    pub fn notify_visibility(&mut self, visible: bool) {
        self.events.emit(ViewerEvent::VisibilityChanged(visible));
    }
}
