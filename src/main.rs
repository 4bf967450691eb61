//! Headless driver for the camera controller.
//!
//! Loads an optional TOML preset, builds a synthetic box scene, flies the
//! camera to its center, fits the clipping planes and logs the resulting
//! camera state and frame statistics.
//!
//! ```text
//! RUST_LOG=debug fdview [preset.toml]
//! ```

use std::path::Path;

use fdview::camera::bounds::Aabb;
use fdview::input::{Key, KeyEvent};
use fdview::options::ViewerOptions;
use fdview::scene::{CameraSlot, SceneHost};
use fdview::{Camera, CameraController, ViewerError};
use glam::{Vec2, Vec3};
use web_time::{Duration, Instant};

/// A scene holding one axis-aligned box and one camera node.
struct BoxScene {
    bounds: Aabb,
    camera_node: Option<Camera>,
}

impl SceneHost for BoxScene {
    fn pick_point(&self, _screen: Vec2, _radius: f32) -> Option<Vec3> {
        Some(self.bounds.center())
    }

    fn bounding_box(&self) -> Option<Aabb> {
        Some(self.bounds)
    }

    fn find_first_camera(&self) -> Option<CameraSlot> {
        self.camera_node.as_ref().map(|_| CameraSlot(0))
    }

    fn replace_camera(&mut self, _slot: CameraSlot, camera: &Camera) {
        self.camera_node = Some(camera.clone());
    }
}

fn log_camera(label: &str, camera: &Camera) {
    log::info!(
        "{label}: {:?} at {} looking {} (near {:.3}, far {:.3}, focal {:.3})",
        camera.kind(),
        camera.position,
        camera.view_direction(),
        camera.near_distance,
        camera.far_distance,
        camera.focal_distance,
    );
}

fn run(options: &ViewerOptions) -> Result<(), ViewerError> {
    let start = Instant::now();
    let mut ctl = CameraController::new(options, start);
    let _ = ctl.subscribe(|event| log::info!("event: {event:?}"));

    let mut scene = BoxScene {
        bounds: Aabb::new(Vec3::new(-2.0, -1.0, -12.0), Vec3::new(2.0, 1.0, -8.0)),
        camera_node: ctl.camera().cloned(),
    };
    ctl.save_home_position();
    log_camera("start", ctl.camera().ok_or(ViewerError::NoCamera)?);

    let _ = ctl.seek_to_screen_point(&scene, Vec2::new(320.0, 240.0), start);
    let tick = Duration::from_millis(options.seek.tick_interval_ms.max(1));
    let mut now = start;
    while ctl.is_seeking() {
        let frame_start = now;
        now += tick;
        let _ = ctl.tick(now);
        ctl.pre_render(&scene);
        let _ = ctl.post_render(frame_start, now);
    }
    log_camera("after seek", ctl.camera().ok_or(ViewerError::NoCamera)?);
    log::info!("frame rate: {}", ctl.frames_per_second());

    let _ = ctl.process_key(KeyEvent::press(Key::Left), 4.0 / 3.0);
    let _ = ctl.toggle_camera_type(&mut scene);
    ctl.pre_render(&scene);
    log_camera("toggled", ctl.camera().ok_or(ViewerError::NoCamera)?);

    let _ = ctl.reset_to_home_position();
    log_camera("home", ctl.camera().ok_or(ViewerError::NoCamera)?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => match ViewerOptions::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => ViewerOptions::default(),
    };

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
