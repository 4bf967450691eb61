// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera subsystem of an interactive 3D model viewer.
//!
//! `fdview` owns the viewer's active camera and keeps it usable while the
//! user works with the scene: it converts between orthographic and
//! perspective projections, flies the camera toward picked points, fits
//! the near and far clipping planes around the scene every frame and
//! tracks the frame rate.
//!
//! # Key entry points
//!
//! - [`camera::controller::CameraController`] - the camera controller
//! - [`scene::SceneHost`] - scene queries the host application answers
//! - [`options::ViewerOptions`] - runtime configuration (camera, seek,
//!   clipping) with TOML presets
//! - [`events::ViewerEvent`] - notifications for interaction and visibility
//!
//! # Driving the controller
//!
//! The controller owns no thread and no window. The host calls
//! [`camera::controller::CameraController::tick`] from its event loop to
//! advance seek animations,
//! [`camera::controller::CameraController::pre_render`] before drawing and
//! [`camera::controller::CameraController::post_render`] after.

pub mod camera;
pub mod error;
pub mod events;
pub mod input;
pub mod options;
pub mod scene;
pub mod timer;
pub mod util;

pub use camera::controller::CameraController;
pub use camera::core::{Camera, Projection, ProjectionKind};
pub use error::ViewerError;
