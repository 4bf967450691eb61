//! Camera system for the 3D viewer.
//!
//! Provides orthographic and perspective cameras, conversion between them,
//! seek (fly-to) animation, automatic clipping-plane placement and screen
//! space panning.

/// Axis-aligned bounding boxes and their transforms.
pub mod bounds;
/// Automatic near/far clipping-plane computation.
pub mod clipping;
/// Camera controller owning the active camera and per-frame state.
pub mod controller;
/// Orthographic ↔ perspective conversion.
pub mod convert;
/// Core camera struct and projection types.
pub mod core;
/// Nesting counter for interactive operations.
pub mod interaction;
/// Seek animation toward a picked point.
pub mod seek;
/// Screen-to-world rays and plane intersection.
pub mod view_volume;
