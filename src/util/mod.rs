//! Shared utilities for the viewer.
//!
//! Easing curves for camera animation and smoothed frame timing.

pub mod easing;
pub mod frame_timing;
