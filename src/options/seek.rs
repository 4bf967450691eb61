use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Seek", inline)]
#[serde(default)]
/// Seek-to-point animation parameters.
pub struct SeekOptions {
    /// Duration of a seek animation in seconds.
    #[schemars(title = "Seek Time", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub duration: f32,
    /// Distance to stop short of the target, absolute or in percent of the
    /// current distance (see `distance_as_percentage`).
    #[schemars(title = "Seek Distance", range(min = 0.0))]
    pub distance: f32,
    /// Interpret `distance` as a percentage of the distance to the target.
    #[schemars(title = "Distance as Percentage")]
    pub distance_as_percentage: bool,
    /// Pick radius in pixels for seek-to-screen-point.
    #[schemars(title = "Pick Radius", range(min = 0.0, max = 50.0), extend("step" = 1.0))]
    pub pick_radius: f32,
    /// Animation timer interval in milliseconds.
    #[schemars(skip)]
    pub tick_interval_ms: u64,
    /// Temporal remap of the animation.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for SeekOptions {
    fn default() -> Self {
        Self {
            duration: 2.0,
            distance: 50.0,
            distance_as_percentage: true,
            pick_radius: 5.0,
            tick_interval_ms: 33,
            easing: EasingFunction::CosineInOut,
        }
    }
}
