use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::clipping::ClippingStrategy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Clipping", inline)]
#[serde(default)]
/// Automatic clipping-plane parameters.
pub struct ClippingOptions {
    /// Recompute near/far planes from the scene bounds every frame.
    #[schemars(title = "Auto Clipping")]
    pub auto: bool,
    /// Near-plane floor strategy for perspective cameras.
    #[schemars(title = "Strategy")]
    pub strategy: ClippingStrategy,
    /// Strategy parameter: a distance for the constant strategy, a `[0,1]`
    /// depth-precision trade-off for the variable one.
    #[schemars(title = "Strategy Value", range(min = 0.0))]
    pub value: f32,
}

impl Default for ClippingOptions {
    fn default() -> Self {
        Self {
            auto: true,
            strategy: ClippingStrategy::VariableNearPlane,
            value: 0.6,
        }
    }
}
