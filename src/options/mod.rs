//! Centralized viewer options with TOML preset support.
//!
//! Camera, seek and clipping settings are consolidated here. Options
//! serialize to/from TOML for view presets.

mod camera;
mod clipping;
mod seek;

use std::path::Path;

pub use camera::CameraOptions;
pub use clipping::ClippingOptions;
use schemars::JsonSchema;
pub use seek::SeekOptions;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[seek]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct ViewerOptions {
    /// Startup camera parameters.
    pub camera: CameraOptions,
    /// Seek animation parameters.
    pub seek: SeekOptions,
    /// Automatic clipping-plane parameters.
    pub clipping: ClippingOptions,
}

impl ViewerOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ViewerOptions)
    }

    /// Set one field, addressed as `section.field`, from a JSON value. Used
    /// by settings panels that edit options generically.
    pub fn set_field(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), ViewerError> {
        let mut root = serde_json::to_value(&*self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        let Some(slot) = root.get_mut(section).and_then(|s| s.get_mut(field))
        else {
            return Err(ViewerError::OptionsParse(format!(
                "unknown option {section}.{field}"
            )));
        };
        *slot = value;
        *self = serde_json::from_value(root)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
