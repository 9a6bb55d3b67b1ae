use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Tunable parameters of the viewer, fixed for the lifetime of a `ViewManager`
/// except for the viewport size which follows window resizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Multiplier applied to raw cursor deltas before they reach the camera
    pub mouse_sensitivity: f32,
    /// World units per second at a speed multiplier of 1.0
    pub base_speed: f32,
    pub min_speed_multiplier: f32,
    pub max_speed_multiplier: f32,
    /// Speed multiplier change per scroll notch
    pub scroll_step: f32,
    pub near: f32,
    pub far: f32,
    /// Half the width/height of the orthographic view volume
    pub ortho_half_extent: f32,
    /// Let vertical cursor motion nudge the speed multiplier the same way scroll does
    pub cursor_adjusts_speed: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "Fly Camera".to_string(),
            width: 1000,
            height: 800,
            mouse_sensitivity: 2.5,
            base_speed: 5.0,
            min_speed_multiplier: 0.1,
            max_speed_multiplier: 10.0,
            scroll_step: 0.1,
            near: 0.1,
            far: 100.0,
            ortho_half_extent: 10.0,
            cursor_adjusts_speed: false,
        }
    }
}

impl ViewConfig {
    /// Load a JSON config; missing fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Reject values the camera math cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("window size must be non-zero, got {}x{}", self.width, self.height);
        }
        let (min, max) = (self.min_speed_multiplier, self.max_speed_multiplier);
        if !min.is_finite() || !max.is_finite() {
            bail!("speed multiplier bounds must be finite, got [{}, {}]", min, max);
        }
        if min > max {
            bail!("min_speed_multiplier {} exceeds max_speed_multiplier {}", min, max);
        }
        if !(self.near > 0.0) || !(self.near < self.far) {
            bail!("clip planes need 0 < near < far, got near {} far {}", self.near, self.far);
        }
        if !self.ortho_half_extent.is_finite() || self.ortho_half_extent <= 0.0 {
            bail!("ortho_half_extent must be positive, got {}", self.ortho_half_extent);
        }
        if !self.mouse_sensitivity.is_finite() || self.mouse_sensitivity <= 0.0 {
            bail!("mouse_sensitivity must be positive, got {}", self.mouse_sensitivity);
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
