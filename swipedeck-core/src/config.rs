//! Combined engine configuration, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutConfig;
use crate::{DeckError, DeckResult, StackConfig};

/// Everything tunable about the engine.
///
/// Missing fields fall back to defaults, so `{}` is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeDeckConfig {
    /// Stack behaviour.
    pub stack: StackConfig,
    /// Layout thresholds.
    pub layout: LayoutConfig,
}

impl SwipeDeckConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(DeckError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidConfig`] if any section is out of range.
    pub fn validate(&self) -> DeckResult<()> {
        self.stack.validate()?;
        let layout = &self.layout;
        if layout.base_width <= 0.0 || layout.base_height <= 0.0 {
            return Err(DeckError::InvalidConfig(
                "base card size must be positive".to_string(),
            ));
        }
        if layout.min_scale > layout.max_scale {
            return Err(DeckError::InvalidConfig(format!(
                "min_scale {} exceeds max_scale {}",
                layout.min_scale, layout.max_scale
            )));
        }
        if layout.min_content_scale > layout.max_content_scale {
            return Err(DeckError::InvalidConfig(format!(
                "min_content_scale {} exceeds max_content_scale {}",
                layout.min_content_scale, layout.max_content_scale
            )));
        }
        if layout.min_margin > layout.max_margin || layout.min_reserved > layout.max_reserved {
            return Err(DeckError::InvalidConfig(
                "margin and reserved bounds must be ordered min <= max".to_string(),
            ));
        }
        Ok(())
    }
}
