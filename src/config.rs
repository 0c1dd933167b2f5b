use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::granularity;
use crate::model::ViewMode;

/// Width substituted for a missing or malformed pixel width.
pub const DEFAULT_FALLBACK_WIDTH_PX: f64 = 20.0;

/// Tunables for the coordinate engine. The default reproduces the built-in
/// granularity rules exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Per-mode replacement for the minimum bar width.
    pub min_width_overrides: BTreeMap<ViewMode, f64>,
    /// Width used when a caller supplies a NaN or non-positive width.
    pub fallback_width_px: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_width_overrides: BTreeMap::new(),
            fallback_width_px: DEFAULT_FALLBACK_WIDTH_PX,
        }
    }
}

impl EngineConfig {
    /// Minimum rendered bar width for `mode`.
    pub fn min_width(&self, mode: ViewMode) -> f64 {
        self.min_width_overrides
            .get(&mode)
            .copied()
            .unwrap_or_else(|| granularity::min_pixel_width(mode))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (&mode, &value) in &self.min_width_overrides {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidMinWidth { mode, value });
            }
        }
        if !(self.fallback_width_px.is_finite() && self.fallback_width_px > 0.0) {
            return Err(ConfigError::InvalidFallbackWidth(self.fallback_width_px));
        }
        Ok(())
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save a config to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_granularity_rules() {
        let config = EngineConfig::default();
        for mode in ViewMode::ALL {
            assert_eq!(config.min_width(mode), granularity::min_pixel_width(mode));
        }
        assert_eq!(config.fallback_width_px, 20.0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.json");

        let mut config = EngineConfig::default();
        config.min_width_overrides.insert(ViewMode::Quarter, 48.0);
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.min_width(ViewMode::Quarter), 48.0);
        assert_eq!(loaded.min_width(ViewMode::Day), 20.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "min_width_overrides": { "hour": 12.0 } }"#).unwrap();
        assert_eq!(config.min_width(ViewMode::Hour), 12.0);
        assert_eq!(config.fallback_width_px, DEFAULT_FALLBACK_WIDTH_PX);
    }

    #[test]
    fn load_rejects_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "min_width_overrides": { "day": -4.0 } }"#).unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(ConfigError::InvalidMinWidth {
                mode: ViewMode::Day,
                ..
            })
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            EngineConfig::load(&missing),
            Err(ConfigError::Io { .. })
        ));
    }
}
