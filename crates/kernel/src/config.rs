use std::path::Path;

use serde::{Deserialize, Serialize};
use sidescroll_camera::CameraConfig;
use sidescroll_common::{ConfigError, check_non_negative};

use crate::controller::PlayerTuning;

/// All tunables for one simulation session. Every field has a default, so a
/// config file only needs the values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub player: PlayerTuning,
    pub camera: CameraConfig,
    /// Downward acceleration per tick applied by the physics oracle.
    pub gravity: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            player: PlayerTuning::default(),
            camera: CameraConfig::default(),
            gravity: 0.5,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate()?;
        self.camera.validate()?;
        check_non_negative("gravity", self.gravity)?;
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_demo_values() {
        let c = SimConfig::default();
        assert_eq!(c.player.base_speed, 5.0);
        assert_eq!(c.player.sprint_speed, 10.0);
        assert_eq!(c.player.jump_speed, 10.0);
        assert_eq!(c.gravity, 0.5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let c = SimConfig::from_json_str(r#"{ "player": { "sprint_speed": 14.0 } }"#).unwrap();
        assert_eq!(c.player.sprint_speed, 14.0);
        assert_eq!(c.player.base_speed, 5.0);
        assert_eq!(c.camera, CameraConfig::default());
    }

    #[test]
    fn rejects_invalid_values() {
        let err = SimConfig::from_json_str(r#"{ "gravity": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Negative { field: "gravity", .. }));

        let err = SimConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn json_roundtrip_through_file() {
        let mut config = SimConfig::default();
        config.camera.dead_zone.x = 150.0;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let loaded = SimConfig::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SimConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
