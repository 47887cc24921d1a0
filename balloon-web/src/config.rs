use serde::Deserialize;

pub const CONFIG_ENV_VAR: &str = "BALLOON_SCENE_CONFIG";

/// Tunables for the demo scene. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub max_altitude: i32,
    pub climb_step: i32,
    pub descend_step: i32,
    pub initial_color: String,
    pub initial_direction: String,
    pub initial_altitude: i32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_altitude: 300,
            climb_step: 10,
            descend_step: 10,
            initial_color: "red".to_string(),
            initial_direction: "North".to_string(),
            initial_altitude: 0,
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads the file named by `BALLOON_SCENE_CONFIG`, if set. Any failure is
    /// logged and the defaults are used.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json_str(&json) {
                Ok(config) => {
                    tracing::info!(%path, "loaded scene config");
                    config
                }
                Err(err) => {
                    tracing::warn!(%path, %err, "invalid scene config, using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                tracing::warn!(%path, %err, "cannot read scene config, using defaults");
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SceneConfig::from_json_str(r#"{"max_altitude": 120, "initial_color": "Blue"}"#)
            .unwrap();
        assert_eq!(config.max_altitude, 120);
        assert_eq!(config.initial_color, "Blue");
        assert_eq!(config.climb_step, 10);
        assert_eq!(config.initial_direction, "North");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SceneConfig::from_json_str("{\"max_altitude\": \"high\"}").is_err());
        assert!(SceneConfig::from_json_str("not json").is_err());
    }
}
