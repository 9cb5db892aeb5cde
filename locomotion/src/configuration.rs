use std::{collections::HashMap, fs, path::Path, str::FromStr};

use serde_json::Value;

use crate::LocomotionResult;

/// A source of application configuration, looked up by key.
pub trait Configuration {
    /// Get the raw value stored under `key`, if there is one
    fn get(&self, key: &str) -> Option<String>;
}

/// Read `key` from `configuration` and parse it as a `T`.
///
/// Falls back to `default` if the key is absent or its value doesn't parse. The latter is logged,
/// since it usually means someone made a typo in a config file.
pub fn get_enum<T>(configuration: &dyn Configuration, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    let Some(value) = configuration.get(key) else {
        log::debug!("[LOCOMOTION_CONFIG] {key} is not set, using {default}");
        return default;
    };

    match value.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            log::warn!("[LOCOMOTION_CONFIG] Invalid value {value:?} for {key}, using {default}");
            default
        }
    }
}

impl Configuration for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Configuration read from a JSON file containing a single object.
///
/// ```json
/// { "LocomotionMethod": "FootSwing", "Volume": 0.8 }
/// ```
///
/// Strings, numbers and booleans can all be looked up; nested values can't.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    values: serde_json::Map<String, Value>,
}

impl ConfigFile {
    /// Load the configuration file at `path`
    pub fn load(path: impl AsRef<Path>) -> LocomotionResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> LocomotionResult<Self> {
        let values = serde_json::from_str(json)?;
        Ok(Self { values })
    }
}

impl Configuration for ConfigFile {
    fn get(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LocomotionError, LocomotionMode, LOCOMOTION_MODE_KEY};

    #[test]
    fn test_config_file_values() {
        let config =
            ConfigFile::from_json(r#"{"LocomotionMethod": "FootSwing", "Volume": 0.5, "Debug": true, "Nested": {}}"#)
                .unwrap();
        assert_eq!(config.get(LOCOMOTION_MODE_KEY).as_deref(), Some("FootSwing"));
        assert_eq!(config.get("Volume").as_deref(), Some("0.5"));
        assert_eq!(config.get("Debug").as_deref(), Some("true"));
        assert_eq!(config.get("Nested"), None);
        assert_eq!(config.get("Missing"), None);
    }

    #[test]
    fn test_get_enum() {
        let mut config = HashMap::new();
        assert_eq!(
            get_enum(&config, LOCOMOTION_MODE_KEY, LocomotionMode::FootSwing),
            LocomotionMode::FootSwing
        );

        config.insert(LOCOMOTION_MODE_KEY.to_string(), "CVirtualizer".to_string());
        assert_eq!(
            get_enum(&config, LOCOMOTION_MODE_KEY, LocomotionMode::ArmSwing),
            LocomotionMode::ExternalDevice
        );

        config.insert(LOCOMOTION_MODE_KEY.to_string(), "Jetpack".to_string());
        assert_eq!(
            get_enum(&config, LOCOMOTION_MODE_KEY, LocomotionMode::ArmSwing),
            LocomotionMode::ArmSwing
        );
    }

    #[test]
    fn test_invalid_config_file() {
        assert!(matches!(
            ConfigFile::from_json("[1, 2, 3]"),
            Err(LocomotionError::InvalidConfigurationFile(_))
        ));
        let dir = tempfile::TempDir::new().unwrap();
        assert!(matches!(
            ConfigFile::load(dir.path().join("no-such-config.json")),
            Err(LocomotionError::IO(_))
        ));
    }
}
