// webframe Config Store
// Holds the window initialization record persisted as `window.json`.
// Edits are applied in memory and written back only on `save`.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::platform;
use crate::types::errors::ConfigError;
use crate::types::init_params::InitParams;

pub const CONFIG_FILE_NAME: &str = "window.json";

pub trait ConfigStoreTrait {
    fn load(&mut self) -> Result<InitParams, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn params(&self) -> &InitParams;
    fn replace(&mut self, params: InitParams);
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), ConfigError>;
    fn reset(&mut self);
    fn config_path(&self) -> &str;
}

pub struct ConfigStore {
    config_path: String,
    params: InitParams,
}

impl ConfigStore {
    /// Uses `path_override` when given, else `<config dir>/window.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join(CONFIG_FILE_NAME)
                .to_string_lossy()
                .into_owned()
        });

        Self {
            config_path,
            params: InitParams::default(),
        }
    }

    fn to_object(&self) -> Result<Map<String, Value>, ConfigError> {
        match serde_json::to_value(&self.params) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ConfigError::SerializationError(
                "record did not serialize to an object".to_string(),
            )),
            Err(e) => Err(ConfigError::SerializationError(e.to_string())),
        }
    }
}

impl ConfigStoreTrait for ConfigStore {
    /// A missing file yields defaults; absent fields take their defaults.
    fn load(&mut self) -> Result<InitParams, ConfigError> {
        let path = Path::new(&self.config_path);
        if !path.exists() {
            debug!(path = %self.config_path, "no config file; using defaults");
            self.params = InitParams::default();
            return Ok(self.params.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", self.config_path, e)))?;
        self.params = serde_json::from_str(&content)
            .map_err(|e| ConfigError::SerializationError(format!("{}: {}", self.config_path, e)))?;

        info!(path = %self.config_path, "config loaded");
        Ok(self.params.clone())
    }

    fn save(&self) -> Result<(), ConfigError> {
        let path = Path::new(&self.config_path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::IoError(format!("{}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(&self.params)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", self.config_path, e)))?;

        info!(path = %self.config_path, "config saved");
        Ok(())
    }

    fn params(&self) -> &InitParams {
        &self.params
    }

    fn replace(&mut self, params: InitParams) {
        self.params = params;
    }

    /// Replaces one top-level field. The edited record is deserialized
    /// again, so bounded text and scheme names are checked here as well;
    /// on error the record is left untouched.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut map = self.to_object()?;
        match map.get_mut(key) {
            Some(slot) => *slot = value,
            None => return Err(ConfigError::InvalidKey(key.to_string())),
        }

        self.params = serde_json::from_value(Value::Object(map))
            .map_err(|e| ConfigError::InvalidValue(format!("{}: {}", key, e)))?;
        debug!(key, "config value set");
        Ok(())
    }

    fn reset(&mut self) {
        self.params = InitParams::default();
    }

    fn config_path(&self) -> &str {
        &self.config_path
    }
}

/// Splits a `key=value` assignment. The value is read as JSON when it
/// parses (`zoom=150`, `topmost=true`) and as a plain string otherwise.
pub fn parse_assignment(assignment: &str) -> Result<(String, Value), ConfigError> {
    let (key, raw) = assignment
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidKey(format!("expected key=value, got {:?}", assignment)))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::InvalidKey(format!("empty key in {:?}", assignment)));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
