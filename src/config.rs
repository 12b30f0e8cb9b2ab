// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Serialize error: {0}")]
    SerializeError(String),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub validate_input: bool,
    pub validate_output: bool,
    /// Most nested strides one object may carry. Each level peels one
    /// distinct stride, so well-formed input with more nested strides than
    /// this fails with `DepthExceeded` even though it has a valid shape.
    pub max_depth: usize,
    pub parallel: bool,
    /// Size of the pool `TypeInference::new` builds for batches.
    pub max_threads: usize,
    pub min_parallel_batch: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            validate_input: true,
            validate_output: false,
            max_depth: 64,
            parallel: true,
            max_threads: num_cpus::get(),
            min_parallel_batch: 16,
        }
    }
}

impl InferenceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validate_input(mut self, enabled: bool) -> Self {
        self.validate_input = enabled;
        self
    }

    pub fn with_validate_output(mut self, enabled: bool) -> Self {
        self.validate_output = enabled;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    pub fn with_min_parallel_batch(mut self, size: usize) -> Self {
        self.min_parallel_batch = size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue("max_depth must be greater than 0".to_string()));
        }
        if self.max_threads == 0 {
            return Err(ConfigError::InvalidValue("max_threads must be greater than 0".to_string()));
        }
        if self.min_parallel_batch == 0 {
            return Err(ConfigError::InvalidValue("min_parallel_batch must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case("json") {
            return Err(ConfigError::UnsupportedFormat(ext.to_string()));
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = self.to_json()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
            }
        }

        fs::write(path, contents).map_err(|e| ConfigError::IoError(e.to_string()))
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Falling back to default inference config: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = InferenceConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.validate_input);
        assert!(!config.validate_output);
        assert!(config.max_threads >= 1);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(InferenceConfig::new().with_max_depth(0).validate().is_err());
        assert!(InferenceConfig::new().with_max_threads(0).validate().is_err());
        assert!(matches!(
            InferenceConfig::new().with_min_parallel_batch(0).validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = InferenceConfig::from_json(r#"{ "max_depth": 8, "parallel": false }"#).unwrap();
        assert_eq!(config.max_depth, 8);
        assert!(!config.parallel);
        assert!(config.validate_input);
        assert_eq!(config.min_parallel_batch, 16);
    }

    #[test]
    fn test_json_round_trip() {
        let config = InferenceConfig::new().with_validate_output(true).with_max_threads(2);
        let restored = InferenceConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_load_missing_and_unsupported() {
        let dir = std::env::temp_dir().join(format!("struct-recovery-config-{}", std::process::id()));
        let missing = dir.join("missing.json");
        assert!(matches!(InferenceConfig::load(&missing), Err(ConfigError::NotFound(_))));
        assert_eq!(InferenceConfig::load_or_default(&missing), InferenceConfig::default());

        let saved = dir.join("inference.json");
        let config = InferenceConfig::new().with_max_depth(5);
        config.save(&saved).unwrap();
        assert_eq!(InferenceConfig::load(&saved).unwrap(), config);

        let toml = dir.join("inference.toml");
        fs::write(&toml, "max_depth = 5").unwrap();
        assert!(matches!(InferenceConfig::load(&toml), Err(ConfigError::UnsupportedFormat(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
