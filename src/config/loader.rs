//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fiscal-year
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::store::ConfigStore;
use super::types::YearlyConfig;

/// Loads year configurations from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/years/
/// ├── 2025.yaml
/// └── 2026.yaml
/// ```
///
/// Every `*.yaml` file in the directory is one [`YearlyConfig`]. File names
/// are not interpreted; the `year` field inside each file is authoritative.
///
/// # Example
///
/// ```no_run
/// use nomina_engine::config::ConfigLoader;
///
/// let store = ConfigLoader::load("./config/years")?;
/// println!("Loaded fiscal years: {:?}", store.years());
/// # Ok::<(), nomina_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads every year configuration found in `path` into a store.
    ///
    /// # Returns
    ///
    /// Returns a [`ConfigStore`] on success, or an error if:
    /// - The directory is missing or holds no YAML files (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - Any configuration breaks a table invariant (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<ConfigStore> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.is_dir() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut configs = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                configs.push(Self::load_year(&path)?);
            }
        }

        if configs.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no year files found)", dir_str),
            });
        }

        ConfigStore::new(configs)
    }

    /// Loads and parses a single year file.
    pub fn load_year<P: AsRef<Path>>(path: P) -> EngineResult<YearlyConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_year(&content).map_err(|message| EngineError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    fn parse_year(content: &str) -> Result<YearlyConfig, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin;

    fn config_path() -> &'static str {
        "./config/years"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let store = result.unwrap();
        assert_eq!(store.years(), vec![2025, 2026]);
    }

    #[test]
    fn test_shipped_yaml_matches_builtin_2025() {
        let loaded = ConfigLoader::load_year("./config/years/2025.yaml").unwrap();
        assert_eq!(loaded, builtin::fiscal_year_2025());
    }

    #[test]
    fn test_shipped_yaml_matches_builtin_2026() {
        let loaded = ConfigLoader::load_year("./config/years/2026.yaml").unwrap();
        assert_eq!(loaded, builtin::fiscal_year_2026());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("/nonexistent/path"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load_year("./config/years/1999.yaml") {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("1999.yaml")),
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_field_reports_field() {
        let message = ConfigLoader::parse_year("year: 2030\numa_daily: \"120.00\"\n").unwrap_err();
        assert!(message.contains("missing field"));
    }

    #[test]
    fn test_parse_round_trips_builtin() {
        let yaml = serde_yaml::to_string(&builtin::fiscal_year_2026()).unwrap();
        let parsed = ConfigLoader::parse_year(&yaml).unwrap();
        assert_eq!(parsed, builtin::fiscal_year_2026());
    }
}
