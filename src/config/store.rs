//! Fiscal-year selection over a set of year configurations.

use std::sync::LazyLock;

use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::builtin;
use super::types::YearlyConfig;

static BUILTIN: LazyLock<ConfigStore> = LazyLock::new(|| ConfigStore {
    configs: builtin::all(),
});

/// An immutable, non-empty set of year configurations.
///
/// The earliest year is the baseline: asking for a year the store does not
/// hold returns the baseline instead of failing.
///
/// # Example
///
/// ```
/// use nomina_engine::config::ConfigStore;
///
/// let store = ConfigStore::builtin();
/// assert_eq!(store.get(2026).year, 2026);
/// assert_eq!(store.get(1999).year, 2025);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Sorted oldest first; never empty.
    configs: Vec<YearlyConfig>,
}

impl ConfigStore {
    /// Builds a store from a set of year configurations.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the set is empty, a year appears twice, or
    /// any configuration fails [`YearlyConfig::validate`].
    pub fn new(configs: Vec<YearlyConfig>) -> EngineResult<Self> {
        let mut configs = configs;
        configs.sort_by_key(|config| config.year);

        if configs.is_empty() {
            return Err(EngineError::InvalidConfig {
                year: 0,
                message: "at least one fiscal year is required".to_string(),
            });
        }

        for config in &configs {
            config.validate()?;
        }

        if let Some(pair) = configs.windows(2).find(|pair| pair[0].year == pair[1].year) {
            return Err(EngineError::InvalidConfig {
                year: pair[0].year,
                message: "fiscal year is configured more than once".to_string(),
            });
        }

        Ok(Self { configs })
    }

    /// Returns the compiled-in store holding every supported fiscal year.
    ///
    /// Built on first use and shared for the rest of the process.
    pub fn builtin() -> &'static ConfigStore {
        &BUILTIN
    }

    /// Returns the configuration for a fiscal year, falling back to the
    /// baseline year when the year is not configured.
    pub fn get(&self, year: i32) -> &YearlyConfig {
        match self.configs.iter().find(|config| config.year == year) {
            Some(config) => config,
            None => {
                let baseline = self.baseline();
                warn!(
                    requested_year = year,
                    baseline_year = baseline.year,
                    "Fiscal year not configured, using baseline"
                );
                baseline
            }
        }
    }

    /// Returns `true` if the store holds this exact fiscal year.
    pub fn contains(&self, year: i32) -> bool {
        self.configs.iter().any(|config| config.year == year)
    }

    /// Returns the earliest configured year.
    pub fn baseline(&self) -> &YearlyConfig {
        &self.configs[0]
    }

    /// Returns the configured fiscal years, oldest first.
    pub fn years(&self) -> Vec<i32> {
        self.configs.iter().map(|config| config.year).collect()
    }
}

/// Returns the compiled-in configuration for a fiscal year.
///
/// Unknown years return the 2025 baseline.
pub fn get_yearly_config(year: i32) -> &'static YearlyConfig {
    ConfigStore::builtin().get(year)
}
