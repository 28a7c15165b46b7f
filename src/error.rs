//! Error types for the payroll projection engine.
//!
//! Calculations themselves never fail: they clamp and fall back. Errors only
//! arise at the edges of the crate, when loading year configuration from disk,
//! validating caller input, or writing an export.

use thiserror::Error;

/// The main error type for the payroll projection engine.
///
/// # Example
///
/// ```
/// use nomina_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "daily_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert!(error.to_string().contains("daily_salary"));
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A year file or the directory holding them does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The missing path.
        path: String,
    },

    /// A year file is not valid YAML or is missing a field.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The offending file.
        path: String,
        /// The deserializer's message.
        message: String,
    },

    /// A year configuration parsed but breaks a table invariant.
    #[error("Invalid configuration for fiscal year {year}: {message}")]
    InvalidConfig {
        /// The fiscal year of the offending configuration.
        year: i32,
        /// A description of the violated invariant.
        message: String,
    },

    /// A projection input was rejected by validation.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Writing an export failed.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the underlying failure.
        message: String,
    },
}

/// Result alias used at the crate's fallible edges.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::Export {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Export {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "config/years".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration file not found: config/years");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "config/years/2027.yaml".to_string(),
            message: "missing field `brackets`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file 'config/years/2027.yaml': missing field `brackets`"
        );
    }

    #[test]
    fn test_invalid_config_displays_year_and_message() {
        let error = EngineError::InvalidConfig {
            year: 2026,
            message: "monthly bracket bounds must increase".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration for fiscal year 2026: monthly bracket bounds must increase"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "daily_salary".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'daily_salary': must not be negative"
        );
    }

    #[test]
    fn test_export_error_displays_message() {
        let error = EngineError::Export {
            message: "broken pipe".to_string(),
        };
        assert_eq!(error.to_string(), "Export failed: broken pipe");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_serde_json_error_converts_to_export() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let converted: EngineError = err.into();
        assert!(matches!(converted, EngineError::Export { .. }));
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidInput {
                field: "hire_date".to_string(),
                message: "after fiscal year".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
