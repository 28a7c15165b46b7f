//! Worker profile model and related types.
//!
//! This module defines the [`ProjectionInput`] struct describing the single
//! worker being projected, and the [`RiskClass`] enum of statutory
//! occupational-risk classes.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Largest daily salary the engine projects, in MXN.
///
/// Keeps every annual sum well inside `Decimal` range.
pub const MAX_DAILY_SALARY: Decimal = dec!(1000000000);

/// Statutory occupational-risk classes with their minimum premium.
///
/// Employers with their own experience-rated premium pass that rate
/// directly instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskClass {
    /// Class I, 0.54355 %.
    #[serde(rename = "class_i")]
    ClassI,
    /// Class II, 1.13065 %.
    #[serde(rename = "class_ii")]
    ClassII,
    /// Class III, 2.59840 %.
    #[serde(rename = "class_iii")]
    ClassIII,
    /// Class IV, 4.65325 %.
    #[serde(rename = "class_iv")]
    ClassIV,
    /// Class V, 7.58875 %.
    #[serde(rename = "class_v")]
    ClassV,
}

impl RiskClass {
    /// Every class, lowest risk first.
    pub const ALL: [RiskClass; 5] = [
        RiskClass::ClassI,
        RiskClass::ClassII,
        RiskClass::ClassIII,
        RiskClass::ClassIV,
        RiskClass::ClassV,
    ];

    /// Returns the premium rate for this class as a fraction.
    ///
    /// ```
    /// use nomina_engine::models::RiskClass;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(RiskClass::ClassI.premium_rate(), dec!(0.0054355));
    /// ```
    pub fn premium_rate(self) -> Decimal {
        match self {
            RiskClass::ClassI => dec!(0.0054355),
            RiskClass::ClassII => dec!(0.0113065),
            RiskClass::ClassIII => dec!(0.025984),
            RiskClass::ClassIV => dec!(0.0465325),
            RiskClass::ClassV => dec!(0.0758875),
        }
    }

    /// Returns a short display label such as `Class I (0.54355%)`.
    pub fn label(self) -> String {
        let numeral = match self {
            RiskClass::ClassI => "I",
            RiskClass::ClassII => "II",
            RiskClass::ClassIII => "III",
            RiskClass::ClassIV => "IV",
            RiskClass::ClassV => "V",
        };
        format!(
            "Class {} ({}%)",
            numeral,
            (self.premium_rate() * dec!(100)).normalize()
        )
    }
}

/// The worker and fiscal year being projected.
///
/// # Examples
///
/// ```
/// use nomina_engine::models::{ProjectionInput, RiskClass};
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let input = ProjectionInput {
///     daily_salary: dec!(315.04),
///     hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     risk_premium_rate: RiskClass::ClassI.premium_rate(),
///     fiscal_year: 2026,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Daily salary in MXN (salario diario).
    pub daily_salary: Decimal,
    /// The worker's hire date.
    pub hire_date: NaiveDate,
    /// Employer occupational-risk premium as a fraction.
    pub risk_premium_rate: Decimal,
    /// The fiscal year to project.
    pub fiscal_year: i32,
}

impl ProjectionInput {
    /// Rejects inputs the calculation would otherwise clamp silently.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the daily salary is negative or above
    /// [`MAX_DAILY_SALARY`], the risk
    /// premium is negative or not below 1, or the hire date falls after the
    /// fiscal year.
    pub fn validate(&self) -> EngineResult<()> {
        if self.daily_salary < Decimal::ZERO {
            return Err(Self::reject("daily_salary", "must not be negative"));
        }
        if self.daily_salary > MAX_DAILY_SALARY {
            return Err(Self::reject(
                "daily_salary",
                &format!("must not exceed {}", MAX_DAILY_SALARY),
            ));
        }
        if self.risk_premium_rate < Decimal::ZERO || self.risk_premium_rate >= Decimal::ONE {
            return Err(Self::reject(
                "risk_premium_rate",
                "must be a fraction between 0 and 1",
            ));
        }
        if self.hire_date.year() > self.fiscal_year {
            return Err(Self::reject(
                "hire_date",
                &format!("{} is after fiscal year {}", self.hire_date, self.fiscal_year),
            ));
        }
        Ok(())
    }

    fn reject(field: &str, message: &str) -> EngineError {
        warn!(field, reason = message, "Projection input rejected");
        EngineError::InvalidInput {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
