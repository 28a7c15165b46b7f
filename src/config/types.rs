//! Configuration types for a fiscal year.
//!
//! This module contains the strongly-typed structures describing one fiscal
//! year's published figures. They are deserialized from YAML files by the
//! loader or built from the compiled-in constants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Tolerance applied when comparing a daily salary against the general
/// minimum wage.
pub const MINIMUM_WAGE_TOLERANCE: Decimal = dec!(0.01);

/// A single row of a progressive ISR bracket table.
///
/// Tax for an income inside this row is
/// `fixed_quota + (income - lower_bound) * marginal_rate`.
///
/// # Example
///
/// ```
/// use nomina_engine::config::BracketRow;
/// use rust_decimal_macros::dec;
///
/// let row = BracketRow::new(dec!(746.05), dec!(14.32), dec!(0.064));
/// assert_eq!(row.tax_for(dec!(1746.05)), dec!(78.32));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketRow {
    /// The lowest income this row applies to (inclusive).
    pub lower_bound: Decimal,
    /// The fixed tax owed at the lower bound.
    pub fixed_quota: Decimal,
    /// The marginal rate applied to income above the lower bound.
    pub marginal_rate: Decimal,
}

impl BracketRow {
    /// Creates a bracket row.
    pub const fn new(lower_bound: Decimal, fixed_quota: Decimal, marginal_rate: Decimal) -> Self {
        Self {
            lower_bound,
            fixed_quota,
            marginal_rate,
        }
    }

    /// Returns the tax owed for an income that falls inside this row.
    pub fn tax_for(&self, income: Decimal) -> Decimal {
        self.fixed_quota + (income - self.lower_bound) * self.marginal_rate
    }
}

/// The three ISR tables published for a fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTables {
    /// Semi-monthly (quincenal) table.
    pub semi_monthly: Vec<BracketRow>,
    /// Monthly table, used for per-period withholding.
    pub monthly: Vec<BracketRow>,
    /// Annual table, used for the year-end reconciliation.
    pub annual: Vec<BracketRow>,
}

/// One step of the employer unemployment/old-age rate schedule.
///
/// A step with `up_to_uma_multiple: None` is open-ended and must be last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnemploymentRateStep {
    /// Upper bound (inclusive) of the contribution base in UMA multiples.
    #[serde(default)]
    pub up_to_uma_multiple: Option<Decimal>,
    /// The employer rate for bases inside this step.
    pub rate: Decimal,
}

/// The progressive employer rate schedule for unemployment and old age
/// (cesantía en edad avanzada y vejez).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnemploymentSchedule {
    /// Flat rate for a base at or below one general minimum wage.
    pub minimum_wage_rate: Decimal,
    /// Ascending steps keyed on the base expressed in UMA multiples.
    pub steps: Vec<UnemploymentRateStep>,
}

/// The complete set of published figures for one fiscal year.
///
/// Values are immutable once built; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyConfig {
    /// The fiscal year these figures apply to.
    pub year: i32,
    /// Daily value of the UMA.
    pub uma_daily: Decimal,
    /// UMA applied in January when the new value is published late.
    #[serde(default)]
    pub uma_daily_january: Option<Decimal>,
    /// General daily minimum wage.
    pub minimum_wage_general: Decimal,
    /// Daily minimum wage in the northern border zone.
    pub minimum_wage_border: Decimal,
    /// Local payroll tax (ISN) rate.
    pub local_tax_rate: Decimal,
    /// Monthly income ceiling for the employment subsidy.
    pub subsidy_monthly_ceiling: Decimal,
    /// Monthly employment subsidy (February to December, or the whole year).
    pub subsidy_monthly_amount: Decimal,
    /// Monthly employment subsidy for January, when it differs.
    #[serde(default)]
    pub subsidy_monthly_amount_january: Option<Decimal>,
    /// Employer unemployment/old-age rate schedule.
    pub unemployment_employer: UnemploymentSchedule,
    /// ISR bracket tables.
    pub brackets: BracketTables,
}

impl YearlyConfig {
    /// Returns the UMA in force for a period.
    pub fn reference_unit(&self, is_january: bool) -> Decimal {
        match (is_january, self.uma_daily_january) {
            (true, Some(january)) => january,
            _ => self.uma_daily,
        }
    }

    /// Returns the January UMA override, if this year has one and the period
    /// is in January.
    pub fn reference_unit_override(&self, is_january: bool) -> Option<Decimal> {
        if is_january {
            self.uma_daily_january
        } else {
            None
        }
    }

    /// Returns the monthly employment subsidy in force for a period.
    pub fn subsidy_amount(&self, is_january: bool) -> Decimal {
        match (is_january, self.subsidy_monthly_amount_january) {
            (true, Some(january)) => january,
            _ => self.subsidy_monthly_amount,
        }
    }

    /// Returns `true` when a daily salary counts as the general minimum wage.
    ///
    /// ```
    /// use nomina_engine::config::get_yearly_config;
    /// use rust_decimal_macros::dec;
    ///
    /// let config = get_yearly_config(2025);
    /// assert!(config.is_minimum_wage(dec!(278.81)));
    /// assert!(!config.is_minimum_wage(dec!(278.82)));
    /// ```
    pub fn is_minimum_wage(&self, daily_salary: Decimal) -> bool {
        daily_salary <= self.minimum_wage_general + MINIMUM_WAGE_TOLERANCE
    }

    /// Checks the structural invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when a reference value is not positive, a
    /// bracket table is empty or not strictly increasing, or the
    /// unemployment schedule does not end in an open-ended step.
    pub fn validate(&self) -> EngineResult<()> {
        if self.uma_daily <= Decimal::ZERO {
            return Err(self.invalid("uma_daily must be positive"));
        }
        if self.uma_daily_january.is_some_and(|uma| uma <= Decimal::ZERO) {
            return Err(self.invalid("uma_daily_january must be positive"));
        }
        if self.minimum_wage_general <= Decimal::ZERO {
            return Err(self.invalid("minimum_wage_general must be positive"));
        }

        for (name, table) in [
            ("semi_monthly", &self.brackets.semi_monthly),
            ("monthly", &self.brackets.monthly),
            ("annual", &self.brackets.annual),
        ] {
            if table.is_empty() {
                return Err(self.invalid(&format!("{} bracket table is empty", name)));
            }
            if table
                .windows(2)
                .any(|pair| pair[1].lower_bound <= pair[0].lower_bound)
            {
                return Err(self.invalid(&format!(
                    "{} bracket lower bounds must be strictly increasing",
                    name
                )));
            }
        }

        let steps = &self.unemployment_employer.steps;
        match steps.last() {
            Some(last) if last.up_to_uma_multiple.is_none() => {}
            _ => {
                return Err(self.invalid(
                    "unemployment schedule must end with an open-ended step",
                ));
            }
        }
        let bounded: Vec<Decimal> = steps
            .iter()
            .filter_map(|step| step.up_to_uma_multiple)
            .collect();
        if bounded.len() != steps.len() - 1 || bounded.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(self.invalid(
                "unemployment schedule bounds must increase and end in one open-ended step",
            ));
        }

        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidConfig {
            year: self.year,
            message: message.to_string(),
        }
    }
}
