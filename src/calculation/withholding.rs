//! Income tax (ISR) withholding and annual tax calculations.
//!
//! Semi-monthly withholding is computed by projecting the period's taxable
//! income to a monthly equivalent, applying the monthly bracket table and
//! halving the result. The employment subsidy is granted on the same
//! monthly-equivalent test and halved the same way.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::{BracketRow, YearlyConfig};

/// Semi-monthly periods in one month.
const PERIODS_PER_MONTH: Decimal = dec!(2);

/// The result of the per-period withholding calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withholding {
    /// ISR due for the period before subsidy.
    pub tax_due: Decimal,
    /// Employment subsidy credited against the tax for the period.
    pub subsidy_applied: Decimal,
}

impl Withholding {
    /// A withholding with no tax and no subsidy.
    pub const NONE: Withholding = Withholding {
        tax_due: Decimal::ZERO,
        subsidy_applied: Decimal::ZERO,
    };

    /// Tax actually withheld: tax due less subsidy, never negative.
    ///
    /// The subsidy is a credit only; any excess is not paid out.
    pub fn tax_withheld(&self) -> Decimal {
        (self.tax_due - self.subsidy_applied).max(Decimal::ZERO)
    }
}

/// Applies a progressive bracket table to an income.
///
/// The row with the greatest lower bound not above the income applies.
/// Zero or negative income, or income below the first row, owes nothing.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::bracket_tax;
/// use nomina_engine::config::get_yearly_config;
/// use rust_decimal_macros::dec;
///
/// let monthly = &get_yearly_config(2025).brackets.monthly;
/// assert_eq!(bracket_tax(monthly, dec!(12935.83)), dec!(1182.88));
/// assert_eq!(bracket_tax(monthly, dec!(0)), dec!(0));
/// ```
pub fn bracket_tax(table: &[BracketRow], income: Decimal) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    table
        .iter()
        .rfind(|row| row.lower_bound <= income)
        .map(|row| row.tax_for(income))
        .unwrap_or(Decimal::ZERO)
}

/// Computes ISR and employment subsidy for one semi-monthly period.
///
/// The minimum-wage exemption is not applied here; the caller zeroes both
/// figures for minimum-wage workers.
pub fn compute_withholding(
    taxable_income: Decimal,
    config: &YearlyConfig,
    is_january: bool,
) -> Withholding {
    if taxable_income <= Decimal::ZERO {
        return Withholding::NONE;
    }

    let monthly_equivalent = taxable_income * PERIODS_PER_MONTH;
    let tax_due = bracket_tax(&config.brackets.monthly, monthly_equivalent) / PERIODS_PER_MONTH;

    let subsidy_applied = if monthly_equivalent <= config.subsidy_monthly_ceiling {
        config.subsidy_amount(is_january) / PERIODS_PER_MONTH
    } else {
        Decimal::ZERO
    };

    Withholding {
        tax_due,
        subsidy_applied,
    }
}

/// Computes annual ISR on the accumulated taxable income, before subsidy.
pub fn compute_annual_tax(total_taxable_income: Decimal, config: &YearlyConfig) -> Decimal {
    bracket_tax(&config.brackets.annual, total_taxable_income)
}
