//! Annual projection models.
//!
//! This module contains the [`AnnualProjection`] type returned by the
//! orchestrator and the year-end ISR reconciliation it carries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayrollPeriod, period_month};

/// Year-end ISR reconciliation (ajuste anual).
///
/// # Example
///
/// ```
/// use nomina_engine::models::AnnualIsrData;
/// use rust_decimal_macros::dec;
///
/// let data = AnnualIsrData {
///     total_taxable_income: dec!(120000),
///     gross_annual_tax: dec!(9500),
///     total_subsidy: dec!(0),
///     annual_tax: dec!(9500),
///     total_withheld: dec!(9800),
///     adjustment: dec!(-300),
/// };
/// assert!(data.is_refund());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualIsrData {
    /// Sum of every period's taxable income.
    pub total_taxable_income: Decimal,
    /// Tax from the annual table before subsidy.
    pub gross_annual_tax: Decimal,
    /// Sum of every period's subsidy.
    pub total_subsidy: Decimal,
    /// Annual tax net of subsidy, floored at zero.
    pub annual_tax: Decimal,
    /// Sum of every period's withheld tax.
    pub total_withheld: Decimal,
    /// `annual_tax - total_withheld`: positive is still owed by the
    /// employee, negative is a refund due to the employee.
    pub adjustment: Decimal,
}

impl AnnualIsrData {
    /// Returns `true` if more was withheld than is owed.
    pub fn is_refund(&self) -> bool {
        self.adjustment < Decimal::ZERO
    }
}

/// Net pay for one calendar month (two consecutive periods).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyNet {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Period numbers that fall in this month.
    pub periods: Vec<u32>,
    /// Sum of their net pay.
    pub net_pay: Decimal,
}

/// The complete annual payroll projection for one worker.
///
/// Produced once per call; callers read it and never modify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualProjection {
    /// The requested fiscal year; drives seniority and period dates.
    pub fiscal_year: i32,
    /// Year of the configuration actually applied. Differs from
    /// `fiscal_year` when the requested year has no configuration and the
    /// baseline was used instead.
    pub config_year: i32,
    /// The 24 periods in order.
    pub periods: Vec<PayrollPeriod>,
    /// Sum of net pay across all periods.
    pub total_net: Decimal,
    /// Sum of employer cost across all periods.
    pub total_employer_cost: Decimal,
    /// Integrated daily wage at `seniority_years`.
    pub integrated_daily_wage: Decimal,
    /// The input daily salary.
    pub daily_salary: Decimal,
    /// Labor seniority for the fiscal year: `fiscal_year - hire_year + 1`.
    pub seniority_years: i32,
    /// Completed years at the start of the fiscal year:
    /// `fiscal_year - hire_year`, floored at zero.
    pub service_years_at_year_start: i32,
    /// Vacation days at `seniority_years`.
    pub vacation_days: u32,
    /// Integration factor at `seniority_years`.
    pub integration_factor: Decimal,
    /// Year-end ISR reconciliation.
    pub annual_isr: AnnualIsrData,
}

impl AnnualProjection {
    /// Groups net pay by calendar month.
    ///
    /// Always returns twelve entries, January first.
    pub fn monthly_net(&self) -> Vec<MonthlyNet> {
        (1..=12)
            .map(|month| {
                let in_month: Vec<&PayrollPeriod> = self
                    .periods
                    .iter()
                    .filter(|p| period_month(p.period_number) == month)
                    .collect();

                MonthlyNet {
                    month,
                    periods: in_month.iter().map(|p| p.period_number).collect(),
                    net_pay: in_month.iter().map(|p| p.net_pay).sum(),
                }
            })
            .collect()
    }

    /// Returns the period paying the vacation bonus, if any falls in the
    /// year.
    pub fn vacation_bonus_period(&self) -> Option<&PayrollPeriod> {
        self.periods.iter().find(|p| p.is_vacation_bonus)
    }

    /// Returns the sum of gross pay across all periods.
    pub fn total_gross(&self) -> Decimal {
        self.periods.iter().map(|p| p.gross_pay).sum()
    }
}
