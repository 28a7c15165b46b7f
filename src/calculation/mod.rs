//! Calculation logic for the payroll projection engine.
//!
//! This module contains all the calculation functions for a projection:
//! seniority and statutory benefits, social-security (IMSS) contributions,
//! ISR withholding with the employment subsidy, and the orchestrator that
//! runs the 24 semi-monthly periods and the annual reconciliation.

mod projection;
mod seniority;
mod social_security;
mod withholding;

pub use projection::{
    DAYS_IN_PERIOD, VACATION_BONUS_EXEMPT_UMA, YEAR_END_BONUS_EXEMPT_UMA,
    calculate_payroll_projection, period_base_pay, project, try_calculate_payroll_projection,
};
pub use seniority::{
    VACATION_PREMIUM_RATE, YEAR_END_BONUS_DAYS, effective_seniority, integrated_daily_wage,
    integration_factor, vacation_bonus, vacation_days_for_seniority, year_end_bonus,
};
pub use social_security::{
    CONTRIBUTION_CAP_UMA, EXCESS_THRESHOLD_UMA, capped_contribution_base, compute_contributions,
    excess_contribution_base, unemployment_employer_rate, unemployment_rate_for_multiple,
};
pub use withholding::{Withholding, bracket_tax, compute_annual_tax, compute_withholding};
