//! Core data models for the payroll projection engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contributions;
mod employee;
mod payroll_period;
mod projection;

pub use contributions::{EmployeeContributions, EmployerContributions, SocialSecurityBreakdown};
pub use employee::{MAX_DAILY_SALARY, ProjectionInput, RiskClass};
pub use payroll_period::{
    PERIODS_PER_YEAR, PayrollPeriod, period_dates, period_for_date, period_month,
};
pub use projection::{AnnualIsrData, AnnualProjection, MonthlyNet};
