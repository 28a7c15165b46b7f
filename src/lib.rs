//! Payroll Projection Engine for Mexican Salaried Employees
//!
//! This crate projects a full fiscal year of semi-monthly payroll for one
//! worker: gross pay with statutory bonuses, ISR withholding with the
//! employment subsidy, IMSS and housing-fund contributions, local payroll tax,
//! employer cost and the year-end ISR reconciliation.
//!
//! # Example
//!
//! ```
//! use nomina_engine::calculation::calculate_payroll_projection;
//! use nomina_engine::models::RiskClass;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let projection = calculate_payroll_projection(
//!     dec!(500),
//!     NaiveDate::from_ymd_opt(2020, 6, 20).unwrap(),
//!     RiskClass::ClassI.premium_rate(),
//!     2025,
//! );
//! assert_eq!(projection.periods.len(), 24);
//! assert_eq!(projection.seniority_years, 6);
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
