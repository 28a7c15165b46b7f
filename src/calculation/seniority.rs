//! Seniority and statutory benefit calculations.
//!
//! This module maps years of service to vacation days (LFT article 76 as
//! amended in 2023), derives the integration factor that folds the year-end
//! bonus and vacation premium into the daily wage, and computes the integrated
//! daily wage (SDI) used as the social-security contribution base.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Days of salary paid as the year-end bonus (aguinaldo).
pub const YEAR_END_BONUS_DAYS: Decimal = dec!(15);

/// Share of vacation days paid as the vacation premium (prima vacacional).
pub const VACATION_PREMIUM_RATE: Decimal = dec!(0.25);

/// Days in the year used to average annual benefits into a daily wage.
const DAYS_PER_YEAR: Decimal = dec!(365);

/// Returns the statutory vacation days for a number of years of service.
///
/// Years one to five step by two days from 12; after that the entitlement
/// rises by two days every five years. Anything below one year, including
/// negative input, gets the first-year minimum of 12 days.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::vacation_days_for_seniority;
///
/// assert_eq!(vacation_days_for_seniority(0), 12);
/// assert_eq!(vacation_days_for_seniority(3), 16);
/// assert_eq!(vacation_days_for_seniority(8), 22);
/// assert_eq!(vacation_days_for_seniority(40), 32);
/// ```
pub fn vacation_days_for_seniority(years: i32) -> u32 {
    match years {
        i32::MIN..=1 => 12,
        2 => 14,
        3 => 16,
        4 => 18,
        5 => 20,
        6..=10 => 22,
        11..=15 => 24,
        16..=20 => 26,
        21..=25 => 28,
        26..=30 => 30,
        _ => 32,
    }
}

/// Returns the SDI integration factor for a vacation entitlement.
///
/// `1 + (15 + vacation_days * 0.25) / 365`
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::integration_factor;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(integration_factor(12), dec!(1) + dec!(18) / dec!(365));
/// assert_eq!(integration_factor(12).round_dp(4), dec!(1.0493));
/// ```
pub fn integration_factor(vacation_days: u32) -> Decimal {
    let annual_bonus_days =
        YEAR_END_BONUS_DAYS + Decimal::from(vacation_days) * VACATION_PREMIUM_RATE;
    Decimal::ONE + annual_bonus_days / DAYS_PER_YEAR
}

/// Returns the integrated daily wage (SDI) for a salary and seniority.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::{integrated_daily_wage, integration_factor};
/// use rust_decimal_macros::dec;
///
/// let sdi = integrated_daily_wage(dec!(315.04), 0);
/// assert_eq!(sdi, dec!(315.04) * integration_factor(12));
/// assert_eq!(sdi.round_dp(2), dec!(330.58));
/// ```
pub fn integrated_daily_wage(daily_salary: Decimal, years: i32) -> Decimal {
    daily_salary * integration_factor(vacation_days_for_seniority(years))
}

/// Returns the vacation premium paid on the hire anniversary.
pub fn vacation_bonus(daily_salary: Decimal, vacation_days: u32) -> Decimal {
    daily_salary * Decimal::from(vacation_days) * VACATION_PREMIUM_RATE
}

/// Returns the year-end bonus paid in the last period of the year.
pub fn year_end_bonus(daily_salary: Decimal) -> Decimal {
    daily_salary * YEAR_END_BONUS_DAYS
}

/// Returns the seniority used for a period's benefits.
///
/// Seniority is `fiscal_year - hire_year`, plus one once the period's month
/// has reached the hire month, and never less than one.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::effective_seniority;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2020, 6, 20).unwrap();
/// assert_eq!(effective_seniority(2025, hired, 5), 5);
/// assert_eq!(effective_seniority(2025, hired, 6), 6);
/// ```
pub fn effective_seniority(fiscal_year: i32, hire_date: NaiveDate, period_month: u32) -> i32 {
    let completed = fiscal_year.saturating_sub(hire_date.year());
    let anniversary_reached = i32::from(period_month >= hire_date.month());
    completed.saturating_add(anniversary_reached).max(1)
}
