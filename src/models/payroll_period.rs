//! Semi-monthly payroll period model.
//!
//! This module contains the [`PayrollPeriod`] type produced for each of the
//! 24 quincenas of a projection, and the calendar helpers that locate a
//! period inside its fiscal year.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SocialSecurityBreakdown;

/// Number of semi-monthly periods in a fiscal year.
pub const PERIODS_PER_YEAR: u32 = 24;

/// Returns the calendar month (1-12) a period falls in.
///
/// Periods 1 and 2 are January, 3 and 4 February, and so on.
///
/// ```
/// use nomina_engine::models::period_month;
///
/// assert_eq!(period_month(1), 1);
/// assert_eq!(period_month(2), 1);
/// assert_eq!(period_month(3), 2);
/// assert_eq!(period_month(24), 12);
/// ```
pub fn period_month(period_number: u32) -> u32 {
    period_number.saturating_add(1) / 2
}

/// Returns the period in which a date falls: days 1-15 are the first
/// quincena of the month, the rest the second.
///
/// ```
/// use nomina_engine::models::period_for_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(period_for_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()), 1);
/// assert_eq!(period_for_date(NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()), 2);
/// assert_eq!(period_for_date(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()), 12);
/// ```
pub fn period_for_date(date: NaiveDate) -> u32 {
    date.month0() * 2 + if date.day() > 15 { 2 } else { 1 }
}

/// Returns the inclusive calendar range of a period in a fiscal year.
///
/// Returns `None` if the period number is outside 1-24 or the year is out of
/// chrono's range.
pub fn period_dates(year: i32, period_number: u32) -> Option<(NaiveDate, NaiveDate)> {
    if !(1..=PERIODS_PER_YEAR).contains(&period_number) {
        return None;
    }

    let month = period_month(period_number);
    if period_number % 2 == 1 {
        Some((
            NaiveDate::from_ymd_opt(year, month, 1)?,
            NaiveDate::from_ymd_opt(year, month, 15)?,
        ))
    } else {
        let next_month_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some((
            NaiveDate::from_ymd_opt(year, month, 16)?,
            next_month_start.pred_opt()?,
        ))
    }
}

/// The full result for one semi-monthly pay period.
///
/// Every monetary field is in MXN for the period, not per day. Periods are
/// immutable once appended to a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// Position in the fiscal year, 1-24.
    pub period_number: u32,
    /// Display label, `Q1` to `Q24`.
    pub label: String,
    /// First calendar day of the period.
    pub start_date: NaiveDate,
    /// Last calendar day of the period.
    pub end_date: NaiveDate,
    /// `true` for period 24, which pays the year-end bonus (aguinaldo).
    pub is_year_end_bonus: bool,
    /// `true` for the hire-anniversary period, which pays the vacation bonus.
    pub is_vacation_bonus: bool,
    /// `true` for periods 1 and 2.
    pub is_january: bool,
    /// Years of service used for this period's benefits.
    pub seniority_years: i32,
    /// Statutory vacation days for that seniority.
    pub vacation_days: u32,
    /// Integrated daily wage (SDI) used as the contribution base.
    pub integrated_daily_wage: Decimal,
    /// Gross pay including any bonus paid this period.
    pub gross_pay: Decimal,
    /// Portion of gross pay exempt from ISR.
    pub exempt_income: Decimal,
    /// Portion of gross pay subject to ISR.
    pub taxable_income: Decimal,
    /// ISR determined for the period.
    pub tax_due: Decimal,
    /// Employment subsidy credited against the ISR.
    pub subsidy_applied: Decimal,
    /// ISR actually withheld: tax due less subsidy, never negative.
    pub tax_withheld: Decimal,
    /// Employee IMSS total.
    pub employee_contributions: Decimal,
    /// Net pay to the employee.
    pub net_pay: Decimal,
    /// Employer IMSS total, including housing fund and any absorbed share.
    pub employer_contributions: Decimal,
    /// Employer housing-fund (Infonavit) contribution, also inside
    /// `employer_contributions`.
    pub housing_fund: Decimal,
    /// Local payroll tax (ISN) on gross pay.
    pub local_tax: Decimal,
    /// One twenty-fourth of the annual year-end bonus accrual.
    pub year_end_bonus_provision: Decimal,
    /// One twenty-fourth of the annual vacation bonus accrual.
    pub vacation_bonus_provision: Decimal,
    /// Local payroll tax on both provisions.
    pub provision_local_tax: Decimal,
    /// Everything the employer pays for this period.
    pub total_employer_cost: Decimal,
    /// Line-item IMSS detail.
    pub social_security: SocialSecurityBreakdown,
}

impl PayrollPeriod {
    /// Returns the sum of both benefit provisions and their local tax.
    pub fn total_provisions(&self) -> Decimal {
        self.year_end_bonus_provision + self.vacation_bonus_provision + self.provision_local_tax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_month_covers_every_period() {
        let months: Vec<u32> = (1..=PERIODS_PER_YEAR).map(period_month).collect();
        assert_eq!(months.first(), Some(&1));
        assert_eq!(months.last(), Some(&12));
        assert!(months.windows(2).all(|pair| pair[1] >= pair[0]));
    }

    #[test]
    fn test_first_half_period_dates() {
        assert_eq!(
            period_dates(2026, 1),
            Some((date(2026, 1, 1), date(2026, 1, 15)))
        );
    }

    #[test]
    fn test_second_half_of_february_ends_on_last_day() {
        assert_eq!(
            period_dates(2025, 4),
            Some((date(2025, 2, 16), date(2025, 2, 28)))
        );
        assert_eq!(
            period_dates(2024, 4),
            Some((date(2024, 2, 16), date(2024, 2, 29)))
        );
    }

    #[test]
    fn test_last_period_ends_on_december_31() {
        assert_eq!(
            period_dates(2026, 24),
            Some((date(2026, 12, 16), date(2026, 12, 31)))
        );
    }

    #[test]
    fn test_out_of_range_period_has_no_dates() {
        assert_eq!(period_dates(2026, 0), None);
        assert_eq!(period_dates(2026, 25), None);
    }

    #[test]
    fn test_period_for_date_boundaries() {
        assert_eq!(period_for_date(date(2025, 1, 1)), 1);
        assert_eq!(period_for_date(date(2025, 12, 15)), 23);
        assert_eq!(period_for_date(date(2025, 12, 31)), 24);
    }

    #[test]
    fn test_period_dates_contain_their_period() {
        for period in 1..=PERIODS_PER_YEAR {
            let (start, end) = period_dates(2025, period).unwrap();
            assert_eq!(period_for_date(start), period);
            assert_eq!(period_for_date(end), period);
        }
    }
}
