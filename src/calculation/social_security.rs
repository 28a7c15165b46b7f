//! Social-security (IMSS) contribution calculations.
//!
//! This module computes every employer and employee IMSS line item for a
//! period from a daily contribution base, including the 25 UMA cap, the
//! surcharge above three UMA, the employer's absorption of the employee share
//! for minimum-wage workers (LSS article 36) and the progressive employer
//! unemployment/old-age rate introduced by the 2020 pension reform.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::{UnemploymentSchedule, YearlyConfig};
use crate::models::{EmployeeContributions, EmployerContributions, SocialSecurityBreakdown};

/// Contribution base ceiling, in UMA.
pub const CONTRIBUTION_CAP_UMA: Decimal = dec!(25);

/// Threshold above which the excess surcharge applies, in UMA.
pub const EXCESS_THRESHOLD_UMA: Decimal = dec!(3);

const EMPLOYEE_EXCESS_RATE: Decimal = dec!(0.004);
const EMPLOYEE_CASH_BENEFITS_RATE: Decimal = dec!(0.0025);
const EMPLOYEE_RETIREE_MEDICAL_RATE: Decimal = dec!(0.00375);
const EMPLOYEE_DISABILITY_LIFE_RATE: Decimal = dec!(0.00625);
const EMPLOYEE_UNEMPLOYMENT_RATE: Decimal = dec!(0.01125);

const EMPLOYER_FIXED_QUOTA_RATE: Decimal = dec!(0.204);
const EMPLOYER_EXCESS_RATE: Decimal = dec!(0.011);
const EMPLOYER_CASH_BENEFITS_RATE: Decimal = dec!(0.007);
const EMPLOYER_RETIREE_MEDICAL_RATE: Decimal = dec!(0.0105);
const EMPLOYER_DISABILITY_LIFE_RATE: Decimal = dec!(0.0175);
const EMPLOYER_DAYCARE_RATE: Decimal = dec!(0.01);
const EMPLOYER_RETIREMENT_RATE: Decimal = dec!(0.02);
const EMPLOYER_HOUSING_RATE: Decimal = dec!(0.05);

/// Returns the contribution base after the 25 UMA cap, never negative.
///
/// ```
/// use nomina_engine::calculation::capped_contribution_base;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(capped_contribution_base(dec!(500), dec!(113.14)), dec!(500));
/// assert_eq!(capped_contribution_base(dec!(5000), dec!(113.14)), dec!(2828.50));
/// ```
pub fn capped_contribution_base(base: Decimal, reference_unit: Decimal) -> Decimal {
    base.min(reference_unit * CONTRIBUTION_CAP_UMA).max(Decimal::ZERO)
}

/// Returns the part of a capped base above three UMA, never negative.
pub fn excess_contribution_base(capped_base: Decimal, reference_unit: Decimal) -> Decimal {
    (capped_base - reference_unit * EXCESS_THRESHOLD_UMA).max(Decimal::ZERO)
}

/// Looks up the employer unemployment/old-age rate for a base expressed in
/// UMA multiples.
///
/// The step whose bound is the first one at or above the multiple applies;
/// multiples beyond every bound take the open-ended step.
///
/// ```
/// use nomina_engine::calculation::unemployment_rate_for_multiple;
/// use nomina_engine::config::get_yearly_config;
/// use rust_decimal_macros::dec;
///
/// let schedule = &get_yearly_config(2025).unemployment_employer;
/// assert_eq!(unemployment_rate_for_multiple(schedule, dec!(1.5)), dec!(0.03544));
/// assert_eq!(unemployment_rate_for_multiple(schedule, dec!(4.01)), dec!(0.06422));
/// ```
pub fn unemployment_rate_for_multiple(
    schedule: &UnemploymentSchedule,
    uma_multiple: Decimal,
) -> Decimal {
    schedule
        .steps
        .iter()
        .find(|step| {
            step.up_to_uma_multiple
                .is_none_or(|bound| uma_multiple <= bound)
        })
        .map(|step| step.rate)
        .unwrap_or(Decimal::ZERO)
}

/// Returns the employer unemployment/old-age rate for a capped base.
///
/// A base at or below one general minimum wage pays the flat minimum-wage
/// rate; otherwise the year's progressive schedule applies to the base in
/// UMA multiples.
pub fn unemployment_employer_rate(
    capped_base: Decimal,
    reference_unit: Decimal,
    config: &YearlyConfig,
) -> Decimal {
    let schedule = &config.unemployment_employer;

    if capped_base <= config.minimum_wage_general {
        return schedule.minimum_wage_rate;
    }

    let uma_multiple = capped_base
        .checked_div(reference_unit)
        .unwrap_or(Decimal::MAX);
    unemployment_rate_for_multiple(schedule, uma_multiple)
}

fn employee_items(
    capped_base: Decimal,
    excess_base: Decimal,
    days: Decimal,
) -> EmployeeContributions {
    let excess = excess_base * EMPLOYEE_EXCESS_RATE * days;
    let cash_benefits = capped_base * EMPLOYEE_CASH_BENEFITS_RATE * days;
    let retiree_medical = capped_base * EMPLOYEE_RETIREE_MEDICAL_RATE * days;
    let disability_life = capped_base * EMPLOYEE_DISABILITY_LIFE_RATE * days;
    let unemployment_old_age = capped_base * EMPLOYEE_UNEMPLOYMENT_RATE * days;

    EmployeeContributions {
        excess,
        cash_benefits,
        retiree_medical,
        disability_life,
        unemployment_old_age,
        total: excess + cash_benefits + retiree_medical + disability_life + unemployment_old_age,
    }
}

fn zero_employee_items() -> EmployeeContributions {
    EmployeeContributions {
        excess: Decimal::ZERO,
        cash_benefits: Decimal::ZERO,
        retiree_medical: Decimal::ZERO,
        disability_life: Decimal::ZERO,
        unemployment_old_age: Decimal::ZERO,
        total: Decimal::ZERO,
    }
}

/// Computes every IMSS line item for one period.
///
/// # Arguments
///
/// * `contribution_base` - Daily contribution base, normally the SDI
/// * `days_in_period` - Days contributed in the period
/// * `risk_premium_rate` - The employer's occupational-risk premium
/// * `daily_salary` - The worker's daily salary, when known; enables the
///   minimum-wage rule
/// * `config` - The fiscal year's configuration
/// * `reference_unit_override` - UMA to use instead of the year's value
///   (January of a year whose UMA takes effect in February)
///
/// # Minimum wage
///
/// When `daily_salary` is at or below the general minimum wage plus
/// tolerance, every employee item is zero and the employer pays what the
/// employee would have paid. That amount is reported as
/// `employer.absorbed_employee_share` and included in `employer.total`.
///
/// Zero or negative bases produce zero base-driven items; the employer
/// fixed quota depends only on the UMA and days.
pub fn compute_contributions(
    contribution_base: Decimal,
    days_in_period: Decimal,
    risk_premium_rate: Decimal,
    daily_salary: Option<Decimal>,
    config: &YearlyConfig,
    reference_unit_override: Option<Decimal>,
) -> SocialSecurityBreakdown {
    let reference_unit = reference_unit_override.unwrap_or(config.uma_daily);
    let days = days_in_period;

    let capped_base = capped_contribution_base(contribution_base, reference_unit);
    let excess_base = excess_contribution_base(capped_base, reference_unit);

    let is_minimum_wage = daily_salary.is_some_and(|salary| config.is_minimum_wage(salary));

    let owed_by_employee = employee_items(capped_base, excess_base, days);
    let (employee, absorbed_employee_share) = if is_minimum_wage {
        let absorbed = owed_by_employee.total;
        (zero_employee_items(), absorbed)
    } else {
        (owed_by_employee, Decimal::ZERO)
    };

    let unemployment_rate = unemployment_employer_rate(capped_base, reference_unit, config);

    let fixed_quota = reference_unit * EMPLOYER_FIXED_QUOTA_RATE * days;
    let excess = excess_base * EMPLOYER_EXCESS_RATE * days;
    let cash_benefits = capped_base * EMPLOYER_CASH_BENEFITS_RATE * days;
    let retiree_medical = capped_base * EMPLOYER_RETIREE_MEDICAL_RATE * days;
    let occupational_risk = capped_base * risk_premium_rate * days;
    let disability_life = capped_base * EMPLOYER_DISABILITY_LIFE_RATE * days;
    let daycare = capped_base * EMPLOYER_DAYCARE_RATE * days;
    let retirement = capped_base * EMPLOYER_RETIREMENT_RATE * days;
    let unemployment_old_age = capped_base * unemployment_rate * days;
    let housing = capped_base * EMPLOYER_HOUSING_RATE * days;

    let total = fixed_quota
        + excess
        + cash_benefits
        + retiree_medical
        + occupational_risk
        + disability_life
        + daycare
        + retirement
        + unemployment_old_age
        + housing
        + absorbed_employee_share;

    SocialSecurityBreakdown {
        reference_unit,
        contribution_base: capped_base,
        excess_base,
        unemployment_employer_rate: unemployment_rate,
        employer: EmployerContributions {
            fixed_quota,
            excess,
            cash_benefits,
            retiree_medical,
            occupational_risk,
            disability_life,
            daycare,
            retirement,
            unemployment_old_age,
            housing,
            absorbed_employee_share,
            total,
        },
        employee,
    }
}
