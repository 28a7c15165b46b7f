//! Annual payroll projection.
//!
//! This module drives the 24-period loop: for every quincena it derives the
//! period's seniority and SDI, adds any bonus paid that period with its tax
//! exemption, computes withholding and IMSS contributions, accrues the
//! benefit provisions, and finally reconciles the year's ISR against the
//! annual table.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info, warn};

use super::seniority::{
    YEAR_END_BONUS_DAYS, effective_seniority, integrated_daily_wage, integration_factor,
    vacation_bonus, vacation_days_for_seniority, year_end_bonus,
};
use super::social_security::compute_contributions;
use super::withholding::{Withholding, compute_annual_tax, compute_withholding};
use crate::config::{ConfigStore, YearlyConfig};
use crate::error::EngineResult;
use crate::models::{
    AnnualIsrData, AnnualProjection, MAX_DAILY_SALARY, PERIODS_PER_YEAR, PayrollPeriod,
    ProjectionInput, period_dates, period_for_date, period_month,
};

/// Days in one semi-monthly period: `365 / 24`, to 27 decimals.
///
/// Used as the contribution day count. Pay amounts divide by 24 last through
/// [`period_base_pay`] instead, so exact half cents stay exact.
pub const DAYS_IN_PERIOD: Decimal = dec!(15.208333333333333333333333333);

const DAYS_IN_YEAR: Decimal = dec!(365);

/// Year-end bonus exemption, in UMA.
pub const YEAR_END_BONUS_EXEMPT_UMA: Decimal = dec!(30);

/// Vacation bonus exemption, in UMA.
pub const VACATION_BONUS_EXEMPT_UMA: Decimal = dec!(15);

const PERIODS_PER_YEAR_DECIMAL: Decimal = dec!(24);

/// Ordinary pay for one period: `daily_salary * 365 / 24`.
///
/// ```
/// use nomina_engine::calculation::period_base_pay;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(period_base_pay(dec!(300.12)), dec!(4564.325));
/// ```
pub fn period_base_pay(daily_salary: Decimal) -> Decimal {
    daily_salary * DAYS_IN_YEAR / PERIODS_PER_YEAR_DECIMAL
}

/// Projects a full fiscal year using the built-in configuration.
///
/// Never fails: an unknown fiscal year falls back to the baseline
/// configuration and out-of-range inputs are clamped. A daily salary above
/// [`MAX_DAILY_SALARY`] is projected at that ceiling.
/// Use [`try_calculate_payroll_projection`] to reject invalid input instead.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::calculate_payroll_projection;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let projection = calculate_payroll_projection(
///     dec!(315.04),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     dec!(0.0054355),
///     2026,
/// );
/// assert_eq!(projection.periods.len(), 24);
/// assert_eq!(projection.annual_isr.adjustment, dec!(0));
/// ```
pub fn calculate_payroll_projection(
    daily_salary: Decimal,
    hire_date: NaiveDate,
    risk_premium_rate: Decimal,
    fiscal_year: i32,
) -> AnnualProjection {
    let input = ProjectionInput {
        daily_salary,
        hire_date,
        risk_premium_rate,
        fiscal_year,
    };
    let store = ConfigStore::builtin();
    project(&input, store.get(fiscal_year))
}

/// Validates the input, then projects it against a configuration store.
///
/// # Errors
///
/// Returns `InvalidInput` if [`ProjectionInput::validate`] rejects the input.
pub fn try_calculate_payroll_projection(
    input: &ProjectionInput,
    store: &ConfigStore,
) -> EngineResult<AnnualProjection> {
    input.validate()?;
    Ok(project(input, store.get(input.fiscal_year)))
}

/// Projects a full fiscal year against an explicit configuration.
///
/// `input.fiscal_year` drives seniority and calendar dates; every statutory
/// figure comes from `config`. The daily salary is capped at
/// [`MAX_DAILY_SALARY`].
pub fn project(input: &ProjectionInput, config: &YearlyConfig) -> AnnualProjection {
    let daily_salary = input.daily_salary.min(MAX_DAILY_SALARY);
    if daily_salary < input.daily_salary {
        warn!(
            daily_salary = %input.daily_salary,
            ceiling = %MAX_DAILY_SALARY,
            "Daily salary capped for projection"
        );
    }
    let hire_date = input.hire_date;
    let fiscal_year = input.fiscal_year;

    let is_minimum_wage = config.is_minimum_wage(daily_salary);
    let anniversary_period = period_for_date(hire_date);
    let base_pay = period_base_pay(daily_salary);

    let mut periods = Vec::with_capacity(PERIODS_PER_YEAR as usize);

    for period_number in 1..=PERIODS_PER_YEAR {
        let month = period_month(period_number);
        let is_january = month == 1;
        let reference_unit = config.reference_unit(is_january);

        let seniority_years = effective_seniority(fiscal_year, hire_date, month);
        let vacation_days = vacation_days_for_seniority(seniority_years);
        let sdi = integrated_daily_wage(daily_salary, seniority_years);

        let is_year_end_bonus = period_number == PERIODS_PER_YEAR;
        let is_vacation_bonus = period_number == anniversary_period;

        let mut gross_pay = base_pay;
        let mut exempt_income = Decimal::ZERO;

        if is_year_end_bonus {
            let bonus = year_end_bonus(daily_salary);
            gross_pay += bonus;
            exempt_income += bonus.min(reference_unit * YEAR_END_BONUS_EXEMPT_UMA);
        }
        if is_vacation_bonus {
            let bonus = vacation_bonus(daily_salary, vacation_days);
            gross_pay += bonus;
            exempt_income += bonus.min(reference_unit * VACATION_BONUS_EXEMPT_UMA);
        }

        let taxable_income = gross_pay - exempt_income;

        // LISR art. 96: no withholding on the general minimum wage
        let withholding = if is_minimum_wage {
            Withholding::NONE
        } else {
            compute_withholding(taxable_income, config, is_january)
        };
        let tax_withheld = withholding.tax_withheld();

        let social_security = compute_contributions(
            sdi,
            DAYS_IN_PERIOD,
            input.risk_premium_rate,
            Some(daily_salary),
            config,
            config.reference_unit_override(is_january),
        );
        let employee_contributions = social_security.employee.total;
        let employer_contributions = social_security.employer.total;

        let local_tax = gross_pay * config.local_tax_rate;
        let year_end_bonus_provision =
            daily_salary * YEAR_END_BONUS_DAYS / PERIODS_PER_YEAR_DECIMAL;
        let vacation_bonus_provision =
            vacation_bonus(daily_salary, vacation_days) / PERIODS_PER_YEAR_DECIMAL;
        let provision_local_tax =
            (year_end_bonus_provision + vacation_bonus_provision) * config.local_tax_rate;

        let total_employer_cost = gross_pay
            + employer_contributions
            + local_tax
            + year_end_bonus_provision
            + vacation_bonus_provision
            + provision_local_tax;

        let net_pay = gross_pay - tax_withheld - employee_contributions;

        debug!(
            period = period_number,
            gross = %gross_pay,
            tax = %tax_withheld,
            net = %net_pay,
            "Calculated payroll period"
        );

        let (start_date, end_date) = period_dates(calendar_year(fiscal_year), period_number)
            .unwrap_or((NaiveDate::MIN, NaiveDate::MIN));

        periods.push(PayrollPeriod {
            period_number,
            label: format!("Q{}", period_number),
            start_date,
            end_date,
            is_year_end_bonus,
            is_vacation_bonus,
            is_january,
            seniority_years,
            vacation_days,
            integrated_daily_wage: sdi,
            gross_pay,
            exempt_income,
            taxable_income,
            tax_due: withholding.tax_due,
            subsidy_applied: withholding.subsidy_applied,
            tax_withheld,
            employee_contributions,
            net_pay,
            employer_contributions,
            housing_fund: social_security.employer.housing,
            local_tax,
            year_end_bonus_provision,
            vacation_bonus_provision,
            provision_local_tax,
            total_employer_cost,
            social_security,
        });
    }

    let annual_isr = reconcile_annual_tax(&periods, config, is_minimum_wage);
    let total_net: Decimal = periods.iter().map(|p| p.net_pay).sum();
    let total_employer_cost: Decimal = periods.iter().map(|p| p.total_employer_cost).sum();

    let seniority_years = fiscal_year.saturating_sub(hire_date.year()).saturating_add(1);
    let service_years_at_year_start = fiscal_year.saturating_sub(hire_date.year()).max(0);
    let vacation_days = vacation_days_for_seniority(seniority_years);

    info!(
        fiscal_year,
        config_year = config.year,
        total_net = %total_net,
        total_employer_cost = %total_employer_cost,
        adjustment = %annual_isr.adjustment,
        "Payroll projection complete"
    );

    AnnualProjection {
        fiscal_year,
        config_year: config.year,
        periods,
        total_net,
        total_employer_cost,
        integrated_daily_wage: integrated_daily_wage(daily_salary, seniority_years),
        daily_salary,
        seniority_years,
        service_years_at_year_start,
        vacation_days,
        integration_factor: integration_factor(vacation_days),
        annual_isr,
    }
}

/// Reconciles the year's withholding against the annual table.
fn reconcile_annual_tax(
    periods: &[PayrollPeriod],
    config: &YearlyConfig,
    is_minimum_wage: bool,
) -> AnnualIsrData {
    let total_taxable_income: Decimal = periods.iter().map(|p| p.taxable_income).sum();
    let total_subsidy: Decimal = periods.iter().map(|p| p.subsidy_applied).sum();
    let total_withheld: Decimal = periods.iter().map(|p| p.tax_withheld).sum();

    let gross_annual_tax = compute_annual_tax(total_taxable_income, config);
    let annual_tax = if is_minimum_wage {
        Decimal::ZERO
    } else {
        (gross_annual_tax - total_subsidy).max(Decimal::ZERO)
    };

    AnnualIsrData {
        total_taxable_income,
        gross_annual_tax,
        total_subsidy,
        annual_tax,
        total_withheld,
        adjustment: annual_tax - total_withheld,
    }
}

/// Clamps a fiscal year into the range chrono can represent.
fn calendar_year(fiscal_year: i32) -> i32 {
    fiscal_year.clamp(NaiveDate::MIN.year() + 1, NaiveDate::MAX.year() - 1)
}
