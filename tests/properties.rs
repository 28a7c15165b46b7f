//! Property tests for the calculation building blocks and full projections.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use nomina_engine::calculation::{
    bracket_tax, capped_contribution_base, compute_contributions, compute_withholding,
    excess_contribution_base, project, unemployment_rate_for_multiple, vacation_days_for_seniority,
};
use nomina_engine::config::get_yearly_config;
use nomina_engine::models::{ProjectionInput, RiskClass};

fn cents(max: i64) -> impl Strategy<Value = Decimal> {
    (0..max).prop_map(|c| Decimal::new(c, 2))
}

fn fiscal_year() -> impl Strategy<Value = i32> {
    prop_oneof![Just(2025), Just(2026)]
}

fn risk_class() -> impl Strategy<Value = RiskClass> {
    prop::sample::select(RiskClass::ALL.to_vec())
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_vacation_days_never_decrease(a in -10i32..60, b in -10i32..60) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(vacation_days_for_seniority(low) <= vacation_days_for_seniority(high));
        prop_assert!((12..=32).contains(&vacation_days_for_seniority(a)));
    }

    #[test]
    fn prop_contribution_base_is_capped_and_excess_non_negative(
        base in cents(1_000_000),
        year in fiscal_year(),
        january in any::<bool>(),
    ) {
        let config = get_yearly_config(year);
        let reference_unit = config.reference_unit(january);

        let capped = capped_contribution_base(base, reference_unit);
        prop_assert_eq!(capped, base.min(reference_unit * Decimal::from(25)));

        let excess = excess_contribution_base(capped, reference_unit);
        prop_assert!(excess >= Decimal::ZERO);
        prop_assert!(excess <= capped);
    }

    #[test]
    fn prop_minimum_wage_share_moves_to_employer(
        salary_below_minimum in cents(30_000),
        year in fiscal_year(),
        risk in risk_class(),
    ) {
        let config = get_yearly_config(year);
        let salary = salary_below_minimum.min(config.minimum_wage_general);
        let base = salary * Decimal::new(105, 2);
        let days = Decimal::from(15);

        let normal = compute_contributions(base, days, risk.premium_rate(), None, config, None);
        let absorbed =
            compute_contributions(base, days, risk.premium_rate(), Some(salary), config, None);

        prop_assert_eq!(absorbed.employee.total, Decimal::ZERO);
        prop_assert_eq!(absorbed.employer.absorbed_employee_share, normal.employee.total);
        prop_assert_eq!(absorbed.employer.total, normal.employer.total + normal.employee.total);
    }

    #[test]
    fn prop_unemployment_rate_rises_with_multiple(
        a in cents(3_000),
        b in cents(3_000),
        year in fiscal_year(),
    ) {
        let schedule = &get_yearly_config(year).unemployment_employer;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low_rate = unemployment_rate_for_multiple(schedule, low);
        let high_rate = unemployment_rate_for_multiple(schedule, high);
        prop_assert!(low_rate <= high_rate);
        prop_assert!(schedule.steps.iter().any(|step| step.rate == low_rate));
    }

    #[test]
    fn prop_bracket_tax_is_bounded_by_income(income in cents(100_000_000), year in fiscal_year()) {
        let config = get_yearly_config(year);
        let tables = [
            &config.brackets.semi_monthly,
            &config.brackets.monthly,
            &config.brackets.annual,
        ];
        for table in tables {
            let tax = bracket_tax(table, income);
            prop_assert!(tax >= Decimal::ZERO);
            prop_assert!(tax <= income);
        }
    }

    #[test]
    fn prop_withheld_tax_is_between_zero_and_tax_due(
        income in cents(10_000_000),
        year in fiscal_year(),
        january in any::<bool>(),
    ) {
        let withholding = compute_withholding(income, get_yearly_config(year), january);
        prop_assert!(withholding.tax_withheld() >= Decimal::ZERO);
        prop_assert!(withholding.tax_withheld() <= withholding.tax_due);
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(32))]

    #[test]
    fn prop_projection_periods_are_consistent(
        salary in cents(500_000),
        hire_year in 1990i32..2026,
        hire_ordinal in 1u32..366,
        year in fiscal_year(),
        risk in risk_class(),
    ) {
        prop_assume!(hire_year <= year);
        let hire_date = NaiveDate::from_yo_opt(hire_year, hire_ordinal).unwrap();
        let input = ProjectionInput {
            daily_salary: salary,
            hire_date,
            risk_premium_rate: risk.premium_rate(),
            fiscal_year: year,
        };
        let config = get_yearly_config(year);
        let projection = project(&input, config);

        prop_assert_eq!(projection.periods.len(), 24);
        prop_assert_eq!(projection.periods.iter().filter(|p| p.is_vacation_bonus).count(), 1);

        for period in &projection.periods {
            prop_assert_eq!(
                period.net_pay,
                period.gross_pay - period.tax_withheld - period.employee_contributions
            );
            prop_assert!(period.exempt_income <= period.gross_pay);
            prop_assert!(period.tax_withheld >= Decimal::ZERO);
        }

        if config.is_minimum_wage(salary) {
            prop_assert!(projection.periods.iter().all(|p| p.tax_withheld == Decimal::ZERO));
            prop_assert!(
                projection
                    .periods
                    .iter()
                    .all(|p| p.employee_contributions == Decimal::ZERO)
            );
            prop_assert_eq!(projection.annual_isr.adjustment, Decimal::ZERO);
        }
    }
}
