//! Spreadsheet and JSON export of a projection.
//!
//! The CSV layout has one row per period in a fixed column order, followed
//! by a `TOTAL` row. Monetary cells are written rounded to two decimals, and
//! each total is the sum of the rounded cells above it.

use std::io::Write;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{AnnualProjection, PayrollPeriod};

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 22] = [
    "Period",
    "Gross Pay",
    "Exempt Income",
    "Taxable Income",
    "ISR",
    "Subsidy",
    "IMSS Employee Total",
    "IMSS Employee (Sickness & Maternity)",
    "IMSS Employee (Disability & Life)",
    "IMSS Employee (Unemployment & Old Age)",
    "Net Pay",
    "IMSS Employer Total",
    "IMSS Employer (Fixed Quota)",
    "IMSS Employer (Sickness & Maternity)",
    "IMSS Employer (Occupational Risk)",
    "IMSS Employer (Disability & Life)",
    "IMSS Employer (Daycare)",
    "IMSS Employer (Retirement)",
    "IMSS Employer (Unemployment & Old Age)",
    "Housing Fund",
    "Local Payroll Tax",
    "Total Employer Cost",
];

/// Label of the final summary row.
pub const TOTAL_LABEL: &str = "TOTAL";

const AMOUNT_COLUMNS: usize = CSV_HEADERS.len() - 1;

/// Rounds to two decimals, halves away from zero.
///
/// ```
/// use nomina_engine::export::round_half_up;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// The amount columns of one period, rounded to cents.
fn rounded_amounts(period: &PayrollPeriod) -> [Decimal; AMOUNT_COLUMNS] {
    amounts(period).map(round_half_up)
}

/// The amount columns of one period, in header order after `Period`.
///
/// `ISR` is the tax determined before the subsidy credit, shown next to it.
fn amounts(period: &PayrollPeriod) -> [Decimal; AMOUNT_COLUMNS] {
    let employee = &period.social_security.employee;
    let employer = &period.social_security.employer;

    [
        period.gross_pay,
        period.exempt_income,
        period.taxable_income,
        period.tax_due,
        period.subsidy_applied,
        period.employee_contributions,
        employee.sickness_maternity(),
        employee.disability_life,
        employee.unemployment_old_age,
        period.net_pay,
        period.employer_contributions,
        employer.fixed_quota,
        employer.sickness_maternity(),
        employer.occupational_risk,
        employer.disability_life,
        employer.daycare,
        employer.retirement,
        employer.unemployment_old_age,
        period.housing_fund,
        period.local_tax,
        period.total_employer_cost,
    ]
}

fn record(label: &str, values: &[Decimal]) -> Vec<String> {
    std::iter::once(label.to_string())
        .chain(values.iter().copied().map(format_amount))
        .collect()
}

/// Writes a projection as CSV: a header, 24 period rows and a `TOTAL` row.
///
/// Each `TOTAL` cell is the column sum of the printed period cells, so it can
/// differ by a few cents from rounding the projection's own totals.
///
/// # Errors
///
/// Returns `Export` if the underlying writer fails.
pub fn write_csv<W: Write>(projection: &AnnualProjection, writer: W) -> EngineResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    let mut totals = [Decimal::ZERO; AMOUNT_COLUMNS];
    for period in &projection.periods {
        let values = rounded_amounts(period);
        for (total, value) in totals.iter_mut().zip(values) {
            *total += value;
        }
        csv_writer.write_record(record(&period.label, &values))?;
    }
    csv_writer.write_record(record(TOTAL_LABEL, &totals))?;

    csv_writer.flush().map_err(|err| EngineError::Export {
        message: err.to_string(),
    })
}

/// Renders a projection as a CSV string.
///
/// # Errors
///
/// Returns `Export` if the CSV cannot be produced.
pub fn to_csv_string(projection: &AnnualProjection) -> EngineResult<String> {
    let mut buffer = Vec::new();
    write_csv(projection, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| EngineError::Export {
        message: err.to_string(),
    })
}

/// Serialises the full projection, every period and breakdown included, as
/// pretty-printed JSON.
///
/// # Errors
///
/// Returns `Export` if serialisation fails.
pub fn to_json(projection: &AnnualProjection) -> EngineResult<String> {
    Ok(serde_json::to_string_pretty(projection)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::project;
    use crate::config::builtin;
    use crate::models::ProjectionInput;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn create_test_projection() -> AnnualProjection {
        let input = ProjectionInput {
            daily_salary: dec!(500),
            hire_date: NaiveDate::from_ymd_opt(2020, 6, 20).unwrap(),
            risk_premium_rate: dec!(0.0054355),
            fiscal_year: 2025,
        };
        project(&input, &builtin::fiscal_year_2025())
    }

    fn parse_rows(csv: &str) -> Vec<Vec<String>> {
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        reader
            .records()
            .map(|record| record.unwrap().iter().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
        assert_eq!(round_half_up(dec!(0.0049)), dec!(0.00));
        assert_eq!(round_half_up(dec!(2.675)), dec!(2.68));
    }

    #[test]
    fn test_format_amount_pads_two_decimals() {
        assert_eq!(format_amount(dec!(312.5)), "312.50");
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(7604.1666666)), "7604.17");
    }

    /// EX-001: header and row layout
    #[test]
    fn test_csv_layout() {
        let csv = to_csv_string(&create_test_projection()).unwrap();
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("Period,Gross Pay,Exempt Income,Taxable Income,ISR,Subsidy"));
        assert!(header.ends_with("Housing Fund,Local Payroll Tax,Total Employer Cost"));

        let rows = parse_rows(&csv);
        assert_eq!(rows.len(), 25);
        assert!(rows.iter().all(|row| row.len() == CSV_HEADERS.len()));
        assert_eq!(rows[0][0], "Q1");
        assert_eq!(rows[23][0], "Q24");
        assert_eq!(rows[24][0], TOTAL_LABEL);
    }

    /// EX-002: period cells are rounded values of the projection
    #[test]
    fn test_period_cells() {
        let projection = create_test_projection();
        let rows = parse_rows(&to_csv_string(&projection).unwrap());
        let first = &projection.periods[0];

        assert_eq!(rows[0][1], "7604.17");
        assert_eq!(rows[0][4], format_amount(first.tax_due));
        assert_eq!(rows[0][10], format_amount(first.net_pay));
        assert_eq!(rows[0][21], format_amount(first.total_employer_cost));
    }

    /// EX-003: every total is the sum of the printed cells above it
    #[test]
    fn test_total_row_sums_printed_cells() {
        let rows = parse_rows(&to_csv_string(&create_test_projection()).unwrap());

        for column in 1..CSV_HEADERS.len() {
            let cells: Decimal = rows[..24]
                .iter()
                .map(|row| row[column].parse::<Decimal>().unwrap())
                .sum();
            let total: Decimal = rows[24][column].parse().unwrap();
            assert_eq!(total, cells, "column {}", CSV_HEADERS[column]);
        }
    }

    #[test]
    fn test_total_row_can_differ_from_unrounded_total() {
        let projection = create_test_projection();
        let rows = parse_rows(&to_csv_string(&projection).unwrap());

        assert_eq!(format_amount(projection.total_net), "167725.99");
        assert_eq!(rows[24][10], "167725.98");
        assert_eq!(format_amount(projection.total_employer_cost), "255765.52");
        assert_eq!(rows[24][21], "255765.46");
    }

    /// EX-004: a half-cent base pay rounds away from zero
    #[test]
    fn test_half_cent_gross_pay_rounds_up() {
        let input = ProjectionInput {
            daily_salary: dec!(300.12),
            hire_date: NaiveDate::from_ymd_opt(2020, 6, 20).unwrap(),
            risk_premium_rate: dec!(0.0054355),
            fiscal_year: 2025,
        };
        let projection = project(&input, &builtin::fiscal_year_2025());
        let rows = parse_rows(&to_csv_string(&projection).unwrap());

        assert_eq!(projection.periods[0].gross_pay, dec!(4564.325));
        assert_eq!(rows[0][1], "4564.33");
        assert_eq!(rows[0][3], "4564.33");
    }

    #[test]
    fn test_json_contains_periods_and_reconciliation() {
        let json = to_json(&create_test_projection()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["fiscal_year"], 2025);
        assert_eq!(value["periods"].as_array().unwrap().len(), 24);
        assert!(value["annual_isr"]["adjustment"].is_string());
    }

    #[test]
    fn test_json_round_trip() {
        let projection = create_test_projection();
        let json = to_json(&projection).unwrap();
        let parsed: AnnualProjection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, projection);
    }
}
