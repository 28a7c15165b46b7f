//! Compiled-in figures for the supported fiscal years.
//!
//! The same values ship as YAML under `config/years/` for callers that load
//! configuration from disk.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{
    BracketRow, BracketTables, UnemploymentRateStep, UnemploymentSchedule, YearlyConfig,
};

/// Flat employer unemployment/old-age rate at one minimum wage.
const MINIMUM_WAGE_UNEMPLOYMENT_RATE: Decimal = dec!(0.0315);

/// UMA-multiple boundaries shared by every year of the pension reform.
const UNEMPLOYMENT_BOUNDARIES: [Decimal; 6] =
    [dec!(1.5), dec!(2.0), dec!(2.5), dec!(3.0), dec!(3.5), dec!(4.0)];

fn row(lower_bound: Decimal, fixed_quota: Decimal, marginal_rate: Decimal) -> BracketRow {
    BracketRow::new(lower_bound, fixed_quota, marginal_rate)
}

fn unemployment_schedule(rates: [Decimal; 7]) -> UnemploymentSchedule {
    let steps = rates
        .iter()
        .enumerate()
        .map(|(index, &rate)| UnemploymentRateStep {
            up_to_uma_multiple: UNEMPLOYMENT_BOUNDARIES.get(index).copied(),
            rate,
        })
        .collect();

    UnemploymentSchedule {
        minimum_wage_rate: MINIMUM_WAGE_UNEMPLOYMENT_RATE,
        steps,
    }
}

/// Figures for fiscal year 2025. This is the baseline year.
pub fn fiscal_year_2025() -> YearlyConfig {
    YearlyConfig {
        year: 2025,
        uma_daily: dec!(113.14),
        uma_daily_january: None,
        minimum_wage_general: dec!(278.80),
        minimum_wage_border: dec!(419.88),
        local_tax_rate: dec!(0.04),
        subsidy_monthly_ceiling: dec!(10171.00),
        subsidy_monthly_amount: dec!(474.65),
        subsidy_monthly_amount_january: None,
        unemployment_employer: unemployment_schedule([
            dec!(0.03544),
            dec!(0.04426),
            dec!(0.04954),
            dec!(0.05307),
            dec!(0.05559),
            dec!(0.05747),
            dec!(0.06422),
        ]),
        brackets: BracketTables {
            semi_monthly: vec![
                row(dec!(0.01), dec!(0.00), dec!(0.0192)),
                row(dec!(368.11), dec!(7.05), dec!(0.064)),
                row(dec!(3124.36), dec!(183.45), dec!(0.1088)),
                row(dec!(5490.76), dec!(441.00), dec!(0.16)),
                row(dec!(6382.81), dec!(583.65), dec!(0.1792)),
                row(dec!(7641.91), dec!(809.25), dec!(0.2136)),
                row(dec!(15412.81), dec!(2469.15), dec!(0.2352)),
                row(dec!(24292.66), dec!(4557.75), dec!(0.30)),
                row(dec!(46378.51), dec!(11183.40), dec!(0.32)),
                row(dec!(61838.11), dec!(16130.55), dec!(0.34)),
                row(dec!(185514.31), dec!(58180.35), dec!(0.35)),
            ],
            monthly: vec![
                row(dec!(0.01), dec!(0.00), dec!(0.0192)),
                row(dec!(746.05), dec!(14.32), dec!(0.064)),
                row(dec!(6332.06), dec!(371.83), dec!(0.1088)),
                row(dec!(11128.02), dec!(893.63), dec!(0.16)),
                row(dec!(12935.83), dec!(1182.88), dec!(0.1792)),
                row(dec!(15487.72), dec!(1640.18), dec!(0.2136)),
                row(dec!(31236.50), dec!(5004.12), dec!(0.2352)),
                row(dec!(49233.01), dec!(9236.89), dec!(0.30)),
                row(dec!(93993.91), dec!(22665.17), dec!(0.32)),
                row(dec!(125325.21), dec!(32691.18), dec!(0.34)),
                row(dec!(375975.62), dec!(117912.32), dec!(0.35)),
            ],
            annual: vec![
                row(dec!(0.01), dec!(0.00), dec!(0.0192)),
                row(dec!(8952.50), dec!(171.88), dec!(0.064)),
                row(dec!(75984.56), dec!(4461.94), dec!(0.1088)),
                row(dec!(133536.08), dec!(10723.55), dec!(0.16)),
                row(dec!(155229.81), dec!(14194.54), dec!(0.1792)),
                row(dec!(185852.58), dec!(19682.13), dec!(0.2136)),
                row(dec!(374837.89), dec!(60049.40), dec!(0.2352)),
                row(dec!(590795.99), dec!(110842.74), dec!(0.30)),
                row(dec!(1127926.91), dec!(271981.99), dec!(0.32)),
                row(dec!(1503902.46), dec!(392294.17), dec!(0.34)),
                row(dec!(4511707.37), dec!(1414947.85), dec!(0.35)),
            ],
        },
    }
}

/// Figures for fiscal year 2026.
///
/// The 2026 UMA is published in January and takes effect on February 1st,
/// so January keeps the 2025 value. The employment subsidy is likewise split
/// between a January amount and a February to December amount.
pub fn fiscal_year_2026() -> YearlyConfig {
    YearlyConfig {
        year: 2026,
        uma_daily: dec!(117.31),
        uma_daily_january: Some(dec!(113.14)),
        minimum_wage_general: dec!(315.04),
        minimum_wage_border: dec!(440.87),
        local_tax_rate: dec!(0.04),
        subsidy_monthly_ceiling: dec!(11492.66),
        subsidy_monthly_amount: dec!(535.65),
        subsidy_monthly_amount_january: Some(dec!(536.21)),
        unemployment_employer: unemployment_schedule([
            dec!(0.03843),
            dec!(0.05193),
            dec!(0.06001),
            dec!(0.06540),
            dec!(0.06925),
            dec!(0.07214),
            dec!(0.08241),
        ]),
        brackets: BracketTables {
            semi_monthly: vec![
                row(dec!(0.01), dec!(0.00), dec!(0.0192)),
                row(dec!(415.96), dec!(7.97), dec!(0.064)),
                row(dec!(3530.53), dec!(207.30), dec!(0.1088)),
                row(dec!(6204.56), dec!(498.33), dec!(0.16)),
                row(dec!(7212.57), dec!(659.52), dec!(0.1792)),
                row(dec!(8635.36), dec!(914.45), dec!(0.2136)),
                row(dec!(17416.48), dec!(2790.14), dec!(0.2352)),
                row(dec!(27450.71), dec!(5150.26), dec!(0.30)),
                row(dec!(52407.72), dec!(12637.24), dec!(0.32)),
                row(dec!(69877.06), dec!(18227.52), dec!(0.34)),
                row(dec!(209631.17), dec!(65743.79), dec!(0.35)),
            ],
            monthly: vec![
                row(dec!(0.01), dec!(0.00), dec!(0.0192)),
                row(dec!(843.04), dec!(16.18), dec!(0.064)),
                row(dec!(7155.23), dec!(420.17), dec!(0.1088)),
                row(dec!(12574.66), dec!(1009.80), dec!(0.16)),
                row(dec!(14617.49), dec!(1336.65), dec!(0.1792)),
                row(dec!(17501.12), dec!(1853.40), dec!(0.2136)),
                row(dec!(35297.24), dec!(5654.66), dec!(0.2352)),
                row(dec!(55633.30), dec!(10437.68), dec!(0.30)),
                row(dec!(106213.12), dec!(25611.64), dec!(0.32)),
                row(dec!(141617.49), dec!(36941.03), dec!(0.34)),
                row(dec!(424852.45), dec!(133240.92), dec!(0.35)),
            ],
            annual: vec![
                row(dec!(0.01), dec!(0.00), dec!(0.0192)),
                row(dec!(10116.33), dec!(194.22), dec!(0.064)),
                row(dec!(85862.55), dec!(5042.00), dec!(0.1088)),
                row(dec!(150895.77), dec!(12117.61), dec!(0.16)),
                row(dec!(175409.69), dec!(16039.83), dec!(0.1792)),
                row(dec!(210013.41), dec!(22240.81), dec!(0.2136)),
                row(dec!(423566.92), dec!(67855.82), dec!(0.2352)),
                row(dec!(667599.47), dec!(125252.30), dec!(0.30)),
                row(dec!(1274557.41), dec!(307339.65), dec!(0.32)),
                row(dec!(1699409.78), dec!(443292.41), dec!(0.34)),
                row(dec!(5098229.33), dec!(1598891.07), dec!(0.35)),
            ],
        },
    }
}

/// Returns every compiled-in fiscal year, oldest first.
pub fn all() -> Vec<YearlyConfig> {
    vec![fiscal_year_2025(), fiscal_year_2026()]
}
