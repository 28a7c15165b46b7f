//! Social-security (IMSS) contribution models.
//!
//! A [`SocialSecurityBreakdown`] holds every employer and employee line item
//! for one pay period, along with the bases they were computed on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employer-side IMSS and housing-fund line items for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Fixed quota on one UMA per day worked (cuota fija).
    pub fixed_quota: Decimal,
    /// Surcharge on the base above three UMA.
    pub excess: Decimal,
    /// Sickness and maternity, cash benefits.
    pub cash_benefits: Decimal,
    /// Sickness and maternity, retiree medical expenses.
    pub retiree_medical: Decimal,
    /// Occupational risk at the employer's premium.
    pub occupational_risk: Decimal,
    /// Disability and life.
    pub disability_life: Decimal,
    /// Daycare and social benefits.
    pub daycare: Decimal,
    /// Retirement.
    pub retirement: Decimal,
    /// Unemployment and old age at the progressive employer rate.
    pub unemployment_old_age: Decimal,
    /// Housing fund (Infonavit).
    pub housing: Decimal,
    /// Employee share paid by the employer for a minimum-wage worker.
    pub absorbed_employee_share: Decimal,
    /// Sum of every employer item including the absorbed share.
    pub total: Decimal,
}

/// Employee-side IMSS line items for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeContributions {
    /// Surcharge on the base above three UMA.
    pub excess: Decimal,
    /// Sickness and maternity, cash benefits.
    pub cash_benefits: Decimal,
    /// Sickness and maternity, retiree medical expenses.
    pub retiree_medical: Decimal,
    /// Disability and life.
    pub disability_life: Decimal,
    /// Unemployment and old age.
    pub unemployment_old_age: Decimal,
    /// Sum of every employee item.
    pub total: Decimal,
}

impl EmployeeContributions {
    /// Returns the sickness-and-maternity subtotal (excess, cash benefits and
    /// retiree medical).
    pub fn sickness_maternity(&self) -> Decimal {
        self.excess + self.cash_benefits + self.retiree_medical
    }
}

impl EmployerContributions {
    /// Returns the sickness-and-maternity subtotal (excess, cash benefits and
    /// retiree medical). The fixed quota is reported separately.
    pub fn sickness_maternity(&self) -> Decimal {
        self.excess + self.cash_benefits + self.retiree_medical
    }
}

/// The complete IMSS calculation for one pay period.
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::compute_contributions;
/// use nomina_engine::config::get_yearly_config;
/// use rust_decimal_macros::dec;
///
/// let config = get_yearly_config(2025);
/// let breakdown = compute_contributions(dec!(500), dec!(15), dec!(0.0054355), None, config, None);
/// assert_eq!(breakdown.contribution_base, dec!(500));
/// assert_eq!(breakdown.employee.total.round_dp(2), dec!(187.76));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityBreakdown {
    /// The daily UMA used for caps, thresholds and the fixed quota.
    pub reference_unit: Decimal,
    /// The daily contribution base after the 25 UMA cap.
    pub contribution_base: Decimal,
    /// The part of the capped base above three UMA.
    pub excess_base: Decimal,
    /// The employer unemployment/old-age rate that was applied.
    pub unemployment_employer_rate: Decimal,
    /// Employer-side line items.
    pub employer: EmployerContributions,
    /// Employee-side line items.
    pub employee: EmployeeContributions,
}
