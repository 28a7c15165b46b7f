//! Fiscal-year configuration for the payroll projection engine.
//!
//! Each supported fiscal year is described by a [`YearlyConfig`]: reference
//! values (UMA, minimum wages), subsidy thresholds, the employer
//! unemployment/old-age schedule and the three ISR bracket tables. The
//! engine only reads these values; it never derives them.
//!
//! # Example
//!
//! ```
//! use nomina_engine::config::get_yearly_config;
//!
//! let config = get_yearly_config(2026);
//! println!("UMA {}: {}", config.year, config.uma_daily);
//! ```

pub mod builtin;
mod loader;
mod store;
mod types;

pub use loader::ConfigLoader;
pub use store::{ConfigStore, get_yearly_config};
pub use types::{
    BracketRow, BracketTables, MINIMUM_WAGE_TOLERANCE, UnemploymentRateStep,
    UnemploymentSchedule, YearlyConfig,
};
