//! Yearly vacation allowance model.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Allowance used for any year without an explicit entry.
pub const DEFAULT_ANNUAL_ALLOWANCE: Decimal = Decimal::from_parts(27, 0, 0, false, 0);

/// Largest allowance that can be configured for a single year.
pub const MAX_ANNUAL_ALLOWANCE: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Per-year vacation allowances with a fallback default.
///
/// # Example
///
/// ```
/// use vacation_ledger::models::VacationAllowance;
/// use rust_decimal::Decimal;
///
/// let mut allowance = VacationAllowance::default();
/// allowance.set(2025, Decimal::new(25, 0)).unwrap();
///
/// assert_eq!(allowance.for_year(2025), Decimal::new(25, 0));
/// assert_eq!(allowance.for_year(2026), Decimal::new(27, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationAllowance {
    /// Allowance applied to years without an explicit entry.
    pub default_days: Decimal,
    /// Explicit allowances keyed by calendar year.
    #[serde(default)]
    pub years: BTreeMap<i32, Decimal>,
}

impl Default for VacationAllowance {
    fn default() -> Self {
        Self {
            default_days: DEFAULT_ANNUAL_ALLOWANCE,
            years: BTreeMap::new(),
        }
    }
}

impl VacationAllowance {
    /// Creates an allowance table with the given default, checking its range.
    pub fn with_default(default_days: Decimal) -> EngineResult<Self> {
        validate_allowance(default_days)?;
        Ok(Self {
            default_days,
            years: BTreeMap::new(),
        })
    }

    /// Returns the allowance for `year`, falling back to the default.
    pub fn for_year(&self, year: i32) -> Decimal {
        self.years.get(&year).copied().unwrap_or(self.default_days)
    }

    /// Sets the allowance for `year`.
    ///
    /// Values outside `0..=365` are rejected with
    /// [`EngineError::InvalidAllowance`] and leave the table unchanged.
    pub fn set(&mut self, year: i32, days: Decimal) -> EngineResult<()> {
        validate_allowance(days)?;
        self.years.insert(year, days);
        Ok(())
    }
}

/// Checks that an allowance lies within `0..=365` days.
pub fn validate_allowance(days: Decimal) -> EngineResult<()> {
    if days < Decimal::ZERO || days > MAX_ANNUAL_ALLOWANCE {
        return Err(EngineError::InvalidAllowance {
            days,
            message: format!("must be between 0 and {}", MAX_ANNUAL_ALLOWANCE),
        });
    }
    Ok(())
}
