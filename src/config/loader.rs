//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading locale
//! calendars and allowances from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::HolidayCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{VacationAllowance, validate_allowance};

use super::types::{CalendarMetadata, HolidaysConfig, VacationConfig};

/// Loads and provides access to vacation configuration.
///
/// # Directory Structure
///
/// ```text
/// config/cz/
/// ├── calendar.yaml   # Locale metadata and weekend days
/// ├── holidays.yaml   # Fixed and Easter-relative public holidays
/// └── allowance.yaml  # Default and per-year vacation allowances
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/cz").unwrap();
/// println!("Loaded calendar: {}", loader.metadata().name);
/// println!("Allowance for 2025: {}", loader.allowance_for_year(2025));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: VacationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - A fixed holiday names an impossible date (`InvalidHolidayRule`)
    /// - An allowance lies outside `0..=365` (`InvalidAllowance`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CalendarMetadata>(&path.join("calendar.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;
        let allowance = Self::load_yaml::<VacationAllowance>(&path.join("allowance.yaml"))?;

        validate_allowance(allowance.default_days)?;
        for days in allowance.years.values() {
            validate_allowance(*days)?;
        }

        let calendar = HolidayCalendar::new(
            metadata.name.clone(),
            metadata.weekend.clone(),
            holidays.fixed,
            holidays.easter,
        )?;

        debug!(
            code = %metadata.code,
            calendar = %calendar.name(),
            allowance_years = allowance.years.len(),
            "Loaded vacation configuration"
        );

        Ok(Self {
            config: VacationConfig::new(metadata, calendar, allowance),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &VacationConfig {
        &self.config
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        self.config.metadata()
    }

    /// Returns the holiday calendar used as the working-day oracle.
    pub fn calendar(&self) -> &HolidayCalendar {
        self.config.calendar()
    }

    /// Returns the allowance configured for `year`.
    pub fn allowance_for_year(&self, year: i32) -> Decimal {
        self.config.allowance().for_year(year)
    }
}
