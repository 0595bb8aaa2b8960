//! Configuration loading and management for the Vacation Ledger.
//!
//! This module provides functionality to load a locale configuration from
//! YAML files: calendar metadata, public holiday rules and vacation
//! allowances.
//!
//! # Example
//!
//! ```no_run
//! use vacation_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cz").unwrap();
//! println!("Loaded calendar: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarMetadata, HolidaysConfig, VacationConfig};
