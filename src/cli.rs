//! Command-line interface parsing for clima
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --country/--city pair for querying a city directly on startup.

use clap::Parser;
use thiserror::Error;

use crate::data::{country_by_name, Country};
use crate::display::Unit;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified country name is not in the supported set
    #[error("Unknown country: '{0}'. Valid countries: Estados Unidos, México, Argentina, Colombia, Costa Rica, España, Perú")]
    UnknownCountry(String),

    /// The specified unit is not recognized
    #[error("Invalid unit: '{0}'. Valid units: c, f")]
    InvalidUnit(String),
}

/// clima - Terminal weather lookup with saved favorite cities
#[derive(Parser, Debug)]
#[command(name = "clima")]
#[command(about = "Look up current weather by city and country, with saved favorites")]
#[command(version)]
pub struct Cli {
    /// Pre-select a country by its display name
    ///
    /// Examples:
    ///   clima --country "España"
    ///   clima --country "Perú" --city lima   # looks the city up immediately
    #[arg(long, value_name = "NAME")]
    pub country: Option<String>,

    /// Pre-fill the city field; together with --country the lookup runs on startup
    #[arg(long, value_name = "CITY")]
    pub city: Option<String>,

    /// Initial temperature unit: "c" (Celsius, default) or "f" (Fahrenheit)
    #[arg(long, value_name = "UNIT")]
    pub unit: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Country to pre-select, validated against the table
    pub initial_country: Option<&'static Country>,
    /// City text to pre-fill
    pub initial_city: Option<String>,
    /// Initial display unit
    pub unit: Unit,
    /// Whether to submit the pre-filled selection immediately
    pub auto_query: bool,
}

/// Parses a unit string argument into a Unit.
///
/// # Arguments
/// * `s` - The unit string from CLI
///
/// # Returns
/// * `Ok(Unit)` if the string matches a valid unit
/// * `Err(CliError::InvalidUnit)` otherwise
pub fn parse_unit_arg(s: &str) -> Result<Unit, CliError> {
    match s.to_lowercase().as_str() {
        "c" | "celsius" | "metric" => Ok(Unit::Metric),
        "f" | "fahrenheit" | "imperial" => Ok(Unit::Imperial),
        _ => Err(CliError::InvalidUnit(s.to_string())),
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// An unknown --country or --unit fails here, before any terminal
    /// setup. The lookup is only auto-submitted when both --country and a
    /// non-blank --city were given.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let initial_country = match &cli.country {
            None => None,
            Some(name) => Some(
                country_by_name(name)
                    .ok_or_else(|| CliError::UnknownCountry(name.clone()))?,
            ),
        };

        let unit = match &cli.unit {
            None => Unit::default(),
            Some(s) => parse_unit_arg(s)?,
        };

        let initial_city = cli
            .city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(str::to_string);

        let auto_query = initial_country.is_some() && initial_city.is_some();

        Ok(StartupConfig {
            initial_country,
            initial_city,
            unit,
            auto_query,
        })
    }
}
