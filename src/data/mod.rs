//! Core data models for the clima widget
//!
//! This module contains the domain types shared across the application:
//! the country table and the weather record built from a provider response.

pub mod country;
pub mod weather;

pub use country::{all_countries, country_by_name};
pub use weather::{QueryError, WeatherClient};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A country the widget can query
///
/// Uses `&'static str` for both fields to allow static initialization of
/// the COUNTRIES array; the set is fixed and immutable for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Display name shown in the selector and stored in favorites
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code sent to the provider
    pub code: &'static str,
}

/// Current conditions for one city, mapped from a single provider response
///
/// Constructed wholesale by the query pipeline and replaced wholesale on
/// each successful lookup; temperatures are Celsius as delivered by the
/// provider, unit conversion happens at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// City name as resolved by the provider
    pub city: String,
    /// ISO country code as resolved by the provider
    pub country_code: String,
    /// Current temperature in Celsius
    pub temp_c: f64,
    /// Daily minimum temperature in Celsius
    pub temp_min_c: f64,
    /// Daily maximum temperature in Celsius
    pub temp_max_c: f64,
    /// Feels-like temperature in Celsius
    pub feels_like_c: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Atmospheric pressure in hPa
    pub pressure_hpa: u32,
    /// Full CDN URL for the condition icon
    pub icon_url: String,
    /// Condition description with each word capitalized
    pub condition_text: String,
    /// When this record was fetched
    pub fetched_at: DateTime<Utc>,
}
