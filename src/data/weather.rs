//! OpenWeather query pipeline
//!
//! This module validates a city/country selection, issues a single request
//! to the OpenWeather current-conditions endpoint, and maps the raw
//! response into our `WeatherRecord` shape.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{country_by_name, WeatherRecord};

/// Base URL for the OpenWeather current-conditions API
const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// CDN template for condition icons, keyed by the provider's icon code
fn icon_url(icon_code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon_code}@2x.png")
}

/// Errors surfaced by a weather lookup
///
/// A closed set: every failure a query can produce maps to one of these,
/// and the `Display` string per variant is exactly what the UI shows. The
/// `detail` on `LookupFailed` keeps the transport/status/parse cause for
/// diagnostics without widening the user-visible contract.
#[derive(Debug, Error)]
pub enum QueryError {
    /// No country selected, or the stored country name is not in the table
    #[error("a country must be selected")]
    CountryRequired,

    /// City field empty or whitespace-only
    #[error("the city field is required")]
    CityRequired,

    /// Network failure, non-success status, or unusable response body
    #[error("could not fetch the weather, check the city name")]
    LookupFailed {
        /// Internal cause, never shown to the user
        detail: String,
    },
}

/// Client for the OpenWeather current-conditions endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Creates a new client with the given API key
    ///
    /// An empty key is accepted; the provider will reject the request and
    /// the lookup reports `LookupFailed` like any other non-success status.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: OPENWEATHER_BASE_URL.to_string(),
        }
    }

    /// Overrides the endpoint base URL
    ///
    /// Useful for pointing the pipeline at a local stub in tests.
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Looks up current conditions for a city in a country
    ///
    /// Validates before any I/O: `country_name` must resolve against the
    /// country table and `city` must be non-empty after trimming. The
    /// request is sent exactly once, with metric units and Spanish
    /// condition text, and the response is mapped wholesale into a
    /// `WeatherRecord`.
    ///
    /// # Arguments
    /// * `city` - City name as entered
    /// * `country_name` - Country display name (e.g., "España")
    ///
    /// # Returns
    /// * `Ok(WeatherRecord)` - A fully populated record
    /// * `Err(QueryError)` - Validation or lookup failure; never partial data
    pub async fn lookup(
        &self,
        city: &str,
        country_name: &str,
    ) -> Result<WeatherRecord, QueryError> {
        let country =
            country_by_name(country_name).ok_or(QueryError::CountryRequired)?;

        let city = city.trim();
        if city.is_empty() {
            return Err(QueryError::CityRequired);
        }

        let place = format!("{},{}", city, country.code);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", place.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "es"),
            ])
            .send()
            .await
            .map_err(|e| QueryError::LookupFailed {
                detail: format!("transport: {e}"),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::LookupFailed {
                detail: format!("body read: {e}"),
            })?;

        if !status.is_success() {
            return Err(QueryError::LookupFailed {
                detail: format!("status {}: {}", status, truncate_detail(&body)),
            });
        }

        map_response(&body)
    }
}

/// Maps a raw OpenWeather response body into a `WeatherRecord`
///
/// Pure with respect to the network: the body is a string, so the mapping
/// is testable against fixtures. Any schema mismatch, including an empty
/// `weather` array, is a `LookupFailed` — callers get a complete record or
/// an error, never a partial one.
fn map_response(body: &str) -> Result<WeatherRecord, QueryError> {
    let parsed: OwResponse =
        serde_json::from_str(body).map_err(|e| QueryError::LookupFailed {
            detail: format!("parse: {e}"),
        })?;

    let (icon, description) = {
        let first = parsed
            .weather
            .first()
            .ok_or_else(|| QueryError::LookupFailed {
                detail: "weather array empty".to_string(),
            })?;
        (first.icon.clone(), first.description.clone())
    };

    Ok(WeatherRecord {
        city: parsed.name,
        country_code: parsed.sys.country,
        temp_c: parsed.main.temp,
        temp_min_c: parsed.main.temp_min,
        temp_max_c: parsed.main.temp_max,
        feels_like_c: parsed.main.feels_like,
        humidity: parsed.main.humidity,
        pressure_hpa: parsed.main.pressure,
        icon_url: icon_url(&icon),
        condition_text: title_case_condition(&description),
        fetched_at: Utc::now(),
    })
}

/// Capitalizes the condition description for display
///
/// Splits on whitespace, uppercases each token's first character, and
/// rejoins with single spaces. Not locale-aware; the provider already
/// localizes the text itself.
fn title_case_condition(description: &str) -> String {
    description
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trims an error body down to a loggable size
fn truncate_detail(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

/// OpenWeather current-conditions response structure
#[derive(Debug, Deserialize)]
struct OwResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
    description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample valid OpenWeather current-conditions response
    const VALID_RESPONSE: &str = r#"{
        "coord": {"lon": -3.7026, "lat": 40.4165},
        "weather": [
            {"id": 800, "main": "Clear", "description": "cielo claro", "icon": "01d"}
        ],
        "base": "stations",
        "main": {
            "temp": 22.5,
            "feels_like": 23.1,
            "temp_min": 18.2,
            "temp_max": 26.4,
            "pressure": 1015,
            "humidity": 43
        },
        "visibility": 10000,
        "wind": {"speed": 2.57, "deg": 20},
        "clouds": {"all": 0},
        "dt": 1726416000,
        "sys": {"type": 2, "id": 2007545, "country": "ES", "sunrise": 1726376088, "sunset": 1726420425},
        "timezone": 7200,
        "id": 3117735,
        "name": "Madrid",
        "cod": 200
    }"#;

    #[test]
    fn test_map_valid_response() {
        let record = map_response(VALID_RESPONSE).expect("Failed to map valid response");

        assert_eq!(record.city, "Madrid");
        assert_eq!(record.country_code, "ES");
        assert!((record.temp_c - 22.5).abs() < 0.01);
        assert!((record.temp_min_c - 18.2).abs() < 0.01);
        assert!((record.temp_max_c - 26.4).abs() < 0.01);
        assert!((record.feels_like_c - 23.1).abs() < 0.01);
        assert_eq!(record.humidity, 43);
        assert_eq!(record.pressure_hpa, 1015);
        assert_eq!(
            record.icon_url,
            "https://openweathermap.org/img/wn/01d@2x.png"
        );
        assert_eq!(record.condition_text, "Cielo Claro");
    }

    #[test]
    fn test_map_malformed_json_is_lookup_failed() {
        let result = map_response("{ not json ]");
        assert!(matches!(result, Err(QueryError::LookupFailed { .. })));
    }

    #[test]
    fn test_map_missing_main_is_lookup_failed() {
        let body = r#"{
            "weather": [{"id": 800, "main": "Clear", "description": "cielo claro", "icon": "01d"}],
            "sys": {"country": "ES"},
            "name": "Madrid"
        }"#;

        let result = map_response(body);
        assert!(matches!(result, Err(QueryError::LookupFailed { .. })));
    }

    #[test]
    fn test_map_empty_weather_array_is_lookup_failed() {
        let body = r#"{
            "weather": [],
            "main": {
                "temp": 22.5,
                "feels_like": 23.1,
                "temp_min": 18.2,
                "temp_max": 26.4,
                "pressure": 1015,
                "humidity": 43
            },
            "sys": {"country": "ES"},
            "name": "Madrid"
        }"#;

        let result = map_response(body);
        match result {
            Err(QueryError::LookupFailed { detail }) => {
                assert!(detail.contains("weather array empty"), "detail: {}", detail);
            }
            other => panic!("Expected LookupFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_map_uses_first_weather_entry() {
        let body = r#"{
            "weather": [
                {"id": 500, "main": "Rain", "description": "lluvia ligera", "icon": "10d"},
                {"id": 701, "main": "Mist", "description": "neblina", "icon": "50d"}
            ],
            "main": {
                "temp": 12.0,
                "feels_like": 11.2,
                "temp_min": 10.0,
                "temp_max": 14.0,
                "pressure": 1002,
                "humidity": 90
            },
            "sys": {"country": "PE"},
            "name": "Lima"
        }"#;

        let record = map_response(body).expect("Failed to map response");
        assert_eq!(record.condition_text, "Lluvia Ligera");
        assert_eq!(
            record.icon_url,
            "https://openweathermap.org/img/wn/10d@2x.png"
        );
    }

    #[test]
    fn test_title_case_condition_each_word() {
        assert_eq!(title_case_condition("cielo claro"), "Cielo Claro");
        assert_eq!(title_case_condition("lluvia ligera"), "Lluvia Ligera");
        assert_eq!(title_case_condition("nubes"), "Nubes");
    }

    #[test]
    fn test_title_case_condition_collapses_whitespace() {
        assert_eq!(title_case_condition("muy   nuboso"), "Muy Nuboso");
        assert_eq!(title_case_condition("  algo de nubes  "), "Algo De Nubes");
    }

    #[test]
    fn test_title_case_condition_empty() {
        assert_eq!(title_case_condition(""), "");
        assert_eq!(title_case_condition("   "), "");
    }

    #[test]
    fn test_icon_url_template() {
        assert_eq!(
            icon_url("04n"),
            "https://openweathermap.org/img/wn/04n@2x.png"
        );
    }

    #[test]
    fn test_truncate_detail_short_body_unchanged() {
        assert_eq!(truncate_detail("short"), "short");
    }

    #[test]
    fn test_truncate_detail_long_body() {
        let body = "x".repeat(500);
        let truncated = truncate_detail(&body);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() < body.len());
    }

    #[tokio::test]
    async fn test_lookup_unknown_country_fails_without_io() {
        let client = WeatherClient::new("irrelevant".to_string());

        let result = client.lookup("Lima", "Atlantis").await;
        assert!(matches!(result, Err(QueryError::CountryRequired)));
    }

    #[tokio::test]
    async fn test_lookup_empty_country_fails_without_io() {
        let client = WeatherClient::new("irrelevant".to_string());

        let result = client.lookup("Lima", "").await;
        assert!(matches!(result, Err(QueryError::CountryRequired)));
    }

    #[tokio::test]
    async fn test_lookup_blank_city_fails_without_io() {
        let client = WeatherClient::new("irrelevant".to_string());

        let result = client.lookup("   ", "Perú").await;
        assert!(matches!(result, Err(QueryError::CityRequired)));
    }

    #[test]
    fn test_error_messages_are_fixed_per_variant() {
        assert_eq!(
            QueryError::CountryRequired.to_string(),
            "a country must be selected"
        );
        assert_eq!(
            QueryError::CityRequired.to_string(),
            "the city field is required"
        );
        let failed = QueryError::LookupFailed {
            detail: "status 404: city not found".to_string(),
        };
        assert_eq!(
            failed.to_string(),
            "could not fetch the weather, check the city name"
        );
    }
}
