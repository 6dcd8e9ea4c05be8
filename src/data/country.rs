//! Static country data for the search form
//!
//! This module contains the fixed list of countries the widget can query,
//! mapping each display name to its ISO 3166-1 alpha-2 code.

use super::Country;

/// Static array of all supported countries
///
/// The set is fixed for the session; the display names are what the user
/// picks from and what favorites store, the codes are what OpenWeather
/// expects in the `q=city,CODE` query parameter.
pub static COUNTRIES: [Country; 7] = [
    Country {
        name: "Estados Unidos",
        code: "US",
    },
    Country {
        name: "México",
        code: "MX",
    },
    Country {
        name: "Argentina",
        code: "AR",
    },
    Country {
        name: "Colombia",
        code: "CO",
    },
    Country {
        name: "Costa Rica",
        code: "CR",
    },
    Country {
        name: "España",
        code: "ES",
    },
    Country {
        name: "Perú",
        code: "PE",
    },
];

/// Get a country by its display name
///
/// # Arguments
///
/// * `name` - The display name exactly as listed (e.g., "España")
///
/// # Returns
///
/// Returns `Some(&Country)` if found, `None` otherwise. The match is
/// case-sensitive: favorites persist the display name verbatim, so a
/// mismatch means the entry does not belong to the supported set.
pub fn country_by_name(name: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.name == name)
}

/// Get all supported countries in display order
pub fn all_countries() -> &'static [Country] {
    &COUNTRIES
}
