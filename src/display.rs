//! Temperature display derivation
//!
//! Pure functions mapping a Celsius temperature to a unit-converted display
//! value and to one of seven background gradient bands. The record always
//! stores Celsius; conversion and banding are strictly display concerns.

use ratatui::style::Color;

/// Unit system for displayed temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Celsius, the provider's native unit
    #[default]
    Metric,
    /// Fahrenheit
    Imperial,
}

impl Unit {
    /// Returns the other unit, for the toggle key
    pub fn toggled(self) -> Self {
        match self {
            Unit::Metric => Unit::Imperial,
            Unit::Imperial => Unit::Metric,
        }
    }

    /// Degree symbol suffix for rendering
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }
}

/// Converts a Celsius temperature into the given unit
///
/// Metric is the identity; imperial applies `t * 9/5 + 32`. No rounding is
/// performed here, formatting belongs to the rendering layer.
pub fn convert(temp_c: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => temp_c,
        Unit::Imperial => temp_c * 9.0 / 5.0 + 32.0,
    }
}

/// One of seven temperature bands used to pick the background gradient
///
/// The variants are ordered coldest to hottest so band comparisons follow
/// temperature comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TempBand {
    Frigid,
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
    Extreme,
}

impl TempBand {
    /// Buckets a Celsius temperature into its band
    ///
    /// Boundaries sit at 0, 10, 20, 25, 30 and 35 °C, each belonging to the
    /// lower band (`<=` semantics). Total over all reals.
    pub fn for_celsius(temp_c: f64) -> Self {
        if temp_c <= 0.0 {
            TempBand::Frigid
        } else if temp_c <= 10.0 {
            TempBand::Cold
        } else if temp_c <= 20.0 {
            TempBand::Cool
        } else if temp_c <= 25.0 {
            TempBand::Mild
        } else if temp_c <= 30.0 {
            TempBand::Warm
        } else if temp_c <= 35.0 {
            TempBand::Hot
        } else {
            TempBand::Extreme
        }
    }

    /// Two-stop background gradient for this band
    pub fn gradient(self) -> [Color; 2] {
        match self {
            TempBand::Frigid => [Color::Rgb(15, 12, 41), Color::Rgb(36, 36, 62)],
            TempBand::Cold => [Color::Rgb(40, 60, 134), Color::Rgb(69, 162, 71)],
            TempBand::Cool => [Color::Rgb(58, 123, 213), Color::Rgb(58, 96, 115)],
            TempBand::Mild => [Color::Rgb(184, 233, 148), Color::Rgb(120, 224, 143)],
            TempBand::Warm => [Color::Rgb(255, 183, 94), Color::Rgb(237, 143, 3)],
            TempBand::Hot => [Color::Rgb(255, 126, 95), Color::Rgb(254, 180, 123)],
            TempBand::Extreme => [Color::Rgb(255, 81, 47), Color::Rgb(221, 36, 118)],
        }
    }

    /// Short name for the band
    pub fn label(self) -> &'static str {
        match self {
            TempBand::Frigid => "frigid",
            TempBand::Cold => "cold",
            TempBand::Cool => "cool",
            TempBand::Mild => "mild",
            TempBand::Warm => "warm",
            TempBand::Hot => "hot",
            TempBand::Extreme => "extreme",
        }
    }
}
