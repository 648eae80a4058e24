//! Measured Dimensions
//!
//! The seven soil/climate variables recorded for every observation in the
//! reference dataset, in dataset column order:
//! N, P, K, temperature, humidity, pH, rainfall.
//!
//! Each dimension carries its scoring weight and the wording used when a
//! query value falls inside a crop's observed envelope.

use serde::Serialize;
use std::fmt;

/// Number of numeric dimensions per observation
pub const DIMENSION_COUNT: usize = 7;

/// One of the seven measured variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Nitrogen,    // N
    Phosphorus,  // P
    Potassium,   // K
    Temperature, // °C
    Humidity,    // %
    Ph,
    Rainfall,    // mm
}

impl Dimension {
    /// All dimensions in dataset column order
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Nitrogen,
        Dimension::Phosphorus,
        Dimension::Potassium,
        Dimension::Temperature,
        Dimension::Humidity,
        Dimension::Ph,
        Dimension::Rainfall,
    ];

    /// Position of this dimension in a row (and in per-dimension arrays)
    pub fn index(self) -> usize {
        match self {
            Dimension::Nitrogen => 0,
            Dimension::Phosphorus => 1,
            Dimension::Potassium => 2,
            Dimension::Temperature => 3,
            Dimension::Humidity => 4,
            Dimension::Ph => 5,
            Dimension::Rainfall => 6,
        }
    }

    /// Scoring weight.
    ///
    /// Temperature, pH and rainfall count for more than nutrients and humidity.
    pub fn weight(self) -> f64 {
        match self {
            Dimension::Temperature => 1.5,
            Dimension::Ph => 1.2,
            Dimension::Rainfall => 1.3,
            Dimension::Nitrogen
            | Dimension::Phosphorus
            | Dimension::Potassium
            | Dimension::Humidity => 1.0,
        }
    }

    /// Column header used in the reference CSV
    pub fn column_name(self) -> &'static str {
        match self {
            Dimension::Nitrogen => "N",
            Dimension::Phosphorus => "P",
            Dimension::Potassium => "K",
            Dimension::Temperature => "temperature",
            Dimension::Humidity => "humidity",
            Dimension::Ph => "ph",
            Dimension::Rainfall => "rainfall",
        }
    }

    /// Human-readable subject used in match reasons
    pub fn subject(self) -> &'static str {
        match self {
            Dimension::Nitrogen => "Nitrogen level",
            Dimension::Phosphorus => "Phosphorus level",
            Dimension::Potassium => "Potassium level",
            Dimension::Temperature => "Temperature",
            Dimension::Humidity => "Humidity",
            Dimension::Ph => "pH level",
            Dimension::Rainfall => "Rainfall",
        }
    }

    /// Unit suffix appended to the value (no space)
    pub fn unit(self) -> &'static str {
        match self {
            Dimension::Temperature => "°C",
            Dimension::Humidity => "%",
            Dimension::Rainfall => "mm",
            _ => "",
        }
    }

    /// Qualitative phrase for an in-envelope value (one per dimension)
    pub fn match_phrase(self) -> &'static str {
        match self {
            Dimension::Nitrogen => "is ideal",
            Dimension::Phosphorus => "matches well",
            Dimension::Potassium => "is suitable",
            Dimension::Temperature => "is perfect",
            Dimension::Humidity => "is optimal",
            Dimension::Ph => "is good",
            Dimension::Rainfall => "is appropriate",
        }
    }

    /// Format a match reason for `value`
    ///
    /// E.g. "Temperature (25°C) is perfect"
    pub fn match_reason(self, value: f64) -> String {
        format!(
            "{} ({}{}) {}",
            self.subject(),
            value,
            self.unit(),
            self.match_phrase()
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
