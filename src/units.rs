//! Length units of the host modeling tool.
//!
//! The host always stores lengths in inches. A model carries a unit index
//! (0..=5, the host's own enumeration) that selects the display unit used for
//! document dimensions and labels.

use crate::errors::ValidationError;
use crate::float_types::{CM_PER_INCH, INCHES_PER_FOOT, INCHES_PER_YARD, METERS_PER_INCH, MM_PER_INCH, Real};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A display unit, indexed the same way the host enumerates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Units {
    #[default]
    Inch,
    Foot,
    Millimeter,
    Centimeter,
    Meter,
    Yard,
}

impl Units {
    pub const ALL: [Units; 6] = [
        Units::Inch,
        Units::Foot,
        Units::Millimeter,
        Units::Centimeter,
        Units::Meter,
        Units::Yard,
    ];

    /// Look up a unit by the host's index, failing fast on anything outside `0..=5`.
    pub fn from_index(index: i64) -> Result<Self, ValidationError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(ValidationError::InvalidUnitIndex(index))
    }

    pub const fn index(self) -> i64 {
        match self {
            Units::Inch => 0,
            Units::Foot => 1,
            Units::Millimeter => 2,
            Units::Centimeter => 3,
            Units::Meter => 4,
            Units::Yard => 5,
        }
    }

    /// Suffix appended to formatted values, also used as the SVG document unit.
    pub const fn suffix(self) -> &'static str {
        match self {
            Units::Inch => "in",
            Units::Foot => "ft",
            Units::Millimeter => "mm",
            Units::Centimeter => "cm",
            Units::Meter => "m",
            Units::Yard => "yd",
        }
    }

    /// Convert a length in inches to this unit.
    pub fn from_inches(self, n: Real) -> Real {
        match self {
            Units::Inch => n,
            Units::Foot => n / INCHES_PER_FOOT,
            Units::Millimeter => n * MM_PER_INCH,
            Units::Centimeter => n * CM_PER_INCH,
            Units::Meter => n * METERS_PER_INCH,
            Units::Yard => n / INCHES_PER_YARD,
        }
    }

    /// Convert a length in this unit to inches.
    pub fn to_inches(self, n: Real) -> Real {
        match self {
            Units::Inch => n,
            Units::Foot => n * INCHES_PER_FOOT,
            Units::Millimeter => n / MM_PER_INCH,
            Units::Centimeter => n / CM_PER_INCH,
            Units::Meter => n / METERS_PER_INCH,
            Units::Yard => n * INCHES_PER_YARD,
        }
    }

    /// Format a value already expressed in this unit, e.g. `25.400mm`.
    pub fn to_unit_str(self, n: Real, fraction_digits: usize) -> String {
        format!("{:.*}{}", fraction_digits, n, self.suffix())
    }

    /// Convert a length in inches and format it in this unit.
    pub fn format_inches(self, inches: Real, fraction_digits: usize) -> String {
        self.to_unit_str(self.from_inches(inches), fraction_digits)
    }
}

impl TryFrom<i64> for Units {
    type Error = ValidationError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<Units> for i64 {
    fn from(units: Units) -> Self {
        units.index()
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
