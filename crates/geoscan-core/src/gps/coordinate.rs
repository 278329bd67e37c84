//! Degrees-minutes-seconds to decimal degree conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::GeoError;

/// Hemisphere reference stored alongside a GPS coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Sign applied to the decimal value: negative south and west.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }

    /// Returns true for references that qualify a latitude.
    #[inline]
    pub fn is_latitude(self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::South)
    }

    /// The single-letter EXIF reference.
    pub fn as_str(self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        }
    }
}

impl FromStr for Hemisphere {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "N" => Ok(Hemisphere::North),
            "S" => Ok(Hemisphere::South),
            "E" => Ok(Hemisphere::East),
            "W" => Ok(Hemisphere::West),
            _ => Err(GeoError::InvalidReference(s.to_string())),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a `"(degrees, minutes, seconds)"` string into its three components.
///
/// Square brackets are accepted in place of parentheses.
///
/// # Errors
///
/// Returns `GeoError::Parse` if the delimiters are missing, the string does
/// not hold exactly three components, or any component is not a finite number.
pub fn parse_dms(dms: &str) -> Result<(f64, f64, f64), GeoError> {
    let inner = dms
        .trim()
        .strip_prefix(&['(', '['][..])
        .and_then(|rest| rest.strip_suffix(&[')', ']'][..]))
        .ok_or_else(|| GeoError::Parse(format!("{dms:?} is not a bracketed triple")))?;

    let components = inner
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(GeoError::Parse(format!(
                    "{part:?} in {dms:?} is not a finite number"
                ))),
            }
        })
        .collect::<Result<Vec<f64>, GeoError>>()?;

    match components.as_slice() {
        &[degrees, minutes, seconds] => Ok((degrees, minutes, seconds)),
        _ => Err(GeoError::Parse(format!(
            "expected 3 components in {dms:?}, found {}",
            components.len()
        ))),
    }
}

/// Convert a DMS coordinate string to signed decimal degrees.
///
/// # Arguments
///
/// * `dms` - Coordinate as formatted from the GPS IFD, e.g. `"(10, 30, 0)"`
/// * `reference` - Hemisphere the coordinate lies in
///
/// # Returns
///
/// `degrees + minutes / 60 + seconds / 3600`, negated for south and west.
pub fn dms_to_decimal(dms: &str, reference: Hemisphere) -> Result<f64, GeoError> {
    let (degrees, minutes, seconds) = parse_dms(dms)?;
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    Ok(decimal * reference.sign())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
