use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MetadataError;
use crate::types::measurement::{split_value_unit, Measurement, Unit};

const EXPECTED: &str = "`<value> <unit>` with a known length unit";

/// Units a length can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Pixels,
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
}

impl Unit for LengthUnit {
    fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Pixels => "px",
            LengthUnit::Millimeters => "mm",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Meters => "m",
            LengthUnit::Kilometers => "km",
        }
    }

    fn from_alias(token: &str) -> Option<Self> {
        let unit = match token.to_ascii_lowercase().as_str() {
            "px" | "pixel" | "pixels" => LengthUnit::Pixels,
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                LengthUnit::Millimeters
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                LengthUnit::Centimeters
            }
            "m" | "meter" | "meters" | "metre" | "metres" => LengthUnit::Meters,
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                LengthUnit::Kilometers
            }
            _ => return None,
        };
        Some(unit)
    }
}

/// A length such as `1920 px` or `50 mm`.
pub type Length = Measurement<i32, LengthUnit>;

impl Length {
    /// A pixel count, the unit bare numbers carry in JPEG dimension tags.
    pub fn pixels(value: i32) -> Self {
        Measurement::new(value, LengthUnit::Pixels)
    }

    /// Converts a kilometer length to meters; other distance units are
    /// returned unchanged.
    ///
    /// GPS altitudes occasionally arrive in kilometers while storage wants
    /// meters. Callers must not invoke this on pixel lengths; there is no
    /// meaningful conversion for them.
    pub fn normalise(self) -> Self {
        debug_assert!(
            self.unit() != LengthUnit::Pixels,
            "normalise() is only defined for distance units"
        );
        match self.unit() {
            LengthUnit::Kilometers => Measurement::new(self.value() * 1000, LengthUnit::Meters),
            _ => self,
        }
    }
}

impl FromStr for Length {
    type Err = MetadataError;

    /// Parses values like `1920 pixels`, `4.2 mm`, or `329,48 metres`.
    ///
    /// A comma decimal separator is accepted and the numeric part is
    /// truncated to a whole number, since readers emit fractional focal
    /// lengths and altitudes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value_token, unit_token) = split_value_unit(s, EXPECTED)?;
        let value = value_token
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| MetadataError::format(s, EXPECTED))? as i32;
        let unit =
            LengthUnit::from_alias(unit_token).ok_or_else(|| MetadataError::format(s, EXPECTED))?;
        Ok(Measurement::new(value, unit))
    }
}

/// Pixel dimensions of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: Length,
    pub height: Length,
}

impl Dimensions {
    pub fn from_pixels(width: i32, height: i32) -> Self {
        Self {
            width: Length::pixels(width),
            height: Length::pixels(height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn alias_normalizes_to_canonical_symbol() {
        let length: Length = "1920 pixels".parse().unwrap();
        assert_eq!(length.to_string(), "1920 px");
        assert_eq!(length.unit(), LengthUnit::Pixels);
    }

    #[test]
    fn alias_lookup_is_case_insensitive() {
        let length: Length = "10 Pixels".parse().unwrap();
        assert_eq!(length.unit(), LengthUnit::Pixels);
        let length: Length = "50 MM".parse().unwrap();
        assert_eq!(length.unit(), LengthUnit::Millimeters);
    }

    #[test]
    fn fractional_values_truncate() {
        let length: Length = "4.2 mm".parse().unwrap();
        assert_eq!(length.value(), 4);
        assert_eq!(length.to_string(), "4 mm");
    }

    #[test]
    fn comma_decimal_separator_is_accepted() {
        let length: Length = "329,48 metres".parse().unwrap();
        assert_eq!(length.value(), 329);
        assert_eq!(length.unit(), LengthUnit::Meters);
    }

    #[test]
    fn normalise_converts_kilometers_to_meters() {
        let altitude: Length = "2 km".parse().unwrap();
        assert_eq!(altitude.normalise().to_string(), "2000 m");
    }

    #[test]
    fn normalise_leaves_meters_alone() {
        let altitude: Length = "329 m".parse().unwrap();
        assert_eq!(altitude.normalise(), altitude);
    }

    #[test]
    fn dimensions_pair_pixel_lengths() {
        let dimensions = Dimensions::from_pixels(1920, 1280);
        assert_eq!(dimensions.width.to_string(), "1920 px");
        assert_eq!(dimensions.height.to_string(), "1280 px");
    }

    #[test]
    fn rejects_unknown_units_and_bad_shapes() {
        assert_matches!("10 lightyears".parse::<Length>(), Err(MetadataError::Format { .. }));
        assert_matches!("1920".parse::<Length>(), Err(MetadataError::Format { .. }));
        assert_matches!("1920 px extra".parse::<Length>(), Err(MetadataError::Format { .. }));
        assert_matches!("tall px".parse::<Length>(), Err(MetadataError::Format { .. }));
    }
}
