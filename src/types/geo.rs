use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MetadataError;
use crate::types::length::Length;

const EXPECTED: &str = r#"a coordinate like `50° 39' 55.06"`"#;

/// One angular coordinate in degrees/minutes/seconds notation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    degrees: i32,
    minutes: i32,
    seconds: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, rejecting out-of-range components. Nothing is
    /// clamped; a reading of 350° is a bad reading, not a wrapped one.
    pub fn new(degrees: i32, minutes: i32, seconds: f64) -> Result<Self, MetadataError> {
        if !(-90..=90).contains(&degrees) {
            return Err(MetadataError::validation(
                "degrees must be between -90 and 90",
            ));
        }
        if !(0..=59).contains(&minutes) {
            return Err(MetadataError::validation(
                "minutes must be between 0 and 59",
            ));
        }
        if !(0.0..60.0).contains(&seconds) {
            return Err(MetadataError::validation(
                "seconds must be at least 0 and below 60",
            ));
        }
        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    pub fn degrees(&self) -> i32 {
        self.degrees
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }
}

impl FromStr for GeoCoordinate {
    type Err = MetadataError;

    /// Parses DMS notation such as `50° 39' 55,06"`.
    ///
    /// The minute apostrophe and the trailing quote are optional; the
    /// seconds accept either comma or dot as the decimal separator. The
    /// whole input must match; trailing garbage is malformed, out-of-range
    /// components are invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = || MetadataError::format(input, EXPECTED);

        let (degrees_token, rest) = input.split_once('°').ok_or_else(err)?;
        let degrees = parse_signed_int(degrees_token).ok_or_else(err)?;

        let rest = skip_whitespace(rest).ok_or_else(err)?;
        let (minutes_token, rest) = take_digits(rest);
        let minutes = minutes_token.parse().map_err(|_| err())?;
        let rest = rest.strip_prefix('\'').unwrap_or(rest);

        let rest = skip_whitespace(rest).ok_or_else(err)?;
        let (seconds_token, rest) = take_decimal(rest);
        let seconds = seconds_token
            .replace(',', ".")
            .parse()
            .map_err(|_| err())?;

        let rest = rest.strip_prefix('"').unwrap_or(rest);
        if !rest.is_empty() {
            return Err(err());
        }

        GeoCoordinate::new(degrees, minutes, seconds)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}' {}\"", self.degrees, self.minutes, self.seconds)
    }
}

fn parse_signed_int(token: &str) -> Option<i32> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Consumes at least one whitespace character.
fn skip_whitespace(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    (trimmed.len() < s.len()).then_some(trimmed)
}

fn take_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn take_decimal(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != ',')
        .unwrap_or(s.len());
    s.split_at(end)
}

/// A complete positional reading: both coordinates plus altitude.
///
/// Only constructed when latitude, longitude, and altitude were all present
/// upstream; a partial reading carries no location at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: GeoCoordinate,
    pub longitude: GeoCoordinate,
    pub altitude: Length,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_comma_separated_seconds() {
        let coordinate: GeoCoordinate = "50° 39' 55,06\"".parse().unwrap();
        assert_eq!(coordinate, GeoCoordinate::new(50, 39, 55.06).unwrap());
    }

    #[test]
    fn parses_dot_separator_and_missing_trailing_quote() {
        let coordinate: GeoCoordinate = "7° 12' 35.87".parse().unwrap();
        assert_eq!(coordinate.degrees(), 7);
        assert_eq!(coordinate.minutes(), 12);
        assert_eq!(coordinate.seconds(), 35.87);
    }

    #[test]
    fn apostrophe_is_optional() {
        let coordinate: GeoCoordinate = "-3° 4 5,0".parse().unwrap();
        assert_eq!(coordinate.degrees(), -3);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert!("  50° 39' 55,06\"  ".parse::<GeoCoordinate>().is_ok());
    }

    #[test]
    fn out_of_range_degrees_fail_validation() {
        assert_matches!(
            "350° 39' 55,06\"".parse::<GeoCoordinate>(),
            Err(MetadataError::Validation { .. })
        );
    }

    #[test]
    fn out_of_range_minutes_and_seconds_fail_validation() {
        assert_matches!(
            "50° 60' 55,06\"".parse::<GeoCoordinate>(),
            Err(MetadataError::Validation { .. })
        );
        assert_matches!(
            "50° 39' 60,0\"".parse::<GeoCoordinate>(),
            Err(MetadataError::Validation { .. })
        );
        assert_matches!(GeoCoordinate::new(0, 0, -0.1), Err(MetadataError::Validation { .. }));
    }

    #[test]
    fn non_matching_input_is_malformed() {
        assert_matches!(
            "all your base are belong to us".parse::<GeoCoordinate>(),
            Err(MetadataError::Format { .. })
        );
        assert_matches!("50°39'55,06\"".parse::<GeoCoordinate>(), Err(MetadataError::Format { .. }));
        assert_matches!(
            "50° 39' 55,06\" north".parse::<GeoCoordinate>(),
            Err(MetadataError::Format { .. })
        );
        assert_matches!(
            "50° 39' 55,0,6".parse::<GeoCoordinate>(),
            Err(MetadataError::Format { .. })
        );
    }
}
