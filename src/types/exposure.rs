use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MetadataError;
use crate::types::fraction::Fraction;
use crate::types::measurement::{split_value_unit, Measurement, Unit};

const EXPECTED_TIME: &str = "`<fraction> <unit>` with a known time unit";
const EXPECTED_COMPENSATION: &str = "`<fraction> <unit>` in EV or stops";

/// Units an exposure time can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExposureTimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
}

impl Default for ExposureTimeUnit {
    fn default() -> Self {
        ExposureTimeUnit::Seconds
    }
}

impl Unit for ExposureTimeUnit {
    fn symbol(&self) -> &'static str {
        match self {
            ExposureTimeUnit::Milliseconds => "ms",
            ExposureTimeUnit::Seconds => "sec",
            ExposureTimeUnit::Minutes => "min",
        }
    }

    fn from_alias(token: &str) -> Option<Self> {
        let unit = match token.to_ascii_lowercase().as_str() {
            "msec" | "ms" | "millisecond" | "milliseconds" => ExposureTimeUnit::Milliseconds,
            "sec" | "s" | "second" | "seconds" => ExposureTimeUnit::Seconds,
            "min" | "m" | "minute" | "minutes" => ExposureTimeUnit::Minutes,
            _ => return None,
        };
        Some(unit)
    }
}

/// A shutter speed such as `1/250 sec` or `4 sec`.
pub type ExposureTime = Measurement<Fraction, ExposureTimeUnit>;

impl ExposureTime {
    pub fn from_ratio(
        numerator: i32,
        denominator: i32,
        unit: ExposureTimeUnit,
    ) -> Result<Self, MetadataError> {
        Ok(Measurement::new(Fraction::new(numerator, denominator)?, unit))
    }

    pub fn from_whole(value: i32, unit: ExposureTimeUnit) -> Self {
        Measurement::new(Fraction::from(value), unit)
    }
}

impl FromStr for ExposureTime {
    type Err = MetadataError;

    /// Parses values like `1/250 sec` or `1 min`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (fraction_token, unit_token) = split_value_unit(s, EXPECTED_TIME)?;
        let fraction: Fraction = fraction_token.parse()?;
        let unit = ExposureTimeUnit::from_alias(unit_token)
            .ok_or_else(|| MetadataError::format(s, EXPECTED_TIME))?;
        Ok(Measurement::new(fraction, unit))
    }
}

/// Units an exposure compensation can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExposureCompensationUnit {
    Ev,
    Stops,
}

impl Default for ExposureCompensationUnit {
    fn default() -> Self {
        ExposureCompensationUnit::Ev
    }
}

impl Unit for ExposureCompensationUnit {
    fn symbol(&self) -> &'static str {
        match self {
            ExposureCompensationUnit::Ev => "EV",
            ExposureCompensationUnit::Stops => "stops",
        }
    }

    fn from_alias(token: &str) -> Option<Self> {
        let unit = match token.to_ascii_lowercase().as_str() {
            "ev" => ExposureCompensationUnit::Ev,
            "s" | "stop" | "stops" => ExposureCompensationUnit::Stops,
            _ => return None,
        };
        Some(unit)
    }
}

/// An exposure bias such as `-1/3 EV`.
pub type ExposureCompensation = Measurement<Fraction, ExposureCompensationUnit>;

impl ExposureCompensation {
    pub fn from_ratio(
        numerator: i32,
        denominator: i32,
        unit: ExposureCompensationUnit,
    ) -> Result<Self, MetadataError> {
        Ok(Measurement::new(Fraction::new(numerator, denominator)?, unit))
    }

    pub fn from_whole(value: i32, unit: ExposureCompensationUnit) -> Self {
        Measurement::new(Fraction::from(value), unit)
    }
}

impl FromStr for ExposureCompensation {
    type Err = MetadataError;

    /// Parses values like `-1/3 EV` or `1 stop`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (fraction_token, unit_token) = split_value_unit(s, EXPECTED_COMPENSATION)?;
        let fraction: Fraction = fraction_token.parse()?;
        let unit = ExposureCompensationUnit::from_alias(unit_token)
            .ok_or_else(|| MetadataError::format(s, EXPECTED_COMPENSATION))?;
        Ok(Measurement::new(fraction, unit))
    }
}

/// Exposure-related settings recorded for one photo.
///
/// Mode strings are kept as the reader described them, lowercased; EXIF
/// vocabularies for them vary too much across vendors to enumerate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exposure {
    pub time: ExposureTime,
    pub mode: Option<String>,
    pub metering_mode: Option<String>,
    pub compensation: ExposureCompensation,
    pub iso: Option<i32>,
}
