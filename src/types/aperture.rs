use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MetadataError;

const EXPECTED: &str = "an f-number like `f/5.6`";

/// A lens aperture, stored as the unrounded f-number.
///
/// Display rounds to one decimal place; equality and ordering use the exact
/// value as parsed, so `f/5.6` and `f/5.600001` format alike but compare
/// unequal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Aperture(f64);

impl Aperture {
    /// Creates an aperture, rejecting non-positive f-numbers.
    pub fn new(value: f64) -> Result<Self, MetadataError> {
        if value.is_nan() || value <= 0.0 {
            return Err(MetadataError::validation("aperture must be positive"));
        }
        Ok(Self(value))
    }

    /// The exact value as parsed, without display rounding.
    pub fn value(&self) -> f64 {
        self.0
    }

    // Half-up rounding in integer tenths; `{:.1}` would round ties to even.
    fn rounded_tenths(&self) -> i64 {
        (self.0 * 10.0).round() as i64
    }
}

impl FromStr for Aperture {
    type Err = MetadataError;

    /// Parses `f/5.6`, a bare `5.6`, or the comma-separated `5,6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = if s.starts_with('f') {
            s.strip_prefix("f/").unwrap_or(s)
        } else {
            s
        };
        let value = literal
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| MetadataError::format(s, EXPECTED))?;
        Aperture::new(value)
    }
}

impl fmt::Display for Aperture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tenths = self.rounded_tenths();
        write!(f, "f/{}.{}", tenths / 10, tenths % 10)
    }
}
