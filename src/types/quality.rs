use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MetadataError;
use crate::types::measurement::{split_value_unit, Measurement, Unit};

const EXPECTED: &str = "`<value> bits`";

/// The single unit colour depth is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColourDepthUnit {
    Bit,
}

impl Unit for ColourDepthUnit {
    fn symbol(&self) -> &'static str {
        "bit"
    }

    fn from_alias(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "bit" | "bits" => Some(ColourDepthUnit::Bit),
            _ => None,
        }
    }
}

/// Colour depth of one image, e.g. `8 bit`.
pub type ColourDepth = Measurement<i32, ColourDepthUnit>;

impl ColourDepth {
    pub fn bits(value: i32) -> Self {
        Measurement::new(value, ColourDepthUnit::Bit)
    }
}

impl FromStr for ColourDepth {
    type Err = MetadataError;

    /// Parses values like `8 bits`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value_token, unit_token) = split_value_unit(s, EXPECTED)?;
        let value = value_token
            .parse::<i32>()
            .map_err(|_| MetadataError::format(s, EXPECTED))?;
        let unit = ColourDepthUnit::from_alias(unit_token)
            .ok_or_else(|| MetadataError::format(s, EXPECTED))?;
        Ok(Measurement::new(value, unit))
    }
}

/// Image quality attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quality {
    pub colour_depth: ColourDepth,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_and_formats() {
        let depth: ColourDepth = "8 bits".parse().unwrap();
        assert_eq!(depth, ColourDepth::bits(8));
        assert_eq!(depth.to_string(), "8 bit");
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_matches!("8".parse::<ColourDepth>(), Err(MetadataError::Format { .. }));
        assert_matches!("8 bytes".parse::<ColourDepth>(), Err(MetadataError::Format { .. }));
        assert_matches!("deep bits".parse::<ColourDepth>(), Err(MetadataError::Format { .. }));
    }
}
