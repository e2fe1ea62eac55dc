use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MetadataError;

/// Whether an image is more horizontal or more vertical.
///
/// EXIF encodes orientation as one of eight rotation/mirroring codes; this
/// collapses them to the distinction the domain actually needs. `Unknown`
/// covers codes outside the standard range so an odd reading flows through
/// instead of failing the whole photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Unknown,
}

impl Orientation {
    /// Collapses a numeric EXIF orientation code.
    ///
    /// Codes 1-4 are rotations/mirrorings of a horizontal image, 5-8 of a
    /// vertical one. Anything else classifies as `Unknown`.
    pub fn classify(code: i32) -> Self {
        match code {
            1..=4 => Orientation::Horizontal,
            5..=8 => Orientation::Vertical,
            _ => Orientation::Unknown,
        }
    }
}

impl FromStr for Orientation {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "landscape" => Ok(Orientation::Horizontal),
            "vertical" | "portrait" => Ok(Orientation::Vertical),
            "unknown" => Ok(Orientation::Unknown),
            _ => Err(MetadataError::format(
                s,
                "one of `horizontal`, `landscape`, `vertical`, `portrait`, `unknown`",
            )),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn standard_codes_classify() {
        for code in 1..=4 {
            assert_eq!(Orientation::classify(code), Orientation::Horizontal);
        }
        for code in 5..=8 {
            assert_eq!(Orientation::classify(code), Orientation::Vertical);
        }
    }

    #[test]
    fn out_of_range_codes_classify_as_unknown() {
        assert_eq!(Orientation::classify(0), Orientation::Unknown);
        assert_eq!(Orientation::classify(9), Orientation::Unknown);
        assert_eq!(Orientation::classify(-1), Orientation::Unknown);
    }

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("portrait".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert_eq!("Landscape".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert_eq!("HORIZONTAL".parse::<Orientation>().unwrap(), Orientation::Horizontal);
    }

    #[test]
    fn unknown_round_trips_through_the_string_stage() {
        let classified = Orientation::classify(42);
        assert_eq!(
            classified.to_string().parse::<Orientation>().unwrap(),
            Orientation::Unknown
        );
    }

    #[test]
    fn unrecognized_strings_are_malformed() {
        assert_matches!("sideways".parse::<Orientation>(), Err(MetadataError::Format { .. }));
    }
}
