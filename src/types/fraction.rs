use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MetadataError;

const EXPECTED: &str = "a fraction like `1/250` or a whole number";

/// An exact rational value such as `1/250` or `-2/3`.
///
/// Numerator and denominator are kept exactly as given: `2/4` is never
/// reduced and compares unequal to `1/2`. Exposure times and compensation
/// values are stored this way so the literal the camera wrote survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

impl Fraction {
    /// Creates a fraction, rejecting a non-positive denominator.
    pub fn new(numerator: i32, denominator: i32) -> Result<Self, MetadataError> {
        if denominator <= 0 {
            return Err(MetadataError::validation(
                "denominator must be greater than zero",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }
}

impl From<i32> for Fraction {
    /// Treats a whole number as `<value>/1`.
    fn from(value: i32) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }
}

impl FromStr for Fraction {
    type Err = MetadataError;

    /// Parses `1/250`, `4`, or a signed form like `-1/3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = numerator
                    .parse()
                    .map_err(|_| MetadataError::format(s, EXPECTED))?;
                let denominator = denominator
                    .parse()
                    .map_err(|_| MetadataError::format(s, EXPECTED))?;
                Fraction::new(numerator, denominator)
            }
            None => {
                let numerator: i32 = s.parse().map_err(|_| MetadataError::format(s, EXPECTED))?;
                Ok(Fraction::from(numerator))
            }
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_and_formats_ratio() {
        let fraction: Fraction = "1/250".parse().unwrap();
        assert_eq!(fraction.numerator(), 1);
        assert_eq!(fraction.denominator(), 250);
        assert_eq!(fraction.to_string(), "1/250");
    }

    #[test]
    fn whole_numbers_take_denominator_one() {
        let fraction: Fraction = "1".parse().unwrap();
        assert_eq!(fraction, Fraction::from(1));
        assert_eq!(fraction.to_string(), "1");
    }

    #[test]
    fn sign_is_allowed() {
        let fraction: Fraction = "-1/3".parse().unwrap();
        assert_eq!(fraction.numerator(), -1);
        assert_eq!(fraction.to_string(), "-1/3");
    }

    #[test]
    fn never_reduced() {
        let halves: Fraction = "2/4".parse().unwrap();
        assert_ne!(halves, Fraction::new(1, 2).unwrap());
        assert_eq!(halves.to_string(), "2/4");
    }

    #[test]
    fn rejects_non_positive_denominator() {
        assert_matches!(Fraction::new(1, 0), Err(MetadataError::Validation { .. }));
        assert_matches!("1/0".parse::<Fraction>(), Err(MetadataError::Validation { .. }));
        assert_matches!("1/-3".parse::<Fraction>(), Err(MetadataError::Validation { .. }));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_matches!("abc".parse::<Fraction>(), Err(MetadataError::Format { .. }));
        assert_matches!("1/2/3".parse::<Fraction>(), Err(MetadataError::Format { .. }));
        assert_matches!("1/".parse::<Fraction>(), Err(MetadataError::Format { .. }));
        assert_matches!("".parse::<Fraction>(), Err(MetadataError::Format { .. }));
    }
}
