use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MetadataError;

/// A closed set of units for one measurement kind.
///
/// Each unit carries its canonical display symbol and is recognized under a
/// fixed table of textual aliases. Alias lookup is case-insensitive, so the
/// `Pixels` and `metres` spellings readers emit resolve the same way.
pub trait Unit: Copy + Eq + fmt::Debug {
    /// Canonical short symbol, e.g. `px` or `sec`.
    fn symbol(&self) -> &'static str;

    /// Looks a unit up by one of its textual names.
    fn from_alias(token: &str) -> Option<Self>;
}

/// An immutable value paired with its unit.
///
/// Displays as `<value> <symbol>`, which is also the canonical wire form
/// the concrete measurement kinds round-trip through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement<V, U> {
    value: V,
    unit: U,
}

impl<V, U: Unit> Measurement<V, U> {
    pub const fn new(value: V, unit: U) -> Self {
        Self { value, unit }
    }

    pub fn unit(&self) -> U {
        self.unit
    }
}

impl<V: Copy, U: Unit> Measurement<V, U> {
    pub fn value(&self) -> V {
        self.value
    }
}

impl<V: fmt::Display, U: Unit> fmt::Display for Measurement<V, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// Splits a raw tag value into its `<value> <unit>` tokens.
///
/// Anything other than exactly two whitespace-separated tokens is malformed.
pub(crate) fn split_value_unit<'a>(
    raw: &'a str,
    expected: &'static str,
) -> Result<(&'a str, &'a str), MetadataError> {
    let mut tokens = raw.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(value), Some(unit), None) => Ok((value, unit)),
        _ => Err(MetadataError::format(raw, expected)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn splits_exactly_two_tokens() {
        assert_eq!(split_value_unit("1920 pixels", "x").unwrap(), ("1920", "pixels"));
        // any amount of whitespace between the tokens is fine
        assert_eq!(split_value_unit("  8   bits ", "x").unwrap(), ("8", "bits"));
    }

    #[test]
    fn rejects_wrong_token_counts() {
        assert_matches!(split_value_unit("1920", "x"), Err(MetadataError::Format { .. }));
        assert_matches!(split_value_unit("", "x"), Err(MetadataError::Format { .. }));
        assert_matches!(
            split_value_unit("1 920 pixels", "x"),
            Err(MetadataError::Format { .. })
        );
    }
}
