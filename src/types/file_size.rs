use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MetadataError;
use crate::types::measurement::{split_value_unit, Measurement, Unit};

const EXPECTED: &str = "`<value> bytes`";

/// The single unit file sizes are measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileSizeUnit {
    Byte,
}

impl Unit for FileSizeUnit {
    fn symbol(&self) -> &'static str {
        "byte"
    }

    fn from_alias(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "byte" | "bytes" | "b" => Some(FileSizeUnit::Byte),
            _ => None,
        }
    }
}

/// Size of one file on disk, e.g. `1617709 byte`.
pub type FileSize = Measurement<u64, FileSizeUnit>;

impl FileSize {
    pub fn bytes(value: u64) -> Self {
        Measurement::new(value, FileSizeUnit::Byte)
    }
}

impl FromStr for FileSize {
    type Err = MetadataError;

    /// Parses values like `1617709 bytes`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value_token, unit_token) = split_value_unit(s, EXPECTED)?;
        let value = value_token
            .parse::<u64>()
            .map_err(|_| MetadataError::format(s, EXPECTED))?;
        let unit = FileSizeUnit::from_alias(unit_token)
            .ok_or_else(|| MetadataError::format(s, EXPECTED))?;
        Ok(Measurement::new(value, unit))
    }
}
