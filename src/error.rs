use thiserror::Error;

/// Errors raised while normalizing raw tag values into typed metadata.
///
/// Everything is raised synchronously at the parse/validate call site;
/// nothing here is recovered from internally. Callers decide whether a
/// failed photo is skipped, substituted, or fails the batch.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A literal did not match the shape its type expects: wrong token
    /// count, non-numeric part, unrecognized unit or orientation alias,
    /// or a non-matching coordinate pattern.
    #[error("malformed value `{value}`, expected {expected}")]
    Format {
        value: String,
        expected: &'static str,
    },

    /// A well-formed value fell outside its allowed range, e.g. a
    /// non-positive aperture or a 350-degree latitude.
    #[error("invalid value: {reason}")]
    Validation { reason: String },

    /// A required tag was absent and has no documented default.
    #[error("required tag `{key}` is missing")]
    MissingField { key: &'static str },

    /// A timestamp was present but did not match the EXIF date pattern.
    #[error("timestamp `{value}` does not match %Y:%m:%d %H:%M:%S: {source}")]
    Parse {
        value: String,
        source: chrono::format::ParseError,
    },

    /// Attaches the offending tag key and raw value to a failure raised
    /// while assembling one photo's metadata.
    #[error("tag `{key}` with value `{value}` could not be processed: {source}")]
    Tag {
        key: &'static str,
        value: String,
        source: Box<MetadataError>,
    },
}

impl MetadataError {
    pub(crate) fn format(value: impl Into<String>, expected: &'static str) -> Self {
        MetadataError::Format {
            value: value.into(),
            expected,
        }
    }

    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        MetadataError::Validation {
            reason: reason.into(),
        }
    }

    pub(crate) fn tag(key: &'static str, value: impl Into<String>, source: MetadataError) -> Self {
        MetadataError::Tag {
            key,
            value: value.into(),
            source: Box::new(source),
        }
    }
}
