//! # photometa
//!
//! Normalizes heterogeneous photographic metadata values (fractions,
//! locale-dependent decimal separators, unit aliases, DMS coordinates,
//! EXIF-style date strings) into a canonical, strongly-typed, validated
//! model with stable round-trip formatting.
//!
//! The crate sits between an external image-metadata reader, which decodes
//! image files into raw per-directory tags, and the persistence and storage
//! collaborators that consume the finished record:
//!
//! ```text
//! reader tags ─→ TagMap::build ─→ Metadata::from_tags ─→ Metadata
//! ```
//!
//! Everything is synchronous and allocation-local: one invocation consumes
//! one photo's tag set and produces one [`Metadata`] value, so distinct
//! photos can be processed concurrently without coordination.
//!
//! ## Usage
//!
//! ```
//! use photometa::{CaptionSource, Metadata, SourceTag, TagMap};
//!
//! fn tag(directory: &str, name: &str, description: &str) -> SourceTag {
//!     SourceTag {
//!         directory: directory.into(),
//!         name: name.into(),
//!         description: description.into(),
//!         raw: None,
//!     }
//! }
//!
//! # fn main() -> Result<(), photometa::MetadataError> {
//! let tags = TagMap::build(
//!     &[
//!         tag("JPEG", "Image Width", "1920 pixels"),
//!         tag("JPEG", "Image Height", "1280 pixels"),
//!         tag("JPEG", "Data Precision", "8 bits"),
//!         tag("Exif SubIFD", "Exposure Time", "1/250 sec"),
//!         tag("Exif SubIFD", "F-Number", "f/5,6"),
//!     ],
//!     &CaptionSource::default(),
//! );
//! let metadata = Metadata::from_tags(&tags)?;
//!
//! assert_eq!(metadata.dimensions.width.to_string(), "1920 px");
//! assert_eq!(metadata.exposure.time.to_string(), "1/250 sec");
//! assert_eq!(metadata.lens.aperture.to_string(), "f/5.6");
//! # Ok(())
//! # }
//! ```
//!
//! Malformed values fail loudly with the offending key and raw value;
//! absent optional tags fall back to documented defaults or stay unset.
//! See [`MetadataError`] for the failure taxonomy.

mod error;
mod metadata;
mod tags;
pub mod types;

pub use error::MetadataError;
pub use metadata::Metadata;
pub use tags::{keys, CaptionSource, SourceTag, TagMap};
pub use types::{
    Aperture, ColourDepth, ColourDepthUnit, Dimensions, Exposure, ExposureCompensation,
    ExposureCompensationUnit, ExposureTime, ExposureTimeUnit, FileSize, FileSizeUnit, Fraction,
    GeoCoordinate, GeoLocation, Length, LengthUnit, Lens, Measurement, Orientation, Quality, Unit,
};
