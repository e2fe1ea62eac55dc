//! The value types metadata fields are normalized into.
//!
//! Each measurement kind pairs a value with a closed unit enum; the unit
//! carries its canonical display symbol and the textual aliases readers
//! emit for it. Parsing goes through `FromStr`, formatting through
//! `Display`, and the two round-trip on the canonical symbol.

mod aperture;
mod exposure;
mod file_size;
mod fraction;
mod geo;
mod length;
mod lens;
mod measurement;
mod orientation;
mod quality;

pub use aperture::Aperture;
pub use exposure::{
    Exposure, ExposureCompensation, ExposureCompensationUnit, ExposureTime, ExposureTimeUnit,
};
pub use file_size::{FileSize, FileSizeUnit};
pub use fraction::Fraction;
pub use geo::{GeoCoordinate, GeoLocation};
pub use length::{Dimensions, Length, LengthUnit};
pub use lens::Lens;
pub use measurement::{Measurement, Unit};
pub use orientation::Orientation;
pub use quality::{ColourDepth, ColourDepthUnit, Quality};
