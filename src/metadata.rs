//! The canonical metadata aggregate and its assembly from a tag map.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::MetadataError;
use crate::tags::{keys, TagMap};
use crate::types::{
    Dimensions, Exposure, FileSize, GeoLocation, Length, Lens, Orientation, Quality,
};

/// EXIF dates separate the date part with colons rather than dashes.
const EXIF_DATE_TIME: &str = "%Y:%m:%d %H:%M:%S";

// Defaults substituted when a tag is absent. A tag that is present but
// malformed still fails: absence is forgiven, corruption is not.
const DEFAULT_ORIENTATION: &str = "horizontal";
const DEFAULT_EXPOSURE_TIME: &str = "0 sec";
const DEFAULT_EXPOSURE_COMPENSATION: &str = "0 EV";
const DEFAULT_APERTURE: &str = "f/8";
const DEFAULT_FOCAL_LENGTH: &str = "50 mm";
const DEFAULT_FILE_SIZE: &str = "0 byte";
const DEFAULT_DATE_TIME: &str = "1970:01:01 00:00:00";

/// The canonical description of one photo.
///
/// Built once per photo by [`Metadata::from_tags`] and never mutated
/// afterwards; the persistence and storage collaborators only ever see the
/// finished value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub dimensions: Dimensions,
    pub quality: Quality,
    pub camera_brand: Option<String>,
    pub camera_model: Option<String>,
    pub software: Option<String>,
    pub artist: Option<String>,
    pub copyright: Option<String>,
    pub orientation: Orientation,
    pub exposure: Exposure,
    pub lens: Lens,
    pub white_balance_mode: Option<String>,
    pub filename: Option<String>,
    pub file_size: FileSize,
    pub mime_type: Option<String>,
    pub created_at: NaiveDateTime,
    pub geo_location: Option<GeoLocation>,
}

impl Metadata {
    /// Assembles the canonical record from one photo's tag map.
    ///
    /// Fields resolve in a fixed order and the first failure aborts the
    /// whole assembly, so no partial record is ever produced. Width, height,
    /// and colour depth are required; a handful of fields fall back to
    /// documented defaults when absent; everything else stays unset. Parse
    /// failures come back wrapped with the offending key and raw value.
    pub fn from_tags(tags: &TagMap) -> Result<Self, MetadataError> {
        let dimensions = Dimensions {
            width: required(&tags.width, keys::JPEG_WIDTH)?,
            height: required(&tags.height, keys::JPEG_HEIGHT)?,
        };
        let quality = Quality {
            colour_depth: required(&tags.data_precision, keys::JPEG_DATA_PRECISION)?,
        };
        let orientation = defaulted(&tags.orientation, DEFAULT_ORIENTATION, keys::IFD0_ORIENTATION)?;

        let exposure = Exposure {
            time: defaulted(
                &tags.exposure_time,
                DEFAULT_EXPOSURE_TIME,
                keys::SUBIFD0_EXPOSURE_TIME,
            )?,
            mode: lowercased(&tags.exposure_mode),
            metering_mode: lowercased(&tags.metering_mode),
            compensation: defaulted(
                &tags.exposure_compensation,
                DEFAULT_EXPOSURE_COMPENSATION,
                keys::SUBIFD0_EXPOSURE_COMPENSATION,
            )?,
            iso: optional_int(&tags.iso_speed_ratings, keys::SUBIFD0_ISO_SPEED_RATINGS)?,
        };

        let lens = Lens {
            brand: tags.lens_make.clone(),
            model: tags.lens_model.clone(),
            aperture: defaulted(&tags.f_number, DEFAULT_APERTURE, keys::SUBIFD0_F_NUMBER)?,
            focal_length: defaulted(
                &tags.lens_focal_length,
                DEFAULT_FOCAL_LENGTH,
                keys::SUBIFD0_LENS_FOCAL_LENGTH,
            )?,
        };

        let file_size = defaulted(&tags.file_size, DEFAULT_FILE_SIZE, keys::FILE_SIZE)?;
        let created_at = parse_timestamp(&tags.date_time)?;
        let geo_location = resolve_geo_location(tags)?;

        let metadata = Metadata {
            id: Uuid::new_v4(),
            title: tags.title.clone(),
            description: tags.description.clone(),
            tags: tags.keywords.clone(),
            dimensions,
            quality,
            camera_brand: tags.make.clone(),
            camera_model: tags.model.clone(),
            software: tags.software.clone(),
            artist: tags.artist.clone(),
            copyright: tags.copyright.clone(),
            orientation,
            exposure,
            lens,
            white_balance_mode: lowercased(&tags.white_balance_mode),
            filename: tags.file_name.clone(),
            file_size,
            mime_type: tags.mime_type.clone(),
            created_at,
            geo_location,
        };
        log::debug!(
            "assembled metadata {} for {:?}",
            metadata.id,
            metadata.filename
        );
        Ok(metadata)
    }
}

/// Parses a required tag, failing with the key when it is absent.
fn required<T>(value: &Option<String>, key: &'static str) -> Result<T, MetadataError>
where
    T: FromStr<Err = MetadataError>,
{
    match value {
        Some(raw) => parse_tag(raw, key),
        None => Err(MetadataError::MissingField { key }),
    }
}

/// Parses a tag, substituting its documented default when absent.
fn defaulted<T>(
    value: &Option<String>,
    default: &'static str,
    key: &'static str,
) -> Result<T, MetadataError>
where
    T: FromStr<Err = MetadataError>,
{
    parse_tag(value.as_deref().unwrap_or(default), key)
}

fn parse_tag<T>(raw: &str, key: &'static str) -> Result<T, MetadataError>
where
    T: FromStr<Err = MetadataError>,
{
    raw.parse().map_err(|source| MetadataError::tag(key, raw, source))
}

/// ISO arrives as a bare integer with no unit token.
fn optional_int(value: &Option<String>, key: &'static str) -> Result<Option<i32>, MetadataError> {
    value
        .as_deref()
        .map(|raw| {
            raw.parse::<i32>().map_err(|_| {
                MetadataError::tag(key, raw, MetadataError::format(raw, "a whole number"))
            })
        })
        .transpose()
}

fn lowercased(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|s| s.to_lowercase())
}

fn parse_timestamp(value: &Option<String>) -> Result<NaiveDateTime, MetadataError> {
    let raw = value.as_deref().unwrap_or(DEFAULT_DATE_TIME);
    NaiveDateTime::parse_from_str(raw, EXIF_DATE_TIME).map_err(|source| {
        MetadataError::tag(
            keys::SUBIFD0_DATE_TIME,
            raw,
            MetadataError::Parse {
                value: raw.to_string(),
                source,
            },
        )
    })
}

/// The geolocation block is all-or-nothing: it exists only when latitude,
/// longitude, and altitude were all present upstream. A kilometer altitude
/// is normalised to meters before storage.
fn resolve_geo_location(tags: &TagMap) -> Result<Option<GeoLocation>, MetadataError> {
    let (latitude, longitude, altitude) = match (&tags.latitude, &tags.longitude, &tags.altitude) {
        (Some(latitude), Some(longitude), Some(altitude)) => (latitude, longitude, altitude),
        _ => return Ok(None),
    };
    let latitude = parse_tag(latitude, keys::GEOLOCATION_LATITUDE)?;
    let longitude = parse_tag(longitude, keys::GEOLOCATION_LONGITUDE)?;
    let altitude: Length = parse_tag(altitude, keys::GEOLOCATION_ALTITUDE)?;
    Ok(Some(GeoLocation {
        latitude,
        longitude,
        altitude: altitude.normalise(),
    }))
}
