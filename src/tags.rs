//! Selection and renaming of raw reader output into the typed tag record.
//!
//! The external reader hands over every tag it decoded, grouped by
//! directory. Only a fixed set of (directory, tag name) pairs matters to
//! the canonical model; this module picks those out, renames them to their
//! namespaced keys, and drops the rest.

use crate::types::Orientation;

/// One tag as supplied by the external metadata reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTag {
    /// Directory the tag was found in, e.g. `Exif IFD0`.
    pub directory: String,
    /// Tag name within the directory, e.g. `Exposure Time`.
    pub name: String,
    /// Human-readable rendition of the tag value, e.g. `1/250 sec`.
    pub description: String,
    /// Raw numeric value, where the tag carries one.
    pub raw: Option<i32>,
}

/// Captioning data queried from the separate IPTC-style source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionSource {
    pub object_name: Option<String>,
    pub caption: Option<String>,
    /// Keywords as one `;`-separated string.
    pub keywords: Option<String>,
}

/// Namespaced names of the recognized tags, used in error reporting.
pub mod keys {
    pub const JPEG_DATA_PRECISION: &str = "jpeg:data_precision";
    pub const JPEG_WIDTH: &str = "jpeg:width";
    pub const JPEG_HEIGHT: &str = "jpeg:height";
    pub const IFD0_MAKE: &str = "ifd0:make";
    pub const IFD0_MODEL: &str = "ifd0:model";
    pub const IFD0_SOFTWARE: &str = "ifd0:software";
    pub const IFD0_ORIENTATION: &str = "ifd0:orientation";
    pub const IFD0_ARTIST: &str = "ifd0:artist";
    pub const IFD0_COPYRIGHT: &str = "ifd0:copyright";
    pub const SUBIFD0_EXPOSURE_TIME: &str = "subifd0:exposure_time";
    pub const SUBIFD0_EXPOSURE_MODE: &str = "subifd0:exposure_mode";
    pub const SUBIFD0_EXPOSURE_COMPENSATION: &str = "subifd0:exposure_compensation";
    pub const SUBIFD0_METERING_MODE: &str = "subifd0:metering_mode";
    pub const SUBIFD0_ISO_SPEED_RATINGS: &str = "subifd0:iso_speed_ratings";
    pub const SUBIFD0_F_NUMBER: &str = "subifd0:f_number";
    pub const SUBIFD0_LENS_MAKE: &str = "subifd0:lens_make";
    pub const SUBIFD0_LENS_MODEL: &str = "subifd0:lens_model";
    pub const SUBIFD0_LENS_FOCAL_LENGTH: &str = "subifd0:lens_focal_length";
    pub const SUBIFD0_WHITE_BALANCE_MODE: &str = "subifd0:white_balance_mode";
    pub const SUBIFD0_DATE_TIME: &str = "subifd0:date_time";
    pub const FILE_MIME_TYPE: &str = "file:mime_type";
    pub const FILE_NAME: &str = "file:name";
    pub const FILE_SIZE: &str = "file:size";
    pub const GEOLOCATION_LATITUDE: &str = "geolocation:latitude";
    pub const GEOLOCATION_LONGITUDE: &str = "geolocation:longitude";
    pub const GEOLOCATION_ALTITUDE: &str = "geolocation:altitude";
    pub const XMP_TITLE: &str = "xmp:title";
    pub const XMP_DESCRIPTION: &str = "xmp:description";
    pub const XMP_TAGS: &str = "xmp:tags";
}

/// The recognized source tags of one photo, renamed to namespaced fields.
///
/// One field per recognized (directory, tag name) pair; an unset field
/// means the tag was absent upstream. Values stay raw strings here; the
/// assembler is where they become typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    pub width: Option<String>,
    pub height: Option<String>,
    pub data_precision: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub software: Option<String>,
    pub orientation: Option<String>,
    pub artist: Option<String>,
    pub copyright: Option<String>,
    pub exposure_time: Option<String>,
    pub exposure_mode: Option<String>,
    pub exposure_compensation: Option<String>,
    pub metering_mode: Option<String>,
    pub iso_speed_ratings: Option<String>,
    pub f_number: Option<String>,
    pub lens_make: Option<String>,
    pub lens_model: Option<String>,
    pub lens_focal_length: Option<String>,
    pub white_balance_mode: Option<String>,
    pub date_time: Option<String>,
    pub mime_type: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub altitude: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
}

impl TagMap {
    /// Builds a fresh tag map from one photo's reader output and captions.
    ///
    /// Unrecognized tags are dropped; they are not part of the canonical
    /// model. Each call allocates its own map, so concurrent invocations
    /// for distinct photos never share state.
    pub fn build(tags: &[SourceTag], captions: &CaptionSource) -> Self {
        let mut map = TagMap::default();
        for tag in tags {
            map.insert(tag);
        }

        map.title = captions.object_name.clone();
        map.description = captions.caption.clone();
        map.keywords = captions
            .keywords
            .as_deref()
            .filter(|joined| !joined.is_empty())
            .map(|joined| joined.split(';').map(str::to_string).collect())
            .unwrap_or_default();

        map
    }

    fn insert(&mut self, tag: &SourceTag) {
        let field = match (tag.directory.as_str(), tag.name.as_str()) {
            ("JPEG", "Data Precision") => &mut self.data_precision, // e.g. '8 bits'
            ("JPEG", "Image Width") => &mut self.width,             // e.g. '1920 pixels'
            ("JPEG", "Image Height") => &mut self.height,           // e.g. '1280 pixels'
            ("Exif IFD0", "Make") => &mut self.make,                // e.g. 'FUJIFILM'
            ("Exif IFD0", "Model") => &mut self.model,              // e.g. 'X-T50'
            ("Exif IFD0", "Software") => &mut self.software,
            ("Exif IFD0", "Artist") => &mut self.artist,
            ("Exif IFD0", "Copyright") => &mut self.copyright,
            ("Exif IFD0", "Orientation") => {
                // classified from the raw code, not the description, since the
                // description spells out rotation/mirroring detail we drop
                self.orientation = tag.raw.map(|code| Orientation::classify(code).to_string());
                return;
            }
            ("Exif SubIFD", "Exposure Time") => &mut self.exposure_time, // e.g. '1/250 sec'
            ("Exif SubIFD", "Exposure Mode") => &mut self.exposure_mode,
            ("Exif SubIFD", "Exposure Bias Value") => &mut self.exposure_compensation,
            ("Exif SubIFD", "Metering Mode") => &mut self.metering_mode,
            ("Exif SubIFD", "ISO Speed Ratings") => &mut self.iso_speed_ratings,
            ("Exif SubIFD", "F-Number") => &mut self.f_number,
            ("Exif SubIFD", "Lens Make") => &mut self.lens_make,
            ("Exif SubIFD", "Lens Model") => &mut self.lens_model,
            ("Exif SubIFD", "Focal Length") => &mut self.lens_focal_length,
            ("Exif SubIFD", "White Balance Mode") => &mut self.white_balance_mode,
            ("Exif SubIFD", "Date/Time Original") => &mut self.date_time,
            ("File Type", "Detected MIME Type") => &mut self.mime_type, // e.g. 'image/jpeg'
            ("File", "File Name") => &mut self.file_name,
            ("File", "File Size") => &mut self.file_size, // e.g. '1617709 bytes'
            ("GPS", "GPS Latitude") => &mut self.latitude, // e.g. '50° 39' 55,06"'
            ("GPS", "GPS Longitude") => &mut self.longitude,
            ("GPS", "GPS Altitude") => &mut self.altitude, // e.g. '329,48 metres'
            _ => {
                log::trace!("dropping unrecognized tag {}/{}", tag.directory, tag.name);
                return;
            }
        };
        *field = Some(tag.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(directory: &str, name: &str, description: &str) -> SourceTag {
        SourceTag {
            directory: directory.into(),
            name: name.into(),
            description: description.into(),
            raw: None,
        }
    }

    #[test]
    fn recognized_tags_are_selected_and_renamed() {
        let map = TagMap::build(
            &[
                tag("JPEG", "Image Width", "1920 pixels"),
                tag("Exif IFD0", "Make", "FUJIFILM"),
                tag("Exif SubIFD", "Exposure Time", "1/250 sec"),
                tag("File Type", "Detected MIME Type", "image/jpeg"),
                tag("GPS", "GPS Latitude", "50° 39' 55,06\""),
            ],
            &CaptionSource::default(),
        );
        assert_eq!(map.width.as_deref(), Some("1920 pixels"));
        assert_eq!(map.make.as_deref(), Some("FUJIFILM"));
        assert_eq!(map.exposure_time.as_deref(), Some("1/250 sec"));
        assert_eq!(map.mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(map.latitude.as_deref(), Some("50° 39' 55,06\""));
    }

    #[test]
    fn unrecognized_tags_are_dropped() {
        let map = TagMap::build(
            &[
                tag("Exif IFD0", "YCbCr Positioning", "Center of pixel array"),
                tag("Fujifilm Makernote", "Sharpness", "Normal"),
                // right tag name under the wrong directory does not count
                tag("Exif IFD0", "Exposure Time", "1/250 sec"),
            ],
            &CaptionSource::default(),
        );
        assert_eq!(map, TagMap::default());
    }

    #[test]
    fn orientation_comes_from_the_raw_code() {
        let map = TagMap::build(
            &[SourceTag {
                directory: "Exif IFD0".into(),
                name: "Orientation".into(),
                description: "Right side, top (Rotate 90 CW)".into(),
                raw: Some(6),
            }],
            &CaptionSource::default(),
        );
        assert_eq!(map.orientation.as_deref(), Some("vertical"));
    }

    #[test]
    fn orientation_without_raw_code_stays_unset() {
        let map = TagMap::build(
            &[SourceTag {
                directory: "Exif IFD0".into(),
                name: "Orientation".into(),
                description: "Top, left side (Horizontal / normal)".into(),
                raw: None,
            }],
            &CaptionSource::default(),
        );
        assert_eq!(map.orientation, None);
    }

    #[test]
    fn out_of_range_orientation_code_is_kept_as_unknown() {
        let map = TagMap::build(
            &[SourceTag {
                directory: "Exif IFD0".into(),
                name: "Orientation".into(),
                description: "bogus".into(),
                raw: Some(42),
            }],
            &CaptionSource::default(),
        );
        assert_eq!(map.orientation.as_deref(), Some("unknown"));
    }

    #[test]
    fn keywords_split_on_semicolon() {
        let captions = CaptionSource {
            object_name: Some("Sunset".into()),
            caption: Some("Sunset over the Rhine".into()),
            keywords: Some("sunset;river;golden hour".into()),
        };
        let map = TagMap::build(&[], &captions);
        assert_eq!(map.title.as_deref(), Some("Sunset"));
        assert_eq!(map.description.as_deref(), Some("Sunset over the Rhine"));
        assert_eq!(map.keywords, vec!["sunset", "river", "golden hour"]);
    }

    #[test]
    fn absent_or_empty_keywords_yield_an_empty_list() {
        let map = TagMap::build(&[], &CaptionSource::default());
        assert!(map.keywords.is_empty());

        let captions = CaptionSource {
            keywords: Some(String::new()),
            ..CaptionSource::default()
        };
        let map = TagMap::build(&[], &captions);
        assert!(map.keywords.is_empty());
    }
}
