//! The EXIF GPS IFD tag table.
//!
//! Tag numbers follow the EXIF 2.32 GPS Attribute Information table
//! (0x00 through 0x1F). Each variant carries its number as an explicit
//! discriminant, so the ID to name mapping does not depend on declaration
//! order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A GPS IFD tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum GpsTag {
    GPSVersionID = 0x00,
    GPSLatitudeRef = 0x01,
    GPSLatitude = 0x02,
    GPSLongitudeRef = 0x03,
    GPSLongitude = 0x04,
    GPSAltitudeRef = 0x05,
    GPSAltitude = 0x06,
    GPSTimeStamp = 0x07,
    GPSSatellites = 0x08,
    GPSStatus = 0x09,
    GPSMeasureMode = 0x0A,
    GPSDOP = 0x0B,
    GPSSpeedRef = 0x0C,
    GPSSpeed = 0x0D,
    GPSTrackRef = 0x0E,
    GPSTrack = 0x0F,
    GPSImgDirectionRef = 0x10,
    GPSImgDirection = 0x11,
    GPSMapDatum = 0x12,
    GPSDestLatitudeRef = 0x13,
    GPSDestLatitude = 0x14,
    GPSDestLongitudeRef = 0x15,
    GPSDestLongitude = 0x16,
    GPSDestBearingRef = 0x17,
    GPSDestBearing = 0x18,
    GPSDestDistanceRef = 0x19,
    GPSDestDistance = 0x1A,
    GPSProcessingMethod = 0x1B,
    GPSAreaInformation = 0x1C,
    GPSDateStamp = 0x1D,
    GPSDifferential = 0x1E,
    GPSHPositioningError = 0x1F,
}

impl GpsTag {
    /// Number of entries in the GPS tag table.
    pub const COUNT: usize = 32;

    /// Every tag, in ID order.
    pub const ALL: [GpsTag; GpsTag::COUNT] = [
        GpsTag::GPSVersionID,
        GpsTag::GPSLatitudeRef,
        GpsTag::GPSLatitude,
        GpsTag::GPSLongitudeRef,
        GpsTag::GPSLongitude,
        GpsTag::GPSAltitudeRef,
        GpsTag::GPSAltitude,
        GpsTag::GPSTimeStamp,
        GpsTag::GPSSatellites,
        GpsTag::GPSStatus,
        GpsTag::GPSMeasureMode,
        GpsTag::GPSDOP,
        GpsTag::GPSSpeedRef,
        GpsTag::GPSSpeed,
        GpsTag::GPSTrackRef,
        GpsTag::GPSTrack,
        GpsTag::GPSImgDirectionRef,
        GpsTag::GPSImgDirection,
        GpsTag::GPSMapDatum,
        GpsTag::GPSDestLatitudeRef,
        GpsTag::GPSDestLatitude,
        GpsTag::GPSDestLongitudeRef,
        GpsTag::GPSDestLongitude,
        GpsTag::GPSDestBearingRef,
        GpsTag::GPSDestBearing,
        GpsTag::GPSDestDistanceRef,
        GpsTag::GPSDestDistance,
        GpsTag::GPSProcessingMethod,
        GpsTag::GPSAreaInformation,
        GpsTag::GPSDateStamp,
        GpsTag::GPSDifferential,
        GpsTag::GPSHPositioningError,
    ];

    /// Look up a tag by its numeric ID. Returns `None` for IDs outside the table.
    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.id() == id)
    }

    /// The numeric tag ID as stored in the IFD.
    #[inline]
    pub fn id(self) -> u16 {
        self as u16
    }

    /// The canonical EXIF field name.
    pub fn name(self) -> &'static str {
        match self {
            GpsTag::GPSVersionID => "GPSVersionID",
            GpsTag::GPSLatitudeRef => "GPSLatitudeRef",
            GpsTag::GPSLatitude => "GPSLatitude",
            GpsTag::GPSLongitudeRef => "GPSLongitudeRef",
            GpsTag::GPSLongitude => "GPSLongitude",
            GpsTag::GPSAltitudeRef => "GPSAltitudeRef",
            GpsTag::GPSAltitude => "GPSAltitude",
            GpsTag::GPSTimeStamp => "GPSTimeStamp",
            GpsTag::GPSSatellites => "GPSSatellites",
            GpsTag::GPSStatus => "GPSStatus",
            GpsTag::GPSMeasureMode => "GPSMeasureMode",
            GpsTag::GPSDOP => "GPSDOP",
            GpsTag::GPSSpeedRef => "GPSSpeedRef",
            GpsTag::GPSSpeed => "GPSSpeed",
            GpsTag::GPSTrackRef => "GPSTrackRef",
            GpsTag::GPSTrack => "GPSTrack",
            GpsTag::GPSImgDirectionRef => "GPSImgDirectionRef",
            GpsTag::GPSImgDirection => "GPSImgDirection",
            GpsTag::GPSMapDatum => "GPSMapDatum",
            GpsTag::GPSDestLatitudeRef => "GPSDestLatitudeRef",
            GpsTag::GPSDestLatitude => "GPSDestLatitude",
            GpsTag::GPSDestLongitudeRef => "GPSDestLongitudeRef",
            GpsTag::GPSDestLongitude => "GPSDestLongitude",
            GpsTag::GPSDestBearingRef => "GPSDestBearingRef",
            GpsTag::GPSDestBearing => "GPSDestBearing",
            GpsTag::GPSDestDistanceRef => "GPSDestDistanceRef",
            GpsTag::GPSDestDistance => "GPSDestDistance",
            GpsTag::GPSProcessingMethod => "GPSProcessingMethod",
            GpsTag::GPSAreaInformation => "GPSAreaInformation",
            GpsTag::GPSDateStamp => "GPSDateStamp",
            GpsTag::GPSDifferential => "GPSDifferential",
            GpsTag::GPSHPositioningError => "GPSHPositioningError",
        }
    }
}

impl fmt::Display for GpsTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
