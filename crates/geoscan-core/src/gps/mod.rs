//! GPS metadata decoding.
//!
//! This module provides:
//! - The GPS IFD tag table (`GpsTag`)
//! - Decoding of a raw GPS IFD into named fields (`decode_gps_ifd`)
//! - Conversion of DMS coordinates to decimal degrees (`dms_to_decimal`)
//!
//! # Examples
//!
//! ```ignore
//! use geoscan_core::gps::{decode_gps_ifd, dms_to_decimal, GpsTag, Hemisphere};
//!
//! let info = decode_gps_ifd(&ifd)?;
//! let reference: Hemisphere = info.require(GpsTag::GPSLatitudeRef)?.parse()?;
//! let latitude = dms_to_decimal(info.require(GpsTag::GPSLatitude)?, reference)?;
//! ```

mod coordinate;
mod decoder;
mod tags;

pub use coordinate::{dms_to_decimal, parse_dms, Hemisphere};
pub use decoder::{decode_gps_ifd, GpsInfo, IfdValue, RawIfd};
pub use tags::GpsTag;
