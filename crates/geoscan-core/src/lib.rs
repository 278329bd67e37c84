//! Geoscan Core - GPS metadata extraction library
//!
//! This crate reads the EXIF GPS directory of image files, decodes it into
//! named fields and converts the DMS coordinates into signed decimal degrees.
//!
//! # Module Structure
//!
//! - `gps` - GPS tag table, IFD decoding and coordinate conversion
//! - `source` - Image container access and EXIF extraction
//! - `scan` - Batch processing of an image directory
//! - `types` - Error type and result records

pub mod gps;
pub mod scan;
pub mod source;
pub mod types;

pub use gps::{decode_gps_ifd, dms_to_decimal, GpsInfo, GpsTag, Hemisphere, IfdValue, RawIfd};
pub use scan::{process_image, scan_directory, ScanConfig, DEFAULT_EXTENSION};
pub use source::{ContainerSource, ExifImage, MetadataSource, GPS_IFD_POINTER};
pub use types::{BatchReport, GeoError, Location};
