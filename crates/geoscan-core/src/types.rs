//! Core types shared across the GPS pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for GPS metadata extraction.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The image file could not be opened or failed verification.
    #[error("Corrupted or unreadable image file: {0}")]
    CorruptImage(String),

    /// The image carries no GPS directory, or the directory is empty.
    #[error("No GPS metadata found")]
    MissingMetadata,

    /// A GPS field needed to build a location is absent.
    #[error("Missing GPS field: {0}")]
    MissingField(&'static str),

    /// A DMS coordinate string could not be parsed.
    #[error("Malformed DMS coordinate: {0}")]
    Parse(String),

    /// A hemisphere reference other than N, S, E or W.
    #[error("Invalid hemisphere reference: {0:?}")]
    InvalidReference(String),

    /// I/O error while listing the input directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeoError {
    /// Returns true if this error means the image simply has no usable
    /// GPS metadata, as opposed to being unreadable.
    pub fn lacks_metadata(&self) -> bool {
        matches!(
            self,
            GeoError::MissingMetadata
                | GeoError::MissingField(_)
                | GeoError::Parse(_)
                | GeoError::InvalidReference(_)
        )
    }
}

/// Location extracted from a single image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Signed decimal degrees, negative in the southern hemisphere.
    pub latitude: f64,
    /// Signed decimal degrees, negative west of Greenwich.
    pub longitude: f64,
    /// GPSAltitude exactly as stored, without unit or reference applied.
    pub altitude: Option<String>,
}

/// Outcome of scanning a directory.
///
/// Every scanned file ends up in exactly one of the three collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Files with a complete GPS position, keyed by base filename.
    pub located: BTreeMap<String, Location>,
    /// Files without usable GPS metadata.
    pub without_metadata: Vec<String>,
    /// Files that could not be opened or verified, with the reason.
    pub rejected: BTreeMap<String, String>,
}

impl BatchReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of files accounted for.
    pub fn total(&self) -> usize {
        self.located.len() + self.without_metadata.len() + self.rejected.len()
    }

    /// Check if no file was scanned.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_error_display() {
        let err = GeoError::MissingField("GPSLatitude");
        assert_eq!(err.to_string(), "Missing GPS field: GPSLatitude");

        let err = GeoError::InvalidReference("n".to_string());
        assert_eq!(err.to_string(), "Invalid hemisphere reference: \"n\"");

        let err = GeoError::MissingMetadata;
        assert_eq!(err.to_string(), "No GPS metadata found");
    }

    #[test]
    fn test_lacks_metadata_classification() {
        assert!(GeoError::MissingMetadata.lacks_metadata());
        assert!(GeoError::MissingField("GPSLongitude").lacks_metadata());
        assert!(GeoError::Parse("(1, 2)".to_string()).lacks_metadata());
        assert!(GeoError::InvalidReference("X".to_string()).lacks_metadata());

        assert!(!GeoError::CorruptImage("truncated".to_string()).lacks_metadata());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!GeoError::from(io).lacks_metadata());
    }

    #[test]
    fn test_batch_report_total() {
        let mut report = BatchReport::new();
        assert!(report.is_empty());

        report.located.insert(
            "IMG_0001.HEIC".to_string(),
            Location {
                latitude: 10.5,
                longitude: -3.25,
                altitude: None,
            },
        );
        report.without_metadata.push("IMG_0002.HEIC".to_string());
        report
            .rejected
            .insert("IMG_0003.HEIC".to_string(), "truncated".to_string());

        assert_eq!(report.total(), 3);
        assert!(!report.is_empty());
    }
}
