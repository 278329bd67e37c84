//! Batch scanning of an image directory.
//!
//! Files are processed one at a time in filename order. A failure on one file
//! never stops the batch: it is recorded in the report and the scan moves on.
//! Only a directory that cannot be listed is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use crate::gps::{decode_gps_ifd, dms_to_decimal, GpsInfo, GpsTag, Hemisphere};
use crate::source::MetadataSource;
use crate::types::{BatchReport, GeoError, Location};

/// Extension scanned when none is configured.
pub const DEFAULT_EXTENSION: &str = "HEIC";

/// Settings for a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory holding the images. Not searched recursively.
    pub directory: PathBuf,
    /// File extension to pick up, without the dot. Matched case-sensitively.
    pub extension: String,
}

impl ScanConfig {
    /// Scan `directory` for files with the default extension.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Check if a path should be scanned under this config.
    fn matches(&self, path: &Path) -> bool {
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or(true, |name| name.starts_with('.'));
        !hidden && path.extension().and_then(|ext| ext.to_str()) == Some(self.extension.as_str())
    }
}

/// Read one coordinate and its hemisphere reference from decoded GPS fields.
fn coordinate(info: &GpsInfo, value: GpsTag, reference: GpsTag) -> Result<f64, GeoError> {
    let dms = info.require(value)?;
    let hemisphere: Hemisphere = info.require(reference)?.parse()?;
    dms_to_decimal(dms, hemisphere)
}

/// Extract the location of a single image.
///
/// # Errors
///
/// - `GeoError::CorruptImage` - the source could not open or verify the file
/// - `GeoError::MissingMetadata` - the image has no GPS fields
/// - `GeoError::MissingField` - latitude or longitude (or a reference) is absent
/// - `GeoError::Parse` / `GeoError::InvalidReference` - malformed GPS values
pub fn process_image<S: MetadataSource>(source: &S, path: &Path) -> Result<Location, GeoError> {
    let ifd = source.read_gps_ifd(path)?;
    let info = decode_gps_ifd(&ifd)?;

    let latitude = coordinate(&info, GpsTag::GPSLatitude, GpsTag::GPSLatitudeRef)?;
    let longitude = coordinate(&info, GpsTag::GPSLongitude, GpsTag::GPSLongitudeRef)?;
    let altitude = info.get(GpsTag::GPSAltitude).map(str::to_string);

    Ok(Location {
        latitude,
        longitude,
        altitude,
    })
}

/// List the files a scan will visit, sorted by filename.
///
/// Symlinks are followed. Entries that cannot be read are logged and skipped.
pub fn candidate_files(config: &ScanConfig) -> Result<Vec<PathBuf>, GeoError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(&config.directory)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                log::warn!("Skipping entry in {}: {}", config.directory.display(), e);
                continue;
            }
        };
        if config.matches(&path) && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Scan a directory and partition its images by GPS metadata.
///
/// # Errors
///
/// Returns `GeoError::Io` if the directory cannot be listed. Per-file
/// failures are recorded in the returned report instead.
pub fn scan_directory<S: MetadataSource>(
    source: &S,
    config: &ScanConfig,
) -> Result<BatchReport, GeoError> {
    let files = candidate_files(config)?;
    log::info!(
        "Scanning {} *.{} file(s) in {}",
        files.len(),
        config.extension,
        config.directory.display()
    );

    let mut report = BatchReport::new();
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match process_image(source, &path) {
            Ok(location) => {
                log::debug!("{}: {:?}", name, location);
                report.located.insert(name, location);
            }
            Err(e) if e.lacks_metadata() => {
                log::warn!("File: {} - {}", name, e);
                report.without_metadata.push(name);
            }
            Err(e) => {
                log::warn!("File: {} - {}", name, e);
                report.rejected.insert(name, e.to_string());
            }
        }
    }

    Ok(report)
}
