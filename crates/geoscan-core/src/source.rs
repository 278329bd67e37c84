//! Image container access and EXIF extraction.
//!
//! `ExifImage` opens a file, checks it is not corrupt and exposes its EXIF
//! directories. Raster formats are verified through the `image` crate;
//! HEIF-family containers (HEIC, AVIF), which `image` cannot decode here,
//! are checked structurally and read through `kamadak-exif` alone.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{Context, In, Reader};
use image::{ImageFormat, ImageReader};

use crate::gps::{IfdValue, RawIfd};
use crate::types::GeoError;

/// EXIF pointer tag for the GPS IFD.
pub const GPS_IFD_POINTER: u16 = 0x8825;
/// EXIF pointer tag for the Exif IFD.
pub const EXIF_IFD_POINTER: u16 = 0x8769;
/// EXIF pointer tag for the Interoperability IFD.
pub const INTEROP_IFD_POINTER: u16 = 0xA005;

// ISO-BMFF brands for HEIF-family files
const HEIF_BRANDS: [&[u8; 4]; 14] = [
    b"mif1", b"msf1", b"mif2", b"miaf", b"heic", b"heix", b"heim", b"heis", b"hevc", b"hevx",
    b"hevm", b"hevs", b"avif", b"avis",
];

// Compatible brands kamadak-exif requires before it parses a HEIF container
const EXIF_READABLE_BRANDS: [&[u8; 4]; 2] = [b"mif1", b"msf1"];

/// Container format of an opened image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    /// A format the `image` crate can read (JPEG, PNG, TIFF, WebP).
    Raster(ImageFormat),
    /// HEIF-family ISO-BMFF container.
    Heif,
}

/// Brands declared by a leading `ftyp` box.
///
/// The box layout is `size:u32 "ftyp" major:[u8;4] minor:u32 compatible*`.
/// Compatible brands are read up to the declared size, clamped to the data
/// present; `verify` rejects a size that does not fit.
struct FileTypeBox<'a> {
    major: &'a [u8],
    compatible: Vec<&'a [u8]>,
}

impl<'a> FileTypeBox<'a> {
    fn parse(bytes: &'a [u8]) -> Option<Self> {
        if bytes.len() < 16 || &bytes[4..8] != b"ftyp" {
            return None;
        }
        let size = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let end = size.clamp(16, bytes.len());
        Some(Self {
            major: &bytes[8..12],
            compatible: bytes[16..end].chunks_exact(4).collect(),
        })
    }

    fn brands(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        std::iter::once(self.major).chain(self.compatible.iter().copied())
    }

    /// Major or any compatible brand belongs to the HEIF family.
    fn is_heif(&self) -> bool {
        self.brands()
            .any(|brand| HEIF_BRANDS.iter().any(|known| brand == &known[..]))
    }

    /// A compatible brand that kamadak-exif accepts as HEIF.
    fn is_exif_readable(&self) -> bool {
        self.compatible
            .iter()
            .any(|brand| EXIF_READABLE_BRANDS.iter().any(|known| *brand == &known[..]))
    }
}

/// An opened image with its parsed EXIF data.
pub struct ExifImage {
    bytes: Vec<u8>,
    format: ContainerFormat,
    exif: Option<exif::Exif>,
}

impl fmt::Debug for ExifImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExifImage")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .field("has_exif", &self.exif.is_some())
            .finish()
    }
}

impl ExifImage {
    /// Open an image file.
    ///
    /// # Errors
    ///
    /// Returns `GeoError::CorruptImage` if the file cannot be read, its
    /// format is not recognized, or its EXIF block is malformed.
    pub fn open(path: &Path) -> Result<Self, GeoError> {
        let bytes = fs::read(path)
            .map_err(|e| GeoError::CorruptImage(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(bytes)
    }

    /// Create an image from in-memory file bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, GeoError> {
        let (format, exif_readable) = match FileTypeBox::parse(&bytes).filter(|b| b.is_heif()) {
            Some(ftyp) => (ContainerFormat::Heif, ftyp.is_exif_readable()),
            None => {
                let guessed = image::guess_format(&bytes).map_err(|_| {
                    GeoError::CorruptImage("unrecognized image format".to_string())
                })?;
                (ContainerFormat::Raster(guessed), true)
            }
        };

        if !exif_readable {
            log::debug!("HEIF container without a mif1/msf1 compatible brand, skipping EXIF");
            return Ok(Self {
                bytes,
                format,
                exif: None,
            });
        }

        let exif = match Reader::new().read_from_container(&mut Cursor::new(&bytes)) {
            Ok(exif) => Some(exif),
            Err(exif::Error::NotFound(_)) => None,
            Err(e) => return Err(GeoError::CorruptImage(format!("EXIF error: {}", e))),
        };

        Ok(Self {
            bytes,
            format,
            exif,
        })
    }

    /// The detected container format.
    pub fn format(&self) -> ContainerFormat {
        self.format
    }

    /// Check the image is not corrupt.
    ///
    /// Raster images must have a readable header with non-zero dimensions.
    /// HEIF containers must have a well-formed leading `ftyp` box.
    pub fn verify(&self) -> Result<(), GeoError> {
        match self.format {
            ContainerFormat::Raster(format) => {
                let (width, height) = ImageReader::with_format(Cursor::new(&self.bytes), format)
                    .into_dimensions()
                    .map_err(|e| GeoError::CorruptImage(e.to_string()))?;
                if width == 0 || height == 0 {
                    return Err(GeoError::CorruptImage(format!(
                        "invalid dimensions {}x{}",
                        width, height
                    )));
                }
                Ok(())
            }
            ContainerFormat::Heif => {
                let size = u32::from_be_bytes([
                    self.bytes[0],
                    self.bytes[1],
                    self.bytes[2],
                    self.bytes[3],
                ]) as usize;
                if size < 16 || size > self.bytes.len() {
                    return Err(GeoError::CorruptImage(format!(
                        "ftyp box size {} out of bounds",
                        size
                    )));
                }
                Ok(())
            }
        }
    }

    /// The parsed EXIF data, or `None` if the container has none.
    pub fn exif(&self) -> Option<&exif::Exif> {
        self.exif.as_ref()
    }

    /// Collect the primary-image fields of the IFD behind a pointer tag.
    ///
    /// Returns an empty map when the image has no EXIF data, the IFD is
    /// absent, or the pointer tag is not one of the known IFD pointers.
    pub fn get_ifd(&self, pointer: u16) -> RawIfd {
        let context = match pointer {
            GPS_IFD_POINTER => Context::Gps,
            EXIF_IFD_POINTER => Context::Exif,
            INTEROP_IFD_POINTER => Context::Interop,
            _ => return RawIfd::new(),
        };

        let Some(exif) = &self.exif else {
            return RawIfd::new();
        };

        exif.fields()
            .filter(|field| field.ifd_num == In::PRIMARY && field.tag.context() == context)
            .map(|field| (field.tag.number(), IfdValue::from(&field.value)))
            .collect()
    }
}

/// Provides the raw GPS IFD of an image file.
pub trait MetadataSource {
    /// Read the GPS IFD of the file at `path`.
    ///
    /// An image without GPS data yields an empty map, not an error.
    fn read_gps_ifd(&self, path: &Path) -> Result<RawIfd, GeoError>;
}

/// Reads GPS data from image files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerSource;

impl MetadataSource for ContainerSource {
    fn read_gps_ifd(&self, path: &Path) -> Result<RawIfd, GeoError> {
        let image = ExifImage::open(path)?;
        image.verify()?;
        Ok(image.get_ifd(GPS_IFD_POINTER))
    }
}
