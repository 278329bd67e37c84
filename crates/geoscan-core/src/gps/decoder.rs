//! GPS IFD decoding.
//!
//! Turns the raw tag-ID keyed GPS directory into named, string-formatted
//! fields. Tag IDs outside the GPS table are dropped without error, so
//! vendor-extended or malformed directories still yield whatever standard
//! fields they carry.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::tags::GpsTag;
use crate::types::GeoError;

/// A raw IFD: tag ID to value, as read from the image.
pub type RawIfd = BTreeMap<u16, IfdValue>;

/// A single IFD value, reduced to the shapes GPS fields use.
#[derive(Debug, Clone, PartialEq)]
pub enum IfdValue {
    /// ASCII string (e.g. GPSLatitudeRef, GPSMapDatum).
    Text(String),
    /// Integer or rational components (e.g. GPSLatitude, GPSAltitude).
    Numbers(Vec<f64>),
    /// Raw bytes (e.g. GPSVersionID, GPSProcessingMethod).
    Bytes(Vec<u8>),
}

impl IfdValue {
    /// Convenience constructor for text values.
    pub fn text(s: impl Into<String>) -> Self {
        IfdValue::Text(s.into())
    }
}

/// Formats a list of components as `(a, b, c)`, or bare when there is one.
fn write_components<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    if items.len() == 1 {
        return write!(f, "{}", items[0]);
    }
    f.write_str("(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str(")")
}

impl fmt::Display for IfdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IfdValue::Text(s) => f.write_str(s),
            IfdValue::Numbers(values) => write_components(f, values),
            IfdValue::Bytes(bytes) => write_components(f, bytes),
        }
    }
}

impl From<&exif::Value> for IfdValue {
    fn from(value: &exif::Value) -> Self {
        use exif::Value;

        match value {
            Value::Ascii(strings) => {
                let parts: Vec<String> = strings
                    .iter()
                    .map(|s| {
                        String::from_utf8_lossy(s)
                            .trim_end_matches('\0')
                            .to_string()
                    })
                    .collect();
                IfdValue::Text(parts.join(", "))
            }
            Value::Byte(bytes) => IfdValue::Bytes(bytes.clone()),
            Value::Undefined(bytes, _) => IfdValue::Bytes(bytes.clone()),
            Value::Short(v) => IfdValue::Numbers(v.iter().map(|&x| f64::from(x)).collect()),
            Value::Long(v) => IfdValue::Numbers(v.iter().map(|&x| f64::from(x)).collect()),
            Value::SByte(v) => IfdValue::Numbers(v.iter().map(|&x| f64::from(x)).collect()),
            Value::SShort(v) => IfdValue::Numbers(v.iter().map(|&x| f64::from(x)).collect()),
            Value::SLong(v) => IfdValue::Numbers(v.iter().map(|&x| f64::from(x)).collect()),
            Value::Rational(v) => IfdValue::Numbers(v.iter().map(|r| r.to_f64()).collect()),
            Value::SRational(v) => IfdValue::Numbers(v.iter().map(|r| r.to_f64()).collect()),
            Value::Float(v) => IfdValue::Numbers(v.iter().map(|&x| f64::from(x)).collect()),
            Value::Double(v) => IfdValue::Numbers(v.clone()),
            _ => IfdValue::Bytes(Vec::new()),
        }
    }
}

/// Decoded GPS fields, keyed by tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsInfo {
    fields: BTreeMap<GpsTag, String>,
}

impl GpsInfo {
    /// Get the formatted value of a field, if present.
    pub fn get(&self, tag: GpsTag) -> Option<&str> {
        self.fields.get(&tag).map(String::as_str)
    }

    /// Get the formatted value of a field that must be present.
    pub fn require(&self, tag: GpsTag) -> Result<&str, GeoError> {
        self.get(tag).ok_or(GeoError::MissingField(tag.name()))
    }

    /// Number of decoded fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no standard GPS field was decoded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in tag ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(tag, v)| (tag.name(), v.as_str()))
    }

    /// Copy the fields into a map keyed by canonical field name.
    pub fn to_named_map(&self) -> BTreeMap<&'static str, String> {
        self.fields
            .iter()
            .map(|(tag, v)| (tag.name(), v.clone()))
            .collect()
    }
}

impl Serialize for GpsInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Decode a raw GPS IFD into named fields.
///
/// # Errors
///
/// Returns `GeoError::MissingMetadata` if the IFD is empty. A non-empty IFD
/// holding only unknown tag IDs decodes to an empty `GpsInfo`.
pub fn decode_gps_ifd(ifd: &RawIfd) -> Result<GpsInfo, GeoError> {
    if ifd.is_empty() {
        return Err(GeoError::MissingMetadata);
    }

    // Unknown IDs are skipped on purpose.
    let fields = ifd
        .iter()
        .filter_map(|(&id, value)| GpsTag::from_id(id).map(|tag| (tag, value.to_string())))
        .collect();

    let info = GpsInfo { fields };
    log::debug!("Decoded GPS fields: {:?}", info.to_named_map());
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ifd(entries: Vec<(u16, IfdValue)>) -> RawIfd {
        entries.into_iter().collect()
    }

    #[test]
    fn test_decode_latitude_fields() {
        let raw = ifd(vec![
            (1, IfdValue::text("N")),
            (2, IfdValue::Numbers(vec![10.0, 30.0, 0.0])),
        ]);

        let info = decode_gps_ifd(&raw).unwrap();

        let expected: BTreeMap<&str, String> = [
            ("GPSLatitudeRef", "N".to_string()),
            ("GPSLatitude", "(10, 30, 0)".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(info.to_named_map(), expected);
    }

    #[test]
    fn test_decode_drops_unknown_ids() {
        let raw = ifd(vec![(99, IfdValue::text("x"))]);
        let info = decode_gps_ifd(&raw).unwrap();
        assert!(info.is_empty());
    }

    #[test]
    fn test_decode_keeps_known_and_drops_unknown() {
        let raw = ifd(vec![
            (3, IfdValue::text("W")),
            (32, IfdValue::text("beyond the table")),
            (0xC4A5, IfdValue::Bytes(vec![1, 2, 3])),
        ]);
        let info = decode_gps_ifd(&raw).unwrap();
        assert_eq!(info.len(), 1);
        assert_eq!(info.get(GpsTag::GPSLongitudeRef), Some("W"));
    }

    #[test]
    fn test_decode_empty_ifd() {
        let result = decode_gps_ifd(&RawIfd::new());
        assert!(matches!(result, Err(GeoError::MissingMetadata)));
    }

    #[test]
    fn test_require_missing_field() {
        let raw = ifd(vec![(1, IfdValue::text("S"))]);
        let info = decode_gps_ifd(&raw).unwrap();

        assert_eq!(info.require(GpsTag::GPSLatitudeRef).unwrap(), "S");
        match info.require(GpsTag::GPSLatitude) {
            Err(GeoError::MissingField(name)) => assert_eq!(name, "GPSLatitude"),
            other => panic!("Expected MissingField, got: {:?}", other),
        }
    }

    #[test]
    fn test_iter_in_tag_order() {
        let raw = ifd(vec![
            (6, IfdValue::Numbers(vec![12.5])),
            (0, IfdValue::Bytes(vec![2, 2, 0, 0])),
            (5, IfdValue::Bytes(vec![0])),
        ]);
        let info = decode_gps_ifd(&raw).unwrap();
        let pairs: Vec<(&str, &str)> = info.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("GPSVersionID", "(2, 2, 0, 0)"),
                ("GPSAltitudeRef", "0"),
                ("GPSAltitude", "12.5"),
            ]
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(IfdValue::text("WGS-84").to_string(), "WGS-84");
        assert_eq!(IfdValue::Numbers(vec![35.0, 39.0, 26.82]).to_string(), "(35, 39, 26.82)");
        assert_eq!(IfdValue::Numbers(vec![41.3]).to_string(), "41.3");
        assert_eq!(IfdValue::Bytes(vec![2, 3, 0, 0]).to_string(), "(2, 3, 0, 0)");
        assert_eq!(IfdValue::Numbers(vec![]).to_string(), "()");
    }

    #[test]
    fn test_value_from_exif_rational() {
        let value = exif::Value::Rational(vec![
            exif::Rational { num: 10, denom: 1 },
            exif::Rational { num: 30, denom: 1 },
            exif::Rational { num: 0, denom: 1 },
        ]);
        assert_eq!(IfdValue::from(&value).to_string(), "(10, 30, 0)");
    }

    #[test]
    fn test_value_from_exif_ascii_strips_nul() {
        let value = exif::Value::Ascii(vec![b"N\0".to_vec()]);
        assert_eq!(IfdValue::from(&value), IfdValue::text("N"));
    }

    #[test]
    fn test_value_from_exif_byte() {
        let value = exif::Value::Byte(vec![2, 2, 0, 0]);
        assert_eq!(IfdValue::from(&value), IfdValue::Bytes(vec![2, 2, 0, 0]));
    }

    #[test]
    fn test_serialize_as_named_object() {
        let raw = ifd(vec![
            (1, IfdValue::text("N")),
            (2, IfdValue::Numbers(vec![10.0, 30.0, 0.0])),
        ]);
        let info = decode_gps_ifd(&raw).unwrap();
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"GPSLatitudeRef":"N","GPSLatitude":"(10, 30, 0)"}"#);
    }
}
