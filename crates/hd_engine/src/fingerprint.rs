//! Deterministic cache keys for birth data.
//!
//! Semantically equal inputs (`Z` vs `UTC`, `+0000` vs `UTC`, latitudes
//! equal after rounding) produce identical fingerprints.

use std::collections::BTreeMap;

use hd_time::{canonical_timezone, parse_date, parse_time};
use sha2::{Digest, Sha256};

use crate::birth::BirthData;
use crate::error::CalcError;

/// Prefix every fingerprint carries.
pub const FINGERPRINT_PREFIX: &str = "profile:";

fn round_coordinate(value: f64, decimals: u32) -> String {
    let scale = 10f64.powi(decimals as i32);
    // Adding +0.0 folds -0.0 into 0.0.
    let rounded = (value * scale).round() / scale + 0.0;
    format!("{rounded:.prec$}", prec = decimals as usize)
}

/// Normalised `key → value` fields, sorted by key.
pub fn normalized_fields(
    birth: &BirthData,
    coord_decimals: u32,
) -> Result<BTreeMap<&'static str, String>, CalcError> {
    let date = parse_date(birth.date.trim())?;
    let time = parse_time(birth.time.trim())?;
    let tz = canonical_timezone(&birth.location.timezone)?;

    Ok(BTreeMap::from([
        ("date", date.to_string()),
        ("lat", round_coordinate(birth.location.lat, coord_decimals)),
        ("lng", round_coordinate(birth.location.lng, coord_decimals)),
        ("time", time.to_string()),
        ("tz", tz),
    ]))
}

/// `profile:` + hex SHA-256 of the sorted `key=value` serialisation.
pub fn fingerprint(birth: &BirthData, coord_decimals: u32) -> Result<String, CalcError> {
    let fields = normalized_fields(birth, coord_decimals)?;
    let canonical = fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(format!("{FINGERPRINT_PREFIX}{}", hex::encode(hasher.finalize())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(date: &str, time: &str, lat: f64, lng: f64, tz: &str) -> String {
        fingerprint(&BirthData::new(date, time, lat, lng, tz), 4).unwrap()
    }

    #[test]
    fn shape() {
        let f = fp("2000-01-01", "12:00:00", 0.0, 0.0, "UTC");
        assert!(f.starts_with(FINGERPRINT_PREFIX));
        let hex_part = &f[FINGERPRINT_PREFIX.len()..];
        assert_eq!(hex_part.len(), 64);
        assert!(hex_part.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn utc_spellings_collapse() {
        let a = fp("2000-01-01", "12:00:00", 0.0, 0.0, "UTC");
        for tz in ["Z", "gmt", "+00:00", "UTC+0000", " utc "] {
            assert_eq!(fp("2000-01-01", "12:00:00", 0.0, 0.0, tz), a, "{tz}");
        }
    }

    #[test]
    fn coordinates_round() {
        let a = fp("2000-01-01", "12:00:00", 10.0, 20.0, "UTC");
        assert_eq!(fp("2000-01-01", "12:00:00", 10.00001, 19.99996, "UTC"), a);
        assert_ne!(fp("2000-01-01", "12:00:00", 10.001, 20.0, "UTC"), a);
    }

    #[test]
    fn negative_zero_matches_zero() {
        assert_eq!(
            fp("2000-01-01", "12:00:00", -0.00001, 0.0, "UTC"),
            fp("2000-01-01", "12:00:00", 0.0, 0.0, "UTC")
        );
    }

    #[test]
    fn distinct_inputs_differ() {
        let a = fp("2000-01-01", "12:00:00", 0.0, 0.0, "UTC");
        assert_ne!(fp("2000-01-01", "12:00:01", 0.0, 0.0, "UTC"), a);
        assert_ne!(fp("2000-01-02", "12:00:00", 0.0, 0.0, "UTC"), a);
        assert_ne!(fp("2000-01-01", "12:00:00", 0.0, 0.0, "+01:00"), a);
    }

    #[test]
    fn fields_are_sorted_and_normalised() {
        let b = BirthData::new("1987-06-15", "08:05:00", 51.50722, -0.1275, "Europe/London");
        let fields = normalized_fields(&b, 4).unwrap();
        let keys: Vec<_> = fields.keys().copied().collect();
        assert_eq!(keys, ["date", "lat", "lng", "time", "tz"]);
        assert_eq!(fields["lat"], "51.5072");
        assert_eq!(fields["lng"], "-0.1275");
        assert_eq!(fields["time"], "08:05:00");
        assert_eq!(fields["tz"], "Europe/London");
    }

    #[test]
    fn unresolvable_input_is_invalid() {
        let b = BirthData::new("2000-01-01", "12:00:00", 0.0, 0.0, "Mars/Olympus");
        assert!(matches!(fingerprint(&b, 4), Err(CalcError::InvalidInput(_))));
    }
}
