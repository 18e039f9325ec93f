//! Birth data as it arrives on the wire.

use serde::{Deserialize, Serialize};

/// Geolocation and timezone of a birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Latitude, degrees north, [-90, 90].
    pub lat: f64,
    /// Longitude, degrees east, [-180, 180].
    pub lng: f64,
    /// `UTC`, a fixed offset such as `+05:30`, or an IANA zone name.
    pub timezone: String,
}

/// Local birth date, time and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthData {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM:SS`, 24-hour.
    pub time: String,
    pub location: Location,
}

impl BirthData {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        lat: f64,
        lng: f64,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            location: Location {
                lat,
                lng,
                timezone: timezone.into(),
            },
        }
    }
}
