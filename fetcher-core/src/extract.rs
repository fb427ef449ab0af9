//! Marker-based field extraction.
//!
//! Values are located by the literal text that precedes and follows them in the
//! upstream payload. There is no JSON awareness here: the markers assume the
//! compact, key-ordered body the current-weather endpoint returns.

use std::str::FromStr;

use crate::{error::ExtractionError, model::WeatherReading};

/// A field located by a start marker and the first end marker after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub field: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

pub const CITY: Marker = Marker { field: "name", start: "\"name\":\"", end: "\"" };
pub const TEMPERATURE: Marker = Marker { field: "temp", start: "\"temp\":", end: "," };
pub const FEELS_LIKE: Marker = Marker { field: "feels_like", start: "\"feels_like\":", end: "," };
pub const HUMIDITY: Marker = Marker { field: "humidity", start: "\"humidity\":", end: "," };
pub const WIND_SPEED: Marker = Marker { field: "speed", start: "\"speed\":", end: "}" };

/// Return the text between the first `start` in `body` and the first `end` after it.
pub fn extract<'a>(body: &'a str, start: &str, end: &str) -> Option<&'a str> {
    locate(body, start, end).ok()
}

// Err carries whichever marker was not found.
fn locate<'a, 'm>(body: &'a str, start: &'m str, end: &'m str) -> Result<&'a str, &'m str> {
    let from = body.find(start).ok_or(start)? + start.len();
    let len = body[from..].find(end).ok_or(end)?;
    Ok(&body[from..from + len])
}

impl Marker {
    pub fn extract<'a>(&self, body: &'a str) -> Result<&'a str, ExtractionError> {
        locate(body, self.start, self.end).map_err(|marker| {
            tracing::debug!(field = self.field, marker, "marker not found");
            ExtractionError::MissingMarker { field: self.field, marker }
        })
    }

    /// Extract a scalar, cutting off any trailing sibling field (`,"deg":120`)
    /// or the close of the enclosing object.
    pub fn scalar<'a>(&self, body: &'a str) -> Result<&'a str, ExtractionError> {
        let raw = self.extract(body)?;
        let cut = raw.find([',', '}']).unwrap_or(raw.len());
        Ok(raw[..cut].trim())
    }

    pub fn number<T: FromStr>(&self, body: &str) -> Result<T, ExtractionError> {
        let value = self.scalar(body)?;
        value.parse().map_err(|_| ExtractionError::InvalidNumber {
            field: self.field,
            value: value.to_string(),
        })
    }
}

/// Build a reading from `body` using the fixed field markers.
pub fn read_markers(body: &str) -> Result<WeatherReading, ExtractionError> {
    Ok(WeatherReading {
        city_name: CITY.extract(body)?.to_string(),
        temperature_c: TEMPERATURE.number(body)?,
        feels_like_c: FEELS_LIKE.number(body)?,
        humidity_pct: HUMIDITY.number(body)?,
        wind_speed_mps: WIND_SPEED.number(body)?,
    })
}
