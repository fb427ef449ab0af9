use serde::Deserialize;
use std::fmt;

use crate::{error::ExtractionError, extract, model::WeatherReading};

/// How a reading is pulled out of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParserKind {
    /// Literal marker search over the raw text.
    #[default]
    Markers,
    /// Structured parse into a typed record.
    Json,
}

impl ParserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserKind::Markers => "markers",
            ParserKind::Json => "json",
        }
    }

    pub const fn all() -> &'static [ParserKind] {
        &[ParserKind::Markers, ParserKind::Json]
    }

    pub fn parse(&self, body: &str) -> Result<WeatherReading, ExtractionError> {
        match self {
            ParserKind::Markers => extract::read_markers(body),
            ParserKind::Json => read_json(body),
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ParserKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "markers" => Ok(ParserKind::Markers),
            "json" => Ok(ParserKind::Json),
            _ => Err(anyhow::anyhow!("Unknown parser '{value}'. Supported parsers: markers, json.")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    wind: OwWind,
}

fn read_json(body: &str) -> Result<WeatherReading, ExtractionError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    Ok(WeatherReading {
        city_name: parsed.name,
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
    })
}
