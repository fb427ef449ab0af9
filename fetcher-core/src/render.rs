//! Fixed-width console table for a [`WeatherReading`].

use std::io::{self, Write};

use crate::{convert::celsius_to_fahrenheit, model::WeatherReading};

const BORDER: &str = "+----------------------+--------------------+";

/// Write the reading as a bordered table. Temperatures are shown in °F,
/// wind speed stays in m/s.
pub fn render<W: Write>(out: &mut W, reading: &WeatherReading) -> io::Result<()> {
    let temp_f = celsius_to_fahrenheit(reading.temperature_c);
    let feels_like_f = celsius_to_fahrenheit(reading.feels_like_c);

    writeln!(out, "{BORDER}")?;
    writeln!(out, "| {:<20} | {:<15.15}    |", "Description", "Value")?;
    writeln!(out, "{BORDER}")?;
    writeln!(out, "| {:<20} | {:<15.15}    |", "City", reading.city_name)?;
    writeln!(out, "| {:<20} | {:<15.2} °F |", "Temperature", temp_f)?;
    writeln!(out, "| {:<20} | {:<15.2} °F |", "Feels Like", feels_like_f)?;
    writeln!(out, "| {:<20} | {:<15}  % |", "Humidity", reading.humidity_pct)?;
    writeln!(out, "| {:<20} | {:<15.2} m/s|", "Wind Speed", reading.wind_speed_mps)?;
    writeln!(out, "{BORDER}")?;

    Ok(())
}

pub fn render_to_string(reading: &WeatherReading) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render(&mut buf, reading);
    String::from_utf8_lossy(&buf).into_owned()
}
