//! Query URL construction.

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Compose `{base_url}?q={city}&appid={api_key}&units=metric`.
///
/// `city` must already be transport-safe; nothing is escaped here.
pub fn build_url(base_url: &str, city: &str, api_key: &str) -> String {
    format!("{base_url}?q={city}&appid={api_key}&units=metric")
}

/// Replace spaces with `+` so a city typed as `Holly Springs` can go on the query string.
pub fn encode_city(city: &str) -> String {
    city.trim().replace(' ', "+")
}
