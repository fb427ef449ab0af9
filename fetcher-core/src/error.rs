use thiserror::Error;

/// Anything that prevents a 200 response body from being obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request to weather service failed")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read weather service response body")]
    Body(#[source] reqwest::Error),

    #[error("Unable to fetch data. HTTP code: {0}")]
    Status(u16),
}

/// The body arrived but a reading could not be built from it.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("marker {marker:?} not found in response for field '{field}'")]
    MissingMarker { field: &'static str, marker: &'static str },

    #[error("field '{field}' has non-numeric value {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("response is not a valid current-weather payload")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
