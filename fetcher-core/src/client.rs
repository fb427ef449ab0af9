use crate::{
    config::Settings,
    error::{TransportError, WeatherError},
    model::WeatherReading,
    request::build_url,
    transport::{HttpTransport, Transport},
};

/// Runs one fetch: build the URL, GET it, check the status, parse the body.
#[derive(Debug)]
pub struct WeatherClient {
    settings: Settings,
    transport: Box<dyn Transport>,
}

impl WeatherClient {
    pub fn new(settings: Settings, transport: Box<dyn Transport>) -> Self {
        Self { settings, transport }
    }

    pub fn from_settings(settings: Settings) -> Self {
        Self::new(settings, Box::new(HttpTransport::new()))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn current(&self) -> Result<WeatherReading, WeatherError> {
        let Settings { base_url, city, api_key, parser } = &self.settings;
        let url = build_url(base_url, city, api_key);

        tracing::info!(%base_url, %city, "fetching current weather");
        let res = self.transport.fetch(&url).await?;

        if !res.is_ok() {
            tracing::debug!(status = res.status, "weather service returned an error status");
            return Err(TransportError::Status(res.status).into());
        }

        tracing::debug!(%parser, bytes = res.body.len(), "parsing response");
        let reading = parser.parse(&res.body).inspect_err(|e| {
            tracing::debug!(error = %e, "could not extract weather fields");
        })?;

        Ok(reading)
    }
}
