use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{config::ProviderConfig, error::ProviderError, model::Temperature};

use super::{truncate_body, ProviderId, TemperatureProvider};

/// Weatherbit current-weather endpoint. Reports temperature in Celsius inside
/// a `data` array; the first entry is converted to Kelvin. An empty array is
/// an explicit error, never an unchecked index.
#[derive(Debug, Clone)]
pub struct WeatherBitProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherBitProvider {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            http: super::http_client(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WbEntry {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct WbResponse {
    data: Vec<WbEntry>,
}

#[async_trait]
impl TemperatureProvider for WeatherBitProvider {
    fn id(&self) -> ProviderId {
        ProviderId::WeatherBit
    }

    async fn temperature(&self, city: &str) -> Result<Temperature, ProviderError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str()), ("city", city)])
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider: self.id(), source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ProviderError::Transport { provider: self.id(), source })?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: self.id(),
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: WbResponse = serde_json::from_str(&body)
            .map_err(|source| ProviderError::Decode { provider: self.id(), source })?;

        let entry = parsed
            .data
            .first()
            .ok_or(ProviderError::EmptyPayload { provider: self.id() })?;

        let temperature = Temperature::from_celsius(entry.temp);
        tracing::info!(provider = %self.id(), city, kelvin = temperature.kelvin(), "fetched temperature");

        Ok(temperature)
    }
}
