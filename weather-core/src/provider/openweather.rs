use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{config::ProviderConfig, error::ProviderError, model::Temperature};

use super::{truncate_body, ProviderId, TemperatureProvider};

/// OpenWeatherMap current-weather endpoint. Reports temperature in Kelvin
/// already, so no conversion is needed.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            http: super::http_client(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwResponse {
    main: OwMain,
}

#[async_trait]
impl TemperatureProvider for OpenWeatherProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenWeather
    }

    async fn temperature(&self, city: &str) -> Result<Temperature, ProviderError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("APPID", self.api_key.as_str()), ("q", city)])
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

        let parsed: OwResponse = serde_json::from_str(&body)
            .map_err(|source| ProviderError::Decode { provider: self.id(), source })?;

        let temperature = Temperature::from_kelvin(parsed.main.temp);
        tracing::info!(provider = %self.id(), city, kelvin = temperature.kelvin(), "fetched temperature");

        Ok(temperature)
    }
}
