use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    config::Config,
    error::{ConfigError, ProviderError},
    model::Temperature,
    provider::{
        composite::CompositeProvider, openweather::OpenWeatherProvider,
        weatherbit::WeatherBitProvider,
    },
};

pub mod composite;
pub mod openweather;
pub mod weatherbit;

/// Identity of a temperature source, used in logs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeather,
    WeatherBit,
    Composite,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "openweathermap",
            ProviderId::WeatherBit => "weatherbit",
            ProviderId::Composite => "composite",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A component capable of fetching a temperature reading for a city from one
/// remote data source (or, for the composite, a set of them).
///
/// Implementations return Kelvin; unit conversion happens inside the provider.
#[async_trait]
pub trait TemperatureProvider: Send + Sync + Debug {
    fn id(&self) -> ProviderId;

    async fn temperature(&self, city: &str) -> Result<Temperature, ProviderError>;
}

/// Build the composite over every configured provider, in fixed order.
pub fn composite_from_config(config: &Config) -> Result<CompositeProvider, ConfigError> {
    CompositeProvider::new(vec![
        Box::new(OpenWeatherProvider::new(&config.openweather)),
        Box::new(WeatherBitProvider::new(&config.weatherbit)),
    ])
}

// Upstream error bodies go into error messages verbatim; keep them short.
// The cut must land on a char boundary or slicing panics on multibyte UTF-8.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

// Bounded timeout so a slow upstream cannot hold a request open indefinitely.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("default reqwest client must build")
}
