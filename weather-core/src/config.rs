use crate::error::ConfigError;

/// Environment variable holding the OpenWeatherMap API key.
pub const OPENWEATHER_VAR: &str = "OPENWEATHER";
/// Environment variable holding the Weatherbit API key.
pub const WEATHERBIT_VAR: &str = "WEATHERBIT";

const OPENWEATHER_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";
const WEATHERBIT_BASE_URL: &str = "https://api.weatherbit.io/v2.0/current";

/// Configuration for a single provider: where to reach it and how to
/// authenticate. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Top-level configuration, built from the environment at process start.
#[derive(Debug, Clone)]
pub struct Config {
    pub openweather: ProviderConfig,
    pub weatherbit: ProviderConfig,
}

impl Config {
    /// Build the configuration from process environment variables.
    ///
    /// A missing key is a fatal startup error naming the variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let openweather_key =
            lookup(OPENWEATHER_VAR).ok_or(ConfigError::MissingVar(OPENWEATHER_VAR))?;
        let weatherbit_key =
            lookup(WEATHERBIT_VAR).ok_or(ConfigError::MissingVar(WEATHERBIT_VAR))?;

        Ok(Self {
            openweather: ProviderConfig {
                base_url: OPENWEATHER_BASE_URL.to_string(),
                api_key: openweather_key,
            },
            weatherbit: ProviderConfig {
                base_url: WEATHERBIT_BASE_URL.to_string(),
                api_key: weatherbit_key,
            },
        })
    }
}
