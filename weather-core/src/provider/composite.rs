use async_trait::async_trait;

use crate::{
    error::{ConfigError, ProviderError},
    model::Temperature,
};

use super::{ProviderId, TemperatureProvider};

/// A provider built from a fixed, ordered set of other providers.
///
/// Queries each one sequentially in configuration order and averages the
/// readings. Fail-fast: any single failure aborts the whole lookup and
/// discards readings already obtained.
#[derive(Debug)]
pub struct CompositeProvider {
    providers: Vec<Box<dyn TemperatureProvider>>,
}

impl CompositeProvider {
    /// An empty provider set is rejected up front so the average is always
    /// well-defined.
    pub fn new(providers: Vec<Box<dyn TemperatureProvider>>) -> Result<Self, ConfigError> {
        if providers.is_empty() {
            return Err(ConfigError::NoProviders);
        }
        Ok(Self { providers })
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

#[async_trait]
impl TemperatureProvider for CompositeProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Composite
    }

    async fn temperature(&self, city: &str) -> Result<Temperature, ProviderError> {
        let mut sum = 0.0;
        for provider in &self.providers {
            sum += provider.temperature(city).await?.kelvin();
        }

        let average = Temperature::from_kelvin(sum / self.providers.len() as f64);
        tracing::info!(provider = %self.id(), city, kelvin = average.kelvin(), "averaged temperature");

        Ok(average)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Test double returning a fixed Kelvin value, or failing when none is
    /// set. Records whether it was queried at all.
    #[derive(Debug)]
    struct StubProvider {
        kelvin: Option<f64>,
        queried: Arc<AtomicBool>,
    }

    impl StubProvider {
        fn returning(kelvin: f64) -> Box<Self> {
            Box::new(Self { kelvin: Some(kelvin), queried: Arc::new(AtomicBool::new(false)) })
        }

        fn failing() -> Box<Self> {
            Box::new(Self { kelvin: None, queried: Arc::new(AtomicBool::new(false)) })
        }
    }

    #[async_trait]
    impl TemperatureProvider for StubProvider {
        fn id(&self) -> ProviderId {
            ProviderId::OpenWeather
        }

        async fn temperature(&self, _city: &str) -> Result<Temperature, ProviderError> {
            self.queried.store(true, Ordering::SeqCst);
            match self.kelvin {
                Some(k) => Ok(Temperature::from_kelvin(k)),
                None => Err(ProviderError::EmptyPayload { provider: self.id() }),
            }
        }
    }

    #[tokio::test]
    async fn averages_readings_from_all_providers() {
        let composite = CompositeProvider::new(vec![
            StubProvider::returning(290.0),
            StubProvider::returning(280.0),
        ])
        .unwrap();

        let temp = composite.temperature("London").await.unwrap();
        assert!((temp.kelvin() - 285.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn single_provider_average_is_its_reading() {
        let composite = CompositeProvider::new(vec![StubProvider::returning(300.0)]).unwrap();

        let temp = composite.temperature("London").await.unwrap();
        assert_eq!(temp.kelvin(), 300.0);
    }

    #[tokio::test]
    async fn any_failure_fails_the_whole_lookup() {
        let composite = CompositeProvider::new(vec![
            StubProvider::returning(290.0),
            StubProvider::failing(),
            StubProvider::returning(280.0),
        ])
        .unwrap();

        let err = composite.temperature("London").await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyPayload { .. }));
    }

    #[tokio::test]
    async fn providers_after_a_failure_are_not_queried() {
        let last = StubProvider::returning(280.0);
        let last_queried = last.queried.clone();

        let composite =
            CompositeProvider::new(vec![StubProvider::failing(), last]).unwrap();

        composite.temperature("London").await.unwrap_err();
        assert!(!last_queried.load(Ordering::SeqCst));
    }

    #[test]
    fn empty_provider_set_is_rejected() {
        let err = CompositeProvider::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigError::NoProviders));
    }
}
