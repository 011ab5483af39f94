use serde::Serialize;

/// A temperature reading in the canonical unit (Kelvin).
///
/// Every value crossing a component boundary is Kelvin; providers convert
/// their native unit before returning.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    pub fn from_kelvin(kelvin: f64) -> Self {
        Self(kelvin)
    }

    pub fn from_celsius(celsius: f64) -> Self {
        Self(celsius + 273.15)
    }

    pub fn kelvin(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_converts_to_kelvin() {
        let t = Temperature::from_celsius(26.85);
        assert!((t.kelvin() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn kelvin_is_passed_through() {
        let t = Temperature::from_kelvin(290.0);
        assert_eq!(t.kelvin(), 290.0);
    }
}
