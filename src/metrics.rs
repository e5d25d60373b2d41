//! Prometheus metrics definitions for sensor-diag-exporter.
//!
//! Two synthetic sensor gauges are exposed. The gauge set is fixed at
//! startup and never changes afterwards; the generator task is the only
//! writer and the /metrics handler the only reader.

use prometheus::{Gauge, Registry, TextEncoder};

/// The two synthetic sensor gauges, registered once at startup.
#[derive(Clone)]
pub struct SensorMetrics {
    pub temperature: Gauge,
    pub humidity: Gauge,
}

impl SensorMetrics {
    /// Creates and registers both sensor gauges with the registry.
    /// Registering the same gauge name twice fails here, at startup.
    pub fn new(registry: &Registry) -> Result<Self, Box<dyn std::error::Error>> {
        let temperature = Gauge::new("sensor_temperature", "Temperature")?;
        let humidity = Gauge::new("sensor_humidity", "Humidity")?;

        registry.register(Box::new(temperature.clone()))?;
        registry.register(Box::new(humidity.clone()))?;

        Ok(Self {
            temperature,
            humidity,
        })
    }

    /// Records one simulated sensor sample: both gauges move up by 1 in
    /// lockstep. Gauge increments are atomic, so concurrent renders never
    /// observe a torn value.
    pub fn record_sample(&self) {
        self.temperature.inc();
        self.humidity.inc();
    }
}

/// Renders the full registry in Prometheus text exposition format.
/// Pure read; deterministic for a fixed registry state.
pub fn render(registry: &Registry) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    encoder.encode_to_string(&metric_families)
}
