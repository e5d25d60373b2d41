//! Integration tests for the sensor generator and gauge concurrency.

use prometheus::Registry;
use std::sync::Arc;
use std::time::Duration;

use sensor_diag_exporter::metrics::{self, SensorMetrics};

#[test]
fn test_n_samples_leave_both_gauges_at_n_in_lockstep() {
    let registry = Registry::new();
    let sensors = SensorMetrics::new(&registry).unwrap();

    for n in 1..=50 {
        sensors.record_sample();
        // Both gauges equal initial + n, and equal each other, at every
        // observation point.
        assert_eq!(sensors.temperature.get(), n as f64);
        assert_eq!(sensors.temperature.get(), sensors.humidity.get());
    }
}

#[tokio::test(start_paused = true)]
async fn test_spawned_generator_advances_with_time() {
    let registry = Registry::new();
    let sensors = SensorMetrics::new(&registry).unwrap();

    let handle = sensor_diag_exporter::generator::spawn(
        sensors.clone(),
        Duration::from_secs(2),
    );

    // One sample lands immediately, then one every 2 seconds.
    tokio::time::sleep(Duration::from_secs(9)).await;
    assert_eq!(sensors.temperature.get(), 5.0);
    assert_eq!(sensors.humidity.get(), 5.0);

    handle.abort();
}

/// Parses the rendered value of a gauge out of the exposition text.
fn rendered_value(output: &str, name: &str) -> f64 {
    output
        .lines()
        .find(|l| l.starts_with(name) && !l.starts_with('#'))
        .and_then(|l| l.split_whitespace().nth(1))
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| panic!("gauge {name} not found in:\n{output}"))
}

#[test]
fn test_concurrent_render_never_observes_torn_values() {
    let registry = Arc::new(Registry::new());
    let sensors = SensorMetrics::new(&registry).unwrap();

    const INCREMENTS: usize = 10_000;

    let writer = {
        let sensors = sensors.clone();
        std::thread::spawn(move || {
            for _ in 0..INCREMENTS {
                sensors.record_sample();
            }
        })
    };

    let reader = {
        let registry = Arc::clone(&registry);
        std::thread::spawn(move || {
            for _ in 0..200 {
                let output = metrics::render(&registry).unwrap();
                let value = rendered_value(&output, "sensor_temperature");
                // Every observed value is an integer the gauge passed
                // through, within the range of applied increments.
                assert_eq!(value.fract(), 0.0, "torn value observed: {value}");
                assert!(value >= 0.0 && value <= INCREMENTS as f64);
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(sensors.temperature.get(), INCREMENTS as f64);
    assert_eq!(sensors.humidity.get(), INCREMENTS as f64);
}
