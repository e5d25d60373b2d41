//! Background sensor simulation task.
//!
//! Stands in for real sensor hardware: a single detached task that bumps
//! both gauges on a fixed interval for the life of the process. There is no
//! cancellation channel and no error path; increments cannot fail.

use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::metrics::SensorMetrics;

/// Spawns the perpetual generator task. The returned handle is normally
/// dropped by the caller; the task runs until process exit.
pub fn spawn(metrics: SensorMetrics, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("Sensor generator started, tick interval {:?}", interval);
        loop {
            metrics.record_sample();
            tokio::time::sleep(interval).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Registry;

    #[tokio::test(start_paused = true)]
    async fn test_generator_ticks_on_interval() {
        let registry = Registry::new();
        let metrics = SensorMetrics::new(&registry).unwrap();

        let handle = spawn(metrics.clone(), Duration::from_secs(2));

        // First sample lands immediately, then one per interval.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(metrics.temperature.get(), 1.0);

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(metrics.temperature.get(), 4.0);
        assert_eq!(metrics.humidity.get(), 4.0);

        handle.abort();
    }
}
