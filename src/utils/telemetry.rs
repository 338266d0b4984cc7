// file: src/utils/telemetry.rs
// description: wall-clock timing for batch runs
// reference: tracing-based operation timing

use std::time::{Duration, Instant};
use tracing::info;

/// Operation timer for performance tracking
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        info!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish_with_count(self, count: usize) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed operation: {} - {} documents in {:.2}s ({:.2} documents/sec)",
            self.operation,
            count,
            elapsed.as_secs_f64(),
            per_second(count, elapsed)
        );
        elapsed
    }
}

pub fn per_second(count: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { count as f64 / secs } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_second() {
        assert_eq!(per_second(10, Duration::from_secs(5)), 2.0);
        assert_eq!(per_second(10, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::new("test");
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.finish_with_count(3);
        assert!(elapsed >= Duration::from_millis(10));
    }
}
