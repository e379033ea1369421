use std::time::Duration;

/// Minimum pause between consecutive requests to the same provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    min_interval: Duration,
}

impl RateLimit {
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub async fn pause(&self) {
        if !self.min_interval.is_zero() {
            tokio::time::sleep(self.min_interval).await;
        }
    }
}

impl Default for RateLimit {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
