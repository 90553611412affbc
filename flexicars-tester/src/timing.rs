use flexicars_core::Sleep;
use std::time::Duration;

/// Real tokio timers with every delay multiplied by `scale`.
#[derive(Debug, Clone, Copy)]
pub struct TokioSleep {
    scale: f64,
}

impl TokioSleep {
    pub fn new(scale: f64) -> Self {
        Self {
            scale: if scale.is_finite() { scale.max(0.0) } else { 1.0 },
        }
    }

    pub fn scaled(&self, ms: u32) -> Duration {
        Duration::from_secs_f64(f64::from(ms) / 1000.0 * self.scale)
    }
}

impl Sleep for TokioSleep {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        tokio::time::sleep(self.scaled(ms))
    }
}
