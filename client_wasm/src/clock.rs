//! `performance.now()` as the frame clock

use game_core::Clock;
use web_sys::Performance;

use crate::error::ClientError;

pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    pub fn new() -> Result<Self, ClientError> {
        let performance = web_sys::window()
            .ok_or(ClientError::NoWindow)?
            .performance()
            .ok_or_else(|| ClientError::Dom("performance API unavailable".into()))?;
        Ok(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.performance.now()
    }
}
