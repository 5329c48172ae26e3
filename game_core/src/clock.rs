//! Wall-clock frame timing

use crate::params::Params;

/// Monotonic millisecond time source
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Turns clock readings into per-frame deltas and a smoothed FPS figure
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
    fps: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call. The first call returns one fixed tick.
    pub fn tick(&mut self, clock: &dyn Clock) -> f32 {
        let now = clock.now_ms();
        let dt = match self.last_ms {
            Some(last) => ((now - last).max(0.0) / 1000.0) as f32,
            None => Params::FIXED_DT,
        };
        self.last_ms = Some(now);

        if dt > 0.0 {
            let instant = 1.0 / dt;
            self.fps = if self.fps == 0.0 {
                instant
            } else {
                self.fps * 0.9 + instant * 0.1
            };
        }
        dt
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ManualClock {
        now: Cell<f64>,
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> f64 {
            self.now.get()
        }
    }

    #[test]
    fn test_first_tick_is_one_fixed_step() {
        let clock = ManualClock { now: Cell::new(5000.0) };
        let mut timer = FrameTimer::new();
        assert_eq!(timer.tick(&clock), Params::FIXED_DT);
    }

    #[test]
    fn test_tick_measures_elapsed_time() {
        let clock = ManualClock { now: Cell::new(0.0) };
        let mut timer = FrameTimer::new();
        timer.tick(&clock);

        clock.now.set(20.0);
        let dt = timer.tick(&clock);
        assert!((dt - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_clock_going_backwards_gives_zero() {
        let clock = ManualClock { now: Cell::new(100.0) };
        let mut timer = FrameTimer::new();
        timer.tick(&clock);
        clock.now.set(50.0);
        assert_eq!(timer.tick(&clock), 0.0);
    }

    #[test]
    fn test_fps_converges() {
        let clock = ManualClock { now: Cell::new(0.0) };
        let mut timer = FrameTimer::new();
        for i in 1..=200 {
            clock.now.set(i as f64 * 1000.0 / 60.0);
            timer.tick(&clock);
        }
        assert!((timer.fps() - 60.0).abs() < 1.0, "fps {}", timer.fps());
    }
}
