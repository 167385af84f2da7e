// Frame timing

use std::time::Instant;

/// Measures the time between frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Instant,
    delta: f32,
    total: f32,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            delta: 0.0,
            total: 0.0,
        }
    }

    /// Starts a new frame and returns the seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.total += self.delta;
        self.delta
    }

    /// Seconds between the last two ticks.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Seconds accumulated over all ticks.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.total
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn ticks_accumulate() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.total(), 0.0);

        std::thread::sleep(Duration::from_millis(5));
        let first = clock.tick();
        assert!(first >= 0.005);
        assert_eq!(clock.delta(), first);

        let second = clock.tick();
        assert!(second >= 0.0);
        assert!((clock.total() - (first + second)).abs() < 1e-6);
    }
}
