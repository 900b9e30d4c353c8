//! Repeating drop timer
//!
//! Fires a fixed number of times at a fixed interval on a logical clock the
//! caller advances, so rounds can be replayed without a real clock.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropTimer {
    interval_ms: u32,
    /// Firings still owed
    remaining: u32,
    /// Time accumulated toward the next firing
    elapsed_ms: f32,
    paused: bool,
}

impl DropTimer {
    /// Arm the timer to fire `count` times, the first one `interval_ms` from now
    pub fn start(&mut self, interval_ms: u32, count: u32) {
        self.interval_ms = interval_ms.max(1);
        self.remaining = count;
        self.elapsed_ms = 0.0;
        self.paused = false;
    }

    /// Advance the clock and return how many firings fell due
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        if self.paused || self.remaining == 0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let interval = self.interval_ms as f32;
        let mut fired = 0;
        while self.elapsed_ms >= interval && self.remaining > 0 {
            self.elapsed_ms -= interval;
            self.remaining -= 1;
            fired += 1;
        }
        if self.remaining == 0 {
            self.elapsed_ms = 0.0;
        }
        fired
    }

    /// Stop firing until the next `start`. Calling it again is harmless.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_count_times() {
        let mut timer = DropTimer::default();
        timer.start(200, 3);
        let mut total = 0;
        for _ in 0..100 {
            total += timer.advance(50.0);
        }
        assert_eq!(total, 3);
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_first_fire_after_one_interval() {
        let mut timer = DropTimer::default();
        timer.start(200, 5);
        assert_eq!(timer.advance(199.0), 0);
        assert_eq!(timer.advance(1.0), 1);
        assert_eq!(timer.remaining(), 4);
    }

    #[test]
    fn test_large_step_catches_up() {
        let mut timer = DropTimer::default();
        timer.start(200, 5);
        assert_eq!(timer.advance(650.0), 3);
        assert_eq!(timer.advance(10_000.0), 2);
    }

    #[test]
    fn test_pause_is_idempotent_and_sticky() {
        let mut timer = DropTimer::default();
        timer.start(200, 5);
        timer.advance(200.0);
        timer.pause();
        timer.pause();
        assert!(timer.is_paused());
        assert_eq!(timer.advance(5_000.0), 0);
        assert_eq!(timer.remaining(), 4);

        timer.start(200, 2);
        assert!(!timer.is_paused());
        assert_eq!(timer.advance(400.0), 2);
    }
}
