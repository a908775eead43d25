use std::time::{Duration, Instant};

use crate::game::TickOutcome;

/// In-memory statistics for the running session
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Apples eaten since the last reset
    pub apples_eaten: u32,
    /// Longest snake seen this session
    pub best_length: usize,
    pub collisions: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            apples_eaten: 0,
            best_length: 1,
            collisions: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold a tick result in; `length` is the snake size after the tick
    pub fn on_tick(&mut self, outcome: TickOutcome, length: usize) {
        if outcome.collided {
            self.collisions += 1;
            self.on_round_start();
        }
        if outcome.ate_apple {
            self.apples_eaten += 1;
        }
        self.best_length = self.best_length.max(length);
    }

    pub fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.apples_eaten = 0;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ate() -> TickOutcome {
        TickOutcome {
            ate_apple: true,
            ..Default::default()
        }
    }

    fn crashed() -> TickOutcome {
        TickOutcome {
            collided: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_length_survives_collision() {
        let mut metrics = GameMetrics::new();

        metrics.on_tick(ate(), 1);
        metrics.on_tick(TickOutcome::default(), 2);
        metrics.on_tick(ate(), 2);
        metrics.on_tick(TickOutcome::default(), 3);
        assert_eq!(metrics.apples_eaten, 2);
        assert_eq!(metrics.best_length, 3);

        metrics.on_tick(crashed(), 1);
        assert_eq!(metrics.collisions, 1);
        assert_eq!(metrics.apples_eaten, 0);
        assert_eq!(metrics.best_length, 3);
    }

    #[test]
    fn test_round_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_round_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
