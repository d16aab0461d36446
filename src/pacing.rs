// src/pacing.rs
// =============================================================================
// Computes how long to wait before the next search engine request.
//
// Search engines throttle clients that fire requests back to back. Every wait
// gets a random base of 1-2 time units, plus an extra that grows with the
// number of links recorded so far across ALL emails (capped at 3 units).
// So the busier the whole run gets, the slower it goes.
// =============================================================================

use crate::config::PacingConfig;
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Pacer {
    config: PacingConfig,
}

impl Pacer {
    pub fn new(config: PacingConfig) -> Self {
        Pacer { config }
    }

    // Returns the delay to sleep before the next fetch
    //
    // Parameters:
    //   total_links: live count of links in the whole ResultSet
    pub fn next_delay(&self, total_links: usize) -> Duration {
        let base = if self.config.base_max > self.config.base_min {
            rand::thread_rng().gen_range(self.config.base_min..self.config.base_max)
        } else {
            self.config.base_min
        };

        let units = self.delay_units(total_links, base);
        self.config.time_unit.mul_f64(units)
    }

    /// Deterministic part of the delay, in time units
    pub fn delay_units(&self, total_links: usize, base: f64) -> f64 {
        let load = total_links as f64 / self.config.links_per_unit;
        base + load.min(self.config.cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pacer_ms() -> Pacer {
        Pacer::new(PacingConfig {
            time_unit: Duration::from_millis(1),
            ..PacingConfig::default()
        })
    }

    #[test]
    fn test_delay_units() {
        let pacer = Pacer::new(PacingConfig::default());
        assert_eq!(pacer.delay_units(0, 1.5), 1.5);
        assert_eq!(pacer.delay_units(15, 1.0), 2.5);
        // load is capped at 3 units
        assert_eq!(pacer.delay_units(10_000, 2.0), 5.0);
    }

    #[test]
    fn test_delay_always_within_bounds() {
        let pacer = pacer_ms();
        for total in [0, 1, 9, 10, 29, 30, 31, 500, usize::MAX / 2] {
            for _ in 0..50 {
                let delay = pacer.next_delay(total);
                assert!(delay >= Duration::from_millis(1), "{delay:?} too short for {total}");
                assert!(delay <= Duration::from_millis(5), "{delay:?} too long for {total}");
            }
        }
    }

    #[test]
    fn test_delay_grows_with_links() {
        let pacer = Pacer::new(PacingConfig::default());
        let mut previous = 0.0;
        for total in (0..=40).step_by(5) {
            let units = pacer.delay_units(total, 1.0);
            assert!(units >= previous);
            previous = units;
        }

        // Even the shortest draw after 30+ links beats the longest one at 0
        let quiet = pacer_ms().next_delay(0);
        let busy = pacer_ms().next_delay(30);
        assert!(busy > quiet);
    }

    #[test]
    fn test_fixed_base() {
        let pacer = Pacer::new(PacingConfig {
            base_min: 1.0,
            base_max: 1.0,
            time_unit: Duration::from_millis(10),
            ..PacingConfig::default()
        });
        assert_eq!(pacer.next_delay(0), Duration::from_millis(10));
    }
}
