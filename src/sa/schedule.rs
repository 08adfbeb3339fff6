//! Exponential cooling schedule.

/// Exponential decay `T_k = T_0 · a^k`, clamped at a floor.
///
/// The temperature is a pure function of the step counter `k`, so
/// resetting the counter exactly resets the temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialSchedule {
    start_temperature: f64,
    cooling_step: f64,
    min_temperature: f64,
    cooling_time: u64,
}

impl ExponentialSchedule {
    pub fn new(start_temperature: f64, cooling_step: f64, min_temperature: f64) -> Self {
        Self {
            start_temperature,
            cooling_step,
            min_temperature,
            cooling_time: 0,
        }
    }

    /// Temperature after `k` steps.
    pub fn temperature_at(&self, k: u64) -> f64 {
        (self.start_temperature * self.cooling_step.powf(k as f64)).max(self.min_temperature)
    }

    /// Returns the temperature for the current step, then advances it.
    pub fn advance(&mut self) -> f64 {
        let t = self.temperature_at(self.cooling_time);
        self.cooling_time += 1;
        t
    }

    /// Rewinds the step counter to zero. `T_0` is unchanged.
    pub fn reset(&mut self) {
        self.cooling_time = 0;
    }

    pub fn cooling_time(&self) -> u64 {
        self.cooling_time
    }

    pub fn start_temperature(&self) -> f64 {
        self.start_temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advance_counts_steps() {
        let mut schedule = ExponentialSchedule::new(5.0, 0.5, 1e-3);
        assert!((schedule.advance() - 5.0).abs() < 1e-12);
        assert!((schedule.advance() - 2.5).abs() < 1e-12);
        assert!((schedule.advance() - 1.25).abs() < 1e-12);
        assert_eq!(schedule.cooling_time(), 3);
    }

    #[test]
    fn test_floor_clamp() {
        let schedule = ExponentialSchedule::new(1.0, 0.1, 0.01);
        assert!((schedule.temperature_at(10) - 0.01).abs() < 1e-15);
        assert!(schedule.temperature_at(u64::MAX) > 0.0);
    }

    #[test]
    fn test_reset_rewinds_to_start_temperature() {
        let mut schedule = ExponentialSchedule::new(5.0, 0.9, 1e-6);
        for _ in 0..10 {
            schedule.advance();
        }
        schedule.reset();
        assert_eq!(schedule.cooling_time(), 0);
        assert_eq!(schedule.start_temperature(), 5.0);
        assert!((schedule.advance() - 5.0).abs() < 1e-12);
        assert!((schedule.advance() - 4.5).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_monotone_with_floor(
            t0 in 1e-3f64..1e3,
            a in 0.01f64..0.999_999,
            floor_ratio in 1e-9f64..0.5,
            k in 0u64..100_000,
        ) {
            let min = t0 * floor_ratio;
            let schedule = ExponentialSchedule::new(t0, a, min);
            let now = schedule.temperature_at(k);
            let next = schedule.temperature_at(k + 1);
            prop_assert!(now >= next);
            prop_assert!(next >= min);
            prop_assert!(now >= min);
        }
    }
}
