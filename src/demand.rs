//! Demand (shift request) generation.
//!
//! Produces preference matrices either pseudo-randomly — seeded, so a run is
//! reproducible — or from the literal weekly fixture used by the demo binary
//! and the tests. No global state: generators are plain values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{PreferenceMatrix, Scenario};

/// Seeded random preference-matrix generator.
///
/// Each cell is set independently with probability `density` (0.5 by
/// default, i.e. a uniform coin flip per slot). The same seed always yields
/// the same matrix.
///
/// # Example
///
/// ```
/// use shift_roster::demand::DemandGenerator;
///
/// let a = DemandGenerator::new(42).generate(10, 7, 3);
/// let b = DemandGenerator::new(42).generate(10, 7, 3);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct DemandGenerator {
    seed: u64,
    density: f64,
}

impl DemandGenerator {
    /// Creates a generator with the given seed and a 0.5 request density.
    pub fn new(seed: u64) -> Self {
        Self { seed, density: 0.5 }
    }

    /// Sets the per-cell request probability, clamped to [0, 1].
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density.clamp(0.0, 1.0);
        self
    }

    /// Generates a `worker_count × day_count × shift_count` matrix.
    pub fn generate(
        &self,
        worker_count: usize,
        day_count: usize,
        shift_count: usize,
    ) -> PreferenceMatrix {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut matrix = PreferenceMatrix::new(worker_count, day_count, shift_count);
        for worker in 0..worker_count {
            for day in 0..day_count {
                for shift in 0..shift_count {
                    if rng.random_bool(self.density) {
                        matrix.request(worker, day, shift);
                    }
                }
            }
        }
        matrix
    }
}

/// Literal request data for [`weekly_fixture`]: 5 workers × 7 days × 3 shifts.
const WEEKLY_REQUESTS: [[[u8; 3]; 7]; 5] = [
    [
        [0, 0, 1],
        [0, 0, 0],
        [0, 0, 0],
        [0, 0, 0],
        [0, 0, 1],
        [0, 1, 0],
        [0, 0, 1],
    ],
    [
        [0, 0, 0],
        [0, 0, 0],
        [0, 1, 0],
        [0, 1, 0],
        [1, 0, 0],
        [0, 0, 0],
        [0, 0, 1],
    ],
    [
        [0, 1, 0],
        [0, 1, 0],
        [0, 0, 0],
        [1, 0, 0],
        [0, 0, 0],
        [0, 1, 0],
        [0, 0, 0],
    ],
    [
        [0, 0, 1],
        [0, 0, 0],
        [1, 0, 0],
        [0, 1, 0],
        [0, 0, 0],
        [1, 0, 0],
        [0, 0, 0],
    ],
    [
        [0, 0, 0],
        [0, 0, 1],
        [0, 1, 0],
        [0, 0, 0],
        [1, 0, 0],
        [0, 1, 0],
        [0, 0, 0],
    ],
];

/// The deterministic demo scenario: 5 workers, 3 shifts per day staffed
/// [3, 2, 5], one week, with a fixed request matrix.
pub fn weekly_fixture() -> Scenario {
    let mut preferences = PreferenceMatrix::new(5, 7, 3);
    for (worker, days) in WEEKLY_REQUESTS.iter().enumerate() {
        for (day, shifts) in days.iter().enumerate() {
            for (shift, &requested) in shifts.iter().enumerate() {
                if requested == 1 {
                    preferences.request(worker, day, shift);
                }
            }
        }
    }

    Scenario::new(5, 3, 7)
        .with_staffing(vec![3, 2, 5])
        .with_preferences(preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_scenario;

    #[test]
    fn test_generator_is_deterministic() {
        let a = DemandGenerator::new(7).generate(8, 5, 3);
        let b = DemandGenerator::new(7).generate(8, 5, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generator_seeds_differ() {
        let a = DemandGenerator::new(1).generate(10, 7, 3);
        let b = DemandGenerator::new(2).generate(10, 7, 3);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generator_dimensions() {
        let m = DemandGenerator::new(0).generate(4, 6, 2);
        assert_eq!(m.worker_count(), 4);
        assert_eq!(m.day_count(), 6);
        assert_eq!(m.shift_count(), 2);
        assert_eq!(m.cell_count(), 48);
    }

    #[test]
    fn test_density_extremes() {
        let none = DemandGenerator::new(3).with_density(0.0).generate(3, 3, 3);
        assert_eq!(none.request_count(), 0);

        let all = DemandGenerator::new(3).with_density(1.0).generate(3, 3, 3);
        assert_eq!(all.request_count(), 27);
    }

    #[test]
    fn test_weekly_fixture_shape() {
        let scenario = weekly_fixture();
        assert!(validate_scenario(&scenario).is_ok());
        assert_eq!(scenario.worker_count, 5);
        assert_eq!(scenario.day_count, 7);
        assert_eq!(scenario.shift_count, 3);
        assert_eq!(scenario.total_daily_staffing(), 10);
        // Each worker filed exactly 4 requests in the fixture.
        assert_eq!(scenario.preferences.request_count(), 20);
        assert!(scenario.preferences.is_requested(0, 0, 2));
        assert!(!scenario.preferences.is_requested(0, 0, 0));
    }
}
