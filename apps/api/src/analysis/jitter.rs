use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive range the automation-progress jitter is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterRange {
    pub min: f64,
    pub max: f64,
}

impl Default for JitterRange {
    fn default() -> Self {
        Self {
            min: -5.0,
            max: 10.0,
        }
    }
}

impl JitterRange {
    /// Uniform sample in `[min, max]`. A degenerate range returns `min`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

/// Per-request generator: seeded when a seed is configured, OS entropy otherwise.
pub fn request_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_range() {
        let range = JitterRange::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let j = range.sample(&mut rng);
            assert!((-5.0..=10.0).contains(&j), "jitter {j} out of range");
        }
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let range = JitterRange { min: 2.5, max: 2.5 };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(range.sample(&mut rng), 2.5);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let range = JitterRange::default();
        let mut a = request_rng(Some(42));
        let mut b = request_rng(Some(42));
        for _ in 0..10 {
            assert_eq!(range.sample(&mut a), range.sample(&mut b));
        }
    }
}
