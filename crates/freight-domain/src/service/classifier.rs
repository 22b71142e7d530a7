//! Range category classification
//!
//! Each city size class has a base probability for local, state and
//! international jobs. Hub (large) cities double their local share and
//! spread the rest over state and international in their base ratio.

use freight_types::{JobType, SizeClass};
use rand::Rng;

/// Probability of each range category; the three shares sum to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeDistribution {
    pub local: f64,
    pub state: f64,
    pub international: f64,
}

impl RangeDistribution {
    /// Unadjusted distribution for a size class
    pub fn base(size_class: SizeClass) -> Self {
        match size_class {
            SizeClass::Small => Self {
                local: 0.50,
                state: 0.35,
                international: 0.15,
            },
            SizeClass::Medium => Self {
                local: 0.40,
                state: 0.40,
                international: 0.20,
            },
            SizeClass::Large => Self {
                local: 0.30,
                state: 0.40,
                international: 0.30,
            },
        }
    }

    /// Distribution actually used for draws, hub adjustment included
    pub fn for_size(size_class: SizeClass) -> Self {
        let base = Self::base(size_class);
        if size_class.is_hub() {
            base.hub_adjusted()
        } else {
            base
        }
    }

    /// Double the local share (capped at 1.0) and rescale state and
    /// international to fill the remainder, keeping their ratio.
    pub fn hub_adjusted(self) -> Self {
        let local = (self.local * 2.0).min(1.0);
        let remaining = 1.0 - local;
        let others = self.state + self.international;
        if others <= 0.0 {
            return Self {
                local,
                state: 0.0,
                international: 0.0,
            };
        }
        Self {
            local,
            state: remaining * self.state / others,
            international: remaining * self.international / others,
        }
    }

    /// Map a uniform roll in `[0, 1)` onto the cumulative thresholds
    pub fn pick(&self, roll: f64) -> JobType {
        if roll < self.local {
            JobType::Local
        } else if roll < self.local + self.state {
            JobType::State
        } else {
            JobType::International
        }
    }
}

/// Draw a range category for a city of the given size class
pub fn classify<R: Rng + ?Sized>(size_class: SizeClass, rng: &mut R) -> JobType {
    RangeDistribution::for_size(size_class).pick(rng.gen::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sums_to_one(d: RangeDistribution) -> bool {
        (d.local + d.state + d.international - 1.0).abs() < 1e-9
    }

    #[test]
    fn test_base_distributions_sum_to_one() {
        for size in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
            assert!(sums_to_one(RangeDistribution::base(size)));
            assert!(sums_to_one(RangeDistribution::for_size(size)));
        }
    }

    #[test]
    fn test_hub_adjustment_for_large() {
        let d = RangeDistribution::for_size(SizeClass::Large);
        assert!((d.local - 0.60).abs() < 1e-9);
        // remaining 0.40 split 4:3
        assert!((d.state - 0.40 * 4.0 / 7.0).abs() < 1e-9);
        assert!((d.international - 0.40 * 3.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_hub_unchanged() {
        assert_eq!(
            RangeDistribution::for_size(SizeClass::Small),
            RangeDistribution::base(SizeClass::Small)
        );
        assert_eq!(
            RangeDistribution::for_size(SizeClass::Medium),
            RangeDistribution::base(SizeClass::Medium)
        );
    }

    #[test]
    fn test_hub_adjustment_caps_local() {
        let d = RangeDistribution {
            local: 0.7,
            state: 0.2,
            international: 0.1,
        }
        .hub_adjusted();
        assert_eq!(d.local, 1.0);
        assert_eq!(d.state, 0.0);
        assert_eq!(d.international, 0.0);
    }

    #[test]
    fn test_pick_thresholds() {
        let d = RangeDistribution::base(SizeClass::Small);
        assert_eq!(d.pick(0.0), JobType::Local);
        assert_eq!(d.pick(0.49), JobType::Local);
        assert_eq!(d.pick(0.50), JobType::State);
        assert_eq!(d.pick(0.84), JobType::State);
        assert_eq!(d.pick(0.85), JobType::International);
        assert_eq!(d.pick(0.999), JobType::International);
    }

    #[test]
    fn test_classify_frequencies_for_hub() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let draws = 20_000;
        let local = (0..draws)
            .filter(|_| classify(SizeClass::Large, &mut rng) == JobType::Local)
            .count();
        let share = local as f64 / draws as f64;
        assert!((share - 0.60).abs() < 0.02, "local share {share}");
    }
}
