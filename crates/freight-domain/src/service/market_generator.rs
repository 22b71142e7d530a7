//! Per-city market generation
//!
//! Runs INITIAL_BATCH -> BACKFILL -> HUB_BOOST (large cities only) -> DONE.
//! Every rejected candidate is skipped silently; the backfill and hub-boost
//! loops are bounded by attempt budgets, so their targets are best effort.
//! The [`GenerationReport`] records how far each phase got.

use std::ops::RangeInclusive;

use freight_types::{JobOffer, JobType, SizeClass};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::model::{Catalog, CityRecord};
use crate::provider::DistanceProvider;

use super::job_factory::{IdAllocator, JobFactory};

/// Soft minimum of offers the backfill phase tries to reach
pub const MIN_OFFERS_PER_CITY: usize = 10;

/// Attempt budget of the backfill phase
pub const BACKFILL_ATTEMPT_CAP: u32 = 200;

/// Attempt budget of the hub-boost phase
pub const HUB_BOOST_ATTEMPT_CAP: u32 = 500;

/// Thresholds and attempt budgets for one city run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationLimits {
    pub min_offers_per_city: usize,
    pub backfill_attempts: u32,
    pub boost_attempts: u32,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            min_offers_per_city: MIN_OFFERS_PER_CITY,
            backfill_attempts: BACKFILL_ATTEMPT_CAP,
            boost_attempts: HUB_BOOST_ATTEMPT_CAP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    InitialBatch,
    Backfill,
    HubBoost,
    Done,
}

/// Outcome of the hub-boost phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubBoostReport {
    pub pre_boost_local: usize,
    pub pre_boost_state: usize,
    pub target_local: usize,
    pub target_state: usize,
    pub final_local: usize,
    pub final_state: usize,
    pub attempts: u32,
    /// Budget ran out before both targets were met
    pub exhausted: bool,
}

impl HubBoostReport {
    pub fn targets_met(&self) -> bool {
        self.final_local >= self.target_local && self.final_state >= self.target_state
    }
}

/// What happened while generating one city's market
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub city: String,
    /// `None` when the city is not in the catalog
    pub size_class: Option<SizeClass>,
    pub nominal_batch: usize,
    pub initial_accepted: usize,
    pub backfill_attempts: u32,
    pub backfill_accepted: usize,
    /// Budget ran out below the minimum offer count
    pub backfill_exhausted: bool,
    pub hub_boost: Option<HubBoostReport>,
    pub total_offers: usize,
}

impl GenerationReport {
    /// True if any phase stopped short of its target
    pub fn under_target(&self) -> bool {
        self.backfill_exhausted || self.hub_boost.as_ref().is_some_and(|b| b.exhausted)
    }
}

/// Offers generated for one city plus the run report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityMarket {
    pub offers: Vec<JobOffer>,
    pub report: GenerationReport,
}

/// Nominal size of the initial batch per size class
pub fn batch_size_range(size_class: SizeClass) -> RangeInclusive<usize> {
    match size_class {
        SizeClass::Small => 3..=8,
        SizeClass::Medium => 5..=10,
        SizeClass::Large => 8..=15,
    }
}

fn count_of(offers: &[JobOffer], job_type: JobType) -> usize {
    offers.iter().filter(|o| o.job_type == job_type).count()
}

/// Generates a city's market from the catalog and a distance oracle.
///
/// Holds no state between calls; every call is independent.
pub struct MarketGenerator<'a, D: DistanceProvider + ?Sized> {
    factory: JobFactory<'a, D>,
    limits: GenerationLimits,
}

impl<'a, D: DistanceProvider + ?Sized> MarketGenerator<'a, D> {
    pub fn new(catalog: &'a Catalog, distances: &'a D) -> Self {
        Self::with_limits(catalog, distances, GenerationLimits::default())
    }

    pub fn with_limits(catalog: &'a Catalog, distances: &'a D, limits: GenerationLimits) -> Self {
        Self {
            factory: JobFactory::new(catalog, distances),
            limits,
        }
    }

    /// Generate offers for `city`. Unknown cities yield an empty market.
    pub fn generate<R: Rng + ?Sized>(&self, city: &str, rng: &mut R) -> CityMarket {
        let mut report = GenerationReport {
            city: city.to_string(),
            ..Default::default()
        };
        let Some(origin) = self.factory.catalog().city(city) else {
            debug!(city, "city not in catalog, no offers generated");
            return CityMarket {
                offers: Vec::new(),
                report,
            };
        };
        report.size_class = Some(origin.size_class);

        let mut offers = Vec::new();
        let mut ids = IdAllocator::new();
        let mut phase = GenerationPhase::InitialBatch;
        loop {
            phase = match phase {
                GenerationPhase::InitialBatch => {
                    self.initial_batch(origin, &mut offers, &mut ids, &mut report, rng);
                    GenerationPhase::Backfill
                }
                GenerationPhase::Backfill => {
                    self.backfill(origin, &mut offers, &mut ids, &mut report, rng);
                    if origin.size_class.is_hub() {
                        GenerationPhase::HubBoost
                    } else {
                        GenerationPhase::Done
                    }
                }
                GenerationPhase::HubBoost => {
                    report.hub_boost = Some(self.hub_boost(origin, &mut offers, &mut ids, rng));
                    GenerationPhase::Done
                }
                GenerationPhase::Done => break,
            };
            debug!(city, ?phase, offers = offers.len(), "phase transition");
        }

        report.total_offers = offers.len();
        info!(
            city,
            size = %origin.size_class,
            offers = report.total_offers,
            under_target = report.under_target(),
            "city market generated"
        );
        CityMarket { offers, report }
    }

    fn initial_batch<R: Rng + ?Sized>(
        &self,
        origin: &CityRecord,
        offers: &mut Vec<JobOffer>,
        ids: &mut IdAllocator,
        report: &mut GenerationReport,
        rng: &mut R,
    ) {
        let nominal = rng.gen_range(batch_size_range(origin.size_class));
        report.nominal_batch = nominal;
        for _ in 0..nominal {
            match self.factory.create(origin, ids, rng) {
                Ok(offer) => offers.push(offer),
                Err(rejection) => debug!(city = %origin.name, %rejection, "initial candidate skipped"),
            }
        }
        report.initial_accepted = offers.len();
    }

    fn backfill<R: Rng + ?Sized>(
        &self,
        origin: &CityRecord,
        offers: &mut Vec<JobOffer>,
        ids: &mut IdAllocator,
        report: &mut GenerationReport,
        rng: &mut R,
    ) {
        let before = offers.len();
        let mut attempts = 0;
        while offers.len() < self.limits.min_offers_per_city && attempts < self.limits.backfill_attempts {
            attempts += 1;
            match self.factory.create(origin, ids, rng) {
                Ok(offer) => offers.push(offer),
                Err(rejection) => debug!(city = %origin.name, %rejection, "backfill candidate skipped"),
            }
        }
        report.backfill_attempts = attempts;
        report.backfill_accepted = offers.len() - before;
        report.backfill_exhausted = offers.len() < self.limits.min_offers_per_city;
        if report.backfill_exhausted {
            warn!(
                city = %origin.name,
                offers = offers.len(),
                minimum = self.limits.min_offers_per_city,
                "backfill attempt cap reached below minimum"
            );
        }
    }

    fn hub_boost<R: Rng + ?Sized>(
        &self,
        origin: &CityRecord,
        offers: &mut Vec<JobOffer>,
        ids: &mut IdAllocator,
        rng: &mut R,
    ) -> HubBoostReport {
        let pre_boost_local = count_of(offers, JobType::Local);
        let pre_boost_state = count_of(offers, JobType::State);
        let target_local = pre_boost_local * 2;
        let target_state = pre_boost_state * 2;

        let mut local = pre_boost_local;
        let mut state = pre_boost_state;
        let mut attempts = 0;
        while (local < target_local || state < target_state) && attempts < self.limits.boost_attempts {
            attempts += 1;
            let local_deficit = target_local.saturating_sub(local);
            let state_deficit = target_state.saturating_sub(state);
            let forced = if local_deficit >= state_deficit {
                JobType::Local
            } else {
                JobType::State
            };
            match self.factory.create_forced(origin, forced, ids, rng) {
                Ok(offer) => {
                    match offer.job_type {
                        JobType::Local => local += 1,
                        JobType::State => state += 1,
                        JobType::International => {}
                    }
                    offers.push(offer);
                }
                Err(rejection) => debug!(city = %origin.name, %rejection, "boost candidate skipped"),
            }
        }

        let report = HubBoostReport {
            pre_boost_local,
            pre_boost_state,
            target_local,
            target_state,
            final_local: local,
            final_state: state,
            attempts,
            exhausted: local < target_local || state < target_state,
        };
        if report.exhausted {
            warn!(
                city = %origin.name,
                local,
                target_local,
                state,
                target_state,
                "hub boost attempt cap reached below target"
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CargoDefinition;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cargo(category: &str) -> CargoDefinition {
        CargoDefinition {
            category: category.to_string(),
            compatible_trailer_types: vec!["Dry Van".to_string()],
            example_items: vec!["Pallets".to_string()],
            allows_partial_load: true,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                CityRecord::new("Berlin", SizeClass::Large, "DE"),
                CityRecord::new("Potsdam", SizeClass::Small, "DE"),
                CityRecord::new("Leipzig", SizeClass::Medium, "DE"),
                CityRecord::new("Hamburg", SizeClass::Large, "DE"),
                CityRecord::new("Warsaw", SizeClass::Large, "PL"),
                CityRecord::new("Island", SizeClass::Medium, "IS"),
            ],
            vec![cargo("Dry Goods"), cargo("Bulk Grain")],
            vec!["Nordfracht".to_string()],
        )
    }

    /// Symmetric table; "Island" is reachable from nowhere
    fn distances(a: &str, b: &str) -> Option<f64> {
        let mut pair = [a, b];
        pair.sort_unstable();
        match pair {
            ["Berlin", "Potsdam"] => Some(35.0),
            ["Berlin", "Leipzig"] => Some(190.0),
            ["Berlin", "Hamburg"] => Some(289.0),
            ["Berlin", "Warsaw"] => Some(573.0),
            ["Leipzig", "Potsdam"] => Some(170.0),
            ["Hamburg", "Leipzig"] => Some(395.0),
            ["Hamburg", "Potsdam"] => Some(300.0),
            ["Leipzig", "Warsaw"] => Some(740.0),
            ["Potsdam", "Warsaw"] => Some(600.0),
            ["Hamburg", "Warsaw"] => Some(860.0),
            _ => None,
        }
    }

    #[test]
    fn test_batch_ranges() {
        assert_eq!(batch_size_range(SizeClass::Small), 3..=8);
        assert_eq!(batch_size_range(SizeClass::Medium), 5..=10);
        assert_eq!(batch_size_range(SizeClass::Large), 8..=15);
    }

    #[test]
    fn test_unknown_city_is_empty() {
        let catalog = catalog();
        let generator = MarketGenerator::new(&catalog, &distances);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let market = generator.generate("Atlantis", &mut rng);
        assert!(market.offers.is_empty());
        assert_eq!(market.report.size_class, None);
        assert_eq!(market.report.total_offers, 0);
    }

    #[test]
    fn test_unreachable_city_is_empty_and_exhausts_backfill() {
        let catalog = catalog();
        let generator = MarketGenerator::new(&catalog, &distances);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let market = generator.generate("Island", &mut rng);
        assert!(market.offers.is_empty());
        assert!(market.report.backfill_exhausted);
        assert_eq!(market.report.backfill_attempts, BACKFILL_ATTEMPT_CAP);
        assert!(market.report.hub_boost.is_none());
        assert!(market.report.under_target());
    }

    #[test]
    fn test_backfill_reaches_minimum() {
        let catalog = catalog();
        let generator = MarketGenerator::new(&catalog, &distances);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let market = generator.generate("Potsdam", &mut rng);
            assert!(market.offers.len() >= MIN_OFFERS_PER_CITY);
            assert!(!market.report.backfill_exhausted);
            assert!((3..=8).contains(&market.report.nominal_batch));
            assert!(market.report.initial_accepted <= market.report.nominal_batch);
        }
    }

    #[test]
    fn test_hub_boost_doubles_local_and_state() {
        let catalog = catalog();
        let generator = MarketGenerator::new(&catalog, &distances);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let market = generator.generate("Berlin", &mut rng);
            let boost = market.report.hub_boost.clone().unwrap();
            assert!(boost.targets_met(), "seed {seed}: {boost:?}");
            assert!(!boost.exhausted);
            assert!(count_of(&market.offers, JobType::Local) >= 2 * boost.pre_boost_local);
            assert!(count_of(&market.offers, JobType::State) >= 2 * boost.pre_boost_state);
            assert_eq!(market.report.total_offers, market.offers.len());
        }
    }

    #[test]
    fn test_hub_with_only_international_reach() {
        // Warsaw has no neighbour within 500 km, so there is nothing to double
        let catalog = catalog();
        let generator = MarketGenerator::new(&catalog, &distances);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let market = generator.generate("Warsaw", &mut rng);
        let boost = market.report.hub_boost.unwrap();
        assert_eq!(boost.pre_boost_local, 0);
        assert_eq!(boost.pre_boost_state, 0);
        assert_eq!(boost.attempts, 0);
        assert!(!boost.exhausted);
        assert!(market.offers.iter().all(|o| o.job_type == JobType::International));
    }

    #[test]
    fn test_hub_boost_stops_at_attempt_cap() {
        let catalog = catalog();
        let limits = GenerationLimits {
            boost_attempts: 50,
            ..Default::default()
        };
        let generator = MarketGenerator::with_limits(&catalog, &distances, limits);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut offers = generator.generate("Berlin", &mut rng).offers;
        let locals = count_of(&offers, JobType::Local);
        assert!(locals > 0);

        // boosting from Warsaw can never produce a local job
        let warsaw = catalog.city("Warsaw").unwrap();
        let mut ids = IdAllocator::new();
        let boost = generator.hub_boost(warsaw, &mut offers, &mut ids, &mut rng);
        assert_eq!(boost.target_local, 2 * locals);
        assert_eq!(boost.final_local, locals);
        assert_eq!(boost.attempts, 50);
        assert!(boost.exhausted);
        assert!(!boost.targets_met());
    }

    #[test]
    fn test_offer_invariants() {
        let catalog = catalog();
        let generator = MarketGenerator::new(&catalog, &distances);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for city in ["Berlin", "Potsdam", "Leipzig", "Hamburg", "Warsaw"] {
            let market = generator.generate(city, &mut rng);
            let mut ids = std::collections::HashSet::new();
            for offer in &market.offers {
                assert_ne!(offer.origin, offer.destination);
                assert!(offer.distance > 0.0 && offer.distance <= 3500.0);
                assert!(offer.job_type.band().contains(offer.distance));
                assert!(offer.value > 0);
                assert!(ids.insert(offer.id.clone()), "duplicate id {}", offer.id);
            }
        }
    }

    #[test]
    fn test_same_seed_same_market() {
        let catalog = catalog();
        let generator = MarketGenerator::new(&catalog, &distances);
        let a = generator.generate("Berlin", &mut ChaCha8Rng::seed_from_u64(77));
        let b = generator.generate("Berlin", &mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
