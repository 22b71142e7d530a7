//! Market aggregation
//!
//! Calls the per-city generator once for every catalog city and concatenates
//! the results. Persistence, search and acceptance of offers belong to the
//! consumer of the snapshot.

use chrono::{DateTime, Utc};
use freight_domain::service::{CityMarket, GenerationLimits, GenerationReport, MarketGenerator};
use freight_domain::{Catalog, DistanceProvider};
use freight_types::{JobOffer, JobType, SizeClass};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::rng::MarketRng;

/// All offers generated in one aggregation pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub offers: Vec<JobOffer>,
    pub reports: Vec<GenerationReport>,
}

/// Aggregate figures for a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub cities: usize,
    pub offers: usize,
    pub local: usize,
    pub state: usize,
    pub international: usize,
    pub total_value: u64,
    /// Cities where backfill or hub boost stopped short of its target
    pub under_target: Vec<String>,
}

impl MarketSnapshot {
    pub fn summary(&self) -> MarketSummary {
        let count = |job_type: JobType| self.offers.iter().filter(|o| o.job_type == job_type).count();
        MarketSummary {
            cities: self.reports.len(),
            offers: self.offers.len(),
            local: count(JobType::Local),
            state: count(JobType::State),
            international: count(JobType::International),
            total_value: self.offers.iter().map(|o| o.value).sum(),
            under_target: self
                .reports
                .iter()
                .filter(|r| r.under_target())
                .map(|r| r.city.clone())
                .collect(),
        }
    }

    pub fn offers_from<'s>(&'s self, city: &'s str) -> impl Iterator<Item = &'s JobOffer> + 's {
        self.offers.iter().filter(move |o| o.origin == city)
    }
}

/// Generate one city's market
pub fn generate_city<D: DistanceProvider + ?Sized>(
    catalog: &Catalog,
    distances: &D,
    limits: GenerationLimits,
    city: &str,
    rng: &mut MarketRng,
) -> CityMarket {
    MarketGenerator::with_limits(catalog, distances, limits).generate(city, rng)
}

/// Generate every catalog city, optionally only those of one size class
pub fn generate_market<D: DistanceProvider + ?Sized>(
    catalog: &Catalog,
    distances: &D,
    limits: GenerationLimits,
    size_filter: Option<SizeClass>,
    rng: &mut MarketRng,
) -> MarketSnapshot {
    let generator = MarketGenerator::with_limits(catalog, distances, limits);
    let mut offers = Vec::new();
    let mut reports = Vec::new();

    for city in catalog
        .cities()
        .iter()
        .filter(|c| size_filter.map_or(true, |size| c.size_class == size))
    {
        let market = generator.generate(&city.name, rng);
        offers.extend(market.offers);
        reports.push(market.report);
    }

    let snapshot = MarketSnapshot {
        generated_at: Utc::now(),
        seed: rng.seed(),
        offers,
        reports,
    };
    info!(
        cities = snapshot.reports.len(),
        offers = snapshot.offers.len(),
        seed = snapshot.seed,
        "market generated"
    );
    snapshot
}
