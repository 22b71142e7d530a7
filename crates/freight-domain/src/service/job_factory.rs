//! Assembly of a single candidate job offer

use std::collections::HashSet;

use freight_types::{JobOffer, JobType};
use rand::seq::{index, SliceRandom};
use rand::Rng;
use tracing::trace;

use crate::model::{CargoDefinition, Catalog, CityRecord, UNKNOWN_COUNTRY};
use crate::provider::DistanceProvider;

use super::classifier::classify;
use super::deadline::{deadline_hours, is_tight};
use super::destination::select_destination;
use super::pricing::{calculate_value, is_hazardous, is_temperature_controlled};
use super::Rejection;

const ID_MIN: u32 = 100_000;
const ID_MAX: u32 = 999_999;
const MAX_TAGS: usize = 3;
const MAX_EXPERIENCE: u32 = 80;
const HAZMAT_EXPERIENCE: u32 = 20;
const HEAVY_HAUL_TONNES: u32 = 20;
const LONG_HAUL_KM: f64 = 1500.0;

/// Hands out 6-digit ids that are unique within one generation run
#[derive(Debug, Default)]
pub struct IdAllocator {
    issued: HashSet<u32>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a random id; on collision probe forward (wrapping) to the next free one.
    ///
    /// Returns `None` once every id in the range has been issued.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        let start = rng.gen_range(ID_MIN..=ID_MAX);
        let span = ID_MAX - ID_MIN + 1;
        let id = (0..span)
            .map(|step| ID_MIN + (start - ID_MIN + step) % span)
            .find(|id| !self.issued.contains(id))?;
        self.issued.insert(id);
        Some(id.to_string())
    }

    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}

/// Half of all draws go to Dry Goods; the rest are uniform over the other categories
pub fn pick_cargo<'c, R: Rng + ?Sized>(
    cargo: &'c [CargoDefinition],
    rng: &mut R,
) -> Option<&'c CargoDefinition> {
    let dry_goods = cargo.iter().find(|c| c.is_dry_goods());
    let others: Vec<&CargoDefinition> = cargo.iter().filter(|c| !c.is_dry_goods()).collect();
    match (dry_goods, others.is_empty()) {
        (Some(dry), true) => Some(dry),
        (Some(dry), false) if rng.gen_bool(0.5) => Some(dry),
        _ => others.choose(rng).copied(),
    }
}

/// Builds job offers from the catalog and a distance oracle
pub struct JobFactory<'a, D: DistanceProvider + ?Sized> {
    catalog: &'a Catalog,
    distances: &'a D,
}

impl<'a, D: DistanceProvider + ?Sized> JobFactory<'a, D> {
    pub fn new(catalog: &'a Catalog, distances: &'a D) -> Self {
        Self { catalog, distances }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Build one candidate, drawing its range category from the origin's size class
    pub fn create<R: Rng + ?Sized>(
        &self,
        origin: &CityRecord,
        ids: &mut IdAllocator,
        rng: &mut R,
    ) -> Result<JobOffer, Rejection> {
        self.assemble(origin, None, ids, rng)
    }

    /// Build one candidate of a fixed range category, skipping classification
    pub fn create_forced<R: Rng + ?Sized>(
        &self,
        origin: &CityRecord,
        job_type: JobType,
        ids: &mut IdAllocator,
        rng: &mut R,
    ) -> Result<JobOffer, Rejection> {
        self.assemble(origin, Some(job_type), ids, rng)
    }

    fn assemble<R: Rng + ?Sized>(
        &self,
        origin: &CityRecord,
        forced: Option<JobType>,
        ids: &mut IdAllocator,
        rng: &mut R,
    ) -> Result<JobOffer, Rejection> {
        let cargo = pick_cargo(self.catalog.cargo(), rng).ok_or(Rejection::EmptyCatalog("cargo"))?;
        let trailer_type = cargo
            .compatible_trailer_types
            .choose(rng)
            .ok_or(Rejection::EmptyCatalog("trailer types"))?;
        let item = cargo
            .example_items
            .choose(rng)
            .ok_or(Rejection::EmptyCatalog("cargo items"))?;

        let job_type = forced.unwrap_or_else(|| classify(origin.size_class, rng));
        let destination =
            select_destination(&origin.name, job_type, self.catalog, self.distances, rng)?;

        let distance = match self.distances.distance(&origin.name, &destination.city.name) {
            // every band lies inside (0, 3500]
            Some(d) if job_type.band().contains(d) => d,
            other => return Err(Rejection::DistanceOutOfRange { distance: other }),
        };

        let client = self
            .catalog
            .clients()
            .choose(rng)
            .ok_or(Rejection::EmptyCatalog("clients"))?;

        let weight = rng.gen_range(1..=12u32) * 2;
        let experience = draw_experience(job_type, &cargo.category, rng);
        let hours = deadline_hours(distance, job_type);
        let value = calculate_value(distance, weight, &cargo.category, job_type);

        let destination_country = self
            .catalog
            .country_code(&destination.city.name)
            .unwrap_or(UNKNOWN_COUNTRY);

        let tag_candidates = candidate_tags(&TagContext {
            cargo_category: &cargo.category,
            weight,
            distance,
            cross_border: origin.country_code != destination_country,
            tight_deadline: is_tight(hours, job_type),
        });
        let tags = pick_tags(tag_candidates, rng);

        let id = ids.next(rng).ok_or(Rejection::IdsExhausted)?;
        let offer = JobOffer {
            id,
            title: format!("{} to {}", item, destination.city.name),
            client: client.clone(),
            origin: origin.name.clone(),
            destination: destination.city.name.clone(),
            origin_country: origin.country_code.clone(),
            destination_country: destination_country.to_string(),
            distance,
            weight,
            remaining_weight: weight,
            cargo_type: cargo.category.clone(),
            trailer_type: trailer_type.clone(),
            job_type,
            value,
            deadline: format!("{}h", hours),
            experience,
            tags,
            allow_partial_load: cargo.allows_partial_load,
        };
        trace!(id = %offer.id, origin = %offer.origin, destination = %offer.destination, "job assembled");
        Ok(offer)
    }
}

/// Required experience: a multiple of 5 within the category band, +20 for hazmat
fn draw_experience<R: Rng + ?Sized>(job_type: JobType, cargo_category: &str, rng: &mut R) -> u32 {
    let (lo, hi) = match job_type {
        JobType::Local => (0, 4),
        JobType::State => (2, 8),
        JobType::International => (6, 12),
    };
    let mut experience = rng.gen_range(lo..=hi) * 5;
    if is_hazardous(cargo_category) {
        experience += HAZMAT_EXPERIENCE;
    }
    experience.min(MAX_EXPERIENCE)
}

struct TagContext<'a> {
    cargo_category: &'a str,
    weight: u32,
    distance: f64,
    cross_border: bool,
    tight_deadline: bool,
}

fn candidate_tags(ctx: &TagContext<'_>) -> Vec<&'static str> {
    let checks = [
        (is_hazardous(ctx.cargo_category), "Hazmat"),
        (is_temperature_controlled(ctx.cargo_category), "Temperature Controlled"),
        (ctx.weight >= HEAVY_HAUL_TONNES, "Heavy Haul"),
        (ctx.cross_border, "Cross-Border"),
        (ctx.tight_deadline, "Express"),
        (ctx.distance > LONG_HAUL_KM, "Long Haul"),
    ];
    checks
        .into_iter()
        .filter_map(|(applies, tag)| applies.then_some(tag))
        .collect()
}

/// Keep a random 0..=3 of the candidates, in candidate order
fn pick_tags<R: Rng + ?Sized>(candidates: Vec<&'static str>, rng: &mut R) -> Vec<String> {
    let wanted = rng.gen_range(0..=MAX_TAGS).min(candidates.len());
    let mut picked = index::sample(rng, candidates.len(), wanted).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| candidates[i].to_string()).collect()
}
