//! Destination selection by distance band

use freight_types::JobType;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Catalog, CityRecord};
use crate::provider::DistanceProvider;

use super::Rejection;

/// A reachable destination and the distance measured when it was selected
#[derive(Debug, Clone, PartialEq)]
pub struct Destination<'a> {
    pub city: &'a CityRecord,
    pub distance_km: f64,
}

/// All catalog cities other than `origin` whose distance lies in the band
/// of `job_type`. Pairs the provider does not know are skipped.
pub fn candidates<'a, D>(
    origin: &str,
    job_type: JobType,
    catalog: &'a Catalog,
    distances: &D,
) -> Vec<Destination<'a>>
where
    D: DistanceProvider + ?Sized,
{
    let band = job_type.band();
    catalog
        .cities()
        .iter()
        .filter(|city| city.name != origin)
        .filter_map(|city| {
            let distance_km = distances.distance(origin, &city.name)?;
            band.contains(distance_km).then_some(Destination { city, distance_km })
        })
        .collect()
}

/// Pick a destination uniformly among the in-band candidates
pub fn select_destination<'a, D, R>(
    origin: &str,
    job_type: JobType,
    catalog: &'a Catalog,
    distances: &D,
    rng: &mut R,
) -> Result<Destination<'a>, Rejection>
where
    D: DistanceProvider + ?Sized,
    R: Rng + ?Sized,
{
    candidates(origin, job_type, catalog, distances)
        .choose(rng)
        .cloned()
        .ok_or(Rejection::NoDestinationFound { job_type })
}
