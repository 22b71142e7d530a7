//! Job offer and classification types

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Longest haul any offer may carry, in km
pub const MAX_JOB_DISTANCE_KM: f64 = 3500.0;

/// City size class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Large cities act as freight hubs
    pub fn is_hub(self) -> bool {
        matches!(self, SizeClass::Large)
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Range category of a job, by geographic distance band
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Local,
    State,
    International,
}

impl JobType {
    pub const ALL: [JobType; 3] = [JobType::Local, JobType::State, JobType::International];

    /// Distance band a destination must fall in for this category
    pub fn band(self) -> DistanceBand {
        match self {
            JobType::Local => DistanceBand::new(0.0, 200.0),
            JobType::State => DistanceBand::new(200.0, 500.0),
            JobType::International => DistanceBand::new(500.0, MAX_JOB_DISTANCE_KM),
        }
    }

    /// Category whose band contains `distance_km`, if any
    pub fn for_distance(distance_km: f64) -> Option<JobType> {
        JobType::ALL
            .into_iter()
            .find(|job_type| job_type.band().contains(distance_km))
    }

    pub fn label(self) -> &'static str {
        match self {
            JobType::Local => "local",
            JobType::State => "state",
            JobType::International => "international",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Half-open `(min, max]` distance interval in km
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceBand {
    pub min_exclusive_km: f64,
    pub max_inclusive_km: f64,
}

impl DistanceBand {
    pub const fn new(min_exclusive_km: f64, max_inclusive_km: f64) -> Self {
        Self {
            min_exclusive_km,
            max_inclusive_km,
        }
    }

    pub fn contains(&self, distance_km: f64) -> bool {
        distance_km > self.min_exclusive_km && distance_km <= self.max_inclusive_km
    }
}

/// A generated freight contract offered in a city's market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOffer {
    /// 6-digit numeric id, unique within one generation run
    pub id: String,
    pub title: String,
    pub client: String,
    pub origin: String,
    pub destination: String,
    pub origin_country: String,
    pub destination_country: String,
    /// Distance in km
    pub distance: f64,
    /// Weight in tonnes (even, 2..=24)
    pub weight: u32,
    /// Equals `weight` at creation; consumers decrement it on partial acceptance
    pub remaining_weight: u32,
    pub cargo_type: String,
    pub trailer_type: String,
    pub job_type: JobType,
    /// Payout in currency units
    pub value: u64,
    /// Deadline label such as "14h"
    pub deadline: String,
    /// Required driver experience (0..=80)
    pub experience: u32,
    pub tags: Vec<String>,
    pub allow_partial_load: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_half_open() {
        assert!(!JobType::Local.band().contains(0.0));
        assert!(JobType::Local.band().contains(200.0));
        assert!(!JobType::State.band().contains(200.0));
        assert!(JobType::State.band().contains(500.0));
        assert!(JobType::International.band().contains(500.1));
        assert!(JobType::International.band().contains(3500.0));
        assert!(!JobType::International.band().contains(3500.5));
    }

    #[test]
    fn test_for_distance() {
        assert_eq!(JobType::for_distance(150.0), Some(JobType::Local));
        assert_eq!(JobType::for_distance(350.0), Some(JobType::State));
        assert_eq!(JobType::for_distance(1200.0), Some(JobType::International));
        assert_eq!(JobType::for_distance(0.0), None);
        assert_eq!(JobType::for_distance(4000.0), None);
    }

    #[test]
    fn test_only_large_is_hub() {
        assert!(SizeClass::Large.is_hub());
        assert!(!SizeClass::Medium.is_hub());
        assert!(!SizeClass::Small.is_hub());
    }

    #[test]
    fn test_offer_serializes_camel_case() {
        let offer = JobOffer {
            id: "123456".to_string(),
            title: "Steel Beams to Hamburg".to_string(),
            client: "Nordfracht".to_string(),
            origin: "Berlin".to_string(),
            destination: "Hamburg".to_string(),
            origin_country: "DE".to_string(),
            destination_country: "DE".to_string(),
            distance: 289.0,
            weight: 12,
            remaining_weight: 12,
            cargo_type: "Construction Materials".to_string(),
            trailer_type: "Flatbed".to_string(),
            job_type: JobType::State,
            value: 1234,
            deadline: "16h".to_string(),
            experience: 20,
            tags: vec![],
            allow_partial_load: false,
        };
        let json = serde_json::to_value(&offer).unwrap();
        assert_eq!(json["jobType"], "state");
        assert_eq!(json["remainingWeight"], 12);
        assert_eq!(json["allowPartialLoad"], false);
        assert_eq!(json["deadline"], "16h");
    }
}
