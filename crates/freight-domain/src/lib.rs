//! Freight job generation domain
//!
//! Reference-data model, the distance collaborator trait, and the services
//! that synthesize a city's market of job offers.

pub mod model;
pub mod provider;
pub mod service;

pub use model::{CargoDefinition, Catalog, CityRecord};
pub use provider::DistanceProvider;
