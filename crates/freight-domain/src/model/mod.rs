//! Domain model types

pub mod cargo;
pub mod catalog;
pub mod city;

pub use cargo::{CargoDefinition, DRY_GOODS};
pub use catalog::Catalog;
pub use city::{CityRecord, UNKNOWN_COUNTRY};
