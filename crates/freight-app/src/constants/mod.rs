//! Built-in reference tables

pub mod cargo;
pub mod cities;
pub mod clients;

use std::sync::LazyLock;

use freight_domain::model::{Catalog, CityRecord, UNKNOWN_COUNTRY};

pub use cargo::CARGO_DEFINITIONS;
pub use cities::{city_coordinates, country_code, CITY_COORDINATES, CITY_COUNTRIES, CITY_SIZES};
pub use clients::CLIENTS;

/// The built-in catalog, assembled once from the static tables
pub static DEFAULT_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let cities = CITY_SIZES
        .iter()
        .map(|&(name, size_class)| {
            CityRecord::new(name, size_class, country_code(name).unwrap_or(UNKNOWN_COUNTRY))
        })
        .collect();
    let clients = CLIENTS.iter().map(|c| c.to_string()).collect();
    Catalog::new(cities, CARGO_DEFINITIONS.clone(), clients)
});

pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}
