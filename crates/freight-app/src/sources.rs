//! Resolve the catalog and distance provider a run should use

use std::path::Path;

use freight_domain::{Catalog, DistanceProvider};
use freight_infra::{CatalogLoader, DistanceTable, GreatCircleDistance};
use freight_types::Result;
use tracing::info;

use crate::config::Config;
use crate::constants::{default_catalog, CITY_COORDINATES};

/// Built-in provider over the static city coordinates
pub fn default_distance_provider() -> GreatCircleDistance {
    GreatCircleDistance::new(CITY_COORDINATES.iter().map(|&(name, lat, lon)| (name, lat, lon)))
}

/// Custom catalog from `config.catalog_path`, else the built-in tables
pub fn open_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => open_catalog_at(path),
        None => Ok(default_catalog().clone()),
    }
}

pub fn open_catalog_at(path: &Path) -> Result<Catalog> {
    let catalog = CatalogLoader::load_from_file(path)?.into_catalog();
    info!(path = %path.display(), cities = catalog.cities().len(), "using custom catalog");
    Ok(catalog)
}

/// CSV table from `config.distance_table`, else great-circle distances
pub fn open_distance_provider(config: &Config) -> Result<Box<dyn DistanceProvider>> {
    match &config.distance_table {
        Some(path) => {
            let table = DistanceTable::load_from_file(path)?;
            info!(path = %path.display(), pairs = table.len(), "using distance table");
            Ok(Box::new(table))
        }
        None => Ok(Box::new(default_distance_provider())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        let catalog = open_catalog(&config).unwrap();
        assert_eq!(catalog.cities().len(), default_catalog().cities().len());
        let distances = open_distance_provider(&config).unwrap();
        assert!(distances.distance("Berlin", "Potsdam").is_some());
    }

    #[test]
    fn test_distance_table_from_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Berlin,Potsdam,35\n").unwrap();
        let config = Config {
            distance_table: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let distances = open_distance_provider(&config).unwrap();
        assert_eq!(distances.distance("Potsdam", "Berlin"), Some(35.0));
        assert_eq!(distances.distance("Berlin", "Hamburg"), None);
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = Config {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.toml")),
            ..Default::default()
        };
        assert!(open_catalog(&config).is_err());
    }
}
