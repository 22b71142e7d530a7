//! Reference catalog loader from TOML
//!
//! ```toml
//! clients = ["Nordfracht", "Baltic Logistics"]
//!
//! [[cities]]
//! name = "Berlin"
//! size_class = "large"
//! country_code = "DE"
//!
//! [[cargo]]
//! category = "Dry Goods"
//! compatible_trailer_types = ["Dry Van"]
//! example_items = ["Pallets"]
//! allows_partial_load = true
//! ```

use std::fs;
use std::path::Path;

use freight_domain::model::{CargoDefinition, Catalog, CityRecord, UNKNOWN_COUNTRY};
use freight_types::{CatalogError, Error, Result, SizeClass};
use serde::Deserialize;
use tracing::debug;

/// Container for parsing catalog TOML
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cities: Vec<CityEntry>,
    #[serde(default)]
    cargo: Vec<CargoDefinition>,
    #[serde(default)]
    clients: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CityEntry {
    name: String,
    size_class: SizeClass,
    country_code: Option<String>,
}

impl From<CityEntry> for CityRecord {
    fn from(entry: CityEntry) -> Self {
        let country = entry
            .country_code
            .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string());
        CityRecord::new(entry.name, entry.size_class, country)
    }
}

/// Validated catalog loaded from a TOML file
#[derive(Debug)]
pub struct CatalogLoader {
    catalog: Catalog,
}

impl CatalogLoader {
    /// Load a catalog from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let loader = Self::load_from_str(&content)?;
        debug!(path = %path.display(), cities = loader.catalog.cities().len(), "catalog loaded");
        Ok(loader)
    }

    /// Load a catalog from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(toml_content)
            .map_err(|e| CatalogError::ParseError(format!("Failed to parse catalog TOML: {}", e)))?;

        let catalog = Catalog::new(
            file.cities.into_iter().map(CityRecord::from).collect(),
            file.cargo,
            file.clients,
        );
        catalog.validate()?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
