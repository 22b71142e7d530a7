//! Read-only reference catalog: cities, cargo categories, clients

use std::collections::{HashMap, HashSet};

use freight_types::{CatalogError, SizeClass};

use super::{CargoDefinition, CityRecord};

/// Immutable lookup tables consumed by the job generator
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<CityRecord>,
    city_index: HashMap<String, usize>,
    cargo: Vec<CargoDefinition>,
    clients: Vec<String>,
}

impl Catalog {
    /// Build a catalog; later duplicates of a city name are ignored by lookups.
    /// Use [`Catalog::validate`] to reject such input.
    pub fn new(cities: Vec<CityRecord>, cargo: Vec<CargoDefinition>, clients: Vec<String>) -> Self {
        let mut city_index = HashMap::with_capacity(cities.len());
        for (idx, city) in cities.iter().enumerate() {
            city_index.entry(city.name.clone()).or_insert(idx);
        }
        Self {
            cities,
            city_index,
            cargo,
            clients,
        }
    }

    /// Check the invariants the generator relies on
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for city in &self.cities {
            if !seen.insert(city.name.as_str()) {
                return Err(CatalogError::DuplicateCity(city.name.clone()));
            }
        }
        if self.cargo.is_empty() {
            return Err(CatalogError::NoCargo);
        }
        for definition in &self.cargo {
            if definition.compatible_trailer_types.is_empty() {
                return Err(CatalogError::NoTrailerTypes(definition.category.clone()));
            }
            if definition.example_items.is_empty() {
                return Err(CatalogError::NoExampleItems(definition.category.clone()));
            }
        }
        if self.clients.is_empty() {
            return Err(CatalogError::NoClients);
        }
        Ok(())
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn city(&self, name: &str) -> Option<&CityRecord> {
        self.city_index.get(name).map(|&idx| &self.cities[idx])
    }

    pub fn size_class(&self, name: &str) -> Option<SizeClass> {
        self.city(name).map(|c| c.size_class)
    }

    pub fn country_code(&self, name: &str) -> Option<&str> {
        self.city(name).map(|c| c.country_code.as_str())
    }

    pub fn cities_of_size(&self, size_class: SizeClass) -> impl Iterator<Item = &CityRecord> {
        self.cities.iter().filter(move |c| c.size_class == size_class)
    }

    pub fn cargo(&self) -> &[CargoDefinition] {
        &self.cargo
    }

    pub fn cargo_definition(&self, category: &str) -> Option<&CargoDefinition> {
        self.cargo.iter().find(|c| c.category == category)
    }

    pub fn clients(&self) -> &[String] {
        &self.clients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cargo(category: &str) -> CargoDefinition {
        CargoDefinition {
            category: category.to_string(),
            compatible_trailer_types: vec!["Dry Van".to_string()],
            example_items: vec!["Pallets".to_string()],
            allows_partial_load: true,
        }
    }

    fn sample() -> Catalog {
        Catalog::new(
            vec![
                CityRecord::new("Berlin", SizeClass::Large, "DE"),
                CityRecord::new("Potsdam", SizeClass::Small, "DE"),
                CityRecord::new("Poznan", SizeClass::Medium, "PL"),
            ],
            vec![cargo("Dry Goods")],
            vec!["Nordfracht".to_string()],
        )
    }

    #[test]
    fn test_lookups() {
        let catalog = sample();
        assert_eq!(catalog.size_class("Berlin"), Some(SizeClass::Large));
        assert_eq!(catalog.country_code("Poznan"), Some("PL"));
        assert!(catalog.city("Atlantis").is_none());
        assert_eq!(catalog.cities_of_size(SizeClass::Small).count(), 1);
        assert!(catalog.cargo_definition("Dry Goods").is_some());
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_city() {
        let catalog = Catalog::new(
            vec![
                CityRecord::new("Berlin", SizeClass::Large, "DE"),
                CityRecord::new("Berlin", SizeClass::Small, "DE"),
            ],
            vec![cargo("Dry Goods")],
            vec!["Nordfracht".to_string()],
        );
        assert!(matches!(catalog.validate(), Err(CatalogError::DuplicateCity(name)) if name == "Berlin"));
        // first entry wins for lookups
        assert_eq!(catalog.size_class("Berlin"), Some(SizeClass::Large));
    }

    #[test]
    fn test_validate_cargo_without_trailers() {
        let mut broken = cargo("Bulk");
        broken.compatible_trailer_types.clear();
        let catalog = Catalog::new(vec![], vec![broken], vec!["Nordfracht".to_string()]);
        assert!(matches!(catalog.validate(), Err(CatalogError::NoTrailerTypes(_))));
    }

    #[test]
    fn test_validate_no_clients() {
        let catalog = Catalog::new(vec![], vec![cargo("Dry Goods")], vec![]);
        assert!(matches!(catalog.validate(), Err(CatalogError::NoClients)));
    }
}
