//! City reference record

use freight_types::SizeClass;
use serde::{Deserialize, Serialize};

/// Placeholder country code for cities missing from the country lookup
pub const UNKNOWN_COUNTRY: &str = "??";

/// A catalog city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub size_class: SizeClass,
    pub country_code: String,
}

impl CityRecord {
    pub fn new(name: impl Into<String>, size_class: SizeClass, country_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_class,
            country_code: country_code.into(),
        }
    }
}
