//! Cargo category definitions

use serde::{Deserialize, Serialize};

/// Category that receives half of all cargo draws
pub const DRY_GOODS: &str = "Dry Goods";

/// A cargo category with the trailers that can haul it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoDefinition {
    pub category: String,
    pub compatible_trailer_types: Vec<String>,
    pub example_items: Vec<String>,
    /// Whether offers of this category may be accepted in part
    #[serde(default)]
    pub allows_partial_load: bool,
}

impl CargoDefinition {
    pub fn is_dry_goods(&self) -> bool {
        self.category == DRY_GOODS
    }
}
