//! Distance table loaded from CSV
//!
//! Expected columns (header optional):
//! city_a, city_b, km

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use freight_domain::DistanceProvider;
use freight_types::{CatalogError, Error, Result};
use tracing::debug;

/// Symmetric lookup of road distances between city pairs
#[derive(Debug, Default, Clone)]
pub struct DistanceTable {
    distances: HashMap<(String, String), f64>,
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a distance; a later entry for the same pair replaces the earlier one
    pub fn insert(&mut self, a: &str, b: &str, km: f64) {
        self.distances.insert(pair_key(a, b), km);
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Load a distance table from a CSV file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        let table = Self::load_from_reader(file)?;
        debug!(path = %path.display(), pairs = table.len(), "distance table loaded");
        Ok(table)
    }

    /// Load a distance table from any CSV reader
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut table = Self::new();
        for (row_idx, result) in reader.records().enumerate() {
            let row = row_idx + 1;
            let record = result.map_err(|e| CatalogError::ParseError(format!("row {}: {}", row, e)))?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            let (Some(a), Some(b), Some(km_field)) = (record.get(0), record.get(1), record.get(2)) else {
                return Err(CatalogError::MalformedRow { row }.into());
            };
            let km = match km_field.parse::<f64>() {
                Ok(km) => km,
                // a non-numeric first row is the header
                Err(_) if row == 1 => continue,
                Err(_) => {
                    return Err(CatalogError::InvalidDistance {
                        row,
                        value: km_field.to_string(),
                    }
                    .into())
                }
            };
            if !km.is_finite() || km <= 0.0 {
                return Err(CatalogError::InvalidDistance {
                    row,
                    value: km_field.to_string(),
                }
                .into());
            }
            table.insert(a, b, km);
        }
        Ok(table)
    }
}

impl DistanceProvider for DistanceTable {
    fn distance(&self, from: &str, to: &str) -> Option<f64> {
        if from == to {
            return None;
        }
        self.distances.get(&pair_key(from, to)).copied()
    }
}
