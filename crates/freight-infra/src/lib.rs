//! Infrastructure layer - file-backed catalogs and distance providers

pub mod catalog_loader;
pub mod distance_table;
pub mod great_circle;

pub use catalog_loader::CatalogLoader;
pub use distance_table::DistanceTable;
pub use great_circle::GreatCircleDistance;
