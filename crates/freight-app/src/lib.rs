//! Application service layer - reference tables, config, market aggregation

pub mod config;
pub mod constants;
pub mod market;
pub mod rng;
pub mod sources;
