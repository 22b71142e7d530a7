//! Job generation services

pub mod classifier;
pub mod deadline;
pub mod destination;
pub mod job_factory;
pub mod market_generator;
pub mod pricing;
pub mod rejection;

pub use classifier::{classify, RangeDistribution};
pub use deadline::{deadline_hours, deadline_label};
pub use destination::{select_destination, Destination};
pub use job_factory::{IdAllocator, JobFactory};
pub use market_generator::{
    CityMarket, GenerationLimits, GenerationPhase, GenerationReport, HubBoostReport,
    MarketGenerator,
};
pub use pricing::calculate_value;
pub use rejection::Rejection;
