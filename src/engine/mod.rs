// Catalog engine - registration rules, filtering and aggregation

pub mod catalog;
pub mod filter;
pub mod stats;

pub use catalog::Catalog;
pub use filter::EventFilter;
