// Process-wide state

pub mod shared_catalog;

pub use shared_catalog::SharedCatalog;
