pub mod audit;
pub mod error;
pub mod registry;
pub mod snapshot;
