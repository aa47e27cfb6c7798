pub mod cli;
pub mod content;
pub mod core;
mod config;

use std::sync::{Arc, OnceLock};

pub use config::CatalogConfig;
pub use crate::core::error::{CatalogError, SnapshotError};
pub use crate::core::registry::TopicRegistry;

/// Shared, read-only handle to a registry. Cloning it never copies topics.
pub type SharedRegistry = Arc<TopicRegistry>;

/// is Filled on first use **once**; thereafter read-only everywhere.
static BUILTIN_CATALOG: OnceLock<SharedRegistry> = OnceLock::new();

/// The built-in topics, constructed on first use and shared for the rest of the process.
pub fn builtin_catalog() -> Result<SharedRegistry, CatalogError> {
    if let Some(registry) = BUILTIN_CATALOG.get() {
        return Ok(Arc::clone(registry));
    }
    let registry = Arc::new(TopicRegistry::new(content::builtin_topics())?);
    // a racing thread may have won; everyone gets the stored instance
    Ok(Arc::clone(BUILTIN_CATALOG.get_or_init(|| registry)))
}
