use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};

/// Process-wide knobs for the `studyhub` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON snapshot served instead of the built-in topics. `None` = built-in.
    pub catalog_path: Option<PathBuf>,

    /// Max tracing level: trace, debug, info, warn or error.
    pub log_level: String,

    /// Log audit findings right after the catalog is loaded.
    pub audit_on_load: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: "info".to_string(),
            audit_on_load: true,
        }
    }
}

impl CatalogConfig {

    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::read_from_file(p), // propagate errors unchanged
            None => Ok(Self::default()),
        }
    }

    fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {:?}", path.as_ref()))?;
        let cfg: CatalogConfig = toml::from_str(&raw)
            .with_context(|| "parsing catalog config TOML")?;
        cfg.max_level()?;
        Ok(cfg)
    }

    pub fn max_level(&self) -> Result<tracing::Level> {
        self.log_level
            .parse()
            .with_context(|| format!("invalid log_level {:?}", self.log_level))
    }
}
