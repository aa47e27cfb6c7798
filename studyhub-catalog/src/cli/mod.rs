pub mod params;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::core::{audit, snapshot};
use crate::{builtin_catalog, CatalogConfig, SharedRegistry};
pub use params::{Command, Params};

/// Registry the command runs against: a snapshot file if one is configured, else the built-in set.
pub fn load_catalog(config: &CatalogConfig) -> Result<SharedRegistry> {
    let registry = match &config.catalog_path {
        Some(path) => {
            info!("loading catalog snapshot from {:?}", path);
            let registry = snapshot::load_from_file(path)
                .with_context(|| format!("loading catalog snapshot {:?}", path))?;
            Arc::new(registry)
        }
        None => builtin_catalog().context("building built-in catalog")?,
    };

    if config.audit_on_load {
        audit::log_findings(&audit::audit(&registry));
    }
    Ok(registry)
}

pub fn run<W: Write>(config: &CatalogConfig, command: &Command, out: &mut W) -> Result<()> {
    let registry = load_catalog(config)?;
    execute(command, &registry, out)
}

pub fn execute<W: Write>(command: &Command, registry: &SharedRegistry, out: &mut W) -> Result<()> {
    match command {
        Command::List { difficulty } => {
            let matching = registry
                .list_topics()
                .iter()
                .filter(|t| difficulty.map_or(true, |level| t.difficulty == level));
            for topic in matching {
                writeln!(out, "{:<22} {:<13} {}", topic.id, topic.difficulty, topic.title)?;
            }
        }
        Command::Show { id } => {
            let Some(topic) = registry.get_topic_by_id(id) else {
                bail!("topic not found: {}", id);
            };
            writeln!(out, "{}", serde_json::to_string_pretty(topic)?)?;
        }
        Command::Export { out: None } => {
            writeln!(out, "{}", snapshot::to_json(registry)?)?;
        }
        Command::Export { out: Some(path) } => {
            export_to(registry, path)?;
            info!("exported {} topics to {:?}", registry.len(), path);
        }
        Command::Audit => {
            let findings = audit::audit(registry);
            for finding in &findings {
                writeln!(out, "{}", finding)?;
            }
            if !findings.is_empty() {
                bail!("{} audit finding(s)", findings.len());
            }
        }
    }
    Ok(())
}

fn export_to(registry: &SharedRegistry, path: &Path) -> Result<()> {
    snapshot::save_to_file(registry, path)
        .with_context(|| format!("writing snapshot to {:?}", path))
}
