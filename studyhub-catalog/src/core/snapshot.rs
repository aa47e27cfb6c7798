/*
Snapshot = the catalog as a JSON array, one object per topic, in registration order.
Loading goes through `TopicRegistry::new`, so duplicate ids are rejected the same way
as for the built-in content.
*/
use std::fs;
use std::path::Path;

use studyhub_model::StudyTopic;

use crate::core::error::SnapshotError;
use crate::core::registry::TopicRegistry;

pub fn to_json(registry: &TopicRegistry) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(registry.list_topics())?)
}

pub fn from_json(raw: &str) -> Result<TopicRegistry, SnapshotError> {
    let topics: Vec<StudyTopic> = serde_json::from_str(raw)?;
    Ok(TopicRegistry::new(topics)?)
}

pub fn save_to_file(registry: &TopicRegistry, path: &Path) -> Result<(), SnapshotError> {
    let json = to_json(registry)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), topics = registry.len(), "snapshot written");
    Ok(())
}

pub fn load_from_file(path: &Path) -> Result<TopicRegistry, SnapshotError> {
    let raw = fs::read_to_string(path)?;
    let registry = from_json(&raw)?;
    tracing::debug!(path = %path.display(), topics = registry.len(), "snapshot loaded");
    Ok(registry)
}
