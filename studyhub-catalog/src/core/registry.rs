use std::collections::hash_map::Entry;
use std::collections::HashMap;

use studyhub_model::StudyTopic;

use crate::core::error::CatalogError;

/// Read-only id -> topic mapping. Built once; no mutation API afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicRegistry {
    topics: Vec<StudyTopic>,      // registration order
    index: HashMap<String, usize>, // id -> position in `topics`
}

impl TopicRegistry {
    /// Fails on the first id that was already registered; no partial registry is returned.
    pub fn new<I>(topics: I) -> Result<TopicRegistry, CatalogError>
    where
        I: IntoIterator<Item = StudyTopic>,
    {
        let topics: Vec<StudyTopic> = topics.into_iter().collect();
        let mut index = HashMap::with_capacity(topics.len());

        for (position, topic) in topics.iter().enumerate() {
            match index.entry(topic.id.clone()) {
                Entry::Occupied(_) => {
                    tracing::error!(id = %topic.id, position, "duplicate topic identifier");
                    return Err(CatalogError::DuplicateIdentifier(topic.id.clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        tracing::debug!(topics = topics.len(), "topic registry built");
        Ok(TopicRegistry { topics, index })
    }

    /// `None` is the ordinary "not found" outcome, not a fault.
    pub fn get_topic_by_id(&self, id: &str) -> Option<&StudyTopic> {
        self.index.get(id).map(|&position| &self.topics[position])
    }

    pub fn list_topics(&self) -> &[StudyTopic] {
        &self.topics
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
