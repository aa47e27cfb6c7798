/*
A study topic as the catalog stores and exports it:

StudyTopic
  id, title, icon, description, difficulty, estimatedTime, problems
  introduction
  sections:         [ TopicSection { title, content, examples: [CodeExample] } ]
  practiceProblems: [ PracticeProblem { id, title, difficulty } ]

Text is opaque. Code snippets are display-only and never parsed.
*/
use serde::{Deserialize, Serialize};

use crate::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    pub language: String, // display label, free text
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSection {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub examples: Vec<CodeExample>,
}

/// Pointer to an external exercise. Ids may repeat across and within topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeProblem {
    pub id: u32,
    pub title: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyTopic {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    /// Declared count; expected to match `practice_problems.len()` but never enforced.
    pub problems: u32,
    pub introduction: String,
    pub sections: Vec<TopicSection>,
    pub practice_problems: Vec<PracticeProblem>,
}
