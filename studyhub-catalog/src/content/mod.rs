//! Built-in study topics.
//!
//! Each topic lives in its own module as a `'static` [`TopicDef`] literal.
//! [`TOPICS`] fixes the registration order used by [`builtin_topics`].

mod arrays;
mod dynamic_programming;
mod graphs;
mod hash_tables;
mod linked_lists;
mod stacks_queues;
mod strings;
mod trees;

use studyhub_model::{CodeExample, Difficulty, PracticeProblem, StudyTopic, TopicSection};

pub struct TopicDef {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub estimated_time: &'static str,
    pub problems: u32,
    pub introduction: &'static str,
    pub sections: &'static [SectionDef],
    pub practice_problems: &'static [ProblemDef],
}

pub struct SectionDef {
    pub title: &'static str,
    pub content: &'static str,
    pub examples: &'static [ExampleDef],
}

pub struct ExampleDef {
    pub language: &'static str,
    pub code: &'static str,
}

pub struct ProblemDef {
    pub id: u32,
    pub title: &'static str,
    pub difficulty: &'static str,
}

pub const TOPICS: &[&TopicDef] = &[
    &arrays::TOPIC,
    &strings::TOPIC,
    &linked_lists::TOPIC,
    &stacks_queues::TOPIC,
    &hash_tables::TOPIC,
    &trees::TOPIC,
    &graphs::TOPIC,
    &dynamic_programming::TOPIC,
];

pub fn builtin_topics() -> Vec<StudyTopic> {
    TOPICS.iter().map(|def| StudyTopic::from(*def)).collect()
}

impl From<&TopicDef> for StudyTopic {
    fn from(def: &TopicDef) -> Self {
        StudyTopic {
            id: def.id.to_string(),
            title: def.title.to_string(),
            icon: def.icon.to_string(),
            description: def.description.to_string(),
            difficulty: def.difficulty,
            estimated_time: def.estimated_time.to_string(),
            problems: def.problems,
            introduction: def.introduction.to_string(),
            sections: def.sections.iter().map(TopicSection::from).collect(),
            practice_problems: def.practice_problems.iter().map(PracticeProblem::from).collect(),
        }
    }
}

impl From<&SectionDef> for TopicSection {
    fn from(def: &SectionDef) -> Self {
        TopicSection {
            title: def.title.to_string(),
            content: def.content.to_string(),
            examples: def.examples.iter().map(CodeExample::from).collect(),
        }
    }
}

impl From<&ExampleDef> for CodeExample {
    fn from(def: &ExampleDef) -> Self {
        CodeExample {
            language: def.language.to_string(),
            code: def.code.to_string(),
        }
    }
}

impl From<&ProblemDef> for PracticeProblem {
    fn from(def: &ProblemDef) -> Self {
        PracticeProblem {
            id: def.id,
            title: def.title.to_string(),
            difficulty: def.difficulty.to_string(),
        }
    }
}
