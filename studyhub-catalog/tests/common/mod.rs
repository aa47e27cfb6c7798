#![allow(dead_code)]

use std::path::PathBuf;

use studyhub_model::{CodeExample, Difficulty, PracticeProblem, StudyTopic, TopicSection};

pub fn folder_to_use() -> PathBuf {
    tempfile::Builder::new()
        .prefix("studyhub_test_")
        .tempdir()
        .expect("failed to create temp dir")
        .into_path()
}

pub fn topic(id: &str, title: &str) -> StudyTopic {
    StudyTopic {
        id: id.to_string(),
        title: title.to_string(),
        icon: "book".to_string(),
        description: format!("{title} in a nutshell"),
        difficulty: Difficulty::Beginner,
        estimated_time: "1 hour".to_string(),
        problems: 1,
        introduction: format!("An introduction to {title}."),
        sections: vec![
            TopicSection {
                title: "Overview".to_string(),
                content: "1. First\n2. Second".to_string(),
                examples: vec![CodeExample {
                    language: "Pseudo".to_string(),
                    code: "do_the_thing()".to_string(),
                }],
            },
            TopicSection {
                title: "Details".to_string(),
                content: "More words.".to_string(),
                examples: vec![],
            },
        ],
        practice_problems: vec![PracticeProblem {
            id: 1,
            title: "Two Sum".to_string(),
            difficulty: "Easy".to_string(),
        }],
    }
}
