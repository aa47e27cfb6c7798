pub mod difficulty;
pub mod errors;
pub mod topic;

// Public re-exports for easy access
pub use difficulty::Difficulty;
pub use errors::ModelError;
pub use topic::{CodeExample, PracticeProblem, StudyTopic, TopicSection};
