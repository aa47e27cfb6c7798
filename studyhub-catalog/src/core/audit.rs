use std::collections::HashSet;
use std::fmt;

use crate::core::registry::TopicRegistry;

/// Data-quality observations. None of these make a catalog invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    ProblemCountMismatch { topic: String, declared: u32, listed: usize },
    RepeatedProblem { topic: String, problem_id: u32 },
    EmptySection { topic: String, section: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::ProblemCountMismatch { topic, declared, listed } => write!(
                f,
                "{topic}: declares {declared} problems but lists {listed}"
            ),
            Finding::RepeatedProblem { topic, problem_id } => {
                write!(f, "{topic}: practice problem {problem_id} listed more than once")
            }
            Finding::EmptySection { topic, section } => {
                write!(f, "{topic}: section {section:?} has no content and no examples")
            }
        }
    }
}

pub fn audit(registry: &TopicRegistry) -> Vec<Finding> {
    let mut findings = Vec::new();

    for topic in registry.list_topics() {
        let listed = topic.practice_problems.len();
        if topic.problems as usize != listed {
            findings.push(Finding::ProblemCountMismatch {
                topic: topic.id.clone(),
                declared: topic.problems,
                listed,
            });
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for problem in &topic.practice_problems {
            if !seen.insert(problem.id) && reported.insert(problem.id) {
                findings.push(Finding::RepeatedProblem {
                    topic: topic.id.clone(),
                    problem_id: problem.id,
                });
            }
        }

        for section in &topic.sections {
            if section.content.trim().is_empty() && section.examples.is_empty() {
                findings.push(Finding::EmptySection {
                    topic: topic.id.clone(),
                    section: section.title.clone(),
                });
            }
        }
    }

    findings
}

pub fn log_findings(findings: &[Finding]) {
    for finding in findings {
        tracing::warn!("catalog audit: {}", finding);
    }
}
