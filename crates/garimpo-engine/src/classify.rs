//! Keyword-based task classification.
//!
//! Heuristic by design: substring counting over normalized text, no
//! semantic understanding. The tables live on the enums in `garimpo-core`;
//! tie-breaks follow declaration order.

use garimpo_core::{ComplexityLevel, FrameworkKind, TaskType, Technique};
use garimpo_triggers::normalize;
use tracing::trace;

/// Detect the task type of an objective. Counts keyword presence per type;
/// highest count wins, first-declared type wins ties, `Code` when nothing
/// matches.
pub fn detect_task_type(text: &str) -> TaskType {
    let normalized = normalize(text);
    let mut best = TaskType::Code;
    let mut best_count = 0usize;

    for task_type in TaskType::ALL {
        let count = task_type
            .keywords()
            .iter()
            .filter(|kw| normalized.contains(&normalize(kw)))
            .count();
        if count > best_count {
            best = task_type;
            best_count = count;
        }
    }

    trace!(task_type = best.as_str(), hits = best_count, "task type detected");
    best
}

/// Detect complexity from keyword tallies plus a word-count bonus. A single
/// `Critical` keyword overrides every other signal.
pub fn detect_complexity(text: &str) -> ComplexityLevel {
    let normalized = normalize(text);
    let mut tallies = [0usize; 4];

    for (idx, level) in ComplexityLevel::ALL.iter().enumerate() {
        tallies[idx] = level
            .keywords()
            .iter()
            .filter(|kw| normalized.contains(&normalize(kw)))
            .count();
    }

    let word_count = text.split_whitespace().count();
    if word_count > 50 {
        tallies[2] += 2; // High
    } else if word_count > 25 {
        tallies[1] += 1; // Medium
    }

    if tallies[3] > 0 {
        return ComplexityLevel::Critical;
    }

    let mut best = ComplexityLevel::Simple;
    let mut max = 0usize;
    for (idx, level) in ComplexityLevel::ALL.iter().enumerate() {
        if tallies[idx] > max {
            max = tallies[idx];
            best = *level;
        }
    }
    best
}

/// Technique for a complexity level (pure table lookup).
pub fn select_technique(level: ComplexityLevel) -> Technique {
    level.technique()
}

/// Preferred framework for a task type (pure table lookup).
pub fn select_framework(task_type: TaskType) -> FrameworkKind {
    task_type.framework()
}
