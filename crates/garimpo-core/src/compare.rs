use serde::Serialize;

use crate::{CriterionKey, ScoreReport, SimulationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    A,
    B,
    Tie,
}

/// One side of an A/B comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparedPrompt {
    pub score: ScoreReport,
    pub simulation: SimulationResult,
    pub length: usize,
    pub tokens: u32,
}

/// Per-criterion delta between the two prompts. `diff` is exactly `a - b`.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionComparison {
    pub key: CriterionKey,
    pub label: &'static str,
    pub a: u8,
    pub b: u8,
    pub diff: i16,
    pub winner: Winner,
}

/// Side-by-side comparison of two prompts against the same target model.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub prompt_a: ComparedPrompt,
    pub prompt_b: ComparedPrompt,
    pub criteria: Vec<CriterionComparison>,
    pub winner: Winner,
    /// Absolute difference between the two totals.
    pub diff: u8,
}
