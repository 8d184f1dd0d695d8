use serde::Serialize;

use crate::{FrameworkKind, ModelKind, ScoreReport, Technique};

/// One alternative rendering of the same objective, produced by the
/// variation generator. Immutable once built; `rank` is assigned densely
/// from 1 after sorting by `score.total` descending.
#[derive(Debug, Clone, Serialize)]
pub struct Variation {
    pub rank: usize,
    pub framework: FrameworkKind,
    pub technique: Technique,
    pub model: ModelKind,
    pub label: String,
    pub prompt: String,
    pub score: ScoreReport,
}
