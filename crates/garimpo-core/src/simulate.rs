use serde::Serialize;

use crate::{CostTier, ModelKind, ModelProfile, ScoreReport};

/// Estimated suitability of one model for a rendered prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ModelFit {
    pub rank: usize,
    pub model: ModelKind,
    pub name: &'static str,
    pub fit_score: u8,
    pub cost_tier: CostTier,
    pub max_tokens: u32,
}

/// Effectiveness prediction for a prompt against a target model.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    pub score: ScoreReport,
    pub token_estimate: u32,
    pub target: ModelKind,
    pub profile: &'static ModelProfile,
    pub success_probability: u8,
    pub risks: Vec<String>,
    pub suggestions: Vec<String>,
    /// All known models ordered by fit, best first.
    pub ranking: Vec<ModelFit>,
}

impl SimulationResult {
    pub fn best(&self) -> &ModelFit {
        &self.ranking[0]
    }

    pub fn fit_for(&self, model: ModelKind) -> &ModelFit {
        self.ranking
            .iter()
            .find(|f| f.model == model)
            .expect("every known model is ranked")
    }
}
