//! Garimpo Core - Shared value types
//!
//! Value objects exchanged between the pipeline crates:
//! - Task taxonomy (task type, complexity, technique)
//! - Prompt frameworks (CO-STAR, RTF, CARE) and their shared metadata
//! - Target model catalog and formatting dialects
//! - Score, verification, simulation, variation and comparison reports
//! - The prompt-bank record consumed by external persistence
//!
//! Everything here is a plain value: created fresh per call, never mutated
//! after construction, serializable with serde.

mod bank;
mod compare;
mod framework;
mod model;
mod options;
mod score;
mod simulate;
mod task;
mod variation;

pub use bank::{PromptBank, PromptRecord};
pub use compare::{ComparedPrompt, ComparisonResult, CriterionComparison, Winner};
pub use framework::{Framework, FrameworkKind, FrameworkMeta, TriggerChecklist};
pub use model::{CostTier, Dialect, ModelKind, ModelProfile};
pub use options::{AiOptions, FieldOverrides, GenerateOptions};
pub use score::{CriterionKey, CriterionScore, Grade, ScoreReport, VerificationResult};
pub use simulate::{ModelFit, SimulationResult};
pub use task::{ComplexityLevel, ResponseFormat, TaskType, Technique, Tone};
pub use variation::Variation;

/// Directory holding project context files (`PROJECT.md`, `STATE.md`, ...).
pub const GARIMPO_DIR: &str = ".garimpo";
