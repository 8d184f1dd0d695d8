//! Garimpo Engine - Deterministic prompt engineering
//!
//! The pipeline that turns a short task description into a structured,
//! scored, model-tuned prompt:
//!
//! 1. [`classify`] detects task type and complexity from keywords
//! 2. [`builder`] assembles a CO-STAR / RTF / CARE framework record
//! 3. [`format`] renders it in the target model's dialect
//! 4. [`technique`] appends the reasoning-strategy instruction
//! 5. [`score`] / [`verify`] evaluate the rendered text
//! 6. [`simulate`] predicts effectiveness and ranks models by fit
//!
//! [`Engine`] wires the steps together with the injected context-loader
//! and trigger-provider collaborators; [`optimize`], [`variations`],
//! [`compare`] and [`guided`] orchestrate the chain for their use cases.
//! Everything is synchronous and total except the AI-augmented variants in
//! [`ai`], which delegate to a [`garimpo_providers::ModelGateway`] and fail
//! loudly when that collaborator does.

pub mod ai;
pub mod builder;
pub mod classify;
pub mod compare;
mod engine;
mod error;
pub mod format;
pub mod guided;
mod meta;
pub mod optimize;
pub mod score;
pub mod simulate;
pub mod technique;
pub mod variations;
pub mod verify;

pub use ai::{AiGenerateResult, AiOptimizeResult, LocalComparison};
pub use classify::{detect_complexity, detect_task_type, select_framework, select_technique};
pub use compare::compare;
pub use engine::{Engine, GenerateResult};
pub use error::EngineError;
pub use format::{format_for_model, format_with_dialect};
pub use guided::{guided_questions, GuidedAnswer, GuidedQuestion};
pub use optimize::{strip_structure, OptimizeResult, OptimizedPrompt, ScoredPrompt};
pub use score::deep_score;
pub use simulate::{estimate_tokens, simulate};
pub use technique::apply_technique;
pub use verify::verify_prompt;

// The value types callers interact with, re-exported for convenience.
pub use garimpo_core::{
    AiOptions, ComparisonResult, ComplexityLevel, FieldOverrides, Framework, FrameworkKind,
    GenerateOptions, Grade, ModelKind, ScoreReport, TaskType, Technique, Variation,
    VerificationResult, Winner,
};
