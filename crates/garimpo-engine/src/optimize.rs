//! Prompt optimization: rebuild weak prompts from scratch.

use garimpo_core::{ComplexityLevel, FrameworkKind, GenerateOptions, ModelKind, ScoreReport,
    TaskType, Technique};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::classify::{detect_complexity, detect_task_type, select_framework, select_technique};
use crate::builder::build_framework;
use crate::format::format_for_model;
use crate::score::deep_score;
use crate::technique::apply_technique;
use crate::Engine;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"</?[^>]+>").unwrap();
    static ref HEADER_RE: Regex = Regex::new(r"(?m)^#{1,3}\s+.+$").unwrap();
    static ref BULLET_RE: Regex = Regex::new(r"(?m)^\s*[-*]\s+").unwrap();
    static ref WS_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Strip dialect markup from a prompt to recover its plain objective:
/// tag-like brackets, markdown headers, leading bullets, collapsed
/// whitespace.
pub fn strip_structure(text: &str) -> String {
    let text = TAG_RE.replace_all(text, " ");
    let text = HEADER_RE.replace_all(&text, "");
    let text = BULLET_RE.replace_all(&text, "");
    WS_RE.replace_all(&text, " ").trim().to_string()
}

/// A prompt with its deep score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPrompt {
    pub prompt: String,
    pub score: ScoreReport,
}

/// The rebuilt prompt plus the choices the pipeline made for it.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizedPrompt {
    pub prompt: String,
    pub score: ScoreReport,
    pub framework: FrameworkKind,
    pub technique: Technique,
    pub model: ModelKind,
}

/// Before/after report of an optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizeResult {
    pub original: ScoredPrompt,
    pub optimized: OptimizedPrompt,
    pub improvement: i16,
    /// Improvement relative to the original total; 0 when the original
    /// scored 0.
    pub improvement_pct: i32,
    pub task_type: TaskType,
    pub complexity: ComplexityLevel,
}

impl Engine {
    /// Score a raw prompt, recover its objective, and rebuild it through
    /// the full pipeline. The input is never mutated; the rebuilt prompt is
    /// derived from scratch.
    pub fn optimize(&self, raw: &str, options: &GenerateOptions) -> OptimizeResult {
        let original_score = deep_score(raw);

        let task_type = options.task_type.unwrap_or_else(|| detect_task_type(raw));
        let complexity = detect_complexity(raw);
        let technique = select_technique(complexity);
        let framework = select_framework(task_type);

        let objective = strip_structure(raw);
        let inputs = self.inputs_without_triggers(task_type, options);
        let (fw, meta) = build_framework(&objective, framework, &inputs);
        let formatted = format_for_model(&fw, &meta, options.target_model);
        let optimized_prompt = apply_technique(&formatted, technique);
        let optimized_score = deep_score(&optimized_prompt);

        let improvement = i16::from(optimized_score.total) - i16::from(original_score.total);
        let improvement_pct = if original_score.total > 0 {
            (f64::from(improvement) / f64::from(original_score.total) * 100.0).round() as i32
        } else {
            0
        };
        debug!(
            original = original_score.total,
            optimized = optimized_score.total,
            improvement,
            "optimization complete"
        );

        OptimizeResult {
            original: ScoredPrompt {
                prompt: raw.to_string(),
                score: original_score,
            },
            optimized: OptimizedPrompt {
                prompt: optimized_prompt,
                score: optimized_score,
                framework,
                technique,
                model: options.target_model,
            },
            improvement,
            improvement_pct,
            task_type,
            complexity,
        }
    }
}
