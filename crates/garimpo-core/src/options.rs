use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{FrameworkKind, ModelKind, ResponseFormat, TaskType, Technique, Tone};

/// Explicit overrides for framework fields. Every field is optional; the
/// builders fall back to task-type defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldOverrides {
    pub style: Option<String>,
    pub tone: Option<Tone>,
    pub audience: Option<String>,
    pub response: Option<ResponseFormat>,
    pub role: Option<String>,
    pub examples: Option<String>,
}

/// Configuration for one `generate` (or `optimize`/`variations`) call.
///
/// Defaults: target model `claude`, task type auto-detected, framework
/// auto-selected from the task type, technique auto-selected from the
/// complexity level, no references, context discovered from the working
/// directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub target_model: ModelKind,
    pub task_type: Option<TaskType>,
    pub framework: Option<FrameworkKind>,
    pub technique: Option<Technique>,
    /// Reference material attached verbatim to the prompt.
    pub references: Option<String>,
    /// Explicit context directory; `None` discovers `.garimpo` upward.
    pub context_dir: Option<PathBuf>,
    pub overrides: FieldOverrides,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: ModelKind) -> Self {
        self.target_model = model;
        self
    }

    /// Resolve a user-supplied model key, falling back to `claude` for
    /// unknown keys.
    pub fn with_model_key(mut self, key: &str) -> Self {
        self.target_model = ModelKind::from_key(key).unwrap_or_default();
        self
    }

    pub fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.task_type = Some(task_type);
        self
    }

    pub fn with_framework(mut self, framework: FrameworkKind) -> Self {
        self.framework = Some(framework);
        self
    }

    pub fn with_technique(mut self, technique: Technique) -> Self {
        self.technique = Some(technique);
        self
    }

    pub fn with_references(mut self, references: impl Into<String>) -> Self {
        self.references = Some(references.into());
        self
    }

    pub fn with_context_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.context_dir = Some(dir.into());
        self
    }
}

/// Options for the AI-augmented generate/optimize variants.
#[derive(Debug, Clone)]
pub struct AiOptions {
    /// Creator model key (`gemini`, `deepseek`, `codestral`).
    pub creator: String,
    pub base: GenerateOptions,
}

impl Default for AiOptions {
    fn default() -> Self {
        Self {
            creator: "gemini".to_string(),
            base: GenerateOptions::default(),
        }
    }
}
