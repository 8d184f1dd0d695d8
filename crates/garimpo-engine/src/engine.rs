//! The pipeline entry point.

use chrono::{DateTime, Utc};
use garimpo_context::{ContextLoader, ContextSnapshot, DirContextLoader, NullLoader};
use garimpo_core::{
    ComplexityLevel, Framework, FrameworkKind, FrameworkMeta, GenerateOptions, ModelKind,
    ScoreReport, SimulationResult, TaskType, Technique, TriggerChecklist, VerificationResult,
};
use garimpo_triggers::{NoopTriggers, TriggerProvider};
use serde::Serialize;
use tracing::debug;

use crate::builder::{build_framework, BuildInputs};
use crate::classify::{detect_complexity, detect_task_type};
use crate::format::format_for_model;
use crate::score::deep_score;
use crate::simulate::{estimate_tokens, simulate};
use crate::technique::apply_technique;
use crate::verify::verify_prompt;

/// Patterns injected into a prompt are capped at this many.
const MAX_INJECTED_PATTERNS: usize = 3;

/// Complete output of one `generate` call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    pub prompt_text: String,
    pub framework: Framework,
    pub meta: FrameworkMeta,
    pub kind: FrameworkKind,
    pub framework_label: &'static str,
    pub model: ModelKind,
    pub task_type: TaskType,
    pub complexity: ComplexityLevel,
    pub technique: Technique,
    pub technique_label: &'static str,
    pub score: ScoreReport,
    pub verification: VerificationResult,
    pub simulation: SimulationResult,
    pub trigger_ids: Vec<String>,
    pub token_estimate: u32,
    /// When the result was produced. Never feeds any scored field.
    pub timestamp: DateTime<Utc>,
}

/// Deterministic prompt-engineering pipeline. Owns its two injected
/// collaborators, selected at construction: the project-context loader and
/// the trigger provider. Every non-AI method is a total, synchronous, pure
/// function of its arguments (plus the immutable collaborators), safe to
/// call concurrently from any number of callers.
pub struct Engine {
    context_loader: Box<dyn ContextLoader>,
    triggers: Box<dyn TriggerProvider>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with context discovered from the working directory and no
    /// trigger provider.
    pub fn new() -> Self {
        Self {
            context_loader: Box::new(DirContextLoader::from_cwd()),
            triggers: Box::new(NoopTriggers),
        }
    }

    /// Engine with no project context and no triggers. Fully deterministic
    /// regardless of the filesystem; what the tests use.
    pub fn isolated() -> Self {
        Self {
            context_loader: Box::new(NullLoader),
            triggers: Box::new(NoopTriggers),
        }
    }

    pub fn with_context_loader(mut self, loader: impl ContextLoader + 'static) -> Self {
        self.context_loader = Box::new(loader);
        self
    }

    pub fn with_triggers(mut self, triggers: impl TriggerProvider + 'static) -> Self {
        self.triggers = Box::new(triggers);
        self
    }

    pub(crate) fn triggers(&self) -> &dyn TriggerProvider {
        self.triggers.as_ref()
    }

    pub(crate) fn snapshot_for(&self, options: &GenerateOptions) -> ContextSnapshot {
        match &options.context_dir {
            Some(dir) => DirContextLoader::new(dir).load(),
            None => self.context_loader.load(),
        }
    }

    fn trigger_context(task_type: TaskType) -> &'static str {
        match task_type {
            TaskType::Debug => "debug",
            TaskType::Architecture => "planejar",
            _ => "executar",
        }
    }

    /// Inputs for builders on paths that skip trigger matching (optimize,
    /// variations).
    pub(crate) fn inputs_without_triggers(
        &self,
        task_type: TaskType,
        options: &GenerateOptions,
    ) -> BuildInputs {
        let snapshot = self.snapshot_for(options);
        let info = garimpo_context::extract_project_info(&snapshot);
        BuildInputs {
            task_type,
            snapshot,
            info,
            overrides: options.overrides.clone(),
            references: options.references.clone(),
            trigger_injection: None,
            trigger_checklists: Vec::new(),
            trigger_ids: Vec::new(),
        }
    }

    fn inputs_with_triggers(
        &self,
        objective: &str,
        task_type: TaskType,
        options: &GenerateOptions,
    ) -> BuildInputs {
        let mut inputs = self.inputs_without_triggers(task_type, options);
        let matches = self
            .triggers
            .matches(objective, Self::trigger_context(task_type));
        if matches.is_empty() {
            return inputs;
        }

        let injection = self.triggers.build_injection(&matches, MAX_INJECTED_PATTERNS);
        inputs.trigger_injection = (!injection.is_empty()).then_some(injection);
        inputs.trigger_checklists = matches
            .iter()
            .filter_map(|m| {
                let checklist_id = m.checklist.as_ref()?;
                let items = self.triggers.checklist(checklist_id);
                (!items.is_empty()).then(|| TriggerChecklist {
                    id: m.id.clone(),
                    items,
                })
            })
            .collect();
        inputs.trigger_ids = matches.iter().map(|m| m.id.clone()).collect();
        inputs
    }

    /// Run the full pipeline: classify, build, format, apply technique,
    /// then score, verify and simulate the rendered prompt.
    ///
    /// Total for any input: unknown option values fall back to defaults,
    /// empty objectives degrade into low-but-valid scores.
    pub fn generate(&self, objective: &str, options: &GenerateOptions) -> GenerateResult {
        let task_type = options.task_type.unwrap_or_else(|| detect_task_type(objective));
        let complexity = detect_complexity(objective);
        let technique = options.technique.unwrap_or_else(|| complexity.technique());
        let kind = options.framework.unwrap_or_else(|| task_type.framework());
        debug!(
            task_type = task_type.as_str(),
            complexity = complexity.as_str(),
            technique = technique.as_str(),
            framework = kind.as_str(),
            model = options.target_model.as_str(),
            "pipeline selections"
        );

        let inputs = self.inputs_with_triggers(objective, task_type, options);
        let (framework, meta) = build_framework(objective, kind, &inputs);
        let formatted = format_for_model(&framework, &meta, options.target_model);
        let prompt_text = apply_technique(&formatted, technique);

        let score = deep_score(&prompt_text);
        let verification = verify_prompt(&prompt_text);
        let simulation = simulate(&prompt_text, options.target_model);
        let token_estimate = estimate_tokens(&prompt_text);

        GenerateResult {
            trigger_ids: meta.trigger_ids.clone(),
            framework_label: kind.label(),
            technique_label: technique.label(),
            prompt_text,
            framework,
            meta,
            kind,
            model: options.target_model,
            task_type,
            complexity,
            technique,
            score,
            verification,
            simulation,
            token_estimate,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garimpo_core::Dialect;

    #[test]
    fn test_generate_scenario_login_button() {
        let engine = Engine::isolated();
        let result = engine.generate("criar botão de login", &GenerateOptions::default());
        assert_eq!(result.task_type, TaskType::Code);
        assert_eq!(result.kind, FrameworkKind::Rtf);
        assert_eq!(result.complexity, ComplexityLevel::Simple);
        assert_eq!(result.technique, Technique::ZeroShot);
        assert_eq!(result.model, ModelKind::Claude);
        assert!(result.prompt_text.contains("<task>\ncriar botão de login\n</task>"));
        assert!(result.prompt_text.contains("<role>"));
        assert!(result.prompt_text.contains("<format>"));
    }

    #[test]
    fn test_generate_critical_override_selects_self_consistency() {
        let engine = Engine::isolated();
        let long_sensitive = format!(
            "{} implementar fluxo de autenticação com senha e muita segurança",
            "descrever detalhadamente o comportamento esperado ".repeat(12)
        );
        let result = engine.generate(&long_sensitive, &GenerateOptions::default());
        assert_eq!(result.complexity, ComplexityLevel::Critical);
        assert_eq!(result.technique, Technique::SelfConsistency);
        assert!(result.prompt_text.contains("3 soluções independentes"));
    }

    #[test]
    fn test_generate_is_deterministic_modulo_timestamp() {
        let engine = Engine::isolated();
        let options = GenerateOptions::default();
        let a = engine.generate("criar botão de login", &options);
        let b = engine.generate("criar botão de login", &options);
        assert_eq!(a.prompt_text, b.prompt_text);
        assert_eq!(a.score.total, b.score.total);
        assert_eq!(a.token_estimate, b.token_estimate);
        assert!(!a.prompt_text.contains(&a.timestamp.to_rfc3339()));
    }

    #[test]
    fn test_generate_empty_objective_degrades_gracefully() {
        let engine = Engine::isolated();
        let result = engine.generate("", &GenerateOptions::default());
        assert!(result.score.total <= 100);
        assert!(!result.verification.ok);
        assert!(!result.prompt_text.is_empty());
    }

    #[test]
    fn test_generate_respects_explicit_overrides() {
        let engine = Engine::isolated();
        let options = GenerateOptions::new()
            .with_model(ModelKind::Gemini)
            .with_framework(FrameworkKind::Care)
            .with_technique(Technique::TreeOfThought);
        let result = engine.generate("criar botão de login", &options);
        assert_eq!(result.kind, FrameworkKind::Care);
        assert_eq!(result.technique, Technique::TreeOfThought);
        assert_eq!(result.model.dialect(), Dialect::Markdown);
        assert!(result.prompt_text.contains("# Action"));
        assert!(result.prompt_text.contains("2 abordagens"));
    }

    #[test]
    fn test_generate_role_task_format_equivalents_in_all_dialects() {
        let engine = Engine::isolated();
        for model in ModelKind::ALL {
            let result = engine.generate(
                "criar botão de login",
                &GenerateOptions::new().with_model(model),
            );
            let text = &result.prompt_text;
            let has_role_section = text.contains("<role>")
                || text.contains("\"role\"")
                || text.contains("# Role")
                || text.contains("Papel:")
                || text.contains("### Instruções");
            let has_task_section = text.contains("<task>")
                || text.contains("\"task\"")
                || text.contains("# Task")
                || text.contains("Tarefa:");
            let has_format_section = text.contains("<format>")
                || text.contains("\"expected_format\"")
                || text.contains("# Format")
                || text.contains("Output:")
                || text.contains("Formato esperado:");
            assert!(has_role_section, "{model:?} missing role section");
            assert!(has_task_section, "{model:?} missing task section");
            assert!(has_format_section, "{model:?} missing format section");
        }
    }
}
