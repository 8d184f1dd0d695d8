//! Framework builders: CO-STAR, RTF and CARE.
//!
//! Builders are deterministic assemblers. Fields come from task-type
//! defaults unless the caller overrides them; project context enriches the
//! text when present and is silently omitted when not. Nothing here fails.

use garimpo_context::{ContextSnapshot, ProjectInfo};
use garimpo_core::{
    FieldOverrides, Framework, FrameworkKind, FrameworkMeta, TaskType, TriggerChecklist,
};

/// Everything a builder needs, resolved upfront by the caller.
#[derive(Debug, Clone, Default)]
pub struct BuildInputs {
    pub task_type: TaskType,
    pub snapshot: ContextSnapshot,
    pub info: ProjectInfo,
    pub overrides: FieldOverrides,
    pub references: Option<String>,
    pub trigger_injection: Option<String>,
    pub trigger_checklists: Vec<TriggerChecklist>,
    pub trigger_ids: Vec<String>,
}

impl BuildInputs {
    fn meta(&self) -> FrameworkMeta {
        FrameworkMeta {
            task_type: self.task_type,
            has_kit_patterns: self.snapshot.has_kit(),
            references: self.references.clone(),
            trigger_injection: self.trigger_injection.clone(),
            trigger_checklists: self.trigger_checklists.clone(),
            trigger_ids: self.trigger_ids.clone(),
        }
    }
}

/// Dispatch to the builder for `kind`.
pub fn build_framework(
    objective: &str,
    kind: FrameworkKind,
    inputs: &BuildInputs,
) -> (Framework, FrameworkMeta) {
    match kind {
        FrameworkKind::Rtf => build_rtf(objective, inputs),
        FrameworkKind::Care => build_care(objective, inputs),
        FrameworkKind::Costar => build_costar(objective, inputs),
    }
}

/// CO-STAR: Context, Objective, Style, Tone, Audience, Response.
/// Best for complex tasks, architecture and refactoring.
pub fn build_costar(objective: &str, inputs: &BuildInputs) -> (Framework, FrameworkMeta) {
    let task_type = inputs.task_type;
    let mut context_parts = Vec::new();
    if let Some(name) = &inputs.info.name {
        context_parts.push(format!("Projeto: {name}"));
    }
    if let Some(stack) = &inputs.info.stack {
        context_parts.push(format!("Stack: {stack}"));
    }
    if let Some(phase) = &inputs.info.phase {
        context_parts.push(format!("Fase atual: {phase}"));
    }
    if let Some(last_task) = &inputs.info.last_task {
        context_parts.push(format!("Última tarefa: {last_task}"));
    }
    if inputs.snapshot.has_kit() {
        context_parts.push("Kit disponível com componentes e padrões definidos".to_string());
    }

    let style = inputs.overrides.style.clone().unwrap_or_else(|| {
        match task_type {
            TaskType::Docs => "Documentação clara e bem estruturada",
            TaskType::Architecture => "Análise técnica com prós e contras",
            _ => "Código limpo, modular, seguindo convenções do projeto",
        }
        .to_string()
    });

    let framework = Framework::Costar {
        context: join_context(context_parts),
        objective: objective.trim().to_string(),
        style,
        tone: inputs.overrides.tone.unwrap_or_else(|| task_type.tone()),
        audience: inputs
            .overrides
            .audience
            .clone()
            .unwrap_or_else(|| "Desenvolvedor trabalhando no projeto".to_string()),
        response: inputs.overrides.response.unwrap_or_else(|| task_type.response()),
    };
    (framework, inputs.meta())
}

/// RTF: Role, Task, Format. Best for focused tasks and quick fixes.
pub fn build_rtf(objective: &str, inputs: &BuildInputs) -> (Framework, FrameworkMeta) {
    let role = inputs.overrides.role.clone().unwrap_or_else(|| {
        let mut role_parts = vec!["Desenvolvedor sênior".to_string()];
        if let Some(stack) = &inputs.info.stack {
            role_parts.push(format!("especialista em {stack}"));
        }
        if let Some(name) = &inputs.info.name {
            role_parts.push(format!("trabalhando no projeto {name}"));
        }
        role_parts.join(", ")
    });

    let framework = Framework::Rtf {
        role,
        task: objective.trim().to_string(),
        format: inputs
            .overrides
            .response
            .unwrap_or_else(|| inputs.task_type.response())
            .label()
            .to_string(),
    };
    (framework, inputs.meta())
}

/// CARE: Context, Action, Result, Examples. Best where examples matter
/// (tests, docs).
pub fn build_care(objective: &str, inputs: &BuildInputs) -> (Framework, FrameworkMeta) {
    let task_type = inputs.task_type;
    let mut context_parts = Vec::new();
    if let Some(name) = &inputs.info.name {
        context_parts.push(format!("Projeto: {name}"));
    }
    if let Some(stack) = &inputs.info.stack {
        context_parts.push(format!("Stack: {stack}"));
    }
    if let Some(phase) = &inputs.info.phase {
        context_parts.push(format!("Fase: {phase}"));
    }

    let examples = inputs.overrides.examples.clone().unwrap_or_else(|| {
        let hint = match task_type {
            TaskType::Tests => "Exemplo de teste similar no projeto ou padrão expect/describe/it",
            TaskType::Docs => {
                "Exemplo de documentação existente no projeto como referência de estilo"
            }
            TaskType::Code => "Exemplo de componente/função similar já existente no projeto",
            TaskType::Debug => "Exemplo de erro similar já corrigido ou stack trace relevante",
            TaskType::Refactor => "Exemplo do código atual vs. código refatorado esperado",
            TaskType::Architecture => "Exemplo de decisão arquitetural anterior ou ADR existente",
        };
        format!("{{{{exemplos: {hint}}}}}")
    });

    let framework = Framework::Care {
        context: join_context(context_parts),
        action: objective.trim().to_string(),
        result: inputs
            .overrides
            .response
            .unwrap_or_else(|| task_type.response())
            .label()
            .to_string(),
        examples,
    };
    (framework, inputs.meta())
}

fn join_context(parts: Vec<String>) -> String {
    if parts.is_empty() {
        "Projeto em desenvolvimento.".to_string()
    } else {
        format!("{}.", parts.join(". "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garimpo_core::Tone;

    fn inputs_with_info() -> BuildInputs {
        BuildInputs {
            task_type: TaskType::Code,
            info: ProjectInfo {
                name: Some("Loja Virtual".into()),
                stack: Some("React + Node".into()),
                phase: Some("MVP".into()),
                last_task: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_costar_context_from_project_info() {
        let (fw, meta) = build_costar("refatorar checkout", &inputs_with_info());
        let Framework::Costar { context, objective, tone, .. } = fw else {
            panic!("expected costar");
        };
        assert_eq!(
            context,
            "Projeto: Loja Virtual. Stack: React + Node. Fase atual: MVP."
        );
        assert_eq!(objective, "refatorar checkout");
        assert_eq!(tone, Tone::Tecnico);
        assert!(!meta.has_kit_patterns);
    }

    #[test]
    fn test_costar_without_context_uses_fallback() {
        let inputs = BuildInputs::default();
        let (fw, _) = build_costar("qualquer coisa", &inputs);
        let Framework::Costar { context, .. } = fw else {
            panic!("expected costar");
        };
        assert_eq!(context, "Projeto em desenvolvimento.");
    }

    #[test]
    fn test_rtf_role_assembly() {
        let (fw, _) = build_rtf("criar botão", &inputs_with_info());
        let Framework::Rtf { role, task, format } = fw else {
            panic!("expected rtf");
        };
        assert_eq!(
            role,
            "Desenvolvedor sênior, especialista em React + Node, trabalhando no projeto Loja Virtual"
        );
        assert_eq!(task, "criar botão");
        assert_eq!(format, "Código funcional pronto para uso");
    }

    #[test]
    fn test_rtf_role_override() {
        let mut inputs = inputs_with_info();
        inputs.overrides.role = Some("Arquiteto de software".into());
        let (fw, _) = build_rtf("criar botão", &inputs);
        let Framework::Rtf { role, .. } = fw else {
            panic!("expected rtf");
        };
        assert_eq!(role, "Arquiteto de software");
    }

    #[test]
    fn test_care_example_hint_per_task_type() {
        let mut inputs = BuildInputs::default();
        inputs.task_type = TaskType::Tests;
        let (fw, _) = build_care("testar o hook de login", &inputs);
        let Framework::Care { examples, result, .. } = fw else {
            panic!("expected care");
        };
        assert!(examples.starts_with("{{exemplos:"));
        assert!(examples.contains("expect/describe/it"));
        assert_eq!(result, "Código funcional pronto para uso");
    }

    #[test]
    fn test_dispatch_matches_kind() {
        let inputs = BuildInputs::default();
        for kind in [FrameworkKind::Costar, FrameworkKind::Rtf, FrameworkKind::Care] {
            let (fw, _) = build_framework("objetivo", kind, &inputs);
            assert_eq!(fw.kind(), kind);
        }
    }

    #[test]
    fn test_references_flow_into_meta_verbatim() {
        let mut inputs = inputs_with_info();
        inputs.references = Some("function login() { ... }".into());
        let (_, meta) = build_rtf("criar botão", &inputs);
        assert_eq!(meta.references.as_deref(), Some("function login() { ... }"));
    }
}
