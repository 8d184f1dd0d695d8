//! Model-specific prompt rendering.
//!
//! Five dialects, one per target model family. Section ordering is fixed
//! per framework kind, and every dialect closes with the same structural
//! blocks in its own marker convention: constraints (when the project has
//! a kit), reference materials, injected patterns, a verification block
//! with any trigger checklists, and the clarification instruction. The
//! deep scorer probes those structural signals, not dialect syntax.

use std::collections::BTreeMap;

use garimpo_core::{Dialect, Framework, FrameworkMeta, ModelKind};
use serde::Serialize;

const CONSTRAINT_LINES: [&str; 3] = [
    "Seguir padrões do KIT.md",
    "Reutilizar componentes existentes",
    "MATCH antes de criar novo",
];

const VERIFY_HEADER: &str = "Antes de responder, verifique:";

const VERIFY_BASE: [&str; 3] = [
    "O código segue os padrões do projeto?",
    "Reutiliza componentes do Kit?",
    "Está completo e funcional?",
];

/// Render a framework for a target model, in that model's dialect.
pub fn format_for_model(framework: &Framework, meta: &FrameworkMeta, model: ModelKind) -> String {
    format_with_dialect(framework, meta, model.dialect())
}

/// Render a framework in an explicit dialect.
pub fn format_with_dialect(framework: &Framework, meta: &FrameworkMeta, dialect: Dialect) -> String {
    match dialect {
        Dialect::Xml => format_xml(framework, meta),
        Dialect::JsonSchema => format_json(framework, meta),
        Dialect::Markdown => format_markdown(framework, meta),
        Dialect::Concise => format_concise(framework, meta),
        Dialect::FewShot => format_few_shot(framework, meta),
    }
}

/// Numbered verification lines: the three base checks plus any trigger
/// checklist items, numbered from 4.
fn verify_lines(meta: &FrameworkMeta) -> Vec<String> {
    let mut lines = vec![VERIFY_HEADER.to_string()];
    for (i, check) in VERIFY_BASE.iter().enumerate() {
        lines.push(format!("{}. {check}", i + 1));
    }
    let mut n = VERIFY_BASE.len() + 1;
    for checklist in &meta.trigger_checklists {
        for item in &checklist.items {
            lines.push(format!("{n}. [{}] {item}", checklist.id));
            n += 1;
        }
    }
    lines
}

fn format_xml(framework: &Framework, meta: &FrameworkMeta) -> String {
    let mut parts = Vec::new();

    match framework {
        Framework::Rtf { role, task, format } => {
            parts.push(format!("<role>\n{role}\n</role>\n"));
            parts.push(format!("<task>\n{task}\n</task>\n"));
            parts.push(format!("<format>\n{format}\n</format>\n"));
        }
        Framework::Care {
            context,
            action,
            result,
            examples,
        } => {
            parts.push(format!("<context>\n{context}\n</context>\n"));
            parts.push(format!("<action>\n{action}\n</action>\n"));
            parts.push(format!("<expected_result>\n{result}\n</expected_result>\n"));
            parts.push(format!("<examples>\n{examples}\n</examples>\n"));
        }
        Framework::Costar {
            context,
            objective,
            style,
            tone,
            audience,
            response,
        } => {
            parts.push(format!("<context>\n{context}\n</context>\n"));
            parts.push(format!("<objective>\n{objective}\n</objective>\n"));
            parts.push(format!("<style>\n{style}\n</style>\n"));
            parts.push(format!("<tone>{}</tone>\n", tone.label()));
            parts.push(format!("<audience>{audience}</audience>\n"));
            parts.push(format!("<response_format>{}</response_format>\n", response.label()));
        }
    }

    if meta.has_kit_patterns {
        let lines: Vec<String> = CONSTRAINT_LINES.iter().map(|l| format!("- {l}")).collect();
        parts.push(format!("<constraints>\n{}\n</constraints>\n", lines.join("\n")));
    }
    if let Some(references) = &meta.references {
        parts.push(format!(
            "<reference_materials>\n{references}\n</reference_materials>\n"
        ));
    }
    if let Some(injection) = &meta.trigger_injection {
        parts.push(format!("<kit_patterns>\n{injection}\n</kit_patterns>\n"));
    }

    parts.push(format!("<verify>\n{}\n</verify>\n", verify_lines(meta).join("\n")));
    parts.push(
        "<clarification>\nSe alguma informação estiver faltando ou ambígua, liste as perguntas \
         que precisa esclarecer ANTES de começar a implementação.\n</clarification>"
            .to_string(),
    );

    parts.join("\n")
}

#[derive(Serialize)]
struct JsonExpectedOutput<'a> {
    format: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct JsonRtf<'a> {
    role: &'a str,
    task: &'a str,
    expected_format: &'a str,
    constraints: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_materials: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kit_patterns: Option<&'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    trigger_checklists: BTreeMap<&'a str, &'a [String]>,
    verify: Vec<String>,
    clarification: &'static str,
}

#[derive(Serialize)]
struct JsonCare<'a> {
    context: &'a str,
    action: &'a str,
    expected_result: &'a str,
    examples: &'a str,
    constraints: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_materials: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kit_patterns: Option<&'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    trigger_checklists: BTreeMap<&'a str, &'a [String]>,
    verify: Vec<String>,
    clarification: &'static str,
}

#[derive(Serialize)]
struct JsonCostar<'a> {
    context: &'a str,
    task: &'a str,
    style: &'a str,
    tone: &'a str,
    audience: &'a str,
    expected_output: JsonExpectedOutput<'a>,
    constraints: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_materials: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kit_patterns: Option<&'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    trigger_checklists: BTreeMap<&'a str, &'a [String]>,
    verify: Vec<String>,
    clarification: &'static str,
}

const JSON_CLARIFICATION: &str =
    "Se informação estiver faltando, liste perguntas antes de implementar.";

fn format_json(framework: &Framework, meta: &FrameworkMeta) -> String {
    let constraints: Vec<&'static str> = if meta.has_kit_patterns {
        CONSTRAINT_LINES.to_vec()
    } else {
        Vec::new()
    };
    let checklists: BTreeMap<&str, &[String]> = meta
        .trigger_checklists
        .iter()
        .map(|c| (c.id.as_str(), c.items.as_slice()))
        .collect();
    let verify = verify_lines(meta);
    let references = meta.references.as_deref();
    let injection = meta.trigger_injection.as_deref();

    let rendered = match framework {
        Framework::Rtf { role, task, format } => serde_json::to_string_pretty(&JsonRtf {
            role,
            task,
            expected_format: format,
            constraints,
            reference_materials: references,
            kit_patterns: injection,
            trigger_checklists: checklists,
            verify,
            clarification: JSON_CLARIFICATION,
        }),
        Framework::Care {
            context,
            action,
            result,
            examples,
        } => serde_json::to_string_pretty(&JsonCare {
            context,
            action,
            expected_result: result,
            examples,
            constraints,
            reference_materials: references,
            kit_patterns: injection,
            trigger_checklists: checklists,
            verify,
            clarification: JSON_CLARIFICATION,
        }),
        Framework::Costar {
            context,
            objective,
            style,
            tone,
            audience,
            response,
        } => serde_json::to_string_pretty(&JsonCostar {
            context,
            task: objective,
            style,
            tone: tone.label(),
            audience,
            expected_output: JsonExpectedOutput {
                format: response.label(),
                description: response.label(),
            },
            constraints,
            reference_materials: references,
            kit_patterns: injection,
            trigger_checklists: checklists,
            verify,
            clarification: JSON_CLARIFICATION,
        }),
    };
    rendered.expect("prompt serialization is infallible")
}

fn format_markdown(framework: &Framework, meta: &FrameworkMeta) -> String {
    let mut parts = Vec::new();

    match framework {
        Framework::Rtf { role, task, format } => {
            parts.push(format!("# Role\n\n{role}\n"));
            parts.push(format!("# Task\n\n{task}\n"));
            parts.push(format!("# Format\n\n{format}\n"));
        }
        Framework::Care {
            context,
            action,
            result,
            examples,
        } => {
            parts.push(format!("# Context\n\n{context}\n"));
            parts.push(format!("# Action\n\n{action}\n"));
            parts.push(format!("# Expected Result\n\n{result}\n"));
            parts.push(format!("# Examples\n\n{examples}\n"));
        }
        Framework::Costar {
            context,
            objective,
            style,
            tone,
            audience,
            response,
        } => {
            parts.push(format!("# Tarefa\n\n{objective}\n"));
            parts.push(format!("## Contexto\n\n{context}\n"));
            parts.push(format!("## Estilo\n\n{style}\n"));
            parts.push(format!("## Tom\n\n{}\n", tone.label()));
            parts.push(format!("## Público\n\n{audience}\n"));
            parts.push(format!("## Formato de Saída\n\n{}\n", response.label()));
        }
    }

    if meta.has_kit_patterns {
        parts.push(
            "## Restrições\n\n- Seguir padrões do KIT.md\n- Reutilizar componentes existentes\n"
                .to_string(),
        );
    }
    if let Some(references) = &meta.references {
        parts.push(format!("## Materiais de Referência\n\n{references}\n"));
    }
    if let Some(injection) = &meta.trigger_injection {
        parts.push(format!("## Padrões do Kit (auto-detectados)\n\n{injection}\n"));
    }

    parts.push(format!("## Verificação\n\n{}\n", verify_lines(meta).join("\n")));

    if !meta.trigger_checklists.is_empty() {
        let blocks: Vec<String> = meta
            .trigger_checklists
            .iter()
            .map(|c| {
                let items: Vec<String> = c.items.iter().map(|i| format!("- [ ] {i}")).collect();
                format!("### {}\n{}", c.id, items.join("\n"))
            })
            .collect();
        parts.push(format!("## Checklists Obrigatórios\n\n{}\n", blocks.join("\n\n")));
    }

    parts.push(
        "## Clarificação\n\nSe alguma informação estiver faltando ou ambígua, liste as \
         perguntas que precisa esclarecer ANTES de começar.\n"
            .to_string(),
    );
    parts.join("\n")
}

fn format_concise(framework: &Framework, meta: &FrameworkMeta) -> String {
    let mut parts = Vec::new();

    match framework {
        Framework::Rtf { role, task, format } => {
            parts.push(format!("Papel: {role}"));
            parts.push(format!("Tarefa: {task}"));
            parts.push(format!("Output: {format}"));
        }
        Framework::Care {
            context,
            action,
            result,
            ..
        } => {
            parts.push(format!("Contexto: {context}"));
            parts.push(format!("Ação: {action}"));
            parts.push(format!("Resultado: {result}"));
        }
        Framework::Costar {
            context,
            objective,
            response,
            ..
        } => {
            parts.push(format!("Contexto: {context}"));
            parts.push(format!("Tarefa: {objective}"));
            parts.push(format!("Output: {}", response.label()));
        }
    }

    if meta.has_kit_patterns {
        parts.push("Restrição: seguir padrões do KIT.md".to_string());
    }
    if let Some(references) = &meta.references {
        parts.push(format!("Referência: {references}"));
    }
    if let Some(injection) = &meta.trigger_injection {
        parts.push(format!("Padrões detectados:\n{injection}"));
    }
    for checklist in &meta.trigger_checklists {
        parts.push(format!(
            "Checklist {}: {}",
            checklist.id,
            checklist.items.join("; ")
        ));
    }
    parts.push(
        "Antes de responder, verifique: padrões do projeto, reuso do Kit, completude.".to_string(),
    );
    parts.push("Se falta info, pergunte antes de implementar.".to_string());
    parts.join("\n")
}

fn format_few_shot(framework: &Framework, meta: &FrameworkMeta) -> String {
    let mut parts = Vec::new();
    parts.push("### Instruções\n".to_string());

    let (context, objective, format) = match framework {
        Framework::Rtf { task, format, .. } => (None, task.as_str(), format.clone()),
        Framework::Care {
            context,
            action,
            result,
            ..
        } => (Some(context.as_str()), action.as_str(), result.clone()),
        Framework::Costar {
            context,
            objective,
            response,
            ..
        } => (
            Some(context.as_str()),
            objective.as_str(),
            response.label().to_string(),
        ),
    };

    if let Some(context) = context {
        parts.push(format!("Contexto: {context}\n"));
    }
    parts.push(format!("Tarefa: {objective}\n"));
    parts.push(format!("Formato esperado: {format}\n"));

    if meta.has_kit_patterns {
        parts.push("### Restrições\n".to_string());
        parts.push("- Seguir padrões do KIT.md\n- Reutilizar componentes existentes\n".to_string());
    }
    if let Some(references) = &meta.references {
        parts.push("### Materiais de Referência\n".to_string());
        parts.push(format!("{references}\n"));
    }

    parts.push("### Exemplo de saída esperada\n".to_string());
    match framework {
        Framework::Care { examples, .. } if !examples.starts_with("{{") => {
            parts.push(format!("{examples}\n"));
        }
        _ => parts.push("{{exemplo: insira saída de referência}}\n".to_string()),
    }

    if let Some(injection) = &meta.trigger_injection {
        parts.push("### Padrões do Kit\n".to_string());
        parts.push(format!("{injection}\n"));
    }
    for checklist in &meta.trigger_checklists {
        parts.push(format!("### Checklist: {}\n", checklist.id));
        let items: Vec<String> = checklist.items.iter().map(|i| format!("- [ ] {i}")).collect();
        parts.push(format!("{}\n", items.join("\n")));
    }

    parts.push(
        "Antes de responder, verifique: padrões do projeto, reuso do Kit, completude.".to_string(),
    );
    parts.push("### Agora execute a tarefa acima.".to_string());
    parts.push("Se falta informação, pergunte antes de começar.".to_string());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use garimpo_core::{ResponseFormat, TaskType, Tone, TriggerChecklist};

    fn rtf() -> Framework {
        Framework::Rtf {
            role: "Desenvolvedor sênior".into(),
            task: "criar botão de login".into(),
            format: "Código funcional pronto para uso".into(),
        }
    }

    fn costar() -> Framework {
        Framework::Costar {
            context: "Projeto: Loja. Stack: React.".into(),
            objective: "refatorar o checkout".into(),
            style: "Código limpo".into(),
            tone: Tone::Tecnico,
            audience: "Desenvolvedor trabalhando no projeto".into(),
            response: ResponseFormat::Code,
        }
    }

    fn meta_with_everything() -> FrameworkMeta {
        FrameworkMeta {
            task_type: TaskType::Code,
            has_kit_patterns: true,
            references: Some("ver Button.tsx".into()),
            trigger_injection: Some("=== PADRÕES DO KIT ===\n--- FORMS ---".into()),
            trigger_checklists: vec![TriggerChecklist {
                id: "forms".into(),
                items: vec!["validar campos".into()],
            }],
            trigger_ids: vec!["forms".into()],
        }
    }

    #[test]
    fn test_xml_rtf_sections_in_order() {
        let text = format_xml(&rtf(), &FrameworkMeta::default());
        let role = text.find("<role>").unwrap();
        let task = text.find("<task>").unwrap();
        let format = text.find("<format>").unwrap();
        let verify = text.find("<verify>").unwrap();
        let clarification = text.find("<clarification>").unwrap();
        assert!(role < task && task < format && format < verify && verify < clarification);
    }

    #[test]
    fn test_xml_includes_optional_blocks() {
        let text = format_xml(&rtf(), &meta_with_everything());
        assert!(text.contains("<constraints>"));
        assert!(text.contains("Seguir padrões do KIT.md"));
        assert!(text.contains("<reference_materials>\nver Button.tsx"));
        assert!(text.contains("<kit_patterns>"));
        assert!(text.contains("4. [forms] validar campos"));
    }

    #[test]
    fn test_json_is_valid_and_ordered() {
        let text = format_json(&costar(), &meta_with_everything());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["task"], "refatorar o checkout");
        assert_eq!(value["expected_output"]["format"], "Código funcional pronto para uso");
        assert_eq!(value["trigger_checklists"]["forms"][0], "validar campos");
        assert!(value["verify"][0].as_str().unwrap().contains("verifique"));
        // Deterministic rendering
        assert_eq!(text, format_json(&costar(), &meta_with_everything()));
    }

    #[test]
    fn test_json_omits_empty_optionals() {
        let text = format_json(&rtf(), &FrameworkMeta::default());
        assert!(!text.contains("reference_materials"));
        assert!(!text.contains("kit_patterns"));
        assert!(!text.contains("trigger_checklists"));
        assert!(text.contains("\"constraints\": []"));
    }

    #[test]
    fn test_markdown_costar_sections() {
        let text = format_markdown(&costar(), &FrameworkMeta::default());
        assert!(text.contains("# Tarefa\n\nrefatorar o checkout"));
        assert!(text.contains("## Contexto"));
        assert!(text.contains("## Formato de Saída"));
        assert!(text.contains("## Verificação"));
        assert!(text.contains("## Clarificação"));
    }

    #[test]
    fn test_concise_stays_line_oriented() {
        let text = format_concise(&rtf(), &FrameworkMeta::default());
        assert!(text.starts_with("Papel: "));
        assert!(text.contains("Tarefa: criar botão de login"));
        assert!(text.contains("Output: "));
        assert!(text.contains("verifique"));
        assert!(text.len() < 500);
    }

    #[test]
    fn test_few_shot_has_example_block() {
        let text = format_few_shot(&rtf(), &FrameworkMeta::default());
        assert!(text.contains("### Instruções"));
        assert!(text.contains("### Exemplo de saída esperada"));
        assert!(text.contains("{{exemplo: insira saída de referência}}"));
        assert!(text.contains("### Agora execute a tarefa acima."));
    }

    #[test]
    fn test_every_dialect_renders_closing_blocks() {
        let meta = meta_with_everything();
        for dialect in [
            Dialect::Xml,
            Dialect::JsonSchema,
            Dialect::Markdown,
            Dialect::Concise,
            Dialect::FewShot,
        ] {
            let text = format_with_dialect(&costar(), &meta, dialect);
            assert!(text.contains("KIT.md"), "{dialect:?} missing constraints");
            assert!(text.contains("ver Button.tsx"), "{dialect:?} missing references");
            assert!(text.contains("FORMS"), "{dialect:?} missing injection");
            assert!(text.contains("validar campos"), "{dialect:?} missing checklist");
            assert!(text.contains("verifique"), "{dialect:?} missing verify block");
        }
    }

    #[test]
    fn test_dialect_follows_model() {
        let meta = FrameworkMeta::default();
        assert!(format_for_model(&rtf(), &meta, ModelKind::Claude).contains("<task>"));
        assert!(format_for_model(&rtf(), &meta, ModelKind::Gpt).starts_with('{'));
        assert!(format_for_model(&rtf(), &meta, ModelKind::Gemini).contains("# Task"));
        assert!(format_for_model(&rtf(), &meta, ModelKind::Deepseek).starts_with("Papel:"));
        assert!(format_for_model(&rtf(), &meta, ModelKind::Groq).contains("### Instruções"));
    }
}
