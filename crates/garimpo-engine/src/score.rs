//! Deep scoring: six-criterion weighted quality evaluation.
//!
//! Works on the rendered text alone. Every probe is a dialect-agnostic
//! substring or regex check covering the markers all five dialects emit,
//! so the same semantic prompt scores comparably however it was rendered.
//! Each criterion accumulates additive sub-checks capped at 100; the
//! weighted total and letter grade come from `ScoreReport`.

use garimpo_core::ScoreReport;
use garimpo_triggers::normalize;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_OBJECTIVE_RE: Regex =
        Regex::new(r"(?s)<(?:objective|task|action)>\n?(.*?)\n?</(?:objective|task|action)>")
            .unwrap();
    static ref MD_OBJECTIVE_RE: Regex =
        Regex::new(r"(?s)# (?:Tarefa|Task|Action)\n\n(.*?)(?:\n#|\z)").unwrap();
    static ref JSON_OBJECTIVE_RE: Regex =
        Regex::new(r#""(?:task|action)":\s*"([^"]*)""#).unwrap();
    static ref LINE_OBJECTIVE_RE: Regex =
        Regex::new(r"(?:Tarefa|Task|Ação|Action):[ \t]*(.+)").unwrap();
    static ref NUMBERED_RE: Regex = Regex::new(r"\d+\.\s").unwrap();
    static ref BULLET_RE: Regex = Regex::new(r"(?m)^-\s").unwrap();
    static ref SECTION_TAG_RE: Regex = Regex::new(r"<\w+>").unwrap();
    static ref HEADING_RE: Regex = Regex::new(r"(?m)^#{1,3}\s").unwrap();
    static ref MD_SECTION_RE: Regex = Regex::new(r"(?m)^#{1,3}\s.*\n\n").unwrap();
    static ref FILE_REF_RE: Regex = Regex::new(r"\w+\.\w{2,4}").unwrap();
    static ref FUNC_REF_RE: Regex = Regex::new(r"\w+\(\)").unwrap();
}

/// Objective-equivalent markers across the five dialects.
const OBJECTIVE_MARKERS: [&str; 10] = [
    "<objective>",
    "<task>",
    "<action>",
    "# Tarefa",
    "# Task",
    "# Action",
    "\"task\"",
    "\"action\"",
    "Tarefa:",
    "Ação:",
];

const ACTION_VERBS: [&str; 17] = [
    "criar",
    "implementar",
    "corrigir",
    "refatorar",
    "documentar",
    "testar",
    "migrar",
    "otimizar",
    "adicionar",
    "remover",
    "configurar",
    "integrar",
    "create",
    "implement",
    "fix",
    "build",
    "add",
];

const CONTEXT_MARKERS: [&str; 5] = [
    "<context>",
    "## Contexto",
    "# Context",
    "\"context\"",
    "Contexto:",
];

const CONSTRAINT_MARKERS: [&str; 4] =
    ["<constraints>", "Restrições", "Restrição", "\"constraints\""];

const TECH_TERMS: [&str; 18] = [
    "TypeScript",
    "React",
    "Node",
    "API",
    "REST",
    "GraphQL",
    "SQL",
    "MongoDB",
    "Docker",
    "CSS",
    "Tailwind",
    "Next",
    "Vite",
    "Jest",
    "function",
    "class",
    "interface",
    "type",
];

const VAGUE_TOKENS: [&str; 6] = ["talvez", "maybe", "possibly", "algo", "alguma coisa", "something"];

const FORMAT_MARKERS: [&str; 10] = [
    "<response_format>",
    "Formato de Saída",
    "# Format",
    "\"expected_output\"",
    "\"expected_format\"",
    "Output:",
    "expected_result",
    "Resultado:",
    "<format>",
    "Formato esperado",
];

const FORMAT_HINTS: [&str; 5] = ["código", "code", "JSON", "markdown", "lista"];

const VERIFY_MARKERS: [&str; 3] = ["<verify>", "verifique", "checklist"];

const STRUCTURE_MARKERS: [&str; 6] = [
    "<context>",
    "<role>",
    "# Role",
    "# Context",
    "\"context\"",
    "\"role\"",
];

const NEGATIVE_MARKERS: [&str; 4] = ["não faça", "evite", "do not", "avoid"];

const EXAMPLE_MARKERS: [&str; 3] = ["exemplo", "example", "<examples>"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Score a rendered prompt on the six quality criteria. Pure and
/// format-agnostic; identical input always yields an identical report.
pub fn deep_score(prompt: &str) -> ScoreReport {
    let normalized = normalize(prompt);
    let prompt_len = prompt.len();

    // 1. Clarity of objective (25%)
    let has_objective = contains_any(prompt, &OBJECTIVE_MARKERS);
    let objective_span = TAG_OBJECTIVE_RE
        .captures(prompt)
        .or_else(|| MD_OBJECTIVE_RE.captures(prompt))
        .or_else(|| JSON_OBJECTIVE_RE.captures(prompt))
        .or_else(|| LINE_OBJECTIVE_RE.captures(prompt))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    let objective_words = if objective_span.is_empty() {
        0
    } else {
        objective_span.split_whitespace().count()
    };

    let mut clarity = 0u32;
    if has_objective {
        clarity += 40;
    }
    if objective_words >= 10 {
        clarity += 30;
    } else if objective_words >= 5 {
        clarity += 20;
    } else if objective_words >= 3 {
        clarity += 10;
    }
    if ACTION_VERBS.iter().any(|v| normalized.contains(&normalize(v))) {
        clarity += 30;
    }
    let clarity_detail = if objective_words >= 5 {
        "Objetivo claro e detalhado"
    } else if objective_words > 0 {
        "Objetivo presente mas pode ser mais específico"
    } else {
        "Objetivo ausente ou implícito"
    };

    // 2. Context completeness (20%)
    let mut context = 0u32;
    if contains_any(prompt, &CONTEXT_MARKERS) {
        context += 30;
    }
    if prompt.contains("Projeto:") || prompt.contains("Project:") {
        context += 15;
    }
    if prompt.contains("Stack:") || prompt.contains("stack") {
        context += 15;
    }
    if prompt.contains("Fase") || prompt.contains("phase") {
        context += 10;
    }
    if prompt.contains("KIT") || prompt.contains("Kit") {
        context += 15;
    }
    if prompt.contains("componente") || prompt.contains("módulo") || prompt.contains("arquivo") {
        context += 15;
    }
    let context_detail = if context >= 60 {
        "Contexto rico e completo"
    } else if context >= 30 {
        "Contexto parcial — pode melhorar"
    } else {
        "Contexto insuficiente"
    };

    // 3. Specificity (20%)
    let mut specificity = 0u32;
    if prompt_len > 500 {
        specificity += 20;
    } else if prompt_len > 200 {
        specificity += 10;
    }
    if contains_any(prompt, &CONSTRAINT_MARKERS) {
        specificity += 20;
    }
    let tech_count = TECH_TERMS.iter().filter(|t| prompt.contains(*t)).count() as u32;
    specificity += (tech_count * 10).min(30);
    if NUMBERED_RE.is_match(prompt) || BULLET_RE.is_match(prompt) {
        specificity += 15;
    }
    if !VAGUE_TOKENS.iter().any(|v| normalized.contains(v)) {
        specificity += 15;
    }
    let specificity_detail = if specificity >= 60 {
        "Altamente específico"
    } else if specificity >= 30 {
        "Moderadamente específico"
    } else {
        "Muito vago — adicione detalhes técnicos"
    };

    // 4. Output-format definition (15%)
    let mut format = 0u32;
    if contains_any(prompt, &FORMAT_MARKERS) {
        format += 50;
    }
    if contains_any(prompt, &FORMAT_HINTS) {
        format += 25;
    }
    if contains_any(prompt, &VERIFY_MARKERS) {
        format += 25;
    }
    let format_detail = if format >= 50 {
        "Formato bem definido"
    } else if format > 0 {
        "Formato implícito — defina explicitamente"
    } else {
        "Formato de saída não definido"
    };

    // 5. Structure / framework use (10%)
    let mut structure = 0u32;
    if contains_any(prompt, &STRUCTURE_MARKERS) {
        structure += 40;
    }
    let section_count = (SECTION_TAG_RE.find_iter(prompt).count()
        + HEADING_RE.find_iter(prompt).count()) as u32;
    structure += (section_count * 8).min(40);
    if prompt.contains("</") || MD_SECTION_RE.is_match(prompt) {
        structure += 20;
    }
    let structure_detail = if structure >= 60 {
        "Bem estruturado com framework"
    } else if structure >= 30 {
        "Estrutura parcial"
    } else {
        "Sem estrutura clara"
    };

    // 6. Anti-ambiguity (10%)
    let mut anti_ambiguity = 0u32;
    if contains_any(prompt, &NEGATIVE_MARKERS) {
        anti_ambiguity += 25;
    }
    if contains_any(prompt, &EXAMPLE_MARKERS) {
        anti_ambiguity += 25;
    }
    if FILE_REF_RE.is_match(prompt) || FUNC_REF_RE.is_match(prompt) {
        anti_ambiguity += 25;
    }
    if prompt_len > 300 {
        anti_ambiguity += 25;
    }
    let anti_ambiguity_detail = if anti_ambiguity >= 50 {
        "Baixa ambiguidade"
    } else if anti_ambiguity >= 25 {
        "Alguma ambiguidade — adicione restrições ou exemplos"
    } else {
        "Alta ambiguidade — clarificar intenção"
    };

    ScoreReport::from_scores([
        (clarity.min(100) as u8, clarity_detail.to_string()),
        (context.min(100) as u8, context_detail.to_string()),
        (specificity.min(100) as u8, specificity_detail.to_string()),
        (format.min(100) as u8, format_detail.to_string()),
        (structure.min(100) as u8, structure_detail.to_string()),
        (anti_ambiguity.min(100) as u8, anti_ambiguity_detail.to_string()),
    ])
}
