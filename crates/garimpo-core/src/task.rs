use serde::{Deserialize, Serialize};

/// Task intent detected from the objective text.
///
/// Declaration order is significant: the classifier breaks keyword-count
/// ties in favor of the first declared variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Code,
    Debug,
    Tests,
    Refactor,
    Docs,
    Architecture,
}

impl TaskType {
    /// All variants in declaration (tie-break) order.
    pub const ALL: [TaskType; 6] = [
        Self::Code,
        Self::Debug,
        Self::Tests,
        Self::Refactor,
        Self::Docs,
        Self::Architecture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Debug => "debug",
            Self::Tests => "tests",
            Self::Refactor => "refactor",
            Self::Docs => "docs",
            Self::Architecture => "architecture",
        }
    }

    /// Keywords counted by the classifier. Matching is substring-based over
    /// normalized (lowercased, diacritic-stripped) text.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Code => &[
                "criar",
                "implementar",
                "componente",
                "função",
                "hook",
                "api",
                "endpoint",
                "rota",
                "página",
                "botão",
                "form",
                "input",
                "modal",
                "layout",
                "estilo",
                "css",
                "html",
                "script",
                "feature",
                "funcionalidade",
            ],
            Self::Debug => &[
                "bug",
                "erro",
                "fix",
                "corrigir",
                "quebrado",
                "falha",
                "crash",
                "exception",
                "null",
                "undefined",
                "não funciona",
                "problema",
                "investigar",
                "diagnosticar",
            ],
            Self::Tests => &[
                "teste",
                "test",
                "spec",
                "jest",
                "vitest",
                "coverage",
                "mock",
                "stub",
                "assert",
                "expect",
                "unitário",
                "integração",
                "e2e",
            ],
            Self::Refactor => &[
                "refatorar",
                "refactor",
                "limpar",
                "otimizar",
                "melhorar",
                "simplificar",
                "extrair",
                "mover",
                "renomear",
                "reorganizar",
                "performance",
            ],
            Self::Docs => &[
                "documentar",
                "readme",
                "doc",
                "guia",
                "tutorial",
                "explicar",
                "descrever",
                "comentar",
                "jsdoc",
                "swagger",
                "api doc",
            ],
            Self::Architecture => &[
                "arquitetura",
                "design",
                "estrutura",
                "decisão",
                "abordagem",
                "comparar",
                "trade-off",
                "padrão",
                "pattern",
                "migrar",
                "escalar",
                "segurança",
                "auth",
                "planejar",
            ],
        }
    }

    /// Default tone for prompts of this task type.
    pub fn tone(&self) -> Tone {
        match self {
            Self::Code | Self::Tests | Self::Refactor => Tone::Tecnico,
            Self::Debug | Self::Architecture => Tone::Analitico,
            Self::Docs => Tone::Didatico,
        }
    }

    /// Default response format for prompts of this task type.
    pub fn response(&self) -> ResponseFormat {
        match self {
            Self::Code | Self::Debug | Self::Tests | Self::Refactor => ResponseFormat::Code,
            Self::Docs | Self::Architecture => ResponseFormat::Markdown,
        }
    }

    /// Preferred prompt framework for this task type.
    pub fn framework(&self) -> crate::FrameworkKind {
        match self {
            Self::Code | Self::Debug => crate::FrameworkKind::Rtf,
            Self::Tests | Self::Docs => crate::FrameworkKind::Care,
            Self::Refactor | Self::Architecture => crate::FrameworkKind::Costar,
        }
    }
}

impl Default for TaskType {
    fn default() -> Self {
        Self::Code
    }
}

/// Estimated complexity of the objective. Declaration order is the
/// tie-break order used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Simple,
    Medium,
    High,
    Critical,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 4] =
        [Self::Simple, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Keywords tallied by the complexity detector.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Simple => &[
                "ajustar",
                "adicionar campo",
                "renomear",
                "trocar cor",
                "alterar texto",
                "novo campo",
                "estilo",
                "css",
                "typo",
                "label",
            ],
            Self::Medium => &[
                "componente",
                "refatorar",
                "hook",
                "formulário",
                "validação",
                "integração",
                "api",
                "modal",
                "tabela",
                "lista",
            ],
            Self::High => &[
                "arquitetura",
                "migração",
                "design system",
                "múltiplos módulos",
                "pipeline",
                "cache",
                "state management",
                "real-time",
                "websocket",
            ],
            Self::Critical => &[
                "segurança",
                "auth",
                "pagamento",
                "criptografia",
                "financeiro",
                "compliance",
                "gdpr",
                "lgpd",
                "token",
                "senha",
                "credencial",
            ],
        }
    }

    /// Reasoning technique mapped 1:1 from the complexity level.
    pub fn technique(&self) -> Technique {
        match self {
            Self::Simple => Technique::ZeroShot,
            Self::Medium => Technique::FewShotCot,
            Self::High => Technique::TreeOfThought,
            Self::Critical => Technique::SelfConsistency,
        }
    }
}

impl Default for ComplexityLevel {
    fn default() -> Self {
        Self::Simple
    }
}

/// Reasoning-strategy instruction appended after formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technique {
    ZeroShot,
    FewShotCot,
    TreeOfThought,
    SelfConsistency,
}

impl Technique {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroShot => "zero-shot",
            Self::FewShotCot => "few-shot-cot",
            Self::TreeOfThought => "tree-of-thought",
            Self::SelfConsistency => "self-consistency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ZeroShot => "Zero-Shot (direto)",
            Self::FewShotCot => "Few-Shot + Chain-of-Thought",
            Self::TreeOfThought => "Tree-of-Thought (múltiplas abordagens)",
            Self::SelfConsistency => "Self-Consistency (gerar N, escolher consenso)",
        }
    }
}

impl Default for Technique {
    fn default() -> Self {
        Self::ZeroShot
    }
}

/// Tone of voice requested from the target model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Tecnico,
    Analitico,
    Didatico,
    Conciso,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tecnico => "Técnico e preciso",
            Self::Analitico => "Analítico e investigativo",
            Self::Didatico => "Didático e explicativo",
            Self::Conciso => "Conciso e direto",
        }
    }
}

/// Expected shape of the model's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    Code,
    Markdown,
    Json,
    List,
}

impl ResponseFormat {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Code => "Código funcional pronto para uso",
            Self::Markdown => "Documento em Markdown estruturado",
            Self::Json => "JSON estruturado",
            Self::List => "Lista de itens/passos",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_defaults() {
        assert_eq!(TaskType::Code.framework(), crate::FrameworkKind::Rtf);
        assert_eq!(TaskType::Tests.framework(), crate::FrameworkKind::Care);
        assert_eq!(
            TaskType::Architecture.framework(),
            crate::FrameworkKind::Costar
        );
        assert_eq!(TaskType::Docs.tone(), Tone::Didatico);
        assert_eq!(TaskType::Debug.response(), ResponseFormat::Code);
    }

    #[test]
    fn test_complexity_technique_mapping() {
        assert_eq!(ComplexityLevel::Simple.technique(), Technique::ZeroShot);
        assert_eq!(ComplexityLevel::Medium.technique(), Technique::FewShotCot);
        assert_eq!(ComplexityLevel::High.technique(), Technique::TreeOfThought);
        assert_eq!(
            ComplexityLevel::Critical.technique(),
            Technique::SelfConsistency
        );
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(TaskType::ALL[0], TaskType::Code);
        assert_eq!(ComplexityLevel::ALL[0], ComplexityLevel::Simple);
        assert_eq!(ComplexityLevel::ALL[3], ComplexityLevel::Critical);
    }

    #[test]
    fn test_serde_keys() {
        assert_eq!(
            serde_json::to_string(&Technique::FewShotCot).unwrap(),
            "\"few-shot-cot\""
        );
        assert_eq!(
            serde_json::to_string(&TaskType::Architecture).unwrap(),
            "\"architecture\""
        );
    }
}
