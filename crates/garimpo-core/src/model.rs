use serde::{Deserialize, Serialize};

/// Supported target models. The formatting dialect and the profile are pure
/// functions of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Claude,
    Gpt,
    Gemini,
    Deepseek,
    Groq,
}

impl ModelKind {
    pub const ALL: [ModelKind; 5] = [
        Self::Claude,
        Self::Gpt,
        Self::Gemini,
        Self::Deepseek,
        Self::Groq,
    ];

    /// Resolve a user-supplied model key. `"llama"` is an alias for the
    /// Groq/Llama profile. Unknown keys return `None`; callers fall back to
    /// [`ModelKind::Claude`].
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "claude" => Some(Self::Claude),
            "gpt" => Some(Self::Gpt),
            "gemini" => Some(Self::Gemini),
            "deepseek" => Some(Self::Deepseek),
            "groq" | "llama" => Some(Self::Groq),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Gpt => "gpt",
            Self::Gemini => "gemini",
            Self::Deepseek => "deepseek",
            Self::Groq => "groq",
        }
    }

    /// The textual rendering convention this model responds best to.
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::Claude => Dialect::Xml,
            Self::Gpt => Dialect::JsonSchema,
            Self::Gemini => Dialect::Markdown,
            Self::Deepseek => Dialect::Concise,
            Self::Groq => Dialect::FewShot,
        }
    }

    pub fn profile(&self) -> &'static ModelProfile {
        match self {
            Self::Claude => &CLAUDE,
            Self::Gpt => &GPT,
            Self::Gemini => &GEMINI,
            Self::Deepseek => &DEEPSEEK,
            Self::Groq => &GROQ,
        }
    }
}

impl Default for ModelKind {
    fn default() -> Self {
        Self::Claude
    }
}

/// Textual rendering convention for a target model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    Xml,
    JsonSchema,
    Markdown,
    Concise,
    FewShot,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::JsonSchema => "json-schema",
            Self::Markdown => "markdown",
            Self::Concise => "concise",
            Self::FewShot => "few-shot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Premium,
    Free,
}

/// Static facts about a target model used by simulation and meta-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelProfile {
    pub name: &'static str,
    pub max_tokens: u32,
    pub strengths: &'static str,
    pub weaknesses: &'static str,
    pub cost_tier: CostTier,
}

static CLAUDE: ModelProfile = ModelProfile {
    name: "Claude",
    max_tokens: 200_000,
    strengths: "XML tags, instruções explícitas, extended thinking, raciocínio complexo",
    weaknesses: "Custo mais alto",
    cost_tier: CostTier::Premium,
};

static GPT: ModelProfile = ModelProfile {
    name: "GPT",
    max_tokens: 128_000,
    strengths: "Structured output, JSON schema, function calling",
    weaknesses: "Menos literal que Claude",
    cost_tier: CostTier::Premium,
};

static GEMINI: ModelProfile = ModelProfile {
    name: "Gemini",
    max_tokens: 1_000_000,
    strengths: "Contexto longo (1M), multimodal, Deep Think",
    weaknesses: "Menos preciso em código",
    cost_tier: CostTier::Free,
};

static DEEPSEEK: ModelProfile = ModelProfile {
    name: "DeepSeek",
    max_tokens: 64_000,
    strengths: "Raciocínio técnico, custo baixo, direto",
    weaknesses: "Contexto limitado",
    cost_tier: CostTier::Free,
};

static GROQ: ModelProfile = ModelProfile {
    name: "Groq/Llama",
    max_tokens: 32_000,
    strengths: "Velocidade extrema, few-shot eficaz",
    weaknesses: "Contexto curto, menos criativo",
    cost_tier: CostTier::Free,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_aliases() {
        assert_eq!(ModelKind::from_key("claude"), Some(ModelKind::Claude));
        assert_eq!(ModelKind::from_key("LLAMA"), Some(ModelKind::Groq));
        assert_eq!(ModelKind::from_key("groq"), Some(ModelKind::Groq));
        assert_eq!(ModelKind::from_key("mistral"), None);
    }

    #[test]
    fn test_dialect_mapping() {
        assert_eq!(ModelKind::Claude.dialect(), Dialect::Xml);
        assert_eq!(ModelKind::Gpt.dialect(), Dialect::JsonSchema);
        assert_eq!(ModelKind::Gemini.dialect(), Dialect::Markdown);
        assert_eq!(ModelKind::Deepseek.dialect(), Dialect::Concise);
        assert_eq!(ModelKind::Groq.dialect(), Dialect::FewShot);
    }

    #[test]
    fn test_profiles() {
        assert_eq!(ModelKind::Gemini.profile().max_tokens, 1_000_000);
        assert_eq!(ModelKind::Claude.profile().cost_tier, CostTier::Premium);
        assert_eq!(ModelKind::Groq.profile().name, "Groq/Llama");
    }
}
