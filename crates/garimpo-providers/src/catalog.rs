use serde::Serialize;

/// A creator model that can be asked to write prompts for us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatorModel {
    pub key: &'static str,
    pub provider: &'static str,
    pub model: &'static str,
    pub label: &'static str,
}

/// Supported creators, in preference order.
pub const CREATOR_MODELS: [CreatorModel; 3] = [
    CreatorModel {
        key: "gemini",
        provider: "google",
        model: "gemini-2.5-flash",
        label: "Gemini 2.5 Flash",
    },
    CreatorModel {
        key: "deepseek",
        provider: "deepseek",
        model: "deepseek-chat",
        label: "DeepSeek V3",
    },
    CreatorModel {
        key: "codestral",
        provider: "mistral",
        model: "codestral-latest",
        label: "Codestral",
    },
];

/// Look up a creator by its key. `None` for unrecognized keys — the caller
/// decides whether that is an error (it is, for AI-augmented paths).
pub fn creator_by_key(key: &str) -> Option<&'static CreatorModel> {
    CREATOR_MODELS.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_lookup() {
        assert_eq!(creator_by_key("gemini").unwrap().provider, "google");
        assert_eq!(creator_by_key("codestral").unwrap().model, "codestral-latest");
        assert!(creator_by_key("claude").is_none());
    }
}
