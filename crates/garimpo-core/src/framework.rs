use serde::{Deserialize, Serialize};

use crate::{ResponseFormat, TaskType, Tone};

/// Prompt-structuring framework families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkKind {
    Costar,
    Rtf,
    Care,
}

impl FrameworkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Costar => "costar",
            Self::Rtf => "rtf",
            Self::Care => "care",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Costar => "CO-STAR (Context, Objective, Style, Tone, Audience, Response)",
            Self::Rtf => "RTF (Role, Task, Format)",
            Self::Care => "CARE (Context, Action, Result, Examples)",
        }
    }
}

impl Default for FrameworkKind {
    fn default() -> Self {
        Self::Costar
    }
}

/// A checklist contributed by a matched trigger, rendered as a verification
/// block in every dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerChecklist {
    pub id: String,
    pub items: Vec<String>,
}

/// Metadata shared by every framework variant. Populated by the builders
/// and consumed by the formatter; all optional pieces default to empty and
/// never block construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameworkMeta {
    pub task_type: TaskType,
    pub has_kit_patterns: bool,
    pub references: Option<String>,
    pub trigger_injection: Option<String>,
    pub trigger_checklists: Vec<TriggerChecklist>,
    pub trigger_ids: Vec<String>,
}

/// A structured prompt before rendering: one of the three framework shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "framework", rename_all = "lowercase")]
pub enum Framework {
    Costar {
        context: String,
        objective: String,
        style: String,
        tone: Tone,
        audience: String,
        response: ResponseFormat,
    },
    Rtf {
        role: String,
        task: String,
        format: String,
    },
    Care {
        context: String,
        action: String,
        result: String,
        examples: String,
    },
}

impl Framework {
    pub fn kind(&self) -> FrameworkKind {
        match self {
            Self::Costar { .. } => FrameworkKind::Costar,
            Self::Rtf { .. } => FrameworkKind::Rtf,
            Self::Care { .. } => FrameworkKind::Care,
        }
    }

    /// The objective-equivalent field, whatever the framework calls it.
    pub fn objective(&self) -> &str {
        match self {
            Self::Costar { objective, .. } => objective,
            Self::Rtf { task, .. } => task,
            Self::Care { action, .. } => action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_objective() {
        let fw = Framework::Rtf {
            role: "Desenvolvedor sênior".into(),
            task: "criar botão".into(),
            format: "Código funcional".into(),
        };
        assert_eq!(fw.kind(), FrameworkKind::Rtf);
        assert_eq!(fw.objective(), "criar botão");
    }

    #[test]
    fn test_serde_tagging() {
        let fw = Framework::Care {
            context: "Projeto.".into(),
            action: "testar".into(),
            result: "Código".into(),
            examples: "{{exemplos}}".into(),
        };
        let json = serde_json::to_string(&fw).unwrap();
        assert!(json.contains("\"framework\":\"care\""));
    }
}
