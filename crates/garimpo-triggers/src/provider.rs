use tracing::debug;

use crate::matching::{keyword_match, normalize};
use crate::TriggerTable;

/// A trigger that fired for a task description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch {
    pub id: String,
    pub priority: u32,
    pub auto_inject: bool,
    pub checklist: Option<String>,
    pub matched_keywords: Vec<String>,
    /// More matched keywords means more relevant.
    pub relevance: usize,
}

/// Seam between prompt generation and the pattern library. Implementations
/// must treat empty results as normal; nothing here may fail.
pub trait TriggerProvider: Send + Sync {
    /// Triggers matching a task description within a context key
    /// (`executar`, `planejar`, `debug`, ...).
    fn matches(&self, text: &str, context_key: &str) -> Vec<TriggerMatch>;

    /// Injectable context block for the selected matches, or an empty
    /// string when nothing applies.
    fn build_injection(&self, matches: &[TriggerMatch], max_patterns: usize) -> String;

    /// Items of a named checklist, or empty when unknown.
    fn checklist(&self, id: &str) -> Vec<String>;
}

/// Default provider: no patterns, no checklists. Keeps the engine fully
/// self-contained when no pattern library is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTriggers;

impl TriggerProvider for NoopTriggers {
    fn matches(&self, _text: &str, _context_key: &str) -> Vec<TriggerMatch> {
        Vec::new()
    }

    fn build_injection(&self, _matches: &[TriggerMatch], _max_patterns: usize) -> String {
        String::new()
    }

    fn checklist(&self, _id: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Keyword-matching provider over an in-memory [`TriggerTable`].
#[derive(Debug, Clone, Default)]
pub struct StaticTriggers {
    table: TriggerTable,
}

impl StaticTriggers {
    pub fn new(table: TriggerTable) -> Self {
        Self { table }
    }

    fn summary_for(&self, id: &str) -> Option<&str> {
        self.table
            .triggers
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.summary.as_str())
            .filter(|s| !s.is_empty())
    }
}

impl TriggerProvider for StaticTriggers {
    fn matches(&self, text: &str, context_key: &str) -> Vec<TriggerMatch> {
        let normalized = normalize(text);
        let mut matches = Vec::new();

        for trigger in &self.table.triggers {
            if !trigger.contexts.is_empty()
                && !trigger.contexts.iter().any(|c| c == context_key)
            {
                continue;
            }

            let matched: Vec<String> = trigger
                .keywords
                .iter()
                .filter(|kw| keyword_match(&normalized, kw))
                .cloned()
                .collect();

            if !matched.is_empty() {
                matches.push(TriggerMatch {
                    id: trigger.id.clone(),
                    priority: trigger.priority,
                    auto_inject: trigger.auto_inject,
                    checklist: trigger.checklist.clone(),
                    relevance: matched.len(),
                    matched_keywords: matched,
                });
            }
        }

        // Priority ascending, then relevance descending.
        matches.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then(b.relevance.cmp(&a.relevance))
        });
        debug!(count = matches.len(), context_key, "trigger matching done");
        matches
    }

    fn build_injection(&self, matches: &[TriggerMatch], max_patterns: usize) -> String {
        let eligible: Vec<&TriggerMatch> = matches.iter().filter(|m| m.auto_inject).collect();
        if eligible.is_empty() {
            return String::new();
        }

        let selected = &eligible[..eligible.len().min(max_patterns)];
        let mut parts = vec!["=== PADRÕES DO KIT (auto-detectados) ===\n".to_string()];

        for m in selected {
            let Some(summary) = self.summary_for(&m.id) else {
                continue;
            };
            parts.push(format!(
                "--- {} (keywords: {}) ---",
                m.id.to_uppercase(),
                m.matched_keywords.join(", ")
            ));
            parts.push(summary.to_string());
            parts.push(String::new());
        }

        let mut checklist_lines = Vec::new();
        for m in selected {
            let Some(checklist_id) = &m.checklist else {
                continue;
            };
            let items = self.checklist(checklist_id);
            if !items.is_empty() {
                checklist_lines.push(format!("[{}]", m.id));
                for item in items {
                    checklist_lines.push(format!("  - [ ] {item}"));
                }
            }
        }
        if !checklist_lines.is_empty() {
            parts.push("=== CHECKLISTS OBRIGATÓRIOS ===".to_string());
            parts.push(checklist_lines.join("\n"));
        }

        parts.join("\n")
    }

    fn checklist(&self, id: &str) -> Vec<String> {
        self.table.checklists.get(id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TriggerDef;
    use std::collections::HashMap;

    fn table() -> TriggerTable {
        TriggerTable {
            version: "1.0".into(),
            triggers: vec![
                TriggerDef {
                    id: "forms".into(),
                    keywords: vec!["formulário".into(), "input".into()],
                    contexts: vec!["executar".into()],
                    priority: 2,
                    auto_inject: true,
                    checklist: Some("forms-check".into()),
                    summary: "# Padrão de formulários\nUse validação declarativa.".into(),
                },
                TriggerDef {
                    id: "auth".into(),
                    keywords: vec!["login".into(), "senha".into()],
                    contexts: vec![],
                    priority: 1,
                    auto_inject: true,
                    checklist: None,
                    summary: "# Padrão de autenticação".into(),
                },
            ],
            checklists: HashMap::from([(
                "forms-check".into(),
                vec!["validar campos".into(), "mensagens de erro".into()],
            )]),
        }
    }

    #[test]
    fn test_matches_filters_by_context() {
        let provider = StaticTriggers::new(table());
        let matches = provider.matches("criar formulário de login", "planejar");
        // "forms" only applies to executar; "auth" applies everywhere.
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "auth");
    }

    #[test]
    fn test_matches_sorted_by_priority_then_relevance() {
        let provider = StaticTriggers::new(table());
        let matches = provider.matches("formulário de login com input e senha", "executar");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "auth"); // priority 1
        assert_eq!(matches[1].id, "forms");
        assert_eq!(matches[1].relevance, 2);
    }

    #[test]
    fn test_matches_ignores_diacritics() {
        let provider = StaticTriggers::new(table());
        let matches = provider.matches("criar FORMULARIO novo", "executar");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "forms");
    }

    #[test]
    fn test_injection_contains_summary_and_checklists() {
        let provider = StaticTriggers::new(table());
        let matches = provider.matches("formulário de login", "executar");
        let injection = provider.build_injection(&matches, 3);
        assert!(injection.contains("PADRÕES DO KIT"));
        assert!(injection.contains("FORMS"));
        assert!(injection.contains("validação declarativa"));
        assert!(injection.contains("CHECKLISTS OBRIGATÓRIOS"));
        assert!(injection.contains("- [ ] validar campos"));
    }

    #[test]
    fn test_injection_respects_max_patterns() {
        let provider = StaticTriggers::new(table());
        let matches = provider.matches("formulário de login", "executar");
        let injection = provider.build_injection(&matches, 1);
        // Only the highest-priority pattern survives the cap.
        assert!(injection.contains("AUTH"));
        assert!(!injection.contains("FORMS"));
    }

    #[test]
    fn test_empty_results_are_not_errors() {
        let provider = StaticTriggers::new(TriggerTable::default());
        assert!(provider.matches("qualquer texto", "executar").is_empty());
        assert_eq!(provider.build_injection(&[], 3), "");
        assert!(provider.checklist("desconhecido").is_empty());

        let noop = NoopTriggers;
        assert!(noop.matches("texto", "executar").is_empty());
    }
}
