use std::collections::HashMap;

use serde::{Deserialize, Serialize};

fn default_priority() -> u32 {
    99
}

/// One pattern trigger: keywords that activate it, the contexts it applies
/// to, and the summary text injected into prompts when it fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerDef {
    pub id: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Context keys this trigger applies to; empty means all contexts.
    #[serde(default)]
    pub contexts: Vec<String>,
    /// Lower fires first.
    #[serde(default = "default_priority")]
    pub priority: u32,
    #[serde(default)]
    pub auto_inject: bool,
    /// Id of an associated checklist in [`TriggerTable::checklists`].
    #[serde(default)]
    pub checklist: Option<String>,
    /// Compact pattern summary injected into the prompt.
    #[serde(default)]
    pub summary: String,
}

/// Immutable trigger configuration. Loadable from JSON; owned by the caller
/// and passed at construction (no module-level cache, no TTL).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerTable {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub triggers: Vec<TriggerDef>,
    #[serde(default)]
    pub checklists: HashMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_with_defaults() {
        let json = r#"{
            "version": "1.0",
            "triggers": [
                { "id": "golden-model", "keywords": ["modelo", "entidade"] }
            ],
            "checklists": { "golden-model": ["campo id", "timestamps"] }
        }"#;
        let table: TriggerTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.triggers.len(), 1);
        assert_eq!(table.triggers[0].priority, 99);
        assert!(!table.triggers[0].auto_inject);
        assert_eq!(table.checklists["golden-model"].len(), 2);
    }
}
