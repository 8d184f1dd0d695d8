use serde::{Deserialize, Serialize};

use crate::{FrameworkKind, ModelKind, TaskType, Technique};

/// Flat record handed to the external prompt-bank persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: String,
    pub name: String,
    pub task_type: TaskType,
    pub framework: FrameworkKind,
    pub target_model: ModelKind,
    pub technique: Technique,
    pub score: u8,
    pub usage_count: u32,
    pub prompt_text: String,
    /// ISO date (YYYY-MM-DD) supplied by the caller.
    pub created_at: String,
}

/// In-memory bank of high-scoring prompts. Persistence belongs to an
/// external collaborator; this type only defines the contract it consumes.
#[derive(Debug, Clone, Default)]
pub struct PromptBank {
    records: Vec<PromptRecord>,
}

impl PromptBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, assigning the next sequential id (`tp_001`, ...).
    pub fn save(&mut self, mut record: PromptRecord) -> &PromptRecord {
        record.id = format!("tp_{:03}", self.records.len() + 1);
        if record.usage_count == 0 {
            record.usage_count = 1;
        }
        if record.name.is_empty() {
            record.name = record.prompt_text.chars().take(50).collect::<String>();
            record.name = record.name.trim().to_string();
        }
        self.records.push(record);
        self.records.last().expect("just pushed")
    }

    /// Best records, optionally filtered by task type, highest score first.
    pub fn top_by_type(&self, task_type: Option<TaskType>, limit: usize) -> Vec<&PromptRecord> {
        let mut out: Vec<&PromptRecord> = self
            .records
            .iter()
            .filter(|r| task_type.map_or(true, |t| r.task_type == t))
            .collect();
        out.sort_by(|a, b| b.score.cmp(&a.score));
        out.truncate(limit);
        out
    }

    /// Bump the usage counter for a stored prompt. Returns the updated
    /// record, or `None` when the id is unknown.
    pub fn touch(&mut self, id: &str) -> Option<&PromptRecord> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.usage_count += 1;
        Some(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
