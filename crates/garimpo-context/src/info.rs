use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ContextSnapshot;

/// Small set of fields extracted from the context blobs by line-prefix
/// matching. A field the context does not declare stays `None` and is
/// simply omitted from rendered prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: Option<String>,
    pub stack: Option<String>,
    pub phase: Option<String>,
    pub last_task: Option<String>,
}

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"(?i)(?:nome|projeto|name):\s*(.+)").unwrap();
    static ref STACK_RE: Regex = Regex::new(r"(?i)(?:stack|tecnologia|tech):\s*(.+)").unwrap();
    static ref PHASE_RE: Regex = Regex::new(r"(?i)(?:fase atual|fase):\s*(.+)").unwrap();
    static ref TASK_RE: Regex = Regex::new(r"(?i)(?:última tarefa|tarefa):\s*(.+)").unwrap();
}

/// Pull project name/stack from `PROJECT.md` text and phase/last-task from
/// `STATE.md` text. Placeholder dashes ("—") count as absent.
pub fn extract_project_info(ctx: &ContextSnapshot) -> ProjectInfo {
    ProjectInfo {
        name: capture(&NAME_RE, &ctx.project),
        stack: capture(&STACK_RE, &ctx.project),
        phase: capture(&PHASE_RE, &ctx.state),
        last_task: capture(&TASK_RE, &ctx.state),
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    let value = re.captures(text)?.get(1)?.as_str().trim().to_string();
    if value.is_empty() || value == "—" {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(project: &str, state: &str) -> ContextSnapshot {
        ContextSnapshot {
            project: project.to_string(),
            state: state.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_extracts_all_fields() {
        let ctx = snapshot(
            "# Projeto\nNome: Loja Virtual\nStack: React + Node",
            "Fase atual: MVP\nÚltima tarefa: checkout",
        );
        let info = extract_project_info(&ctx);
        assert_eq!(info.name.as_deref(), Some("Loja Virtual"));
        assert_eq!(info.stack.as_deref(), Some("React + Node"));
        assert_eq!(info.phase.as_deref(), Some("MVP"));
        assert_eq!(info.last_task.as_deref(), Some("checkout"));
    }

    #[test]
    fn test_prefixes_are_case_insensitive() {
        let ctx = snapshot("NOME: Painel\ntech: Vue", "fase: beta");
        let info = extract_project_info(&ctx);
        assert_eq!(info.name.as_deref(), Some("Painel"));
        assert_eq!(info.stack.as_deref(), Some("Vue"));
        assert_eq!(info.phase.as_deref(), Some("beta"));
    }

    #[test]
    fn test_missing_and_placeholder_fields_are_none() {
        let ctx = snapshot("sem metadados", "Fase: —");
        let info = extract_project_info(&ctx);
        assert_eq!(info, ProjectInfo::default());
    }
}
