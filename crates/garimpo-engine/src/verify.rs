//! Rule-based prompt verification.

use garimpo_core::{CriterionKey, VerificationResult};

use crate::score::deep_score;

/// Minimum prompt length before the "too short" issue fires.
const MIN_PROMPT_LEN: usize = 80;

/// Criterion floors checked in report order, with the issue raised when a
/// score falls below its floor and the canned suggestion paired with it.
const FLOORS: [(CriterionKey, u8, &str, &str); 5] = [
    (
        CriterionKey::Clarity,
        40,
        "Objetivo não está claramente definido",
        "Adicione um objetivo específico e mensurável com verbo de ação",
    ),
    (
        CriterionKey::Context,
        30,
        "Falta contexto do projeto",
        "Inclua contexto: projeto, stack, fase, módulo afetado",
    ),
    (
        CriterionKey::Format,
        25,
        "Formato de saída não definido",
        "Defina o formato esperado (código, markdown, JSON, lista)",
    ),
    (
        CriterionKey::Specificity,
        30,
        "Prompt muito vago — adicione detalhes técnicos",
        "Adicione nomes de arquivos, funções, tecnologias específicas",
    ),
    (
        CriterionKey::AntiAmbiguity,
        25,
        "Alta ambiguidade — adicione restrições ou exemplos",
        "Adicione exemplos, restrições negativas (não faça X), ou referências concretas",
    ),
];

/// Run the deep scorer and derive human-readable issues and suggestions.
/// `ok` iff no criterion falls under its floor and the text is long enough.
pub fn verify_prompt(prompt: &str) -> VerificationResult {
    let report = deep_score(prompt);
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    for (key, floor, issue, suggestion) in FLOORS {
        if report.criterion(key).score < floor {
            issues.push(issue.to_string());
            suggestions.push(suggestion.to_string());
        }
    }

    if prompt.len() < MIN_PROMPT_LEN {
        issues.push("Prompt muito curto para garantir qualidade".to_string());
        suggestions.push("Expanda com contexto, restrições e formato de saída".to_string());
    }

    VerificationResult {
        ok: issues.is_empty(),
        score: report.total,
        grade: report.grade,
        issues,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_fails_with_objective_and_length_issues() {
        let result = verify_prompt("");
        assert!(!result.ok);
        assert!(result
            .issues
            .iter()
            .any(|i| i.contains("Objetivo não está claramente definido")));
        assert!(result.issues.iter().any(|i| i.contains("muito curto")));
        assert_eq!(result.issues.len(), result.suggestions.len());
    }

    #[test]
    fn test_structured_prompt_passes() {
        let prompt = "<context>\nProjeto: Loja. Stack: React.\n</context>\n\n<task>\ncriar \
                      componente de tabela com paginação, busca e ordenação\n</task>\n\n\
                      <format>\nCódigo funcional pronto para uso\n</format>\n\n<verify>\nAntes \
                      de responder, verifique:\n1. O código segue os padrões do projeto?\n\
                      </verify>\n\n<clarification>\nSe falta informação, pergunte. Por exemplo, \
                      o arquivo Tabela.tsx.\n</clarification>";
        let result = verify_prompt(prompt);
        assert!(result.ok, "unexpected issues: {:?}", result.issues);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_short_but_clear_prompt_only_reports_relevant_issues() {
        let result = verify_prompt("Tarefa: criar botão de login no form de cadastro");
        assert!(!result.ok);
        // Clear objective: no clarity issue, but short + missing context.
        assert!(!result.issues.iter().any(|i| i.contains("Objetivo")));
        assert!(result.issues.iter().any(|i| i.contains("muito curto")));
    }
}
