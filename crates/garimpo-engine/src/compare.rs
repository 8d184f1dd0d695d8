//! A/B comparison of two prompts.

use garimpo_core::{ComparedPrompt, ComparisonResult, CriterionComparison, CriterionKey,
    ModelKind, Winner};

use crate::score::deep_score;
use crate::simulate::{estimate_tokens, simulate};

/// Deep-score and simulate both prompts independently, then report the
/// per-criterion deltas and the overall winner by total.
pub fn compare(prompt_a: &str, prompt_b: &str, target: ModelKind) -> ComparisonResult {
    let score_a = deep_score(prompt_a);
    let score_b = deep_score(prompt_b);
    let sim_a = simulate(prompt_a, target);
    let sim_b = simulate(prompt_b, target);

    let criteria = CriterionKey::ALL
        .iter()
        .map(|key| {
            let a = score_a.criterion(*key).score;
            let b = score_b.criterion(*key).score;
            CriterionComparison {
                key: *key,
                label: key.label(),
                a,
                b,
                diff: i16::from(a) - i16::from(b),
                winner: winner_of(a, b),
            }
        })
        .collect();

    let winner = winner_of(score_a.total, score_b.total);
    let diff = score_a.total.abs_diff(score_b.total);

    ComparisonResult {
        prompt_a: ComparedPrompt {
            score: score_a,
            simulation: sim_a,
            length: prompt_a.len(),
            tokens: estimate_tokens(prompt_a),
        },
        prompt_b: ComparedPrompt {
            score: score_b,
            simulation: sim_b,
            length: prompt_b.len(),
            tokens: estimate_tokens(prompt_b),
        },
        criteria,
        winner,
        diff,
    }
}

fn winner_of(a: u8, b: u8) -> Winner {
    if a > b {
        Winner::A
    } else if b > a {
        Winner::B
    } else {
        Winner::Tie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG: &str = "<context>\nProjeto: Loja. Stack: React.\n</context>\n\n<task>\ncriar \
        componente de tabela com paginação e busca\n</task>\n\n<format>\nCódigo funcional\n\
        </format>\n\n<verify>\nAntes de responder, verifique:\n1. Está completo?\n</verify>";

    #[test]
    fn test_winner_follows_totals() {
        let result = compare(STRONG, "erro", ModelKind::Claude);
        assert_eq!(result.winner, Winner::A);
        let result = compare("erro", STRONG, ModelKind::Claude);
        assert_eq!(result.winner, Winner::B);
    }

    #[test]
    fn test_identical_prompts_tie() {
        let result = compare(STRONG, STRONG, ModelKind::Gpt);
        assert_eq!(result.winner, Winner::Tie);
        assert_eq!(result.diff, 0);
        for c in &result.criteria {
            assert_eq!(c.diff, 0);
            assert_eq!(c.winner, Winner::Tie);
        }
    }

    #[test]
    fn test_diff_fields_are_exact() {
        let result = compare(STRONG, "erro", ModelKind::Claude);
        assert_eq!(
            result.diff,
            result.prompt_a.score.total.abs_diff(result.prompt_b.score.total)
        );
        for c in &result.criteria {
            assert_eq!(c.diff, i16::from(c.a) - i16::from(c.b));
        }
        assert_eq!(result.criteria.len(), 6);
    }

    #[test]
    fn test_both_sides_fully_simulated() {
        let result = compare(STRONG, "erro", ModelKind::Deepseek);
        assert_eq!(result.prompt_a.simulation.target, ModelKind::Deepseek);
        assert_eq!(result.prompt_b.simulation.target, ModelKind::Deepseek);
        assert_eq!(result.prompt_b.tokens, estimate_tokens("erro"));
    }
}
