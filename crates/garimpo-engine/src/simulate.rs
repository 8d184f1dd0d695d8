//! Effectiveness prediction: token cost, model fit ranking, success
//! probability and risk factors, all derived from the rendered text.

use garimpo_core::{ComplexityLevel, CostTier, CriterionKey, Dialect, ModelFit, ModelKind,
    SimulationResult};
use tracing::debug;

use crate::classify::detect_complexity;
use crate::score::deep_score;

/// Rough token estimate: one token per four characters.
pub fn estimate_tokens(text: &str) -> u32 {
    (text.len() as u32).div_ceil(4)
}

fn dialect_matches(dialect: Dialect, prompt: &str) -> bool {
    match dialect {
        Dialect::Xml => prompt.contains('<'),
        Dialect::JsonSchema => prompt.contains('{'),
        Dialect::Markdown => prompt.contains('#'),
        Dialect::Concise => prompt.len() < 500,
        Dialect::FewShot => prompt.contains("Exemplo"),
    }
}

fn fit_score(
    model: ModelKind,
    prompt: &str,
    token_estimate: u32,
    complexity: ComplexityLevel,
    score_total: u8,
) -> u8 {
    let profile = model.profile();
    let mut fit = 0u32;

    // Token headroom, three tiers.
    let max = f64::from(profile.max_tokens);
    let estimate = f64::from(token_estimate);
    if estimate < max * 0.1 {
        fit += 30;
    } else if estimate < max * 0.5 {
        fit += 20;
    } else {
        fit += 10;
    }

    // Does the text already speak this model's dialect?
    if dialect_matches(model.dialect(), prompt) {
        fit += 25;
    } else {
        fit += 10;
    }

    // Complexity / cost-tier affinity.
    fit += match (complexity, profile.cost_tier) {
        (ComplexityLevel::Critical, CostTier::Premium) => 25,
        (ComplexityLevel::Simple, CostTier::Free) => 25,
        (ComplexityLevel::Medium, _) => 20,
        _ => 15,
    };

    // Base quality contribution.
    fit += (f64::from(score_total) * 0.2).round() as u32;

    fit.min(100) as u8
}

/// Predict how a prompt will perform against `target`, ranking every known
/// model by fit along the way.
pub fn simulate(prompt: &str, target: ModelKind) -> SimulationResult {
    let score = deep_score(prompt);
    let token_estimate = estimate_tokens(prompt);
    let complexity = detect_complexity(prompt);
    let profile = target.profile();

    let mut ranking: Vec<ModelFit> = ModelKind::ALL
        .iter()
        .map(|model| {
            let mp = model.profile();
            ModelFit {
                rank: 0,
                model: *model,
                name: mp.name,
                fit_score: fit_score(*model, prompt, token_estimate, complexity, score.total),
                cost_tier: mp.cost_tier,
                max_tokens: mp.max_tokens,
            }
        })
        .collect();
    ranking.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
    for (idx, fit) in ranking.iter_mut().enumerate() {
        fit.rank = idx + 1;
    }

    let target_fit = ranking
        .iter()
        .find(|f| f.model == target)
        .expect("target is always ranked")
        .fit_score;
    let success_probability =
        (f64::from(score.total) * 0.6 + f64::from(target_fit) * 0.4).round() as u8;

    let mut risks = Vec::new();
    if score.total < 50 {
        risks.push("Score baixo — prompt pode gerar resultado impreciso".to_string());
    }
    if f64::from(token_estimate) > f64::from(profile.max_tokens) * 0.8 {
        risks.push("Prompt próximo do limite de tokens do modelo".to_string());
    }
    if score.criterion(CriterionKey::Clarity).score < 40 {
        risks.push("Objetivo vago — IA pode interpretar errado".to_string());
    }
    if score.criterion(CriterionKey::AntiAmbiguity).score < 25 {
        risks.push("Alta ambiguidade — múltiplas interpretações possíveis".to_string());
    }
    if score.criterion(CriterionKey::Format).score < 25 {
        risks.push("Sem formato definido — saída pode ser inconsistente".to_string());
    }

    let mut suggestions = Vec::new();
    let best = &ranking[0];
    if target_fit < best.fit_score.saturating_sub(10) {
        suggestions.push(format!(
            "Considere usar {} (fit {}) em vez de {} (fit {})",
            best.name, best.fit_score, profile.name, target_fit
        ));
    }
    if score.total < 70 {
        suggestions.push("Use `garimpo optimize` para melhorar o prompt antes de executar".to_string());
    }
    if !prompt.contains("<verify>") && !prompt.contains("verifique") {
        suggestions.push("Adicione bloco de verificação para auto-correção".to_string());
    }

    debug!(
        target = target.as_str(),
        total = score.total,
        success_probability,
        "simulation complete"
    );

    SimulationResult {
        score,
        token_estimate,
        target,
        profile,
        success_probability,
        risks,
        suggestions,
        ranking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML_PROMPT: &str = "<context>\nProjeto: Loja. Stack: React.\n</context>\n\n<task>\n\
        criar componente de tabela com paginação e busca\n</task>\n\n<format>\nCódigo funcional\n\
        </format>\n\n<verify>\nAntes de responder, verifique:\n1. Está completo?\n</verify>";

    #[test]
    fn test_token_estimate_rounds_up() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
    }

    #[test]
    fn test_ranking_is_dense_and_sorted() {
        let sim = simulate(XML_PROMPT, ModelKind::Claude);
        assert_eq!(sim.ranking.len(), ModelKind::ALL.len());
        for (idx, fit) in sim.ranking.iter().enumerate() {
            assert_eq!(fit.rank, idx + 1);
            if idx > 0 {
                assert!(sim.ranking[idx - 1].fit_score >= fit.fit_score);
            }
        }
    }

    #[test]
    fn test_fit_scores_clamped() {
        let sim = simulate(XML_PROMPT, ModelKind::Claude);
        for fit in &sim.ranking {
            assert!(fit.fit_score <= 100);
        }
        assert!(sim.success_probability <= 100);
    }

    #[test]
    fn test_success_probability_blends_score_and_fit() {
        let sim = simulate(XML_PROMPT, ModelKind::Claude);
        let expected = (f64::from(sim.score.total) * 0.6
            + f64::from(sim.fit_for(ModelKind::Claude).fit_score) * 0.4)
            .round() as u8;
        assert_eq!(sim.success_probability, expected);
    }

    #[test]
    fn test_weak_prompt_collects_risks_and_optimize_suggestion() {
        let sim = simulate("erro", ModelKind::Claude);
        assert!(sim.risks.iter().any(|r| r.contains("Score baixo")));
        assert!(sim.risks.iter().any(|r| r.contains("Objetivo vago")));
        assert!(sim
            .suggestions
            .iter()
            .any(|s| s.contains("`garimpo optimize`")));
        assert!(sim
            .suggestions
            .iter()
            .any(|s| s.contains("bloco de verificação")));
    }

    #[test]
    fn test_verified_prompt_skips_verify_suggestion() {
        let sim = simulate(XML_PROMPT, ModelKind::Claude);
        assert!(!sim
            .suggestions
            .iter()
            .any(|s| s.contains("bloco de verificação")));
    }
}
