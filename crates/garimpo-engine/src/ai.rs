//! AI-augmented generation: delegate prompt writing to a creator model.
//!
//! These are the engine's only asynchronous entry points and its only
//! fallible ones. The caller opted into external generation, so failures
//! propagate loudly and identify the collaborator; no partially-returned
//! text is ever scored.

use chrono::{DateTime, Utc};
use garimpo_core::{AiOptions, Grade, ModelKind, ScoreReport, SimulationResult,
    VerificationResult};
use garimpo_providers::{creator_by_key, CreatorModel, GatewayRequest, ModelGateway, TokenUsage};
use serde::Serialize;
use tracing::{debug, warn};

use crate::optimize::ScoredPrompt;
use crate::score::deep_score;
use crate::simulate::{estimate_tokens, simulate};
use crate::verify::verify_prompt;
use crate::{Engine, EngineError};

const CREATOR_SYSTEM: &str =
    "Você é um engenheiro de prompts de elite. Gere APENAS o prompt otimizado, sem explicações.";

const REWRITER_SYSTEM: &str =
    "Você é um engenheiro de prompts. Retorne APENAS o prompt otimizado.";

/// The locally-generated prompt the AI output is compared against.
#[derive(Debug, Clone, Serialize)]
pub struct LocalComparison {
    pub prompt: String,
    pub score: u8,
    pub grade: Grade,
}

/// Output of [`Engine::generate_with_ai`].
#[derive(Debug, Clone, Serialize)]
pub struct AiGenerateResult {
    pub prompt: String,
    pub creator: &'static CreatorModel,
    pub model: ModelKind,
    pub score: ScoreReport,
    pub verification: VerificationResult,
    pub simulation: SimulationResult,
    pub token_estimate: u32,
    pub ai_tokens: TokenUsage,
    pub ai_latency_ms: u64,
    pub local_comparison: LocalComparison,
    pub improvement_over_local: i16,
    pub timestamp: DateTime<Utc>,
}

/// Output of [`Engine::optimize_with_ai`].
#[derive(Debug, Clone, Serialize)]
pub struct AiOptimizeResult {
    pub original: ScoredPrompt,
    pub optimized: ScoredPrompt,
    pub creator: &'static CreatorModel,
    pub model: ModelKind,
    pub improvement: i16,
    pub improvement_pct: i32,
    pub ai_tokens: TokenUsage,
    pub ai_latency_ms: u64,
}

impl Engine {
    /// Ask a creator model to write the prompt, then score the result and
    /// compare it against the local pipeline's output for the same
    /// objective.
    pub async fn generate_with_ai(
        &self,
        objective: &str,
        options: &AiOptions,
        gateway: &dyn ModelGateway,
    ) -> Result<AiGenerateResult, EngineError> {
        let creator = resolve_creator(&options.creator)?;
        let meta_prompt = self.build_meta_prompt(objective, &options.base);

        let request = GatewayRequest::new(creator.provider, creator.model, meta_prompt)
            .with_system(CREATOR_SYSTEM)
            .with_temperature(0.4);
        let response = gateway.call(request).await?;
        debug!(
            creator = creator.key,
            latency_ms = response.latency_ms,
            "creator model answered"
        );

        let prompt = response.content.trim().to_string();
        let score = deep_score(&prompt);
        let verification = verify_prompt(&prompt);
        let simulation = simulate(&prompt, options.base.target_model);
        let token_estimate = estimate_tokens(&prompt);

        let local = self.generate(objective, &options.base);
        let improvement_over_local = i16::from(score.total) - i16::from(local.score.total);

        Ok(AiGenerateResult {
            prompt,
            creator,
            model: options.base.target_model,
            score,
            verification,
            simulation,
            token_estimate,
            ai_tokens: response.tokens,
            ai_latency_ms: response.latency_ms,
            local_comparison: LocalComparison {
                prompt: local.prompt_text,
                score: local.score.total,
                grade: local.score.grade,
            },
            improvement_over_local,
            timestamp: Utc::now(),
        })
    }

    /// Ask a creator model to rewrite a weak prompt, feeding it the deep
    /// scorer's diagnosis of the original.
    pub async fn optimize_with_ai(
        &self,
        raw: &str,
        options: &AiOptions,
        gateway: &dyn ModelGateway,
    ) -> Result<AiOptimizeResult, EngineError> {
        let creator = resolve_creator(&options.creator)?;
        let target = options.base.target_model;
        let profile = target.profile();
        let original_score = deep_score(raw);

        let problems: Vec<String> = original_score
            .criteria
            .iter()
            .map(|c| format!("- {}: {}/100 — {}", c.label, c.score, c.detail))
            .collect();
        let meta_prompt = format!(
            "Você é um engenheiro de prompts de elite. Reescreva o prompt abaixo para ser \
             MUITO mais eficaz.\n\n\
             ## Prompt Original\n{raw}\n\n\
             ## Modelo Alvo\n{name} (formato ideal: {dialect})\nPontos fortes: {strengths}\n\n\
             ## Problemas Detectados no Original\n\
             - Score atual: {total}/100 ({grade})\n{problems}\n\n\
             ## Instruções\n\
             1. Mantenha o MESMO objetivo, mas otimize tudo\n\
             2. Use o formato ideal para {name}\n\
             3. Adicione contexto, constraints, e formato de saída\n\
             4. Elimine ambiguidades\n\
             5. Retorne APENAS o prompt reescrito, sem explicações\n\n\
             Prompt otimizado:",
            raw = raw,
            name = profile.name,
            dialect = target.dialect().as_str(),
            strengths = profile.strengths,
            total = original_score.total,
            grade = original_score.grade.as_str(),
            problems = problems.join("\n"),
        );

        let request = GatewayRequest::new(creator.provider, creator.model, meta_prompt)
            .with_system(REWRITER_SYSTEM)
            .with_temperature(0.3);
        let response = gateway.call(request).await?;

        let optimized_prompt = response.content.trim().to_string();
        let optimized_score = deep_score(&optimized_prompt);
        let improvement = i16::from(optimized_score.total) - i16::from(original_score.total);
        let improvement_pct = if original_score.total > 0 {
            (f64::from(improvement) / f64::from(original_score.total) * 100.0).round() as i32
        } else {
            0
        };

        Ok(AiOptimizeResult {
            original: ScoredPrompt {
                prompt: raw.to_string(),
                score: original_score,
            },
            optimized: ScoredPrompt {
                prompt: optimized_prompt,
                score: optimized_score,
            },
            creator,
            model: target,
            improvement,
            improvement_pct,
            ai_tokens: response.tokens,
            ai_latency_ms: response.latency_ms,
        })
    }
}

fn resolve_creator(key: &str) -> Result<&'static CreatorModel, EngineError> {
    creator_by_key(key).ok_or_else(|| {
        warn!(creator = key, "unknown creator model requested");
        EngineError::UnknownCreator {
            creator: key.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use garimpo_providers::fakes::FakeGateway;

    const AI_REPLY: &str = "<context>\nProjeto: Loja. Stack: React.\n</context>\n\n<task>\n\
        criar componente de botão de login com estados de loading e erro\n</task>\n\n<format>\n\
        Código funcional\n</format>\n\n<verify>\nAntes de responder, verifique:\n1. Está \
        completo?\n</verify>";

    #[tokio::test]
    async fn test_generate_with_ai_scores_gateway_reply() {
        let engine = Engine::isolated();
        let gateway = FakeGateway::replying(AI_REPLY);
        let result = engine
            .generate_with_ai("criar botão de login", &AiOptions::default(), &gateway)
            .await
            .unwrap();

        assert_eq!(result.creator.key, "gemini");
        assert_eq!(result.prompt, AI_REPLY);
        assert!(result.score.total > 0);
        assert_eq!(
            result.improvement_over_local,
            i16::from(result.score.total) - i16::from(result.local_comparison.score)
        );
        // The meta-prompt went to the creator's provider/model.
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].provider, "google");
        assert_eq!(calls[0].model, "gemini-2.5-flash");
        assert!(calls[0].prompt.contains("## Objetivo do Usuário"));
    }

    #[tokio::test]
    async fn test_generate_with_ai_rejects_unknown_creator() {
        let engine = Engine::isolated();
        let gateway = FakeGateway::replying("x");
        let options = AiOptions {
            creator: "gpt-sininho".to_string(),
            ..Default::default()
        };
        let err = engine
            .generate_with_ai("criar botão", &options, &gateway)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownCreator { .. }));
        assert!(err.to_string().contains("gpt-sininho"));
        // Nothing reached the gateway.
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates_with_provider() {
        let engine = Engine::isolated();
        let gateway = FakeGateway::failing();
        let err = engine
            .generate_with_ai("criar botão", &AiOptions::default(), &gateway)
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("gateway"));
        let EngineError::Gateway(inner) = err else {
            panic!("expected gateway error");
        };
        assert_eq!(inner.provider(), "google");
    }

    #[tokio::test]
    async fn test_optimize_with_ai_reports_improvement() {
        let engine = Engine::isolated();
        let gateway = FakeGateway::replying(AI_REPLY);
        let result = engine
            .optimize_with_ai("erro", &AiOptions::default(), &gateway)
            .await
            .unwrap();
        assert!(result.optimized.score.total > result.original.score.total);
        assert!(result.improvement > 0);
        let calls = gateway.calls();
        assert!(calls[0].prompt.contains("## Problemas Detectados no Original"));
        assert!(calls[0].prompt.contains("## Prompt Original\nerro"));
    }
}
