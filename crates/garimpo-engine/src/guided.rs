//! Guided mode: structured Q&A turned into an enriched objective.

use garimpo_core::{GenerateOptions, TaskType};
use serde::{Deserialize, Serialize};

use crate::classify::detect_task_type;
use crate::engine::GenerateResult;
use crate::Engine;

/// One elicitation question for a task type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuidedQuestion {
    pub key: &'static str,
    pub question: &'static str,
}

/// Caller-supplied answer, keyed like the question it answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidedAnswer {
    pub key: String,
    pub answer: String,
}

impl GuidedAnswer {
    pub fn new(key: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            answer: answer.into(),
        }
    }
}

/// The fixed question set for a task type, in synthesis order.
pub fn guided_questions(task_type: TaskType) -> &'static [GuidedQuestion] {
    match task_type {
        TaskType::Code => &[
            GuidedQuestion {
                key: "objetivo",
                question: "O que exatamente precisa ser criado? Descreva a funcionalidade.",
            },
            GuidedQuestion {
                key: "contexto",
                question: "Em qual módulo/tela/arquivo isso se encaixa?",
            },
            GuidedQuestion {
                key: "stack",
                question: "Qual stack/tecnologias envolvidas? (React, Node, etc.)",
            },
            GuidedQuestion {
                key: "refs",
                question: "Tem código/arquivo de referência? (cole trecho ou caminho)",
            },
            GuidedQuestion {
                key: "restricoes",
                question: "Alguma restrição ou padrão obrigatório?",
            },
        ],
        TaskType::Debug => &[
            GuidedQuestion {
                key: "erro",
                question: "Qual é o erro exato? (mensagem, stack trace, comportamento)",
            },
            GuidedQuestion {
                key: "esperado",
                question: "O que deveria acontecer corretamente?",
            },
            GuidedQuestion {
                key: "contexto",
                question: "Em qual tela/módulo/função ocorre?",
            },
            GuidedQuestion {
                key: "refs",
                question: "Cole o trecho de código com o problema ou o log de erro.",
            },
            GuidedQuestion {
                key: "tentativas",
                question: "Já tentou algo para resolver? O que?",
            },
        ],
        TaskType::Tests => &[
            GuidedQuestion {
                key: "alvo",
                question: "O que precisa ser testado? (função, componente, endpoint)",
            },
            GuidedQuestion {
                key: "tipo_teste",
                question: "Que tipo de teste? (unitário, integração, e2e)",
            },
            GuidedQuestion {
                key: "framework",
                question: "Qual framework de teste? (Jest, Vitest, Playwright, etc.)",
            },
            GuidedQuestion {
                key: "refs",
                question: "Cole o código que será testado como referência.",
            },
            GuidedQuestion {
                key: "cenarios",
                question: "Cenários específicos a cobrir? (happy path, edge cases, erros)",
            },
        ],
        TaskType::Refactor => &[
            GuidedQuestion {
                key: "alvo",
                question: "O que precisa ser refatorado? (arquivo, função, módulo)",
            },
            GuidedQuestion {
                key: "problema",
                question: "Qual o problema atual? (lento, duplicado, confuso, acoplado)",
            },
            GuidedQuestion {
                key: "refs",
                question: "Cole o código atual que precisa ser refatorado.",
            },
            GuidedQuestion {
                key: "padrao",
                question: "Tem preferência de padrão ou abordagem? (SOLID, DRY, etc.)",
            },
            GuidedQuestion {
                key: "restricoes",
                question: "Alguma restrição? (não quebrar API, manter compatibilidade)",
            },
        ],
        TaskType::Docs => &[
            GuidedQuestion {
                key: "alvo",
                question: "O que precisa ser documentado? (API, componente, processo)",
            },
            GuidedQuestion {
                key: "publico",
                question: "Para quem é a documentação? (devs, usuários, stakeholders)",
            },
            GuidedQuestion {
                key: "formato",
                question: "Qual formato? (README, JSDoc, Swagger, guia, tutorial)",
            },
            GuidedQuestion {
                key: "refs",
                question: "Cole o código/trecho que será documentado.",
            },
            GuidedQuestion {
                key: "estilo",
                question: "Tem referência de estilo? (formal, técnico, didático)",
            },
        ],
        TaskType::Architecture => &[
            GuidedQuestion {
                key: "decisao",
                question: "Qual decisão arquitetural precisa ser tomada?",
            },
            GuidedQuestion {
                key: "opcoes",
                question: "Quais alternativas estão sendo consideradas?",
            },
            GuidedQuestion {
                key: "restricoes",
                question: "Restrições do projeto? (prazo, custo, equipe, escala)",
            },
            GuidedQuestion {
                key: "refs",
                question: "Tem documentação/código atual de referência? Cole ou descreva.",
            },
            GuidedQuestion {
                key: "criterios",
                question: "Critérios de decisão? (performance, manutenção, custo, DX)",
            },
        ],
    }
}

impl Engine {
    /// Concatenate answered question stems into a multi-line objective and
    /// run the normal pipeline on it. Unanswered questions are silently
    /// skipped; the `refs` answer becomes the prompt's reference material.
    pub fn generate_from_answers(
        &self,
        answers: &[GuidedAnswer],
        options: &GenerateOptions,
    ) -> GenerateResult {
        let answered: Vec<(&str, &str)> = answers
            .iter()
            .filter(|a| !a.answer.trim().is_empty())
            .map(|a| (a.key.as_str(), a.answer.trim()))
            .collect();

        let task_type = options.task_type.unwrap_or_else(|| {
            let joined: Vec<&str> = answered.iter().map(|(_, answer)| *answer).collect();
            detect_task_type(&joined.join(" "))
        });

        let mut parts = Vec::new();
        for question in guided_questions(task_type) {
            if let Some((_, answer)) = answered.iter().find(|(key, _)| *key == question.key) {
                let stem = question.question.split('?').next().unwrap_or(question.question);
                parts.push(format!("{stem}: {answer}"));
            }
        }
        let objective = parts.join("\n");

        let references = answered
            .iter()
            .find(|(key, _)| *key == "refs")
            .map(|(_, answer)| answer.to_string());

        let mut derived = options.clone();
        derived.task_type = Some(task_type);
        derived.references = references;
        self.generate(&objective, &derived)
    }
}
