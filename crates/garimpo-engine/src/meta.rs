//! Meta-prompting: the instruction sheet handed to a creator model when
//! prompt writing is delegated through the gateway.

use garimpo_core::{Dialect, FrameworkKind, GenerateOptions, Technique};

use crate::classify::{detect_complexity, detect_task_type, select_framework, select_technique};
use crate::Engine;

fn dialect_instructions(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Xml => {
            "Use XML tags: <context>, <objective>, <style>, <tone>, <audience>, \
             <response_format>, <constraints>, <verify>. Claude responde melhor a XML tags \
             explícitas."
        }
        Dialect::JsonSchema => {
            "Use JSON estruturado com campos: context, task, style, tone, audience, \
             expected_output, constraints. GPT responde melhor a structured output."
        }
        Dialect::Markdown => {
            "Use Markdown com headers: # Tarefa, ## Contexto, ## Estilo, ## Formato de Saída, \
             ## Restrições. Gemini responde bem a markdown estruturado com long context."
        }
        Dialect::Concise => {
            "Seja DIRETO e CONCISO. Formato: Contexto (1 linha), Tarefa (1 linha), Output \
             (1 linha), Restrição (1 linha). DeepSeek é técnico e direto."
        }
        Dialect::FewShot => {
            "Use formato few-shot: ### Instruções, Contexto, Tarefa, ### Exemplo de saída \
             esperada, ### Execute. Groq/Llama responde melhor com exemplos."
        }
    }
}

fn technique_instructions(technique: Technique) -> &'static str {
    match technique {
        Technique::ZeroShot => "Não adicione instruções extras de raciocínio.",
        Technique::FewShotCot => {
            "Adicione ao final: \"Pense passo a passo antes de responder.\""
        }
        Technique::TreeOfThought => {
            "Adicione ao final: \"Considere pelo menos 2 abordagens. Analise prós e contras. \
             Escolha a melhor.\""
        }
        Technique::SelfConsistency => {
            "Adicione ao final: \"Gere 3 soluções independentes. Compare e apresente a mais \
             robusta.\""
        }
    }
}

fn framework_skeleton(kind: FrameworkKind) -> &'static str {
    match kind {
        FrameworkKind::Costar => "Estruture com: Context, Objective, Style, Tone, Audience, Response",
        FrameworkKind::Rtf => "Estruture com: Role, Task, Format",
        FrameworkKind::Care => "Estruture com: Context, Action, Result, Examples",
    }
}

impl Engine {
    /// Build the meta-prompt asking a creator model to write the most
    /// effective prompt for `objective`, tuned to the configured target
    /// model, framework and technique.
    pub fn build_meta_prompt(&self, objective: &str, options: &GenerateOptions) -> String {
        let target = options.target_model;
        let profile = target.profile();
        let task_type = options.task_type.unwrap_or_else(|| detect_task_type(objective));
        let technique = options
            .technique
            .unwrap_or_else(|| select_technique(detect_complexity(objective)));
        let framework = options.framework.unwrap_or_else(|| select_framework(task_type));

        let snapshot = self.snapshot_for(options);
        let info = garimpo_context::extract_project_info(&snapshot);
        let mut ctx_lines = Vec::new();
        if let Some(name) = &info.name {
            ctx_lines.push(format!("- Projeto: {name}"));
        }
        if let Some(stack) = &info.stack {
            ctx_lines.push(format!("- Stack: {stack}"));
        }
        if let Some(phase) = &info.phase {
            ctx_lines.push(format!("- Fase: {phase}"));
        }
        if snapshot.has_kit() {
            ctx_lines.push("- Kit de componentes: sim (KIT.md)".to_string());
        }
        let ctx_block = if ctx_lines.is_empty() {
            "- Projeto em desenvolvimento".to_string()
        } else {
            ctx_lines.join("\n")
        };

        let matches = self.triggers().matches(objective, "executar");
        let trigger_block = if matches.is_empty() {
            String::new()
        } else {
            format!(
                "\n## Padrões Detectados\n{}\n",
                self.triggers().build_injection(&matches, 3)
            )
        };

        format!(
            "Você é um engenheiro de prompts especialista. Sua tarefa é criar o prompt MAIS \
             EFICAZ possível.\n\n\
             ## Objetivo do Usuário\n{objective}\n\n\
             ## Contexto do Projeto\n{ctx_block}\n{trigger_block}\
             ## Modelo Alvo\n\
             - Modelo: {name}\n\
             - Contexto máximo: {max_tokens} tokens\n\
             - Pontos fortes: {strengths}\n\
             - Formato ideal: {dialect}\n\n\
             ## Instruções de Formato\n{format_instructions}\n\n\
             ## Técnica a Aplicar\n{technique_instructions}\n\n\
             ## Framework: {framework_label}\n{framework_skeleton}\n\n\
             ## Regras\n\
             1. O prompt gerado deve ser COMPLETO e PRONTO PARA USAR (copiar e colar)\n\
             2. Inclua bloco de verificação/constraints quando relevante\n\
             3. Seja específico — evite ambiguidade\n\
             4. Otimize para o modelo alvo (formato, tokens, estilo)\n\
             5. NÃO explique o prompt — retorne APENAS o prompt gerado\n\
             6. O prompt deve ter score alto nos critérios: clareza, contexto, \
             especificidade, formato, estrutura, anti-ambiguidade\n\n\
             Gere o prompt otimizado agora:",
            objective = objective,
            ctx_block = ctx_block,
            trigger_block = trigger_block,
            name = profile.name,
            max_tokens = profile.max_tokens,
            strengths = profile.strengths,
            dialect = target.dialect().as_str(),
            format_instructions = dialect_instructions(target.dialect()),
            technique_instructions = technique_instructions(technique),
            framework_label = framework.label(),
            framework_skeleton = framework_skeleton(framework),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garimpo_core::ModelKind;

    #[test]
    fn test_meta_prompt_mentions_target_and_framework() {
        let engine = Engine::isolated();
        let options = GenerateOptions::new().with_model(ModelKind::Gpt);
        let meta = engine.build_meta_prompt("criar botão de login", &options);
        assert!(meta.contains("## Objetivo do Usuário\ncriar botão de login"));
        assert!(meta.contains("- Modelo: GPT"));
        assert!(meta.contains("Formato ideal: json-schema"));
        assert!(meta.contains("RTF (Role, Task, Format)"));
        assert!(meta.contains("Estruture com: Role, Task, Format"));
        assert!(meta.contains("Gere o prompt otimizado agora:"));
    }

    #[test]
    fn test_meta_prompt_empty_context_fallback() {
        let engine = Engine::isolated();
        let meta = engine.build_meta_prompt("criar botão", &GenerateOptions::default());
        assert!(meta.contains("- Projeto em desenvolvimento"));
    }

    #[test]
    fn test_technique_follows_complexity() {
        let engine = Engine::isolated();
        let meta = engine.build_meta_prompt(
            "implementar autenticação com senha e token",
            &GenerateOptions::default(),
        );
        // Critical keywords force self-consistency instructions.
        assert!(meta.contains("Gere 3 soluções independentes"));
    }
}
