//! Reasoning-technique suffixes.

use garimpo_core::Technique;

/// Append the reasoning instruction for `technique`. Pure concatenation,
/// always after formatting; `ZeroShot` returns the prompt untouched.
pub fn apply_technique(prompt: &str, technique: Technique) -> String {
    match technique {
        Technique::ZeroShot => prompt.to_string(),
        Technique::FewShotCot => format!(
            "{prompt}\n\nPense passo a passo antes de responder. Mostre seu raciocínio \
             brevemente, depois apresente o resultado final."
        ),
        Technique::TreeOfThought => format!(
            "{prompt}\n\nConsidere pelo menos 2 abordagens diferentes para resolver isso. \
             Para cada abordagem, analise prós e contras. Escolha a melhor e implemente."
        ),
        Technique::SelfConsistency => format!(
            "{prompt}\n\nGere 3 soluções independentes para este problema. Compare-as e \
             apresente a solução mais consistente e robusta como resultado final."
        ),
    }
}
