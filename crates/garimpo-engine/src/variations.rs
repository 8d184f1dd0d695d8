//! Variation generation: several deliberately different renderings of the
//! same objective, ranked by deep score.

use garimpo_core::{Dialect, FrameworkKind, GenerateOptions, ModelKind, Technique, Variation};

use crate::builder::{build_framework, BuildInputs};
use crate::classify::{detect_complexity, detect_task_type, select_framework, select_technique};
use crate::format::{format_for_model, format_with_dialect};
use crate::score::deep_score;
use crate::technique::apply_technique;
use crate::Engine;

fn framework_short_label(kind: FrameworkKind) -> &'static str {
    match kind {
        FrameworkKind::Costar => "CO-STAR",
        FrameworkKind::Rtf => "RTF",
        FrameworkKind::Care => "CARE",
    }
}

fn make_variation(
    inputs: &BuildInputs,
    objective: &str,
    kind: FrameworkKind,
    technique: Technique,
    model: ModelKind,
    dialect: Option<Dialect>,
    label: String,
) -> Variation {
    let (fw, meta) = build_framework(objective, kind, inputs);
    let formatted = match dialect {
        Some(dialect) => format_with_dialect(&fw, &meta, dialect),
        None => format_for_model(&fw, &meta, model),
    };
    let prompt = apply_technique(&formatted, technique);
    let score = deep_score(&prompt);
    Variation {
        rank: 0,
        framework: kind,
        technique,
        model,
        label,
        prompt,
        score,
    }
}

impl Engine {
    /// Build up to four distinct framework/technique combinations for one
    /// objective, each independently scored, sorted by total descending
    /// with dense 1-based ranks.
    pub fn generate_variations(
        &self,
        objective: &str,
        count: usize,
        options: &GenerateOptions,
    ) -> Vec<Variation> {
        let count = count.clamp(1, 4);
        let model = options.target_model;
        let task_type = options.task_type.unwrap_or_else(|| detect_task_type(objective));
        let technique = select_technique(detect_complexity(objective));
        let inputs = self.inputs_without_triggers(task_type, options);

        let mut variations = Vec::with_capacity(count);

        // 1: the task type's preferred framework with its technique.
        let preferred = select_framework(task_type);
        variations.push(make_variation(
            &inputs,
            objective,
            preferred,
            technique,
            model,
            None,
            format!("{} + {}", framework_short_label(preferred), technique.label()),
        ));

        if count >= 2 {
            if preferred != FrameworkKind::Costar {
                // CO-STAR is the most complete framework; always offer one.
                variations.push(make_variation(
                    &inputs,
                    objective,
                    FrameworkKind::Costar,
                    technique,
                    model,
                    None,
                    format!("CO-STAR + {}", technique.label()),
                ));
            } else {
                // Leaner RTF alternative with the technique flipped.
                let flipped = if technique == Technique::ZeroShot {
                    Technique::FewShotCot
                } else {
                    Technique::ZeroShot
                };
                variations.push(make_variation(
                    &inputs,
                    objective,
                    FrameworkKind::Rtf,
                    flipped,
                    model,
                    None,
                    format!("RTF + {}", flipped.label()),
                ));
            }
        }

        if count >= 3 {
            variations.push(make_variation(
                &inputs,
                objective,
                FrameworkKind::Care,
                Technique::FewShotCot,
                model,
                None,
                "CARE + Few-Shot CoT".to_string(),
            ));
        }

        if count >= 4 {
            variations.push(make_variation(
                &inputs,
                objective,
                FrameworkKind::Rtf,
                Technique::ZeroShot,
                model,
                Some(Dialect::Concise),
                "Conciso + Zero-Shot (rápido)".to_string(),
            ));
        }

        variations.sort_by(|a, b| b.score.total.cmp(&a.score.total));
        for (idx, variation) in variations.iter_mut().enumerate() {
            variation.rank = idx + 1;
        }
        variations
    }
}
