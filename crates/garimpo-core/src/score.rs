use serde::{Deserialize, Serialize};

/// The six quality dimensions of the deep scorer. Weights sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriterionKey {
    Clarity,
    Context,
    Specificity,
    Format,
    Structure,
    AntiAmbiguity,
}

impl CriterionKey {
    /// Report order. Matches the fixed weight table.
    pub const ALL: [CriterionKey; 6] = [
        Self::Clarity,
        Self::Context,
        Self::Specificity,
        Self::Format,
        Self::Structure,
        Self::AntiAmbiguity,
    ];

    pub fn weight(&self) -> u8 {
        match self {
            Self::Clarity => 25,
            Self::Context => 20,
            Self::Specificity => 20,
            Self::Format => 15,
            Self::Structure => 10,
            Self::AntiAmbiguity => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clarity => "Clareza do Objetivo",
            Self::Context => "Completude do Contexto",
            Self::Specificity => "Especificidade",
            Self::Format => "Definição de Formato",
            Self::Structure => "Estrutura/Framework",
            Self::AntiAmbiguity => "Anti-Ambiguidade",
        }
    }
}

/// Letter grade derived from the weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_total(total: u8) -> Self {
        if total >= 90 {
            Self::S
        } else if total >= 80 {
            Self::A
        } else if total >= 65 {
            Self::B
        } else if total >= 50 {
            Self::C
        } else if total >= 35 {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

/// One criterion's contribution to a [`ScoreReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionScore {
    pub key: CriterionKey,
    #[serde(skip_deserializing)]
    pub label: &'static str,
    pub weight: u8,
    pub score: u8,
    pub weighted: u8,
    pub detail: String,
}

/// Multi-criteria quality score for a rendered prompt, 0-100 with grade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total: u8,
    pub grade: Grade,
    pub criteria: Vec<CriterionScore>,
}

impl ScoreReport {
    /// Assemble a report from raw per-criterion scores in `CriterionKey::ALL`
    /// order. The weighted total is `round(Σ score·weight / 100)`.
    pub fn from_scores(scores: [(u8, String); 6]) -> Self {
        let mut criteria = Vec::with_capacity(6);
        let mut weighted_sum = 0f64;
        for (key, (score, detail)) in CriterionKey::ALL.iter().zip(scores) {
            let weight = key.weight();
            weighted_sum += f64::from(score) * f64::from(weight) / 100.0;
            criteria.push(CriterionScore {
                key: *key,
                label: key.label(),
                weight,
                score,
                weighted: ((f64::from(score) * f64::from(weight)) / 100.0).round() as u8,
                detail,
            });
        }
        let total = weighted_sum.round() as u8;
        Self {
            total,
            grade: Grade::from_total(total),
            criteria,
        }
    }

    pub fn criterion(&self, key: CriterionKey) -> &CriterionScore {
        self.criteria
            .iter()
            .find(|c| c.key == key)
            .expect("all six criteria are always present")
    }
}

/// Outcome of running the rule-based verifier over a prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub ok: bool,
    pub score: u8,
    pub grade: Grade,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}
