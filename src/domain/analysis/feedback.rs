//! Feedback Synthesizer - Scores a finished session from its metrics.

use serde::{Deserialize, Serialize};

use crate::domain::simulation::{ClientCategory, Metrics, SessionState};

/// Dimensions scored below this are named in the next steps.
pub const IMPROVEMENT_THRESHOLD: u8 = 7;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// A scored area of the trainee's performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackDimension {
    Discovery,
    Presentation,
    Objections,
    Closing,
    Adaptation,
    /// Repeat clients only.
    History,
    /// Repeat clients only.
    RelationshipAdaptation,
}

impl FeedbackDimension {
    pub const NEW_CLIENT: [FeedbackDimension; 5] = [
        FeedbackDimension::Discovery,
        FeedbackDimension::Presentation,
        FeedbackDimension::Objections,
        FeedbackDimension::Closing,
        FeedbackDimension::Adaptation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Discovery => "Analýza potrieb",
            Self::Presentation => "Prezentácia hodnoty",
            Self::Objections => "Práca s námietkami",
            Self::Closing => "Uzatváranie",
            Self::Adaptation => "Prispôsobenie klientovi",
            Self::History => "Práca s históriou",
            Self::RelationshipAdaptation => "Rozvoj vzťahu",
        }
    }

    /// Comment for a score: praise at or above the threshold, advice below.
    pub fn comment(&self, score: u8) -> &'static str {
        let strong = score >= IMPROVEMENT_THRESHOLD;
        match (self, strong) {
            (Self::Discovery, true) => "Kládli ste otvorené otázky a odhalili skutočné potreby.",
            (Self::Discovery, false) => "Pýtajte sa viac otvorených otázok a pomenujte potreby.",
            (Self::Presentation, true) => "Hodnotu ste jasne prepojili s potrebami klienta.",
            (Self::Presentation, false) => "Hovorte o prínosoch, nie o funkciách.",
            (Self::Objections, true) => "Námietky ste vypočuli a zodpovedali vecne.",
            (Self::Objections, false) => "Námietku najprv uznajte, potom ju podložte faktami.",
            (Self::Closing, true) => "Rozhovor ste dotiahli k dohode o ďalšom kroku.",
            (Self::Closing, false) => "Na konci navrhnite konkrétny ďalší krok.",
            (Self::Adaptation, true) => "Štýl komunikácie ste prispôsobili typu klienta.",
            (Self::Adaptation, false) => "Všímajte si typ klienta a prispôsobte mu tempo a jazyk.",
            (Self::History, true) => "Dobre ste nadviazali na predchádzajúcu spoluprácu.",
            (Self::History, false) => "Využite to, čo už o klientovi viete z minulosti.",
            (Self::RelationshipAdaptation, true) => "Vzťah s klientom ste posilnili.",
            (Self::RelationshipAdaptation, false) => {
                "Pri stálom klientovi sa pýtajte, čo sa odvtedy zmenilo."
            }
        }
    }
}

/// A dimension's integer score and comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: FeedbackDimension,
    pub name: String,
    pub score: u8,
    pub comment: String,
}

impl DimensionScore {
    pub fn new(dimension: FeedbackDimension, score: u8) -> Self {
        Self {
            dimension,
            name: dimension.label().to_string(),
            score,
            comment: dimension.comment(score).to_string(),
        }
    }
}

/// The report handed to the trainee when a session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub overall_score: u8,
    pub dimensions: Vec<DimensionScore>,
    pub personalized_message: String,
    pub next_steps: String,
}

/// Reduces session metrics into a feedback report.
pub struct FeedbackSynthesizer;

impl FeedbackSynthesizer {
    /// Report for a finished (or abandoned) session.
    pub fn synthesize(state: &SessionState) -> FeedbackReport {
        Self::from_metrics(&state.metrics, state.persona.client_category)
    }

    pub fn from_metrics(metrics: &Metrics, category: ClientCategory) -> FeedbackReport {
        let dimensions = Self::score_dimensions(metrics, category);
        let overall_score = Self::compute_overall(&dimensions);

        FeedbackReport {
            overall_score,
            personalized_message: Self::personalized_message(overall_score).to_string(),
            next_steps: Self::next_steps(&dimensions),
            dimensions,
        }
    }

    /// Five dimensions for new clients, seven for repeat clients.
    pub fn score_dimensions(metrics: &Metrics, category: ClientCategory) -> Vec<DimensionScore> {
        let m = metrics;
        let mut scores = vec![
            DimensionScore::new(
                FeedbackDimension::Discovery,
                Self::to_score(
                    0.6 * Self::scale(m.open_questions, 3) + 0.4 * Self::scale(m.needs_identified, 2),
                ),
            ),
            DimensionScore::new(
                FeedbackDimension::Presentation,
                Self::to_score(Self::scale(m.value_statements, 3)),
            ),
            DimensionScore::new(
                FeedbackDimension::Objections,
                Self::to_score(Self::scale(
                    m.objections_handled_well,
                    m.objection_handling_attempts.max(1),
                )),
            ),
            DimensionScore::new(
                FeedbackDimension::Closing,
                Self::to_score(Self::scale(m.closing_attempts, 1)),
            ),
            DimensionScore::new(
                FeedbackDimension::Adaptation,
                Self::to_score(Self::scale(m.adaptation_to_disc, 3)),
            ),
        ];

        if category.is_repeat() {
            scores.push(DimensionScore::new(
                FeedbackDimension::History,
                Self::to_score(Self::scale(
                    m.value_statements.saturating_add(m.objections_handled_well),
                    4,
                )),
            ));
            scores.push(DimensionScore::new(
                FeedbackDimension::RelationshipAdaptation,
                Self::to_score(Self::scale(
                    m.adaptation_to_disc.saturating_add(m.open_questions),
                    4,
                )),
            ));
        }
        scores
    }

    /// `clamp(value / expected_max, 0, 1) * 10`.
    ///
    /// # Edge Cases
    /// - `expected_max` of 0: treated as 1
    pub fn scale(value: u32, expected_max: u32) -> f64 {
        let max = expected_max.max(1) as f64;
        (value as f64 / max).clamp(0.0, 1.0) * 10.0
    }

    /// Floors a raw score into `[1, 10]`.
    pub fn to_score(raw: f64) -> u8 {
        if !raw.is_finite() {
            return MIN_SCORE;
        }
        (raw.floor() as i64).clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8
    }

    /// Floor of the mean dimension score.
    ///
    /// # Edge Cases
    /// - Empty dimensions: Returns the minimum score
    pub fn compute_overall(dimensions: &[DimensionScore]) -> u8 {
        if dimensions.is_empty() {
            return MIN_SCORE;
        }
        let total: u32 = dimensions.iter().map(|d| d.score as u32).sum();
        Self::to_score(total as f64 / dimensions.len() as f64)
    }

    /// Lowest-scoring dimension, first in order on ties.
    pub fn weakest(dimensions: &[DimensionScore]) -> Option<&DimensionScore> {
        dimensions.iter().fold(None, |lowest: Option<&DimensionScore>, d| match lowest {
            Some(l) if l.score <= d.score => Some(l),
            _ => Some(d),
        })
    }

    pub fn next_steps(dimensions: &[DimensionScore]) -> String {
        match Self::weakest(dimensions) {
            Some(weakest) if weakest.score < IMPROVEMENT_THRESHOLD => format!(
                "Ďalší tréning zamerajte na oblasť „{}“: {}",
                weakest.name, weakest.comment
            ),
            _ => "Všetky oblasti zvládate dobre. Skúste vyššiu náročnosť.".to_string(),
        }
    }

    pub fn personalized_message(overall: u8) -> &'static str {
        match overall {
            8.. => "Výborný rozhovor! Klient odchádza presvedčený a s jasným ďalším krokom.",
            6..=7 => "Dobrá práca. Základ máte, s pár úpravami bude rozhovor ešte presvedčivejší.",
            _ => "Tento rozhovor bol náročný. Zamerajte sa na odporúčanú oblasť a skúste to znova.",
        }
    }
}
