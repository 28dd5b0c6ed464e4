use crate::level::{score_to_level, RiskLevel, Sensitivity};
use serde::{Deserialize, Serialize};

/// One piece of evidence. Weights only ever add up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub weight: u32,
    pub reason: String,
}

impl Signal {
    pub fn new(weight: u32, reason: impl Into<String>) -> Self {
        Self {
            weight,
            reason: reason.into(),
        }
    }
}

/// Sum of signal weights, saturating so no input can overflow the score.
pub fn total_weight(signals: &[Signal]) -> u32 {
    signals
        .iter()
        .fold(0u32, |total, signal| total.saturating_add(signal.weight))
}

/// Outcome of a single assessment call. Built fresh per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub score: u32,
    pub level: RiskLevel,
    pub message: String,
    pub badge: String,
    /// Matched phrases and pattern labels (text assessments only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hits: Vec<String>,
}

impl AssessmentResult {
    pub fn new(score: u32, level: RiskLevel, message: impl Into<String>) -> Self {
        Self {
            score,
            level,
            message: message.into(),
            badge: level.badge().to_string(),
            hits: Vec::new(),
        }
    }

    /// Score routed through the level classifier.
    pub fn from_score(score: u32, sensitivity: Sensitivity, message: impl Into<String>) -> Self {
        Self::new(score, score_to_level(score, sensitivity), message)
    }

    pub fn safe() -> Self {
        Self::new(0, RiskLevel::Safe, "")
    }

    pub fn with_hits(mut self, hits: Vec<String>) -> Self {
        self.hits = hits;
        self
    }

    pub fn is_safe(&self) -> bool {
        self.level.is_safe()
    }
}
