use crate::assessment::{total_weight, AssessmentResult, Signal};
use crate::level::{RiskLevel, Sensitivity};
use crate::reference_data::ReferenceData;
use crate::signals::{UrlSignalEngine, UrlTarget};
use crate::text_scorer::assess_text;
use std::sync::OnceLock;

pub const MALFORMED_URL_WEIGHT: u32 = 50;
pub const MALFORMED_URL_REASON: &str = "Malformed URL";
pub const NEARBY_SCAM_TEXT_REASON: &str = "Scam language in nearby text";
pub const NO_THREATS_MESSAGE: &str = "No threats detected";

/// Scores outbound links from their URL structure and the text around them.
pub struct LinkScorer {
    signals: UrlSignalEngine,
}

impl Default for LinkScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkScorer {
    pub fn new() -> Self {
        Self {
            signals: UrlSignalEngine::new(),
        }
    }

    pub fn with_engine(signals: UrlSignalEngine) -> Self {
        Self { signals }
    }

    pub fn collect_signals(
        &self,
        url: &str,
        context_text: &str,
        sensitivity: Sensitivity,
        data: &ReferenceData,
    ) -> Vec<Signal> {
        let mut signals = match UrlTarget::parse(url) {
            Some(target) => self.signals.analyze(&target, data),
            // No host to inspect; the context text still counts
            None => vec![Signal::new(MALFORMED_URL_WEIGHT, MALFORMED_URL_REASON)],
        };

        let text = assess_text(context_text, sensitivity, data);
        if !text.is_safe() {
            signals.push(Signal::new(text.score, NEARBY_SCAM_TEXT_REASON));
        }

        signals
    }

    pub fn assess(
        &self,
        url: &str,
        context_text: &str,
        sensitivity: Sensitivity,
        data: &ReferenceData,
    ) -> AssessmentResult {
        let signals = self.collect_signals(url, context_text, sensitivity, data);
        let score = total_weight(&signals);
        let result = AssessmentResult::from_score(score, sensitivity, "");

        let reasons = signals
            .iter()
            .map(|s| s.reason.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let message = match result.level {
            RiskLevel::High => format!("Scam likely: {}", reasons),
            RiskLevel::Suspicious => format!("Be careful: {}", reasons),
            RiskLevel::Safe => NO_THREATS_MESSAGE.to_string(),
        };

        log::debug!("Link '{}' scored {} ({})", url, score, result.level);

        AssessmentResult { message, ..result }
    }
}

/// Assess a link with the default set of URL-structure checks.
pub fn assess_link(
    url: &str,
    context_text: &str,
    sensitivity: Sensitivity,
    data: &ReferenceData,
) -> AssessmentResult {
    static DEFAULT_SCORER: OnceLock<LinkScorer> = OnceLock::new();
    DEFAULT_SCORER
        .get_or_init(LinkScorer::new)
        .assess(url, context_text, sensitivity, data)
}
