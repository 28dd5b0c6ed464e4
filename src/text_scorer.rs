use crate::assessment::AssessmentResult;
use crate::level::{RiskLevel, Sensitivity};
use crate::reference_data::ReferenceData;
use crate::vocabulary::{PatternRule, TEXT_PATTERN_RULES};

pub const PHRASE_HIT_WEIGHT: u32 = 10;
/// Ceiling on the combined phrase contribution, so repetition alone cannot max out a post
pub const PHRASE_CONTRIBUTION_CAP: u32 = 40;

/// Reference phrases contained in `folded` (already lower-cased), in reference order.
pub fn phrase_hits(folded: &str, phrases: &[String]) -> Vec<String> {
    phrases
        .iter()
        .filter(|phrase| folded.contains(&phrase.to_lowercase()))
        .cloned()
        .collect()
}

pub fn phrase_contribution(hit_count: usize) -> u32 {
    let count = u32::try_from(hit_count).unwrap_or(u32::MAX);
    count
        .saturating_mul(PHRASE_HIT_WEIGHT)
        .min(PHRASE_CONTRIBUTION_CAP)
}

/// Conjunction rules that fire on `folded`.
pub fn pattern_hits(folded: &str) -> Vec<&'static PatternRule> {
    TEXT_PATTERN_RULES
        .iter()
        .filter(|rule| {
            let fired = rule.matches_folded(folded);
            if fired {
                log::debug!(
                    "Rule '{}' fired ({})",
                    rule.label,
                    rule.vocabulary_names()
                );
            }
            fired
        })
        .collect()
}

fn level_message(level: RiskLevel) -> &'static str {
    // Never echo the matched phrases back to the page
    match level {
        RiskLevel::High => "⚠️ Scam language detected (high risk).",
        RiskLevel::Suspicious => "⚠️ Scam language detected (suspicious).",
        RiskLevel::Safe => "",
    }
}

/// Score a block of text for scam language.
///
/// Absent or empty text is safe with a zero score. Otherwise the score is the capped
/// phrase contribution plus the weight of every conjunction rule that fires; `hits` lists
/// matched phrases followed by the labels of fired rules.
pub fn assess_text<'a>(
    text: impl Into<Option<&'a str>>,
    sensitivity: Sensitivity,
    data: &ReferenceData,
) -> AssessmentResult {
    let text = match text.into() {
        Some(t) if !t.is_empty() => t,
        _ => return AssessmentResult::safe(),
    };

    let folded = text.to_lowercase();
    let mut hits = phrase_hits(&folded, data.scam_phrases());
    let mut score = phrase_contribution(hits.len());

    for rule in pattern_hits(&folded) {
        score = score.saturating_add(rule.weight);
        hits.push(rule.label.to_string());
    }

    let result = AssessmentResult::from_score(score, sensitivity, "");
    let message = level_message(result.level);
    log::debug!(
        "Text assessed: score {} ({}), {} hits",
        score,
        result.level,
        hits.len()
    );

    AssessmentResult {
        message: message.to_string(),
        ..result
    }
    .with_hits(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(list: &[&str]) -> ReferenceData {
        ReferenceData::new(Vec::<String>::new(), Vec::new(), list.iter().copied())
    }

    #[test]
    fn test_empty_and_absent_text() {
        let data = phrases(&["free money"]);
        for result in [
            assess_text("", Sensitivity::High, &data),
            assess_text(None::<&str>, Sensitivity::High, &data),
        ] {
            assert_eq!(result.score, 0);
            assert_eq!(result.level, RiskLevel::Safe);
            assert!(result.message.is_empty());
            assert!(result.hits.is_empty());
        }
    }

    #[test]
    fn test_phrase_hits_are_case_insensitive() {
        let data = phrases(&["Double Your Money", "gift card"]);
        let result = assess_text("DOUBLE your money today", Sensitivity::Medium, &data);
        assert_eq!(result.hits, vec!["Double Your Money".to_string()]);
        assert_eq!(result.score, 10);
        assert_eq!(result.level, RiskLevel::Safe);
        assert!(result.message.is_empty());
    }

    #[test]
    fn test_padded_phrase_keeps_word_boundaries() {
        let data = phrases(&[" gift "]);
        assert_eq!(
            assess_text("a gift for you", Sensitivity::Medium, &data).hits,
            vec![" gift ".to_string()]
        );
        assert!(assess_text("giftcards here", Sensitivity::Medium, &data)
            .hits
            .is_empty());
    }

    #[test]
    fn test_phrase_contribution_is_capped() {
        assert_eq!(phrase_contribution(0), 0);
        assert_eq!(phrase_contribution(3), 30);
        assert_eq!(phrase_contribution(4), 40);
        assert_eq!(phrase_contribution(50), 40);
        assert_eq!(phrase_contribution(usize::MAX), 40);
    }

    #[test]
    fn test_money_urgency_adds_exactly_25() {
        let data = ReferenceData::empty();
        let win_only = assess_text("you may win", Sensitivity::Medium, &data);
        let both = assess_text("you may win, urgent", Sensitivity::Medium, &data);
        let urgent_only = assess_text("urgent meeting", Sensitivity::Medium, &data);

        assert_eq!(win_only.score, 0);
        assert_eq!(urgent_only.score, 0);
        assert_eq!(both.score - win_only.score, 25);
        assert_eq!(both.hits, vec!["money+urgency pattern".to_string()]);
    }

    #[test]
    fn test_levels_and_messages() {
        let data = phrases(&["send gcash", "verify your account", "limited slots"]);

        let result = assess_text(
            "Send GCash now to claim your prize! Limited slots.",
            Sensitivity::Medium,
            &data,
        );
        // Two phrases (20) + money+urgency (25)
        assert_eq!(result.score, 45);
        assert_eq!(result.level, RiskLevel::Suspicious);
        assert_eq!(result.message, "⚠️ Scam language detected (suspicious).");
        assert_eq!(result.hits.last().map(String::as_str), Some("money+urgency pattern"));

        let result = assess_text(
            "send gcash, verify your account, limited slots, win cash now",
            Sensitivity::Medium,
            &data,
        );
        assert_eq!(result.score, 55);
        assert_eq!(result.level, RiskLevel::Suspicious);

        let result = assess_text(
            "send gcash, verify your account, limited slots, win cash now",
            Sensitivity::High,
            &data,
        );
        assert_eq!(result.level, RiskLevel::High);
        assert_eq!(result.message, "⚠️ Scam language detected (high risk).");
    }

    #[test]
    fn test_message_does_not_echo_phrases() {
        let data = phrases(&["wire the fee", "act fast", "secret bonus", "gift card"]);
        let result = assess_text(
            "wire the fee, act fast, secret bonus, gift card",
            Sensitivity::High,
            &data,
        );
        assert!(!result.message.contains("wire the fee"));
        assert!(!result.message.contains("gift card"));
    }
}
