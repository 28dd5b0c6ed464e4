//! What presentation code should do with an assessment. Nothing here renders anything;
//! it only turns results and settings into display decisions.

use crate::assessment::AssessmentResult;
use crate::level::RiskLevel;
use crate::settings::Settings;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub show: bool,
    pub intercept_navigation: bool,
    pub level: RiskLevel,
    pub css_class: &'static str,
    pub text: String,
}

impl Advice {
    fn new(show: bool, result: &AssessmentResult) -> Self {
        Self {
            show,
            intercept_navigation: false,
            level: result.level,
            css_class: result.level.css_class(),
            text: result.message.clone(),
        }
    }

    /// Badge plus hover text for flagged links; high-risk links may also be intercepted.
    pub fn for_link(result: &AssessmentResult, settings: &Settings) -> Self {
        Self {
            intercept_navigation: settings.should_block(result),
            ..Self::new(!result.is_safe(), result)
        }
    }

    /// Banner above a post when its text is not safe.
    pub fn for_post(result: &AssessmentResult) -> Self {
        Self::new(!result.is_safe(), result)
    }

    /// Profile banner: flagged identities, plus safe ones that have something to say
    /// (e.g. a verified official account).
    pub fn for_profile(result: &AssessmentResult) -> Self {
        Self::new(!result.is_safe() || !result.message.is_empty(), result)
    }
}

/// Escape text for embedding in HTML, e.g. the URL shown in a block dialog.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_advice() {
        let settings = Settings::default();

        let high = AssessmentResult::new(90, RiskLevel::High, "Scam likely: x");
        let advice = Advice::for_link(&high, &settings);
        assert!(advice.show);
        assert!(advice.intercept_navigation);
        assert_eq!(advice.css_class, "high");

        let suspicious = AssessmentResult::new(40, RiskLevel::Suspicious, "Be careful: x");
        let advice = Advice::for_link(&suspicious, &settings);
        assert!(advice.show);
        assert!(!advice.intercept_navigation);
        assert_eq!(advice.css_class, "mid");

        let safe = AssessmentResult::new(0, RiskLevel::Safe, "No threats detected");
        assert!(!Advice::for_link(&safe, &settings).show);
    }

    #[test]
    fn test_profile_advice_shows_safe_messages() {
        let verified = AssessmentResult::new(0, RiskLevel::Safe, "🟢 Verified Authentic Account.");
        let advice = Advice::for_profile(&verified);
        assert!(advice.show);
        assert_eq!(advice.css_class, "low");

        assert!(!Advice::for_profile(&AssessmentResult::safe()).show);
        assert!(!Advice::for_post(&AssessmentResult::safe()).show);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"http://x.tk/?a=1&b=<script>"'"#),
            "http://x.tk/?a=1&amp;b=&lt;script&gt;&quot;&#039;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
