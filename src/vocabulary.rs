//! Enumerated word lists and the conjunction rules built from them.
//!
//! Matching is case-insensitive substring containment, so "now" also fires inside "known".

/// A named list of terms. Matches when any term occurs anywhere in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

impl Vocabulary {
    /// Matches against text that is already lower-cased.
    pub fn matches_folded(&self, folded: &str) -> bool {
        self.terms.iter().any(|term| folded.contains(term))
    }

    /// The first term, in list order, found in `text`.
    pub fn first_match(&self, text: &str) -> Option<&'static str> {
        let folded = text.to_lowercase();
        self.terms.iter().copied().find(|term| folded.contains(term))
    }
}

pub const MONEY: Vocabulary = Vocabulary {
    name: "money",
    terms: &[
        "win", "prize", "giveaway", "donate", "cash", "gcash", "paypal", "₱", "$",
    ],
};

pub const URGENCY: Vocabulary = Vocabulary {
    name: "urgency",
    terms: &["urgent", "now", "limited", "first", "click", "claim", "free"],
};

/// Words an account name uses to declare itself official.
pub const OFFICIAL_CLAIM: Vocabulary = Vocabulary {
    name: "official-claim",
    terms: &["official", "real", "verified"],
};

/// Fires only when every vocabulary in `all_of` matches the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub label: &'static str,
    pub weight: u32,
    pub all_of: &'static [Vocabulary],
}

impl PatternRule {
    pub fn matches_folded(&self, folded: &str) -> bool {
        !self.all_of.is_empty() && self.all_of.iter().all(|v| v.matches_folded(folded))
    }

    /// Names of the vocabularies this rule combines, e.g. "money+urgency".
    pub fn vocabulary_names(&self) -> String {
        self.all_of
            .iter()
            .map(|v| v.name)
            .collect::<Vec<_>>()
            .join("+")
    }
}

pub const MONEY_URGENCY: PatternRule = PatternRule {
    label: "money+urgency pattern",
    weight: 25,
    all_of: &[MONEY, URGENCY],
};

/// Conjunction rules applied by the text scorer, in order.
pub const TEXT_PATTERN_RULES: &[PatternRule] = &[MONEY_URGENCY];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_matching() {
        assert_eq!(MONEY.first_match("You could WIN big"), Some("win"));
        assert!(MONEY.matches_folded("send ₱500"));
        assert!(MONEY.matches_folded("only $5"));
        assert!(!MONEY.matches_folded("see you tomorrow"));

        assert_eq!(URGENCY.first_match("Act NOW"), Some("now"));
        assert!(!URGENCY.matches_folded("see you tomorrow"));

        assert_eq!(OFFICIAL_CLAIM.first_match("The REAL Jane"), Some("real"));
        assert_eq!(OFFICIAL_CLAIM.first_match("Jane"), None);
    }

    #[test]
    fn test_money_urgency_needs_both() {
        assert!(MONEY_URGENCY.matches_folded("win a prize, claim today"));
        assert!(!MONEY_URGENCY.matches_folded("win a prize"));
        assert!(!MONEY_URGENCY.matches_folded("urgent meeting"));
    }

    #[test]
    fn test_rule_names_its_vocabularies() {
        assert_eq!(MONEY_URGENCY.vocabulary_names(), "money+urgency");
    }

    #[test]
    fn test_empty_rule_never_fires() {
        let rule = PatternRule {
            label: "empty",
            weight: 10,
            all_of: &[],
        };
        assert!(!rule.matches_folded("anything"));
    }
}
