use serde::{Deserialize, Serialize};
use std::fmt;

/// How eagerly scores are flagged. Higher sensitivity uses lower cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sensitivity {
    Low,
    #[default]
    Medium,
    High,
}

impl Sensitivity {
    pub const ALL: [Sensitivity; 3] = [Sensitivity::Low, Sensitivity::Medium, Sensitivity::High];

    /// Parse a sensitivity name, falling back to `Medium` for anything unrecognized.
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => Sensitivity::Low,
            "medium" => Sensitivity::Medium,
            "high" => Sensitivity::High,
            other => {
                log::debug!("Unknown sensitivity '{}', using medium", other);
                Sensitivity::Medium
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sensitivity::Low => "low",
            Sensitivity::Medium => "medium",
            Sensitivity::High => "high",
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        match self {
            Sensitivity::Low => Thresholds {
                suspicious: 45,
                high: 75,
            },
            Sensitivity::Medium => Thresholds {
                suspicious: 35,
                high: 65,
            },
            Sensitivity::High => Thresholds {
                suspicious: 25,
                high: 55,
            },
        }
    }
}

impl From<String> for Sensitivity {
    fn from(value: String) -> Self {
        Sensitivity::parse_lossy(&value)
    }
}

impl From<Sensitivity> for String {
    fn from(value: Sensitivity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score cutoffs for one sensitivity setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub suspicious: u32,
    pub high: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Suspicious,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Suspicious => "suspicious",
            RiskLevel::High => "high",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            RiskLevel::High => "🔴 High Risk",
            RiskLevel::Suspicious => "🟡 Suspicious",
            RiskLevel::Safe => "🟢 Safe",
        }
    }

    /// Style class used by badges and banners.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Suspicious => "mid",
            RiskLevel::Safe => "low",
        }
    }

    pub fn is_safe(&self) -> bool {
        *self == RiskLevel::Safe
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a score to a level. All scorers go through here; no cutoffs live anywhere else.
pub fn score_to_level(score: u32, sensitivity: Sensitivity) -> RiskLevel {
    let thresholds = sensitivity.thresholds();
    if score >= thresholds.high {
        RiskLevel::High
    } else if score >= thresholds.suspicious {
        RiskLevel::Suspicious
    } else {
        RiskLevel::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_ordering() {
        for sensitivity in Sensitivity::ALL {
            let t = sensitivity.thresholds();
            assert!(t.suspicious < t.high, "{} cutoffs out of order", sensitivity);
        }

        let low = Sensitivity::Low.thresholds();
        let medium = Sensitivity::Medium.thresholds();
        let high = Sensitivity::High.thresholds();
        assert!(medium.suspicious <= low.suspicious && medium.high <= low.high);
        assert!(high.suspicious <= medium.suspicious && high.high <= medium.high);
    }

    #[test]
    fn test_score_to_level_boundaries() {
        assert_eq!(score_to_level(0, Sensitivity::Medium), RiskLevel::Safe);
        assert_eq!(score_to_level(34, Sensitivity::Medium), RiskLevel::Safe);
        assert_eq!(score_to_level(35, Sensitivity::Medium), RiskLevel::Suspicious);
        assert_eq!(score_to_level(64, Sensitivity::Medium), RiskLevel::Suspicious);
        assert_eq!(score_to_level(65, Sensitivity::Medium), RiskLevel::High);

        assert_eq!(score_to_level(44, Sensitivity::Low), RiskLevel::Safe);
        assert_eq!(score_to_level(75, Sensitivity::Low), RiskLevel::High);

        assert_eq!(score_to_level(25, Sensitivity::High), RiskLevel::Suspicious);
        assert_eq!(score_to_level(55, Sensitivity::High), RiskLevel::High);
    }

    #[test]
    fn test_parse_lossy_falls_back_to_medium() {
        assert_eq!(Sensitivity::parse_lossy("HIGH"), Sensitivity::High);
        assert_eq!(Sensitivity::parse_lossy(" low "), Sensitivity::Low);
        assert_eq!(Sensitivity::parse_lossy("paranoid"), Sensitivity::Medium);
        assert_eq!(Sensitivity::parse_lossy(""), Sensitivity::Medium);
    }

    #[test]
    fn test_level_presentation() {
        assert_eq!(RiskLevel::High.css_class(), "high");
        assert_eq!(RiskLevel::Suspicious.css_class(), "mid");
        assert_eq!(RiskLevel::Safe.css_class(), "low");
        assert!(RiskLevel::High > RiskLevel::Suspicious);
        assert!(RiskLevel::Suspicious > RiskLevel::Safe);
    }
}
