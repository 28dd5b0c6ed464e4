use crate::assessment::AssessmentResult;
use crate::level::{RiskLevel, Sensitivity};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// User-facing switches. Every field falls back to its default independently when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub enabled: bool,
    #[serde(alias = "blockHighRisk")]
    pub block_high_risk: bool,
    pub sensitivity: Sensitivity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            block_high_risk: true,
            sensitivity: Sensitivity::Medium,
        }
    }
}

impl Settings {
    pub fn default_path() -> &'static str {
        "scamguard.yaml"
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        // An empty document means "nothing set"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Invalid settings document")
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("In settings file {}", path.display()))
    }

    /// Load settings, using defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::warn!(
                "Settings file '{}' not found, using default settings",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings file {}", path.display()))?;
        Ok(())
    }

    /// Whether navigation to an assessed link should be intercepted.
    pub fn should_block(&self, result: &AssessmentResult) -> bool {
        self.enabled && self.block_high_risk && result.level == RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.enabled);
        assert!(settings.block_high_risk);
        assert_eq!(settings.sensitivity, Sensitivity::Medium);
        assert_eq!(Settings::from_yaml("").unwrap(), settings);
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let settings = Settings::from_yaml("sensitivity: high\n").unwrap();
        assert!(settings.enabled);
        assert!(settings.block_high_risk);
        assert_eq!(settings.sensitivity, Sensitivity::High);

        let settings = Settings::from_yaml("blockHighRisk: false\n").unwrap();
        assert!(!settings.block_high_risk);
    }

    #[test]
    fn test_unknown_sensitivity_falls_back_to_medium() {
        let settings = Settings::from_yaml("sensitivity: extreme\n").unwrap();
        assert_eq!(settings.sensitivity, Sensitivity::Medium);
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        assert!(Settings::from_yaml("enabled: [not, a, bool]").is_err());
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("scamguard-settings-{}.yaml", std::process::id()));
        let settings = Settings {
            enabled: false,
            block_high_risk: true,
            sensitivity: Sensitivity::Low,
        };
        settings.to_file(&path).unwrap();
        assert_eq!(Settings::load_or_default(&path).unwrap(), settings);
        let _ = fs::remove_file(&path);

        assert_eq!(
            Settings::load_or_default(&path).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn test_should_block() {
        let high = AssessmentResult::new(90, RiskLevel::High, "Scam likely: x");
        let suspicious = AssessmentResult::new(40, RiskLevel::Suspicious, "Be careful: x");

        let settings = Settings::default();
        assert!(settings.should_block(&high));
        assert!(!settings.should_block(&suspicious));

        let settings = Settings {
            block_high_risk: false,
            ..Settings::default()
        };
        assert!(!settings.should_block(&high));

        let settings = Settings {
            enabled: false,
            ..Settings::default()
        };
        assert!(!settings.should_block(&high));
    }
}
