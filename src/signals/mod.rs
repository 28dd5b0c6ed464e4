pub mod url_structure;

use crate::assessment::Signal;
use crate::reference_data::ReferenceData;

/// A parsed link, reduced to what the structure checks look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTarget {
    pub url: String,
    /// Lower-cased hostname; empty for URLs without an authority (e.g. `mailto:`)
    pub host: String,
}

impl UrlTarget {
    /// Parse an absolute URL. `None` means the URL is malformed.
    pub fn parse(url: &str) -> Option<Self> {
        match url::Url::parse(url.trim()) {
            Ok(parsed) => Some(Self {
                url: parsed.to_string(),
                host: parsed.host_str().unwrap_or("").to_lowercase(),
            }),
            Err(e) => {
                log::debug!("URL '{}' failed to parse: {}", url, e);
                None
            }
        }
    }

    pub fn from_host(host: &str) -> Self {
        Self {
            url: format!("http://{}/", host),
            host: host.to_lowercase(),
        }
    }
}

/// One independent URL-structure check.
pub trait SignalExtractor: Send + Sync {
    fn extract(&self, target: &UrlTarget, data: &ReferenceData) -> Option<Signal>;
    fn name(&self) -> &str;
}

/// Runs every registered extractor against a target and collects what fires.
pub struct UrlSignalEngine {
    extractors: Vec<Box<dyn SignalExtractor>>,
}

impl Default for UrlSignalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlSignalEngine {
    pub fn new() -> Self {
        Self {
            extractors: vec![
                Box::new(url_structure::BlacklistedDomain),
                Box::new(url_structure::Shortener),
                Box::new(url_structure::SuspiciousTld),
                Box::new(url_structure::AtSignInHost),
                Box::new(url_structure::PunycodeHost),
                Box::new(url_structure::RawIpHost),
                Box::new(url_structure::ExcessiveSubdomains),
            ],
        }
    }

    pub fn with_extractors(extractors: Vec<Box<dyn SignalExtractor>>) -> Self {
        Self { extractors }
    }

    pub fn extractor_names(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    pub fn analyze(&self, target: &UrlTarget, data: &ReferenceData) -> Vec<Signal> {
        let mut signals = Vec::new();

        for extractor in &self.extractors {
            if let Some(signal) = extractor.extract(target, data) {
                log::debug!(
                    "{} fired on '{}' (+{}): {}",
                    extractor.name(),
                    target.host,
                    signal.weight,
                    signal.reason
                );
                signals.push(signal);
            }
        }

        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::total_weight;

    #[test]
    fn test_url_target_parse() {
        let target = UrlTarget::parse("https://Login.Example.COM/path?q=1").unwrap();
        assert_eq!(target.host, "login.example.com");

        assert!(UrlTarget::parse("not a url").is_none());
        assert!(UrlTarget::parse("").is_none());
        assert!(UrlTarget::parse("/relative/path").is_none());

        let mailto = UrlTarget::parse("mailto:someone@example.com").unwrap();
        assert_eq!(mailto.host, "");
    }

    #[test]
    fn test_unicode_host_becomes_punycode() {
        let target = UrlTarget::parse("http://аpple.com/").unwrap();
        assert!(target.host.starts_with("xn--"));
    }

    #[test]
    fn test_engine_collects_independent_signals() {
        let engine = UrlSignalEngine::new();
        let data = ReferenceData::empty();

        let clean = engine.analyze(&UrlTarget::from_host("example.com"), &data);
        assert!(clean.is_empty());

        // Suspicious TLD + four subdomain labels
        let signals = engine.analyze(&UrlTarget::from_host("a.b.c.d.free.tk"), &data);
        assert_eq!(signals.len(), 2);
        assert_eq!(total_weight(&signals), 35);
    }

    #[test]
    fn test_custom_extractor_set() {
        let engine = UrlSignalEngine::with_extractors(vec![Box::new(url_structure::Shortener)]);
        assert_eq!(engine.extractor_names(), vec!["shortener"]);

        let data = ReferenceData::empty();
        let signals = engine.analyze(&UrlTarget::from_host("bit.ly"), &data);
        assert_eq!(signals, vec![Signal::new(25, "Shortened link")]);
    }
}
