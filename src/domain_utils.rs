use regex::Regex;
use std::sync::OnceLock;

/// Link-shortener hosts. Matched exactly against the lower-cased hostname.
pub const SHORTENERS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "is.gd",
    "cutt.ly",
    "rb.gy",
];

/// Top-level labels with high abuse rates.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    "zip", "mov", "click", "country", "stream", "gq", "tk", "ml", "ga", "cf",
];

pub const PUNYCODE_PREFIX: &str = "xn--";

fn dotted_quad_regex() -> &'static Regex {
    static DOTTED_QUAD: OnceLock<Regex> = OnceLock::new();
    DOTTED_QUAD.get_or_init(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").unwrap())
}

/// Minimal hostname inspection helpers
pub struct DomainUtils;

impl DomainUtils {
    /// Lower-case and trim a domain for set membership
    pub fn normalize_domain(domain: &str) -> String {
        domain.trim().to_lowercase()
    }

    /// Last dot-separated label. A host without dots is its own TLD.
    pub fn extract_tld(host: &str) -> &str {
        host.rsplit('.').next().unwrap_or(host)
    }

    pub fn label_count(host: &str) -> usize {
        host.split('.').count()
    }

    /// Labels beyond the registrable `name.tld` pair
    pub fn subdomain_count(host: &str) -> usize {
        Self::label_count(host).saturating_sub(2)
    }

    pub fn is_dotted_quad(host: &str) -> bool {
        dotted_quad_regex().is_match(host)
    }

    pub fn is_shortener(host: &str) -> bool {
        SHORTENERS.contains(&host)
    }

    pub fn is_suspicious_tld(host: &str) -> bool {
        SUSPICIOUS_TLDS.contains(&Self::extract_tld(host))
    }

    pub fn is_punycode(host: &str) -> bool {
        host.starts_with(PUNYCODE_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tld() {
        assert_eq!(DomainUtils::extract_tld("example.com"), "com");
        assert_eq!(DomainUtils::extract_tld("a.b.example.zip"), "zip");
        assert_eq!(DomainUtils::extract_tld("localhost"), "localhost");
        assert_eq!(DomainUtils::extract_tld(""), "");
    }

    #[test]
    fn test_subdomain_count() {
        assert_eq!(DomainUtils::subdomain_count("example.com"), 0);
        assert_eq!(DomainUtils::subdomain_count("www.example.com"), 1);
        assert_eq!(DomainUtils::subdomain_count("a.b.c.example.com"), 3);
        assert_eq!(DomainUtils::subdomain_count("localhost"), 0);
    }

    #[test]
    fn test_is_dotted_quad() {
        assert!(DomainUtils::is_dotted_quad("192.168.1.1"));
        assert!(DomainUtils::is_dotted_quad("999.1.1.1"));
        assert!(!DomainUtils::is_dotted_quad("192.168.1"));
        assert!(!DomainUtils::is_dotted_quad("1.2.3.4.example.com"));
        assert!(!DomainUtils::is_dotted_quad("example.com"));
    }

    #[test]
    fn test_fixed_sets() {
        assert!(DomainUtils::is_shortener("bit.ly"));
        assert!(!DomainUtils::is_shortener("notbit.ly"));
        assert!(DomainUtils::is_suspicious_tld("free-money.tk"));
        assert!(!DomainUtils::is_suspicious_tld("example.com"));
        assert!(DomainUtils::is_punycode("xn--pple-43d.com"));
        assert_eq!(DomainUtils::normalize_domain("  Evil.EXAMPLE "), "evil.example");
    }
}
