use super::{SignalExtractor, UrlTarget};
use crate::assessment::Signal;
use crate::domain_utils::DomainUtils;
use crate::reference_data::ReferenceData;

pub const BLACKLIST_WEIGHT: u32 = 80;
pub const SHORTENER_WEIGHT: u32 = 25;
pub const SUSPICIOUS_TLD_WEIGHT: u32 = 20;
pub const AT_SIGN_WEIGHT: u32 = 20;
pub const PUNYCODE_WEIGHT: u32 = 20;
pub const RAW_IP_WEIGHT: u32 = 30;
pub const EXCESSIVE_SUBDOMAINS_WEIGHT: u32 = 15;

/// Subdomain labels beyond `name.tld` at which a host counts as excessive
pub const EXCESSIVE_SUBDOMAIN_LABELS: usize = 3;

pub struct BlacklistedDomain;

impl SignalExtractor for BlacklistedDomain {
    fn extract(&self, target: &UrlTarget, data: &ReferenceData) -> Option<Signal> {
        data.is_blacklisted(&target.host)
            .then(|| Signal::new(BLACKLIST_WEIGHT, "Domain is in local blacklist"))
    }

    fn name(&self) -> &str {
        "blacklisted_domain"
    }
}

pub struct Shortener;

impl SignalExtractor for Shortener {
    fn extract(&self, target: &UrlTarget, _data: &ReferenceData) -> Option<Signal> {
        DomainUtils::is_shortener(&target.host)
            .then(|| Signal::new(SHORTENER_WEIGHT, "Shortened link"))
    }

    fn name(&self) -> &str {
        "shortener"
    }
}

pub struct SuspiciousTld;

impl SignalExtractor for SuspiciousTld {
    fn extract(&self, target: &UrlTarget, _data: &ReferenceData) -> Option<Signal> {
        DomainUtils::is_suspicious_tld(&target.host)
            .then(|| Signal::new(SUSPICIOUS_TLD_WEIGHT, "Suspicious TLD"))
    }

    fn name(&self) -> &str {
        "suspicious_tld"
    }
}

/// `user@host` tricks that make the visible text look like a different site.
pub struct AtSignInHost;

impl SignalExtractor for AtSignInHost {
    fn extract(&self, target: &UrlTarget, _data: &ReferenceData) -> Option<Signal> {
        target
            .host
            .contains('@')
            .then(|| Signal::new(AT_SIGN_WEIGHT, "URL contains @ (obfuscation)"))
    }

    fn name(&self) -> &str {
        "at_sign_in_host"
    }
}

pub struct PunycodeHost;

impl SignalExtractor for PunycodeHost {
    fn extract(&self, target: &UrlTarget, _data: &ReferenceData) -> Option<Signal> {
        DomainUtils::is_punycode(&target.host)
            .then(|| Signal::new(PUNYCODE_WEIGHT, "Punycode domain"))
    }

    fn name(&self) -> &str {
        "punycode_host"
    }
}

pub struct RawIpHost;

impl SignalExtractor for RawIpHost {
    fn extract(&self, target: &UrlTarget, _data: &ReferenceData) -> Option<Signal> {
        DomainUtils::is_dotted_quad(&target.host)
            .then(|| Signal::new(RAW_IP_WEIGHT, "Raw IP address"))
    }

    fn name(&self) -> &str {
        "raw_ip_host"
    }
}

pub struct ExcessiveSubdomains;

impl SignalExtractor for ExcessiveSubdomains {
    fn extract(&self, target: &UrlTarget, _data: &ReferenceData) -> Option<Signal> {
        (DomainUtils::subdomain_count(&target.host) >= EXCESSIVE_SUBDOMAIN_LABELS)
            .then(|| Signal::new(EXCESSIVE_SUBDOMAINS_WEIGHT, "Excessive subdomains"))
    }

    fn name(&self) -> &str {
        "excessive_subdomains"
    }
}
