use crate::domain_utils::DomainUtils;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const BLACKLIST_FILE: &str = "blacklist.json";
pub const OFFICIAL_ACCOUNTS_FILE: &str = "official_accounts.json";
pub const SCAM_PHRASES_FILE: &str = "scam_phrases.json";

/// A known public identity and the other names it goes by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialIdentity {
    #[serde(rename = "name")]
    pub canonical_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub aliases: Vec<String>,
}

impl OfficialIdentity {
    pub fn new(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Canonical name followed by every alias
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical_name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read-only lookup data shared by every assessment in a session.
///
/// Built once and replaced wholesale on reload; the engine never mutates it, so a single
/// instance can be shared across threads behind an `Arc` without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    blacklisted_domains: HashSet<String>,
    official_identities: Vec<OfficialIdentity>,
    scam_phrases: Vec<String>,
}

impl ReferenceData {
    pub fn new<D, P>(
        blacklisted_domains: D,
        official_identities: Vec<OfficialIdentity>,
        scam_phrases: P,
    ) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let blacklisted_domains = blacklisted_domains
            .into_iter()
            .map(|d| DomainUtils::normalize_domain(d.as_ref()))
            .filter(|d| !d.is_empty())
            .collect();

        // An empty phrase is contained in every text; others are kept exactly as written
        let scam_phrases = scam_phrases
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            blacklisted_domains,
            official_identities,
            scam_phrases,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the three reference lists from `dir`.
    ///
    /// Each list is loaded independently: a missing or unparsable file leaves that list
    /// empty and logs a warning, without affecting the other two.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        let blacklist: Vec<String> = load_list_or_empty(&dir.join(BLACKLIST_FILE));
        let official: Vec<OfficialIdentity> =
            load_list_or_empty(&dir.join(OFFICIAL_ACCOUNTS_FILE));
        let phrases: Vec<String> = load_list_or_empty(&dir.join(SCAM_PHRASES_FILE));

        let data = Self::new(blacklist, official, phrases);
        log::info!(
            "Reference data loaded from {}: {} blacklisted domains, {} official identities, {} scam phrases",
            dir.display(),
            data.blacklisted_domains.len(),
            data.official_identities.len(),
            data.scam_phrases.len()
        );
        data
    }

    pub fn is_blacklisted(&self, host: &str) -> bool {
        self.blacklisted_domains
            .contains(&DomainUtils::normalize_domain(host))
    }

    pub fn blacklisted_domains(&self) -> &HashSet<String> {
        &self.blacklisted_domains
    }

    pub fn official_identities(&self) -> &[OfficialIdentity] {
        &self.official_identities
    }

    pub fn scam_phrases(&self) -> &[String] {
        &self.scam_phrases
    }
}

fn load_list<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reference list {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse reference list {}", path.display()))
}

fn load_list_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    load_list(path).unwrap_or_else(|e| {
        log::warn!("{:#}, using an empty list", e);
        Vec::new()
    })
}
