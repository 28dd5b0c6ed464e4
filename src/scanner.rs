//! Reference page scanner built on top of the engine.
//!
//! The engine is stateless; remembering which links and posts were already assessed,
//! and showing at most one profile banner per page, is the scanner's job.

use crate::advice::Advice;
use crate::assessment::AssessmentResult;
use crate::identity_scorer::assess_identity;
use crate::link_scorer::assess_link;
use crate::normalization::normalize_name;
use crate::reference_data::ReferenceData;
use crate::settings::Settings;
use crate::text_scorer::assess_text;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkElement {
    /// Stable element identity; the element's position in the snapshot is used when absent
    #[serde(default)]
    pub id: Option<String>,
    pub href: String,
    #[serde(default)]
    pub context: String,
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostElement {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
}

/// Identity of a page element for de-duplication. Two elements with equal content are
/// still distinct unless they share an id or a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ElementKey {
    Id(String),
    Position(usize),
}

impl ElementKey {
    fn new(id: Option<&str>, position: usize) -> Self {
        match id {
            Some(id) => ElementKey::Id(id.to_string()),
            None => ElementKey::Position(position),
        }
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKey::Id(id) => f.write_str(id),
            ElementKey::Position(position) => write!(f, "#{}", position),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileHeader {
    pub name: String,
    #[serde(default)]
    pub verified: bool,
}

/// Everything on a page the scanner looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub links: Vec<LinkElement>,
    #[serde(default)]
    pub posts: Vec<PostElement>,
    #[serde(default)]
    pub profile: Option<ProfileHeader>,
}

impl PageSnapshot {
    /// Load a snapshot; `.json` files are read as JSON, anything else as YAML.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page snapshot {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let snapshot = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON snapshot {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML snapshot {}", path.display()))?
        };
        Ok(snapshot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkFinding {
    pub href: String,
    pub result: AssessmentResult,
    pub advice: Advice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostFinding {
    pub key: String,
    pub result: AssessmentResult,
    pub advice: Advice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileFinding {
    pub name: String,
    pub verified: bool,
    pub result: AssessmentResult,
    pub advice: Advice,
}

/// Findings from one pass. Only items that warrant a badge or banner are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub links_scanned: usize,
    pub posts_scanned: usize,
    pub links: Vec<LinkFinding>,
    pub posts: Vec<PostFinding>,
    pub profile: Option<ProfileFinding>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.posts.is_empty() && self.profile.is_none()
    }
}

pub struct PageScanner<'a> {
    settings: &'a Settings,
    data: &'a ReferenceData,
    seen_links: HashSet<ElementKey>,
    seen_posts: HashSet<ElementKey>,
    profile_banner_shown: bool,
}

impl<'a> PageScanner<'a> {
    pub fn new(settings: &'a Settings, data: &'a ReferenceData) -> Self {
        Self {
            settings,
            data,
            seen_links: HashSet::new(),
            seen_posts: HashSet::new(),
            profile_banner_shown: false,
        }
    }

    /// Assess everything on the page not seen by an earlier pass.
    pub fn scan(&mut self, snapshot: &PageSnapshot) -> ScanReport {
        let mut report = ScanReport::default();

        if !self.settings.enabled {
            log::debug!("Scanning disabled by settings");
            return report;
        }

        self.scan_links(snapshot, &mut report);
        self.scan_posts(snapshot, &mut report);
        self.scan_profile(snapshot, &mut report);

        log::info!(
            "Scan pass: {} links, {} posts assessed; {} link and {} post findings{}",
            report.links_scanned,
            report.posts_scanned,
            report.links.len(),
            report.posts.len(),
            if report.profile.is_some() {
                ", profile banner"
            } else {
                ""
            }
        );
        report
    }

    fn scan_links(&mut self, snapshot: &PageSnapshot, report: &mut ScanReport) {
        let sensitivity = self.settings.sensitivity;

        for (position, link) in snapshot.links.iter().enumerate() {
            if !link.href.starts_with("http") {
                continue;
            }
            if !self
                .seen_links
                .insert(ElementKey::new(link.id.as_deref(), position))
            {
                continue;
            }
            report.links_scanned += 1;

            let context = link.context.to_lowercase();
            let result = assess_link(&link.href, &context, sensitivity, self.data);
            let advice = Advice::for_link(&result, self.settings);
            if advice.show {
                report.links.push(LinkFinding {
                    href: link.href.clone(),
                    result,
                    advice,
                });
            }
        }
    }

    fn scan_posts(&mut self, snapshot: &PageSnapshot, report: &mut ScanReport) {
        for (position, post) in snapshot.posts.iter().enumerate() {
            let key = ElementKey::new(post.id.as_deref(), position);
            if !self.seen_posts.insert(key.clone()) {
                continue;
            }
            report.posts_scanned += 1;

            let text = post.text.to_lowercase();
            let result = assess_text(text.as_str(), self.settings.sensitivity, self.data);
            let advice = Advice::for_post(&result);
            if advice.show {
                report.posts.push(PostFinding {
                    key: key.to_string(),
                    result,
                    advice,
                });
            }
        }
    }

    fn scan_profile(&mut self, snapshot: &PageSnapshot, report: &mut ScanReport) {
        if self.profile_banner_shown {
            return;
        }
        let Some(profile) = &snapshot.profile else {
            return;
        };

        let name = normalize_name(&profile.name);
        if name.is_empty() {
            return;
        }

        let result = assess_identity(
            &name,
            profile.verified,
            self.settings.sensitivity,
            self.data,
        );
        let advice = Advice::for_profile(&result);
        if advice.show {
            self.profile_banner_shown = true;
            report.profile = Some(ProfileFinding {
                name: profile.name.clone(),
                verified: profile.verified,
                result,
                advice,
            });
        }
    }

    /// Forget everything seen so far, as on navigation to a new page.
    pub fn reset(&mut self) {
        self.seen_links.clear();
        self.seen_posts.clear();
        self.profile_banner_shown = false;
    }
}
