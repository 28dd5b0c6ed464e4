use crate::assessment::AssessmentResult;
use crate::level::{RiskLevel, Sensitivity};
use crate::normalization::{edit_distance, normalize_name};
use crate::reference_data::{OfficialIdentity, ReferenceData};
use crate::vocabulary::OFFICIAL_CLAIM;
use serde::{Deserialize, Serialize};

/// Largest edit distance still treated as a lookalike of an official name.
/// Fixed; the sensitivity setting never tunes identity matching.
pub const FUZZY_MATCH_MAX_DISTANCE: usize = 3;

pub const IMPERSONATION_MESSAGE: &str =
    "🚫 Possible impersonation: name matches a known public figure but no verification badge.";
pub const VERIFIED_OFFICIAL_MESSAGE: &str =
    "🟢 Verified Authentic Account (matches official list).";
pub const CLAIMS_OFFICIAL_MESSAGE: &str = "⚠️ Account claims to be official but is not verified.";
pub const VERIFIED_MESSAGE: &str = "🟢 Verified Authentic Account.";

/// Which identity rule applied. Exactly one per assessment, checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IdentityOutcome {
    ExactMatchUnverified { canonical_name: String },
    ExactMatchVerified { canonical_name: String },
    FuzzyMatchUnverified { closest: String, distance: usize },
    SelfClaimedOfficialUnverified,
    VerifiedNoMatch,
    NoMatch,
}

impl IdentityOutcome {
    pub fn level(&self) -> RiskLevel {
        match self {
            IdentityOutcome::ExactMatchUnverified { .. } => RiskLevel::High,
            IdentityOutcome::FuzzyMatchUnverified { .. }
            | IdentityOutcome::SelfClaimedOfficialUnverified => RiskLevel::Suspicious,
            IdentityOutcome::ExactMatchVerified { .. }
            | IdentityOutcome::VerifiedNoMatch
            | IdentityOutcome::NoMatch => RiskLevel::Safe,
        }
    }

    pub fn message(&self) -> String {
        match self {
            IdentityOutcome::ExactMatchUnverified { .. } => IMPERSONATION_MESSAGE.to_string(),
            IdentityOutcome::ExactMatchVerified { .. } => VERIFIED_OFFICIAL_MESSAGE.to_string(),
            IdentityOutcome::FuzzyMatchUnverified { closest, .. } => format!(
                "⚠️ Name is similar to a public figure (“{}”). Verify before interacting.",
                closest
            ),
            IdentityOutcome::SelfClaimedOfficialUnverified => CLAIMS_OFFICIAL_MESSAGE.to_string(),
            IdentityOutcome::VerifiedNoMatch => VERIFIED_MESSAGE.to_string(),
            IdentityOutcome::NoMatch => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAssessment {
    #[serde(flatten)]
    pub outcome: IdentityOutcome,
    pub result: AssessmentResult,
}

/// First reference identity whose canonical name or alias normalizes to `normalized`.
fn find_exact_match<'a>(
    normalized: &str,
    identities: &'a [OfficialIdentity],
) -> Option<&'a OfficialIdentity> {
    identities.iter().find(|identity| {
        identity
            .all_names()
            .map(normalize_name)
            .any(|candidate| !candidate.is_empty() && candidate == normalized)
    })
}

/// Closest canonical name within [`FUZZY_MATCH_MAX_DISTANCE`]. Ties go to the earliest entry.
fn find_closest_name<'a>(
    normalized: &str,
    identities: &'a [OfficialIdentity],
) -> Option<(&'a str, usize)> {
    let mut best: Option<(&str, usize)> = None;

    for identity in identities {
        let candidate = normalize_name(&identity.canonical_name);
        if candidate.is_empty() {
            continue;
        }
        let distance = edit_distance(normalized, &candidate);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((identity.canonical_name.as_str(), distance));
        }
    }

    best.filter(|(_, distance)| *distance <= FUZZY_MATCH_MAX_DISTANCE)
}

/// Resolve a claimed profile name against the official identity list.
pub fn resolve_identity(name: &str, verified: bool, data: &ReferenceData) -> IdentityOutcome {
    let normalized = normalize_name(name);
    let identities = data.official_identities();

    // An empty name would equal any alias that also normalizes to nothing
    if !normalized.is_empty() {
        if let Some(identity) = find_exact_match(&normalized, identities) {
            let canonical_name = identity.canonical_name.clone();
            return if verified {
                IdentityOutcome::ExactMatchVerified { canonical_name }
            } else {
                IdentityOutcome::ExactMatchUnverified { canonical_name }
            };
        }
    }

    if !verified {
        if let Some((closest, distance)) = find_closest_name(&normalized, identities) {
            return IdentityOutcome::FuzzyMatchUnverified {
                closest: closest.to_string(),
                distance,
            };
        }
    }

    if verified {
        IdentityOutcome::VerifiedNoMatch
    } else if let Some(term) = OFFICIAL_CLAIM.first_match(name) {
        log::debug!(
            "Name '{}' uses {} term '{}'",
            name,
            OFFICIAL_CLAIM.name,
            term
        );
        IdentityOutcome::SelfClaimedOfficialUnverified
    } else {
        IdentityOutcome::NoMatch
    }
}

/// Resolve an identity and package it with its assessment.
///
/// Identity outcomes carry no numeric evidence, so the score is always zero and the level
/// comes from the outcome. `sensitivity` only tunes score-based levels and is accepted here
/// so all three scorers share one calling convention.
pub fn assess_identity_detailed(
    name: &str,
    verified: bool,
    sensitivity: Sensitivity,
    data: &ReferenceData,
) -> IdentityAssessment {
    let outcome = resolve_identity(name, verified, data);
    log::debug!(
        "Identity '{}' (verified: {}, sensitivity: {}) resolved to {:?}",
        name,
        verified,
        sensitivity,
        outcome
    );

    let result = AssessmentResult::new(0, outcome.level(), outcome.message());
    IdentityAssessment { outcome, result }
}

pub fn assess_identity(
    name: &str,
    verified: bool,
    sensitivity: Sensitivity,
    data: &ReferenceData,
) -> AssessmentResult {
    assess_identity_detailed(name, verified, sensitivity, data).result
}
