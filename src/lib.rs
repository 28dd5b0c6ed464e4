pub mod advice;
pub mod assessment;
pub mod domain_utils;
pub mod identity_scorer;
pub mod level;
pub mod link_scorer;
pub mod normalization;
pub mod reference_data;
pub mod scanner;
pub mod settings;
pub mod signals;
pub mod text_scorer;
pub mod vocabulary;

pub use advice::Advice;
pub use assessment::{AssessmentResult, Signal};
pub use identity_scorer::{assess_identity, assess_identity_detailed, IdentityOutcome};
pub use level::{score_to_level, RiskLevel, Sensitivity};
pub use link_scorer::{assess_link, LinkScorer};
pub use normalization::{edit_distance, normalize_name};
pub use reference_data::{OfficialIdentity, ReferenceData};
pub use scanner::{PageScanner, PageSnapshot, ScanReport};
pub use settings::Settings;
pub use text_scorer::assess_text;
