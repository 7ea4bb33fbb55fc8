//! Scoring and matching engine

pub mod skill_matcher;
pub mod categorizer;
pub mod scoring;
pub mod gaps;
pub mod strengths;
pub mod ats_matcher;
pub mod analyzer;

pub use analyzer::{MatchEngine, MatchReport};
pub use ats_matcher::KeywordCoverageReport;
pub use categorizer::SkillCategory;
pub use gaps::{Importance, SkillGap};
