//! Skill gap analysis over required skills

use crate::processing::categorizer::{SkillCategorizer, SkillCategory};
use crate::processing::skill_matcher::SkillSet;
use crate::records::{CandidateProfile, PositionDescription};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    Required,
}

/// A required skill the candidate does not possess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub category: SkillCategory,
    pub importance: Importance,
}

pub struct GapAnalyzer<'a> {
    categorizer: &'a SkillCategorizer,
}

impl<'a> GapAnalyzer<'a> {
    pub fn new(categorizer: &'a SkillCategorizer) -> Self {
        Self { categorizer }
    }

    /// Gaps among the first `max_gaps` required skills, in declared order.
    ///
    /// Only that leading window is inspected, so the result never exceeds
    /// `max_gaps` entries even when later required skills are also missing.
    pub fn gaps(
        &self,
        candidate: &CandidateProfile,
        position: &PositionDescription,
        max_gaps: usize,
    ) -> Vec<SkillGap> {
        let skills = SkillSet::new(&candidate.skills);

        position
            .required_skills
            .iter()
            .take(max_gaps)
            .filter(|required| !skills.possesses(required))
            .map(|required| SkillGap {
                skill: required.clone(),
                category: self.categorizer.categorize(required),
                importance: Importance::Required,
            })
            .collect()
    }
}
