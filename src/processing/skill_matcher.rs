//! Case-insensitive substring skill matching

/// Candidate skills normalized once for repeated lookups.
///
/// A query is possessed when its lowercase form appears inside at least one
/// lowercase candidate skill. The direction matters: "script" is possessed by
/// a candidate listing "JavaScript", but "JavaScript" is not possessed by a
/// candidate listing "script".
#[derive(Debug, Clone)]
pub struct SkillSet<'a> {
    entries: Vec<(&'a str, String)>,
}

impl<'a> SkillSet<'a> {
    pub fn new(candidate_skills: &'a [String]) -> Self {
        let entries = candidate_skills
            .iter()
            .map(|skill| (skill.as_str(), skill.to_lowercase()))
            .collect();
        Self { entries }
    }

    pub fn possesses(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.entries.iter().any(|(_, lowered)| lowered.contains(&query))
    }

    /// Candidate skills (original spelling, declared order) that contain the query
    pub fn holders(&self, query: &str) -> Vec<&'a str> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, lowered)| lowered.contains(&query))
            .map(|(original, _)| *original)
            .collect()
    }

    /// Number of queries possessed by this skill set
    pub fn count_possessed(&self, queries: &[String]) -> usize {
        queries.iter().filter(|query| self.possesses(query)).count()
    }
}

/// Whether `query` is possessed by a candidate with `candidate_skills`
pub fn possesses(candidate_skills: &[String], query: &str) -> bool {
    SkillSet::new(candidate_skills).possesses(query)
}
