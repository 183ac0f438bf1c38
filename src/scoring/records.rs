//! Structured job and candidate records
//!
//! These mirror the JSON schema produced by the upstream extraction service,
//! so field names and casing are a wire contract. Every field is optional on
//! the wire: absent fields fall back to empty/zero defaults, and list fields
//! tolerate non-string entries by dropping them.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

use crate::scoring::normalize::normalize_terms;

/// Employer requirement record for a single job requisition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "lenient_string_list")]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_string_list")]
    pub preferred_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_string_list")]
    pub required_licenses: Vec<String>,
    pub education_requirement: String,
    pub minimum_years_experience: u32,
    pub location_requirement: String,
    pub employment_type: String,
    pub industry: String,
}

/// Candidate record extracted from one resume.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub candidate_name: String,
    #[serde(deserialize_with = "lenient_string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient_string_list")]
    pub licenses: Vec<String>,
    #[serde(deserialize_with = "lenient_string_list")]
    pub education: Vec<String>,
    pub highest_education_level: String,
    pub highest_education_rank: u8,
    pub total_years_experience: f64,
    pub location: String,
    pub employment_type_preference: String,
    #[serde(deserialize_with = "lenient_string_list")]
    pub industries_worked_in: Vec<String>,
}

impl Candidate {
    /// Normalized skill set for membership tests.
    pub fn skill_set(&self) -> HashSet<String> {
        normalize_terms(&self.skills)
    }

    /// Normalized license set for membership tests.
    pub fn license_set(&self) -> HashSet<String> {
        normalize_terms(&self.licenses)
    }

    /// Normalized industry set for membership tests.
    pub fn industry_set(&self) -> HashSet<String> {
        normalize_terms(&self.industries_worked_in)
    }
}

/// Scoring verdict for one candidate against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub candidate: String,
    pub score: f64,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub reasoning: String,
}

/// Deserialize a JSON array into strings, silently dropping any entry that
/// is not a string. Extraction output is LLM-produced and occasionally mixes
/// numbers or nulls into its lists.
fn lenient_string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_parses_wire_schema() {
        let json = r#"{
            "required_skills": ["SQL", "Python"],
            "preferred_skills": ["AWS"],
            "required_licenses": [],
            "education_requirement": "Bachelor's Degree in Computer Science",
            "minimum_years_experience": 3,
            "location_requirement": "Austin, TX",
            "employment_type": "Full-time",
            "industry": "Technology"
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.required_skills, vec!["SQL", "Python"]);
        assert_eq!(job.minimum_years_experience, 3);
        assert_eq!(job.industry, "Technology");
    }

    #[test]
    fn test_absent_fields_default() {
        let job: Job = serde_json::from_str("{}").unwrap();
        assert!(job.required_skills.is_empty());
        assert_eq!(job.minimum_years_experience, 0);
        assert_eq!(job.location_requirement, "");

        let candidate: Candidate = serde_json::from_str("{}").unwrap();
        assert_eq!(candidate.candidate_name, "");
        assert_eq!(candidate.highest_education_rank, 0);
        assert_eq!(candidate.total_years_experience, 0.0);
    }

    #[test]
    fn test_non_string_list_entries_are_dropped() {
        let json = r#"{
            "candidate_name": "Jane Doe",
            "skills": ["Rust", 42, null, "SQL", {"name": "Python"}]
        }"#;

        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_candidate_sets_are_normalized() {
        let candidate = Candidate {
            skills: vec!["  AWS ".to_string(), "Python".to_string()],
            ..Default::default()
        };

        let set = candidate.skill_set();
        assert!(set.contains("aws"));
        assert!(set.contains("python"));
    }

    #[test]
    fn test_score_report_round_trips() {
        let report = ScoreReport {
            candidate: "Jane Doe".to_string(),
            score: 87.5,
            strengths: vec!["Matched required skills: SQL".to_string()],
            gaps: vec![],
            reasoning: "Score calculated using weighted deterministic scoring model."
                .to_string(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"candidate\""));
        assert!(json.contains("\"strengths\""));
        let back: ScoreReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
