//! Deterministic weighted scoring engine
//!
//! One pass per candidate: every criterion is credited independently, then
//! the license hard filter caps the accumulated total, then the final score
//! is clamped and rounded. No I/O and no shared state; scoring the same
//! records always yields the same reports, in input order.

use crate::config::{Config, ScoringWeights};
use crate::error::Result;
use crate::scoring::education::parse_education_rank;
use crate::scoring::normalize::normalize_term;
use crate::scoring::records::{Candidate, Job, ScoreReport};
use std::collections::HashSet;

/// Upper bound of the compatibility score.
pub const SCORE_MAX: f64 = 100.0;

/// Fixed reasoning line attached to every report.
pub const REASONING: &str = "Score calculated using weighted deterministic scoring model.";

/// Weighted multi-criteria scoring engine.
///
/// Evaluates one job requisition against candidate records and produces one
/// [`ScoreReport`] per candidate. The base criteria sum to 100 points;
/// industry match is a bonus on top, and a missing required license caps the
/// whole total at `license_cap` no matter how well the rest scored.
pub struct ScoringEngine {
    weights: ScoringWeights,
}

/// Outcome of evaluating a single criterion for one candidate.
#[derive(Debug, Default)]
struct CriterionOutcome {
    points: f64,
    strength: Option<String>,
    gap: Option<String>,
    disqualifies: bool,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Build an engine from loaded configuration, rejecting weight tables
    /// that no longer describe a 100-point scale.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.scoring.validate()?;
        Ok(Self::new(config.scoring.clone()))
    }

    /// Score every candidate against the job.
    ///
    /// Reports come back index-aligned with the input: the report for
    /// `candidates[i]` is at position `i`. Candidates are fully independent
    /// of each other, so callers may split the batch however they like as
    /// long as they reassemble results in input order.
    pub fn score(&self, job: &Job, candidates: &[Candidate]) -> Vec<ScoreReport> {
        log::info!("Scoring {} candidate(s) against job requisition", candidates.len());
        candidates
            .iter()
            .map(|candidate| self.score_candidate(job, candidate))
            .collect()
    }

    /// Evaluate a single candidate in one pass over the criteria.
    pub fn score_candidate(&self, job: &Job, candidate: &Candidate) -> ScoreReport {
        let skills = candidate.skill_set();
        let licenses = candidate.license_set();
        let industries = candidate.industry_set();

        let outcomes = [
            self.score_required_skills(job, &skills),
            self.score_preferred_skills(job, &skills),
            self.score_experience(job, candidate),
            self.score_education(job, candidate),
            self.score_licenses(job, &licenses),
            self.score_location(job, candidate),
            self.score_industry(job, &industries),
        ];

        let mut total = 0.0;
        let mut strengths = Vec::new();
        let mut gaps = Vec::new();
        let mut disqualified = false;

        for outcome in outcomes {
            total += outcome.points;
            if let Some(strength) = outcome.strength {
                strengths.push(strength);
            }
            if let Some(gap) = outcome.gap {
                gaps.push(gap);
            }
            disqualified = disqualified || outcome.disqualifies;
        }

        // The hard filter is a cap on the accumulated total, not a
        // short-circuit: every criterion above already ran, so a capped
        // candidate still shows the strengths it earned.
        if disqualified {
            log::debug!(
                "Candidate '{}' disqualified by missing licenses, capping at {}",
                candidate.candidate_name,
                self.weights.license_cap
            );
            total = total.min(self.weights.license_cap);
        }

        let score = round_to_hundredths(total.clamp(0.0, SCORE_MAX));
        log::debug!("Candidate '{}' scored {:.2}", candidate.candidate_name, score);

        ScoreReport {
            candidate: candidate.candidate_name.clone(),
            score,
            strengths,
            gaps,
            reasoning: REASONING.to_string(),
        }
    }

    fn score_required_skills(
        &self,
        job: &Job,
        candidate_skills: &HashSet<String>,
    ) -> CriterionOutcome {
        // A job that lists no required skills grants the full weight.
        if job.required_skills.is_empty() {
            return CriterionOutcome {
                points: self.weights.required_skills,
                ..Default::default()
            };
        }

        let (matched, missing) = partition_matches(&job.required_skills, candidate_skills);
        let points =
            matched.len() as f64 / job.required_skills.len() as f64 * self.weights.required_skills;

        let strength = if matched.is_empty() {
            None
        } else {
            Some(format!("Matched required skills: {}", matched.join(", ")))
        };
        let gap = if missing.is_empty() {
            None
        } else {
            Some(format!("Missing required skills: {}", missing.join(", ")))
        };

        CriterionOutcome {
            points,
            strength,
            gap,
            disqualifies: false,
        }
    }

    fn score_preferred_skills(
        &self,
        job: &Job,
        candidate_skills: &HashSet<String>,
    ) -> CriterionOutcome {
        // Asymmetric with required skills on purpose: no preferred skills
        // listed means no points, not a free grant.
        if job.preferred_skills.is_empty() {
            return CriterionOutcome::default();
        }

        let (matched, _missing) = partition_matches(&job.preferred_skills, candidate_skills);
        let points =
            matched.len() as f64 / job.preferred_skills.len() as f64 * self.weights.preferred_skills;

        let strength = if matched.is_empty() {
            None
        } else {
            Some(format!("Matched preferred skills: {}", matched.join(", ")))
        };

        CriterionOutcome {
            points,
            strength,
            gap: None,
            disqualifies: false,
        }
    }

    fn score_experience(&self, job: &Job, candidate: &Candidate) -> CriterionOutcome {
        if job.minimum_years_experience == 0 {
            return CriterionOutcome {
                points: self.weights.experience,
                ..Default::default()
            };
        }

        let required = f64::from(job.minimum_years_experience);
        let ratio = (candidate.total_years_experience / required).min(1.0);
        let points = ratio * self.weights.experience;

        if candidate.total_years_experience >= required {
            CriterionOutcome {
                points,
                strength: Some("Meets or exceeds experience requirement".to_string()),
                ..Default::default()
            }
        } else {
            CriterionOutcome {
                points,
                gap: Some("Below required experience".to_string()),
                ..Default::default()
            }
        }
    }

    fn score_education(&self, job: &Job, candidate: &Candidate) -> CriterionOutcome {
        let required_rank = parse_education_rank(&job.education_requirement);
        // No parseable degree requirement grants the full weight.
        if required_rank == 0 {
            return CriterionOutcome {
                points: self.weights.education,
                ..Default::default()
            };
        }

        if candidate.highest_education_rank >= required_rank {
            CriterionOutcome {
                points: self.weights.education,
                strength: Some("Education meets requirement".to_string()),
                ..Default::default()
            }
        } else {
            CriterionOutcome {
                gap: Some("Education below requirement".to_string()),
                ..Default::default()
            }
        }
    }

    fn score_licenses(
        &self,
        job: &Job,
        candidate_licenses: &HashSet<String>,
    ) -> CriterionOutcome {
        if job.required_licenses.is_empty() {
            return CriterionOutcome {
                points: self.weights.licenses,
                ..Default::default()
            };
        }

        let (_matched, missing) = partition_matches(&job.required_licenses, candidate_licenses);
        if missing.is_empty() {
            CriterionOutcome {
                points: self.weights.licenses,
                strength: Some("All required licenses present".to_string()),
                ..Default::default()
            }
        } else {
            CriterionOutcome {
                gap: Some(format!("Missing required licenses: {}", missing.join(", "))),
                disqualifies: true,
                ..Default::default()
            }
        }
    }

    fn score_location(&self, job: &Job, candidate: &Candidate) -> CriterionOutcome {
        // An empty requirement leaves location unconstrained.
        if job.location_requirement.is_empty() {
            return CriterionOutcome {
                points: self.weights.location,
                ..Default::default()
            };
        }

        let requirement = job.location_requirement.to_lowercase();
        if requirement == "remote" {
            CriterionOutcome {
                points: self.weights.location,
                strength: Some("Location eligible (Remote)".to_string()),
                ..Default::default()
            }
        } else if candidate.location.to_lowercase().contains(&requirement) {
            CriterionOutcome {
                points: self.weights.location,
                strength: Some("Location matches requirement".to_string()),
                ..Default::default()
            }
        } else {
            CriterionOutcome {
                gap: Some("Location mismatch".to_string()),
                ..Default::default()
            }
        }
    }

    fn score_industry(
        &self,
        job: &Job,
        candidate_industries: &HashSet<String>,
    ) -> CriterionOutcome {
        if job.industry.is_empty() {
            return CriterionOutcome::default();
        }

        if candidate_industries.contains(&normalize_term(&job.industry)) {
            CriterionOutcome {
                points: self.weights.industry_bonus,
                strength: Some("Industry experience match".to_string()),
                ..Default::default()
            }
        } else {
            CriterionOutcome::default()
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

/// Split a job-side requirement list into matched and missing entries,
/// comparing each normalized term against the candidate's normalized set.
/// Original job-record strings and their order are kept for messages.
fn partition_matches<'a>(
    requirements: &'a [String],
    candidate_terms: &HashSet<String>,
) -> (Vec<&'a str>, Vec<&'a str>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for requirement in requirements {
        if candidate_terms.contains(&normalize_term(requirement)) {
            matched.push(requirement.as_str());
        } else {
            missing.push(requirement.as_str());
        }
    }
    (matched, missing)
}

/// Round to two decimal places, half away from zero. Totals here are never
/// negative, so this behaves as round-half-up.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
