//! Screening report structures wrapping per-candidate score reports

use crate::config::ScoringWeights;
use crate::input::loader::LoadFailure;
use crate::scoring::records::ScoreReport;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Batch screening report: every candidate's score report plus run metadata.
///
/// Reports stay in submission order throughout; this type never reorders or
/// ranks them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// One report per scored candidate, index-aligned with the submitted
    /// candidate files.
    pub reports: Vec<ScoreReport>,

    /// Candidate files that were skipped at load time, with reasons.
    pub skipped: Vec<LoadFailure>,

    /// Report metadata and generation info.
    pub metadata: ReportMetadata,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: SystemTime,

    /// Version of the screener used
    pub screener_version: String,

    /// Job requisition file scored against
    pub job_file: String,

    /// Number of candidates scored
    pub candidates_scored: usize,

    /// Number of candidate files skipped
    pub candidates_skipped: usize,

    /// Total processing time
    pub processing_time_ms: u64,

    /// Scoring weights in effect for this run
    pub weights: ScoringWeights,
}

impl ScreeningReport {
    pub fn new(
        job_file: String,
        reports: Vec<ScoreReport>,
        skipped: Vec<LoadFailure>,
        weights: ScoringWeights,
        processing_time_ms: u64,
    ) -> Self {
        let metadata = ReportMetadata {
            generated_at: SystemTime::now(),
            screener_version: env!("CARGO_PKG_VERSION").to_string(),
            job_file,
            candidates_scored: reports.len(),
            candidates_skipped: skipped.len(),
            processing_time_ms,
            weights,
        };

        Self {
            reports,
            skipped,
            metadata,
        }
    }

    /// Mean score across scored candidates, if any were scored.
    pub fn average_score(&self) -> Option<f64> {
        if self.reports.is_empty() {
            return None;
        }
        let sum: f64 = self.reports.iter().map(|report| report.score).sum();
        Some(sum / self.reports.len() as f64)
    }
}
