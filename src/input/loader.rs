//! Record loading for extracted job and candidate JSON files

use crate::error::{Result, ScreenerError};
use crate::scoring::records::{Candidate, Job};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub struct RecordLoader;

/// Candidate records that parsed, in input order, plus the files that had
/// to be skipped. One bad file never aborts the batch.
#[derive(Debug)]
pub struct CandidateBatch {
    pub candidates: Vec<Candidate>,
    pub failures: Vec<LoadFailure>,
}

/// A candidate file that could not be loaded, with the reason it was
/// skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadFailure {
    pub source: String,
    pub reason: String,
}

impl RecordLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load the job requisition record. A job that fails to load fails the
    /// whole run; nothing can be scored without it.
    pub async fn load_job(&self, path: &Path) -> Result<Job> {
        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "Job file does not exist: {}",
                path.display()
            )));
        }

        info!("Loading job requisition: {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        let job: Job = serde_json::from_str(&content)?;
        Ok(job)
    }

    /// Load candidate records in the order given, isolating failures: a
    /// malformed or unreadable file becomes a [`LoadFailure`] entry while
    /// the remaining candidates still load.
    pub async fn load_candidates(&self, paths: &[PathBuf]) -> CandidateBatch {
        let mut candidates = Vec::new();
        let mut failures = Vec::new();

        for path in paths {
            match self.load_candidate(path).await {
                Ok(candidate) => candidates.push(candidate),
                Err(e) => {
                    warn!("Skipping candidate file {}: {}", path.display(), e);
                    failures.push(LoadFailure {
                        source: path.display().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        CandidateBatch {
            candidates,
            failures,
        }
    }

    pub async fn load_candidate(&self, path: &Path) -> Result<Candidate> {
        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "Candidate file does not exist: {}",
                path.display()
            )));
        }

        info!("Loading candidate record: {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        let candidate: Candidate = serde_json::from_str(&content)?;
        Ok(candidate)
    }
}
