//! Integration tests for the resume screener

use resume_screener::config::{OutputFormat, ScoringWeights};
use resume_screener::input::loader::RecordLoader;
use resume_screener::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_screener::output::report::ScreeningReport;
use resume_screener::scoring::engine::{ScoringEngine, REASONING};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

/// Load the nurse requisition and both valid candidate fixtures, score them,
/// and wrap the results in a screening report.
async fn screen_fixture_candidates() -> ScreeningReport {
    let loader = RecordLoader::new();
    let job = loader.load_job(&fixture("job_nurse.json")).await.unwrap();
    let batch = loader
        .load_candidates(&[
            fixture("candidate_strong.json"),
            fixture("candidate_unlicensed.json"),
        ])
        .await;
    assert!(batch.failures.is_empty());

    let reports = ScoringEngine::default().score(&job, &batch.candidates);
    ScreeningReport::new(
        "job_nurse.json".to_string(),
        reports,
        batch.failures,
        ScoringWeights::default(),
        7,
    )
}

#[tokio::test]
async fn test_load_job_fixture() {
    let loader = RecordLoader::new();
    let job = loader.load_job(&fixture("job_nurse.json")).await.unwrap();

    assert_eq!(
        job.required_skills,
        vec!["Patient Care", "Medication Administration", "IV Therapy"]
    );
    assert_eq!(job.required_licenses, vec!["Registered Nurse (RN)"]);
    assert_eq!(job.minimum_years_experience, 3);
    assert_eq!(job.location_requirement, "Dallas, TX");
    assert_eq!(job.industry, "Healthcare");
}

#[tokio::test]
async fn test_nonexistent_job_file() {
    let loader = RecordLoader::new();
    let result = loader
        .load_job(Path::new("tests/fixtures/no_such_job.json"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_malformed_candidate_is_isolated() {
    let loader = RecordLoader::new();
    let batch = loader
        .load_candidates(&[
            fixture("candidate_strong.json"),
            fixture("candidate_malformed.json"),
            fixture("candidate_unlicensed.json"),
        ])
        .await;

    // The bad file is reported, the good ones still load in input order.
    assert_eq!(batch.candidates.len(), 2);
    assert_eq!(batch.candidates[0].candidate_name, "John Smith");
    assert_eq!(batch.candidates[1].candidate_name, "Maria Garcia");
    assert_eq!(batch.failures.len(), 1);
    assert!(batch.failures[0].source.contains("candidate_malformed.json"));
    assert!(!batch.failures[0].reason.is_empty());
}

#[tokio::test]
async fn test_nonexistent_candidate_becomes_failure() {
    let loader = RecordLoader::new();
    let batch = loader
        .load_candidates(&[fixture("no_such_candidate.json")])
        .await;

    assert!(batch.candidates.is_empty());
    assert_eq!(batch.failures.len(), 1);
    assert!(batch.failures[0].reason.contains("does not exist"));
}

#[tokio::test]
async fn test_end_to_end_scoring() {
    let report = screen_fixture_candidates().await;
    assert_eq!(report.reports.len(), 2);
    assert_eq!(report.metadata.candidates_scored, 2);

    // Fully qualified RN: every criterion in full plus the industry bonus,
    // clamped to 100.
    let strong = &report.reports[0];
    assert_eq!(strong.candidate, "John Smith");
    assert_eq!(strong.score, 100.00);
    assert!(strong.gaps.is_empty());
    assert!(strong.strengths.contains(
        &"Matched required skills: Patient Care, Medication Administration, IV Therapy".to_string()
    ));
    assert!(strong
        .strengths
        .contains(&"Matched preferred skills: Critical Care, Triage".to_string()));
    assert!(strong
        .strengths
        .contains(&"All required licenses present".to_string()));
    assert_eq!(strong.reasoning, REASONING);

    // Missing the RN license: raw points land above 50, the cap pulls the
    // score down, and the strengths earned elsewhere survive.
    let unlicensed = &report.reports[1];
    assert_eq!(unlicensed.candidate, "Maria Garcia");
    assert_eq!(unlicensed.score, 50.00);
    assert!(unlicensed
        .gaps
        .contains(&"Missing required licenses: Registered Nurse (RN)".to_string()));
    assert!(unlicensed
        .gaps
        .contains(&"Missing required skills: IV Therapy".to_string()));
    assert!(unlicensed
        .gaps
        .contains(&"Education below requirement".to_string()));
    assert!(unlicensed
        .strengths
        .contains(&"Meets or exceeds experience requirement".to_string()));
}

#[tokio::test]
async fn test_json_report_wire_format() {
    let report = screen_fixture_candidates().await;
    let generator = ReportGenerator::new();
    let json = generator
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &parsed["reports"][0];
    assert_eq!(first["candidate"], "John Smith");
    assert_eq!(first["score"], 100.0);
    assert!(first["strengths"].is_array());
    assert!(first["gaps"].is_array());
    assert_eq!(first["reasoning"], REASONING);

    assert_eq!(parsed["metadata"]["weights"]["required_skills"], 40.0);
    assert_eq!(parsed["metadata"]["candidates_scored"], 2);
}

#[tokio::test]
async fn test_console_and_markdown_rendering() {
    let report = screen_fixture_candidates().await;
    let generator = ReportGenerator::with_options(false, true, true, true, true);

    let console = generator
        .generate_report(&report, &OutputFormat::Console)
        .unwrap();
    assert!(console.contains("RESUME SCREENING REPORT"));
    assert!(console.contains("John Smith"));
    assert!(console.contains("Score: 100.00 [EXCELLENT]"));
    assert!(console.contains("Score: 50.00 [BELOW AVG]"));
    assert!(console.contains("Average score: 75.00"));

    let markdown = generator
        .generate_report(&report, &OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("### Maria Garcia"));
    assert!(markdown.contains("**Score:** 50.00 **BELOW AVG**"));
    assert!(markdown.contains("- Missing required licenses: Registered Nurse (RN)"));
    assert!(markdown.contains("| Required skills | 40 |"));
}

#[tokio::test]
async fn test_save_report_round_trip() {
    let report = screen_fixture_candidates().await;
    let generator = ReportGenerator::new();
    let json = generator
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("screening.json");
    save_report_to_file(&json, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, json);
}

#[test]
fn test_suggested_filenames_follow_the_job_name() {
    assert_eq!(
        suggest_filename(&OutputFormat::Json, "tests/fixtures/job_nurse.json", false),
        "job_nurse_screening.json"
    );
    assert_eq!(
        suggest_filename(&OutputFormat::Markdown, "job_nurse.json", false),
        "job_nurse_screening.md"
    );
    assert_eq!(
        suggest_filename(&OutputFormat::Console, "job_nurse.json", false),
        "job_nurse_screening.txt"
    );
}
