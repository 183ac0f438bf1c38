//! Education requirement rank parsing
//!
//! Job requirements arrive as free text ("Bachelor's Degree in Nursing or
//! higher"), so the required rank has to be recovered by keyword scan.
//! Candidate ranks arrive precomputed by the extractor on the same 1-5
//! ladder and are trusted as-is.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

/// Degree keywords paired with their seniority rank.
/// High School=1, Associate=2, Bachelor=3, Master=4, PhD=5.
const DEGREE_KEYWORDS: [(&str, u8); 5] = [
    ("phd", 5),
    ("master", 4),
    ("bachelor", 3),
    ("associate", 2),
    ("high school", 1),
];

static DEGREE_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    let patterns: Vec<&str> = DEGREE_KEYWORDS.iter().map(|(keyword, _)| *keyword).collect();
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(&patterns)
        .expect("degree keyword automaton builds from a fixed pattern table")
});

/// Map a free-text education requirement to an integer rank 0-5.
///
/// The highest-ranked degree keyword found anywhere in the string wins, so
/// "Master's Degree or PhD" resolves to 5. Returns 0 when no degree keyword
/// is present; scoring treats rank 0 as "no education requirement".
pub fn parse_education_rank(requirement: &str) -> u8 {
    DEGREE_MATCHER
        .find_iter(requirement)
        .map(|mat| DEGREE_KEYWORDS[mat.pattern().as_usize()].1)
        .max()
        .unwrap_or(0)
}
