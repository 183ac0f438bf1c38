//! Output formatters for screening reports - console, JSON, and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ScreeningReport;
use crate::scoring::records::ScoreReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and per-candidate sections
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    show_reasoning: bool,
}

/// JSON formatter for piping reports into other tooling
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable screening summaries
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, show_reasoning: bool) -> Self {
        Self {
            use_colors,
            detailed,
            show_reasoning,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score {
            s if s >= 90.0 => ("EXCELLENT", Color::Green),
            s if s >= 80.0 => ("VERY GOOD", Color::BrightGreen),
            s if s >= 70.0 => ("GOOD", Color::Yellow),
            s if s >= 60.0 => ("FAIR", Color::BrightYellow),
            s if s >= 50.0 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_candidate(&self, report: &ScoreReport) -> String {
        let mut output = String::new();

        let display_name = if report.candidate.is_empty() {
            "(unnamed candidate)"
        } else {
            &report.candidate
        };
        output.push_str(&self.format_header(display_name, 2));
        output.push_str(&format!(
            "Score: {:.2} {}\n",
            report.score,
            self.format_score_badge(report.score)
        ));

        if !report.strengths.is_empty() {
            output.push_str(&self.format_header("✅ Strengths", 3));
            for strength in &report.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !report.gaps.is_empty() {
            output.push_str(&self.format_header("🎯 Gaps", 3));
            for gap in &report.gaps {
                output.push_str(&format!("  • {}\n", self.colorize(gap, Color::Yellow)));
            }
        }

        if self.detailed && self.show_reasoning {
            output.push_str(&format!("\n{}\n", self.colorize(&report.reasoning, Color::Cyan)));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&self.format_header("📊 RESUME SCREENING REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
                .format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));
        output.push_str(&format!(
            "Job: {} | Candidates scored: {}\n",
            report.metadata.job_file, report.metadata.candidates_scored
        ));

        // Per-candidate sections, in submission order
        for candidate_report in &report.reports {
            output.push_str(&self.format_candidate(candidate_report));
        }

        if report.reports.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize("No candidates were scored.", Color::Yellow)
            ));
        }

        // Skipped files
        if !report.skipped.is_empty() {
            output.push_str(&self.format_header("⚠️ Skipped Files", 2));
            for failure in &report.skipped {
                output.push_str(&format!(
                    "  • {}: {}\n",
                    failure.source,
                    self.colorize(&failure.reason, Color::Red)
                ));
            }
        }

        // Footer
        if let Some(average) = report.average_score() {
            output.push_str(&format!("\nAverage score: {:.2}\n", average));
        }
        output.push_str(&format!(
            "\n{} Generated by Resume Screener v{}\n",
            if self.use_colors {
                "█".blue().to_string()
            } else {
                "█".to_string()
            },
            report.metadata.screener_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn badge_label(score: f64) -> &'static str {
        match score {
            s if s >= 90.0 => "EXCELLENT",
            s if s >= 80.0 => "VERY GOOD",
            s if s >= 70.0 => "GOOD",
            s if s >= 60.0 => "FAIR",
            s if s >= 50.0 => "BELOW AVG",
            _ => "POOR",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Resume Screening Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
                    .format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Job:** `{}` | **Candidates:** {} scored, {} skipped\n\n",
                report.metadata.job_file,
                report.metadata.candidates_scored,
                report.metadata.candidates_skipped
            ));

            output.push_str("### Scoring Weights\n\n");
            output.push_str("| Criterion | Points |\n");
            output.push_str("|-----------|--------|\n");
            let weights = &report.metadata.weights;
            output.push_str(&format!("| Required skills | {} |\n", weights.required_skills));
            output.push_str(&format!("| Preferred skills | {} |\n", weights.preferred_skills));
            output.push_str(&format!("| Experience | {} |\n", weights.experience));
            output.push_str(&format!("| Education | {} |\n", weights.education));
            output.push_str(&format!("| Licenses | {} |\n", weights.licenses));
            output.push_str(&format!("| Location | {} |\n", weights.location));
            output.push_str(&format!("| Industry bonus | +{} |\n\n", weights.industry_bonus));
        }

        output.push_str("## Candidates\n\n");
        for candidate_report in &report.reports {
            let display_name = if candidate_report.candidate.is_empty() {
                "(unnamed candidate)"
            } else {
                &candidate_report.candidate
            };
            output.push_str(&format!("### {}\n\n", display_name));
            output.push_str(&format!(
                "**Score:** {:.2} **{}**\n\n",
                candidate_report.score,
                Self::badge_label(candidate_report.score)
            ));

            if !candidate_report.strengths.is_empty() {
                output.push_str("**Strengths:**\n\n");
                for strength in &candidate_report.strengths {
                    output.push_str(&format!("- {}\n", strength));
                }
                output.push('\n');
            }

            if !candidate_report.gaps.is_empty() {
                output.push_str("**Gaps:**\n\n");
                for gap in &candidate_report.gaps {
                    output.push_str(&format!("- {}\n", gap));
                }
                output.push('\n');
            }

            output.push_str(&format!("_{}_\n\n", candidate_report.reasoning));
        }

        if report.reports.is_empty() {
            output.push_str("_No candidates were scored._\n\n");
        }

        if !report.skipped.is_empty() {
            output.push_str("## ⚠️ Skipped Files\n\n");
            for failure in &report.skipped {
                output.push_str(&format!("- `{}`: {}\n", failure.source, failure.reason));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "---\n\n*Generated by Resume Screener v{}*\n",
            report.metadata.screener_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false, true),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        show_reasoning: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed, show_reasoning),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &ScreeningReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, job_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(job_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_screening{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_screening{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_screening{}.md", base_name, timestamp_suffix),
    }
}
