//! Resume screener: deterministic resume and job requisition compatibility scoring

mod cli;
mod config;
mod error;
mod input;
mod output;
mod scoring;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ScreenerError};
use input::loader::RecordLoader;
use log::{error, info};
use output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use output::report::ScreeningReport;
use scoring::engine::ScoringEngine;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            job,
            resume,
            detailed,
            output,
            pretty,
            save,
        } => {
            info!("Starting resume screening");

            // Validate input files
            cli::validate_file_extension(&job, &["json"])
                .map_err(|e| ScreenerError::InvalidInput(format!("Job file: {}", e)))?;
            for path in &resume {
                cli::validate_file_extension(path, &["json"])
                    .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;
            }

            // Parse output format
            let output_format =
                cli::parse_output_format(&output).map_err(ScreenerError::InvalidInput)?;

            println!("🚀 Resume screening");
            println!("💼 Job requisition: {}", job.display());
            println!("📄 Candidate records: {}", resume.len());
            println!("🔧 Output Format: {:?}", output_format);

            if detailed {
                println!("📊 Detailed output enabled");
            }

            println!("\n📂 Loading extracted records...");

            let loader = RecordLoader::new();
            let job_record = loader.load_job(&job).await?;
            let batch = loader.load_candidates(&resume).await;

            if !batch.failures.is_empty() {
                println!(
                    "⚠️  Skipped {} candidate file(s) that could not be loaded",
                    batch.failures.len()
                );
            }
            println!("✅ Loaded {} candidate record(s)", batch.candidates.len());

            // Score the batch
            println!("\n🔍 Scoring candidates...");
            let engine = ScoringEngine::from_config(&config)?;
            let start_time = Instant::now();
            let reports = engine.score(&job_record, &batch.candidates);
            let processing_time_ms = start_time.elapsed().as_millis() as u64;

            let screening = ScreeningReport::new(
                job.to_string_lossy().to_string(),
                reports,
                batch.failures,
                config.scoring.clone(),
                processing_time_ms,
            );

            // Render the report
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                config.output.show_reasoning,
                pretty,
                true,
            );
            let rendered = generator.generate_report(&screening, &output_format)?;

            match save {
                Some(path) => {
                    let target = if path.is_dir() {
                        path.join(suggest_filename(
                            &output_format,
                            &job.to_string_lossy(),
                            true,
                        ))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &target)?;
                    println!("💾 Report saved to: {}", target.display());
                }
                None => println!("{}", rendered),
            }

            println!(
                "\n🎯 Screening complete! {} candidate(s) scored",
                screening.metadata.candidates_scored
            );
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Config file: {}", Config::config_path().display());
                    println!("\nScoring Weights:");
                    println!("  Required skills: {:.1}", config.scoring.required_skills);
                    println!("  Preferred skills: {:.1}", config.scoring.preferred_skills);
                    println!("  Experience: {:.1}", config.scoring.experience);
                    println!("  Education: {:.1}", config.scoring.education);
                    println!("  Licenses: {:.1}", config.scoring.licenses);
                    println!("  Location: {:.1}", config.scoring.location);
                    println!("  Industry bonus: +{:.1}", config.scoring.industry_bonus);
                    println!("  License cap: {:.1}", config.scoring.license_cap);
                    println!("\nOutput:");
                    println!("  Format: {:?}", config.output.format);
                    println!("  Detailed: {}", config.output.detailed);
                    println!("  Show reasoning: {}", config.output.show_reasoning);
                    println!("  Colors: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    let default_config = Config::default();
                    default_config.save()?;
                    println!("✅ Configuration reset successfully!");
                }
            }
        }
    }

    Ok(())
}
