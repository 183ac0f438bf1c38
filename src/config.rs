//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringWeights,
    pub output: OutputConfig,
}

/// Point weights for each scoring criterion.
///
/// The six base criteria describe a 100-point scale; the industry bonus sits
/// outside that base, and `license_cap` is the ceiling applied to candidates
/// missing a required license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub required_skills: f64,
    pub preferred_skills: f64,
    pub experience: f64,
    pub education: f64,
    pub licenses: f64,
    pub location: f64,
    pub industry_bonus: f64,
    pub license_cap: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub show_reasoning: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringWeights::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                show_reasoning: true,
                color_output: true,
            },
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            required_skills: 40.0,
            preferred_skills: 15.0,
            experience: 20.0,
            education: 10.0,
            licenses: 10.0,
            location: 5.0,
            industry_bonus: 5.0,
            license_cap: 50.0,
        }
    }
}

impl ScoringWeights {
    /// Sum of the six base criteria, excluding the industry bonus.
    pub fn base_total(&self) -> f64 {
        self.required_skills
            + self.preferred_skills
            + self.experience
            + self.education
            + self.licenses
            + self.location
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            self.required_skills,
            self.preferred_skills,
            self.experience,
            self.education,
            self.licenses,
            self.location,
            self.industry_bonus,
        ];
        if weights.iter().any(|w| *w < 0.0) {
            return Err(ScreenerError::Configuration(
                "Scoring weights must not be negative".to_string(),
            ));
        }

        let base = self.base_total();
        if (base - 100.0).abs() > 1e-6 {
            return Err(ScreenerError::Configuration(format!(
                "Base scoring weights must sum to 100, got {}",
                base
            )));
        }

        if !(0.0..=100.0).contains(&self.license_cap) {
            return Err(ScreenerError::Configuration(format!(
                "License cap must be within [0, 100], got {}",
                self.license_cap
            )));
        }

        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, preferring an explicit path over the default
    /// location. A missing default config is created with defaults; a
    /// missing explicit path is an error.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => Self::config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ScreenerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else if path.is_some() {
            Err(ScreenerError::Configuration(format!(
                "Config file not found: {}",
                config_path.display()
            )))
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_validate() {
        let weights = ScoringWeights::default();
        assert!(weights.validate().is_ok());
        assert_eq!(weights.base_total(), 100.0);
    }

    #[test]
    fn test_unbalanced_weights_are_rejected() {
        let weights = ScoringWeights {
            required_skills: 50.0,
            ..Default::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_out_of_range_cap_is_rejected() {
        let weights = ScoringWeights {
            license_cap: 150.0,
            ..Default::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.scoring, config.scoring);
    }
}
