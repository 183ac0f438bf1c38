//! Resume screener library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{Result, ScreenerError};
pub use scoring::engine::ScoringEngine;
pub use scoring::records::{Candidate, Job, ScoreReport};
