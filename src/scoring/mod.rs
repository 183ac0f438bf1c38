//! Deterministic job/candidate compatibility scoring

pub mod education;
pub mod engine;
pub mod normalize;
pub mod records;
