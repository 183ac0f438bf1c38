//! Input processing module
//! Handles structured record loading from extracted JSON files

pub mod loader;
