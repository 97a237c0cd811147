//! shpg - Super hashing password generator.
//!
//! Strengthens a memorable secret by repeatedly salting and hashing it, then
//! applying a cosmetic post-processing step to the final digest.

pub mod benchmark;
pub mod count;
pub mod error;
pub mod hash;
pub mod output;
pub mod pipeline;
pub mod post;
pub mod profile;
pub mod salt;
pub mod source;

pub use error::ConfigError;
pub use pipeline::{run_pipeline, HashingPipeline, PipelineConfig, PipelineResult};

/// Default progress bar style for CLI operations.
pub fn default_progress_style() -> indicatif::ProgressStyle {
    indicatif::ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
        .progress_chars("#>-")
}
