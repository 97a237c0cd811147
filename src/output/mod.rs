//! Output handlers for pipeline results.

mod console;
mod segment;

pub use console::ConsoleOutput;
pub use segment::Segment;

use anyhow::Result;
use crate::pipeline::PipelineResult;

/// Output trait for handling pipeline results.
pub trait Output: Send + Sync {
    /// Output one result. `label` identifies the input, never the secret itself.
    fn result(&self, label: &str, result: &PipelineResult) -> Result<()>;

    /// Flush any buffered output.
    fn flush(&self) -> Result<()>;
}
