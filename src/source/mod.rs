//! Secret sources for batch hashing.
//!
//! Sources feed many secrets through one configured pipeline.

mod stdin;
mod wordlist;

pub use stdin::StdinSource;
pub use wordlist::WordlistSource;

use crate::output::Output;
use crate::pipeline::HashingPipeline;
use anyhow::Result;

/// Source trait for producing secrets
pub trait Source: Send + Sync {
    /// Run every secret through the pipeline and write the results
    fn process(&self, pipeline: &HashingPipeline, output: &dyn Output) -> Result<ProcessStats>;
}

/// Statistics from processing
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ProcessStats {
    pub secrets_processed: u64,
    pub results_written: u64,
}

/// Label shown in place of the secret on line `line_no` (1-based).
pub(crate) fn line_label(line_no: usize) -> String {
    format!("line:{}", line_no)
}

/// Strip a trailing carriage return; other whitespace is part of the secret.
pub(crate) fn clean_line(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::pipeline::PipelineResult;
    use std::sync::Mutex;

    /// Collects results in memory.
    #[derive(Default)]
    pub struct CollectingOutput {
        pub results: Mutex<Vec<(String, PipelineResult)>>,
    }

    impl Output for CollectingOutput {
        fn result(&self, label: &str, result: &PipelineResult) -> Result<()> {
            self.results
                .lock()
                .unwrap()
                .push((label.to_string(), result.clone()));
            Ok(())
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }
    }
}
