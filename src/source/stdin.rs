//! Stdin source - stream secrets from stdin.

use anyhow::{Context, Result};
use std::io::{self, BufRead};
use zeroize::Zeroizing;

use super::{clean_line, line_label, ProcessStats, Source};
use crate::output::Output;
use crate::pipeline::HashingPipeline;

const BATCH_SIZE: usize = 1000;

/// Hash secrets read from stdin (streaming)
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for StdinSource {
    fn process(&self, pipeline: &HashingPipeline, output: &dyn Output) -> Result<ProcessStats> {
        let stdin = io::stdin();
        process_lines(stdin.lock(), pipeline, output)
    }
}

fn process_lines<R: BufRead>(
    reader: R,
    pipeline: &HashingPipeline,
    output: &dyn Output,
) -> Result<ProcessStats> {
    let mut stats = ProcessStats::default();
    let mut batch: Vec<(usize, Zeroizing<String>)> = Vec::with_capacity(BATCH_SIZE);

    for (idx, line) in reader.lines().enumerate() {
        let line = Zeroizing::new(line.with_context(|| format!("Failed to read line {}", idx + 1))?);
        let secret = clean_line(&line);
        if secret.is_empty() {
            continue;
        }

        batch.push((idx + 1, Zeroizing::new(secret.to_string())));
        stats.secrets_processed += 1;

        if batch.len() >= BATCH_SIZE {
            stats.results_written += process_batch(&batch, pipeline, output)?;
            batch.clear();
        }
    }

    // Process remaining
    if !batch.is_empty() {
        stats.results_written += process_batch(&batch, pipeline, output)?;
    }

    tracing::debug!(secrets = stats.secrets_processed, "stdin exhausted");
    Ok(stats)
}

fn process_batch(
    batch: &[(usize, Zeroizing<String>)],
    pipeline: &HashingPipeline,
    output: &dyn Output,
) -> Result<u64> {
    for (line_no, secret) in batch {
        let result = pipeline.run(secret);
        output.result(&line_label(*line_no), &result)?;
    }
    Ok(batch.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::run_pipeline;
    use crate::source::testing::CollectingOutput;
    use crate::PipelineConfig;
    use std::io::Cursor;

    #[test]
    fn test_streams_in_order() {
        let pipeline = HashingPipeline::from_config(&PipelineConfig::new()).unwrap();
        let output = CollectingOutput::default();

        let input = Cursor::new("abc\r\n\ndef\n");
        let stats = process_lines(input, &pipeline, &output).unwrap();

        assert_eq!(
            stats,
            ProcessStats {
                secrets_processed: 2,
                results_written: 2,
            }
        );

        let results = output.results.into_inner().unwrap();
        assert_eq!(results[0].0, "line:1");
        assert_eq!(results[0].1, run_pipeline("abc", &[], 1).unwrap());
        assert_eq!(results[1].0, "line:3");
    }

    #[test]
    fn test_invalid_utf8_reports_line_number() {
        let pipeline = HashingPipeline::from_config(&PipelineConfig::new()).unwrap();
        let output = CollectingOutput::default();

        let input = Cursor::new(b"abc\n\xff\xfe\n".to_vec());
        let err = process_lines(input, &pipeline, &output).unwrap_err();

        assert_eq!(err.to_string(), "Failed to read line 2");
    }

    #[test]
    fn test_batches_larger_than_batch_size() {
        let pipeline = HashingPipeline::from_config(&PipelineConfig::new()).unwrap();
        let output = CollectingOutput::default();

        let text: String = (0..BATCH_SIZE + 5).map(|i| format!("pw{}\n", i)).collect();
        let stats = process_lines(Cursor::new(text), &pipeline, &output).unwrap();

        assert_eq!(stats.secrets_processed, (BATCH_SIZE + 5) as u64);
        assert_eq!(stats.results_written, (BATCH_SIZE + 5) as u64);
    }
}
