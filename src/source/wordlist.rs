//! Wordlist source - hash every secret in a file.

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use zeroize::Zeroizing;

use super::{clean_line, line_label, ProcessStats, Source};
use crate::output::Output;
use crate::pipeline::HashingPipeline;

/// Secrets from a file, one per line
pub struct WordlistSource {
    /// (1-based line number, secret)
    lines: Vec<(usize, Zeroizing<String>)>,
}

impl WordlistSource {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open wordlist: {}", path.display()))?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = Zeroizing::new(line.with_context(|| format!("Failed to read line {}", idx + 1))?);
            let secret = clean_line(&line);
            if secret.is_empty() {
                continue;
            }
            lines.push((idx + 1, Zeroizing::new(secret.to_string())));
        }

        tracing::debug!(path = %path.display(), secrets = lines.len(), "loaded wordlist");
        Ok(Self { lines })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Source for WordlistSource {
    fn process(&self, pipeline: &HashingPipeline, output: &dyn Output) -> Result<ProcessStats> {
        let pb = ProgressBar::new(self.lines.len() as u64);
        pb.set_style(crate::default_progress_style());

        let written = AtomicU64::new(0);

        self.lines.par_chunks(1000).try_for_each(|chunk| -> Result<()> {
            for (line_no, secret) in chunk {
                let result = pipeline.run(secret);
                output.result(&line_label(*line_no), &result)?;
                written.fetch_add(1, Ordering::Relaxed);
            }
            pb.inc(chunk.len() as u64);
            Ok(())
        })?;

        pb.finish_and_clear();

        Ok(ProcessStats {
            secrets_processed: self.lines.len() as u64,
            results_written: written.load(Ordering::Relaxed),
        })
    }
}
