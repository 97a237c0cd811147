//! Console output handler.

use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use super::{Output, Segment};
use crate::pipeline::PipelineResult;

/// Console output - prints to stdout or a file.
pub struct ConsoleOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
    hidden: bool,
    segment: Segment,
}

impl ConsoleOutput {
    /// Create console output to stdout.
    pub fn new() -> Self {
        Self::to_writer(Box::new(io::stdout()), false)
    }

    /// Create verbose console output.
    pub fn verbose() -> Self {
        Self::to_writer(Box::new(io::stdout()), true)
    }

    pub fn to_file(path: &Path) -> Result<Self> {
        Self::open(path, false)
    }

    pub fn to_file_verbose(path: &Path) -> Result<Self> {
        Self::open(path, true)
    }

    pub fn to_writer(writer: Box<dyn Write + Send>, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            verbose,
            hidden: false,
            segment: Segment::All,
        }
    }

    /// Mask every value with `*` of the same length.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segment = segment;
        self
    }

    fn open(path: &Path, verbose: bool) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::to_writer(Box::new(BufWriter::new(file)), verbose))
    }

    fn render(&self, text: &str) -> Result<String> {
        let cut = self.segment.apply(text).ok_or_else(|| {
            anyhow!(
                "segment {:?} needs more characters than the {}-character hash",
                self.segment,
                text.chars().count()
            )
        })?;

        if self.hidden {
            Ok("*".repeat(cut.chars().count()))
        } else {
            Ok(cut.to_string())
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Box<dyn Write + Send>>> {
        self.writer
            .lock()
            .map_err(|_| anyhow!("output writer lock poisoned"))
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for ConsoleOutput {
    fn result(&self, label: &str, result: &PipelineResult) -> Result<()> {
        let raw = self.render(&result.raw_hash)?;
        let post = self.render(&result.post_processed_hash)?;

        let mut w = self.lock()?;

        if self.verbose {
            let upper = self.render(&result.upper_hash())?;
            writeln!(w, "---")?;
            writeln!(w, "input: {}", label)?;
            writeln!(w, "hash:           {}", raw)?;
            writeln!(w, "hash (upper):   {}", upper)?;
            writeln!(w, "hash (post):    {}", post)?;
        } else {
            // Compact format: label,raw,post
            writeln!(w, "{},{},{}", label, raw, post)?;
        }

        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut w = self.lock()?;
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> PipelineResult {
        PipelineResult {
            raw_hash: "d41d8cd98f00b204e9800998ecf8427e".to_string(),
            post_processed_hash: "D41d8Cd98F00b204E9800998eCf8427E".to_string(),
        }
    }

    fn write_and_read(output: ConsoleOutput, path: &Path) -> String {
        output.result("line:1", &sample()).unwrap();
        output.flush().unwrap();
        drop(output);
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_compact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let text = write_and_read(ConsoleOutput::to_file(&path).unwrap(), &path);
        assert_eq!(
            text,
            "line:1,d41d8cd98f00b204e9800998ecf8427e,D41d8Cd98F00b204E9800998eCf8427E\n"
        );
    }

    #[test]
    fn test_verbose_includes_upper() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let text = write_and_read(ConsoleOutput::to_file_verbose(&path).unwrap(), &path);
        assert!(text.contains("hash (upper):   D41D8CD98F00B204E9800998ECF8427E"));
        assert!(text.contains("input: line:1"));
    }

    #[test]
    fn test_segment_and_hidden() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let output = ConsoleOutput::to_file(&path)
            .unwrap()
            .with_segment(Segment::Front);
        let text = write_and_read(output, &path);
        assert_eq!(text, "line:1,d41d8cd98f00b204,D41d8Cd98F00b204\n");

        let output = ConsoleOutput::to_file(&path).unwrap().with_hidden(true);
        let text = write_and_read(output, &path);
        assert_eq!(text, format!("line:1,{},{}\n", "*".repeat(32), "*".repeat(32)));
    }

    #[test]
    fn test_segment_too_long_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let output = ConsoleOutput::to_file(&path)
            .unwrap()
            .with_segment(Segment::Last);

        let short = PipelineResult {
            raw_hash: "abc".to_string(),
            post_processed_hash: "Abc".to_string(),
        };
        assert!(output.result("x", &short).is_err());
    }
}
