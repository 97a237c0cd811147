//! Benchmark for pipeline throughput.

use anyhow::Result;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::pipeline::{HashingPipeline, PipelineConfig};

const WARMUP: Duration = Duration::from_secs(2);
const MEASURE: Duration = Duration::from_secs(5);
const BENCH_SECRET: &str = "correct horse battery staple";

/// Summary of one benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct BenchReport {
    pub runs: u64,
    pub duration_secs: f64,
}

impl BenchReport {
    pub fn runs_per_sec(&self) -> f64 {
        if self.duration_secs > 0.0 {
            self.runs as f64 / self.duration_secs
        } else {
            0.0
        }
    }
}

/// Run standardized benchmark for a pipeline configuration.
pub fn run_benchmark(config: &PipelineConfig, json: bool) -> Result<()> {
    if !json {
        println!(
            "Running benchmark: {} x{}, {} salt(s), post {}",
            config.hash.as_str(),
            config.iterations(),
            config.salts.len(),
            config.post.as_str()
        );
        println!("Time: 2s warmup + 5s measure (approx)");
    }

    let pipeline = HashingPipeline::from_config(config)?;
    let report = measure(&pipeline, WARMUP, MEASURE)?;

    if json {
        println!(
            "{{ \"hash\": \"{}\", \"iterations\": {}, \"runs_per_sec\": {}, \"total_runs\": {}, \"duration_secs\": {} }}",
            config.hash.as_str(),
            config.iterations(),
            report.runs_per_sec() as u64,
            report.runs,
            report.duration_secs
        );
    } else {
        println!("------------------------------------------------");
        println!("Result: {:.2} Thousand Runs/sec", report.runs_per_sec() / 1_000.0);
        println!("Total:  {} runs in {:.2}s", report.runs, report.duration_secs);
        println!("------------------------------------------------");
    }

    Ok(())
}

/// Warm up on one thread, then run on all cores until `measure` elapses.
pub fn measure(pipeline: &HashingPipeline, warmup: Duration, measure: Duration) -> Result<BenchReport> {
    let warmup_start = Instant::now();
    while warmup_start.elapsed() < warmup {
        pipeline.run(BENCH_SECRET);
    }

    let counter = AtomicU64::new(0);
    let pool = rayon::ThreadPoolBuilder::new().build()?;

    let start = Instant::now();
    pool.install(|| {
        (0..rayon::current_num_threads()).into_par_iter().for_each(|_| {
            while start.elapsed() < measure {
                for _ in 0..100 {
                    pipeline.run(BENCH_SECRET);
                }
                counter.fetch_add(100, Ordering::Relaxed);
            }
        });
    });

    Ok(BenchReport {
        runs: counter.load(Ordering::Relaxed),
        duration_secs: start.elapsed().as_secs_f64(),
    })
}
