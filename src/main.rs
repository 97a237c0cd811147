//! shpg - Super hashing password generator.
//!
//! Turns a memorable secret into a strong password by iterated salting and hashing.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use shpg::count::IterationInput;
use shpg::hash::HashType;
use shpg::output::{ConsoleOutput, Output, Segment};
use shpg::post::PostType;
use shpg::profile::{ProfileOverrides, SaltProfile};
use shpg::salt::SaltSpec;
use shpg::source::{Source, StdinSource, WordlistSource};
use shpg::{HashingPipeline, PipelineConfig};

fn parse_salt(s: &str) -> Result<SaltSpec, String> {
    Ok(SaltSpec::parse(s))
}

fn parse_hash_type(s: &str) -> Result<HashType, String> {
    HashType::from_str(s).map_err(|e| e.to_string())
}

fn parse_post_type(s: &str) -> Result<PostType, String> {
    PostType::from_str(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "shpg")]
#[command(about = "Super hashing password generator: iterated salt-and-hash password strengthening")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args, Clone)]
struct PipelineArgs {
    /// Salt profile (TOML) with salts and defaults
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Salt stage, in order (e.g., pepper, once:pepper). Replaces profile salts.
    #[arg(long, value_parser = parse_salt, allow_hyphen_values = true)]
    salt: Vec<SaltSpec>,

    /// Number of rounds (1-100)
    #[arg(long, allow_hyphen_values = true, conflicts_with = "length_of")]
    iterations: Option<String>,

    /// Derive the number of rounds from the length of this text
    #[arg(long, value_name = "TEXT")]
    length_of: Option<String>,

    /// Divisor applied to --length-of [default: 1]
    #[arg(long, requires = "length_of", allow_hyphen_values = true)]
    divisor: Option<String>,

    /// Hash function (md5, sha256)
    #[arg(long, value_parser = parse_hash_type)]
    hash: Option<HashType>,

    /// Post-processing (alternating, identity)
    #[arg(long, value_parser = parse_post_type)]
    post: Option<PostType>,
}

impl PipelineArgs {
    /// Snapshot profile and flags into one configuration; flags win.
    fn resolve(&self) -> Result<PipelineConfig> {
        let profile = match &self.profile {
            Some(path) => SaltProfile::load(path)?,
            None => SaltProfile::default(),
        };

        let iterations = match (&self.iterations, &self.length_of) {
            (Some(count), _) => Some(IterationInput::Fixed(count.clone())),
            (None, Some(text)) => Some(IterationInput::text_length(
                text.clone(),
                self.divisor.as_deref(),
            )),
            (None, None) => None,
        };
        let overrides = ProfileOverrides {
            salts: self.salt.clone(),
            hash: self.hash,
            post: self.post,
            iterations,
        };
        let config = profile.with_overrides(&overrides)?;

        tracing::debug!(
            hash = config.hash.as_str(),
            post = config.post.as_str(),
            salts = config.salts.len(),
            iterations = config.iterations(),
            "resolved pipeline configuration"
        );
        Ok(config)
    }
}

#[derive(Args, Clone)]
struct DisplayArgs {
    /// Show only part of each hash
    #[arg(long, value_enum, default_value = "all")]
    segment: Segment,

    /// Mask hash values
    #[arg(long)]
    hide: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Hash a single secret (read from stdin if omitted)
    Hash {
        /// The secret
        secret: Option<String>,

        #[command(flatten)]
        pipeline: PipelineArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Hash many secrets, one per line
    Batch {
        #[command(subcommand)]
        source: SourceCommand,

        #[command(flatten)]
        pipeline: PipelineArgs,

        #[command(flatten)]
        display: DisplayArgs,

        /// Verbose output (show all hash forms)
        #[arg(long)]
        full: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the effective configuration as a TOML profile
    Profile {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run benchmark
    Bench {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Output JSON for benchmark runner
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Clone)]
enum SourceCommand {
    /// Wordlist file (one secret per line)
    Wordlist {
        /// Path to wordlist file
        #[arg(long)]
        file: PathBuf,
    },

    /// Read from stdin (streaming)
    Stdin,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Hash {
            secret,
            pipeline,
            display,
        } => {
            let config = pipeline.resolve()?;
            run_hash(secret, &config, &display)
        }

        Command::Batch {
            source,
            pipeline,
            display,
            full,
            output,
        } => {
            let config = pipeline.resolve()?;

            let out = match (output, full) {
                (Some(path), true) => ConsoleOutput::to_file_verbose(&path)?,
                (Some(path), false) => ConsoleOutput::to_file(&path)?,
                (None, true) => ConsoleOutput::verbose(),
                (None, false) => ConsoleOutput::new(),
            };
            let out = out.with_segment(display.segment).with_hidden(display.hide);

            run_batch(source, &config, &out)
        }

        Command::Profile { pipeline, output } => {
            let config = pipeline.resolve()?;
            let profile = SaltProfile::from_config(&config);

            match output {
                Some(path) => {
                    profile.save(&path)?;
                    tracing::info!("Profile written to {}", path.display());
                }
                None => print!("{}", profile.to_toml()?),
            }
            Ok(())
        }

        Command::Bench { pipeline, json } => {
            let config = pipeline.resolve()?;
            shpg::benchmark::run_benchmark(&config, json)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "shpg=debug" } else { "shpg=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_hash(secret: Option<String>, config: &PipelineConfig, display: &DisplayArgs) -> Result<()> {
    let (secret, label) = match secret {
        Some(s) => (Zeroizing::new(s), "argument"),
        None => (read_secret_line()?, "stdin"),
    };

    let pipeline = HashingPipeline::from_config(config)?;
    let result = pipeline.run(&secret);
    drop(secret);

    let out = ConsoleOutput::verbose()
        .with_segment(display.segment)
        .with_hidden(display.hide);
    out.result(label, &result)?;
    out.flush()?;

    tracing::info!("Hashed {} time(s) successfully.", pipeline.iterations());
    Ok(())
}

fn read_secret_line() -> Result<Zeroizing<String>> {
    tracing::info!("Reading secret from stdin...");

    let mut line = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read secret from stdin")?;

    let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
    Ok(Zeroizing::new(trimmed))
}

fn run_batch(source_cmd: SourceCommand, config: &PipelineConfig, output: &dyn Output) -> Result<()> {
    let source = create_source(source_cmd)?;
    let pipeline = HashingPipeline::from_config(config)?;

    tracing::info!("Hashing secrets...");
    let stats = source.process(&pipeline, output)?;
    output.flush()?;

    tracing::info!(
        "Done. Secrets: {}, Results: {}",
        stats.secrets_processed,
        stats.results_written
    );

    Ok(())
}

fn create_source(cmd: SourceCommand) -> Result<Box<dyn Source>> {
    match cmd {
        SourceCommand::Wordlist { file } => Ok(Box::new(WordlistSource::from_file(&file)?)),
        SourceCommand::Stdin => Ok(Box::new(StdinSource::new())),
    }
}
