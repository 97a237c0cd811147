//! Iterated salt-and-hash pipeline.
//!
//! Each round applies every salt stage in registration order and then the
//! hash stage:
//! - round[0] = hash(salts(secret, 0))
//! - round[n] = hash(salts(round[n-1], n))
//!
//! The post-processing stage runs once, on the output of the last round.

use zeroize::Zeroizing;

use crate::error::ConfigError;
use crate::hash::{HashFunction, HashType};
use crate::post::{PostProcessFunction, PostType};
use crate::salt::{SaltFunction, SaltSpec};

/// Highest accepted iteration count.
pub const MAX_ITERATIONS: u32 = 100;

/// Iteration count of a fresh pipeline.
pub const DEFAULT_ITERATIONS: u32 = 1;

/// Check a requested iteration count against `1..=MAX_ITERATIONS`.
pub fn validate_iterations(count: i64) -> Result<u32, ConfigError> {
    if count <= 0 {
        return Err(ConfigError::InvalidIterationCount(count));
    }
    if count > MAX_ITERATIONS as i64 {
        return Err(ConfigError::ExcessiveIterationCount {
            count,
            max: MAX_ITERATIONS,
        });
    }
    Ok(count as u32)
}

/// Immutable snapshot of everything a pipeline run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub salts: Vec<SaltSpec>,
    pub hash: HashType,
    pub post: PostType,
    iterations: u32,
}

impl PipelineConfig {
    /// No salts, MD5, alternating case, one round.
    pub fn new() -> Self {
        Self {
            salts: Vec::new(),
            hash: HashType::default(),
            post: PostType::default(),
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub fn with_salt(mut self, salt: SaltSpec) -> Self {
        self.salts.push(salt);
        self
    }

    pub fn with_salts(mut self, salts: impl IntoIterator<Item = SaltSpec>) -> Self {
        self.salts.extend(salts);
        self
    }

    pub fn with_hash(mut self, hash: HashType) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_post(mut self, post: PostType) -> Self {
        self.post = post;
        self
    }

    pub fn with_iterations(mut self, count: i64) -> Result<Self, ConfigError> {
        self.iterations = validate_iterations(count)?;
        Ok(self)
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw digest of the last round and its post-processed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    pub raw_hash: String,
    pub post_processed_hash: String,
}

impl PipelineResult {
    /// Raw digest in upper case.
    pub fn upper_hash(&self) -> String {
        self.raw_hash.to_uppercase()
    }
}

/// Salt stages, one hash stage and one post stage run for a fixed count.
pub struct HashingPipeline {
    salts: Vec<Box<dyn SaltFunction>>,
    hash: Box<dyn HashFunction>,
    post: Box<dyn PostProcessFunction>,
    iterations: u32,
}

impl HashingPipeline {
    pub fn new(hash: Box<dyn HashFunction>, post: Box<dyn PostProcessFunction>) -> Self {
        Self {
            salts: Vec::new(),
            hash,
            post,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self, ConfigError> {
        let mut pipeline = Self::new(config.hash.create(), config.post.create());
        pipeline.set_iterations(config.iterations as i64)?;
        for spec in &config.salts {
            pipeline.add_salt(Box::new(spec.appender()));
        }
        Ok(pipeline)
    }

    /// Register a salt stage after the existing ones.
    pub fn add_salt(&mut self, salt: Box<dyn SaltFunction>) {
        self.salts.push(salt);
    }

    pub fn reset_salts(&mut self) {
        self.salts.clear();
    }

    pub fn salt_count(&self) -> usize {
        self.salts.len()
    }

    /// Set the round count. The previous value is kept on error.
    pub fn set_iterations(&mut self, count: i64) -> Result<(), ConfigError> {
        self.iterations = validate_iterations(count)?;
        Ok(())
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn hash_name(&self) -> &'static str {
        self.hash.name()
    }

    pub fn post_name(&self) -> &'static str {
        self.post.name()
    }

    pub fn run(&self, secret: &str) -> PipelineResult {
        let mut current = Zeroizing::new(secret.to_string());

        for iteration in 0..self.iterations {
            for salt in &self.salts {
                current = Zeroizing::new(salt.add_salt(&current, iteration));
            }
            current = Zeroizing::new(self.hash.hash(&current));
        }

        let raw_hash = current.as_str().to_string();
        let post_processed_hash = self.post.post_process(&raw_hash);

        PipelineResult {
            raw_hash,
            post_processed_hash,
        }
    }
}

/// Run the reference pipeline (MD5, alternating case) over `secret`.
///
/// The iteration count is validated before the secret is touched.
pub fn run_pipeline(
    secret: &str,
    salts: &[SaltSpec],
    iterations: i64,
) -> Result<PipelineResult, ConfigError> {
    let config = PipelineConfig::new()
        .with_salts(salts.iter().cloned())
        .with_iterations(iterations)?;
    let pipeline = HashingPipeline::from_config(&config)?;
    Ok(pipeline.run(secret))
}
