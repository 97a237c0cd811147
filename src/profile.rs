//! Salt profiles stored as TOML.
//!
//! ```toml
//! iterations = 10
//! hash = "md5"
//! post = "alternating"
//!
//! [[salt]]
//! alias = "site"
//! salt = "example.com"
//!
//! [[salt]]
//! alias = "pepper"
//! salt = "p3pp3r"
//! once_only = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::count::IterationInput;
use crate::error::ConfigError;
use crate::hash::HashType;
use crate::pipeline::PipelineConfig;
use crate::post::PostType;
use crate::salt::SaltSpec;

/// Editable salt list plus optional pipeline defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaltProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(rename = "salt", default)]
    pub salts: Vec<SaltSpec>,
}

/// Values given on the command line; each replaces its profile field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileOverrides {
    /// Replaces the whole profile salt list when non-empty
    pub salts: Vec<SaltSpec>,
    pub hash: Option<HashType>,
    pub post: Option<PostType>,
    pub iterations: Option<IterationInput>,
}

impl Default for SaltProfile {
    /// A single empty salt named "default".
    fn default() -> Self {
        Self {
            iterations: None,
            hash: None,
            post: None,
            salts: vec![SaltSpec::default()],
        }
    }
}

impl SaltProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        let profile: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse profile: {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            salts = profile.salts.len(),
            "loaded salt profile"
        );
        Ok(profile)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write profile: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved salt profile");
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize profile as TOML")
    }

    /// Snapshot the profile into an immutable pipeline configuration.
    pub fn to_config(&self) -> Result<PipelineConfig, ConfigError> {
        self.with_overrides(&ProfileOverrides::default())
    }

    /// Snapshot the profile with command-line values taking precedence.
    ///
    /// A profile field that is overridden is never parsed or validated.
    pub fn with_overrides(&self, overrides: &ProfileOverrides) -> Result<PipelineConfig, ConfigError> {
        let salts = if overrides.salts.is_empty() {
            &self.salts
        } else {
            &overrides.salts
        };
        let mut config = PipelineConfig::new().with_salts(salts.iter().cloned());

        match (overrides.hash, &self.hash) {
            (Some(hash), _) => config = config.with_hash(hash),
            (None, Some(hash)) => config = config.with_hash(HashType::from_str(hash)?),
            (None, None) => {}
        }
        match (overrides.post, &self.post) {
            (Some(post), _) => config = config.with_post(post),
            (None, Some(post)) => config = config.with_post(PostType::from_str(post)?),
            (None, None) => {}
        }
        match (&overrides.iterations, self.iterations) {
            (Some(input), _) => config = config.with_iterations(input.resolve()?)?,
            (None, Some(count)) => config = config.with_iterations(count)?,
            (None, None) => {}
        }

        Ok(config)
    }

    /// Describe an existing configuration as a profile.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            iterations: Some(config.iterations() as i64),
            hash: Some(config.hash.as_str().to_string()),
            post: Some(config.post.as_str().to_string()),
            salts: config.salts.clone(),
        }
    }
}
