//! Salting stage.
//!
//! Salt functions mix extra material into the running string before each
//! hash round. Several may be registered; they run in registration order.

mod appender;

pub use appender::SimpleSaltAppender;

use serde::{Deserialize, Serialize};

/// Adds salt to the running string for a given round.
pub trait SaltFunction: Send + Sync {
    /// Return the salted form of `input` for zero-based round `iteration`.
    fn add_salt(&self, input: &str, iteration: u32) -> String;
}

/// Prefix marking a once-only salt in its CLI form.
const ONCE_PREFIX: &str = "once:";

/// Salt material plus its once-only flag.
///
/// The alias is only a label for people editing profiles; it never reaches
/// the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaltSpec {
    #[serde(default = "default_alias")]
    pub alias: String,
    #[serde(rename = "salt", default)]
    pub material: String,
    #[serde(default)]
    pub once_only: bool,
}

fn default_alias() -> String {
    "default".to_string()
}

impl SaltSpec {
    pub fn new(material: impl Into<String>, once_only: bool) -> Self {
        Self {
            alias: default_alias(),
            material: material.into(),
            once_only,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Parse the CLI form.
    ///
    /// Formats:
    /// - "pepper" - appended every round
    /// - "once:pepper" - once-only
    /// - "" - empty salt, a no-op append
    pub fn parse(s: &str) -> Self {
        match s.strip_prefix(ONCE_PREFIX) {
            Some(material) => Self::new(material, true),
            None => Self::new(s, false),
        }
    }

    /// Build the salt stage for this spec.
    pub fn appender(&self) -> SimpleSaltAppender {
        SimpleSaltAppender::new(self.material.clone(), self.once_only)
    }
}

impl Default for SaltSpec {
    fn default() -> Self {
        Self::new("", false)
    }
}
