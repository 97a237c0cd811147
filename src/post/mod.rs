//! Post-processing stage.
//!
//! Applied once to the final digest. Purely cosmetic.

mod alternating;
mod identity;

pub use alternating::AlternatingCasePost;
pub use identity::IdentityPost;

use crate::error::ConfigError;

/// Cosmetic transform of the final digest.
pub trait PostProcessFunction: Send + Sync {
    /// Human-readable name for this post-processor
    fn name(&self) -> &'static str;

    fn post_process(&self, input: &str) -> String;
}

/// Available post-processing types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostType {
    Identity,
    #[default]
    AlternatingCase,
}

impl PostType {
    /// Create a boxed post-processor instance
    pub fn create(&self) -> Box<dyn PostProcessFunction> {
        match self {
            PostType::Identity => Box::new(IdentityPost),
            PostType::AlternatingCase => Box::new(AlternatingCasePost),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Identity => "identity",
            PostType::AlternatingCase => "alternating",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "identity" | "none" => Ok(PostType::Identity),
            "alternating" | "mixed" => Ok(PostType::AlternatingCase),
            _ => Err(ConfigError::UnknownPost(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(PostType::from_str("none").unwrap(), PostType::Identity);
        assert_eq!(PostType::from_str("Mixed").unwrap(), PostType::AlternatingCase);
        assert!(matches!(
            PostType::from_str("reverse"),
            Err(ConfigError::UnknownPost(_))
        ));
    }

    #[test]
    fn test_create_matches_name() {
        for t in [PostType::Identity, PostType::AlternatingCase] {
            assert_eq!(t.create().name(), t.as_str());
        }
    }
}
