//! Simple salt appender - concatenate salt to the end of the input.

use super::SaltFunction;

/// Appends fixed material, optionally only in the early rounds.
///
/// A once-only appender salts rounds 0 and 1 and stops from round 2 onward.
pub struct SimpleSaltAppender {
    material: String,
    once_only: bool,
}

impl SimpleSaltAppender {
    pub fn new(material: impl Into<String>, once_only: bool) -> Self {
        Self {
            material: material.into(),
            once_only,
        }
    }
}

impl SaltFunction for SimpleSaltAppender {
    fn add_salt(&self, input: &str, iteration: u32) -> String {
        if self.once_only && iteration > 1 {
            return input.to_string();
        }

        let mut salted = String::with_capacity(input.len() + self.material.len());
        salted.push_str(input);
        salted.push_str(&self.material);
        salted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_every_round() {
        let salt = SimpleSaltAppender::new("S", false);
        for i in 0..5 {
            assert_eq!(salt.add_salt("x", i), "xS");
        }
    }

    #[test]
    fn test_once_only_boundary_is_greater_than_one() {
        // Rounds 0 and 1 are salted, suppression starts at round 2.
        let salt = SimpleSaltAppender::new("S", true);
        assert_eq!(salt.add_salt("x", 0), "xS");
        assert_eq!(salt.add_salt("x", 1), "xS");
        assert_eq!(salt.add_salt("x", 2), "x");
        assert_eq!(salt.add_salt("x", 50), "x");
    }

    #[test]
    fn test_empty_material_is_noop() {
        let salt = SimpleSaltAppender::new("", false);
        assert_eq!(salt.add_salt("abc", 0), "abc");
    }
}
