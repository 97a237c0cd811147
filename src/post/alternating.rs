//! Alternating case - upper-case every other lowercase letter.

use super::PostProcessFunction;

/// Upper-cases the 1st, 3rd, 5th, ... ASCII lowercase letter.
///
/// Only lowercase letters advance the alternation; digits, punctuation and
/// letters that are already uppercase pass through without affecting it.
pub struct AlternatingCasePost;

impl PostProcessFunction for AlternatingCasePost {
    fn name(&self) -> &'static str {
        "alternating"
    }

    fn post_process(&self, input: &str) -> String {
        let mut upper = false;

        input
            .chars()
            .map(|c| {
                if !c.is_ascii_lowercase() {
                    return c;
                }
                upper = !upper;
                if upper {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_lowercase_is_uppercased() {
        assert_eq!(AlternatingCasePost.post_process("abcd"), "AbCd");
    }

    #[test]
    fn test_digits_do_not_consume_toggle() {
        assert_eq!(AlternatingCasePost.post_process("a1b2c3"), "A1b2C3");
    }

    #[test]
    fn test_uppercase_passes_through() {
        assert_eq!(AlternatingCasePost.post_process("aXbYc"), "AXbYC");
    }

    #[test]
    fn test_md5_digest() {
        assert_eq!(
            AlternatingCasePost.post_process("d41d8cd98f00b204e9800998ecf8427e"),
            "D41d8Cd98F00b204E9800998eCf8427E"
        );
    }

    #[test]
    fn test_non_ascii_untouched() {
        assert_eq!(AlternatingCasePost.post_process("éaé"), "éAé");
    }

    proptest! {
        #[test]
        fn prop_no_lowercase_is_unchanged(s in "[A-Z0-9 !@#$%^&*()_+-]{0,64}") {
            prop_assert_eq!(AlternatingCasePost.post_process(&s), s);
        }

        #[test]
        fn prop_case_insensitive_equal(s in "[a-z0-9]{0,64}") {
            let out = AlternatingCasePost.post_process(&s);
            prop_assert_eq!(out.to_ascii_lowercase(), s);
        }
    }
}
