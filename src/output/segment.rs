//! Fixed 16-character windows of a digest.

/// Portion of a digest to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Segment {
    /// Whole digest
    #[default]
    All,
    /// Characters 0..16
    Front,
    /// Characters 8..24
    Middle,
    /// Characters 16..32
    Last,
}

/// Width of the front, middle and last windows.
pub const SEGMENT_LEN: usize = 16;

impl Segment {
    fn start(&self) -> usize {
        match self {
            Segment::All | Segment::Front => 0,
            Segment::Middle => 8,
            Segment::Last => 16,
        }
    }

    /// Cut the window out of `text`, or `None` if `text` is too short.
    pub fn apply<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            Segment::All => Some(text),
            _ => {
                let start = self.start();
                text.get(start..start + SEGMENT_LEN)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "d41d8cd98f00b204e9800998ecf8427e";

    #[test]
    fn test_windows() {
        assert_eq!(Segment::All.apply(DIGEST), Some(DIGEST));
        assert_eq!(Segment::Front.apply(DIGEST), Some("d41d8cd98f00b204"));
        assert_eq!(Segment::Middle.apply(DIGEST), Some("8f00b204e9800998"));
        assert_eq!(Segment::Last.apply(DIGEST), Some("e9800998ecf8427e"));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(Segment::Last.apply("short"), None);
        assert_eq!(Segment::Last.apply(&DIGEST[..31]), None);
        assert_eq!(Segment::All.apply("short"), Some("short"));
    }

    #[test]
    fn test_longer_digest() {
        let sha = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";
        assert_eq!(Segment::Last.apply(sha), Some("51d0e56f8dc62927"));
    }
}
