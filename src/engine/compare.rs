use tracing::debug;

use crate::engine::align::align;
use crate::engine::segment::{DiffStats, Segment};
use crate::engine::token::tokenize;

/// Result of comparing two texts
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Comparison {
    pub segments: Vec<Segment>,
    pub stats: DiffStats,
}

impl Comparison {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Compares `original` against `modified` word by word.
///
/// When both inputs are empty or whitespace-only the result is empty and
/// tokenization is skipped entirely.
pub fn compare(original: &str, modified: &str) -> Comparison {
    if original.trim().is_empty() && modified.trim().is_empty() {
        debug!("both inputs blank, skipping comparison");
        return Comparison::default();
    }

    let left = tokenize(original);
    let right = tokenize(modified);
    let segments = align(&left, &right);
    let stats = DiffStats::from_segments(&segments);

    debug!(
        left_tokens = left.len(),
        right_tokens = right.len(),
        segments = segments.len(),
        added = stats.added,
        removed = stats.removed,
        "comparison finished"
    );

    Comparison { segments, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::segment::{reconstruct, SegmentKind, Side};

    #[test]
    fn test_compare_both_empty() {
        assert!(compare("", "").is_empty());
    }

    #[test]
    fn test_compare_both_whitespace_only() {
        let comparison = compare("  \n", "\t");
        assert!(comparison.is_empty());
        assert_eq!(comparison.stats, DiffStats::default());
    }

    #[test]
    fn test_compare_one_side_empty_keeps_empty_token() {
        // "" tokenizes to a single empty token which lines up with the
        // leading empty slot of " word"
        let comparison = compare("", " word");
        assert_eq!(
            comparison.segments,
            vec![
                Segment::unchanged(""),
                Segment::added(" "),
                Segment::added("word")
            ]
        );
    }

    #[test]
    fn test_compare_empty_against_word() {
        let comparison = compare("", "word");
        assert_eq!(
            comparison.segments,
            vec![Segment::removed(""), Segment::added("word")]
        );
    }

    #[test]
    fn test_compare_identical_text_is_all_unchanged() {
        let text = "the quick\nbrown  fox";
        let comparison = compare(text, text);
        assert_eq!(comparison.segments.len(), tokenize(text).len());
        assert!(comparison
            .segments
            .iter()
            .all(|s| s.kind == SegmentKind::Unchanged));
        assert!(!comparison.stats.has_changes());
    }

    #[test]
    fn test_compare_word_substitution() {
        let comparison = compare("the quick fox", "the slow fox");
        assert_eq!(
            comparison.segments,
            vec![
                Segment::unchanged("the"),
                Segment::unchanged(" "),
                Segment::removed("quick"),
                Segment::added("slow"),
                Segment::unchanged(" "),
                Segment::unchanged("fox")
            ]
        );
        assert_eq!(comparison.stats.added, 1);
        assert_eq!(comparison.stats.removed, 1);
        assert_eq!(comparison.stats.unchanged, 2);
    }

    #[test]
    fn test_compare_reconstructs_both_sides() {
        let original = "one two three four";
        let modified = "one 2 three four five";
        let comparison = compare(original, modified);
        assert_eq!(reconstruct(&comparison.segments, Side::Original), original);
        assert_eq!(reconstruct(&comparison.segments, Side::Modified), modified);
    }
}
