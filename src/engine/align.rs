// Aligner - greedy word alignment with a bounded lookahead

use crate::engine::segment::Segment;
use crate::engine::token::Token;

/// How many tokens past the current position a resync may look.
pub const LOOKAHEAD_WINDOW: usize = 4;

/// Aligns two token sequences into a list of labeled segments.
///
/// Walks both sequences with one cursor each. On a mismatch it first looks up
/// to [`LOOKAHEAD_WINDOW`] tokens ahead on the right for the current left
/// token (insertion), then on the left for the current right token
/// (deletion), and otherwise records a one-for-one replacement.
/// This is a local heuristic, not a minimal diff.
pub fn align(left: &[Token<'_>], right: &[Token<'_>]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(left.len().max(right.len()));
    let mut i = 0;
    let mut j = 0;

    while i < left.len() || j < right.len() {
        if i >= left.len() {
            segments.push(Segment::added(right[j].text));
            j += 1;
            continue;
        }
        if j >= right.len() {
            segments.push(Segment::removed(left[i].text));
            i += 1;
            continue;
        }

        let current_left = left[i];
        let current_right = right[j];

        if current_left == current_right {
            segments.push(Segment::unchanged(current_left.text));
            i += 1;
            j += 1;
        } else if let Some(k) = find_ahead(right, j, current_left) {
            segments.extend(right[j..k].iter().map(|t| Segment::added(t.text)));
            segments.push(Segment::unchanged(right[k].text));
            i += 1;
            j = k + 1;
        } else if let Some(k) = find_ahead(left, i, current_right) {
            segments.extend(left[i..k].iter().map(|t| Segment::removed(t.text)));
            segments.push(Segment::unchanged(left[k].text));
            i = k + 1;
            j += 1;
        } else {
            // Removal is always emitted before the addition it replaces
            segments.push(Segment::removed(current_left.text));
            segments.push(Segment::added(current_right.text));
            i += 1;
            j += 1;
        }
    }

    segments
}

/// First index in `(from, from + LOOKAHEAD_WINDOW]` holding `target`.
fn find_ahead(tokens: &[Token<'_>], from: usize, target: Token<'_>) -> Option<usize> {
    let end = (from + LOOKAHEAD_WINDOW + 1).min(tokens.len());
    (from + 1..end).find(|&k| tokens[k] == target)
}
