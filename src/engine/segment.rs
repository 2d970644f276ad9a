/// Classification of one token in the comparison output
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

/// One labeled token of the comparison output.
///
/// `text` is always exactly one token; adjacent segments of the same kind are
/// never merged.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn new(text: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(text, SegmentKind::Unchanged)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(text, SegmentKind::Added)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(text, SegmentKind::Removed)
    }

    pub fn is_change(&self) -> bool {
        self.kind != SegmentKind::Unchanged
    }

    /// True for segments holding a word rather than a whitespace run.
    pub fn is_word(&self) -> bool {
        !self.text.is_empty() && !self.text.chars().all(char::is_whitespace)
    }
}

/// Which input a segment sequence is viewed from
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Side {
    Original,
    Modified,
}

impl Side {
    pub fn shows(&self, kind: SegmentKind) -> bool {
        match self {
            Side::Original => kind != SegmentKind::Added,
            Side::Modified => kind != SegmentKind::Removed,
        }
    }
}

/// Segments visible from one side, in order.
pub fn project(segments: &[Segment], side: Side) -> impl Iterator<Item = &Segment> {
    segments.iter().filter(move |s| side.shows(s.kind))
}

/// Rebuilds the text of one side from a comparison result.
pub fn reconstruct(segments: &[Segment], side: Side) -> String {
    project(segments, side).map(|s| s.text.as_str()).collect()
}

/// Word counts per segment kind; whitespace segments are not counted.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct DiffStats {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut stats = Self::default();
        for segment in segments.iter().filter(|s| s.is_word()) {
            match segment.kind {
                SegmentKind::Unchanged => stats.unchanged += 1,
                SegmentKind::Added => stats.added += 1,
                SegmentKind::Removed => stats.removed += 1,
            }
        }
        stats
    }

    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}
