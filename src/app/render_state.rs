use crate::app::mode::AppMode;
use crate::engine::{Comparison, DiffStats, Segment};

/// Render state for UI components
pub struct RenderState {
    pub mode: AppMode,
    pub segments: Vec<Segment>,
    pub stats: DiffStats,
    /// Shared by both panes so they scroll together
    pub scroll: u16,
    pub show_legend: bool,
    pub original_label: String,
    pub modified_label: String,
}

impl RenderState {
    /// Create an empty render state for when nothing has been compared yet
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            segments: vec![],
            stats: DiffStats::default(),
            scroll: 0,
            show_legend: false,
            original_label: String::new(),
            modified_label: String::new(),
        }
    }

    /// Create render state from a finished comparison
    pub fn from_comparison(mode: AppMode, comparison: &Comparison, scroll: u16) -> Self {
        Self {
            segments: comparison.segments.clone(),
            stats: comparison.stats,
            scroll,
            ..Self::empty(mode)
        }
    }

    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    pub fn with_labels(mut self, original: &str, modified: &str) -> Self {
        self.original_label = original.to_string();
        self.modified_label = modified.to_string();
        self
    }
}
