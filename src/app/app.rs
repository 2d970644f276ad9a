use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::config::ViewConfig;
use crate::engine::{compare, project, Comparison, Segment, Side};
use tracing::{debug, info};

pub struct App {
    pub mode: AppMode,
    original: String,
    modified: String,
    original_label: String,
    modified_label: String,
    comparison: Option<Comparison>,
    scroll: u16,
    show_legend: bool,
    config: ViewConfig,
}

impl App {
    pub fn new(original: String, modified: String, config: ViewConfig) -> Self {
        Self {
            mode: AppMode::Viewing,
            original,
            modified,
            original_label: "Original".to_string(),
            modified_label: "Modified".to_string(),
            comparison: None,
            scroll: 0,
            show_legend: config.show_legend,
            config,
        }
    }

    pub fn with_labels(mut self, original: impl Into<String>, modified: impl Into<String>) -> Self {
        self.original_label = original.into();
        self.modified_label = modified.into();
        self
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    /// Runs the comparison over the current texts and resets the scroll position.
    pub fn compare(&mut self) {
        let comparison = compare(&self.original, &self.modified);
        info!(
            segments = comparison.segments.len(),
            added = comparison.stats.added,
            removed = comparison.stats.removed,
            "compared texts"
        );
        self.comparison = Some(comparison);
        self.scroll = 0;
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        debug!(?event, "handling event");
        match event {
            AppEvent::Compare => self.compare(),
            AppEvent::ScrollUp => self.scroll_by(-(self.config.scroll_step as i32)),
            AppEvent::ScrollDown => self.scroll_by(self.config.scroll_step as i32),
            AppEvent::PageUp => self.scroll_by(-(self.config.page_step as i32)),
            AppEvent::PageDown => self.scroll_by(self.config.page_step as i32),
            AppEvent::ToggleLegend => self.show_legend = !self.show_legend,
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::None => {}
        }
    }

    pub fn handle_keypress(&mut self, c: char) {
        self.handle_event(AppEvent::from_key(c));
    }

    pub fn get_render_state(&self) -> RenderState {
        let state = match &self.comparison {
            Some(comparison) => RenderState::from_comparison(self.mode, comparison, self.scroll),
            None => RenderState::empty(self.mode),
        };
        state
            .with_legend(self.show_legend)
            .with_labels(&self.original_label, &self.modified_label)
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = self.max_scroll() as i32;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max) as u16;
    }

    /// Last line either pane can scroll to.
    fn max_scroll(&self) -> u16 {
        let segments = match &self.comparison {
            Some(comparison) => &comparison.segments,
            None => return 0,
        };
        let lines = line_count(segments, Side::Original).max(line_count(segments, Side::Modified));
        lines.saturating_sub(1).min(u16::MAX as usize) as u16
    }
}

fn line_count(segments: &[Segment], side: Side) -> usize {
    1 + project(segments, side)
        .map(|s| s.text.matches('\n').count())
        .sum::<usize>()
}
