use crate::engine::SegmentKind;
use ratatui::style::{Color, Modifier, Style};

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub added: Color,
    pub removed: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            added: Color::Rgb(158, 206, 106),   // #9ECE6A Green
            removed: Color::Rgb(247, 118, 142), // #F7768E Coral Red
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
        }
    }

    /// Default theme is midnight
    pub fn current() -> Self {
        Self::midnight()
    }

    /// Style for a segment of the given kind.
    ///
    /// Changes get a background so changed whitespace stays visible.
    pub fn segment_style(&self, kind: SegmentKind) -> Style {
        match kind {
            SegmentKind::Unchanged => Style::default().fg(self.text),
            SegmentKind::Added => Style::default()
                .fg(self.background)
                .bg(self.added)
                .add_modifier(Modifier::BOLD),
            SegmentKind::Removed => Style::default()
                .fg(self.background)
                .bg(self.removed)
                .add_modifier(Modifier::CROSSED_OUT),
        }
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
