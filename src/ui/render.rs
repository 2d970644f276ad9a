use crate::engine::{project, DiffStats, Segment, SegmentKind, Side};
use crate::ui::theme::{colors, Theme};
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Wrap},
};

/// Shown where a changed segment swallows a line break
const NEWLINE_MARKER: &str = "⏎";

/// Lays out the segments visible from one side as styled lines.
///
/// Whitespace segments containing newlines start new lines, so each side keeps
/// the line structure of its own input.
pub fn segments_to_text(segments: &[Segment], side: Side) -> Text<'static> {
    let theme = Theme::current();
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in project(segments, side) {
        let style = theme.segment_style(segment.kind);
        let mut pieces = segment.text.split('\n');

        if let Some(first) = pieces.next() {
            push_piece(&mut current, first, style);
        }
        for piece in pieces {
            if segment.is_change() {
                current.push(Span::styled(NEWLINE_MARKER, style));
            }
            lines.push(Line::from(std::mem::take(&mut current)));
            push_piece(&mut current, piece, style);
        }
    }
    lines.push(Line::from(current));

    Text::from(lines)
}

fn push_piece(line: &mut Vec<Span<'static>>, piece: &str, style: Style) {
    let piece = piece.trim_end_matches('\r');
    if !piece.is_empty() {
        line.push(Span::styled(piece.to_string(), style));
    }
}

/// One scrollable pane; both panes receive the same scroll offset.
pub fn render_pane(
    segments: &[Segment],
    side: Side,
    title: &str,
    scroll: u16,
) -> Paragraph<'static> {
    Paragraph::new(segments_to_text(segments, side))
        .block(
            Block::bordered()
                .title(title.to_string())
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .style(Style::default().bg(colors::background()))
}

pub fn render_legend(stats: &DiffStats) -> Line<'static> {
    let theme = Theme::current();
    let swatch = |kind: SegmentKind, label: String| {
        vec![
            Span::styled(" ■ ", Style::default().fg(match kind {
                SegmentKind::Unchanged => theme.text,
                SegmentKind::Added => theme.added,
                SegmentKind::Removed => theme.removed,
            })),
            Span::styled(label, Style::default().fg(theme.text)),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(swatch(
        SegmentKind::Unchanged,
        format!("unchanged {}", stats.unchanged),
    ));
    spans.extend(swatch(SegmentKind::Added, format!("added {}", stats.added)));
    spans.extend(swatch(
        SegmentKind::Removed,
        format!("removed {}", stats.removed),
    ));

    Line::from(spans).alignment(Alignment::Center)
}

pub fn render_status_bar(compared: bool) -> Line<'static> {
    let hint = if compared {
        "q quit  c compare  j/k scroll  J/K page  l legend"
    } else {
        "press c to compare  q quit"
    };
    Line::from(Span::styled(hint, Style::default().fg(colors::dimmed())))
        .alignment(Alignment::Center)
}
