use crate::app::{mode::AppMode, App};
use crate::ui::render::{render_legend, render_pane, render_status_bar};
use crate::ui::terminal_guard::TerminalGuard;
use crate::engine::Side;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App, tick_rate: Duration) -> io::Result<()> {
        self.render_frame(app)?;

        while app.mode() != AppMode::Quit {
            if !event::poll(tick_rate)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char(c) => app.handle_keypress(c),
                    KeyCode::Down => app.handle_keypress('j'),
                    KeyCode::Up => app.handle_keypress('k'),
                    KeyCode::PageDown => app.handle_keypress('J'),
                    KeyCode::PageUp => app.handle_keypress('K'),
                    KeyCode::Enter => app.handle_keypress('c'),
                    KeyCode::Esc => app.handle_keypress('q'),
                    other => debug!(?other, "ignored key"),
                }
            }
            self.render_frame(app)?;
        }

        Ok(())
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let compared = app.comparison().is_some();

        self.terminal.draw(|frame| {
            let legend_height = if render_state.show_legend { 1 } else { 0 };
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(legend_height),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);

            frame.render_widget(
                render_pane(
                    &render_state.segments,
                    Side::Original,
                    &render_state.original_label,
                    render_state.scroll,
                ),
                panes[0],
            );
            frame.render_widget(
                render_pane(
                    &render_state.segments,
                    Side::Modified,
                    &render_state.modified_label,
                    render_state.scroll,
                ),
                panes[1],
            );

            if render_state.show_legend {
                frame.render_widget(render_legend(&render_state.stats), rows[1]);
            }
            frame.render_widget(render_status_bar(compared), rows[2]);
        })?;

        Ok(())
    }
}
