pub mod render;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use render::{render_legend, render_pane, render_status_bar, segments_to_text};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
