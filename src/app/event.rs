/// Application events
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AppEvent {
    Compare,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ToggleLegend,
    Quit,
    None,
}

impl AppEvent {
    /// Maps a key character to its event
    pub fn from_key(c: char) -> Self {
        match c {
            'q' => AppEvent::Quit,
            'c' => AppEvent::Compare,
            'j' => AppEvent::ScrollDown,
            'k' => AppEvent::ScrollUp,
            'J' => AppEvent::PageDown,
            'K' => AppEvent::PageUp,
            'l' => AppEvent::ToggleLegend,
            _ => AppEvent::None,
        }
    }
}
