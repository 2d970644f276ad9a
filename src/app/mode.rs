#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Viewing,
    Quit,
}
