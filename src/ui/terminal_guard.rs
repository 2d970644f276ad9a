use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Set while the viewer holds raw mode and the alternate screen
static SCREEN_TAKEN: AtomicBool = AtomicBool::new(false);

/// Raw mode, alternate screen and hidden cursor for as long as the guard lives
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        set_panic_hook();

        enable_raw_mode()?;
        SCREEN_TAKEN.store(true, Ordering::SeqCst);
        io::stdout().execute(EnterAlternateScreen)?.execute(Hide)?;

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

pub fn is_screen_taken() -> bool {
    SCREEN_TAKEN.load(Ordering::SeqCst)
}

/// Hands the terminal back to the shell.
///
/// Runs at most once per guard even when both the panic hook and `Drop` fire.
pub fn restore() {
    if !SCREEN_TAKEN.swap(false, Ordering::SeqCst) {
        return;
    }
    let mut stdout = io::stdout();
    let _ = stdout.execute(Show);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore();
            tracing::error!("panic: {}", panic_info);
            default_hook(panic_info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_guard_is_noop() {
        assert!(!is_screen_taken());
        restore();
        assert!(!is_screen_taken());
    }
}
