//! Raw mode RAII guard.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Set while a `ScreenGuard` holds the alternate screen.
static ALTERNATE_SCREEN: AtomicBool = AtomicBool::new(false);

/// Whether the alternate screen is entered and not yet left.
pub fn alternate_screen_active() -> bool {
    ALTERNATE_SCREEN.load(Ordering::SeqCst)
}

/// Raw mode plus alternate screen with hidden cursor, restored on drop.
pub struct ScreenGuard {
    active: bool,
}

impl ScreenGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        ALTERNATE_SCREEN.store(true, Ordering::SeqCst);
        Ok(Self { active: true })
    }

    /// Restore the terminal early (also happens on drop).
    pub fn restore(&mut self) {
        if self.active {
            let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            ALTERNATE_SCREEN.store(false, Ordering::SeqCst);
            self.active = false;
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
