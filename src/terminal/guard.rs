//! Raw-mode guard: puts the terminal into canvas mode and restores it.

use crate::actor::CanvasConfig;
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// Holds the terminal in raw, no-echo mode for its lifetime.
///
/// Dropping the guard shows the cursor again, leaves the alternate screen
/// (if it was entered) and disables raw mode.
pub struct TerminalGuard {
    alternate_screen: bool,
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode according to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin is not a terminal or raw mode cannot be set.
    pub fn enter(config: &CanvasConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if config.hide_cursor {
            execute!(stdout, cursor::Hide)?;
        }

        Ok(Self {
            alternate_screen: config.alternate_screen,
            active: true,
        })
    }

    /// Restore the terminal now. Later calls (and `Drop`) are no-ops.
    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
