//! Terminal state guard for guaranteed cleanup.
//!
//! Restores the terminal when the application exits, whether normally, via
//! early return, or panic.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Guard that restores terminal state when dropped.
///
/// Create it AFTER enabling raw mode and entering the alternate screen.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn new() -> Self {
        Self { active: true }
    }

    /// Perform manual cleanup and prevent Drop from running cleanup again.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            // Errors can't be propagated from Drop
            if let Err(e) = restore_terminal() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

fn restore_terminal() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, Show)?;
    stdout.flush()?;
    Ok(())
}

/// Install a panic hook that restores terminal state before printing the
/// panic message. Call early in main() before any terminal setup.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore_terminal() {
            tracing::debug!(error = %e, "Failed to restore terminal in panic hook");
        }
        original_hook(panic_info);
    }));
}
