//! Terminal state guard that ensures cleanup on drop.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// RAII guard that restores terminal state on drop.
///
/// Cleanup runs on early returns via `?`, on normal scope exit, and on
/// panics through [`install_panic_hook`].
pub struct TerminalGuard {
    active: AtomicBool,
}

impl TerminalGuard {
    /// Enable raw mode, enter the alternate screen and return the guard.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        Ok(Self {
            active: AtomicBool::new(true),
        })
    }

    /// Manually cleanup (used by panic hook).
    pub fn cleanup() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = io::stdout().flush();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active.swap(false, Ordering::SeqCst) {
            Self::cleanup();
        }
    }
}

/// Install panic hook that restores terminal before printing panic.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal first so panic message is readable
        TerminalGuard::cleanup();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_guard_skips_cleanup() {
        let guard = TerminalGuard {
            active: AtomicBool::new(false),
        };
        drop(guard);
    }

    #[test]
    fn test_drop_flips_active_flag_once() {
        let guard = TerminalGuard {
            active: AtomicBool::new(true),
        };
        assert!(guard.active.swap(false, Ordering::SeqCst));
        assert!(!guard.active.load(Ordering::SeqCst));
        drop(guard);
    }
}
