//! Terminal mode switching for the dashboard and the guard that undoes it.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Cleanup routine run by [`TerminalGuard`].
type RestoreFn = fn() -> Result<()>;

/// What: Enter raw mode and the alternate screen with mouse capture.
///
/// Output:
/// - `Ok(())` with all three modes on; `Err` with the terminal left as it was.
///
/// Details:
/// - Raw mode is switched off again when entering the alternate screen fails.
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    Ok(())
}

/// Leave raw mode, mouse capture, and the alternate screen.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Owns the terminal modes for the lifetime of the runtime.
///
/// Restoration runs exactly once: through [`TerminalGuard::release`] on a clean
/// exit, or from `Drop` when `run` returns early with an error or unwinds.
pub struct TerminalGuard {
    /// Pending cleanup; `None` once run or when nothing was set up.
    restore: Option<RestoreFn>,
}

impl TerminalGuard {
    /// What: Switch the terminal into TUI mode and arm the guard.
    ///
    /// Output:
    /// - Armed guard; `Err` when setup failed (nothing left to restore).
    pub fn enter() -> Result<Self> {
        setup_terminal()?;
        Ok(Self::armed(restore_terminal))
    }

    /// Guard for headless runs; no terminal mode was changed.
    pub const fn headless() -> Self {
        Self { restore: None }
    }

    /// Guard that runs `restore` once when released or dropped.
    const fn armed(restore: RestoreFn) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// What: Restore the terminal now and report the outcome.
    ///
    /// Output:
    /// - Result of the cleanup; `Ok(())` when nothing was pending.
    pub fn release(mut self) -> Result<()> {
        self.restore.take().map_or(Ok(()), |restore| restore())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take()
            && let Err(e) = restore()
        {
            tracing::warn!(error = %e, "[Runtime] terminal restore failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DROP_CALLS: AtomicUsize = AtomicUsize::new(0);
    static RELEASE_CALLS: AtomicUsize = AtomicUsize::new(0);
    static UNWIND_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn count_drop() -> Result<()> {
        DROP_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn count_release() -> Result<()> {
        RELEASE_CALLS.fetch_add(1, Ordering::SeqCst);
        Err("restore failed".into())
    }

    fn count_unwind() -> Result<()> {
        UNWIND_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    /// What: An early return drops the guard and restores once
    ///
    /// - Input: Armed guard going out of scope through a `?` error path
    /// - Output: Cleanup ran exactly once
    fn guard_restores_on_early_return() {
        fn build_terminal() -> Result<()> {
            let _guard = TerminalGuard::armed(count_drop);
            Err("terminal backend failed".into())
        }
        assert!(build_terminal().is_err());
        assert_eq!(DROP_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    /// What: Release runs cleanup once and surfaces its error
    ///
    /// - Input: Armed guard whose cleanup fails; release it
    /// - Output: `Err` returned; no second cleanup when the guard is dropped
    fn release_runs_once_and_reports() {
        let guard = TerminalGuard::armed(count_release);
        assert!(guard.release().is_err());
        assert_eq!(RELEASE_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    /// What: A panic while the guard is alive still restores the terminal
    ///
    /// - Input: Panic inside a scope holding an armed guard
    /// - Output: Cleanup ran once during unwinding
    fn guard_restores_on_panic() {
        let outcome = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard::armed(count_unwind);
            panic!("event loop panicked");
        });
        assert!(outcome.is_err());
        assert_eq!(UNWIND_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    /// What: Headless guard has nothing to undo
    ///
    /// - Input: `TerminalGuard::headless()`
    /// - Output: Release is `Ok(())`
    fn headless_guard_is_noop() {
        assert!(TerminalGuard::headless().release().is_ok());
    }
}
