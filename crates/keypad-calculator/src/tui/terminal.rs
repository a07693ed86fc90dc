//! Raw-mode terminal session setup and teardown
//!
//! Both directions are best-effort: every step runs even when an earlier
//! one failed, and the first error is returned.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Enables raw mode, switches to the alternate screen and captures the mouse.
///
/// A failure after raw mode was enabled restores the terminal first.
pub fn enter<W: Write>(out: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
        let _ = restore(out);
        return Err(e);
    }
    Ok(())
}

/// Leaves raw mode, the alternate screen and mouse capture, and shows the cursor
pub fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}
