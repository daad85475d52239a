// SPDX-License-Identifier: MIT
//
// Terminal queries — TTY detection and size.
//
// Safety: This module necessarily uses `unsafe` for isatty and
// ioctl (TIOCGWINSZ). These are the standard POSIX interfaces for
// terminal introspection — there is no safe alternative. Each unsafe
// block is minimal and documented.
#![allow(unsafe_code)]
//
// The demonstrator never leaves cooked mode: it prints line-oriented
// grids and exits. All it needs from the terminal is two answers —
// "is stdout a live terminal?" (escape grids are meaningless in a pipe)
// and "how wide is it?" (to decide how many samples fit per row).

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

/// Check whether stdout is connected to a terminal (TTY).
///
/// Stdout, not stdin: the escape grids go to stdout, and that is the
/// stream that must reach a real emulator for the output to mean anything.
#[cfg(unix)]
#[must_use]
pub fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty() -> bool {
    false
}

// ─── Tests ───────────────────────────────────────────────────────────────────
