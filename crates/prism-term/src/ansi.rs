// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write SGR sequences to any `impl Write`. No state,
// no decisions about when to emit — that's the console's job. This module
// just knows the byte-level encoding of every sequence the demonstrator
// prints.
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to `OutputBuffer` (backed by a Vec).
use std::io::{self, Write};

use crate::color::Rgb;

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// These map directly to SGR (Select Graphic Rendition) parameters.
    /// Combine with bitwise OR:
    ///
    /// ```
    /// use prism_term::ansi::Attr;
    ///
    /// let style = Attr::BOLD | Attr::ITALIC;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(!style.contains(Attr::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD    = 1 << 0;
        /// SGR 2 — decreased intensity (faint).
        const DIM     = 1 << 1;
        /// SGR 3 — italic or oblique.
        const ITALIC  = 1 << 2;
        /// SGR 7 — swap foreground and background.
        const INVERSE = 1 << 3;
    }
}

// ─── SGR ─────────────────────────────────────────────────────────────────────

/// Emit an SGR sequence with a caller-supplied parameter body.
///
/// The demonstrator's attribute suites feed raw numeric codes through this
/// (`sgr(w, "31")` → `\x1b[31m`) so the terminal sees exactly the parameter
/// value being exercised.
#[inline]
pub fn sgr(w: &mut impl Write, params: &str) -> io::Result<()> {
    write!(w, "\x1b[{params}m")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
///
/// This clears **everything**: bold, italic, colors — all of it.
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Emit SGR codes for text attributes as a single CSI sequence.
///
/// Multiple attributes are semicolon-separated: `\x1b[1;3m` for
/// bold + italic. Does nothing if no attributes are set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    w.write_all(b"\x1b[")?;
    let mut first = true;

    macro_rules! emit {
        ($flag:expr, $code:expr) => {
            if attr.contains($flag) {
                if !first {
                    w.write_all(b";")?;
                }
                w.write_all($code)?;
                first = false;
            }
        };
    }

    emit!(Attr::BOLD, b"1");
    emit!(Attr::DIM, b"2");
    emit!(Attr::ITALIC, b"3");
    emit!(Attr::INVERSE, b"7");
    let _ = first; // Last expansion sets first; suppress dead-write warning.

    w.write_all(b"m")
}

// ─── 256-Color Palette ───────────────────────────────────────────────────────

/// Set the foreground to a 256-color palette index (`38;5;N`).
#[inline]
pub fn fg_256(w: &mut impl Write, idx: u8) -> io::Result<()> {
    write!(w, "\x1b[38;5;{idx}m")
}

/// Set the background to a 256-color palette index (`48;5;N`).
#[inline]
pub fn bg_256(w: &mut impl Write, idx: u8) -> io::Result<()> {
    write!(w, "\x1b[48;5;{idx}m")
}

// ─── Truecolor ───────────────────────────────────────────────────────────────

/// Set the foreground to a 24-bit color (`38;2;R;G;B`).
#[inline]
pub fn fg_rgb(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;{}m", color.truecolor_param())
}

/// Set the background to a 24-bit color (`48;2;R;G;B`).
#[inline]
pub fn bg_rgb(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    write!(w, "\x1b[48;{}m", color.truecolor_param())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
