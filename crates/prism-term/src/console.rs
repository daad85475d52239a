// SPDX-License-Identifier: MIT
//
// Output buffering and row-wrap console bookkeeping.
//
// Two components work together:
//
//   OutputBuffer — accumulates all ANSI bytes in memory so the entire run
//   can be written in a single write() syscall. This eliminates per-escape
//   overhead and keeps the terminal's input parser happy.
//
//   Console — layers the demonstrator's layout state on top: a counter of
//   samples printed on the current row (wrapping with a newline when the
//   row is full) and section headings. Samples per row is derived from the
//   terminal width, so a wide terminal packs more codes per line.
//
// The attribute suites only ever call `sample`; the 256-color and
// truecolor grids write their rows directly through the `Write` impl and
// terminate them with `wrap`, which keeps the counter honest.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::ansi::{self, Attr};
use crate::terminal;

// ─── OutputBuffer ────────────────────────────────────────────────────────────

/// A byte buffer that accumulates ANSI output for a single `write()` syscall.
///
/// Instead of hundreds of small writes per run (labels, escapes, swatches),
/// everything goes into this buffer first. A single flush at the end writes
/// it all at once.
///
/// Default capacity: 16 KB — enough for a full `all` run without reallocation.
pub struct OutputBuffer {
    buf: Vec<u8>,
}

const DEFAULT_CAPACITY: usize = 16_384;

impl OutputBuffer {
    /// Create an empty buffer with default capacity (16 KB).
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Number of bytes accumulated.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated bytes (for testing and debugging).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Clear the buffer for reuse (keeps allocated capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Write accumulated output to stdout and clear the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&self.buf)?;
            stdout.flush()?;
            self.buf.clear();
        }
        Ok(())
    }

    /// Write accumulated output to an arbitrary writer and clear the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if !self.buf.is_empty() {
            w.write_all(&self.buf)?;
            w.flush()?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Intentionally a no-op. Real flushing via flush_stdout() / flush_to().
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Console ─────────────────────────────────────────────────────────────────

/// The text every sample styles. Short enough to pack many per row, long
/// enough that attributes like strikethrough are visible.
const SAMPLE_TEXT: &str = "test";

/// Display width of the right-aligned value label in a sample.
const LABEL_WIDTH: usize = 4;

/// Samples per row when the terminal width cannot be determined.
const DEFAULT_SAMPLES_PER_ROW: usize = 8;

/// How many samples fit on one row of `cols` columns.
fn samples_per_row(cols: u16) -> usize {
    let sample_width = LABEL_WIDTH + 2 + SAMPLE_TEXT.width();
    (usize::from(cols) / sample_width).max(1)
}

/// Buffered console with row-wrap bookkeeping for the sample grids.
pub struct Console {
    out: OutputBuffer,
    /// Samples printed on the current row.
    in_row: usize,
    /// Samples per row before wrapping.
    per_row: usize,
}

impl Console {
    /// Create a console sized to the current terminal width.
    ///
    /// Falls back to 8 samples per row when the width is unavailable.
    #[must_use]
    pub fn new() -> Self {
        let per_row = terminal::get_size()
            .map_or(DEFAULT_SAMPLES_PER_ROW, |size| samples_per_row(size.cols));
        Self::with_samples_per_row(per_row)
    }

    /// Create a console with a fixed samples-per-row count.
    #[must_use]
    pub fn with_samples_per_row(per_row: usize) -> Self {
        Self {
            out: OutputBuffer::new(),
            in_row: 0,
            per_row: per_row.max(1),
        }
    }

    /// Print one sample: a right-aligned value label, then `test` styled
    /// with that value as a raw SGR parameter, then a reset.
    ///
    /// Wraps to a new row once the current one is full.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    pub fn sample(&mut self, value: &str) -> io::Result<()> {
        write!(self.out, "{value:>LABEL_WIDTH$}: ")?;
        ansi::sgr(&mut self.out, value)?;
        self.out.write_all(SAMPLE_TEXT.as_bytes())?;
        ansi::reset(&mut self.out)?;

        self.in_row += 1;
        if self.in_row >= self.per_row {
            self.out.write_all(b"\n")?;
            self.in_row = 0;
        }
        Ok(())
    }

    /// End the current row unconditionally and reset the wrap counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    pub fn wrap(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.in_row = 0;
        Ok(())
    }

    /// Print a bold section heading, separated by blank lines.
    ///
    /// The leading reset clears any styling a misbehaving terminal may
    /// have left active after the previous grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(b"\n\n")?;
        ansi::reset(&mut self.out)?;
        ansi::attrs(&mut self.out, Attr::BOLD)?;
        self.out.write_all(text.as_bytes())?;
        ansi::reset(&mut self.out)?;
        self.out.write_all(b"\n\n")?;
        self.in_row = 0;
        Ok(())
    }

    /// The accumulated bytes (for testing).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.out.as_bytes()
    }

    /// Write everything accumulated so far to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        self.out.flush_stdout()
    }

    /// Write everything accumulated so far to an arbitrary writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        self.out.flush_to(w)
    }
}

impl Write for Console {
    /// Raw writes bypass the wrap counter — grid rows that lay themselves
    /// out call [`wrap`](Self::wrap) to terminate their lines.
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
