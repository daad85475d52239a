// SPDX-License-Identifier: MIT
//
// Color model for the truecolor swatch grid.
//
// Single-character variable names (h, s, v, c, x, m) are the standard
// mathematical convention in color science. Renaming them would make the
// code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// The swatch grid sweeps hue and saturation and needs nothing fancier than
// the classic geometric HSV→RGB model: pick a sector of the hue circle,
// interpolate the two active channels, lift by the value offset. RGB
// channels are carried as floats in [0, 255] and truncated toward zero
// only when formatted into an escape parameter — the truncation is part of
// the wire format, not the color math.

// ─── HSV ─────────────────────────────────────────────────────────────────────

/// A color in HSV space.
///
/// - `h`: hue angle in degrees, 0.0 to 360.0
/// - `s`: saturation, 0.0 to 1.0
/// - `v`: value (brightness), 0.0 to 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create an HSV color, enforcing the documented ranges.
    ///
    /// # Panics
    ///
    /// Panics if `h` is outside `[0, 360]` or `s`/`v` are outside `[0, 1]`.
    /// Callers construct these from bounded sweeps, so a violation is a
    /// caller bug, not a recoverable condition.
    #[must_use]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        assert!((0.0..=360.0).contains(&h), "hue out of range: {h}");
        assert!((0.0..=1.0).contains(&s), "saturation out of range: {s}");
        assert!((0.0..=1.0).contains(&v), "value out of range: {v}");
        Self { h, s, v }
    }

    /// Convert to RGB via the piecewise hue-sector model.
    ///
    /// The hue is truncated to a whole degree before sector selection.
    /// That quantization is load-bearing: it snaps every swatch to
    /// one-degree resolution, and the grid's appearance depends on it.
    ///
    /// Sector bounds: the first sector is the closed interval `[0, 1]`,
    /// every later sector is half-open `(k, k+1]`. With `h = 360` the
    /// scaled hue lands exactly on 6, inside the last sector, and the
    /// zero interpolation term collapses the result back to pure red —
    /// the hue circle wraps.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let c = self.v * self.s;
        #[allow(clippy::cast_possible_truncation)] // Whole-degree snap is intended.
        let hp = (self.h as i32) as f32 / 60.0;
        let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());

        let (r, g, b) = if (0.0..=1.0).contains(&hp) {
            (c, x, 0.0)
        } else if hp <= 2.0 {
            (x, c, 0.0)
        } else if hp <= 3.0 {
            (0.0, c, x)
        } else if hp <= 4.0 {
            (0.0, x, c)
        } else if hp <= 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let m = self.v - c;
        Rgb {
            r: (r + m) * 255.0,
            g: (g + m) * 255.0,
            b: (b + m) * 255.0,
        }
    }
}

// ─── RGB ─────────────────────────────────────────────────────────────────────

/// An RGB color with channels in `[0, 255]`, stored as floats.
///
/// Produced by [`Hsv::to_rgb`]. Channels stay fractional until they hit
/// the wire; [`truecolor_param`](Self::truecolor_param) truncates them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Format the SGR truecolor parameter body: `2;<R>;<G>;<B>`.
    ///
    /// Channels are truncated toward zero. The `38`/`48` selector and the
    /// final `m` belong to the full escape sequence and are added by the
    /// ANSI layer, not here.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Channels are produced in [0, 255]; truncation is the wire format.
    pub fn truecolor_param(self) -> String {
        format!("2;{};{};{}", self.r as u8, self.g as u8, self.b as u8)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
