// SPDX-License-Identifier: MIT
//
// termprism — a terminal SGR capability demonstrator.
//
// Prints grids of SGR escape sequences (basic attributes, 16/256-color
// palettes, full RGB truecolor) so the user can see at a glance what their
// terminal emulator supports. No capability detection: the sequences are
// simply emitted, and the screen is the verdict.
//
// The binary wires the prism-term plumbing to the application layer:
//
//   args → test selection (alias expansion) → suite dispatch
//   suites → console (row wrap, buffering) → one write() → terminal
//
// Test selection is hierarchical. The user names categories on the command
// line; aliases expand recursively down to the five leaf suites:
//
//   all ─ sgr ─┬─ sgr_basic
//              └─ sgr_color ─┬─ sgr_standard ─┬─ sgr_fg
//                            │                └─ sgr_bg
//                            ├─ sgr_256
//                            └─ sgr_rgb

use std::collections::HashSet;
use std::env;
use std::io::{self, Write};
use std::process;

use prism_term::ansi;
use prism_term::color::Hsv;
use prism_term::console::Console;
use prism_term::terminal;

// ─── Test selection ─────────────────────────────────────────────────────────

/// An alias table: each entry maps an alias token to its expansion list.
///
/// Invariant for extension: the table must stay acyclic and no two alias
/// keys may overlap, so each token matches at most one entry.
type AliasTable = [(&'static str, &'static [&'static str])];

/// The shipped alias hierarchy. Entry order is the order aliases are
/// matched and the order they appear in the help text.
const ALIASES: &AliasTable = &[
    ("sgr_standard", &["sgr_fg", "sgr_bg"]),
    ("sgr_color", &["sgr_standard", "sgr_256", "sgr_rgb"]),
    ("sgr", &["sgr_basic", "sgr_color"]),
    ("all", &["sgr"]),
];

/// Expand a set of requested category tokens into leaf test identifiers.
///
/// Each token either matches an alias (and is replaced by its recursively
/// expanded set — the alias token itself is never inserted) or passes
/// through verbatim. Unknown tokens are not an error: they survive into
/// the result and simply match no suite later.
///
/// Pure and deterministic. The table is a parameter so the expansion can
/// be exercised against synthetic tables.
fn resolve_tests(requested: &HashSet<String>, table: &AliasTable) -> HashSet<String> {
    let mut resolved = HashSet::new();
    for token in requested {
        resolve_token(token, table, &mut resolved, table.len() + 1);
    }
    resolved
}

/// Expand one token into `out`.
///
/// `depth` bounds the recursion: in an acyclic table no expansion chain
/// can revisit a key, so a budget of one hop per table entry (plus one)
/// is never exhausted. Against a cyclic table the budget runs out and the
/// current token is inserted verbatim instead of expanded — degraded, but
/// terminating and deterministic.
fn resolve_token(token: &str, table: &AliasTable, out: &mut HashSet<String>, depth: usize) {
    if depth > 0 {
        if let Some((_, expansion)) = table.iter().find(|(alias, _)| *alias == token) {
            for sub in *expansion {
                resolve_token(sub, table, out, depth - 1);
            }
            return;
        }
    }
    out.insert(token.to_string());
}

// ─── Suites ─────────────────────────────────────────────────────────────────

/// One leaf test: a heading label, the identifier that selects it, a short
/// description for the help text, and the routine that prints its grid.
struct Suite {
    label: &'static str,
    id: &'static str,
    desc: &'static str,
    run: fn(&mut Console) -> io::Result<()>,
}

const SUITES: &[Suite] = &[
    Suite {
        label: "SGR: Basic",
        id: "sgr_basic",
        desc: "basic attributes",
        run: suite_basic,
    },
    Suite {
        label: "SGR: Foreground",
        id: "sgr_fg",
        desc: "foreground colors",
        run: suite_fg,
    },
    Suite {
        label: "SGR: Background",
        id: "sgr_bg",
        desc: "background colors",
        run: suite_bg,
    },
    Suite {
        label: "SGR: 256-Color",
        id: "sgr_256",
        desc: "256-color palette",
        run: suite_256,
    },
    Suite {
        label: "SGR: RGB Color",
        id: "sgr_rgb",
        desc: "24-bit RGB color",
        run: suite_rgb,
    },
];

/// Basic attribute codes: 1–29 (intensity, style, blink, conceal) and
/// 50–75 (fonts, frames, ideogram and underline variants).
fn suite_basic(con: &mut Console) -> io::Result<()> {
    for code in 1..=29u8 {
        con.sample(&code.to_string())?;
    }
    con.wrap()?;
    for code in 50..=75u8 {
        con.sample(&code.to_string())?;
    }
    Ok(())
}

/// Standard and bright foreground colors, plus the defaults (39, 99).
fn suite_fg(con: &mut Console) -> io::Result<()> {
    for code in 30..=37u8 {
        con.sample(&code.to_string())?;
    }
    con.sample("39")?;
    con.wrap()?;
    for code in 90..=97u8 {
        con.sample(&code.to_string())?;
    }
    con.sample("99")?;
    Ok(())
}

/// Standard and bright background colors, plus the defaults (49, 109).
fn suite_bg(con: &mut Console) -> io::Result<()> {
    for code in 40..=47u8 {
        con.sample(&code.to_string())?;
    }
    con.sample("49")?;
    con.wrap()?;
    for code in 100..=107u8 {
        con.sample(&code.to_string())?;
    }
    con.sample("109")?;
    Ok(())
}

/// The full 256-color palette as background swatches: the 16 standard
/// colors, the 6×6×6 cube in six rows of 36, and the grayscale ramp.
fn suite_256(con: &mut Console) -> io::Result<()> {
    write!(con, "Std  ")?;
    for idx in 0..=15u8 {
        ansi::bg_256(con, idx)?;
        write!(con, "  ")?;
    }
    ansi::reset(con)?;
    con.wrap()?;

    for row in 0..6u8 {
        write!(con, "{:<5}", u16::from(row) * 36)?;
        for col in 0..36u8 {
            ansi::bg_256(con, 16 + row * 36 + col)?;
            write!(con, "  ")?;
        }
        ansi::reset(con)?;
        con.wrap()?;
    }

    write!(con, "Gray ")?;
    for idx in 232..=255u8 {
        ansi::bg_256(con, idx)?;
        write!(con, "  ")?;
    }
    ansi::reset(con)
}

/// Truecolor swatch grid: 16 printed rows covering 32 hue bands, two per
/// row via half-block glyphs (foreground paints the upper band, background
/// the lower). Columns sweep saturation from 0 to 31/32 at full value.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
// Band and step counts are tiny; the label hue is truncated by design.
fn suite_rgb(con: &mut Console) -> io::Result<()> {
    for band in 0..16u32 {
        let h1 = (band * 2) as f32 * 360.0 / 32.0;
        let h2 = (band * 2 + 1) as f32 * 360.0 / 32.0;
        write!(con, " h={:>3} | ", h1 as u32)?;
        for step in 0..32u32 {
            let s = step as f32 / 32.0;
            ansi::fg_rgb(con, Hsv::new(h1, s, 1.0).to_rgb())?;
            ansi::bg_rgb(con, Hsv::new(h2, s, 1.0).to_rgb())?;
            write!(con, "▀")?;
        }
        ansi::reset(con)?;
        con.wrap()?;
    }
    Ok(())
}

// ─── Runner ─────────────────────────────────────────────────────────────────

/// Dispatches the suites selected by the resolved identifier set.
struct TestRunner {
    resolved: HashSet<String>,
}

impl TestRunner {
    fn new(requested: &HashSet<String>) -> Self {
        Self {
            resolved: resolve_tests(requested, ALIASES),
        }
    }

    /// Run every suite whose identifier was selected, in declaration order.
    fn run(&self, con: &mut Console) -> io::Result<()> {
        for suite in SUITES {
            if self.resolved.contains(suite.id) {
                con.heading(&format!("{} ({})", suite.label, suite.id))?;
                (suite.run)(con)?;
            }
        }
        Ok(())
    }

    /// Resolved tokens that match no suite, sorted for stable reporting.
    fn unmatched(&self) -> Vec<&str> {
        let mut extra: Vec<&str> = self
            .resolved
            .iter()
            .filter(|token| !SUITES.iter().any(|suite| suite.id == token.as_str()))
            .map(String::as_str)
            .collect();
        extra.sort_unstable();
        extra
    }
}

// ─── CLI ────────────────────────────────────────────────────────────────────

/// Split the comma-separated test argument into tokens.
///
/// Empty segments become empty-string tokens; they pass through resolution,
/// match no suite, and surface in the unmatched-token warning.
fn parse_tests(arg: &str) -> HashSet<String> {
    arg.split(',').map(str::to_string).collect()
}

fn print_help(program: &str) {
    eprintln!("Usage: {program} [<tests>|--help]");
    eprintln!("------------------------------------------");
    eprintln!("Tests to run (comma-separated):");
    for suite in SUITES {
        eprintln!("  - {}: {}", suite.id, suite.desc);
    }
    eprintln!("------------------------------------------");
    for (alias, expansion) in ALIASES {
        eprintln!("  - {} = {}", alias, expansion.join(", "));
    }
    eprintln!("------------------------------------------");
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn run_suites(runner: &TestRunner) -> io::Result<()> {
    let mut con = Console::new();
    runner.run(&mut con)?;
    con.write_all(b"\n")?;
    con.flush_stdout()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("termprism", String::as_str);

    let requested = match args.len() {
        1 => HashSet::from(["all".to_string()]),
        2 if args[1] == "--help" => {
            print_help(program);
            process::exit(1);
        }
        2 => parse_tests(&args[1]),
        _ => {
            eprintln!("Usage: {program} [<tests>|--help]");
            process::exit(1);
        }
    };

    if !terminal::is_tty() {
        eprintln!("termprism: stdout is not a TTY.");
        return;
    }

    let runner = TestRunner::new(&requested);
    if let Err(e) = run_suites(&runner) {
        eprintln!("termprism: {e}");
        process::exit(1);
    }

    let unmatched = runner.unmatched();
    if !unmatched.is_empty() {
        eprintln!(
            "termprism: unknown tests ignored: {}",
            unmatched.join(", ")
        );
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Build a token set from string literals.
    fn set(tokens: &[&str]) -> HashSet<String> {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    /// The five leaf identifiers.
    fn leaves() -> HashSet<String> {
        set(&["sgr_basic", "sgr_fg", "sgr_bg", "sgr_256", "sgr_rgb"])
    }

    /// Run one suite against an 8-per-row console and return its output.
    fn render(suite: fn(&mut Console) -> io::Result<()>) -> String {
        let mut con = Console::with_samples_per_row(8);
        suite(&mut con).unwrap();
        let mut dest = Vec::new();
        con.flush_to(&mut dest).unwrap();
        String::from_utf8(dest).unwrap()
    }

    /// Run the full runner against an 8-per-row console.
    fn render_runner(runner: &TestRunner) -> String {
        let mut con = Console::with_samples_per_row(8);
        runner.run(&mut con).unwrap();
        let mut dest = Vec::new();
        con.flush_to(&mut dest).unwrap();
        String::from_utf8(dest).unwrap()
    }

    // ── Test selection ────────────────────────────────────────────────────

    #[test]
    fn all_expands_to_every_leaf() {
        assert_eq!(resolve_tests(&set(&["all"]), ALIASES), leaves());
    }

    #[test]
    fn sgr_expands_like_all() {
        assert_eq!(resolve_tests(&set(&["sgr"]), ALIASES), leaves());
    }

    #[test]
    fn basic_plus_color_expands_like_all() {
        assert_eq!(
            resolve_tests(&set(&["sgr_basic", "sgr_color"]), ALIASES),
            leaves()
        );
    }

    #[test]
    fn standard_expands_to_fg_and_bg() {
        assert_eq!(
            resolve_tests(&set(&["sgr_standard"]), ALIASES),
            set(&["sgr_fg", "sgr_bg"])
        );
    }

    #[test]
    fn leaf_resolves_to_itself() {
        assert_eq!(resolve_tests(&set(&["sgr_fg"]), ALIASES), set(&["sgr_fg"]));
    }

    #[test]
    fn alias_token_never_survives_expansion() {
        let resolved = resolve_tests(&set(&["all"]), ALIASES);
        for (alias, _) in ALIASES {
            assert!(!resolved.contains(*alias), "{alias} leaked into the result");
        }
    }

    #[test]
    fn unknown_token_passes_through() {
        assert_eq!(resolve_tests(&set(&["bogus"]), ALIASES), set(&["bogus"]));
    }

    #[test]
    fn empty_token_passes_through() {
        assert_eq!(resolve_tests(&set(&[""]), ALIASES), set(&[""]));
    }

    #[test]
    fn alias_and_garbage_mix() {
        assert_eq!(
            resolve_tests(&set(&["sgr_standard", "nope"]), ALIASES),
            set(&["sgr_fg", "sgr_bg", "nope"])
        );
    }

    #[test]
    fn empty_input_resolves_empty() {
        assert_eq!(resolve_tests(&HashSet::new(), ALIASES), HashSet::new());
    }

    #[test]
    fn cyclic_table_terminates() {
        // A deliberately cyclic table: the depth budget runs out and the
        // innermost token is passed through verbatim instead of expanded.
        let cyclic: &AliasTable = &[("a", &["b"]), ("b", &["a"])];
        assert_eq!(resolve_tests(&set(&["a"]), cyclic), set(&["b"]));
    }

    #[test]
    fn shipped_table_keys_do_not_overlap() {
        for (i, (a, _)) in ALIASES.iter().enumerate() {
            for (b, _) in &ALIASES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    // ── Suites ────────────────────────────────────────────────────────────

    #[test]
    fn basic_suite_covers_both_code_ranges() {
        let out = render(suite_basic);
        assert!(out.contains("   1: \x1b[1mtest\x1b[0m"));
        assert!(out.contains("\x1b[29m"));
        assert!(out.contains("\x1b[50m"));
        assert!(out.contains("\x1b[75m"));
        // 29 + 26 samples in total.
        assert_eq!(out.matches("test").count(), 55);
    }

    #[test]
    fn fg_suite_covers_standard_bright_and_default() {
        let out = render(suite_fg);
        assert!(out.contains("\x1b[30m"));
        assert!(out.contains("\x1b[37m"));
        assert!(out.contains("\x1b[39m"));
        assert!(out.contains("\x1b[90m"));
        assert!(out.contains("\x1b[99m"));
        assert_eq!(out.matches("test").count(), 18);
    }

    #[test]
    fn bg_suite_covers_standard_bright_and_default() {
        let out = render(suite_bg);
        assert!(out.contains("\x1b[40m"));
        assert!(out.contains("\x1b[49m"));
        assert!(out.contains("\x1b[100m"));
        assert!(out.contains("\x1b[109m"));
        assert_eq!(out.matches("test").count(), 18);
    }

    #[test]
    fn palette_suite_covers_all_256_indices() {
        let out = render(suite_256);
        assert!(out.starts_with("Std  "));
        assert!(out.contains("\x1b[48;5;0m"));
        assert!(out.contains("\x1b[48;5;15m"));
        assert!(out.contains("\x1b[48;5;16m"));
        assert!(out.contains("\x1b[48;5;231m"));
        assert!(out.contains("\nGray "));
        assert!(out.contains("\x1b[48;5;232m"));
        assert!(out.contains("\x1b[48;5;255m"));
        // One swatch per palette index.
        assert_eq!(out.matches("\x1b[48;5;").count(), 256);
    }

    #[test]
    fn palette_suite_labels_cube_rows() {
        let out = render(suite_256);
        for label in ["0    ", "36   ", "72   ", "108  ", "144  ", "180  "] {
            assert!(
                out.contains(&format!("\n{label}")),
                "missing row label {label:?}"
            );
        }
        // Std row + 6 cube rows wrap; the gray row is left open.
        assert_eq!(out.matches('\n').count(), 7);
    }

    #[test]
    fn rgb_suite_prints_sixteen_rows_of_32_cells() {
        let out = render(suite_rgb);
        assert_eq!(out.matches('\n').count(), 16);
        assert_eq!(out.matches('▀').count(), 512);
        // Every cell is a foreground+background truecolor pair.
        assert_eq!(out.matches("\x1b[38;2;").count(), 512);
        assert_eq!(out.matches("\x1b[48;2;").count(), 512);
    }

    #[test]
    fn rgb_suite_labels_hue_rows() {
        let out = render(suite_rgb);
        assert!(out.starts_with(" h=  0 | "));
        // Second row: hue 2 * 360 / 32 = 22.5, truncated for the label.
        assert!(out.contains(" h= 22 | "));
        // Last row is labeled with its upper band: 30 * 360 / 32 = 337.5.
        assert!(out.contains(" h=337 | "));
    }

    #[test]
    fn rgb_suite_first_cell_is_white() {
        // Row 0, column 0: saturation 0 at full value — pure white.
        let out = render(suite_rgb);
        assert!(out.contains("\x1b[38;2;255;255;255m"));
    }

    // ── Runner ────────────────────────────────────────────────────────────

    #[test]
    fn runner_gates_on_resolved_set() {
        let runner = TestRunner::new(&set(&["sgr_fg"]));
        let out = render_runner(&runner);
        assert!(out.contains("SGR: Foreground (sgr_fg)"));
        assert!(out.contains("\x1b[30m"));
        assert!(!out.contains("\x1b[40m"));
        assert!(!out.contains("SGR: Basic"));
    }

    #[test]
    fn runner_all_runs_every_suite_in_order() {
        let runner = TestRunner::new(&set(&["all"]));
        let out = render_runner(&runner);
        let mut last = 0;
        for suite in SUITES {
            let heading = format!("{} ({})", suite.label, suite.id);
            let pos = out.find(&heading).unwrap_or_else(|| {
                panic!("missing heading {heading:?}");
            });
            assert!(pos >= last, "{heading:?} out of order");
            last = pos;
        }
    }

    #[test]
    fn runner_headings_are_bold() {
        let runner = TestRunner::new(&set(&["sgr_basic"]));
        let out = render_runner(&runner);
        assert!(out.contains("\x1b[1mSGR: Basic (sgr_basic)\x1b[0m"));
    }

    #[test]
    fn runner_with_nothing_selected_prints_nothing() {
        let runner = TestRunner::new(&set(&["bogus"]));
        let out = render_runner(&runner);
        assert!(out.is_empty());
    }

    #[test]
    fn unmatched_reports_garbage_sorted() {
        let runner = TestRunner::new(&set(&["zzz", "sgr_fg", "aaa"]));
        assert_eq!(runner.unmatched(), vec!["aaa", "zzz"]);
    }

    #[test]
    fn unmatched_empty_for_all() {
        let runner = TestRunner::new(&set(&["all"]));
        assert!(runner.unmatched().is_empty());
    }

    // ── CLI parsing ───────────────────────────────────────────────────────

    #[test]
    fn parse_tests_splits_on_commas() {
        assert_eq!(parse_tests("sgr_fg,sgr_bg"), set(&["sgr_fg", "sgr_bg"]));
    }

    #[test]
    fn parse_tests_single_token() {
        assert_eq!(parse_tests("all"), set(&["all"]));
    }

    #[test]
    fn parse_tests_keeps_empty_segments() {
        assert_eq!(parse_tests("a,,b"), set(&["a", "", "b"]));
    }

    #[test]
    fn parse_tests_collapses_duplicates() {
        assert_eq!(parse_tests("sgr_fg,sgr_fg"), set(&["sgr_fg"]));
    }
}
