// SPDX-License-Identifier: MIT
//
// prism-term — terminal plumbing for termprism.
//
// The demonstrator's output layer: byte-level SGR escape encoding, the
// HSV→RGB math behind the truecolor swatch grid, a buffered console with
// row-wrap bookkeeping, and TTY/size queries via raw POSIX calls.
//
// This crate intentionally avoids terminal frameworks (ratatui, crossterm)
// in favor of direct escape-sequence emission. The whole point of the tool
// is to show the user exactly which sequences their emulator honors, so
// every byte sent to the terminal is spelled out here, not delegated to an
// abstraction that might encode things differently.

pub mod ansi;
pub mod color;
pub mod console;
pub mod terminal;
