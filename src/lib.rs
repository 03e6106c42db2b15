//! Core terminal emulation for a browser-hosted terminal.
//!
//! This crate provides the byte-stream interpreter and character grid
//! that sit between a PTY transport and a renderer: an ECMA-48/VT100
//! escape-sequence state machine, a cell grid with per-row dirty
//! tracking, cursor and pen state, an SGR color/attribute decoder, and
//! the key encoder for the input side. It contains no rendering,
//! transport, or session code — those plug in through the traits in
//! [`event`].
//!
//! Every input byte is treated as one code point occupying one display
//! column; wide, zero-width, and combining characters are not handled.

#![deny(unsafe_code)]

pub mod cell;
pub mod color;
pub mod event;
pub mod grid;
pub mod index;
pub mod key_encoding;
pub mod term;

pub use cell::{Cell, CellFlags};
pub use color::{BRIGHT_COLORS, DEFAULT_BG, DEFAULT_FG, NORMAL_COLORS, Rgb, indexed_color};
pub use event::{KeyboardOutput, ResizeNotifier, VoidListener};
pub use grid::{Cursor, EraseMode, Grid, Row};
pub use index::{Column, Line, Point};
pub use key_encoding::{Key, Modifiers, encode_key};
pub use term::Term;
