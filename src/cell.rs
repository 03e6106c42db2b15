//! Terminal cell types.
//!
//! A `Cell` is one character position in the grid: a glyph, the
//! attribute flags it was written with, and fully-resolved foreground
//! and background colors. Cells are plain values; they never share
//! attribute storage with the cursor's pen.

use bitflags::bitflags;

use crate::color::{DEFAULT_BG, DEFAULT_FG, Rgb};

bitflags! {
    /// Per-cell rendering attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const BOLD          = 1;
        const ITALIC        = 2;
        const UNDERLINE     = 4;
        const STRIKETHROUGH = 8;
    }
}

/// One character position in the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The glyph stored in this cell.
    pub ch: char,
    /// Foreground color, resolved to RGB at write time.
    pub fg: Rgb,
    /// Background color, resolved to RGB at write time.
    pub bg: Rgb,
    /// Attribute flags.
    pub flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            flags: CellFlags::empty(),
        }
    }
}

impl Cell {
    /// Reset this cell to match the given template.
    pub fn reset(&mut self, template: &Self) {
        *self = *template;
    }

    /// Returns `true` if this cell is a blank with default colors and no flags.
    pub fn is_empty(&self) -> bool {
        self.ch == ' ' && self.fg == DEFAULT_FG && self.bg == DEFAULT_BG && self.flags.is_empty()
    }
}
