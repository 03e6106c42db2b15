//! Grid editing operations.
//!
//! Glyph writes and the character/line erase primitives the escape
//! dispatcher calls. Erased and inserted cells are always default
//! cells; the pen only colors glyphs that are actually written.

use crate::cell::Cell;
use crate::index::Column;

use super::Grid;

/// Erase extent for display and line erase operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    /// Erase from cursor to end (of display or line).
    Below,
    /// Erase from start (of display or line) through the cursor.
    Above,
    /// Erase entire (display or line).
    All,
}

impl Grid {
    /// Write a glyph at the cursor with the pen's attributes.
    ///
    /// A cursor parked past the last column (pending wrap) first wraps
    /// to column 0 of the next line, scrolling if that crosses the
    /// bottom of the scroll region. The cursor then advances one
    /// column, possibly back into the pending-wrap position.
    pub fn write_glyph(&mut self, ch: char) {
        if self.cursor.col().0 >= self.cols {
            self.cursor.set_col(Column(0));
            self.linefeed();
        }

        let line = self.cursor.line();
        let col = self.cursor.col();

        let mut cell = self.cursor.template;
        cell.ch = ch;
        self.rows[line][col] = cell;

        self.dirty.mark(line);
        self.cursor.set_col(col + Column(1));
    }

    /// Insert `count` default cells at the cursor, shifting the rest of
    /// the line right. Cells pushed past the edge are discarded.
    pub fn insert_blank(&mut self, count: usize) {
        let line = self.cursor.line();
        let col = self.cursor.col();
        if col.0 >= self.cols {
            return;
        }

        self.rows[line].insert_blank(col, count);
        self.dirty.mark(line);
    }

    /// Delete `count` cells at the cursor, shifting the rest of the
    /// line left. Default cells appear at the right edge.
    pub fn delete_chars(&mut self, count: usize) {
        let line = self.cursor.line();
        let col = self.cursor.col();
        if col.0 >= self.cols {
            return;
        }

        self.rows[line].delete(col, count);
        self.dirty.mark(line);
    }

    /// Erase `count` cells starting at the cursor, continuing across
    /// line boundaries and stopping at the end of the screen. The
    /// cursor does not move.
    pub fn erase_chars(&mut self, count: usize) {
        let start = self.cursor.line() * self.cols + self.cursor.col().0.min(self.cols);
        let end = (start + count).min(self.lines * self.cols);
        let template = Cell::default();

        let mut pos = start;
        while pos < end {
            let line = pos / self.cols;
            let col = pos % self.cols;
            let run = (self.cols - col).min(end - pos);
            self.rows[line].clear_range(Column(col)..Column(col + run), &template);
            self.dirty.mark(line);
            pos += run;
        }
    }

    /// Erase part or all of the cursor's line.
    pub fn erase_line(&mut self, mode: EraseMode) {
        let line = self.cursor.line();
        let col = self.cursor.col().0;
        let template = Cell::default();

        match mode {
            EraseMode::Below => {
                self.rows[line].clear_range(Column(col)..Column(self.cols), &template);
            }
            EraseMode::Above => {
                let end = col.min(self.cols - 1) + 1;
                self.rows[line].clear_range(Column(0)..Column(end), &template);
            }
            EraseMode::All => {
                self.rows[line].reset(&template);
            }
        }
        self.dirty.mark(line);
    }

    /// Erase part or all of the display.
    pub fn erase_display(&mut self, mode: EraseMode) {
        let template = Cell::default();
        match mode {
            EraseMode::Below => {
                self.erase_line(EraseMode::Below);
                for line in self.cursor.line() + 1..self.lines {
                    self.rows[line].reset(&template);
                    self.dirty.mark(line);
                }
            }
            EraseMode::Above => {
                // Inclusive through the cursor cell; every row down to
                // and including the cursor's is dirty.
                self.erase_line(EraseMode::Above);
                for line in 0..self.cursor.line() {
                    self.rows[line].reset(&template);
                    self.dirty.mark(line);
                }
            }
            EraseMode::All => {
                for row in &mut self.rows {
                    row.reset(&template);
                }
                self.dirty.mark_all();
            }
        }
    }
}
