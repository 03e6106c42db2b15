//! Terminal grid: 2D cell storage with cursor, scroll region, and
//! dirty tracking.
//!
//! The `Grid` is the central data structure for terminal emulation. It
//! stores visible rows, the cursor and its pen, and the scroll region.
//! Editing, navigation, and scrolling operations are added in
//! submodules; every mutation marks the affected rows dirty.

pub mod cursor;
pub mod dirty;
pub mod editing;
pub mod navigation;
pub mod row;
pub mod scroll;

use std::ops::{Index, IndexMut, Range};

use crate::index::{Column, Line};

pub use cursor::Cursor;
pub use dirty::DirtyTracker;
pub use editing::EraseMode;
pub use row::Row;

/// Smallest supported line count.
pub const MIN_LINES: usize = 10;
/// Smallest supported column count.
pub const MIN_COLS: usize = 20;

/// The 2D terminal cell grid.
///
/// Rows are indexed `0..lines` top to bottom. The scroll region is
/// stored as a half-open range of row indices; only rows inside it
/// participate in scrolling.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Visible rows (index 0 = top of screen).
    rows: Vec<Row>,
    /// Number of columns.
    cols: usize,
    /// Number of visible lines.
    lines: usize,
    /// Current cursor position and pen.
    cursor: Cursor,
    /// Scroll region: top (inclusive) .. bottom (exclusive).
    scroll_region: Range<usize>,
    /// Tracks which rows have changed since last drain.
    dirty: DirtyTracker,
}

impl Grid {
    /// Create a new grid with the given dimensions.
    ///
    /// Dimensions below the 10×20 minimum are clamped up. All rows
    /// start as default cells with the cursor at (0, 0).
    pub fn new(lines: usize, cols: usize) -> Self {
        let lines = lines.max(MIN_LINES);
        let cols = cols.max(MIN_COLS);
        let rows = (0..lines).map(|_| Row::new(cols)).collect();

        Self {
            rows,
            cols,
            lines,
            cursor: Cursor::new(),
            scroll_region: 0..lines,
            dirty: DirtyTracker::new(lines),
        }
    }

    /// Number of visible lines.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Immutable reference to the cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Mutable reference to the cursor.
    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// First line of the scroll region (inclusive).
    pub fn scroll_top(&self) -> usize {
        self.scroll_region.start
    }

    /// Last line of the scroll region (inclusive).
    pub fn scroll_bottom(&self) -> usize {
        self.scroll_region.end - 1
    }

    /// Immutable reference to the dirty tracker.
    pub fn dirty(&self) -> &DirtyTracker {
        &self.dirty
    }

    /// Mutable reference to the dirty tracker.
    pub fn dirty_mut(&mut self) -> &mut DirtyTracker {
        &mut self.dirty
    }

    /// Resize to new dimensions, clamped to the 10×20 minimum.
    ///
    /// Content in the surviving area is preserved; new cells are
    /// default. The scroll region resets to the full screen, the
    /// cursor is clamped back into bounds, and every line is marked
    /// dirty.
    pub fn resize(&mut self, lines: usize, cols: usize) {
        let lines = lines.max(MIN_LINES);
        let cols = cols.max(MIN_COLS);

        self.rows.resize_with(lines, || Row::new(cols));
        for row in &mut self.rows {
            row.resize(cols);
        }

        self.lines = lines;
        self.cols = cols;
        self.scroll_region = 0..lines;
        self.cursor.set_line(self.cursor.line().min(lines - 1));
        self.cursor.set_col(Column(self.cursor.col().0.min(cols)));
        self.dirty.resize(lines);
    }
}

impl Index<Line> for Grid {
    type Output = Row;

    fn index(&self, line: Line) -> &Row {
        &self.rows[line.0]
    }
}

impl IndexMut<Line> for Grid {
    fn index_mut(&mut self, line: Line) -> &mut Row {
        &mut self.rows[line.0]
    }
}

#[cfg(test)]
mod tests;
