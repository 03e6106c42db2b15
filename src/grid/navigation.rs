//! Cursor movement and navigation operations.
//!
//! Clamped relative/absolute movement plus the control-character
//! motions: carriage return, line feed, reverse line feed, backspace,
//! and fixed 8-column tabs. Line feed and reverse line feed scroll the
//! region when the cursor crosses its edge.

use crate::index::Column;

use super::Grid;

impl Grid {
    /// Move cursor up by `count` lines, clamped to line 0.
    pub fn move_up(&mut self, count: usize) {
        let line = self.cursor.line();
        self.cursor.set_line(line.saturating_sub(count));
    }

    /// Move cursor down by `count` lines, clamped to the last line.
    pub fn move_down(&mut self, count: usize) {
        let line = self.cursor.line();
        self.cursor.set_line((line + count).min(self.lines - 1));
    }

    /// Move cursor right by `count` columns, clamped to the last column.
    pub fn move_forward(&mut self, count: usize) {
        let col = self.cursor.col().0;
        self.cursor.set_col(Column((col + count).min(self.cols - 1)));
    }

    /// Move cursor left by `count` columns, clamped to column 0.
    pub fn move_backward(&mut self, count: usize) {
        let col = self.cursor.col().0;
        self.cursor.set_col(Column(col.saturating_sub(count)));
    }

    /// Set cursor to absolute `(line, col)`, clamped to bounds.
    ///
    /// The column clamps to `cols` (one past the last cell), the
    /// pending-wrap position.
    pub fn move_to(&mut self, line: usize, col: Column) {
        self.cursor.set_line(line.min(self.lines - 1));
        self.cursor.set_col(Column(col.0.min(self.cols)));
    }

    /// Set cursor column, clamped like `move_to`.
    pub fn move_to_column(&mut self, col: Column) {
        self.cursor.set_col(Column(col.0.min(self.cols)));
    }

    /// Set cursor line, clamped to the last line.
    pub fn move_to_line(&mut self, line: usize) {
        self.cursor.set_line(line.min(self.lines - 1));
    }

    /// Move cursor to column 0.
    pub fn carriage_return(&mut self) {
        self.cursor.set_col(Column(0));
    }

    /// Move cursor back one column; at column 0, wrap to the end of
    /// the previous line.
    pub fn backspace(&mut self) {
        let col = self.cursor.col().0;
        let line = self.cursor.line();
        if col > 0 {
            self.cursor.set_col(Column(col - 1));
        } else if line > 0 {
            self.cursor.set_line(line - 1);
            self.cursor.set_col(Column(self.cols - 1));
        }
    }

    /// Move cursor down one line. At the bottom of the scroll region,
    /// scroll the region up instead of moving; at the bottom of the
    /// screen (outside the region), stay put.
    pub fn linefeed(&mut self) {
        let line = self.cursor.line();
        if line + 1 == self.scroll_region.end {
            self.scroll_region_up(1);
        } else if line + 1 < self.lines {
            self.cursor.set_line(line + 1);
        } else {
            // Already at last line, below the scroll region: no-op.
        }
    }

    /// Move cursor up one line. At the top of the scroll region,
    /// scroll the region down instead of moving; at the top of the
    /// screen (outside the region), stay put.
    pub fn reverse_linefeed(&mut self) {
        let line = self.cursor.line();
        if line == self.scroll_region.start {
            self.scroll_region_down(1);
        } else if line > 0 {
            self.cursor.set_line(line - 1);
        } else {
            // Already at line 0, above the scroll region: no-op.
        }
    }

    /// Advance cursor to the next multiple-of-8 column. Past the right
    /// edge, wrap to column 0 of the next line via `linefeed`.
    ///
    /// Landing exactly on `cols` leaves the cursor in the pending-wrap
    /// position without feeding a line.
    pub fn tab(&mut self) {
        let col = (self.cursor.col().0 + 8) & !7;
        if col > self.cols {
            self.cursor.set_col(Column(0));
            self.linefeed();
        } else {
            self.cursor.set_col(Column(col));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::index::{Column, Line};

    #[test]
    fn move_up_and_clamp() {
        let mut grid = Grid::new(24, 80);
        grid.cursor_mut().set_line(5);
        grid.move_up(3);
        assert_eq!(grid.cursor().line(), 2);
        grid.move_up(100);
        assert_eq!(grid.cursor().line(), 0);
    }

    #[test]
    fn move_down_and_clamp() {
        let mut grid = Grid::new(24, 80);
        grid.move_down(3);
        assert_eq!(grid.cursor().line(), 3);
        grid.move_down(100);
        assert_eq!(grid.cursor().line(), 23);
    }

    #[test]
    fn move_forward_clamps_to_last_column() {
        let mut grid = Grid::new(24, 80);
        grid.move_forward(5);
        assert_eq!(grid.cursor().col(), Column(5));
        grid.move_forward(100);
        assert_eq!(grid.cursor().col(), Column(79));
    }

    #[test]
    fn move_backward_clamps_to_zero() {
        let mut grid = Grid::new(24, 80);
        grid.cursor_mut().set_col(Column(5));
        grid.move_backward(3);
        assert_eq!(grid.cursor().col(), Column(2));
        grid.move_backward(100);
        assert_eq!(grid.cursor().col(), Column(0));
    }

    #[test]
    fn move_to_allows_pending_wrap_column() {
        let mut grid = Grid::new(24, 80);
        grid.move_to(5, Column(200));
        assert_eq!(grid.cursor().line(), 5);
        assert_eq!(grid.cursor().col(), Column(80));
    }

    #[test]
    fn carriage_return_sets_col_zero() {
        let mut grid = Grid::new(24, 80);
        grid.cursor_mut().set_col(Column(40));
        grid.carriage_return();
        assert_eq!(grid.cursor().col(), Column(0));
    }

    #[test]
    fn backspace_moves_left() {
        let mut grid = Grid::new(24, 80);
        grid.cursor_mut().set_col(Column(3));
        grid.backspace();
        assert_eq!(grid.cursor().col(), Column(2));
    }

    #[test]
    fn backspace_at_line_start_wraps_to_previous_line_end() {
        let mut grid = Grid::new(24, 80);
        grid.cursor_mut().set_line(2);
        grid.backspace();
        assert_eq!(grid.cursor().line(), 1);
        assert_eq!(grid.cursor().col(), Column(79));
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let mut grid = Grid::new(24, 80);
        grid.backspace();
        assert_eq!(grid.cursor().line(), 0);
        assert_eq!(grid.cursor().col(), Column(0));
    }

    #[test]
    fn linefeed_in_middle_moves_down() {
        let mut grid = Grid::new(24, 80);
        grid.cursor_mut().set_line(5);
        grid.linefeed();
        assert_eq!(grid.cursor().line(), 6);
    }

    #[test]
    fn linefeed_at_bottom_triggers_scroll() {
        let mut grid = Grid::new(10, 20);
        grid.write_glyph('A');
        grid.cursor_mut().set_line(9);
        grid.cursor_mut().set_col(Column(0));
        grid.write_glyph('Z');

        grid.linefeed();
        assert_eq!(grid.cursor().line(), 9);
        // 'A' scrolled off the top; 'Z' moved up a line.
        assert!(grid[Line(0)][Column(0)].is_empty());
        assert_eq!(grid[Line(8)][Column(0)].ch, 'Z');
        assert!(grid[Line(9)][Column(0)].is_empty());
    }

    #[test]
    fn reverse_linefeed_at_top_scrolls_down() {
        let mut grid = Grid::new(10, 20);
        grid.write_glyph('B');
        grid.cursor_mut().set_col(Column(0));

        grid.reverse_linefeed();
        assert_eq!(grid.cursor().line(), 0);
        assert!(grid[Line(0)][Column(0)].is_empty());
        assert_eq!(grid[Line(1)][Column(0)].ch, 'B');
    }

    #[test]
    fn tab_advances_to_next_multiple_of_eight() {
        let mut grid = Grid::new(24, 80);
        grid.cursor_mut().set_col(Column(1));
        grid.tab();
        assert_eq!(grid.cursor().col(), Column(8));
        grid.tab();
        assert_eq!(grid.cursor().col(), Column(16));
    }

    #[test]
    fn tab_lands_on_pending_wrap_column() {
        let mut grid = Grid::new(24, 80);
        grid.cursor_mut().set_col(Column(73));
        grid.tab();
        // 80 is one past the last cell: the pending-wrap position.
        assert_eq!(grid.cursor().col(), Column(80));
        assert_eq!(grid.cursor().line(), 0);
    }

    #[test]
    fn tab_past_edge_wraps_to_next_line() {
        let mut grid = Grid::new(24, 80);
        grid.cursor_mut().set_col(Column(80));
        grid.tab();
        assert_eq!(grid.cursor().col(), Column(0));
        assert_eq!(grid.cursor().line(), 1);
    }
}
