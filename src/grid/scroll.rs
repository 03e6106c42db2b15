//! Scroll region management and scroll operations.
//!
//! The scroll region is the only band of rows that moves on line feed
//! overflow, reverse line feed underflow, SU/SD, and IL. Rows outside
//! it are never touched by scrolling. All operations rotate existing
//! row allocations instead of reallocating.

use crate::cell::Cell;
use crate::index::Column;

use super::Grid;

impl Grid {
    /// Set the scroll region to the inclusive row band `[top, bottom]`.
    ///
    /// Both bounds are clamped to the screen. A band of fewer than
    /// three rows is rejected and leaves the region unchanged. On
    /// success the cursor is homed to (0, 0).
    pub fn set_scroll_region(&mut self, top: usize, bottom: usize) {
        let top = top.min(self.lines - 1);
        let bottom = bottom.min(self.lines - 1);

        if top + 1 >= bottom {
            return;
        }

        self.scroll_region = top..bottom + 1;
        self.cursor.set_line(0);
        self.cursor.set_col(Column(0));
    }

    /// Scroll the scroll region up by `count` lines.
    ///
    /// The top `count` rows of the region are lost; blank rows appear
    /// at the bottom of the region. Rows outside are preserved.
    pub fn scroll_region_up(&mut self, count: usize) {
        let top = self.scroll_region.start;
        let bottom = self.scroll_region.end;
        let count = count.min(bottom - top);
        if count == 0 {
            return;
        }

        self.rows[top..bottom].rotate_left(count);
        for row in &mut self.rows[bottom - count..bottom] {
            row.reset(&Cell::default());
        }
        self.dirty.mark_all();
    }

    /// Scroll the scroll region down by `count` lines.
    ///
    /// The bottom `count` rows of the region are lost; blank rows
    /// appear at the top of the region.
    pub fn scroll_region_down(&mut self, count: usize) {
        let top = self.scroll_region.start;
        let bottom = self.scroll_region.end;
        let count = count.min(bottom - top);
        if count == 0 {
            return;
        }

        self.rows[top..bottom].rotate_right(count);
        for row in &mut self.rows[top..top + count] {
            row.reset(&Cell::default());
        }
        self.dirty.mark_all();
    }

    /// Insert `count` blank lines at the cursor, pushing lines below it
    /// toward the bottom of the scroll region, where they fall off.
    pub fn insert_lines(&mut self, count: usize) {
        let line = self.cursor.line();
        let bottom = self.scroll_region.end;
        if line >= bottom {
            return;
        }

        let count = count.min(bottom - line);
        if count == 0 {
            return;
        }

        self.rows[line..bottom].rotate_right(count);
        for row in &mut self.rows[line..line + count] {
            row.reset(&Cell::default());
        }
        self.dirty.mark_all();
    }
}
