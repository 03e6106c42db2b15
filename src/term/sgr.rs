//! Select Graphic Rendition: the `CSI … m` attribute decoder.
//!
//! Parameters are consumed left to right; 38 and 48 pull their
//! extended-color arguments from the same vector. Unknown parameters
//! are skipped without complaint.
//!
//! Reverse video here is stateless: SGR 7 and 27 each swap the pen's
//! foreground and background instead of tracking a reverse attribute.

use std::mem;

use crate::cell::{Cell, CellFlags};
use crate::color::{
    BRIGHT_COLORS, DEFAULT_BG, DEFAULT_FG, NORMAL_COLORS, Rgb, indexed_color,
};

use super::Term;

/// Decode one extended-color subform (following a 38 or 48).
///
/// Returns the resolved color (if any) and how many parameters were
/// consumed beyond the introducer. An unknown subtype consumes only
/// itself; missing arguments consume whatever is left and change
/// nothing.
fn extended_color(rest: &[usize]) -> (Option<Rgb>, usize) {
    match rest.first() {
        // 256-color: 38;5;n.
        Some(5) => match rest.get(1) {
            Some(&n) => (Some(indexed_color(n.min(255) as u8)), 2),
            None => (None, rest.len()),
        },
        // Truecolor: 38;2;r;g;b.
        Some(2) => {
            if rest.len() >= 4 {
                let r = rest[1].min(255) as u8;
                let g = rest[2].min(255) as u8;
                let b = rest[3].min(255) as u8;
                (Some(Rgb::new(r, g, b)), 4)
            } else {
                (None, rest.len())
            }
        }
        Some(_) => (None, 1),
        None => (None, 0),
    }
}

impl<T> Term<T> {
    /// Apply an SGR parameter vector to the pen.
    pub(super) fn sgr(&mut self, params: &[usize]) {
        let pen = &mut self.grid.cursor_mut().template;

        let mut i = 0;
        while i < params.len() {
            let param = params[i];
            i += 1;

            match param {
                0 => *pen = Cell::default(),
                1 => pen.flags.insert(CellFlags::BOLD),
                3 => pen.flags.insert(CellFlags::ITALIC),
                4 => pen.flags.insert(CellFlags::UNDERLINE),
                7 | 27 => mem::swap(&mut pen.fg, &mut pen.bg),
                9 => pen.flags.insert(CellFlags::STRIKETHROUGH),
                21 | 22 => pen.flags.remove(CellFlags::BOLD),
                23 => pen.flags.remove(CellFlags::ITALIC),
                24 => pen.flags.remove(CellFlags::UNDERLINE),
                29 => pen.flags.remove(CellFlags::STRIKETHROUGH),
                30..=37 => pen.fg = NORMAL_COLORS[param - 30],
                38 => {
                    let (color, consumed) = extended_color(&params[i..]);
                    if let Some(color) = color {
                        pen.fg = color;
                    }
                    i += consumed;
                }
                39 => pen.fg = DEFAULT_FG,
                40..=47 => pen.bg = NORMAL_COLORS[param - 40],
                48 => {
                    let (color, consumed) = extended_color(&params[i..]);
                    if let Some(color) = color {
                        pen.bg = color;
                    }
                    i += consumed;
                }
                49 => pen.bg = DEFAULT_BG,
                90..=97 => pen.fg = BRIGHT_COLORS[param - 90],
                100..=107 => pen.bg = BRIGHT_COLORS[param - 100],
                // 2 and 5 (faint/blink) and 50–74 are reserved; skipped
                // like every other unrecognized parameter.
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cell::{Cell, CellFlags};
    use crate::color::{BRIGHT_COLORS, DEFAULT_BG, DEFAULT_FG, NORMAL_COLORS, Rgb};
    use crate::event::VoidListener;
    use crate::term::Term;

    fn make_term() -> Term<VoidListener> {
        Term::new(24, 80, VoidListener)
    }

    fn pen(term: &Term<VoidListener>) -> Cell {
        term.grid().cursor().template
    }

    #[test]
    fn reset_restores_default_pen() {
        let mut term = make_term();
        term.sgr(&[1, 31, 44]);
        assert_ne!(pen(&term), Cell::default());
        term.sgr(&[0]);
        assert_eq!(pen(&term), Cell::default());
    }

    #[test]
    fn reset_is_idempotent_from_any_state() {
        let mut term = make_term();
        term.sgr(&[7, 9, 4, 38, 5, 200]);
        term.sgr(&[0]);
        let first = pen(&term);
        term.sgr(&[0]);
        assert_eq!(pen(&term), first);
        assert_eq!(first, Cell::default());
    }

    #[test]
    fn attribute_set_and_clear_pairs() {
        let mut term = make_term();
        term.sgr(&[1, 3, 4, 9]);
        let flags = pen(&term).flags;
        assert!(flags.contains(
            CellFlags::BOLD | CellFlags::ITALIC | CellFlags::UNDERLINE | CellFlags::STRIKETHROUGH
        ));

        term.sgr(&[22, 23, 24, 29]);
        assert!(pen(&term).flags.is_empty());
    }

    #[test]
    fn bold_clears_via_21_as_well() {
        let mut term = make_term();
        term.sgr(&[1]);
        term.sgr(&[21]);
        assert!(!pen(&term).flags.contains(CellFlags::BOLD));
    }

    #[test]
    fn palette_colors() {
        let mut term = make_term();
        term.sgr(&[31]);
        assert_eq!(pen(&term).fg, NORMAL_COLORS[1]);
        term.sgr(&[44]);
        assert_eq!(pen(&term).bg, NORMAL_COLORS[4]);
        term.sgr(&[97]);
        assert_eq!(pen(&term).fg, BRIGHT_COLORS[7]);
        term.sgr(&[100]);
        assert_eq!(pen(&term).bg, BRIGHT_COLORS[0]);
    }

    #[test]
    fn default_color_restores() {
        let mut term = make_term();
        term.sgr(&[31, 44]);
        term.sgr(&[39, 49]);
        assert_eq!(pen(&term).fg, DEFAULT_FG);
        assert_eq!(pen(&term).bg, DEFAULT_BG);
    }

    #[test]
    fn reverse_swaps_and_27_swaps_back() {
        let mut term = make_term();
        term.sgr(&[31]);
        term.sgr(&[7]);
        assert_eq!(pen(&term).fg, DEFAULT_BG);
        assert_eq!(pen(&term).bg, NORMAL_COLORS[1]);
        term.sgr(&[27]);
        assert_eq!(pen(&term).fg, NORMAL_COLORS[1]);
        assert_eq!(pen(&term).bg, DEFAULT_BG);
    }

    #[test]
    fn indexed_color_low_maps_to_palettes() {
        let mut term = make_term();
        term.sgr(&[38, 5, 3]);
        assert_eq!(pen(&term).fg, NORMAL_COLORS[3]);
        term.sgr(&[48, 5, 12]);
        assert_eq!(pen(&term).bg, BRIGHT_COLORS[4]);
    }

    #[test]
    fn indexed_color_cube_and_gray() {
        let mut term = make_term();
        term.sgr(&[38, 5, 196]);
        assert_eq!(pen(&term).fg, Rgb::new(255, 0, 0));
        term.sgr(&[48, 5, 232]);
        assert_eq!(pen(&term).bg, Rgb::new(8, 8, 8));
    }

    #[test]
    fn indexed_color_out_of_range_clamps() {
        let mut term = make_term();
        term.sgr(&[38, 5, 9999]);
        assert_eq!(pen(&term).fg, Rgb::new(238, 238, 238));
    }

    #[test]
    fn truecolor() {
        let mut term = make_term();
        term.sgr(&[38, 2, 18, 52, 86]);
        assert_eq!(pen(&term).fg, Rgb::new(18, 52, 86));
        term.sgr(&[48, 2, 300, 0, 300]);
        assert_eq!(pen(&term).bg, Rgb::new(255, 0, 255));
    }

    #[test]
    fn extended_color_params_continue_after_consumption() {
        let mut term = make_term();
        // The bold parameter after the truecolor subform still applies.
        term.sgr(&[38, 2, 1, 2, 3, 1]);
        assert_eq!(pen(&term).fg, Rgb::new(1, 2, 3));
        assert!(pen(&term).flags.contains(CellFlags::BOLD));
    }

    #[test]
    fn truncated_extended_color_changes_nothing() {
        let mut term = make_term();
        term.sgr(&[38, 5]);
        assert_eq!(pen(&term).fg, DEFAULT_FG);
        term.sgr(&[48, 2, 10, 20]);
        assert_eq!(pen(&term).bg, DEFAULT_BG);
    }

    #[test]
    fn unknown_extended_subtype_changes_nothing() {
        let mut term = make_term();
        term.sgr(&[38, 9, 31]);
        // Subtype 9 is unknown; the trailing 31 is then an ordinary
        // parameter and sets the foreground.
        assert_eq!(pen(&term).fg, NORMAL_COLORS[1]);
    }

    #[test]
    fn reserved_parameters_are_inert() {
        let mut term = make_term();
        let before = pen(&term);
        term.sgr(&[2, 5, 50, 64, 74]);
        assert_eq!(pen(&term), before);
    }

    #[test]
    fn unknown_parameters_are_skipped() {
        let mut term = make_term();
        term.sgr(&[99, 31, 12345]);
        assert_eq!(pen(&term).fg, NORMAL_COLORS[1]);
    }
}
