//! CSI parameter parsing and dispatch.
//!
//! The accumulated parameter buffer is parsed once the final byte
//! arrives. Fields are separated by `;`; an empty field is 0; any other
//! byte makes the whole sequence malformed and it is dropped. Commands
//! that receive more parameters than they document are dropped too.

use log::debug;

use crate::event::KeyboardOutput;
use crate::grid::EraseMode;
use crate::index::Column;

use super::Term;

/// Parse the parameter buffer into a numeric list.
///
/// Always yields at least one element: an empty buffer is `[0]` and a
/// trailing `;` contributes a trailing 0. Returns `None` when any
/// non-numeric, non-separator byte is present.
fn parse_params(buffer: &[u8]) -> Option<Vec<usize>> {
    let mut params = Vec::new();
    let mut current = 0_usize;
    for &byte in buffer {
        match byte {
            b'0'..=b'9' => {
                current = current
                    .saturating_mul(10)
                    .saturating_add(usize::from(byte - b'0'));
            }
            b';' => {
                params.push(current);
                current = 0;
            }
            _ => return None,
        }
    }
    params.push(current);
    Some(params)
}

/// Single-argument command: 0 (or absent) means `default`; any second
/// argument drops the command.
fn one_arg(params: &[usize], default: usize) -> Option<usize> {
    if params.len() > 1 {
        return None;
    }
    let value = params[0];
    Some(if value == 0 { default } else { value })
}

/// Single-argument command that uses the raw value (0 is meaningful).
fn one_arg_raw(params: &[usize]) -> Option<usize> {
    if params.len() > 1 {
        return None;
    }
    Some(params[0])
}

/// Two-argument command: each missing/zero argument takes its default.
fn two_args(params: &[usize], default_a: usize, default_b: usize) -> Option<(usize, usize)> {
    if params.len() > 2 {
        return None;
    }
    let a = params[0];
    let b = params.get(1).copied().unwrap_or(0);
    Some((
        if a == 0 { default_a } else { a },
        if b == 0 { default_b } else { b },
    ))
}

impl<T: KeyboardOutput> Term<T> {
    /// Dispatch a completed CSI sequence.
    pub(super) fn csi_dispatch(&mut self, buffer: &[u8], final_byte: u8) {
        // DA reads its private markers (`>` / `=`) straight from the
        // raw buffer; the numeric parser would reject them.
        if final_byte == b'c' {
            self.device_attributes(buffer);
            return;
        }

        let Some(params) = parse_params(buffer) else {
            debug!(
                "dropping malformed CSI sequence, final byte {:?}",
                char::from(final_byte)
            );
            return;
        };

        match final_byte {
            // ICH: insert blanks at the cursor.
            b'@' => {
                if let Some(n) = one_arg(&params, 1) {
                    self.grid.insert_blank(n);
                }
            }
            // CUU / CUD / CUF / CUB.
            b'A' => {
                if let Some(n) = one_arg(&params, 1) {
                    self.grid.move_up(n);
                }
            }
            b'B' => {
                if let Some(n) = one_arg(&params, 1) {
                    self.grid.move_down(n);
                }
            }
            b'C' => {
                if let Some(n) = one_arg(&params, 1) {
                    self.grid.move_forward(n);
                }
            }
            b'D' => {
                if let Some(n) = one_arg(&params, 1) {
                    self.grid.move_backward(n);
                }
            }
            // CNL / CPL: vertical move plus carriage return.
            b'E' => {
                if let Some(n) = one_arg(&params, 1) {
                    self.grid.move_down(n);
                    self.grid.carriage_return();
                }
            }
            b'F' => {
                if let Some(n) = one_arg(&params, 1) {
                    self.grid.move_up(n);
                    self.grid.carriage_return();
                }
            }
            // CHA: absolute column (1-based on the wire).
            b'G' => {
                if let Some(col) = one_arg(&params, 1) {
                    self.grid.move_to_column(Column(col - 1));
                }
            }
            // CUP / HVP: absolute position (1-based on the wire).
            b'H' | b'f' => {
                if let Some((row, col)) = two_args(&params, 1, 1) {
                    self.grid.move_to(row - 1, Column(col - 1));
                }
            }
            // ED: erase in display.
            b'J' => {
                if let Some(op) = one_arg_raw(&params) {
                    match op {
                        0 => self.grid.erase_display(EraseMode::Below),
                        1 => self.grid.erase_display(EraseMode::Above),
                        2 => self.grid.erase_display(EraseMode::All),
                        // Scrollback erase: reserved, nothing to clear.
                        3 => {}
                        _ => debug!("ignoring ED operation {op}"),
                    }
                }
            }
            // EL: erase in line.
            b'K' => {
                if let Some(op) = one_arg_raw(&params) {
                    match op {
                        0 => self.grid.erase_line(EraseMode::Below),
                        1 => self.grid.erase_line(EraseMode::Above),
                        2 => self.grid.erase_line(EraseMode::All),
                        _ => debug!("ignoring EL operation {op}"),
                    }
                }
            }
            // IL: insert blank lines at the cursor.
            b'L' => {
                if let Some(n) = one_arg(&params, 1) {
                    self.grid.insert_lines(n.min(self.grid.lines()));
                }
            }
            // DCH: delete characters at the cursor.
            b'P' => {
                if let Some(n) = one_arg(&params, 1) {
                    self.grid.delete_chars(n);
                }
            }
            // SU / SD: explicit region scroll. The raw value is used;
            // without an argument these scroll by zero.
            b'S' => {
                if let Some(n) = one_arg_raw(&params) {
                    self.grid.scroll_region_up(n);
                }
            }
            b'T' => {
                if let Some(n) = one_arg_raw(&params) {
                    self.grid.scroll_region_down(n);
                }
            }
            // ECH: erase forward from the cursor, wrapping lines.
            b'X' => {
                if let Some(n) = one_arg(&params, 1) {
                    self.grid.erase_chars(n);
                }
            }
            // VPA: absolute line (1-based on the wire).
            b'd' => {
                if let Some(row) = one_arg(&params, 1) {
                    self.grid.move_to_line(row - 1);
                }
            }
            b'm' => self.sgr(&params),
            // DSR: only the cursor-position report is supported.
            b'n' => {
                if params == [6] {
                    self.cursor_position_report();
                }
            }
            b'r' => self.set_scroll_region_op(&params),
            _ => debug!(
                "unimplemented CSI final byte {:?}",
                char::from(final_byte)
            ),
        }
    }

    /// DA: identify the terminal. `CSI > c` asks for secondary
    /// attributes, `CSI = c` for tertiary (ignored), bare `CSI c` for
    /// primary.
    fn device_attributes(&mut self, buffer: &[u8]) {
        match buffer.first() {
            Some(b'>') => self.reply(b"\x1b[0;0;0c"),
            Some(b'=') => {}
            _ => self.reply(b"\x1b[?1;2c"),
        }
    }

    /// DSR 6: report the cursor position, 1-based.
    ///
    /// A pending-wrap cursor reports the last column rather than one
    /// past it.
    fn cursor_position_report(&mut self) {
        let (x, y) = (self.grid.cursor().col().0, self.grid.cursor().line());
        let col = (x + 1).min(self.grid.cols());
        let report = format!("\x1b[{};{}R", y + 1, col);
        self.reply(report.as_bytes());
    }

    /// DECSTBM: set the scroll region from 1-based wire arguments.
    ///
    /// With two arguments both are 1-based; with one, it is taken as
    /// the top line directly and the region extends to the last line.
    fn set_scroll_region_op(&mut self, params: &[usize]) {
        let (top, bottom) = match params.len() {
            1 => (params[0], self.grid.lines() - 1),
            2 => (
                params[0].saturating_sub(1),
                params[1].saturating_sub(1),
            ),
            _ => return,
        };
        self.grid.set_scroll_region(top, bottom);
    }
}
