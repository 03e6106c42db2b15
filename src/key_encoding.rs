//! Key event encoding for terminal input.
//!
//! The input collaborator translates host key events into the bytes a
//! shell expects on its PTY. This is the outbound half of the terminal
//! contract; it never touches the grid. Only the legacy xterm encoding
//! is spoken — no application cursor keys, no keypad modes.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifiers for key events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0001;
        const ALT     = 0b0010;
        const CONTROL = 0b0100;
        const SUPER   = 0b1000;
    }
}

/// A host key event, framework-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character key.
    Char(char),
    Enter,
    Tab,
    Backspace,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowRight,
    ArrowLeft,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    /// Function key F1–F12.
    F(u8),
}

/// Letter terminator for `CSI {letter}` keys.
fn letter_key(key: Key) -> Option<u8> {
    Some(match key {
        Key::ArrowUp => b'A',
        Key::ArrowDown => b'B',
        Key::ArrowRight => b'C',
        Key::ArrowLeft => b'D',
        Key::Home => b'H',
        Key::End => b'F',
        _ => return None,
    })
}

/// Sequence number for `CSI {num} ~` keys.
fn tilde_key(key: Key) -> Option<u8> {
    Some(match key {
        Key::Insert => 2,
        Key::Delete => 3,
        Key::PageUp => 5,
        Key::PageDown => 6,
        Key::F(5) => 15,
        Key::F(6) => 17,
        Key::F(7) => 18,
        Key::F(8) => 19,
        Key::F(9) => 20,
        Key::F(10) => 21,
        Key::F(11) => 23,
        Key::F(12) => 24,
        _ => return None,
    })
}

/// Encode a key event into bytes to send to the PTY.
///
/// Returns an empty `Vec` if the key produces no output.
pub fn encode_key(key: Key, mods: Modifiers) -> Vec<u8> {
    if let Some(term) = letter_key(key) {
        return vec![0x1B, b'[', term];
    }

    if let Some(num) = tilde_key(key) {
        return format!("\x1b[{num}~").into_bytes();
    }

    match key {
        Key::Enter => vec![b'\r'],
        Key::Tab => vec![b'\t'],
        Key::Backspace => vec![0x7F],
        Key::Escape => vec![0x1B],
        // F1–F4 are SS3 sequences.
        Key::F(n @ 1..=4) => vec![0x1B, b'O', b'P' + (n - 1)],
        Key::F(_) => Vec::new(),
        Key::Char(ch) => encode_char(ch, mods),
        _ => Vec::new(),
    }
}

/// Encode a character key, mapping Ctrl+letter to its C0 control byte.
fn encode_char(ch: char, mods: Modifiers) -> Vec<u8> {
    if mods.contains(Modifiers::CONTROL) && ch.is_ascii_alphabetic() {
        return vec![ch.to_ascii_uppercase() as u8 - b'A' + 1];
    }

    let mut buf = [0_u8; 4];
    ch.encode_utf8(&mut buf).as_bytes().to_vec()
}
