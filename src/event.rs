//! Collaborator interfaces at the edge of the core.
//!
//! The core owns no I/O. Reply bytes produced by query sequences (DA,
//! DSR) and resize notifications flow outward through these traits —
//! tests use `VoidListener`, the real host forwards to the PTY
//! transport.

/// Receives bytes the terminal wants sent back to the PTY.
///
/// This is the same channel the keyboard input rides on; DA and DSR
/// replies are injected into it rather than written to the transport
/// directly.
pub trait KeyboardOutput {
    /// Forward reply bytes to the PTY. Default: no-op.
    fn send(&mut self, _bytes: &[u8]) {}
}

/// Notified at the end of every resize so the transport can inform the
/// PTY of the new dimensions.
pub trait ResizeNotifier {
    /// Handle a completed resize. Default: no-op.
    fn notify(&mut self, _lines: usize, _cols: usize) {}
}

/// No-op listener for tests and headless operation.
pub struct VoidListener;

impl KeyboardOutput for VoidListener {}

impl ResizeNotifier for VoidListener {}
