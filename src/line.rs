//! Byte-stream to command-line framing.

use heapless::Vec;

/// Assembles raw serial bytes into complete command lines.
///
/// `\r` and `\n` both terminate, and `\r\n` pairs collapse: a terminator
/// arriving while the pending buffer is empty is absorbed without emitting
/// anything, so repeated terminators never produce blank lines.
///
/// The pending buffer is bounded at `N` bytes. Input past the bound is
/// dropped, so an overlong line dispatches truncated at `N` instead of
/// growing without limit. There is no partial-line timeout: a line that is
/// never terminated never completes.
pub struct LineAssembler<const N: usize = 128> {
    pending: Vec<u8, N>,
}

impl<const N: usize> LineAssembler<N> {
    pub const fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Feed one received byte. Returns the completed line when `byte`
    /// terminates a non-empty one.
    pub fn feed(&mut self, byte: u8) -> Option<Vec<u8, N>> {
        match byte {
            b'\r' | b'\n' => {
                if self.pending.is_empty() {
                    None
                } else {
                    Some(core::mem::take(&mut self.pending))
                }
            }
            _ => {
                // Past the bound the byte is dropped; the line still
                // terminates normally.
                let _ = self.pending.push(byte);
                None
            }
        }
    }

    /// Bytes currently buffered for an unterminated line.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl<const N: usize> Default for LineAssembler<N> {
    fn default() -> Self {
        Self::new()
    }
}
