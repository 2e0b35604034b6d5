//! Our error types for the kit engine.

use thiserror::Error;

pub type Result<T, I> = core::result::Result<T, Error<I>>;

/// Failures the engine surfaces to its caller.
///
/// Protocol-level problems (bad arguments, unknown verbs) are never values
/// of this type; they travel back to the host as `ERR;...;` reply lines.
#[derive(Error, Debug)]
pub enum Error<I: embedded_io::Error> {
    #[error("Serial communication error")]
    SerialError(I),
    /// A reply did not fit the bounded output buffer. Unreachable while the
    /// line bound stays within [`MAX_REPLY_LEN`](crate::dispatch::MAX_REPLY_LEN)
    /// minus the `ERR;UNKNOWN_CMD=` framing.
    #[error("Reply buffer overflow")]
    ReplyOverflow,
}
