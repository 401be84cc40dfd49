use thiserror::Error;

/// Error returned when a position argument does not address a slot inside
/// the buffer's live range.
///
/// Mutating operations that take a caller-supplied position (`insert`,
/// `remove`, `erase`) report this instead of clamping the position or
/// panicking; the buffer is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for ring deque of length {len}")]
pub struct OutOfBounds {
    /// The offending logical index.
    pub index: usize,
    /// The buffer length at the time of the call.
    pub len: usize,
}
