//! Full-buffer push behavior, chosen through the container's type parameter.
//!
//! Every operation other than `push_back`/`push_front` is shared verbatim
//! between the two policies.

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for the two push policies. Sealed: the set of policies is
/// fixed by this crate.
pub trait Policy: sealed::Sealed + 'static {}

/// Geometric growth: a push on a full buffer first doubles the capacity
/// (minimum 1) by moving the elements into fresh storage, then stores the
/// new element. Never drops data.
#[derive(Debug, Clone, Copy)]
pub enum Grow {}

/// Fixed capacity: a push on a full buffer stores the new element and hands
/// the displaced oldest element from the opposite end back to the caller.
/// A push on a zero-capacity buffer returns the value itself untouched.
#[derive(Debug, Clone, Copy)]
pub enum Overwrite {}

impl sealed::Sealed for Grow {}
impl Policy for Grow {}

impl sealed::Sealed for Overwrite {}
impl Policy for Overwrite {}
