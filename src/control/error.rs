//! Error types for the control structures.

use super::either::Side;

/// Represents a failed attempt to unwrap an [`Either`](super::Either).
///
/// Returned by [`Either::try_from_left`](super::Either::try_from_left) and
/// [`Either::try_from_right`](super::Either::try_from_right); the panicking
/// unwraps use its message.
///
/// # Examples
///
/// ```rust
/// use lenskit::control::{EitherError, Side};
///
/// let error = EitherError::VariantMismatch {
///     expected: Side::Left,
///     found: Side::Right,
/// };
/// assert_eq!(
///     error.to_string(),
///     "type mismatch: expected a Left value but found a Right"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EitherError {
    /// The value held the other variant.
    #[error("type mismatch: expected a {expected} value but found a {found}")]
    VariantMismatch {
        /// The variant the caller asked for.
        expected: Side,
        /// The variant actually present.
        found: Side,
    },
}

impl EitherError {
    pub(crate) const fn mismatch(expected: Side) -> Self {
        Self::VariantMismatch {
            expected,
            found: expected.opposite(),
        }
    }

    /// The variant the caller asked for.
    pub const fn expected(&self) -> Side {
        match self {
            Self::VariantMismatch { expected, .. } => *expected,
        }
    }

    /// The variant actually present.
    pub const fn found(&self) -> Side {
        match self {
            Self::VariantMismatch { found, .. } => *found,
        }
    }
}
