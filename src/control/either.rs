//! Either type - a computation result that is one of two values.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. By convention `Left` carries
//! a failure and `Right` carries a success, so the combinators here are
//! right-biased: they act on a `Right` and pass a `Left` through untouched.
//!
//! # Examples
//!
//! ```rust
//! use lenskit::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|_| format!("not a number: {input}"))
//!         .into()
//! }
//!
//! fn halve(value: i32) -> Either<String, i32> {
//!     if value % 2 == 0 {
//!         Either::pure(value / 2)
//!     } else {
//!         Either::to_left(format!("odd: {value}"))
//!     }
//! }
//!
//! assert_eq!(parse("84").flat_map(halve), Either::Right(42));
//! assert_eq!(parse("7").flat_map(halve), Either::Left("odd: 7".to_string()));
//! assert_eq!(parse("x").flat_map(halve), Either::Left("not a number: x".to_string()));
//! ```

use std::fmt;

use super::error::EitherError;

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` represents failure or error
/// - `Right` represents success
///
/// The variant is fixed at construction; every combinator returns a new
/// value.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use lenskit::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

/// Which variant an [`Either`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The `Left` variant.
    Left,
    /// The `Right` variant.
    Right,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => formatter.write_str("Left"),
            Self::Right => formatter.write_str("Right"),
        }
    }
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` holding `item`.
    #[inline]
    pub const fn to_left(item: L) -> Self {
        Self::Left(item)
    }

    /// Creates a `Right` holding `item`.
    #[inline]
    pub const fn to_right(item: R) -> Self {
        Self::Right(item)
    }

    /// Wraps a plain value as a success. An alias of [`Either::to_right`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenskit::control::Either;
    ///
    /// let wrapped: Either<String, i32> = Either::pure(5);
    /// assert_eq!(wrapped, Either::to_right(5));
    /// ```
    #[inline]
    pub const fn pure(item: R) -> Self {
        Self::to_right(item)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the variant tag without touching the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenskit::control::{Either, Side};
    ///
    /// let value: Either<(), u8> = Either::Right(1);
    /// assert_eq!(value.side(), Side::Right);
    /// ```
    #[inline]
    pub const fn side(&self) -> Side {
        match self {
            Self::Left(_) => Side::Left,
            Self::Right(_) => Side::Right,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with a type-mismatch message if this is a `Right` value. Use
    /// [`Either::try_from_left`] or [`Either::left`] to avoid the panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenskit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.from_left(), 42);
    /// ```
    ///
    /// ```rust,should_panic
    /// use lenskit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// right.from_left();
    /// ```
    #[inline]
    #[track_caller]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_left(self) -> L {
        match self.try_from_left() {
            Ok(value) => value,
            Err(error) => variant_mismatch(&error),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with a type-mismatch message if this is a `Left` value. Use
    /// [`Either::try_from_right`] or [`Either::right`] to avoid the panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenskit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.from_right(), "hello");
    /// ```
    #[inline]
    #[track_caller]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_right(self) -> R {
        match self.try_from_right() {
            Ok(value) => value,
            Err(error) => variant_mismatch(&error),
        }
    }

    /// Returns the left value, or a typed error if this is a `Right`.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::VariantMismatch`] when called on a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenskit::control::{Either, EitherError, Side};
    ///
    /// let right: Either<i32, &str> = Either::Right("ok");
    /// assert_eq!(
    ///     right.try_from_left(),
    ///     Err(EitherError::VariantMismatch { expected: Side::Left, found: Side::Right })
    /// );
    /// ```
    #[inline]
    pub fn try_from_left(self) -> Result<L, EitherError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(EitherError::mismatch(Side::Left)),
        }
    }

    /// Returns the right value, or a typed error if this is a `Left`.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::VariantMismatch`] when called on a `Left`.
    #[inline]
    pub fn try_from_right(self) -> Result<R, EitherError> {
        match self {
            Self::Left(_) => Err(EitherError::mismatch(Side::Right)),
            Self::Right(value) => Ok(value),
        }
    }

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the payload, keeping the variant.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Returns `self` if it is a `Right`, otherwise `other`.
    ///
    /// `other` is evaluated by the caller before the call whether or not it
    /// is used; see [`Either::lazy_or`] for the suspended form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenskit::control::Either;
    ///
    /// let primary: Either<&str, u16> = Either::Left("primary down");
    /// let fallback: Either<&str, u16> = Either::Right(8080);
    /// assert_eq!(primary.or(fallback), Either::Right(8080));
    ///
    /// let both_down: Either<&str, u16> = Either::Left("primary down");
    /// assert_eq!(both_down.or(Either::Left("fallback down")), Either::Left("fallback down"));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Left(_) => other,
            Self::Right(_) => self,
        }
    }

    /// Like [`Either::or`], but `other` is only invoked when `self` is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenskit::control::Either;
    ///
    /// let cached: Either<&str, u32> = Either::Right(7);
    /// let value = cached.lazy_or(|| unreachable!("a Right never asks for the alternative"));
    /// assert_eq!(value, Either::Right(7));
    /// ```
    #[inline]
    #[must_use]
    pub fn lazy_or<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Left(_) => other(),
            Self::Right(_) => self,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `mapper` to the right value if present.
    ///
    /// A `Left` is returned with the same payload; only its unused right type
    /// changes.
    #[inline]
    pub fn map<S, F>(self, mapper: F) -> Either<L, S>
    where
        F: FnOnce(R) -> S,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(mapper(value)),
        }
    }

    /// Sequences a fallible computation after this one.
    ///
    /// A `Right` is handed to `mapper` and its result returned as is; a
    /// `Left` short-circuits and `mapper` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenskit::control::Either;
    ///
    /// let checked_div = |n: i32| if n == 0 { Either::Left("zero") } else { Either::Right(100 / n) };
    ///
    /// assert_eq!(Either::<&str, i32>::pure(4).flat_map(checked_div), Either::Right(25));
    /// assert_eq!(Either::<&str, i32>::pure(0).flat_map(checked_div), Either::Left("zero"));
    /// ```
    #[inline]
    pub fn flat_map<S, F>(self, mapper: F) -> Either<L, S>
    where
        F: FnOnce(R) -> Either<L, S>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => mapper(value),
        }
    }

    /// Applies a function to the left value if present.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenskit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

#[cold]
#[track_caller]
fn variant_mismatch(error: &EitherError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        expected = %error.expected(),
        found = %error.found(),
        "unwrapped the wrong Either variant"
    );
    panic!("{error}")
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

static_assertions::assert_impl_all!(Either<String, Vec<u8>>: Send, Sync);
static_assertions::assert_not_impl_any!(Either<std::rc::Rc<u8>, ()>: Send, Sync);
