//! Control structures for functional programming.
//!
//! This module provides:
//!
//! - [`Either`]: A computation result that is either a failure (`Left`) or a
//!   success (`Right`), with short-circuiting combinators
//! - [`Side`]: The variant tag of an [`Either`]
//! - [`EitherError`]: The typed failure of a non-panicking unwrap
//!
//! # Examples
//!
//! ```rust
//! use lenskit::control::Either;
//!
//! let config_port: Either<String, u16> = Either::Left("PORT unset".to_string());
//!
//! let port = config_port
//!     .lazy_or(|| Either::pure(8080))
//!     .map(|port| port + 1);
//!
//! assert_eq!(port, Either::Right(8081));
//! ```

mod either;
mod error;

pub use either::Either;
pub use either::Side;
pub use error::EitherError;
