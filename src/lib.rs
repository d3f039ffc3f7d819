//! # lenskit
//!
//! Composable lenses and a short-circuiting `Either` type for working with
//! immutable data in Rust.
//!
//! ## Overview
//!
//! - **Optics**: [`Lens`](optics::Lens) for type-changing view/set access to a
//!   part of a whole, [`SimpleLens`](optics::SimpleLens) for the same-type
//!   case, and composition of both
//! - **Control Structures**: [`Either`](control::Either), a success/failure
//!   sum type with `or`, `lazy_or`, `map` and `flat_map`
//!
//! Nothing in this crate mutates its inputs: every operation borrows or
//! consumes values and returns fresh ones.
//!
//! ## Feature Flags
//!
//! - `optics`: Lenses
//! - `control`: `Either`
//! - `serde`: `Serialize`/`Deserialize` for `Either`
//! - `tracing`: Emit an error event before a mismatched unwrap panics
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lenskit::prelude::*;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account { owner: String, balance: i64 }
//!
//! let balance = simple_lens(
//!     |account: &Account| account.balance,
//!     |balance, account: &Account| Account { balance, ..account.clone() },
//! );
//!
//! fn withdraw(amount: i64, current: i64) -> Either<String, i64> {
//!     if amount > current {
//!         Either::to_left(format!("insufficient funds: {current} < {amount}"))
//!     } else {
//!         Either::pure(current - amount)
//!     }
//! }
//!
//! let account = Account { owner: "ada".to_string(), balance: 100 };
//!
//! let updated = withdraw(30, balance.view(&account)).map(|rest| balance.set(rest, &account));
//! assert_eq!(updated.from_right().balance, 70);
//!
//! let rejected = withdraw(300, balance.view(&account)).map(|rest| balance.set(rest, &account));
//! assert!(rejected.is_left());
//! assert_eq!(account.balance, 100);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lenskit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;
