//! Optics for immutable data manipulation.
//!
//! This module provides lenses: composable accessor/replacer pairs that focus
//! on one part of an immutable value, read it, and rebuild the value around a
//! new part without touching the original.
//!
//! # Optics Hierarchy
//!
//! ```text
//! SimpleLens<T, F> <: Lens<T, T, F, F>
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: Type-changing view/set access to a part of a whole
//! - [`SimpleLens`]: The same-type refinement, with [`SimpleLens::and_then_simple`]
//! - [`FunctionLens`]: A lens built from an accessor and a replacer
//! - [`ComposedLens`]: Two lenses run one after the other
//!
//! # Example
//!
//! ```
//! use lenskit::optics::{Lens, lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Reading { celsius: i32, station: String }
//!
//! // Widen the field from i32 to f64 across the whole structure.
//! #[derive(Clone, PartialEq, Debug)]
//! struct PreciseReading { celsius: f64, station: String }
//!
//! let celsius = lens(
//!     |reading: &Reading| reading.celsius,
//!     |celsius: f64, reading: &Reading| PreciseReading {
//!         celsius,
//!         station: reading.station.clone(),
//!     },
//! );
//!
//! let reading = Reading { celsius: 21, station: "north".to_string() };
//! let precise = celsius.over(|c| f64::from(c) + 0.5, &reading);
//!
//! assert_eq!(precise, PreciseReading { celsius: 21.5, station: "north".to_string() });
//! ```

mod lens;
mod simple;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::IdentityLens;
pub use lens::Lens;
pub use lens::identity;
pub use lens::lens;

pub use simple::FunctionSimpleLens;
pub use simple::SimpleLens;
pub use simple::simple_lens;
