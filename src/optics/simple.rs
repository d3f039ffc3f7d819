//! Simple lenses: the same-type refinement of [`Lens`].
//!
//! A simple lens never changes types: the whole it rebuilds has the type of
//! the whole it reads, and the part it writes has the type of the part it
//! reads. Every `Lens<T, T, F, F>` is a `SimpleLens<T, F>`, so simple lenses
//! can be passed anywhere a general lens with matching types is accepted.
//!
//! [`SimpleLens::and_then_simple`] composes two simple lenses with only two
//! type parameters in play, and its result is again a simple lens.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Lens, SimpleLens};
//! use lenskit::simple_lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Engine { rpm: u32 }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Car { model: String, engine: Engine }
//!
//! let car_rpm = simple_lens!(Car, engine).and_then_simple(simple_lens!(Engine, rpm));
//!
//! let car = Car { model: "roadster".to_string(), engine: Engine { rpm: 800 } };
//! let revved = car_rpm.over(|rpm| rpm * 4, &car);
//!
//! assert_eq!(revved.engine.rpm, 3200);
//! assert_eq!(car.engine.rpm, 800);
//! ```

use super::lens::{ComposedLens, FunctionLens, Lens};

/// A lens whose source and target types coincide.
///
/// Implemented for every `Lens<T, T, F, F>`; it adds no behavior of its own
/// beyond the narrower composition operator.
pub trait SimpleLens<T, F>: Lens<T, T, F, F> {
    /// Runs `next` after this lens, keeping the result a simple lens.
    ///
    /// Produces the same views and updates as [`Lens::and_then`] at the
    /// matching types.
    ///
    /// # Type Parameters
    ///
    /// - `G`: The part focused by `next`
    /// - `L`: The type of `next`
    fn and_then_simple<G, L>(self, next: L) -> ComposedLens<Self, L, F, F>
    where
        Self: Sized,
        L: SimpleLens<F, G>,
    {
        ComposedLens::new(self, next)
    }
}

impl<T, F, L> SimpleLens<T, F> for L where L: Lens<T, T, F, F> {}

/// A [`FunctionLens`] that never changes types.
pub type FunctionSimpleLens<T, F, G, R> = FunctionLens<T, T, F, F, G, R>;

/// Creates a simple lens from an accessor and a replacer.
///
/// ```
/// use lenskit::optics::{Lens, simple_lens};
///
/// let seconds = simple_lens(
///     |pair: &(u32, u32)| pair.1,
///     |secs, pair: &(u32, u32)| (pair.0, secs),
/// );
/// assert_eq!(seconds.set(30, &(12, 0)), (12, 30));
/// ```
#[must_use]
pub const fn simple_lens<T, F, G, R>(accessor: G, replacer: R) -> FunctionSimpleLens<T, F, G, R>
where
    G: Fn(&T) -> F,
    R: Fn(F, &T) -> T,
{
    FunctionLens::new(accessor, replacer)
}

/// Creates a simple lens for a named struct field.
///
/// Expands to a [`simple_lens`] whose accessor clones the field and whose
/// replacer clones the struct and overwrites the field on the copy. The
/// struct must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// simple_lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use lenskit::optics::Lens;
/// use lenskit::simple_lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let y_lens = simple_lens!(Point, y);
/// let point = Point { x: 1, y: 2 };
///
/// assert_eq!(y_lens.view(&point), 2);
/// assert_eq!(y_lens.set(5, &point), Point { x: 1, y: 5 });
/// ```
#[macro_export]
macro_rules! simple_lens {
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::simple_lens(
            |source: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&source.$field),
            |value, source: &$struct_type<$($generic),+>| {
                let mut updated = ::core::clone::Clone::clone(source);
                updated.$field = value;
                updated
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::simple_lens(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |value, source: &$struct_type| {
                let mut updated = ::core::clone::Clone::clone(source);
                updated.$field = value;
                updated
            },
        )
    };
}
