//! Lens optics for viewing and rebuilding a part of a larger immutable value.
//!
//! A lens pairs an *accessor*, which reads a part out of a whole, with a
//! *replacer*, which builds a new whole from a new part and the old whole.
//! The general form `Lens<S, T, A, B>` is type-changing: reading yields an `A`
//! out of an `S`, and writing a `B` yields a `T`.
//!
//! # Laws
//!
//! A well-behaved lens (with `S = T` and `A = B`) satisfies:
//!
//! 1. **GetPut Law**: Writing back what was read changes nothing.
//!    ```text
//!    lens.set(lens.view(&source), &source) == source
//!    ```
//!
//! 2. **PutGet Law**: Reading back what was written yields it.
//!    ```text
//!    lens.view(&lens.set(value, &source)) == value
//!    ```
//!
//! 3. **PutPut Law**: Only the last write survives.
//!    ```text
//!    lens.set(v2, &lens.set(v1, &source)) == lens.set(v2, &source)
//!    ```
//!
//! The laws are not checked at runtime; they hold when the supplied functions
//! are pure.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Lens, lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens(
//!     |point: &Point| point.x,
//!     |x, point: &Point| Point { x, ..point.clone() },
//! );
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.view(&point), 10);
//!
//! let moved = x_lens.over(|x| x + 5, &point);
//! assert_eq!(moved, Point { x: 15, y: 20 });
//! assert_eq!(point, Point { x: 10, y: 20 });
//! ```

use std::marker::PhantomData;

/// A Lens focuses on a single part within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole being read)
/// - `T`: The type of the rebuilt whole
/// - `A`: The part read out of `S`
/// - `B`: The part written to produce `T`
///
/// Implementations never mutate the source: every operation borrows it and
/// returns a fresh value.
pub trait Lens<S, T, A, B> {
    /// Reads the focused part out of `source`.
    ///
    /// # Arguments
    ///
    /// * `source` - The whole structure
    ///
    /// # Returns
    ///
    /// The focused part
    fn view(&self, source: &S) -> A;

    /// Builds a new whole with the focused part replaced by `value`.
    ///
    /// The accessor is never evaluated by this method.
    ///
    /// # Arguments
    ///
    /// * `value` - The new part
    /// * `source` - The old whole (left untouched)
    ///
    /// # Returns
    ///
    /// A new whole holding `value`
    fn set(&self, value: B, source: &S) -> T;

    /// Builds a new whole with the focused part passed through `mapper`.
    ///
    /// Equivalent to `self.set(mapper(self.view(source)), source)`. A panic
    /// raised by the mapper, the accessor or the replacer propagates as is.
    ///
    /// # Example
    ///
    /// ```
    /// use lenskit::optics::{Lens, lens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Counter { hits: u32, label: String }
    ///
    /// let hits = lens(
    ///     |counter: &Counter| counter.hits,
    ///     |hits, counter: &Counter| Counter { hits, ..counter.clone() },
    /// );
    ///
    /// let counter = Counter { hits: 2, label: "home".to_string() };
    /// assert_eq!(hits.over(|n| n * 10, &counter).hits, 20);
    /// ```
    fn over<M>(&self, mapper: M, source: &S) -> T
    where
        M: FnOnce(A) -> B,
    {
        self.set(mapper(self.view(source)), source)
    }

    /// Like [`Lens::over`], but the mapper only borrows the viewed part.
    fn over_ref<M>(&self, mapper: M, source: &S) -> T
    where
        M: FnOnce(&A) -> B,
    {
        let current = self.view(source);
        self.set(mapper(&current), source)
    }

    /// Runs `next` after this lens, forming a lens into a nested part.
    ///
    /// Viewing drills from the outer structure to the inner part; setting
    /// rebuilds the inner structure first and then the outer one.
    ///
    /// # Type Parameters
    ///
    /// - `C`: The part read by `next`
    /// - `D`: The part written through `next`
    /// - `L`: The type of `next`
    ///
    /// # Example
    ///
    /// ```
    /// use lenskit::optics::{Lens, lens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let address = lens(
    ///     |person: &Person| person.address.clone(),
    ///     |address, person: &Person| Person { address, ..person.clone() },
    /// );
    /// let street = lens(
    ///     |address: &Address| address.street.clone(),
    ///     |street, address: &Address| Address { street, ..address.clone() },
    /// );
    /// let person_street = address.and_then(street);
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
    /// };
    ///
    /// assert_eq!(person_street.view(&person), "Main St");
    /// let moved = person_street.set("Oak Ave".to_string(), &person);
    /// assert_eq!(moved.address.street, "Oak Ave");
    /// assert_eq!(moved.address.city, "Tokyo");
    /// ```
    fn and_then<C, D, L>(self, next: L) -> ComposedLens<Self, L, A, B>
    where
        Self: Sized,
        L: Lens<A, B, C, D>,
    {
        ComposedLens::new(self, next)
    }
}

/// A lens built from an accessor and a replacer function.
///
/// This is the most common way to create a lens.
///
/// # Type Parameters
///
/// - `S`, `T`, `A`, `B`: As in [`Lens`]
/// - `G`: The accessor type, `Fn(&S) -> A`
/// - `R`: The replacer type, `Fn(B, &S) -> T`
///
/// The type parameters are carried through a function-pointer marker, so a
/// `FunctionLens` is `Send`/`Sync` whenever its two functions are.
///
/// # Example
///
/// ```
/// use lenskit::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Pair { left: i32, right: i32 }
///
/// // Type-changing: writing a String turns Pair into (String, i32).
/// let left = FunctionLens::new(
///     |pair: &Pair| pair.left,
///     |label: String, pair: &Pair| (label, pair.right),
/// );
///
/// let pair = Pair { left: 1, right: 2 };
/// assert_eq!(left.view(&pair), 1);
/// assert_eq!(left.over(|n| format!("#{n}"), &pair), ("#1".to_string(), 2));
/// ```
pub struct FunctionLens<S, T, A, B, G, R> {
    accessor: G,
    replacer: R,
    _marker: PhantomData<fn(&S, B) -> (A, T)>,
}

impl<S, T, A, B, G, R> FunctionLens<S, T, A, B, G, R>
where
    G: Fn(&S) -> A,
    R: Fn(B, &S) -> T,
{
    /// Creates a new `FunctionLens` from an accessor and a replacer.
    ///
    /// # Arguments
    ///
    /// * `accessor` - Reads the focused part out of the whole
    /// * `replacer` - Builds a new whole from a new part and the old whole
    ///
    /// # Returns
    ///
    /// A new `FunctionLens`
    #[must_use]
    pub const fn new(accessor: G, replacer: R) -> Self {
        Self {
            accessor,
            replacer,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, R> FunctionLens<S, T, A, B, G, R> {
    /// Splits the lens back into its accessor and replacer.
    pub fn into_parts(self) -> (G, R) {
        (self.accessor, self.replacer)
    }
}

impl<S, T, A, B, G, R> Lens<S, T, A, B> for FunctionLens<S, T, A, B, G, R>
where
    G: Fn(&S) -> A,
    R: Fn(B, &S) -> T,
{
    fn view(&self, source: &S) -> A {
        (self.accessor)(source)
    }

    fn set(&self, value: B, source: &S) -> T {
        (self.replacer)(value, source)
    }
}

impl<S, T, A, B, G: Clone, R: Clone> Clone for FunctionLens<S, T, A, B, G, R> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            replacer: self.replacer.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G: Copy, R: Copy> Copy for FunctionLens<S, T, A, B, G, R> {}

impl<S, T, A, B, G, R> std::fmt::Debug for FunctionLens<S, T, A, B, G, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Creates a [`FunctionLens`] from an accessor and a replacer.
///
/// Shorthand for [`FunctionLens::new`].
///
/// ```
/// use lenskit::optics::{Lens, lens};
///
/// let first = lens(|pair: &(i32, char)| pair.0, |n, pair: &(i32, char)| (n, pair.1));
/// assert_eq!(first.set(7, &(1, 'a')), (7, 'a'));
/// ```
#[must_use]
pub const fn lens<S, T, A, B, G, R>(accessor: G, replacer: R) -> FunctionLens<S, T, A, B, G, R>
where
    G: Fn(&S) -> A,
    R: Fn(B, &S) -> T,
{
    FunctionLens::new(accessor, replacer)
}

/// The accessor/replacer pair of the identity lens.
pub type IdentityLens<S> = FunctionLens<S, S, S, S, fn(&S) -> S, fn(S, &S) -> S>;

fn replace_whole<S>(value: S, _source: &S) -> S {
    value
}

/// Creates the lens that focuses on the whole value.
///
/// Viewing clones the source and setting returns the new value. Composing it
/// on either side of another lens leaves that lens's behavior unchanged.
///
/// ```
/// use lenskit::optics::{Lens, identity};
///
/// let whole = identity::<String>();
/// assert_eq!(whole.view(&"abc".to_string()), "abc");
/// assert_eq!(whole.set("xyz".to_string(), &"abc".to_string()), "xyz");
/// ```
#[must_use]
pub fn identity<S: Clone>() -> IdentityLens<S> {
    FunctionLens::new(S::clone as fn(&S) -> S, replace_whole::<S> as fn(S, &S) -> S)
}

/// A lens composed of two lenses.
///
/// `first` focuses on an intermediate part of type `A` (rebuilt from a `B`),
/// and `second` focuses on a part within that intermediate value.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate part read by the outer lens
/// - `B`: The intermediate part written through the outer lens
pub struct ComposedLens<L1, L2, A, B> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn(A) -> B>,
}

impl<L1, L2, A, B> ComposedLens<L1, L2, A, B> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer lens (focuses on the intermediate structure)
    /// * `second` - The inner lens (focuses on the final part)
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }

    /// The outer lens.
    pub const fn first(&self) -> &L1 {
        &self.first
    }

    /// The inner lens.
    pub const fn second(&self) -> &L2 {
        &self.second
    }

    /// Splits the composite back into its outer and inner lenses.
    pub fn into_parts(self) -> (L1, L2) {
        (self.first, self.second)
    }
}

impl<S, T, A, B, C, D, L1, L2> Lens<S, T, C, D> for ComposedLens<L1, L2, A, B>
where
    L1: Lens<S, T, A, B>,
    L2: Lens<A, B, C, D>,
{
    fn view(&self, source: &S) -> C {
        let intermediate = self.first.view(source);
        self.second.view(&intermediate)
    }

    fn set(&self, value: D, source: &S) -> T {
        let intermediate = self.first.view(source);
        let rebuilt = self.second.set(value, &intermediate);
        self.first.set(rebuilt, source)
    }
}

impl<L1: Clone, L2: Clone, A, B> Clone for ComposedLens<L1, L2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: Copy, L2: Copy, A, B> Copy for ComposedLens<L1, L2, A, B> {}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A, B> std::fmt::Debug
    for ComposedLens<L1, L2, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

type RcLens = FunctionLens<
    std::rc::Rc<i32>,
    std::rc::Rc<i32>,
    std::rc::Rc<i32>,
    std::rc::Rc<i32>,
    fn(&std::rc::Rc<i32>) -> std::rc::Rc<i32>,
    fn(std::rc::Rc<i32>, &std::rc::Rc<i32>) -> std::rc::Rc<i32>,
>;

// The focused types never leak into the auto traits.
static_assertions::assert_impl_all!(RcLens: Send, Sync, Copy);
static_assertions::assert_impl_all!(ComposedLens<RcLens, RcLens, std::rc::Rc<i32>, std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_impl_all!(IdentityLens<String>: Send, Sync, Copy);
