//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `bind`, which lets the value produced by
//! one step decide the wrapper returned by the next. `flat_map` and
//! `and_then` are aliases that forward to `bind`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_monad::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .bind(parse_positive)
//!     .bind(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// Implementors provide `bind`; the function passed to it already returns a
/// wrapper, and `bind` hands that wrapper back as is, never nesting it.
///
/// # Laws
///
/// ```text
/// Self::pure(a).bind(f) == f(a)
/// m.bind(Self::pure) == m
/// m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use maybe_monad::typeclass::Monad;
///
/// let x = Some(5);
/// assert_eq!(x.bind(|n| Some(n * 2)), Some(10));
///
/// let z = Some(5);
/// assert_eq!(z.bind(|n| if n > 10 { Some(n) } else { None }), None);
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a wrapper to the value inside the monad.
    ///
    /// In Haskell, this is `>>=`. An absent input returns absence without
    /// calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::typeclass::Monad;
    ///
    /// let x: Option<i32> = None;
    /// assert_eq!(x.bind(|n| Some(n * 2)), None);
    /// ```
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::bind`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// assert_eq!(Monad::flat_map(x, |n| Some(n + 1)), Some(6));
    /// ```
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.bind(function)
    }

    /// Alias for [`Monad::bind`] matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.bind(function)
    }

    /// Sequences two monadic computations, discarding the first value.
    ///
    /// If `self` is absent the absence propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.bind(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        // Delegate to Option's built-in and_then
        Self::and_then(self, function)
    }
}
