//! Applicative type class - lifting values and combining wrappers.
//!
//! `Applicative` extends `Functor` with:
//!
//! - Lifting a plain value into the wrapper (`pure`)
//! - Combining two independent wrappers with a function (`map2`)
//! - Pairing wrappers up (`product`, `product_left`, `product_right`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_monad::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let a = Some(1);
//! let b = Some(2);
//! assert_eq!(a.map2(b, |x, y| x + y), Some(3));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// # Laws
///
/// ```text
/// pure(|x| x).apply(v) == v
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
///
/// # Examples
///
/// ```rust
/// use maybe_monad::typeclass::Applicative;
///
/// let a = Some(3);
/// let b = Some(4);
/// assert_eq!(a.map2(b, |x, y| x + y), Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::typeclass::Applicative;
    ///
    /// let x: Option<&str> = <Option<()>>::pure("lifted");
    /// assert_eq!(x, Some("lifted"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// The result is absent when either side is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b: Option<i32> = None;
    /// assert_eq!(a.map2(b, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and keeps the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_left(Some(2)), Some(1));
    /// assert_eq!(Some(1).product_left(None::<i32>), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and keeps the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_right(Some(2)), Some(2));
    /// assert_eq!(None::<i32>.product_right(Some(2)), None);
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a wrapped function to a wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}
