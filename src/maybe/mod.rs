//! Maybe type - a value or the absence of one.
//!
//! This module provides [`Maybe<T>`], a single-slot container that is either
//! `Present(T)` or `Absent`. It lets callers compose transformations without
//! checking for absence at every step:
//!
//! - Construction with [`Maybe::of`], [`Maybe::none`] and the normalising
//!   [`Maybe::wrap`]
//! - Transformation with [`Maybe::map`], [`Maybe::map_wrap`],
//!   [`Maybe::bind`], [`Maybe::filter`] and [`Maybe::chain`]
//! - Fallbacks with [`Maybe::or_else`] and [`Maybe::or_value`]
//! - Extraction with [`Maybe::value`], which is the only fallible operation
//!
//! Every operation consumes or borrows `self` and returns a new `Maybe`;
//! presence is never changed in place.
//!
//! # Examples
//!
//! ```rust
//! use maybe_monad::maybe::Maybe;
//!
//! let result = Maybe::of(10)
//!     .map(|v| v + 5)
//!     .filter(|v| *v > 12)
//!     .or_value(0);
//! assert_eq!(result, 15);
//!
//! let missing = Maybe::<i32>::none()
//!     .map(|v| v + 5)
//!     .or_else(Maybe::of(7));
//! assert_eq!(missing.value(), Ok(7));
//! ```

mod conversion;
mod error;
mod instances;

pub use conversion::{Condition, IntoMaybe};
pub use error::EmptyValueError;

use std::fmt;

/// A value of type `T`, or the absence of one.
///
/// `Absent` orders before any `Present` value, matching `Option`.
///
/// # Examples
///
/// ```rust
/// use maybe_monad::maybe::Maybe;
///
/// let present = Maybe::of(42);
/// let absent: Maybe<i32> = Maybe::none();
///
/// assert!(present.has_value());
/// assert!(absent.is_none());
/// assert!(absent < present);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value is held.
    Absent,
    /// A value is held.
    Present(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value. The result always holds `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(10).value(), Ok(10));
    ///
    /// // An `Option` is stored as a value; use `wrap` to normalise it.
    /// assert!(Maybe::of(None::<i32>).has_value());
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns an empty `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// let empty: Maybe<i32> = Maybe::none();
    /// assert!(empty.is_none());
    /// assert_eq!(empty, Maybe::wrap(None));
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Normalises anything that converts into a `Maybe`.
    ///
    /// A `Maybe` is returned unchanged, so wrapping twice is the same as
    /// wrapping once. An `Option` maps `None` to absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(Maybe::of(3)), Maybe::of(3));
    /// assert_eq!(Maybe::wrap(Some(3)), Maybe::of(3));
    /// assert!(Maybe::<i32>::wrap(None).is_none());
    /// ```
    #[inline]
    pub fn wrap<M>(value: M) -> Self
    where
        M: IntoMaybe<Value = T>,
    {
        value.into_maybe()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if a value is held.
    ///
    /// Always the opposite of [`Maybe::is_none`].
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Alias for [`Maybe::has_value`].
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.has_value()
    }

    /// Alias for [`Maybe::is_none`].
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        self.is_none()
    }

    /// Borrows the held value, producing a `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// let text = Maybe::of(String::from("abc"));
    /// assert_eq!(text.as_ref().map(|s| s.len()), Maybe::of(3));
    /// assert!(text.has_value());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns an iterator over the held value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().or_null().into_iter()
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the held value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if no value is held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(10).value(), Ok(10));
    /// assert!(Maybe::<i32>::none().value().is_err());
    /// ```
    #[inline]
    pub fn value(self) -> Result<T, EmptyValueError> {
        self.take("value")
    }

    /// Alias for [`Maybe::value`].
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if no value is held.
    #[inline]
    pub fn some(self) -> Result<T, EmptyValueError> {
        self.take("some")
    }

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if no value is held.
    #[inline]
    pub const fn value_ref(&self) -> Result<&T, EmptyValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(EmptyValueError::new("value_ref")),
        }
    }

    fn take(self, method_name: &'static str) -> Result<T, EmptyValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(EmptyValueError::new(method_name)),
        }
    }

    /// Returns the held value as an `Option`. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(10).or_null(), Some(10));
    /// assert_eq!(Maybe::<i32>::none().or_null(), None);
    /// ```
    #[inline]
    pub fn or_null(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns the held value, or `other` when absent.
    ///
    /// Equivalent to `or_else(Maybe::of(other))` unwrapped, which cannot fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(10).or_value(15), 10);
    /// assert_eq!(Maybe::none().or_value(15), 15);
    /// ```
    #[inline]
    pub fn or_value(self, other: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => other,
        }
    }

    /// Alias for [`Maybe::or_value`].
    #[inline]
    pub fn or_some(self, other: T) -> T {
        self.or_value(other)
    }

    /// Returns the held value, or computes one when absent.
    #[inline]
    pub fn or_value_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns `self` if a value is held, otherwise `other` normalised
    /// through [`Maybe::wrap`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::none().or_else(Maybe::of(10)).value(), Ok(10));
    /// assert_eq!(Maybe::of(15).or_else(Maybe::of(10)).value(), Ok(15));
    /// assert_eq!(Maybe::none().or_else(Some(4)), Maybe::of(4));
    /// ```
    #[inline]
    pub fn or_else<M>(self, other: M) -> Self
    where
        M: IntoMaybe<Value = T>,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => other.into_maybe(),
        }
    }

    /// Lazy form of [`Maybe::or_else`]; `fallback` only runs when absent.
    #[inline]
    pub fn or_else_with<M, F>(self, fallback: F) -> Self
    where
        M: IntoMaybe<Value = T>,
        F: FnOnce() -> M,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => fallback().into_maybe(),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Applies `transform` to the held value; absence stays absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(10).map(|v| v + 5), Maybe::of(15));
    /// assert!(Maybe::<i32>::none().map(|v| v + 5).is_none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(transform(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies `transform` and normalises its result through [`Maybe::wrap`].
    ///
    /// A transform returning `None` collapses the result to absence, and a
    /// transform returning a `Maybe` is not wrapped a second time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert!(Maybe::of(10).map_wrap(|_| None::<i32>).is_none());
    /// assert_eq!(Maybe::of(10).map_wrap(|v| Some(v * 2)), Maybe::of(20));
    /// assert_eq!(Maybe::of(10).map_wrap(|v| Maybe::of(v - 1)), Maybe::of(9));
    /// ```
    #[inline]
    pub fn map_wrap<M, F>(self, transform: F) -> Maybe<M::Value>
    where
        M: IntoMaybe,
        F: FnOnce(T) -> M,
    {
        match self {
            Self::Present(value) => transform(value).into_maybe(),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a transform that itself returns a `Maybe`, without nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(10).bind(|_| Maybe::of(5)).value(), Ok(5));
    /// assert!(Maybe::<i32>::none().bind(|v| Maybe::of(v)).is_none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => transform(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Alias for [`Maybe::bind`].
    #[inline]
    pub fn flat_map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.bind(transform)
    }

    /// Keeps the held value only if `predicate` returns `true` for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(10).filter(|n| *n > 5).value(), Ok(10));
    /// assert!(Maybe::of(3).filter(|n| *n > 5).is_none());
    /// assert!(Maybe::<i32>::none().filter(|_| true).is_none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Returns an empty `Maybe` if `flag` holds, otherwise `self` unchanged.
    ///
    /// `flag` may be a `bool` or a wrapped `bool`; an absent wrapped flag
    /// does not hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert!(Maybe::of(10).or_none_if(true).is_none());
    /// assert_eq!(Maybe::of(10).or_none_if(false).value(), Ok(10));
    /// assert_eq!(Maybe::of(10).or_none_if(Maybe::<bool>::none()), Maybe::of(10));
    /// ```
    #[inline]
    pub fn or_none_if<C>(self, flag: C) -> Self
    where
        C: Condition,
    {
        if flag.holds() { Self::Absent } else { self }
    }

    /// Applies `transforms` left to right, stopping at the first absence.
    ///
    /// Each transform returns something that normalises into a `Maybe<T>`
    /// (a `Maybe` or an `Option`). Once a step yields absence the remaining
    /// transforms are not called. The result equals folding
    /// [`Maybe::map_wrap`] over the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// let steps: [fn(i32) -> Option<i32>; 3] = [
    ///     |v| Some(v + 5),
    ///     |v| Some(v - 10),
    ///     |v| Some(v + 100),
    /// ];
    /// assert_eq!(Maybe::of(10).chain(steps), Maybe::of(105));
    ///
    /// let broken: [fn(i32) -> Option<i32>; 3] = [|v| Some(v + 5), |_| None, |v| Some(v + 100)];
    /// assert!(Maybe::of(10).chain(broken).is_none());
    /// ```
    pub fn chain<I, M>(self, transforms: I) -> Self
    where
        I: IntoIterator,
        I::Item: FnOnce(T) -> M,
        M: IntoMaybe<Value = T>,
    {
        let Self::Present(mut value) = self else {
            return Self::Absent;
        };
        for transform in transforms {
            match transform(value).into_maybe() {
                Self::Present(next) => value = next,
                Self::Absent => return Self::Absent,
            }
        }
        Self::Present(value)
    }

    /// Eliminates the `Maybe` by handling both cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|| "none".to_string(), |v| format!("value {v}"));
    /// assert_eq!(describe(Maybe::of(3)), "value 3");
    /// assert_eq!(describe(Maybe::none()), "none");
    /// ```
    #[inline]
    pub fn fold<U, A, P>(self, on_absent: A, on_present: P) -> U
    where
        A: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(Maybe::of(1)).flatten(), Maybe::of(1));
    /// assert_eq!(Maybe::of(Maybe::<i32>::none()).flatten(), Maybe::none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    /// Returns an empty `Maybe`.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Implementation
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}
