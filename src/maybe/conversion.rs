//! Conversions into and out of `Maybe`.
//!
//! [`IntoMaybe`] is the normalising conversion behind `Maybe::wrap`,
//! `map_wrap`, `or_else` and `chain`: a `Maybe` passes through untouched and
//! `Option::None` becomes absence. [`Condition`] is the flag accepted by
//! `Maybe::or_none_if`.

use super::Maybe;

/// Types that can be normalised into a `Maybe`.
///
/// Implemented for `Maybe<T>` itself (so wrapping is idempotent) and for
/// `Option<T>`, whose `None` is the absence sentinel.
///
/// # Examples
///
/// ```rust
/// use maybe_monad::maybe::{IntoMaybe, Maybe};
///
/// assert_eq!(Some(3).into_maybe(), Maybe::of(3));
/// assert_eq!(None::<i32>.into_maybe(), Maybe::none());
/// assert_eq!(Maybe::of(3).into_maybe(), Maybe::of(3));
/// ```
pub trait IntoMaybe {
    /// The type of the value held by the resulting `Maybe`.
    type Value;

    /// Converts `self` into a `Maybe`.
    fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T> IntoMaybe for Maybe<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}

impl<T> IntoMaybe for Option<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }
}

/// A flag that can be tested by `Maybe::or_none_if`.
///
/// A wrapped flag that is absent does not hold.
///
/// # Examples
///
/// ```rust
/// use maybe_monad::maybe::{Condition, Maybe};
///
/// assert!(true.holds());
/// assert!(Maybe::of(true).holds());
/// assert!(!Maybe::<bool>::none().holds());
/// ```
pub trait Condition {
    /// Returns `true` if the flag is raised.
    fn holds(self) -> bool;
}

impl Condition for bool {
    #[inline]
    fn holds(self) -> bool {
        self
    }
}

impl Condition for Option<bool> {
    #[inline]
    fn holds(self) -> bool {
        self.unwrap_or(false)
    }
}

impl Condition for Maybe<bool> {
    #[inline]
    fn holds(self) -> bool {
        self.or_value(false)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::from(Some(1)), Maybe::of(1));
    /// assert_eq!(Maybe::<i32>::from(None), Maybe::none());
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// let option: Option<i32> = Maybe::of(1).into();
    /// assert_eq!(option, Some(1));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.or_null()
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.or_null().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, V: FromIterator<A>> FromIterator<Maybe<A>> for Maybe<V> {
    /// Collects a sequence of `Maybe`s, absent as soon as one element is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_monad::maybe::Maybe;
    ///
    /// let all: Maybe<Vec<i32>> = vec![Maybe::of(1), Maybe::of(2)].into_iter().collect();
    /// assert_eq!(all, Maybe::of(vec![1, 2]));
    ///
    /// let gap: Maybe<Vec<i32>> = vec![Maybe::of(1), Maybe::none()].into_iter().collect();
    /// assert!(gap.is_none());
    /// ```
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Option::from)
            .collect::<Option<V>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5), Maybe::of(5))]
    #[case(None, Maybe::none())]
    fn option_into_maybe(#[case] input: Option<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.into_maybe(), expected);
    }

    #[rstest]
    fn maybe_into_maybe_is_identity() {
        assert_eq!(Maybe::of("x").into_maybe(), Maybe::of("x"));
        assert_eq!(Maybe::<&str>::none().into_maybe(), Maybe::none());
    }

    #[rstest]
    #[case(true, true)]
    #[case(false, false)]
    fn bool_condition(#[case] flag: bool, #[case] expected: bool) {
        assert_eq!(flag.holds(), expected);
    }

    #[rstest]
    #[case(Some(true), true)]
    #[case(Some(false), false)]
    #[case(None, false)]
    fn option_condition(#[case] flag: Option<bool>, #[case] expected: bool) {
        assert_eq!(flag.holds(), expected);
        assert_eq!(Maybe::from(flag).holds(), expected);
    }

    #[rstest]
    fn option_roundtrip_through_maybe() {
        for original in [Some(1), None] {
            let back: Option<i32> = Maybe::from(original).into();
            assert_eq!(back, original);
        }
    }

    #[rstest]
    fn into_iter_yields_at_most_one_item() {
        assert_eq!(Maybe::of(4).into_iter().collect::<Vec<_>>(), vec![4]);
        assert_eq!(Maybe::<i32>::none().into_iter().count(), 0);
    }

    #[rstest]
    fn borrowed_into_iter_keeps_maybe() {
        let maybe = Maybe::of(String::from("kept"));
        let mut seen = Vec::new();
        for value in &maybe {
            seen.push(value.len());
        }
        assert_eq!(seen, vec![4]);
        assert!(maybe.has_value());
    }

    #[rstest]
    fn collect_stops_at_first_absence() {
        let mut visited = 0;
        let collected: Maybe<Vec<i32>> = [Maybe::of(1), Maybe::none(), Maybe::of(3)]
            .into_iter()
            .inspect(|_| visited += 1)
            .collect();
        assert!(collected.is_none());
        assert_eq!(visited, 2);
    }
}
