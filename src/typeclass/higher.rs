//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module provides [`TypeConstructor`], which names the wrapped type and
//! "the same wrapper around another type" through a GAT. `Functor`,
//! `Applicative` and `Monad` are all defined on top of it.
//!
//! # Example
//!
//! ```rust
//! use maybe_monad::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = reset(some_int);
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a constructor applied to some type `A`, for
/// example `Option<A>` or `Maybe<A>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is the
///    same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a type constructor itself, so
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn option_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Option<String> = transform(Some(42));
        assert_eq!(result, None);
    }

    #[rstest]
    #[case(Some(42))]
    #[case(None)]
    fn option_with_type_inner_roundtrip(#[case] original: Option<i32>) {
        fn roundtrip<T: TypeConstructor>(value: T) -> T::WithType<T::Inner>
        where
            T: Into<T::WithType<T::Inner>>,
        {
            value.into()
        }

        let result: Option<i32> = roundtrip(original);
        assert_eq!(result, original);
    }

    #[test]
    fn nested_type_constructor_exposes_outer_inner() {
        fn assert_inner<T: TypeConstructor<Inner = Option<i32>>>() {}
        assert_inner::<Option<Option<i32>>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool_constructor<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool_constructor::<Step2>();
    }
}
