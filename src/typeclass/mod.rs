//! Type class traits for wrapped-value abstractions.
//!
//! This module provides the capability traits that any "wrapped value"
//! type implements in order to compose under `map` and `bind`:
//!
//! - [`Functor`]: Mapping over the wrapped value
//! - [`Applicative`]: Lifting values and combining independent wrappers
//! - [`Monad`]: Sequencing computations where each step depends on the last
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate it,
//! so that `Functor` and `Monad` can describe "the same wrapper around a
//! different type".
//!
//! # Examples
//!
//! ```rust
//! use maybe_monad::typeclass::{Applicative, Monad};
//!
//! fn double_positive<M>(wrapped: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     wrapped.bind(|n| if n > 0 { M::pure(n * 2) } else { M::pure(n) })
//! }
//!
//! assert_eq!(double_positive(Some(4)), Some(8));
//! assert_eq!(double_positive(Some(-3)), Some(-3));
//! assert_eq!(double_positive(None::<i32>), None);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
