//! # maybe-monad
//!
//! An optional-value `Maybe` type together with the type classes it
//! implements.
//!
//! ## Overview
//!
//! - **Type Classes**: `TypeConstructor`, `Functor`, `Applicative`, `Monad`
//! - **Maybe**: a value or the absence of one, composable with `map`,
//!   `bind`, `filter`, `or_else` and `chain` without manual checks
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `maybe`: The `Maybe` type (enables `typeclass`)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe_monad::prelude::*;
//!
//! let result = Maybe::of(10)
//!     .map(|value| value + 5)
//!     .map(|value| value - 10)
//!     .map(|value| value + 100);
//! assert_eq!(result.value(), Ok(105));
//!
//! let collapsed = Maybe::of(10)
//!     .map(|value| value + 5)
//!     .map_wrap(|_| None::<i32>)
//!     .map(|value| value + 100);
//! assert!(collapsed.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybe_monad::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "maybe")]
    pub use crate::maybe::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "maybe")]
pub mod maybe;
