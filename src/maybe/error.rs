//! Error type for unwrapping an empty `Maybe`.

/// Returned when the value of an empty `Maybe` is requested.
///
/// This is the only failure in the crate: every compositional operation
/// propagates absence as data, and only the unwrapping accessors
/// (`value`, `some`, `value_ref`) turn it into an error.
///
/// # Examples
///
/// ```rust
/// use maybe_monad::maybe::{EmptyValueError, Maybe};
///
/// let error = Maybe::<i32>::none().value().unwrap_err();
/// assert_eq!(error, EmptyValueError { method_name: "value" });
/// assert_eq!(
///     error.to_string(),
///     "Maybe::value: cannot get value from an empty Maybe"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyValueError {
    /// The name of the accessor that was called on the empty `Maybe`.
    pub method_name: &'static str,
}

impl EmptyValueError {
    pub(crate) const fn new(method_name: &'static str) -> Self {
        Self { method_name }
    }
}

impl std::fmt::Display for EmptyValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Maybe::{}: cannot get value from an empty Maybe",
            self.method_name
        )
    }
}

impl std::error::Error for EmptyValueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_error_display() {
        let error = EmptyValueError::new("value");
        assert_eq!(
            format!("{error}"),
            "Maybe::value: cannot get value from an empty Maybe"
        );
    }

    #[test]
    fn test_empty_value_error_display_alias() {
        let error = EmptyValueError::new("some");
        assert_eq!(
            format!("{error}"),
            "Maybe::some: cannot get value from an empty Maybe"
        );
    }

    #[test]
    fn test_empty_value_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        let error = EmptyValueError::new("value_ref");
        assert_error(&error);
        let boxed: Box<dyn std::error::Error> = Box::new(error);
        assert!(boxed.source().is_none());
    }
}
