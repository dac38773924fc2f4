//! The engine's single error kind.
//!
//! Statically-typed curry nodes reject excess arguments at compile time, so
//! [`ArityExceeded`] is only ever returned by the runtime-checked engine.
//! Failures raised inside a curried callable are not engine errors: they
//! propagate to the caller untouched.

/// Too many arguments were supplied across a curry chain.
///
/// Returned before the callable is invoked, so a rejected application never
/// runs the callable with a partial or corrupted argument list.
///
/// # Examples
///
/// ```rust
/// use currying::ArityExceeded;
///
/// let error = ArityExceeded {
///     arity: 3,
///     filled: 2,
///     supplied: 2,
/// };
///
/// assert_eq!(error.remaining(), 1);
/// assert_eq!(
///     error.to_string(),
///     "arity exceeded: 2 argument(s) supplied to a callable of arity 3 with 2 already bound"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error(
    "arity exceeded: {supplied} argument(s) supplied to a callable of arity {arity} with {filled} already bound"
)]
pub struct ArityExceeded {
    /// The callable's declared arity.
    pub arity: usize,
    /// Arguments already bound when the application was attempted.
    pub filled: usize,
    /// Arguments read from the rejected application. Reading stops at the
    /// first argument past the remaining count, so this is a lower bound
    /// when more were offered.
    pub supplied: usize,
}

impl ArityExceeded {
    /// Number of arguments that could still have been accepted.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 0, 4, 3)]
    #[case(3, 2, 2, 1)]
    #[case(1, 0, 2, 1)]
    fn remaining_is_arity_minus_filled(
        #[case] arity: usize,
        #[case] filled: usize,
        #[case] supplied: usize,
        #[case] expected: usize,
    ) {
        let error = ArityExceeded {
            arity,
            filled,
            supplied,
        };
        assert_eq!(error.remaining(), expected);
    }

    #[rstest]
    fn display_names_every_count() {
        let error = ArityExceeded {
            arity: 2,
            filled: 1,
            supplied: 5,
        };
        assert_eq!(
            format!("{error}"),
            "arity exceeded: 5 argument(s) supplied to a callable of arity 2 with 1 already bound"
        );
    }

    #[rstest]
    fn is_a_standard_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ArityExceeded {
            arity: 1,
            filled: 0,
            supplied: 2,
        });
    }
}
