//! The two-variant union at the center of the crate.
//!
//! Everything here is pure value plumbing: each operation consumes its
//! receiver and hands back a new [`Outcome`], so a chain reads top to
//! bottom with no branching at the call sites. A `Failure` entering a
//! chain short-circuits it; the original error rides along unchanged
//! until something looks at it.

use crate::Error;

use Outcome::{Failure, Success};

/// The outcome of a fallible operation: a value, or the error that
/// prevented one.
///
/// A closed union. There is no third case and no "pending" state; a
/// constructed value never changes variant. Callers can match on it
/// exhaustively, or stay on the combinator rail and never branch by hand.
///
/// The error parameter defaults to [`Error`], the message-bearing type
/// the [`run`](crate::run)/[`run_async`](crate::run_async) boundaries
/// produce. Any `E` may be substituted; it does not need to implement
/// any error trait.
///
/// ```
/// use outcome::Outcome;
///
/// fn halve(n: u32) -> Outcome<u32, &'static str> {
///     if n % 2 == 0 {
///         Outcome::Success(n / 2)
///     } else {
///         Outcome::Failure("odd")
///     }
/// }
///
/// assert_eq!(halve(12).and_then(halve).unwrap(), 3);
/// assert_eq!(halve(12).and_then(halve).and_then(halve).unwrap_error(), "odd");
/// ```
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Outcome<T, E = Error> {
    /// Holds the value of a computation that completed.
    Success(T),
    /// Holds the error of a computation that did not produce a value.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `other` if `self` is a `Success`, else propagates the error.
    ///
    /// A chain of combined outcomes succeeds only if every link does, so a
    /// success simply defers to the next result and its own value is
    /// dropped. Both arguments are already evaluated by the time this is
    /// called; use [`and_then`](Outcome::and_then) to keep later steps
    /// from running at all.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<u32, &str> = Outcome::Success(2);
    /// let y: Outcome<&str, &str> = Outcome::Failure("late error");
    /// assert_eq!(x.and_combine(y), Outcome::Failure("late error"));
    ///
    /// let x: Outcome<u32, &str> = Outcome::Failure("early error");
    /// let y: Outcome<&str, &str> = Outcome::Success("foo");
    /// assert_eq!(x.and_combine(y), Outcome::Failure("early error"));
    /// ```
    #[inline]
    pub fn and_combine<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(_) => other,
            Failure(error) => Failure(error),
        }
    }

    /// Calls `op` on the value of a `Success`, else propagates the error
    /// without invoking `op`.
    ///
    /// The monadic bind: each step decides for itself whether the chain
    /// keeps going.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn parse(s: &str) -> Outcome<u32, &str> {
    ///     match s.parse() {
    ///         Ok(n) => Outcome::Success(n),
    ///         Err(_) => Outcome::Failure("not a number"),
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::<_, &str>::Success("4").and_then(parse), Outcome::Success(4));
    /// assert_eq!(Outcome::<_, &str>::Success("x").and_then(parse), Outcome::Failure("not a number"));
    /// ```
    #[inline]
    pub fn and_then<U>(self, op: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(value) => op(value),
            Failure(error) => Failure(error),
        }
    }

    /// Whether this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        match self {
            Success(_) => true,
            Failure(_) => false,
        }
    }

    /// Whether this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Applies `op` to the value of a `Success`, else propagates the error
    /// without invoking `op`.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<u32, &str> = Outcome::Success(21);
    /// assert_eq!(x.map(|n| n * 2), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Success(value) => Success(op(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Applies `op` to the error of a `Failure`, else propagates the value
    /// without invoking `op`.
    ///
    /// This is the point where a chain changes its error type.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<u32, u32> = Outcome::Failure(13);
    /// assert_eq!(x.map_error(|code| format!("error code {}", code)),
    ///            Outcome::Failure("error code 13".to_string()));
    /// ```
    #[inline]
    pub fn map_error<F>(self, op: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(op(error)),
        }
    }

    /// Returns the value of a `Success`.
    ///
    /// # Panics
    ///
    /// On a `Failure`, with the fixed message
    /// ``called `unwrap` on a `Failure` value``. Reaching that panic is a
    /// programming error; check [`is_success`](Outcome::is_success) or
    /// match first. The error itself is not printed, so no `Debug` bound
    /// is required of it.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Success(value) => value,
            Failure(_) => panic!("called `unwrap` on a `Failure` value"),
        }
    }

    /// Returns the error of a `Failure`.
    ///
    /// # Panics
    ///
    /// On a `Success`, with the fixed message
    /// ``called `unwrap_error` on a `Success` value``.
    #[inline]
    pub fn unwrap_error(self) -> E {
        match self {
            Success(_) => panic!("called `unwrap_error` on a `Success` value"),
            Failure(error) => error,
        }
    }

    /// Returns the value of a `Success`, or `default` on a `Failure`.
    ///
    /// `default` is evaluated eagerly either way.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<u32, &str> = Outcome::Success(9);
    /// assert_eq!(x.unwrap_or(2), 9);
    ///
    /// let x: Outcome<u32, &str> = Outcome::Failure("error");
    /// assert_eq!(x.unwrap_or(2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// The value, discarding a `Failure`'s error.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// The error, discarding a `Success`'s value.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Borrows both sides, leaving the original in place.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Converts into the standard library's result type, for handing to
    /// `?` and the rest of that ecosystem.
    ///
    /// The inverse of the `From<Result<T, E>>` conversion. (Coherence
    /// forbids writing this direction as a `From` impl on the foreign
    /// type.)
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn construction_and_extraction() {
        let x: Outcome<u32, &str> = Success(17);
        assert!(x.is_success());
        assert!(!x.is_failure());
        assert_eq!(x.unwrap(), 17);

        let x: Outcome<u32, &str> = Failure("broken");
        assert!(x.is_failure());
        assert!(!x.is_success());
        assert_eq!(x.unwrap_error(), "broken");
    }

    #[test]
    fn predicates_are_idempotent() {
        let x: Outcome<u32, &str> = Success(1);
        for _ in 0..3 {
            assert!(x.is_success());
            assert!(!x.is_failure());
        }
    }

    #[test]
    fn and_combine_forwards_from_success() {
        let x: Outcome<u32, &str> = Success(2);
        assert_eq!(x.and_combine(Success("next")), Success("next"));

        let x: Outcome<u32, &str> = Success(2);
        assert_eq!(x.and_combine(Outcome::<&str, _>::Failure("late")), Failure("late"));
    }

    #[test]
    fn and_combine_short_circuits_from_failure() {
        let x: Outcome<u32, &str> = Failure("early");
        assert_eq!(x.and_combine(Success("next")), Failure("early"));

        let x: Outcome<u32, &str> = Failure("early");
        assert_eq!(x.and_combine(Outcome::<&str, _>::Failure("late")), Failure("early"));
    }

    #[test]
    fn and_then_applies_the_continuation() {
        fn square(n: u32) -> Outcome<u32, &'static str> {
            Success(n * n)
        }
        fn reject(_: u32) -> Outcome<u32, &'static str> {
            Failure("rejected")
        }

        assert_eq!(Success(2).and_then(square).and_then(square), Success(16));
        assert_eq!(Success(2).and_then(square).and_then(reject), Failure("rejected"));
    }

    #[test]
    fn and_then_on_failure_never_invokes_the_continuation() {
        let mut calls = 0;
        let x: Outcome<u32, &str> = Failure("early");
        let chained = x.and_then(|n| {
            calls += 1;
            Success(n)
        });
        assert_eq!(chained, Failure("early"));
        assert_eq!(calls, 0);
    }

    #[test]
    fn map_transforms_the_value() {
        let x: Outcome<u32, &str> = Success(21);
        assert_eq!(x.map(|n| n * 2).unwrap(), 42);
    }

    #[test]
    fn map_on_failure_never_invokes_the_function() {
        let mut calls = 0;
        let x: Outcome<u32, &str> = Failure("broken");
        let mapped = x.map(|n| {
            calls += 1;
            n
        });
        assert_eq!(mapped, Failure("broken"));
        assert_eq!(calls, 0);
    }

    #[test]
    fn map_error_transforms_the_error() {
        let x: Outcome<u32, u32> = Failure(13);
        assert_eq!(x.map_error(|code| code + 1).unwrap_error(), 14);
    }

    #[test]
    fn map_error_on_success_never_invokes_the_function() {
        let mut calls = 0;
        let x: Outcome<u32, &str> = Success(5);
        let mapped = x.map_error(|e| {
            calls += 1;
            e
        });
        assert_eq!(mapped, Success(5));
        assert_eq!(calls, 0);
    }

    #[test]
    #[should_panic(expected = "called `unwrap` on a `Failure` value")]
    fn unwrap_on_failure_is_a_misuse() {
        let x: Outcome<u32, &str> = Failure("broken");
        x.unwrap();
    }

    #[test]
    #[should_panic(expected = "called `unwrap_error` on a `Success` value")]
    fn unwrap_error_on_success_is_a_misuse() {
        let x: Outcome<u32, &str> = Success(17);
        x.unwrap_error();
    }

    #[test]
    fn unwrap_or_prefers_the_value() {
        let x: Outcome<u32, &str> = Success(9);
        assert_eq!(x.unwrap_or(2), 9);

        let x: Outcome<u32, &str> = Failure("error");
        assert_eq!(x.unwrap_or(2), 2);
    }

    #[test]
    fn halves_split_apart() {
        let x: Outcome<u32, &str> = Success(3);
        assert_eq!(x.success(), Some(3));
        let x: Outcome<u32, &str> = Success(3);
        assert_eq!(x.failure(), None);

        let x: Outcome<u32, &str> = Failure("nope");
        assert_eq!(x.failure(), Some("nope"));
        let x: Outcome<u32, &str> = Failure("nope");
        assert_eq!(x.success(), None);
    }

    #[test]
    fn as_ref_borrows_without_consuming() {
        let x: Outcome<String, &str> = Success("kept".to_string());
        assert_eq!(x.as_ref().unwrap(), "kept");
        // still usable afterwards
        assert_eq!(x.unwrap(), "kept");
    }

    #[test]
    fn converts_to_and_from_core_result() {
        let x: Outcome<u32, &str> = Ok(3).into();
        assert_eq!(x, Success(3));
        let x: Outcome<u32, &str> = Err("e").into();
        assert_eq!(x, Failure("e"));

        assert_eq!(Outcome::<u32, &str>::Success(3).into_result(), Ok(3));
        assert_eq!(Outcome::<u32, &str>::Failure("e").into_result(), Err("e"));
    }
}
