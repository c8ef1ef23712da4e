//! Traversable type class - mapping with effects and collecting results.
//!
//! Rust lacks higher-kinded types, so instead of one generic `traverse` this
//! trait offers specialized methods for the most common effects. Traversal
//! into a deferred [`Task`](crate::effect::Task) is provided directly on
//! [`Either::traverse_task`](crate::control::Either::traverse_task).

use super::foldable::Foldable;
use super::functor::Functor;

/// A type class for structures that can be traversed with effects.
///
/// # Examples
///
/// ```rust
/// use functional_io::control::Either;
/// use functional_io::typeclass::Traversable;
///
/// let raw: Either<String, &str> = Either::Right("42");
/// let parsed: Option<Either<String, i32>> = raw.traverse_option(|s| s.parse().ok());
/// assert_eq!(parsed, Some(Either::Right(42)));
/// ```
pub trait Traversable: Functor + Foldable {
    /// Applies a function returning `Option` and turns the structure inside out.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies a function returning `Result` and turns the structure inside out.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Right("7"), Some(Either::Right(7)))]
    #[case(Either::Right("x"), None)]
    #[case(Either::Left(()), Some(Either::Left(())))]
    fn traverse_option_only_runs_on_right(
        #[case] input: Either<(), &'static str>,
        #[case] expected: Option<Either<(), i32>>,
    ) {
        assert_eq!(input.traverse_option(|s| s.parse().ok()), expected);
    }

    #[test]
    fn traverse_result_surfaces_the_function_error() {
        let input: Either<(), &str> = Either::Right("nope");
        let result = input.traverse_result(|s| s.parse::<i32>().map_err(|_| "bad"));
        assert_eq!(result, Err("bad"));
    }

    #[test]
    fn traverse_result_keeps_left_untouched() {
        let input: Either<&str, &str> = Either::Left("earlier failure");
        let result: Result<Either<&str, i32>, ()> =
            input.traverse_result(|_| unreachable!("left must not be traversed"));
        assert_eq!(result, Ok(Either::Left("earlier failure")));
    }
}
