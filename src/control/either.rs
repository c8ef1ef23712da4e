//! Either type - the failure/success channel of every pipeline.
//!
//! `Either<L, R>` is a value that is exactly one of `Left(L)` or `Right(R)`.
//! `Left` carries failures and short-circuits `map`, `chain` and `ap`;
//! `Right` carries the success value. Every [`Task`] settles into an
//! `Either<TaskError, A>`.
//!
//! The type is declared through the factory, so it renders canonically:
//!
//! ```rust
//! use functional_io::control::Either;
//!
//! let right: Either<String, i32> = Either::Right(42);
//! assert_eq!(right.to_string(), "Either.Right(42)");
//!
//! let result = right.fold(|error| error.len() as i32, |value| value * 2);
//! assert_eq!(result, 84);
//! ```

use crate::Factorized;
use crate::effect::Task;
use crate::typeclass::{
    Alt, Applicative, Foldable, Functor, Monad, Traversable, TypeConstructor,
};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Examples
///
/// ```rust
/// use functional_io::control::Either;
///
/// let parsed: Either<String, i32> = "21"
///     .parse::<i32>()
///     .map_err(|error| error.to_string())
///     .into();
///
/// assert_eq!(parsed.map(|n| n * 2), Either::Right(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Factorized)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure channel.
    Left(L),
    /// The success channel.
    Right(R),
}

impl<R> Either<(), R> {
    /// Lifts an optional value: `None` becomes `Left(())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    ///
    /// assert_eq!(Either::from_nullable(None::<i32>), Either::Left(()));
    /// assert_eq!(Either::from_nullable(Some(42)), Either::Right(42));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<R>) -> Self {
        value.map_or(Self::Left(()), Self::Right)
    }
}

impl<L, R> Either<L, R> {
    /// Converts into `Option<L>`, discarding a `Right`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a `Left`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents of either side.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a `Right` value. A `Left` is returned unchanged
    /// and `function` is never called.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to a `Left` value.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Feeds a `Right` value to `function` and adopts its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    ///
    /// let checked = |n: i32| if n > 0 { Either::Right(n) } else { Either::Left("negative") };
    ///
    /// assert_eq!(Either::Right(3).chain(checked), Either::Right(3));
    /// assert_eq!(Either::Right(-3).chain(checked), Either::Left("negative"));
    /// assert_eq!(Either::<&str, i32>::Left("early").chain(checked), Either::Left("early"));
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies the function held by `function` to this value.
    ///
    /// The receiver is checked first, so when both sides are `Left` the
    /// receiver's failure wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    ///
    /// let increment: Either<&str, fn(i32) -> i32> = Either::Right(|n| n + 1);
    /// assert_eq!(Either::Right(1).ap(increment), Either::Right(2));
    ///
    /// let missing: Either<&str, fn(i32) -> i32> = Either::Left("no function");
    /// assert_eq!(Either::Right(1).ap(missing), Either::Left("no function"));
    /// ```
    #[inline]
    pub fn ap<B, F>(self, function: Either<L, F>) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match (self, function) {
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
            (Self::Right(value), Either::Right(function)) => Either::Right(function(value)),
        }
    }

    /// Handles both cases, producing a single value.
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Folds the `Right` value into `initial`. A `Left` returns `initial`.
    #[inline]
    pub fn reduce<T, F>(self, function: F, initial: T) -> T
    where
        F: FnOnce(T, R) -> T,
    {
        match self {
            Self::Left(_) => initial,
            Self::Right(value) => function(initial, value),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Takes the success value out, handing back the failure otherwise.
    ///
    /// # Errors
    ///
    /// Returns the `Left` value as `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    ///
    /// assert_eq!(Either::<&str, i32>::Right(42).extract(), Ok(42));
    /// assert_eq!(Either::<&str, i32>::Left("boom").extract(), Err("boom"));
    /// ```
    #[inline]
    pub fn extract(self) -> Result<R, L> {
        self.into()
    }

    /// Runs a fallible `function` on the `Right` value and turns the
    /// structure inside out.
    #[inline]
    pub fn traverse_option<B, F>(self, function: F) -> Option<Either<L, B>>
    where
        F: FnOnce(R) -> Option<B>,
    {
        match self {
            Self::Left(value) => Some(Either::Left(value)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }

    /// Runs a task-producing `function` on the `Right` value.
    ///
    /// A `Left` becomes a task that immediately succeeds with that `Left`.
    /// If the produced task fails, the returned task fails the same way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    /// use functional_io::effect::Task;
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let value: Either<String, i32> = Either::Right(20);
    /// let task = value.traverse_task(|n| Task::of(n + 1));
    /// assert_eq!(task.run().await, Either::Right(Either::Right(21)));
    /// # });
    /// ```
    pub fn traverse_task<B, F>(self, function: F) -> Task<Either<L, B>>
    where
        L: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
        F: FnOnce(R) -> Task<B>,
    {
        match self {
            Self::Left(value) => Task::of(Either::Left(value)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
            (Self::Right(first), Either::Right(second)) => Either::Right(function(first, second)),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.chain(function)
    }
}

impl<L, R> Foldable for Either<L, R> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        self.reduce(|accumulator, value| function(accumulator, value), init)
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        self.reduce(|accumulator, value| function(value, accumulator), init)
    }
}

impl<L: Clone, R> Traversable for Either<L, R> {
    #[inline]
    fn traverse_option<B, F>(self, function: F) -> Option<Either<L, B>>
    where
        F: FnMut(R) -> Option<B>,
    {
        Self::traverse_option(self, function)
    }

    #[inline]
    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Either<L, B>, E>
    where
        F: FnMut(R) -> Result<B, E>,
    {
        match self {
            Self::Left(value) => Ok(Either::Left(value)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }
}

impl<L, R> Alt for Either<L, R> {
    /// Keeps `self` if it is a `Right`, otherwise takes `alternative`.
    #[inline]
    fn alt(self, alternative: Self) -> Self {
        match self {
            Self::Right(_) => self,
            Self::Left(_) => alternative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::TypeRepresentation;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Either::Left("no"), "Either.Left(\"no\")")]
    #[case(Either::Right(7), "Either.Right(7)")]
    fn display_uses_factory_form(#[case] value: Either<&str, i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn variants_are_declared_in_order() {
        assert_eq!(<Either<(), ()>>::VARIANTS, &["Left", "Right"]);
        assert_eq!(Either::<(), i32>::Right(1).tag(), Some("Right"));
    }

    #[test]
    fn left_short_circuits_without_calling_function() {
        let calls = Cell::new(0);
        let left: Either<&str, i32> = Either::Left("stop");

        let mapped = left.map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        let chained = left.chain(|n| {
            calls.set(calls.get() + 1);
            Either::Right(n)
        });

        assert_eq!(mapped, left);
        assert_eq!(chained, left);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Either::Left("a"), Either::Left("b"), Either::Left("a"))]
    #[case(Either::Right(1), Either::Left("b"), Either::Left("b"))]
    #[case(Either::Left("a"), Either::Right(10), Either::Left("a"))]
    #[case(Either::Right(1), Either::Right(10), Either::Right(11))]
    fn ap_requires_both_sides(
        #[case] value: Either<&'static str, i32>,
        #[case] addend: Either<&'static str, i32>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        let function = addend.map(|addend| move |n: i32| n + addend);
        assert_eq!(value.ap(function), expected);
    }

    #[rstest]
    #[case(Either::Right(1), Either::Right(2), Either::Right(1))]
    #[case(Either::Left("a"), Either::Right(2), Either::Right(2))]
    #[case(Either::Left("a"), Either::Left("b"), Either::Left("b"))]
    fn alt_prefers_the_first_right(
        #[case] first: Either<&'static str, i32>,
        #[case] second: Either<&'static str, i32>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        assert_eq!(first.alt(second), expected);
    }

    #[test]
    fn from_nullable_maps_none_to_left_unit() {
        assert_eq!(Either::from_nullable(None::<i32>), Either::Left(()));
        assert_eq!(Either::from_nullable(Some(42)), Either::Right(42));
    }

    #[test]
    fn reduce_ignores_left() {
        let left: Either<(), i32> = Either::Left(());
        let right: Either<(), i32> = Either::Right(5);
        assert_eq!(left.reduce(|total, n| total + n, 10), 10);
        assert_eq!(right.reduce(|total, n| total + n, 10), 15);
    }

    #[test]
    fn extract_hands_back_the_failure() {
        assert_eq!(Either::<String, i32>::Right(1).extract(), Ok(1));
        assert_eq!(
            Either::<String, i32>::Left("bad".to_string()).extract(),
            Err("bad".to_string())
        );
    }

    #[test]
    fn swap_and_result_conversions_agree() {
        let value: Either<&str, i32> = Either::Right(3);
        assert_eq!(value.swap(), Either::Left(3));
        let result: Result<i32, &str> = value.into();
        assert_eq!(Either::from(result), value);
    }

    #[test]
    fn as_ref_borrows_without_consuming() {
        let value: Either<String, String> = Either::Left("kept".to_string());
        assert_eq!(value.as_ref().left().map(String::len), Some(4));
        assert!(value.is_left());
    }

    #[tokio::test]
    async fn traverse_task_wraps_left_without_running_function() {
        let value: Either<String, i32> = Either::Left("nope".to_string());
        let task = value.traverse_task(|_| -> Task<i32> { unreachable!("left must not traverse") });
        assert_eq!(
            task.run().await,
            Either::Right(Either::Left("nope".to_string()))
        );
    }
}
