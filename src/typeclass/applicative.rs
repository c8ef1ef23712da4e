//! Applicative type class - applying functions within a context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine independent
/// computations.
///
/// # Examples
///
/// ```rust
/// use functional_io::control::Either;
/// use functional_io::typeclass::Applicative;
///
/// let lifted: Either<String, i32> = <Either<String, ()>>::pure(42);
/// assert_eq!(lifted, Either::Right(42));
///
/// let sum = Either::<String, i32>::Right(1).map2(Either::Right(2), |a, b| a + b);
/// assert_eq!(sum, Either::Right(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side represents failure, the result fails.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    /// use functional_io::typeclass::Applicative;
    ///
    /// let function: Either<String, fn(i32) -> i32> = Either::Right(|x| x + 1);
    /// assert_eq!(function.apply(Either::Right(5)), Either::Right(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use rstest::rstest;

    #[test]
    fn pure_creates_right() {
        let value: Either<String, i32> = <Either<String, ()>>::pure(7);
        assert_eq!(value, Either::Right(7));
    }

    #[rstest]
    #[case(Either::Right(2), Either::Right(3), Either::Right(5))]
    #[case(Either::Left("a"), Either::Right(3), Either::Left("a"))]
    #[case(Either::Right(2), Either::Left("b"), Either::Left("b"))]
    #[case(Either::Left("a"), Either::Left("b"), Either::Left("a"))]
    fn map2_needs_both_rights(
        #[case] first: Either<&'static str, i32>,
        #[case] second: Either<&'static str, i32>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        assert_eq!(first.map2(second, |a, b| a + b), expected);
    }

    #[test]
    fn product_pairs_values() {
        let first: Either<(), i32> = Either::Right(1);
        assert_eq!(first.product(Either::Right('x')), Either::Right((1, 'x')));
    }

    #[test]
    fn homomorphism_law_holds() {
        let function = |x: i32| x * 10;
        let applied = <Either<(), ()>>::pure(function).apply(<Either<(), ()>>::pure(4));
        assert_eq!(applied, <Either<(), ()>>::pure(function(4)));
    }
}
