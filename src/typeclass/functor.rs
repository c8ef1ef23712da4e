//! Functor type class - mapping over values in a context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Domain values whose payload type is fixed (a `Buffer` always holds bytes)
//! use [`MonoFunctor`](super::MonoFunctor) instead.

use super::higher::TypeConstructor;

/// A type class for containers whose inner value can be mapped.
///
/// # Examples
///
/// ```rust
/// use functional_io::control::Either;
/// use functional_io::typeclass::Functor;
///
/// let parsed: Either<String, i32> = Either::Right(5);
/// assert_eq!(parsed.fmap(|n| n * 2), Either::Right(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    /// use functional_io::typeclass::Functor;
    ///
    /// let failed: Either<String, i32> = Either::Left("boom".to_string());
    /// assert_eq!(failed.fmap(|n| n * 2), Either::Left("boom".to_string()));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Right(3), Either::Right(6))]
    #[case(Either::Left("no".to_string()), Either::Left("no".to_string()))]
    fn fmap_doubles_only_right(
        #[case] input: Either<String, i32>,
        #[case] expected: Either<String, i32>,
    ) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[test]
    fn fmap_ref_keeps_the_source() {
        let source: Either<(), String> = Either::Right("hello".to_string());
        let length = source.fmap_ref(String::len);
        assert_eq!(length, Either::Right(5));
        assert_eq!(source, Either::Right("hello".to_string()));
    }

    #[test]
    fn replace_and_void_keep_structure() {
        let right: Either<i32, i32> = Either::Right(1);
        let left: Either<i32, i32> = Either::Left(9);
        assert_eq!(right.replace("x"), Either::Right("x"));
        assert_eq!(left.void(), Either::Left(9));
    }

    #[test]
    fn identity_law_holds() {
        let value: Either<String, i32> = Either::Right(42);
        assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn composition_law_holds() {
        let value: Either<String, i32> = Either::Right(4);
        let first = |x: i32| x + 1;
        let second = |x: i32| x * 3;
        assert_eq!(
            value.clone().fmap(first).fmap(second),
            value.fmap(move |x| second(first(x)))
        );
    }
}
