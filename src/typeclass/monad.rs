//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! For [`Either`](crate::control::Either) this is the error-propagation
//! backbone: a `Left` short-circuits every later step without invoking it.

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use functional_io::control::Either;
/// use functional_io::typeclass::Monad;
///
/// fn parse(text: &str) -> Either<String, i32> {
///     text.parse::<i32>().map_err(|error| error.to_string()).into()
/// }
///
/// let doubled = Either::<String, &str>::Right("21")
///     .flat_map(parse)
///     .flat_map(|n| Either::Right(n * 2));
/// assert_eq!(doubled, Either::Right(42));
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a new monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first result.
    ///
    /// A failed `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
