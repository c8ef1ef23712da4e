//! Alt and Plus - choosing the first successful value.
//!
//! `Alt` is a semigroup over the "success" shape of a type: `a.alt(b)` keeps
//! `a` when it represents success and falls through to `b` otherwise.
//! `Plus` adds the failing identity element.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.alt(b).alt(c) == a.alt(b.alt(c))
//! ```
//!
//! ## Identity (Plus)
//!
//! ```text
//! Self::zero().alt(a) == a
//! a.alt(Self::zero()) == a
//! ```

/// A type class for picking the first success out of two candidates.
///
/// # Examples
///
/// ```rust
/// use functional_io::control::Either;
/// use functional_io::typeclass::Alt;
///
/// let cached: Either<&str, i32> = Either::Left("cache miss");
/// assert_eq!(cached.alt(Either::Right(7)), Either::Right(7));
/// ```
pub trait Alt: Sized {
    /// Returns `self` if it is a success, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Returns the first success in `candidates`, or the last failure.
    ///
    /// Returns `None` for an empty iterator.
    fn alt_all<I>(candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        candidates.into_iter().reduce(Self::alt)
    }
}

/// An [`Alt`] with an identity element that always falls through.
pub trait Plus: Alt {
    /// The failing value that `alt` always skips.
    fn zero() -> Self;
}
