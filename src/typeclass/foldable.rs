//! Foldable type class - reducing a structure to a summary value.
//!
//! `Either` folds like a zero-or-one element container: a `Right` contributes
//! its value, a `Left` contributes nothing.

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A type class for structures that can be folded into a single value.
///
/// # Examples
///
/// ```rust
/// use functional_io::control::Either;
/// use functional_io::typeclass::Foldable;
///
/// let right: Either<String, i32> = Either::Right(5);
/// assert_eq!(right.fold_left(10, |total, n| total + n), 15);
///
/// let left: Either<String, i32> = Either::Left("missing".to_string());
/// assert_eq!(left.fold_left(10, |total, n| total + n), 10);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and concatenates the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.concat(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }
}
