//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().concat(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.concat(T::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::{Monoid, Semigroup};
///
/// let text = String::from("hello");
/// assert_eq!(String::empty().concat(text.clone()), text);
/// assert_eq!(text.clone().concat(String::empty()), text);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::typeclass::Monoid;
    ///
    /// let chunks = vec![vec![1_u8], vec![2, 3]];
    /// assert_eq!(Vec::concat_all(chunks), vec![1, 2, 3]);
    /// ```
    fn concat_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.concat(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}
