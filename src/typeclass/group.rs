//! Group type class - monoids with an inverse.
//!
//! For byte payloads the inverse is reversal, which is an involution rather
//! than a true additive inverse:
//!
//! ```text
//! a.invert().invert() == a
//! a.concat(a.invert()).invert() == a.concat(a.invert())
//! T::empty().invert() == T::empty()
//! ```
//!
//! A palindromic payload is its own inverse, which is the "reversible
//! content" case where `a.concat(a.invert())` round-trips.

use super::monoid::Monoid;

/// A [`Monoid`] whose values can be inverted.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::Group;
/// use functional_io::types::Buffer;
///
/// let buffer = Buffer::new(vec![1, 2, 3]);
/// assert_eq!(buffer.invert(), Buffer::new(vec![3, 2, 1]));
/// ```
pub trait Group: Monoid {
    /// Returns the inverse of this value.
    #[must_use]
    fn invert(self) -> Self;
}
