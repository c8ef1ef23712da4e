//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.concat(b)).concat(c) == a.concat(b.concat(c))
//! ```
//!
//! Byte-carrying domain values concatenate their payload and keep the
//! receiver's metadata, so the law holds on the payload only.
//!
//! # Examples
//!
//! ```rust
//! use functional_io::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! assert_eq!(hello.concat(String::from("World!")), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].concat(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn concat(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `concat`.
    #[must_use]
    fn concat_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().concat(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. See
    /// [`Monoid::concat_all`](super::Monoid::concat_all) for the total version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::typeclass::Semigroup;
    ///
    /// let parts = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(parts), Some(String::from("ab")));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.concat(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn concat_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Semigroup for Vec<T> {
    fn concat(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn concat_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", "")]
    #[case("ab", "", "ab")]
    #[case("", "cd", "cd")]
    #[case("ab", "cd", "abcd")]
    fn string_concat_appends(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
        assert_eq!(left.to_string().concat(right.to_string()), expected);
    }

    #[test]
    fn vec_concat_ref_preserves_originals() {
        let first = vec![1_u8, 2];
        let second = vec![3_u8];
        assert_eq!(first.concat_ref(&second), vec![1, 2, 3]);
        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![3]);
    }

    #[test]
    fn vec_concat_is_associative() {
        let a = vec![1];
        let b = vec![2, 3];
        let c = vec![4];
        assert_eq!(
            a.clone().concat(b.clone()).concat(c.clone()),
            a.concat(b.concat(c))
        );
    }
}
