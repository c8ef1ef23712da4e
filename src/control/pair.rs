//! Pair type - two values carried together.

use crate::Factorized;

/// A product of two values.
///
/// [`Task::chain_rec`](crate::effect::Task::chain_rec) uses it as the
/// `Loop` payload: the next cursor first, the partial task second.
///
/// # Examples
///
/// ```rust
/// use functional_io::control::Pair;
///
/// let pair = Pair::new(1, "one");
/// assert_eq!(pair.to_string(), "Pair(1, \"one\")");
/// assert_eq!(pair.map(|n| n + 1).into_tuple(), (2, "one"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Factorized)]
pub struct Pair<A, B> {
    /// The first slot.
    pub first: A,
    /// The second slot.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Maps the first slot.
    #[inline]
    pub fn map<C, F>(self, function: F) -> Pair<C, B>
    where
        F: FnOnce(A) -> C,
    {
        Pair::new(function(self.first), self.second)
    }

    /// Swaps the slots.
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }

    /// Splits into a tuple.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}
