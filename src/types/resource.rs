//! Bytes read from or written to a system resource handle.

use std::cmp::Ordering;

use super::{RawContainer, compare_raw, concat_raw, reverse_raw};
use crate::Factorized;
use crate::typeclass::{
    Comonad, Group, MonoApplicative, MonoBifunctor, MonoFunctor, MonoMonad, Monoid,
    Semigroup,
};

/// A payload tied to a resource id (`rid`).
///
/// The id identifies an open handle in a
/// [`ResourceTable`](crate::fs::ResourceTable); zero means "no handle".
/// Concatenation keeps the receiver's id.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::Semigroup;
/// use functional_io::types::Resource;
///
/// let resource = Resource::new(vec![65, 66, 67, 68, 69], 3)
///     .concat(Resource::new(vec![70, 71, 72, 73, 74], 5));
/// assert_eq!(resource.rid(), 3);
/// assert_eq!(resource.raw().len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Factorized)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    raw: Vec<u8>,
    rid: u32,
}

impl Resource {
    /// Creates a resource value.
    pub fn new(raw: impl Into<Vec<u8>>, rid: u32) -> Self {
        Self {
            raw: raw.into(),
            rid,
        }
    }

    /// The bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The resource id.
    pub const fn rid(&self) -> u32 {
        self.rid
    }

    /// Returns the same payload bound to another handle.
    #[must_use]
    pub fn with_rid(self, rid: u32) -> Self {
        Self { rid, ..self }
    }
}

impl RawContainer for Resource {
    fn raw(&self) -> &[u8] {
        &self.raw
    }

    fn with_raw(self, raw: Vec<u8>) -> Self {
        Self { raw, ..self }
    }
}

impl MonoFunctor for Resource {
    type Element = Vec<u8>;

    fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        Self::new(function(self.raw), self.rid)
    }
}

impl MonoApplicative for Resource {
    fn ap<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        Self::new(function(self.raw), self.rid)
    }
}

impl MonoMonad for Resource {
    fn of(element: Vec<u8>) -> Self {
        Self::new(element, 0)
    }

    fn chain<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Self,
    {
        function(self.raw)
    }
}

impl Comonad for Resource {
    fn extract(&self) -> Vec<u8> {
        self.raw.clone()
    }

    fn extend<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<u8>,
    {
        let raw = function(&self);
        Self { raw, ..self }
    }
}

impl MonoBifunctor for Resource {
    type Meta = u32;

    fn bimap<F, G>(self, meta_function: F, element_function: G) -> Self
    where
        F: FnOnce(u32) -> u32,
        G: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        Self::new(element_function(self.raw), meta_function(self.rid))
    }
}

impl Semigroup for Resource {
    fn concat(self, other: Self) -> Self {
        Self::new(concat_raw(self.raw, &other.raw), self.rid)
    }
}

impl Monoid for Resource {
    fn empty() -> Self {
        Self::default()
    }
}

impl Group for Resource {
    fn invert(self) -> Self {
        Self::new(reverse_raw(self.raw), self.rid)
    }
}

impl PartialOrd for Resource {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.rid == other.rid).then(|| compare_raw(&self.raw, &other.raw))
    }
}
