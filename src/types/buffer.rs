//! The minimal byte container.

use std::cmp::Ordering;

use super::{RawContainer, compare_raw, concat_raw, reverse_raw};
use crate::Factorized;
use crate::codec::{CodecError, TextCodec};
use crate::typeclass::{
    Comonad, Group, MonoApplicative, MonoFunctor, MonoMonad, Monoid, Semigroup,
};

/// Raw bytes and nothing else.
///
/// `Buffer` is a group under concatenation, with reversal as the inverse,
/// and a monad and comonad over its bytes.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::{Monoid, Semigroup};
/// use functional_io::types::Buffer;
///
/// let buffer = Buffer::new(vec![65, 66, 67, 68, 69]).concat(Buffer::new(vec![70, 71, 72, 73, 74]));
/// assert_eq!(buffer, Buffer::new(vec![65, 66, 67, 68, 69, 70, 71, 72, 73, 74]));
/// assert_eq!(buffer.clone().concat(Buffer::empty()), buffer);
/// assert_eq!(Buffer::new(vec![1, 2]).to_string(), "Buffer([1, 2])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Factorized)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buffer {
    raw: Vec<u8>,
}

impl Buffer {
    /// Wraps `raw`.
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self { raw: raw.into() }
    }

    /// Encodes `text` with `codec`.
    pub fn from_text(codec: &dyn TextCodec, text: &str) -> Self {
        Self::new(codec.encode(text))
    }

    /// The bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Takes the bytes out.
    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }

    /// Decodes the bytes with `codec`.
    ///
    /// # Errors
    ///
    /// Propagates the codec's [`CodecError`].
    pub fn text(&self, codec: &dyn TextCodec) -> Result<String, CodecError> {
        codec.decode(&self.raw)
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if there are no bytes.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(raw: Vec<u8>) -> Self {
        Self::new(raw)
    }
}

impl From<&[u8]> for Buffer {
    fn from(raw: &[u8]) -> Self {
        Self::new(raw.to_vec())
    }
}

impl RawContainer for Buffer {
    fn raw(&self) -> &[u8] {
        &self.raw
    }

    fn with_raw(self, raw: Vec<u8>) -> Self {
        Self::new(raw)
    }
}

impl MonoFunctor for Buffer {
    type Element = Vec<u8>;

    fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        Self::new(function(self.raw))
    }
}

impl MonoApplicative for Buffer {
    fn ap<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        Self::of(function(self.raw))
    }
}

impl MonoMonad for Buffer {
    fn of(element: Vec<u8>) -> Self {
        Self::new(element)
    }

    fn chain<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Self,
    {
        function(self.raw)
    }
}

impl Comonad for Buffer {
    fn extract(&self) -> Vec<u8> {
        self.raw.clone()
    }

    fn extend<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<u8>,
    {
        Self::new(function(&self))
    }
}

impl Semigroup for Buffer {
    fn concat(self, other: Self) -> Self {
        Self::new(concat_raw(self.raw, &other.raw))
    }
}

impl Monoid for Buffer {
    fn empty() -> Self {
        Self::default()
    }
}

impl Group for Buffer {
    fn invert(self) -> Self {
        Self::new(reverse_raw(self.raw))
    }
}

impl PartialOrd for Buffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Buffer {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_raw(&self.raw, &other.raw)
    }
}
