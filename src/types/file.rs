//! A file: a path, its bytes, and the handle it was opened under.

use std::cmp::Ordering;

use super::{PathContainer, RawContainer, compare_raw, concat_raw, reverse_raw};
use crate::Factorized;
use crate::typeclass::{
    Comonad, Group, MonoApplicative, MonoBifunctor, MonoFunctor, MonoMonad, Monoid,
    Semigroup,
};

/// A file path together with content and a resource id.
///
/// `map`, `chain` and `concat` work on the content; the path and id only
/// change through [`MonoBifunctor::bimap`] or the explicit setters.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::{MonoBifunctor, MonoFunctor};
/// use functional_io::types::File;
///
/// let file = File::from_path("hoge.txt").map(|_| b"content".to_vec());
/// assert_eq!(file.to_string(), "File(\"hoge.txt\", [99, 111, 110, 116, 101, 110, 116], 0)");
///
/// let moved = file.bimap(|(path, rid)| (format!("archive/{path}"), rid), |raw| raw);
/// assert_eq!(moved.path(), "archive/hoge.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Factorized)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct File {
    path: String,
    raw: Vec<u8>,
    rid: u32,
}

impl File {
    /// Creates a file value.
    pub fn new(path: impl Into<String>, raw: impl Into<Vec<u8>>, rid: u32) -> Self {
        Self {
            path: path.into(),
            raw: raw.into(),
            rid,
        }
    }

    /// A file at `path` with no content and no handle.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self::new(path, Vec::new(), 0)
    }

    /// The path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The content.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The resource id, zero when not open.
    pub const fn rid(&self) -> u32 {
        self.rid
    }

    /// Returns the same file bound to another handle.
    #[must_use]
    pub fn with_rid(self, rid: u32) -> Self {
        Self { rid, ..self }
    }
}

impl RawContainer for File {
    fn raw(&self) -> &[u8] {
        &self.raw
    }

    fn with_raw(self, raw: Vec<u8>) -> Self {
        Self { raw, ..self }
    }
}

impl PathContainer for File {
    fn path(&self) -> &str {
        &self.path
    }

    fn with_path(self, path: String) -> Self {
        Self { path, ..self }
    }
}

impl MonoFunctor for File {
    type Element = Vec<u8>;

    fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        Self {
            raw: function(self.raw),
            ..self
        }
    }
}

impl MonoApplicative for File {
    fn ap<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        let raw = function(self.raw);
        Self { raw, ..self }
    }
}

impl MonoMonad for File {
    fn of(element: Vec<u8>) -> Self {
        Self::new(String::new(), element, 0)
    }

    fn chain<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Self,
    {
        function(self.raw)
    }
}

impl Comonad for File {
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

impl MonoBifunctor for File {
    type Meta = (String, u32);

    fn bimap<F, G>(self, meta_function: F, element_function: G) -> Self
    where
        F: FnOnce((String, u32)) -> (String, u32),
        G: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        let (path, rid) = meta_function((self.path, self.rid));
        Self::new(path, element_function(self.raw), rid)
    }
}

impl Semigroup for File {
    fn concat(self, other: Self) -> Self {
        Self {
            raw: concat_raw(self.raw, &other.raw),
            ..self
        }
    }
}

impl Monoid for File {
    fn empty() -> Self {
        Self::default()
    }
}

impl Group for File {
    fn invert(self) -> Self {
        Self {
            raw: reverse_raw(self.raw),
            ..self
        }
    }
}

impl PartialOrd for File {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.path == other.path && self.rid == other.rid)
            .then(|| compare_raw(&self.raw, &other.raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ap_keeps_path_and_rid() {
        let file = File::new("a.txt", b"abc".to_vec(), 3).ap(|raw| raw.into_iter().rev().collect());
        assert_eq!(file, File::new("a.txt", b"cba".to_vec(), 3));
    }

    #[test]
    fn from_path_starts_empty_and_closed() {
        let file = File::from_path("a.txt");
        assert!(file.raw().is_empty());
        assert_eq!(file.rid(), 0);
    }

    #[test]
    fn concat_keeps_receiver_metadata() {
        let joined = File::new("a", vec![1], 3).concat(File::new("b", vec![2], 4));
        assert_eq!(joined, File::new("a", vec![1, 2], 3));
    }

    #[rstest]
    #[case(File::new("a", vec![1], 1), File::new("a", vec![1, 1], 1), Some(Ordering::Less))]
    #[case(File::new("a", vec![2], 1), File::new("a", vec![1], 1), Some(Ordering::Greater))]
    #[case(File::new("a", vec![1], 1), File::new("b", vec![1], 1), None)]
    #[case(File::new("a", vec![1], 1), File::new("a", vec![1], 2), None)]
    fn comparison_requires_equal_metadata(
        #[case] left: File,
        #[case] right: File,
        #[case] expected: Option<Ordering>,
    ) {
        assert_eq!(left.partial_cmp(&right), expected);
    }

    #[test]
    fn with_path_only_moves_the_path() {
        let file = File::new("old", vec![7], 2).with_path("new".to_string());
        assert_eq!(file, File::new("new", vec![7], 2));
    }
}
