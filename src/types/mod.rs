//! Domain values: immutable records around bytes and I/O metadata.
//!
//! | Type | Fields | Metadata |
//! |---|---|---|
//! | [`Buffer`] | `raw` | none |
//! | [`Resource`] | `raw`, `rid` | resource id |
//! | [`File`] | `path`, `raw`, `rid` | path and resource id |
//! | [`Directory`] | `path` | none |
//! | [`Url`] | `path` | none |
//! | [`Request`] | `headers`, `raw` | [`Headers`] |
//! | [`Response`] | `Success`/`Failure` of `headers`, `raw` | [`Headers`] |
//!
//! [`FileSystemCollection`] groups any of these locations into an ordered
//! list that can be traversed into a single [`Task`](crate::effect::Task).
//!
//! Every operation returns a new value. `map`, `chain` and `concat` act on
//! the payload and carry metadata through unchanged; only `bimap` alters
//! metadata. The monoid and group laws therefore hold on `raw` alone.
//!
//! Values carrying bytes implement [`RawContainer`], so any of them can
//! feed bytes to any other:
//!
//! ```rust
//! use functional_io::types::{Buffer, File, RawContainer};
//!
//! let file = File::from_path("notes.txt").append(&Buffer::new(b"hello".to_vec()));
//! assert_eq!(file.raw(), b"hello");
//! assert_eq!(file.path(), "notes.txt");
//! ```
//!
//! # Ordering
//!
//! Bytes order by length first, then element by element. Values with
//! metadata are only comparable when their metadata is equal;
//! `partial_cmp` returns `None` otherwise.

mod buffer;
mod collection;
mod file;
mod headers;
mod location;
mod request;
mod resource;
mod response;

use std::cmp::Ordering;

pub use buffer::Buffer;
pub use collection::FileSystemCollection;
pub use file::File;
pub use headers::{Headers, Method};
pub use location::{Directory, Url};
pub use request::Request;
pub use resource::Resource;
pub use response::Response;

/// A value that carries a byte payload.
pub trait RawContainer: Sized {
    /// The payload.
    fn raw(&self) -> &[u8];

    /// Replaces the payload, keeping everything else.
    #[must_use]
    fn with_raw(self, raw: Vec<u8>) -> Self;

    /// Appends the payload of any other container.
    #[must_use]
    fn append<C: RawContainer>(self, other: &C) -> Self {
        let mut raw = Vec::with_capacity(self.raw().len() + other.raw().len());
        raw.extend_from_slice(self.raw());
        raw.extend_from_slice(other.raw());
        self.with_raw(raw)
    }

    /// Copies the payload into a plain [`Buffer`].
    fn to_buffer(&self) -> Buffer {
        Buffer::new(self.raw().to_vec())
    }
}

/// A value addressed by a filesystem path or URL.
pub trait PathContainer: Sized {
    /// The path.
    fn path(&self) -> &str;

    /// Replaces the path, keeping everything else.
    #[must_use]
    fn with_path(self, path: String) -> Self;
}

/// Byte order shared by every payload: length first, then lexicographic.
pub(crate) fn compare_raw(left: &[u8], right: &[u8]) -> Ordering {
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

/// Joins two payloads into a fresh vector.
pub(crate) fn concat_raw(mut left: Vec<u8>, right: &[u8]) -> Vec<u8> {
    left.extend_from_slice(right);
    left
}

/// Reverses a payload in place and returns it.
pub(crate) fn reverse_raw(mut raw: Vec<u8>) -> Vec<u8> {
    raw.reverse();
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[], Ordering::Equal)]
    #[case(&[9], &[1, 1], Ordering::Less)]
    #[case(&[1, 2], &[1, 3], Ordering::Less)]
    #[case(&[2, 0], &[1, 9], Ordering::Greater)]
    #[case(&[4, 5, 6], &[4, 5, 6], Ordering::Equal)]
    fn compare_raw_orders_by_length_then_bytes(
        #[case] left: &[u8],
        #[case] right: &[u8],
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_raw(left, right), expected);
    }

    #[test]
    fn append_accepts_any_container() {
        let resource = Resource::new(vec![1], 7).append(&Buffer::new(vec![2, 3]));
        assert_eq!(resource, Resource::new(vec![1, 2, 3], 7));
        assert_eq!(resource.to_buffer(), Buffer::new(vec![1, 2, 3]));
    }
}
