//! HTTP metadata shared by [`Request`](super::Request) and
//! [`Response`](super::Response).

use std::collections::BTreeMap;
use std::fmt;

use crate::Factorized;
use crate::typeclass::{Monoid, Semigroup};

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Method {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// The wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Request line, status and header fields.
///
/// Field names are stored as given; lookups through [`Headers::get`] are
/// case-insensitive. Concatenation merges two header sets with the right
/// side winning on conflicts.
///
/// # Examples
///
/// ```rust
/// use functional_io::types::{Headers, Method};
///
/// let headers = Headers::default()
///     .with_method(Method::Post)
///     .with_url("https://example.com")
///     .with("Content-Type", "application/json");
///
/// assert_eq!(headers.method(), Some(Method::Post));
/// assert_eq!(headers.get("content-type"), Some("application/json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Factorized)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Headers {
    method: Option<Method>,
    url: Option<String>,
    status: Option<u16>,
    entries: BTreeMap<String, String>,
}

impl Headers {
    /// Sets the request method.
    #[must_use]
    pub fn with_method(self, method: Method) -> Self {
        Self {
            method: Some(method),
            ..self
        }
    }

    /// Sets the target URL.
    #[must_use]
    pub fn with_url(self, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..self
        }
    }

    /// Sets the response status.
    #[must_use]
    pub fn with_status(self, status: u16) -> Self {
        Self {
            status: Some(status),
            ..self
        }
    }

    /// Adds or replaces a header field.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.entries
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.entries.insert(name, value.into());
        self
    }

    /// Looks up a header field, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The `Content-Type` field.
    pub fn content_type(&self) -> Option<&str> {
        self.get("content-type")
    }

    /// The request method, if set.
    pub const fn method(&self) -> Option<Method> {
        self.method
    }

    /// The URL, if set.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The response status, if set.
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// All header fields in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Overlays `other` on top of `self`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let mut merged = Self {
            method: other.method.or(self.method),
            url: other.url.or(self.url),
            status: other.status.or(self.status),
            entries: self.entries,
        };
        for (name, value) in other.entries {
            merged = merged.with(name, value);
        }
        merged
    }
}

impl Semigroup for Headers {
    fn concat(self, other: Self) -> Self {
        self.merge(other)
    }
}

impl Monoid for Headers {
    fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Method::Get, "GET")]
    #[case(Method::Post, "POST")]
    #[case(Method::Put, "PUT")]
    #[case(Method::Delete, "DELETE")]
    fn method_displays_wire_name(#[case] method: Method, #[case] expected: &str) {
        assert_eq!(method.to_string(), expected);
    }

    #[test]
    fn with_replaces_regardless_of_case() {
        let headers = Headers::default()
            .with("content-type", "text/plain")
            .with("Content-Type", "application/json");
        assert_eq!(headers.entries().count(), 1);
        assert_eq!(headers.content_type(), Some("application/json"));
    }

    #[test]
    fn merge_prefers_right_side() {
        let left = Headers::default().with_url("a").with_status(200).with("X-A", "1");
        let right = Headers::default().with_status(404).with("X-B", "2");
        let merged = left.concat(right);

        assert_eq!(merged.url(), Some("a"));
        assert_eq!(merged.status(), Some(404));
        assert_eq!(merged.get("x-a"), Some("1"));
        assert_eq!(merged.get("x-b"), Some("2"));
    }

    #[test]
    fn empty_is_identity() {
        let headers = Headers::default().with_method(Method::Put);
        assert_eq!(headers.clone().concat(Headers::empty()), headers);
        assert_eq!(Headers::empty().concat(headers.clone()), headers);
    }
}
