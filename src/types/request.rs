//! An outgoing HTTP request.

use std::cmp::Ordering;

use super::{Buffer, Headers, Method, RawContainer, compare_raw, concat_raw, reverse_raw};
use crate::Factorized;
use crate::typeclass::{
    Comonad, Group, MonoApplicative, MonoBifunctor, MonoFunctor, MonoMonad, Monoid,
    Semigroup,
};

const JSON: &str = "application/json";

/// Headers plus a body.
///
/// Two requests are equal when their status, URL and body match; method
/// and other header fields are not compared.
///
/// # Examples
///
/// ```rust
/// use functional_io::types::{Buffer, Method, Request};
///
/// let request = Request::post("https://example.com", Buffer::new(b"{}".to_vec()));
/// assert_eq!(request.headers().method(), Some(Method::Post));
/// assert_eq!(request.headers().content_type(), Some("application/json"));
/// assert_eq!(request.raw(), b"{}");
/// ```
#[derive(Debug, Clone, Default, Factorized)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    headers: Headers,
    raw: Vec<u8>,
}

impl Request {
    /// Creates a request.
    pub fn new(headers: Headers, raw: impl Into<Vec<u8>>) -> Self {
        Self {
            headers,
            raw: raw.into(),
        }
    }

    /// `GET url` with no body.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Headers::default().with_method(Method::Get).with_url(url), Vec::new())
    }

    /// `DELETE url` with no body.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(
            Headers::default().with_method(Method::Delete).with_url(url),
            Vec::new(),
        )
    }

    /// `POST url` with a JSON body.
    pub fn post(url: impl Into<String>, body: Buffer) -> Self {
        Self::with_json_body(Method::Post, url.into(), body)
    }

    /// `PUT url` with a JSON body.
    pub fn put(url: impl Into<String>, body: Buffer) -> Self {
        Self::with_json_body(Method::Put, url.into(), body)
    }

    fn with_json_body(method: Method, url: String, body: Buffer) -> Self {
        let headers = Headers::default()
            .with_method(method)
            .with_url(url)
            .with("Content-Type", JSON);
        Self::new(headers, body.into_raw())
    }

    /// The headers.
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// The body.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

impl Request {
    /// Status and URL are the only header fields that take part in
    /// equality and ordering.
    fn same_target(&self, other: &Self) -> bool {
        self.headers.status() == other.headers.status()
            && self.headers.url() == other.headers.url()
    }
}

impl PartialEq for Request {
    fn eq(&self, other: &Self) -> bool {
        self.same_target(other) && self.raw == other.raw
    }
}

impl Eq for Request {}

impl PartialOrd for Request {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_target(other).then(|| compare_raw(&self.raw, &other.raw))
    }
}

impl RawContainer for Request {
    fn raw(&self) -> &[u8] {
        &self.raw
    }

    fn with_raw(self, raw: Vec<u8>) -> Self {
        Self { raw, ..self }
    }
}

impl MonoFunctor for Request {
    type Element = Vec<u8>;

    fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        Self::new(self.headers, function(self.raw))
    }
}

impl MonoApplicative for Request {
    fn ap<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        Self::new(self.headers, function(self.raw))
    }
}

impl MonoMonad for Request {
    fn of(element: Vec<u8>) -> Self {
        Self::new(Headers::default(), element)
    }

    fn chain<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Self,
    {
        function(self.raw)
    }
}

impl Comonad for Request {
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

impl MonoBifunctor for Request {
    type Meta = Headers;

    fn bimap<F, G>(self, meta_function: F, element_function: G) -> Self
    where
        F: FnOnce(Headers) -> Headers,
        G: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        Self::new(meta_function(self.headers), element_function(self.raw))
    }
}

impl Semigroup for Request {
    fn concat(self, other: Self) -> Self {
        Self::new(self.headers, concat_raw(self.raw, &other.raw))
    }
}

impl Monoid for Request {
    fn empty() -> Self {
        Self::default()
    }
}

impl Group for Request {
    fn invert(self) -> Self {
        Self::new(self.headers, reverse_raw(self.raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ap_keeps_headers() {
        let request = Request::post("https://a", Buffer::new(b"{}".to_vec()))
            .ap(|raw| [b"[".to_vec(), raw, b"]".to_vec()].concat());
        assert_eq!(request.raw(), b"[{}]");
        assert_eq!(request.headers().method(), Some(Method::Post));
        assert_eq!(request.headers().content_type(), Some(JSON));
    }

    #[rstest]
    #[case(Request::get("https://a"), Method::Get)]
    #[case(Request::delete("https://a"), Method::Delete)]
    fn bodiless_constructors(#[case] request: Request, #[case] method: Method) {
        assert_eq!(request.headers().method(), Some(method));
        assert_eq!(request.headers().url(), Some("https://a"));
        assert!(request.raw().is_empty());
        assert_eq!(request.headers().content_type(), None);
    }

    #[test]
    fn put_sets_json_content_type() {
        let request = Request::put("https://a", Buffer::new(b"[]".to_vec()));
        assert_eq!(request.headers().content_type(), Some(JSON));
    }

    #[test]
    fn equality_ignores_method() {
        assert_eq!(Request::get("https://a"), Request::delete("https://a"));
        assert_ne!(Request::get("https://a"), Request::get("https://b"));
    }

    #[test]
    fn ordering_needs_the_same_target() {
        let short = Request::post("https://a", Buffer::new(vec![1]));
        let long = Request::post("https://a", Buffer::new(vec![1, 2]));
        assert!(short < long);
        assert_eq!(Request::get("https://a").partial_cmp(&Request::get("https://b")), None);
        let failed = Request::get("https://a").map_meta(|headers| headers.with_status(404));
        assert_eq!(Request::get("https://a").partial_cmp(&failed), None);
    }

    #[rstest]
    #[case(Request::get("https://a"), Request::delete("https://a"))]
    #[case(
        Request::post("https://a", Buffer::new(b"{}".to_vec())),
        Request::put("https://a", Buffer::new(b"{}".to_vec()))
    )]
    #[case(
        Request::get("https://a"),
        Request::get("https://a").map_meta(|headers| headers.with("X-Trace", "1"))
    )]
    fn equal_requests_compare_equal(#[case] left: Request, #[case] right: Request) {
        assert_eq!(left, right);
        assert_eq!(left.partial_cmp(&right), Some(Ordering::Equal));
        assert!(left <= right && right <= left);
    }

    #[test]
    fn bimap_rewrites_headers() {
        let request = Request::get("https://a").bimap(|headers| headers.with_url("https://b"), |raw| raw);
        assert_eq!(request.headers().url(), Some("https://b"));
    }

    #[test]
    fn concat_keeps_receiver_headers() {
        let joined = Request::post("https://a", Buffer::new(vec![1]))
            .concat(Request::post("https://b", Buffer::new(vec![2])));
        assert_eq!(joined.headers().url(), Some("https://a"));
        assert_eq!(joined.raw(), &[1, 2]);
    }
}
