//! An HTTP response: a success or a failure over headers and body.

use std::cmp::Ordering;

use super::{Headers, RawContainer, compare_raw, concat_raw, reverse_raw};
use crate::Factorized;
use crate::typeclass::{
    Alt, Comonad, Group, MonoApplicative, MonoBifunctor, MonoFunctor, MonoMonad, Monoid, Plus,
    Semigroup,
};

/// The outcome of an HTTP exchange.
///
/// Every transformation (`map`, `chain`, `concat`, `invert`, `bimap`,
/// `extend`) applies to `Success` only; a `Failure` passes through
/// untouched. [`Alt::alt`] keeps the first `Success`.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::Alt;
/// use functional_io::types::{Headers, Response};
///
/// let response = Response::not_found(Headers::default(), b"missing".to_vec())
///     .alt(Response::ok(Headers::default(), b"found".to_vec()));
///
/// assert!(response.is_success());
/// assert_eq!(response.status(), Some(200));
/// assert_eq!(response.raw(), b"found");
/// ```
#[derive(Debug, Clone, Factorized)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Response {
    /// A 1xx or 2xx outcome.
    Success {
        /// Response headers, including the status.
        headers: Headers,
        /// Response body.
        raw: Vec<u8>,
    },
    /// Anything else.
    Failure {
        /// Response headers, including the status.
        headers: Headers,
        /// Response body, usually the error payload.
        raw: Vec<u8>,
    },
}

macro_rules! status_constructors {
    ($variant:ident: $($(#[$meta:meta])* $name:ident => $status:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(headers: Headers, raw: impl Into<Vec<u8>>) -> Self {
                Self::$variant {
                    headers: headers.with_status($status),
                    raw: raw.into(),
                }
            }
        )*
    };
}

impl Response {
    /// A success with the given headers and body.
    pub fn success(headers: Headers, raw: impl Into<Vec<u8>>) -> Self {
        Self::Success {
            headers,
            raw: raw.into(),
        }
    }

    /// A failure with the given headers and body.
    pub fn failure(headers: Headers, raw: impl Into<Vec<u8>>) -> Self {
        Self::Failure {
            headers,
            raw: raw.into(),
        }
    }

    status_constructors! {
        Success:
        /// `200 OK`
        ok => 200,
        /// `201 Created`
        created => 201,
        /// `202 Accepted`
        accepted => 202,
        /// `204 No Content`
        no_content => 204,
    }

    status_constructors! {
        Failure:
        /// `300 Multiple Choices`
        multiple_choice => 300,
        /// `301 Moved Permanently`
        moved_permanently => 301,
        /// `302 Found`
        found => 302,
        /// `304 Not Modified`
        not_modified => 304,
        /// `307 Temporary Redirect`
        temporary_redirect => 307,
        /// `308 Permanent Redirect`
        permanent_redirect => 308,
        /// `400 Bad Request`
        bad_request => 400,
        /// `401 Unauthorized`
        unauthorized => 401,
        /// `403 Forbidden`
        forbidden => 403,
        /// `404 Not Found`
        not_found => 404,
        /// `405 Method Not Allowed`
        method_not_allowed => 405,
        /// `406 Not Acceptable`
        not_acceptable => 406,
        /// `408 Request Timeout`
        request_timeout => 408,
        /// `409 Conflict`
        conflict => 409,
        /// `410 Gone`
        gone => 410,
        /// `418 I'm a teapot`
        im_a_teapot => 418,
        /// `500 Internal Server Error`
        internal_server_error => 500,
        /// `501 Not Implemented`
        not_implemented => 501,
        /// `502 Bad Gateway`
        bad_gateway => 502,
        /// `503 Service Unavailable`
        service_unavailable => 503,
        /// `504 Gateway Timeout`
        gateway_timeout => 504,
        /// `550 Permission Denied`
        permission_denied => 550,
    }

    /// The headers of either variant.
    pub const fn headers(&self) -> &Headers {
        match self {
            Self::Success { headers, .. } | Self::Failure { headers, .. } => headers,
        }
    }

    /// The body of either variant.
    pub fn raw(&self) -> &[u8] {
        match self {
            Self::Success { raw, .. } | Self::Failure { raw, .. } => raw,
        }
    }

    /// The status recorded in the headers.
    pub const fn status(&self) -> Option<u16> {
        self.headers().status()
    }

    /// Collapses both variants with the matching function.
    pub fn fold<T>(
        self,
        on_success: impl FnOnce(Headers, Vec<u8>) -> T,
        on_failure: impl FnOnce(Headers, Vec<u8>) -> T,
    ) -> T {
        match self {
            Self::Success { headers, raw } => on_success(headers, raw),
            Self::Failure { headers, raw } => on_failure(headers, raw),
        }
    }

    /// Converts into a `Result` of `(headers, body)` pairs.
    ///
    /// # Errors
    ///
    /// Returns the failure's headers and body as `Err`.
    pub fn into_result(self) -> Result<(Headers, Vec<u8>), (Headers, Vec<u8>)> {
        self.fold(|headers, raw| Ok((headers, raw)), |headers, raw| Err((headers, raw)))
    }

    fn on_success(self, function: impl FnOnce(Headers, Vec<u8>) -> Self) -> Self {
        match self {
            Self::Success { headers, raw } => function(headers, raw),
            failure @ Self::Failure { .. } => failure,
        }
    }
}

impl PartialEq for Response {
    fn eq(&self, other: &Self) -> bool {
        self.is_success() == other.is_success()
            && self.status() == other.status()
            && self.headers().url() == other.headers().url()
            && self.raw() == other.raw()
    }
}

impl Eq for Response {}

impl PartialOrd for Response {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.is_success() == other.is_success()
            && self.status() == other.status()
            && self.headers().url() == other.headers().url())
        .then(|| compare_raw(self.raw(), other.raw()))
    }
}

impl RawContainer for Response {
    fn raw(&self) -> &[u8] {
        Self::raw(self)
    }

    fn with_raw(self, raw: Vec<u8>) -> Self {
        match self {
            Self::Success { headers, .. } => Self::Success { headers, raw },
            Self::Failure { headers, .. } => Self::Failure { headers, raw },
        }
    }
}

impl MonoFunctor for Response {
    type Element = Vec<u8>;

    fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        self.on_success(|headers, raw| Self::success(headers, function(raw)))
    }
}

impl MonoApplicative for Response {
    fn ap<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        self.on_success(|headers, raw| Self::success(headers, function(raw)))
    }
}

impl MonoMonad for Response {
    fn of(element: Vec<u8>) -> Self {
        Self::success(Headers::default(), element)
    }

    fn chain<F>(self, function: F) -> Self
    where
        F: FnOnce(Vec<u8>) -> Self,
    {
        self.on_success(|_, raw| function(raw))
    }
}

impl Comonad for Response {
    fn extract(&self) -> Vec<u8> {
        self.raw().to_vec()
    }

    fn extend<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<u8>,
    {
        if self.is_failure() {
            return self;
        }
        let raw = function(&self);
        self.with_raw(raw)
    }
}

impl MonoBifunctor for Response {
    type Meta = Headers;

    fn bimap<F, G>(self, meta_function: F, element_function: G) -> Self
    where
        F: FnOnce(Headers) -> Headers,
        G: FnOnce(Vec<u8>) -> Vec<u8>,
    {
        self.on_success(|headers, raw| Self::success(meta_function(headers), element_function(raw)))
    }
}

impl Semigroup for Response {
    fn concat(self, other: Self) -> Self {
        self.on_success(|headers, raw| Self::success(headers, concat_raw(raw, other.raw())))
    }
}

impl Monoid for Response {
    fn empty() -> Self {
        Self::success(Headers::default(), Vec::new())
    }
}

impl Group for Response {
    fn invert(self) -> Self {
        self.on_success(|headers, raw| Self::success(headers, reverse_raw(raw)))
    }
}

impl Alt for Response {
    fn alt(self, alternative: Self) -> Self {
        match self {
            success @ Self::Success { .. } => success,
            Self::Failure { .. } => alternative,
        }
    }
}

impl Plus for Response {
    fn zero() -> Self {
        Self::failure(Headers::default(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn body(text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }

    #[rstest]
    #[case(Response::ok(Headers::default(), vec![]), 200, true)]
    #[case(Response::created(Headers::default(), vec![]), 201, true)]
    #[case(Response::no_content(Headers::default(), vec![]), 204, true)]
    #[case(Response::moved_permanently(Headers::default(), vec![]), 301, false)]
    #[case(Response::not_found(Headers::default(), vec![]), 404, false)]
    #[case(Response::im_a_teapot(Headers::default(), vec![]), 418, false)]
    #[case(Response::gateway_timeout(Headers::default(), vec![]), 504, false)]
    #[case(Response::permission_denied(Headers::default(), vec![]), 550, false)]
    fn status_constructors_pick_variant(
        #[case] response: Response,
        #[case] status: u16,
        #[case] success: bool,
    ) {
        assert_eq!(response.status(), Some(status));
        assert_eq!(response.is_success(), success);
    }

    #[test]
    fn status_overrides_existing_headers() {
        let headers = Headers::default().with_status(999).with("X-Trace", "1");
        let response = Response::ok(headers, vec![]);
        assert_eq!(response.status(), Some(200));
        assert_eq!(response.headers().get("x-trace"), Some("1"));
    }

    #[test]
    fn failure_ignores_transformations() {
        let failure = Response::bad_request(Headers::default(), body("oops"));
        let touched = failure
            .clone()
            .map(|_| body("changed"))
            .ap(|_| body("applied"))
            .chain(|_| Response::ok(Headers::default(), vec![]))
            .concat(Response::ok(Headers::default(), body("more")))
            .invert()
            .bimap(|headers| headers.with_status(200), |raw| raw)
            .extend(|_| body("extended"));
        assert_eq!(touched, failure);
    }

    #[test]
    fn ap_applies_to_success_and_keeps_headers() {
        let headers = Headers::default().with("X-Trace", "1");
        let response = Response::created(headers, body("id")).ap(|raw| [raw, body("=7")].concat());
        assert_eq!(response.raw(), b"id=7");
        assert_eq!(response.status(), Some(201));
        assert_eq!(response.headers().get("x-trace"), Some("1"));
    }

    #[test]
    fn success_transformations_apply() {
        let response = Response::ok(Headers::default(), body("ab"))
            .concat(Response::ok(Headers::default(), body("cd")))
            .invert();
        assert_eq!(response.raw(), b"dcba");
        assert_eq!(response.status(), Some(200));
    }

    #[rstest]
    #[case(
        Response::not_found(Headers::default(), vec![1]),
        Response::ok(Headers::default(), vec![2]),
        Response::ok(Headers::default(), vec![2])
    )]
    #[case(
        Response::ok(Headers::default(), vec![1]),
        Response::not_found(Headers::default(), vec![2]),
        Response::ok(Headers::default(), vec![1])
    )]
    #[case(
        Response::not_found(Headers::default(), vec![1]),
        Response::gone(Headers::default(), vec![2]),
        Response::gone(Headers::default(), vec![2])
    )]
    fn alt_keeps_first_success(
        #[case] first: Response,
        #[case] second: Response,
        #[case] expected: Response,
    ) {
        assert_eq!(first.alt(second), expected);
    }

    #[test]
    fn zero_is_alt_identity() {
        let response = Response::ok(Headers::default(), vec![3]);
        assert_eq!(Response::zero().alt(response.clone()), response);
        assert_eq!(response.clone().alt(Response::zero()), response);
    }

    #[test]
    fn equality_distinguishes_variants() {
        assert_ne!(
            Response::success(Headers::default(), vec![1]),
            Response::failure(Headers::default(), vec![1])
        );
    }

    #[test]
    fn fold_reaches_matching_branch() {
        let length = Response::forbidden(Headers::default(), body("no"))
            .fold(|_, _| 0, |_, raw| raw.len());
        assert_eq!(length, 2);
        assert!(Response::ok(Headers::default(), vec![]).into_result().is_ok());
    }

    #[test]
    fn display_uses_variant_tag() {
        let response = Response::success(Headers::default(), vec![1]);
        assert!(response.to_string().starts_with("Response.Success("));
    }
}
