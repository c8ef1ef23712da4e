//! Network collaborator.
//!
//! The library does not ship an HTTP client. Callers inject one through
//! [`Transport`], and [`fetch`] turns a [`Request`] into a deferred
//! [`Task<Response>`](Task).
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use futures::FutureExt;
//! use functional_io::effect::TaskError;
//! use functional_io::net::{self, Transport, TransportResponse};
//! use functional_io::types::Request;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let transport: Arc<dyn Transport> = Arc::new(|_request: Request| {
//!     async { Ok::<_, TaskError>(TransportResponse::new(200, b"pong".to_vec())) }.boxed()
//! });
//!
//! let response = net::fetch(transport, Request::get("https://example.com/ping"))
//!     .run_result()
//!     .await
//!     .unwrap();
//!
//! assert!(response.is_success());
//! assert_eq!(response.headers().url(), Some("https://example.com/ping"));
//! # });
//! ```

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::effect::{Task, TaskError};
use crate::types::{Headers, Request, Response};

/// What a [`Transport`] hands back for one exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Header fields as received.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// A response with no header fields.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Adds a header field.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Sends requests over the wire.
pub trait Transport: Send + Sync {
    /// Performs one request.
    ///
    /// Errors are for exchanges that produced no HTTP response at all; an
    /// error status is still `Ok`.
    fn send(&self, request: Request) -> BoxFuture<'static, Result<TransportResponse, TaskError>>;
}

impl<F> Transport for F
where
    F: Fn(Request) -> BoxFuture<'static, Result<TransportResponse, TaskError>> + Send + Sync,
{
    fn send(&self, request: Request) -> BoxFuture<'static, Result<TransportResponse, TaskError>> {
        self(request)
    }
}

/// Performs `request` through `transport` when the task runs.
///
/// Statuses below 300 settle as [`Response::Success`], everything else as
/// [`Response::Failure`]. The response headers carry the request URL, the
/// status, and the received fields.
pub fn fetch(transport: Arc<dyn Transport>, request: Request) -> Task<Response> {
    Task::wrap(move || async move {
        let method = request.headers().method().unwrap_or_default();
        let url = request.headers().url().map(str::to_string);
        tracing::debug!(%method, url = url.as_deref(), "net.fetch");

        let received = transport.send(request).await?;
        tracing::debug!(status = received.status, bytes = received.body.len(), "net.fetch settled");
        Ok::<_, TaskError>(into_response(url, received))
    })
    .named("fetch")
}

fn into_response(url: Option<String>, received: TransportResponse) -> Response {
    let base = url.map_or_else(Headers::default, |url| Headers::default().with_url(url));
    let headers = received
        .headers
        .into_iter()
        .fold(base, |headers, (name, value)| headers.with(name, value))
        .with_status(received.status);

    if received.status < 300 {
        Response::success(headers, received.body)
    } else {
        Response::failure(headers, received.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Buffer;
    use futures::FutureExt;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn answering(status: u16) -> Arc<dyn Transport> {
        Arc::new(move |request: Request| {
            let body = request.raw().to_vec();
            async move {
                Ok::<_, TaskError>(
                    TransportResponse::new(status, body).with_header("Content-Type", "text/plain"),
                )
            }
            .boxed()
        })
    }

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(299, true)]
    #[case(300, false)]
    #[case(404, false)]
    #[case(500, false)]
    #[tokio::test]
    async fn status_picks_variant(#[case] status: u16, #[case] success: bool) {
        let response = fetch(answering(status), Request::get("https://a"))
            .run_result()
            .await
            .unwrap();
        assert_eq!(response.is_success(), success);
        assert_eq!(response.status(), Some(status));
        assert_eq!(response.headers().content_type(), Some("text/plain"));
    }

    #[tokio::test]
    async fn transport_errors_become_left() {
        let transport: Arc<dyn Transport> = Arc::new(|_: Request| {
            async { Err::<TransportResponse, _>(TaskError::from("connection refused")) }.boxed()
        });
        let outcome = fetch(transport, Request::get("https://a")).run_result().await;
        assert_eq!(outcome, Err(TaskError::from("connection refused")));
    }

    #[tokio::test]
    async fn body_reaches_transport_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let transport: Arc<dyn Transport> = Arc::new(move |request: Request| {
            counter.fetch_add(1, Ordering::SeqCst);
            let body = request.raw().to_vec();
            async move { Ok::<_, TaskError>(TransportResponse::new(201, body)) }.boxed()
        });

        let task = fetch(transport, Request::post("https://a", Buffer::new(b"{}".to_vec())));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let first = task.run_result().await.unwrap();
        let second = task.run_result().await.unwrap();
        assert_eq!(first.raw(), b"{}");
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
