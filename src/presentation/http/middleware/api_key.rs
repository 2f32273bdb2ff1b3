use std::sync::Arc;

use poem::{
    Endpoint, IntoResponse, Middleware, Request, Response, Result, http::StatusCode,
};

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Rejects requests that do not carry the shared secret in `X-API-KEY`.
///
/// Paths under `exempt_prefix` (the interactive docs) pass through
/// unchecked. When no key is configured every other request is answered
/// with 500, so a missing secret never silently opens the API. The header
/// must match byte for byte.
#[derive(Clone)]
pub struct ApiKeyGate {
    expected: Option<Arc<str>>,
    exempt_prefix: &'static str,
}

impl ApiKeyGate {
    pub fn new(expected: Option<String>, exempt_prefix: &'static str) -> Self {
        Self {
            expected: expected.map(Arc::from),
            exempt_prefix,
        }
    }
}

impl<E: Endpoint> Middleware<E> for ApiKeyGate {
    type Output = ApiKeyGateEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ApiKeyGateEndpoint {
            inner: ep,
            expected: self.expected.clone(),
            exempt_prefix: self.exempt_prefix,
        }
    }
}

pub struct ApiKeyGateEndpoint<E> {
    inner: E,
    expected: Option<Arc<str>>,
    exempt_prefix: &'static str,
}

impl<E: Endpoint> Endpoint for ApiKeyGateEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        if req.uri().path().starts_with(self.exempt_prefix) {
            return self.inner.call(req).await.map(IntoResponse::into_response);
        }

        let Some(expected) = self.expected.as_deref() else {
            return Ok(plain_text(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server ApiKey is not configured.",
            ));
        };

        let provided = req.headers().get(API_KEY_HEADER).map(|v| v.as_bytes());
        if provided != Some(expected.as_bytes()) {
            return Ok(plain_text(
                StatusCode::UNAUTHORIZED,
                "Missing or invalid API key.",
            ));
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

fn plain_text(status: StatusCode, body: &'static str) -> Response {
    Response::builder()
        .status(status)
        .content_type("text/plain; charset=utf-8")
        .body(body)
}
