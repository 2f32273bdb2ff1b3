use std::time::Instant;

use poem::{Endpoint, Middleware, Request, Response, Result};
use tracing::info;

/// Logs method, path, final status and latency of every request.
///
/// The inner endpoint is driven through [`Endpoint::get_response`], so errors
/// raised downstream are logged with the status they render to. The response
/// itself is passed through untouched.
pub struct RequestLogger;

impl<E: Endpoint> Middleware<E> for RequestLogger {
    type Output = RequestLoggerEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequestLoggerEndpoint { inner: ep }
    }
}

pub struct RequestLoggerEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for RequestLoggerEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let response = self.inner.get_response(req).await;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let status = response.status().as_u16();
        info!(
            %method,
            %path,
            status,
            elapsed_ms,
            "HTTP {method} {path} => {status} in {elapsed_ms}ms"
        );

        Ok(response)
    }
}
