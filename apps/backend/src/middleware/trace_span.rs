//! Per-request tracing span.
//!
//! Opens a `request` span carrying `trace_id`, `method`, `path` and, for
//! `/matches/{match_id}/...` paths, `match_id`, so every event emitted by
//! services and repos inherits them. `organization_id` and `account_id` are
//! declared empty and filled in by the `CurrentScout` extractor once the
//! token is verified. Reads the trace id inserted by `RequestTrace`, which
//! must therefore wrap outside this layer:
//!
//! App::new()
//!     .wrap(StructuredLogger)
//!     .wrap(TraceSpan)
//!     .wrap(RequestTrace)

use std::future::{ready, Ready};
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use actix_web::HttpMessage;
use futures_util::future::LocalBoxFuture;
use tracing::field::{display, Empty};
use tracing::{info_span, Instrument, Span};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let method = req.method().clone();
        let path = req.path().to_string();

        let span: Span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %method,
            path = %path,
            match_id = Empty,
            organization_id = Empty,
            account_id = Empty,
        );
        if let Some(match_id) = match_id_from_path(&path) {
            span.record("match_id", display(match_id));
        }

        let fut = self.service.call(req).instrument(span);

        Box::pin(fut)
    }
}

/// The id segment following `matches`, when it parses as a UUID.
fn match_id_from_path(path: &str) -> Option<Uuid> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    while let Some(segment) = segments.next() {
        if segment == "matches" {
            return segments.next().and_then(|id| Uuid::parse_str(id).ok());
        }
    }
    None
}
