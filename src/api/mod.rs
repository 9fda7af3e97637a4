use crate::error::{ErrorKind, SendError};
use crate::services::{SendEmailHandler, StoreBackedHandler};
use crate::storage::MessageStore;
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::response::{IntoResponse, Response};
use axum::{
    Router,
    routing::{get, post},
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod messages;
pub mod outbound;
pub mod schemas;

/// Shared state of one server instance: the active send handler and the
/// store behind the inspection endpoints.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<dyn SendEmailHandler>,
    pub store: MessageStore,
}

impl AppState {
    /// Default wiring: every accepted send is recorded in a fresh store.
    #[must_use]
    pub fn new() -> Self {
        let store = MessageStore::new();
        let handler: Arc<dyn SendEmailHandler> = Arc::new(StoreBackedHandler::new(store.clone()));
        Self { handler, store }
    }

    /// Swaps in a different send handler. The handler is fixed once the
    /// router is built, so this must happen before serving starts.
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn SendEmailHandler>) -> Self {
        self.handler = handler;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").field("store", &self.store).finish_non_exhaustive()
    }
}

/// Configures and returns the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/v2/email/outbound-emails", post(outbound::send_email))
        .route("/messages", get(messages::list_messages))
        .route("/messages/{id}", get(messages::get_message))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<tower_http::request_id::RequestId>()
                        .map(|id| id.header_value().to_str().unwrap_or_default())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %response.status().as_u16(),
                            "request completed"
                        );
                    },
                ),
        )
        .layer(SetRequestIdLayer::new(HeaderName::from_static("x-request-id"), MakeRequestUuid))
        .with_state(state)
}

// One failing request must not take the serving loop with it: a panic inside
// a handler becomes the InternalFailure kind.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    tracing::error!(%detail, "send handler panicked");
    SendError::new(ErrorKind::InternalFailure).into_response()
}
