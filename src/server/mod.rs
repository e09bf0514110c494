//! HTTP server module.
//!
//! A single fallback handler serves every path: GET answers with a usage
//! hint, POST runs the validation pipeline and dispatches a toast. All
//! outcomes are wrapped in the uniform [`ResponseEnvelope`].

pub mod envelope;

pub use envelope::ResponseEnvelope;

use std::borrow::Cow;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::dispatch::Dispatcher;
use crate::errors::{AppError, AppResult};
use crate::payload::{validate, ValidationOutcome};
use envelope::respond;

const USAGE_HINT: &str = "Send a Post with a title and a message in a json format";

/// Shared request-handling state. The dispatcher is read-only after
/// startup, so concurrent requests need no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

/// Build the router. Every path hits the same handler; routing happens on
/// the method alone.
pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .fallback(handle)
        .with_state(AppState { dispatcher })
}

/// Serve until the process receives an interrupt.
pub async fn run(listener: TcpListener, dispatcher: Arc<Dispatcher>) -> AppResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "listening");
    }

    axum::serve(listener, router(dispatcher).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::server_with_source("server failed", e))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("interrupt received, shutting down");
    }
}

async fn handle(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    match method {
        Method::GET => respond(StatusCode::OK, ResponseEnvelope::ok(USAGE_HINT)),
        Method::POST => handle_post(&state, uri.path(), &body).await,
        other => respond(
            StatusCode::NOT_IMPLEMENTED,
            ResponseEnvelope::err(format!("Unsupported method ('{other}')")),
        ),
    }
}

async fn handle_post(state: &AppState, path: &str, body: &Bytes) -> Response {
    if body.is_empty() {
        // Kept at 200 for wire compatibility with existing senders, unlike
        // the other invalid-input cases.
        return respond(
            StatusCode::OK,
            ResponseEnvelope::err(format!("POST request for {path} . Please send a body")),
        );
    }

    let text: Cow<'_, str> = match std::str::from_utf8(body) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            // Surface the malformed input to the operator as a toast, then
            // keep going on the lossy decoding.
            warn!(%path, "request body is not valid UTF-8");
            state
                .dispatcher
                .dispatch("ForwardNotifier Receiver Error:", "invalid characters")
                .await;
            String::from_utf8_lossy(body)
        }
    };

    match validate(&text) {
        ValidationOutcome::Valid(request) => {
            debug!(title = %request.title, "dispatching notification");
            state.dispatcher.dispatch(&request.title, &request.message).await;
            respond(StatusCode::OK, ResponseEnvelope::ok("Sent!"))
        }
        ValidationOutcome::Invalid(reason) => {
            debug!(%reason, "rejecting request");
            respond(StatusCode::BAD_REQUEST, ResponseEnvelope::err(reason))
        }
    }
}
