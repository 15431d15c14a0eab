//! In-process webhook stubs for tests

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A request the stub received
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: &'static str,
    /// `(from, to)`: POSTs to `from` get a 302 pointing at `to`
    redirect: Option<(&'static str, &'static str)>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Handle to a running stub
pub struct WebhookStub {
    /// Base URL, e.g. `http://127.0.0.1:41234`
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl WebhookStub {
    /// Webhook URL for `path` on this stub
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().await.clone()
    }
}

/// Start a stub that answers every POST with `status` and `reply`
pub async fn spawn_webhook_stub(status: u16, reply: &'static str) -> WebhookStub {
    spawn_stub(status, reply, None).await
}

/// Start a stub that answers POSTs to `from` with `302 Location: to` and
/// body `moved`, and every other POST with `200 followed`
pub async fn spawn_redirecting_stub(from: &'static str, to: &'static str) -> WebhookStub {
    spawn_stub(200, "followed", Some((from, to))).await
}

async fn spawn_stub(
    status: u16,
    reply: &'static str,
    redirect: Option<(&'static str, &'static str)>,
) -> WebhookStub {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status: StatusCode::from_u16(status).unwrap(),
        reply,
        redirect,
        captured: Arc::clone(&captured),
    };

    let app = Router::new()
        .route("/*path", post(record))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    WebhookStub {
        base_url: format!("http://{}", addr),
        captured,
    }
}

async fn record(
    State(state): State<StubState>,
    uri: axum::http::Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = CapturedRequest {
        path: uri.path().to_string(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    let path = request.path.clone();
    state.captured.lock().await.push(request);

    match state.redirect {
        Some((from, to)) if path == from => {
            (StatusCode::FOUND, [(header::LOCATION, to)], "moved").into_response()
        }
        _ => (state.status, state.reply).into_response(),
    }
}

/// An address nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/hook", addr)
}
