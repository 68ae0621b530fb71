use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::net::ToSocketAddrs;

use crate::audit::{AuditReport, Auditor};

/// Runs one audit cycle on the blocking thread pool.
///
/// The scan is synchronous, blocking filesystem I/O, so it must not run
/// on the async executor directly.
async fn run_audit(auditor: Arc<Auditor>) -> crate::audit::Result<AuditReport> {
    tokio::task::spawn_blocking(move || auditor.run())
        .await
        .expect("spawn_blocking panicked")
}

async fn render_report(State(auditor): State<Arc<Auditor>>) -> Response {
    match run_audit(auditor).await {
        Ok(report) => (axum::http::StatusCode::OK, report.to_string()).into_response(),
        Err(err) => {
            log::error!("Failed to run memory limit audit: {}", err);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "failed to run memory limit audit",
            )
                .into_response()
        }
    }
}

async fn export_report(State(auditor): State<Arc<Auditor>>) -> Response {
    match run_audit(auditor).await {
        Ok(report) => (axum::http::StatusCode::OK, Json(report)).into_response(),
        Err(err) => {
            log::error!("Failed to run memory limit audit: {}", err);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "failed to run memory limit audit",
            )
                .into_response()
        }
    }
}

/// Read-only HTTP surface for the audit.
///
/// Every request triggers one fresh scan cycle; no state is carried
/// between requests. `GET /audit` serves the plain-text report,
/// `GET /audit/json` the same data as JSON.
pub struct APIServer {
    router: axum::Router,
}

impl APIServer {
    pub async fn new(auditor: Arc<Auditor>) -> Self {
        let router = axum::Router::new()
            .route("/audit", get(render_report))
            .route("/audit/json", get(export_report))
            .with_state(auditor);
        Self { router }
    }

    pub async fn listen(self, addr: impl ToSocketAddrs) {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("TCP Listener bind");
        axum::serve(listener, self.router.into_make_service())
            .await
            .unwrap()
    }
}
