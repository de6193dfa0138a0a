//! Prometheus metrics.
//!
//! Request metrics come from [`metrics_middleware`]; business events are
//! counted through the `track_*` helpers. Every helper is a no-op when
//! observability is disabled at runtime.

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::{Duration, Instant};

use crate::is_observability_enabled;

const DURATION_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

fn install_recorder() -> Option<PrometheusHandle> {
    let builder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            DURATION_BUCKETS,
        )
        .map_err(|e| tracing::warn!(error = %e, "Invalid histogram buckets"))
        .ok()?;

    builder
        .install_recorder()
        .map_err(|e| tracing::warn!(error = %e, "Failed to install Prometheus recorder"))
        .ok()
}

/// Router exposing `GET /metrics` in Prometheus text format.
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

/// Installs the recorder and serves it on `0.0.0.0:{port}` in the background.
///
/// Does nothing when observability is disabled. Bind failures are logged
/// and do not affect the API listener.
pub fn spawn_metrics_server(port: u16) {
    if !is_observability_enabled() {
        return;
    }
    let Some(handle) = install_recorder() else {
        return;
    };

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    tokio::spawn(async move {
        let addr = format!("0.0.0.0:{port}");
        match tokio::net::TcpListener::bind(&addr).await {
            Ok(listener) => {
                tracing::info!(%addr, "Metrics server listening");
                if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                    tracing::error!(error = %e, "Metrics server stopped");
                }
            }
            Err(e) => tracing::warn!(%addr, error = %e, "Failed to bind metrics listener"),
        }
    });
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    response
}

pub fn track_user_signed_up() {
    if !is_observability_enabled() {
        return;
    }
    counter!("users_signed_up_total").increment(1);
}

pub fn track_login_success(role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "status" => "success", "role" => role.to_string()).increment(1);
}

/// `reason` is a fixed label such as `invalid_credentials` or `inactive`.
pub fn track_login_failure(reason: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "status" => "failure", "reason" => reason.to_string())
        .increment(1);
}

pub fn track_jwt_issued() {
    if !is_observability_enabled() {
        return;
    }
    counter!("jwt_issued_total").increment(1);
}

/// `action` is `activate` or `deactivate`.
pub fn track_status_change(action: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_status_changes_total", "action" => action.to_string()).increment(1);
}
