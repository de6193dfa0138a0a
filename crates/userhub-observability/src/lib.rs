//! userhub Observability
//!
//! - Console logging, always on
//! - Rolling error/JSON log files and OpenTelemetry (OTLP) trace export
//! - Prometheus metrics with per-request and business counters
//! - A request logging middleware
//!
//! Everything except console logging and the request log is compiled only
//! with the `observability` feature (default). Without it the same function
//! names exist as no-ops. At runtime `OBSERVABILITY_ENABLED=false` turns the
//! optional parts off as well.
//!
//! # Examples
//!
//! ```no_run
//! use userhub_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
pub mod middleware;

#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;
pub use middleware::logging_middleware;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    metrics_middleware, spawn_metrics_server, track_jwt_issued, track_login_failure,
    track_login_success, track_status_change, track_user_signed_up,
};

/// Parses an `OBSERVABILITY_ENABLED` value. Unset means enabled.
pub fn parse_enabled(value: Option<&str>) -> bool {
    match value {
        Some(v) => {
            let v = v.trim().to_ascii_lowercase();
            v != "false" && v != "0" && v != "off"
        }
        None => true,
    }
}

/// Whether the optional observability parts are active.
#[cfg(feature = "observability")]
pub fn is_observability_enabled() -> bool {
    use std::sync::OnceLock;

    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| parse_enabled(std::env::var("OBSERVABILITY_ENABLED").ok().as_deref()))
}

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{extract::Request, middleware::Next, response::Response};

    pub fn is_observability_enabled() -> bool {
        false
    }

    /// Falls back to console logging.
    pub fn init_tracing() {
        crate::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn spawn_metrics_server(_port: u16) {}

    pub fn track_user_signed_up() {}
    pub fn track_login_success(_role: &str) {}
    pub fn track_login_failure(_reason: &str) {}
    pub fn track_jwt_issued() {}
    pub fn track_status_change(_action: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enabled() {
        assert!(parse_enabled(None));
        assert!(parse_enabled(Some("true")));
        assert!(parse_enabled(Some("1")));
        assert!(!parse_enabled(Some("false")));
        assert!(!parse_enabled(Some(" FALSE ")));
        assert!(!parse_enabled(Some("0")));
        assert!(!parse_enabled(Some("off")));
    }

    #[cfg(not(feature = "observability"))]
    #[tokio::test]
    async fn test_stubs_pass_requests_through() {
        use axum::{Router, body::Body, http::Request, http::StatusCode, middleware, routing::get};
        use tower::ServiceExt;

        assert!(!is_observability_enabled());
        track_login_failure("invalid_credentials");
        spawn_metrics_server(0);

        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn(metrics_middleware));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        shutdown_tracer().await;
    }
}
