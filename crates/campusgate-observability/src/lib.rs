//! Campusgate Observability Module
//!
//! Provides configurable observability features including:
//! - Structured logging (console and rolling JSON files)
//! - Metrics collection via Prometheus, including guard decision counters
//! - HTTP request/response logging
//!
//! This module can be enabled or disabled at compile time via the `observability` feature flag.
//! At runtime, observability can be further controlled via the `OBSERVABILITY_ENABLED` environment variable.
//!
//! # Features
//!
//! - `observability` (default): Enables file logging and Prometheus metrics
//!
//! # Examples
//!
//! ```no_run
//! use campusgate_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

// Re-export PrometheusHandle type when observability is enabled
#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

// Public exports when observability is enabled
#[cfg(feature = "observability")]
pub use logging::{init_tracing, is_observability_enabled, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_app, metrics_middleware, track_guard_decision, track_view_as_switch,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Placeholder for the exporter handle when metrics are compiled out
    #[derive(Clone, Debug)]
    pub struct PrometheusHandle;

    /// No-op observability check when feature disabled
    pub fn is_observability_enabled() -> bool {
        false
    }

    /// Console-only logging when feature disabled
    pub fn init_tracing() {
        super::init_basic_console_logging();
    }

    /// No-op tracer shutdown when feature disabled
    pub async fn shutdown_tracer() {}

    /// Logging middleware still passes requests through untouched
    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// No-op metrics middleware when feature disabled
    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// No-op metrics initialization when feature disabled
    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn metrics_app(_handle: PrometheusHandle) -> Router {
        Router::new()
    }

    // No-op tracking functions
    pub fn track_guard_decision(_gate: &str, _outcome: &str) {}
    pub fn track_view_as_switch(_view_as: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
