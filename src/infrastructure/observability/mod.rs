//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use metrics::{init_metrics, metrics_handler, record_http_request, PrometheusMetrics};
