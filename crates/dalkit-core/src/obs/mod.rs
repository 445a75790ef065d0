//! Observability: serializer counters and the sink abstraction they flow
//! through.
//!
//! Serializer logic MUST NOT touch `obs::metrics` directly; every
//! instrumentation point emits a `MetricsEvent` via `sink::record`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EncodeOps, EventReport, FieldCounters};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
