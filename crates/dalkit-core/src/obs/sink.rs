//! Metrics sink boundary.
//!
//! This module is the only allowed bridge between serializer logic and the
//! global metrics state.
use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent<'a> {
    EncodeStart { field: &'a str },
    EncodeFinish { field: &'a str, violations: usize },
    EmptyNormalized { field: &'a str },
    MarkupStripped { field: &'a str },
    ViolationsReported { field: &'a str, count: usize },
    SerializerMismatch { field: &'a str },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent<'_>);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into global metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent<'_>) {
        metrics::with_state_mut(|m| match event {
            MetricsEvent::EncodeStart { field } => {
                m.ops.encode_calls = m.ops.encode_calls.saturating_add(1);
                let entry = m.fields.entry(field.to_string()).or_default();
                entry.encode_calls = entry.encode_calls.saturating_add(1);
            }

            MetricsEvent::EncodeFinish { field, violations } => {
                m.ops.encode_finished = m.ops.encode_finished.saturating_add(1);
                if violations > 0 {
                    m.ops.encodes_with_violations = m.ops.encodes_with_violations.saturating_add(1);
                    let entry = m.fields.entry(field.to_string()).or_default();
                    entry.encodes_with_violations = entry.encodes_with_violations.saturating_add(1);
                }
            }

            MetricsEvent::EmptyNormalized { field } => {
                m.ops.empty_normalized = m.ops.empty_normalized.saturating_add(1);
                let entry = m.fields.entry(field.to_string()).or_default();
                entry.empty_normalized = entry.empty_normalized.saturating_add(1);
            }

            MetricsEvent::MarkupStripped { field } => {
                m.ops.markup_stripped = m.ops.markup_stripped.saturating_add(1);
                let entry = m.fields.entry(field.to_string()).or_default();
                entry.markup_stripped = entry.markup_stripped.saturating_add(1);
            }

            MetricsEvent::ViolationsReported { field, count } => {
                let count = u64::try_from(count).unwrap_or(u64::MAX);
                m.ops.violations_reported = m.ops.violations_reported.saturating_add(count);
                let entry = m.fields.entry(field.to_string()).or_default();
                entry.violations_reported = entry.violations_reported.saturating_add(count);
            }

            MetricsEvent::SerializerMismatch { field } => {
                m.ops.serializer_mismatches = m.ops.serializer_mismatches.saturating_add(1);
                let entry = m.fields.entry(field.to_string()).or_default();
                entry.serializer_mismatches = entry.serializer_mismatches.saturating_add(1);
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent<'_>) {
    // clone out first so a sink may itself record without a re-borrow
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current metrics state.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CapturingSink {
        events: RefCell<Vec<String>>,
    }

    impl MetricsSink for CapturingSink {
        fn record(&self, event: MetricsEvent<'_>) {
            self.events.borrow_mut().push(format!("{event:?}"));
        }
    }

    #[test]
    fn global_sink_counts_per_field() {
        metrics_reset_all();

        record(MetricsEvent::EncodeStart { field: "title" });
        record(MetricsEvent::EncodeStart { field: "title" });
        record(MetricsEvent::MarkupStripped { field: "title" });
        record(MetricsEvent::ViolationsReported {
            field: "note",
            count: 3,
        });

        let report = metrics_report();
        assert_eq!(report.ops.encode_calls, 2);
        assert_eq!(report.ops.markup_stripped, 1);
        assert_eq!(report.ops.violations_reported, 3);
        assert_eq!(report.fields["title"].encode_calls, 2);
        assert_eq!(report.fields["note"].violations_reported, 3);

        metrics_reset_all();
        assert_eq!(metrics_report().ops, metrics::EncodeOps::default());
    }

    #[test]
    fn override_sink_is_scoped() {
        metrics_reset_all();
        let sink = Rc::new(CapturingSink::default());

        with_metrics_sink(sink.clone(), || {
            record(MetricsEvent::SerializerMismatch { field: "stock" });
        });
        record(MetricsEvent::SerializerMismatch { field: "stock" });

        assert_eq!(sink.events.borrow().len(), 1);
        assert_eq!(metrics_report().ops.serializer_mismatches, 1);
        assert_eq!(metrics_report().fields["stock"].serializer_mismatches, 1);
    }

    #[test]
    fn finish_counts_encodes_with_violations() {
        metrics_reset_all();

        record(MetricsEvent::EncodeFinish {
            field: "title",
            violations: 2,
        });
        record(MetricsEvent::EncodeFinish {
            field: "title",
            violations: 0,
        });
        record(MetricsEvent::EncodeFinish {
            field: "note",
            violations: 0,
        });

        let report = metrics_report();
        assert_eq!(report.ops.encode_finished, 3);
        assert_eq!(report.ops.encodes_with_violations, 1);
        assert_eq!(report.fields["title"].encodes_with_violations, 1);
        assert!(!report.fields.contains_key("note"));
    }
}
