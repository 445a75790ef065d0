use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for serializer activity.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct EventState {
    pub(crate) ops: EncodeOps,
    pub(crate) fields: BTreeMap<String, FieldCounters>,
}

///
/// EncodeOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EncodeOps {
    pub encode_calls: u64,
    pub encode_finished: u64,
    pub encodes_with_violations: u64,
    pub serializer_mismatches: u64,

    // Normalization
    pub empty_normalized: u64,
    pub markup_stripped: u64,

    pub violations_reported: u64,
}

///
/// FieldCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldCounters {
    pub encode_calls: u64,
    pub encodes_with_violations: u64,
    pub serializer_mismatches: u64,
    pub empty_normalized: u64,
    pub markup_stripped: u64,
    pub violations_reported: u64,
}

///
/// EventReport
/// Point-in-time snapshot of the event state.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    pub ops: EncodeOps,
    pub fields: BTreeMap<String, FieldCounters>,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        ops: m.ops.clone(),
        fields: m.fields.clone(),
    })
}
