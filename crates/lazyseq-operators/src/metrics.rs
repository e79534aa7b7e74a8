//! Tracing hooks for terminal operations.
//!
//! Exhaustion events are emitted by `lazyseq_core::State` itself; this module
//! covers the consumers that drain a whole chain.

#[cfg(feature = "tracing")]
pub fn emit_consumed(op: &'static str, consumed: usize) {
    tracing::trace!(op, consumed, "terminal operation finished");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_consumed(_op: &'static str, _consumed: usize) { /* no-op */
}
