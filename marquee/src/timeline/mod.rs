//! The timeline engine: effect records and deterministic scheduling.
//!
//! A [`Timeline`](engine::Timeline) is an owned value, not a global. The
//! caller registers effects up front (fire-and-forget) and then drives
//! evaluation by advancing sequence time monotonically.

/// Effect records.
pub mod effect;
/// Deterministic scheduling engine.
pub mod engine;
