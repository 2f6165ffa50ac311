//! Page-shell plumbing: scoped event subscriptions, the asset readiness
//! gate, and the mount/unmount lifecycle guard.

/// The asset readiness gate.
pub mod gate;
/// The mount/unmount lifecycle guard.
pub mod lifecycle;
/// Scoped event subscriptions.
pub mod subscriptions;
