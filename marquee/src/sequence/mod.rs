//! Scripted sequences composed on top of the timeline engine.

/// The brand-reveal sequence.
pub mod reveal;
