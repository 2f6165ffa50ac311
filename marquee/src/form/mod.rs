//! Local UI state for the contact page. No backend: submission is a stub
//! that logs and resets.

/// Contact-page form state.
pub mod contact;
