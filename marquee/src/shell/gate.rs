use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    foundation::core::Seconds,
    foundation::error::MarqueeResult,
    shell::subscriptions::{EventBus, Subscription, UiEvent},
};

/// Gate that delays the initial render until fonts are ready or a timeout
/// elapses, whichever comes first.
///
/// The gate is a pure latch against sequence time: [`poll`](AssetGate::poll)
/// never blocks, and once open the gate stays open.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetGate {
    deadline: Seconds,
    fonts_ready: bool,
    open: bool,
}

impl AssetGate {
    /// How long to wait for font events before rendering anyway.
    pub const DEFAULT_TIMEOUT: f64 = 3.0;
    /// Short delay used when the host has no font events at all.
    pub const FALLBACK_DELAY: f64 = 0.1;

    /// Create a gate with an explicit timeout.
    pub fn new(timeout: Seconds) -> MarqueeResult<Self> {
        let deadline = Seconds::new(timeout.0)?;
        Ok(Self {
            deadline,
            fonts_ready: false,
            open: false,
        })
    }

    /// Gate with the standard font-loading timeout.
    pub fn with_default_timeout() -> Self {
        Self {
            deadline: Seconds(Self::DEFAULT_TIMEOUT),
            fonts_ready: false,
            open: false,
        }
    }

    /// Gate for hosts without font events: opens after a short fixed delay.
    pub fn without_font_events() -> Self {
        Self {
            deadline: Seconds(Self::FALLBACK_DELAY),
            fonts_ready: false,
            open: false,
        }
    }

    /// Record that the host finished loading fonts.
    pub fn note_fonts_ready(&mut self) {
        self.fonts_ready = true;
    }

    /// Advance the gate to time `t`; returns `true` once it is open.
    pub fn poll(&mut self, t: Seconds) -> bool {
        if !self.open && (self.fonts_ready || t.0 >= self.deadline.0) {
            self.open = true;
            tracing::debug!(
                fonts_ready = self.fonts_ready,
                at = t.0,
                "asset gate opened"
            );
        }
        self.open
    }

    /// Return `true` once the gate has opened.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Wire the gate to font events on the shell bus. The returned guard
    /// keeps the wiring alive; dropping it detaches the gate.
    pub fn attach(gate: &Rc<RefCell<AssetGate>>, bus: &EventBus) -> Subscription {
        let weak = Rc::downgrade(gate);
        bus.subscribe(move |event| {
            if let UiEvent::FontsReady = event {
                if let Some(gate) = weak.upgrade() {
                    gate.borrow_mut().note_fonts_ready();
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/gate.rs"]
mod tests;
