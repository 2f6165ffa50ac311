use crate::{
    animation::ease::Ease,
    animation::tween::PropertyMap,
    foundation::core::{NodeId, Seconds},
    foundation::error::{MarqueeError, MarqueeResult},
};

/// Repetition mode of an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    /// Play the window `[start, start + duration)` once, then clamp.
    Once,
    /// Repeat indefinitely; the effect never completes on its own.
    Infinite {
        /// Mirror every second leg so the value oscillates base ↔ target.
        yoyo: bool,
    },
}

/// A side effect fired at an effect boundary.
///
/// Cues are data rather than closures: the engine can replay, inspect, and
/// cancel them without touching captured state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CueAction {
    /// Swap a node's text payload.
    SetText {
        /// Target node.
        node: NodeId,
        /// New text.
        text: String,
    },
    /// Flip a node's visibility.
    SetVisible {
        /// Target node.
        node: NodeId,
        /// New visibility.
        visible: bool,
    },
}

/// One scheduled visual-property transition.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Effect {
    /// Node whose properties are animated.
    pub target: NodeId,
    /// Explicit base values, applied at start time. `None` captures the
    /// node's current values instead.
    pub from: Option<PropertyMap>,
    /// Target values. May be empty for a pure hold or cue carrier.
    pub to: PropertyMap,
    /// Start offset from sequence start.
    pub start: Seconds,
    /// Window length. Zero means an instantaneous set.
    pub duration: Seconds,
    /// Easing curve applied to normalized progress.
    pub ease: Ease,
    /// Repetition mode.
    pub repeat: Repeat,
    /// Cue fired when the window opens.
    pub on_start: Option<CueAction>,
    /// Cue fired when a non-repeating window closes. Never fires for
    /// [`Repeat::Infinite`].
    pub on_complete: Option<CueAction>,
}

impl Effect {
    /// Animate `target` from its current values toward `to`.
    pub fn to(target: NodeId, to: PropertyMap, start: Seconds, duration: Seconds, ease: Ease) -> Self {
        Self {
            target,
            from: None,
            to,
            start,
            duration,
            ease,
            repeat: Repeat::Once,
            on_start: None,
            on_complete: None,
        }
    }

    /// Animate `target` from explicit base values toward `to`.
    pub fn from_to(
        target: NodeId,
        from: PropertyMap,
        to: PropertyMap,
        start: Seconds,
        duration: Seconds,
        ease: Ease,
    ) -> Self {
        Self {
            from: Some(from),
            ..Self::to(target, to, start, duration, ease)
        }
    }

    /// A window that animates nothing. Used to hold sequencing structure.
    pub fn hold(target: NodeId, start: Seconds, duration: Seconds) -> Self {
        Self::to(target, PropertyMap::new(), start, duration, Ease::Linear)
    }

    /// Instantaneously apply `to` at `start`.
    pub fn set(target: NodeId, to: PropertyMap, start: Seconds) -> Self {
        Self::to(target, to, start, Seconds::ZERO, Ease::Linear)
    }

    /// Attach a start cue.
    pub fn on_start(mut self, cue: CueAction) -> Self {
        self.on_start = Some(cue);
        self
    }

    /// Attach a completion cue.
    pub fn on_complete(mut self, cue: CueAction) -> Self {
        self.on_complete = Some(cue);
        self
    }

    /// Set the repetition mode.
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// End of the play window for non-repeating effects.
    pub fn end(&self) -> Seconds {
        Seconds(self.start.0 + self.duration.0)
    }

    /// Validate static invariants for this effect.
    pub fn validate(&self) -> MarqueeResult<()> {
        if !self.start.is_valid_offset() {
            return Err(MarqueeError::scheduling(format!(
                "effect start must be finite and >= 0, got {}",
                self.start.0
            )));
        }
        if !self.duration.is_valid_offset() {
            return Err(MarqueeError::scheduling(format!(
                "effect duration must be finite and >= 0, got {}",
                self.duration.0
            )));
        }
        if !self.to.is_finite() {
            return Err(MarqueeError::scheduling("effect target values must be finite"));
        }
        if let Some(from) = &self.from {
            if !from.is_finite() {
                return Err(MarqueeError::scheduling("effect base values must be finite"));
            }
        }
        if matches!(self.repeat, Repeat::Infinite { .. }) && self.duration.0 <= 0.0 {
            return Err(MarqueeError::scheduling(
                "repeating effect must have a positive duration",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/effect.rs"]
mod tests;
