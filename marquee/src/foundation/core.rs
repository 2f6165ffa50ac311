use crate::foundation::error::{MarqueeError, MarqueeResult};

/// A point in sequence time, in seconds from sequence start (t = 0).
///
/// Sequence time is abstract: the caller owns the clock and maps it to wall
/// time (or to a test schedule) however it likes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize,
)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Sequence start.
    pub const ZERO: Self = Seconds(0.0);

    /// Create a validated offset (finite and non-negative).
    pub fn new(secs: f64) -> MarqueeResult<Self> {
        let s = Self(secs);
        if !s.is_valid_offset() {
            return Err(MarqueeError::validation(format!(
                "time offset must be finite and >= 0, got {secs}"
            )));
        }
        Ok(s)
    }

    /// Return `true` when the value is finite and non-negative.
    pub fn is_valid_offset(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

/// Identifier of a node in a [`Stage`](crate::scene::node::Stage) arena.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

/// Identifier of a scheduled effect, unique per timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EffectId(pub u64);

/// Animatable visual state of one stage node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualProps {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset from the node's resting position, positive is down.
    pub offset_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Visibility toggle, flipped by cues rather than tweened.
    pub visible: bool,
}

impl Default for VisualProps {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
            scale: 1.0,
            visible: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
