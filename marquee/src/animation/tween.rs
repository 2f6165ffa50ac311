use crate::foundation::core::VisualProps;

/// Interpolation contract for animation value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

/// Sparse set of animatable channel values.
///
/// Channels left as `None` are not touched when the map is applied to a node,
/// so one effect can animate opacity while another owns scale.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyMap {
    /// Target opacity, if animated.
    pub opacity: Option<f64>,
    /// Target vertical offset, if animated.
    pub offset_y: Option<f64>,
    /// Target scale, if animated.
    pub scale: Option<f64>,
}

impl PropertyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opacity channel.
    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    /// Set the vertical-offset channel.
    pub fn offset_y(mut self, value: f64) -> Self {
        self.offset_y = Some(value);
        self
    }

    /// Set the scale channel.
    pub fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    /// Return `true` when no channel is set.
    pub fn is_empty(&self) -> bool {
        self.opacity.is_none() && self.offset_y.is_none() && self.scale.is_none()
    }

    /// Return `true` when every present channel value is finite.
    pub fn is_finite(&self) -> bool {
        [self.opacity, self.offset_y, self.scale]
            .into_iter()
            .flatten()
            .all(f64::is_finite)
    }

    /// Snapshot the channels present in `self` from a node's current state.
    ///
    /// Used by the engine to capture a tween's base values at start time.
    pub fn capture_base(&self, current: &VisualProps) -> PropertyMap {
        PropertyMap {
            opacity: self.opacity.map(|_| current.opacity),
            offset_y: self.offset_y.map(|_| current.offset_y),
            scale: self.scale.map(|_| current.scale),
        }
    }

    /// Return a copy of `self` with any channels present in `over` replaced.
    pub fn overlay(&self, over: &PropertyMap) -> PropertyMap {
        PropertyMap {
            opacity: over.opacity.or(self.opacity),
            offset_y: over.offset_y.or(self.offset_y),
            scale: over.scale.or(self.scale),
        }
    }

    /// Interpolate from `self` (the base) toward `to` with eased progress `p`.
    ///
    /// Only channels present in `to` are produced; a channel missing from the
    /// base jumps straight to its target value.
    pub fn lerp_toward(&self, to: &PropertyMap, p: f64) -> PropertyMap {
        fn channel(base: Option<f64>, to: Option<f64>, p: f64) -> Option<f64> {
            let to = to?;
            Some(Lerp::lerp(&base.unwrap_or(to), &to, p))
        }

        PropertyMap {
            opacity: channel(self.opacity, to.opacity, p),
            offset_y: channel(self.offset_y, to.offset_y, p),
            scale: channel(self.scale, to.scale, p),
        }
    }

    /// Write the present channels into a node's visual state.
    pub fn apply_to(&self, props: &mut VisualProps) {
        if let Some(v) = self.opacity {
            props.opacity = v;
        }
        if let Some(v) = self.offset_y {
            props.offset_y = v;
        }
        if let Some(v) = self.scale {
            props.scale = v;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
