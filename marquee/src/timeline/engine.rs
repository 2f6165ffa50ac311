use smallvec::SmallVec;

use crate::{
    animation::tween::PropertyMap,
    foundation::core::{EffectId, NodeId, Seconds},
    foundation::error::{MarqueeError, MarqueeResult},
    scene::node::Stage,
    timeline::effect::{CueAction, Effect, Repeat},
};

/// Boundary kind used during the event sweep.
const EVENT_START: u8 = 0;
const EVENT_COMPLETE: u8 = 1;

#[derive(Clone, Debug)]
struct Slot {
    id: EffectId,
    effect: Effect,
    /// Base values captured when the window opened.
    base: PropertyMap,
    started: bool,
    completed: bool,
}

/// Deterministic effect scheduler for one sequence instance.
///
/// Evaluation is pure time-based dispatch on the caller's thread: scheduling
/// registers effects, [`advance_to`](Timeline::advance_to) replays every
/// boundary between the previous and the new time in chronological order, and
/// [`kill`](Timeline::kill) cancels everything at once. When boundary times
/// tie, registration order wins; within one effect, start precedes
/// completion.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    slots: Vec<Slot>,
    next_id: u64,
    now: Seconds,
    killed: bool,
}

impl Timeline {
    /// Create an empty timeline at t = 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect. Fire-and-forget: nothing runs until time advances.
    ///
    /// A malformed effect is rejected with [`MarqueeError::Scheduling`];
    /// cosmetic callers downgrade that to a warning and move on.
    pub fn schedule(&mut self, effect: Effect) -> MarqueeResult<EffectId> {
        effect.validate()?;
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            effect,
            base: PropertyMap::new(),
            started: false,
            completed: false,
        });
        Ok(id)
    }

    /// Expand one template effect over a batch of targets with a fixed
    /// per-item start delay, preserving batch order.
    ///
    /// Cues on the template are cloned verbatim, so templates carrying cues
    /// that name a specific node are almost never what a batch wants.
    pub fn schedule_staggered(
        &mut self,
        targets: &[NodeId],
        template: &Effect,
        stagger: Seconds,
    ) -> MarqueeResult<Vec<EffectId>> {
        if !stagger.is_valid_offset() {
            return Err(MarqueeError::scheduling(format!(
                "stagger must be finite and >= 0, got {}",
                stagger.0
            )));
        }
        let mut ids = Vec::with_capacity(targets.len());
        for (i, &target) in targets.iter().enumerate() {
            let mut effect = template.clone();
            effect.target = target;
            effect.start = Seconds(template.start.0 + i as f64 * stagger.0);
            ids.push(self.schedule(effect)?);
        }
        Ok(ids)
    }

    /// Advance sequence time to `t`, applying every boundary and every active
    /// interpolation to `stage`.
    ///
    /// Time is monotonic: advancing backwards is an evaluation error. After
    /// [`kill`](Timeline::kill) this is a no-op.
    pub fn advance_to(&mut self, t: Seconds, stage: &mut Stage) -> MarqueeResult<()> {
        if self.killed {
            return Ok(());
        }
        if !t.0.is_finite() {
            return Err(MarqueeError::evaluation("advance target must be finite"));
        }
        if t.0 < self.now.0 {
            return Err(MarqueeError::evaluation(format!(
                "timeline cannot advance backwards ({} -> {})",
                self.now.0, t.0
            )));
        }

        // Sweep every boundary due at or before `t`, in (time, registration,
        // start-before-complete) order. Started/completed flags make the
        // sweep idempotent across calls, so step size never changes what
        // fires or in what order.
        let mut events: SmallVec<[(f64, u64, u8, usize); 16]> = SmallVec::new();
        for (idx, slot) in self.slots.iter().enumerate() {
            if !slot.started && slot.effect.start.0 <= t.0 {
                events.push((slot.effect.start.0, slot.id.0, EVENT_START, idx));
            }
            if matches!(slot.effect.repeat, Repeat::Once)
                && !slot.completed
                && slot.effect.end().0 <= t.0
            {
                events.push((slot.effect.end().0, slot.id.0, EVENT_COMPLETE, idx));
            }
        }
        events.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

        for (_, _, kind, idx) in events {
            let slot = &mut self.slots[idx];
            match kind {
                EVENT_START => {
                    slot.started = true;
                    if let Some(cue) = &slot.effect.on_start {
                        apply_cue(stage, cue);
                    }
                    let captured = match stage.node(slot.effect.target) {
                        Some(node) => slot.effect.to.capture_base(&node.props),
                        None => slot.effect.to.clone(),
                    };
                    slot.base = match &slot.effect.from {
                        Some(from) => captured.overlay(from),
                        None => captured,
                    };
                    if let Some(from) = &slot.effect.from {
                        if let Some(node) = stage.node_mut(slot.effect.target) {
                            from.apply_to(&mut node.props);
                        }
                    }
                }
                _ => {
                    slot.completed = true;
                    if let Some(node) = stage.node_mut(slot.effect.target) {
                        slot.effect.to.apply_to(&mut node.props);
                    }
                    if let Some(cue) = &slot.effect.on_complete {
                        apply_cue(stage, cue);
                    }
                }
            }
        }

        // Apply interpolated values for windows still open at `t`, in
        // registration order.
        for slot in &mut self.slots {
            if !slot.started || slot.completed {
                continue;
            }
            let effect = &slot.effect;
            let elapsed = t.0 - effect.start.0;
            let progress = match effect.repeat {
                Repeat::Once => {
                    if t.0 >= effect.end().0 {
                        continue;
                    }
                    let frac = if effect.duration.0 <= 0.0 {
                        1.0
                    } else {
                        elapsed / effect.duration.0
                    };
                    effect.ease.apply(frac)
                }
                Repeat::Infinite { yoyo } => {
                    let cycles = elapsed / effect.duration.0;
                    let leg = cycles.floor();
                    let p = effect.ease.apply(cycles - leg);
                    if yoyo && (leg as u64) % 2 == 1 { 1.0 - p } else { p }
                }
            };
            let value = slot.base.lerp_toward(&effect.to, progress);
            if let Some(node) = stage.node_mut(effect.target) {
                value.apply_to(&mut node.props);
            }
        }

        self.now = t;
        Ok(())
    }

    /// Cancel every pending and in-flight effect immediately.
    ///
    /// Cancellation is global for the sequence: after this call no cue fires
    /// and no property is mutated, ever. Idempotent.
    pub fn kill(&mut self) {
        self.killed = true;
        self.slots.clear();
    }

    /// Return `true` once [`kill`](Timeline::kill) has been called.
    pub fn is_killed(&self) -> bool {
        self.killed
    }

    /// Current sequence time.
    pub fn now(&self) -> Seconds {
        self.now
    }

    /// Number of registered effects (zero after kill).
    pub fn effect_count(&self) -> usize {
        self.slots.len()
    }
}

fn apply_cue(stage: &mut Stage, cue: &CueAction) {
    match cue {
        CueAction::SetText { node, text } => {
            if !stage.set_text(*node, text) {
                tracing::warn!(node = node.0, "cue target missing, text cue dropped");
            }
        }
        CueAction::SetVisible { node, visible } => match stage.node_mut(*node) {
            Some(n) => n.props.visible = *visible,
            None => {
                tracing::warn!(node = node.0, "cue target missing, visibility cue dropped");
            }
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/engine.rs"]
mod tests;
