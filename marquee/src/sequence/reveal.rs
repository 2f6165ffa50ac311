use std::path::Path;

use crate::{
    animation::ease::Ease,
    animation::tween::PropertyMap,
    foundation::core::{NodeId, Seconds},
    foundation::error::{MarqueeError, MarqueeResult},
    scene::node::Stage,
    timeline::effect::{CueAction, Effect, Repeat},
    timeline::engine::Timeline,
};

// The reveal narrative, in seconds of sequence time. The label cadence is
// 0.3 fade-out + 0.4 fade-in + 0.05 display = 0.75 per label, with the first
// label appearing directly at 0.5.
const ENTRANCE_DURATION: f64 = 1.2;
const CYCLE_START: f64 = 0.5;
const LABEL_PERIOD: f64 = 0.75;
const LABEL_FADE_OUT: f64 = 0.3;
const LABEL_FADE_IN: f64 = 0.4;
const FIRST_LABEL_HOLD: f64 = 0.35;
const LABEL_HOLD: f64 = 0.05;
const FINAL_GAP: f64 = 0.1;
const CLOSING_FADE_IN: f64 = 0.8;
const GRID_FADE: f64 = 0.5;
const GRID_ITEM_FADE: f64 = 0.6;
const GRID_STAGGER: f64 = 0.1;
const BREATH_DELAY: f64 = 1.1;
const BREATH_HALF_PERIOD: f64 = 2.5;
const BREATH_SCALE: f64 = 1.03;
const BACK_OVERSHOOT: f64 = 1.2;

/// Configuration of one brand reveal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Headline brand name shown by the entrance.
    pub title: String,
    /// Sub-brand labels cycled in order. May be empty.
    pub labels: Vec<String>,
    /// Message the label node settles on once cycling ends.
    pub closing_message: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            title: "withFarook".to_owned(),
            labels: ["CODE", "NEXTGEN", "BRAND", "STORIES"]
                .map(str::to_owned)
                .to_vec(),
            closing_message: "Let's do it".to_owned(),
        }
    }
}

impl RevealConfig {
    /// Load a configuration from a JSON file. Missing fields fall back to
    /// the defaults.
    pub fn from_path(path: &Path) -> MarqueeResult<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| MarqueeError::serde(format!("read {}: {e}", path.display())))?;
        Self::from_json_str(&data)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> MarqueeResult<Self> {
        serde_json::from_str(json).map_err(|e| MarqueeError::serde(e.to_string()))
    }
}

/// Stage nodes the reveal animates.
///
/// Every target is optional: a missing node skips the phases that touch it
/// with a logged warning, because the sequence is purely cosmetic and must
/// never block the page.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealTargets {
    /// Headline node.
    pub title: Option<NodeId>,
    /// The single text node that cycles through labels.
    pub label: Option<NodeId>,
    /// Decorative grid container.
    pub grid: Option<NodeId>,
    /// Individual grid items, revealed with a stagger.
    pub grid_items: Vec<NodeId>,
}

/// Named stage of the reveal's state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Title entrance.
    Entrance,
    /// Cycling through the sub-brand labels.
    Cycling,
    /// Closing message and grid reveal.
    Finalizing,
    /// Indefinite breathing loop; only teardown ends it.
    IdleLoop,
}

/// A point in the schedule where the visible text changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextCue {
    /// The text that becomes visible.
    pub text: String,
    /// When it becomes visible.
    pub at: Seconds,
}

/// The scripted brand-reveal sequence.
///
/// `build` precomputes the entire schedule on one timeline; afterwards the
/// instance is driven by [`advance_to`](BrandReveal::advance_to) and ended by
/// [`teardown`](BrandReveal::teardown).
#[derive(Clone, Debug)]
pub struct BrandReveal {
    timeline: Timeline,
    config: RevealConfig,
    cues: Vec<TextCue>,
    final_start: Seconds,
    idle_start: Seconds,
}

impl BrandReveal {
    /// Compose the full reveal schedule for `config` against `targets`.
    #[tracing::instrument(skip_all, fields(labels = config.labels.len()))]
    pub fn build(config: RevealConfig, targets: &RevealTargets) -> MarqueeResult<Self> {
        let mut timeline = Timeline::new();
        let n = config.labels.len();
        let final_start = CYCLE_START + n as f64 * LABEL_PERIOD + FINAL_GAP;
        let closing_in_at = final_start + LABEL_FADE_OUT;
        let idle_start = closing_in_at + BREATH_DELAY;

        match targets.title {
            Some(title) => {
                schedule_or_warn(&mut timeline, Effect::from_to(
                    title,
                    PropertyMap::new().opacity(0.0).offset_y(50.0).scale(0.88),
                    PropertyMap::new().opacity(1.0).offset_y(0.0).scale(1.0),
                    Seconds::ZERO,
                    Seconds(ENTRANCE_DURATION),
                    Ease::OutQuart,
                ));
            }
            None => tracing::warn!("title node missing, entrance skipped"),
        }

        match targets.label {
            Some(label) => {
                Self::schedule_label_track(&mut timeline, &config, label, final_start);
            }
            None => tracing::warn!("label node missing, cycling and closing message skipped"),
        }

        match targets.grid {
            Some(grid) => {
                schedule_or_warn(
                    &mut timeline,
                    Effect::set(
                        grid,
                        PropertyMap::new().opacity(0.0).offset_y(30.0),
                        Seconds::ZERO,
                    )
                    .on_start(CueAction::SetVisible {
                        node: grid,
                        visible: false,
                    }),
                );
                schedule_or_warn(
                    &mut timeline,
                    Effect::to(
                        grid,
                        PropertyMap::new().opacity(1.0).offset_y(0.0),
                        Seconds(closing_in_at),
                        Seconds(GRID_FADE),
                        Ease::OutCubic,
                    )
                    .on_start(CueAction::SetVisible {
                        node: grid,
                        visible: true,
                    }),
                );
            }
            None => tracing::warn!("grid node missing, grid reveal skipped"),
        }

        if targets.grid_items.is_empty() {
            tracing::debug!("no grid items, item stagger skipped");
        } else {
            for &item in &targets.grid_items {
                schedule_or_warn(&mut timeline, Effect::set(
                    item,
                    PropertyMap::new().opacity(0.0).offset_y(20.0).scale(0.8),
                    Seconds::ZERO,
                ));
            }
            if let Err(err) = timeline.schedule_staggered(
                &targets.grid_items,
                &Effect::to(
                    targets.grid_items[0],
                    PropertyMap::new().opacity(1.0).offset_y(0.0).scale(1.0),
                    Seconds(closing_in_at),
                    Seconds(GRID_ITEM_FADE),
                    Ease::OutBack {
                        overshoot: BACK_OVERSHOOT,
                    },
                ),
                Seconds(GRID_STAGGER),
            ) {
                tracing::warn!(%err, "grid item stagger rejected, skipped");
            }
        }

        let mut cues = Vec::with_capacity(n + 1);
        for (i, label) in config.labels.iter().enumerate() {
            let start = CYCLE_START + i as f64 * LABEL_PERIOD;
            let at = if i == 0 { start } else { start + LABEL_FADE_OUT };
            cues.push(TextCue {
                text: label.clone(),
                at: Seconds(at),
            });
        }
        cues.push(TextCue {
            text: config.closing_message.clone(),
            at: Seconds(closing_in_at),
        });

        Ok(Self {
            timeline,
            config,
            cues,
            final_start: Seconds(final_start),
            idle_start: Seconds(idle_start),
        })
    }

    /// Schedule everything that touches the label node: the cycling phase,
    /// the closing message, and the breathing loop.
    fn schedule_label_track(
        timeline: &mut Timeline,
        config: &RevealConfig,
        label: NodeId,
        final_start: f64,
    ) {
        let fade_out_to = PropertyMap::new().opacity(0.0).offset_y(-15.0).scale(1.08);
        let fade_in_from = PropertyMap::new().opacity(0.0).offset_y(25.0).scale(0.92);
        let fade_in_to = PropertyMap::new().opacity(1.0).offset_y(0.0).scale(1.0);

        schedule_or_warn(timeline, Effect::set(
            label,
            PropertyMap::new().opacity(0.0).offset_y(30.0).scale(0.9),
            Seconds::ZERO,
        ));

        for (i, text) in config.labels.iter().enumerate() {
            let start = CYCLE_START + i as f64 * LABEL_PERIOD;
            let swap = CueAction::SetText {
                node: label,
                text: text.clone(),
            };
            if i == 0 {
                // First label enters directly; there is nothing to fade out.
                schedule_or_warn(
                    timeline,
                    Effect::from_to(
                        label,
                        fade_in_from.clone(),
                        fade_in_to.clone(),
                        Seconds(start),
                        Seconds(LABEL_FADE_IN),
                        Ease::OutCubic,
                    )
                    .on_start(swap),
                );
                schedule_or_warn(timeline, Effect::hold(
                    label,
                    Seconds(start + LABEL_FADE_IN),
                    Seconds(FIRST_LABEL_HOLD),
                ));
            } else {
                // The text swaps exactly when the previous label finishes
                // fading out.
                schedule_or_warn(
                    timeline,
                    Effect::to(
                        label,
                        fade_out_to.clone(),
                        Seconds(start),
                        Seconds(LABEL_FADE_OUT),
                        Ease::InQuad,
                    )
                    .on_complete(swap),
                );
                schedule_or_warn(timeline, Effect::from_to(
                    label,
                    fade_in_from.clone(),
                    fade_in_to.clone(),
                    Seconds(start + LABEL_FADE_OUT),
                    Seconds(LABEL_FADE_IN),
                    Ease::OutCubic,
                ));
                schedule_or_warn(timeline, Effect::hold(
                    label,
                    Seconds(start + LABEL_FADE_OUT + LABEL_FADE_IN),
                    Seconds(LABEL_HOLD),
                ));
            }
        }

        let closing_in_at = final_start + LABEL_FADE_OUT;
        schedule_or_warn(
            timeline,
            Effect::to(
                label,
                fade_out_to,
                Seconds(final_start),
                Seconds(LABEL_FADE_OUT),
                Ease::InQuad,
            )
            .on_complete(CueAction::SetText {
                node: label,
                text: config.closing_message.clone(),
            }),
        );
        schedule_or_warn(timeline, Effect::from_to(
            label,
            PropertyMap::new().opacity(0.0).offset_y(30.0).scale(0.88),
            fade_in_to,
            Seconds(closing_in_at),
            Seconds(CLOSING_FADE_IN),
            Ease::OutBack {
                overshoot: BACK_OVERSHOOT,
            },
        ));
        schedule_or_warn(
            timeline,
            Effect::to(
                label,
                PropertyMap::new().scale(BREATH_SCALE),
                Seconds(closing_in_at + BREATH_DELAY),
                Seconds(BREATH_HALF_PERIOD),
                Ease::InOutSine,
            )
            .repeat(Repeat::Infinite { yoyo: true }),
        );
    }

    /// Advance the sequence to `t`, mutating `stage`.
    pub fn advance_to(&mut self, t: Seconds, stage: &mut Stage) -> MarqueeResult<()> {
        self.timeline.advance_to(t, stage)
    }

    /// Cancel every scheduled and in-flight effect. After this call the
    /// sequence never mutates anything again. Idempotent.
    pub fn teardown(&mut self) {
        self.timeline.kill();
    }

    /// Return `true` once [`teardown`](BrandReveal::teardown) has run.
    pub fn is_torn_down(&self) -> bool {
        self.timeline.is_killed()
    }

    /// The phase the sequence is in at time `t`.
    pub fn phase_at(&self, t: Seconds) -> Phase {
        if t.0 >= self.idle_start.0 {
            Phase::IdleLoop
        } else if t.0 >= self.final_start.0 {
            Phase::Finalizing
        } else if !self.config.labels.is_empty() && t.0 >= CYCLE_START {
            Phase::Cycling
        } else {
            Phase::Entrance
        }
    }

    /// When the finalizing phase begins.
    pub fn final_start(&self) -> Seconds {
        self.final_start
    }

    /// When the breathing loop begins.
    pub fn idle_start(&self) -> Seconds {
        self.idle_start
    }

    /// Every visible-text change in the schedule, in order: each label once,
    /// then the closing message.
    pub fn cue_sheet(&self) -> &[TextCue] {
        &self.cues
    }

    /// The configuration this reveal was built from.
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }
}

/// Register one cosmetic effect, downgrading rejection to a warning: failure
/// to animate must never block the page.
fn schedule_or_warn(timeline: &mut Timeline, effect: Effect) {
    if let Err(err) = timeline.schedule(effect) {
        tracing::warn!(%err, "effect rejected, step skipped");
    }
}

/// Create a stage holding the nodes a reveal needs: title, label, grid, and
/// one grid item per label.
pub fn build_stage(config: &RevealConfig) -> (Stage, RevealTargets) {
    let mut stage = Stage::new();
    let title = stage.add_text_node("title", &config.title);
    let label = stage.add_node("sub-brand");
    let grid = stage.add_node("grid");
    let grid_items = config
        .labels
        .iter()
        .enumerate()
        .map(|(i, text)| stage.add_text_node(format!("grid-item-{i}"), text))
        .collect();
    (
        stage,
        RevealTargets {
            title: Some(title),
            label: Some(label),
            grid: Some(grid),
            grid_items,
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/reveal.rs"]
mod tests;
