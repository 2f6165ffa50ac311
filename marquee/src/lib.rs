//! Marquee is a deterministic brand-reveal animation engine.
//!
//! It drives a scripted entrance narrative — title entrance, a cycle through
//! sub-brand labels, a closing message with a staggered icon-grid reveal, and
//! an indefinite breathing loop — against a headless stage of nodes, plus the
//! small amount of page-shell state the surrounding product needs.
//!
//! # Pipeline overview
//!
//! 1. **Stage**: build a [`Stage`] and register the nodes to animate
//! 2. **Compose**: [`BrandReveal::build`] precomputes the full schedule on a
//!    [`Timeline`]
//! 3. **Drive**: advance sequence time monotonically; the engine replays
//!    every boundary in order, so step size never changes what happens
//! 4. **Tear down**: killing the timeline cancels everything at once; no cue
//!    fires afterwards
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: scheduling and evaluation are pure for a
//!   given input; the caller owns the clock.
//! - **Cosmetic failures degrade**: a missing target node or a rejected
//!   effect downgrades to a logged warning, never an error that blocks the
//!   page.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;

/// Contact-page form state.
pub mod form;
/// The headless stage.
pub mod scene;
/// Scripted sequences.
pub mod sequence;
/// Page-shell lifecycle plumbing.
pub mod shell;
/// The timeline engine.
pub mod timeline;

pub use crate::animation::ease::Ease;
pub use crate::animation::tween::{Lerp, PropertyMap};
pub use crate::foundation::core::{EffectId, NodeId, Seconds, VisualProps};
pub use crate::foundation::error::{MarqueeError, MarqueeResult};

pub use crate::form::contact::{ContactForm, Dropdown, INTEREST_OPTIONS, Submission};
pub use crate::scene::node::{Node, Stage};
pub use crate::sequence::reveal::{
    BrandReveal, Phase, RevealConfig, RevealTargets, TextCue, build_stage,
};
pub use crate::shell::gate::AssetGate;
pub use crate::shell::lifecycle::MountedReveal;
pub use crate::shell::subscriptions::{EventBus, Subscription, UiEvent};
pub use crate::timeline::effect::{CueAction, Effect, Repeat};
pub use crate::timeline::engine::Timeline;
