use crate::{
    foundation::core::Seconds,
    foundation::error::MarqueeResult,
    scene::node::Stage,
    sequence::reveal::{BrandReveal, RevealConfig, RevealTargets},
};

/// Ties a [`BrandReveal`] to the page lifecycle: built on mount, torn down
/// on unmount — and on drop, so an instance that falls out of scope can
/// never leak a running breathing loop.
#[derive(Debug)]
pub struct MountedReveal {
    reveal: BrandReveal,
}

impl MountedReveal {
    /// Build the reveal for a freshly mounted page.
    pub fn mount(config: RevealConfig, targets: &RevealTargets) -> MarqueeResult<Self> {
        let reveal = BrandReveal::build(config, targets)?;
        tracing::debug!("brand reveal mounted");
        Ok(Self { reveal })
    }

    /// Advance the underlying sequence.
    pub fn advance_to(&mut self, t: Seconds, stage: &mut Stage) -> MarqueeResult<()> {
        self.reveal.advance_to(t, stage)
    }

    /// The mounted sequence.
    pub fn reveal(&self) -> &BrandReveal {
        &self.reveal
    }

    /// Tear the page down, cancelling all pending effects.
    pub fn unmount(mut self) {
        self.reveal.teardown();
        tracing::debug!("brand reveal unmounted");
    }
}

impl Drop for MountedReveal {
    fn drop(&mut self) {
        self.reveal.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/lifecycle.rs"]
mod tests;
