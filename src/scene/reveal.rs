use crate::{
    animation::ease::Ease,
    foundation::{
        core::{Progress, TargetState, Vec3},
        error::{ChoreoError, ChoreoResult},
    },
    progress::{mapper::Segment, stagger::windowed_local},
    scene::sink::{SlotId, TargetSink},
};

/// Scroll-linked reveal of a split text block.
///
/// Each element rises from `y_from` to 0 while fading in, with an
/// index-based stagger normalized so the last element still lands exactly at
/// progress 1. With `step_delay` 0 this degrades to a plain single-element
/// reveal band.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Reveal {
    element_count: usize,
    step_delay: f64,
    segment: Segment,
}

impl Reveal {
    /// Assemble the scene, or `None` when the split produced no elements.
    ///
    /// Fails validation when the authored stagger cannot fit: the combined
    /// delay must leave a positive shared window.
    pub fn build(
        element_count: usize,
        step_delay: f64,
        y_from: f64,
        ease: Ease,
    ) -> ChoreoResult<Option<Self>> {
        if element_count == 0 {
            tracing::warn!("reveal scene skipped: no elements after split");
            return Ok(None);
        }
        if step_delay < 0.0 {
            return Err(ChoreoError::validation("Reveal step_delay must be >= 0"));
        }
        if step_delay * (element_count - 1) as f64 >= 1.0 {
            return Err(ChoreoError::validation(
                "Reveal stagger leaves no room for the per-element window",
            ));
        }
        let segment = Segment {
            from: TargetState {
                position: Vec3::new(0.0, y_from, 0.0),
                scale: 1.0,
                opacity: 0.0,
                color: None,
            },
            to: TargetState::identity(),
            ease,
        };
        Ok(Some(Self {
            element_count,
            step_delay,
            segment,
        }))
    }

    /// Number of revealed elements.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Target of element `index` at `progress`.
    pub fn element(&self, index: usize, progress: Progress) -> TargetState {
        let local = windowed_local(
            progress.clamped(),
            index,
            self.step_delay,
            self.element_count,
        );
        self.segment.sample(local)
    }

    /// Push every element's target into the host sink (slot `i` = element `i`).
    pub fn apply(&self, progress: Progress, sink: &mut dyn TargetSink) {
        for i in 0..self.element_count {
            sink.apply(SlotId(i), &self.element(i, progress));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/reveal.rs"]
mod tests;
