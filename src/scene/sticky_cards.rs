use crate::foundation::math::clamp01;

/// Visual state of one pinned card while the next card approaches.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardFrame {
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees; sign alternates with card index parity.
    pub rotation_deg: f64,
    /// Opacity of the card's darkening overlay.
    pub after_opacity: f64,
}

impl CardFrame {
    /// The untouched resting state.
    pub fn resting() -> Self {
        Self {
            scale: 1.0,
            rotation_deg: 0.0,
            after_opacity: 0.0,
        }
    }
}

/// The pinned card-stack scene.
///
/// Every card except the last is pinned and recedes (scales down, tilts,
/// darkens) as its successor scrolls over it; the last card is never pinned
/// or animated. Each card consumes two independent progress feeds from the
/// host's scroll observer: the approach of the next card, and the card's own
/// pin span.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct StickyCards {
    card_count: usize,
}

impl StickyCards {
    /// Assemble the scene, or `None` when there are no cards.
    pub fn build(card_count: usize) -> Option<Self> {
        if card_count == 0 {
            tracing::warn!("sticky-cards scene skipped: no cards");
            return None;
        }
        Some(Self { card_count })
    }

    /// Number of cards in the stack.
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Whether `index` is the last (never-animated) card.
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.card_count
    }

    /// State of card `index` as the next card approaches.
    ///
    /// `approach` is the next card's trigger progress (0 when it enters the
    /// viewport bottom, 1 when it reaches the top).
    pub fn card(&self, index: usize, approach: f64) -> CardFrame {
        if self.is_last(index) {
            return CardFrame::resting();
        }
        let p = clamp01(approach);
        let direction = if index % 2 == 0 { 5.0 } else { -5.0 };
        CardFrame {
            scale: 1.0 - p * 0.25,
            rotation_deg: direction * p,
            after_opacity: p,
        }
    }

    /// Vertical slide of card `index`'s inner content over its pin span,
    /// in viewport-height units.
    ///
    /// Cards deeper in the stack slide further so their titles stay visible
    /// under the cards stacked on top.
    pub fn inner_offset_vh(&self, index: usize, pin_progress: f64) -> f64 {
        if self.is_last(index) {
            return 0.0;
        }
        -((self.card_count - index) as f64 * 8.0) * clamp01(pin_progress)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sticky_cards.rs"]
mod tests;
