use crate::{
    animation::ease::Ease,
    foundation::{core::Progress, error::ChoreoResult},
    progress::{band::Band, stagger::windowed_local},
};

/// Setup inputs for [`HeroIntro`].
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct HeroIntroConfig {
    /// Number of characters in the hero header after splitting.
    pub header_char_count: usize,
    /// Number of characters in the site logo after splitting.
    pub logo_char_count: usize,
    /// Number of hero footer lines after splitting.
    pub footer_line_count: usize,
    /// Number of button label lines after splitting.
    pub label_line_count: usize,
}

/// Everything the hero intro wants on screen at one timeline position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeroIntroFrame {
    /// Per-character header offsets in percent (100 parked below the mask,
    /// 0 resting).
    pub header_chars: Vec<f64>,
    /// Site logo container opacity; snaps to 1 when its band starts.
    pub logo_opacity: f64,
    /// Per-character site logo offsets in percent.
    pub logo_chars: Vec<f64>,
    /// Per-line hero footer offsets in percent.
    pub footer_lines: Vec<f64>,
    /// Call-to-action button scale in `[0, 1]`.
    pub button_scale: f64,
    /// Button icon clip-circle radius in percent (0 hidden, 100 fully shown).
    pub button_clip_radius: f64,
    /// Per-line button label offsets in percent.
    pub label_lines: Vec<f64>,
}

/// The hero section's entrance choreography, taking over as the preloader
/// mask opens.
///
/// Driven by the same normalized clock timeline as [`crate::Preloader`]; the
/// host typically plays it over the preloader's tail. Pure in
/// `(timeline, setup constants)` like every scene.
#[derive(Clone, Debug)]
pub struct HeroIntro {
    header_char_count: usize,
    logo_char_count: usize,
    footer_line_count: usize,
    label_line_count: usize,
    header_in: Band<()>,
    logo_in: Band<()>,
    footer_in: Band<()>,
    button_in: Band<()>,
    icon_clip: Band<()>,
    labels_in: Band<()>,
}

impl HeroIntro {
    /// Assemble the scene, or `None` when the header split produced nothing.
    ///
    /// The other collections may be empty; their tracks then simply have no
    /// elements to drive.
    pub fn build(config: HeroIntroConfig) -> ChoreoResult<Option<Self>> {
        if config.header_char_count == 0 {
            tracing::warn!("hero intro skipped: header split produced no characters");
            return Ok(None);
        }

        Ok(Some(Self {
            header_char_count: config.header_char_count,
            logo_char_count: config.logo_char_count,
            footer_line_count: config.footer_line_count,
            label_line_count: config.label_line_count,
            header_in: Band::new(0.00, 0.45, ())?,
            logo_in: Band::new(0.05, 0.50, ())?,
            footer_in: Band::new(0.20, 0.65, ())?,
            button_in: Band::new(0.35, 0.80, ())?,
            icon_clip: Band::new(0.40, 0.85, ())?,
            labels_in: Band::new(0.40, 0.85, ())?,
        }))
    }

    /// Compute the full frame at a normalized timeline position.
    #[tracing::instrument(skip(self))]
    pub fn frame(&self, timeline: Progress) -> HeroIntroFrame {
        let t = timeline.clamped();

        HeroIntroFrame {
            header_chars: rise_track(self.header_in.local(t), 0.05, self.header_char_count),
            logo_opacity: if t >= self.logo_in.start { 1.0 } else { 0.0 },
            logo_chars: rise_track(self.logo_in.local(t), 0.05, self.logo_char_count),
            footer_lines: rise_track(self.footer_in.local(t), 0.1, self.footer_line_count),
            button_scale: Ease::OutQuint.apply(self.button_in.local(t)),
            button_clip_radius: 100.0 * Ease::OutCubic.apply(self.icon_clip.local(t)),
            label_lines: rise_track(self.labels_in.local(t), 0.1, self.label_line_count),
        }
    }
}

/// Staggered rise from 100% to 0% for one split collection.
fn rise_track(band_local: f64, step_delay: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let t = Ease::OutQuint.apply(windowed_local(band_local, i, step_delay, count));
            100.0 * (1.0 - t)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/hero_intro.rs"]
mod tests;
